//! Philosophies command implementation.

use anyhow::{Result, bail};
use tenet_criteria::{
    CriteriaConfig, PhilosophyStyle,
    registry::{available_philosophies, create_philosophy, philosophies_by_style},
};

const STYLES: [(PhilosophyStyle, &str); 3] = [
    (PhilosophyStyle::Value, "Value"),
    (PhilosophyStyle::Growth, "Growth"),
    (PhilosophyStyle::Momentum, "Momentum"),
];

/// List the registered philosophies, optionally for one style.
pub(crate) fn list_philosophies(style: Option<&str>, details: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Available Philosophies                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if let Some(filter) = style
        && !STYLES
            .iter()
            .any(|(_, name)| name.eq_ignore_ascii_case(filter))
    {
        bail!("unknown style '{filter}', expected value, growth or momentum");
    }

    let config = CriteriaConfig::default();
    for (cat, cat_name) in STYLES {
        if let Some(filter) = style
            && !cat_name.eq_ignore_ascii_case(filter)
        {
            continue;
        }

        println!("{cat_name}: {}", cat.description());
        println!("{}", "-".repeat(60));

        for info in philosophies_by_style(&cat) {
            println!(
                "  {:10} {:16} {} checks",
                info.name, info.investor, info.checks
            );
            if details {
                println!("    {}", info.description);
                println!("    aliases: {}", info.aliases.join(", "));
                let philosophy = create_philosophy(info.name, &config)?;
                let metrics: Vec<String> = philosophy
                    .required_metrics()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                println!("    reads: {}", metrics.join(", "));
                if info.uses_market_cap {
                    println!("    reads: market capitalization");
                }
            }
        }
        println!();
    }

    if !details {
        println!("Use --details for checks, aliases and the data each philosophy reads.\n");
    }
    println!("{} philosophies registered.\n", available_philosophies().len());

    Ok(())
}
