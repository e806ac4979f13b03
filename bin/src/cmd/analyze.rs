//! Analyze command implementation.

use crate::{Bands, Format, SourceArgs, data};
use anyhow::Result;
use tenet_eval::Evaluator;
use tenet_traits::EquityData;

/// Evaluate a company against the selected philosophies.
pub(crate) async fn analyze(
    id: &str,
    philosophies: &[String],
    bands: Option<Bands>,
    format: Format,
    source: &SourceArgs,
) -> Result<()> {
    let mut config = data::load_config(source)?;
    if let Some(bands) = bands {
        config = config.with_bands(bands.into());
    }
    let tr = data::language(source);

    // Fail on an unknown philosophy before any download
    let evaluator = Evaluator::with_philosophies(&config, philosophies)?;
    let equity = data::load_equity(id, source, &config, &tr).await?;

    match format {
        Format::Json => println!("{}", evaluator.render_json(&equity, &tr)?),
        Format::Text => {
            println!("\n╔══════════════════════════════════════════════════════════════╗");
            println!("║{:^62}║", format!("{} ({})", equity.name(), equity.symbol()));
            println!("╚══════════════════════════════════════════════════════════════╝");
            print!("{}", evaluator.render_text(&equity, &tr));
            println!();
        }
    }

    Ok(())
}
