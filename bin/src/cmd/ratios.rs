//! Ratios command implementation.

use crate::{Format, SourceArgs, data};
use anyhow::Result;
use tenet_eval::{KeyRatios, millify};
use tenet_traits::{EquityData, Translator};

/// Print the key ratios of a company with their grades.
pub(crate) async fn ratios(id: &str, format: Format, source: &SourceArgs) -> Result<()> {
    let config = data::load_config(source)?;
    let tr = data::language(source);
    let equity = data::load_equity(id, source, &config, &tr).await?;
    let ratios = KeyRatios::compute(&equity);

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&ratios)?),
        Format::Text => {
            println!("\n{} ({})", equity.name(), equity.symbol());
            println!("{}", "━".repeat(62));
            if let Some(cap) = equity.market_cap() {
                println!("{}: {}", tr.translate("Market capitalization"), millify(cap));
            }
            println!("{}\n", ratios.render(&tr));
        }
    }

    Ok(())
}
