//! Forecast command implementation.

use crate::{Format, SourceArgs, data};
use anyhow::Result;
use tenet_eval::EarningsForecast;
use tenet_traits::EquityData;

/// Print the net income history and the next fiscal year's estimate.
pub(crate) async fn forecast(id: &str, format: Format, source: &SourceArgs) -> Result<()> {
    let config = data::load_config(source)?;
    let tr = data::language(source);
    let equity = data::load_equity(id, source, &config, &tr).await?;
    let forecast = EarningsForecast::from_equity(&equity)?;

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&forecast)?),
        Format::Text => {
            println!("\n{} ({})", equity.name(), equity.symbol());
            println!("{}", "━".repeat(62));
            println!("{}\n", forecast.render(&tr));
        }
    }

    Ok(())
}
