//! Data loading utilities for the Tenet CLI.

use crate::SourceArgs;
use anyhow::{Context, Result};
use tenet_eval::TenetConfig;
use tenet_fmp::{EquityCache, FmpClient, IsinDirectory, read_snapshot};
use tenet_traits::{Equity, Language, Translator};
use tracing::debug;

/// Settings file if given, defaults otherwise.
pub(crate) fn load_config(source: &SourceArgs) -> Result<TenetConfig> {
    match &source.config {
        Some(path) => TenetConfig::load(path)
            .with_context(|| format!("cannot read settings file {}", path.display())),
        None => Ok(TenetConfig::default()),
    }
}

/// Report language, English for unknown codes.
pub(crate) fn language(source: &SourceArgs) -> Language {
    Language::from_code_or_default(&source.language)
}

/// Resolve a ticker or ISIN to the ticker used by the data source.
pub(crate) fn resolve(id: &str, source: &SourceArgs) -> Result<String> {
    let directory = match &source.isin_directory {
        Some(path) => IsinDirectory::load(path)
            .with_context(|| format!("cannot read ISIN directory {}", path.display()))?,
        None => IsinDirectory::new(),
    };
    Ok(directory.resolve(id)?)
}

/// Load the company designated by `id`.
///
/// Order of precedence: the offline snapshot file, then the cache unless an
/// update is requested, then a download which refreshes the cache.
pub(crate) async fn load_equity(
    id: &str,
    source: &SourceArgs,
    config: &TenetConfig,
    tr: &dyn Translator,
) -> Result<Equity> {
    if let Some(path) = &source.offline {
        debug!(path = %path.display(), "reading offline snapshot");
        return read_snapshot(path)
            .with_context(|| format!("cannot read snapshot {}", path.display()));
    }

    let symbol = resolve(id, source)?;
    let cache = EquityCache::new(&source.cache_dir);

    if !source.update
        && let Some(equity) = cache.load(&symbol)?
    {
        eprintln!("{}", tr.translate("Loading cached company's data..."));
        return Ok(equity);
    }

    eprintln!("{}", tr.translate("Downloading the company's data..."));
    let client = FmpClient::from_env()?;
    let periods = u32::try_from(config.periods).unwrap_or(u32::MAX);
    let equity = client.fundamental_data(&symbol, periods).await?.to_equity()?;
    cache.store(&equity)?;
    eprintln!("{}", tr.translate("Successfully downloaded the company's data"));

    Ok(equity)
}
