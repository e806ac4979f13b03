//! On-disk JSON cache of downloaded equities.
//!
//! One file per symbol, `<dir>/<SYMBOL>.json`, holding an [`EquitySnapshot`].
//! A missing file means the data must be fetched.

use crate::Result;
use chrono::Local;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tenet_traits::{Equity, EquitySnapshot, ScrapedEquity};
use tracing::{debug, info};

/// Directory of cached equity snapshots.
#[derive(Debug, Clone)]
pub struct EquityCache {
    dir: PathBuf,
}

impl EquityCache {
    /// Cache rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the snapshot of `symbol`.
    #[must_use]
    pub fn path(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}.json", symbol.to_uppercase()))
    }

    /// Load a cached equity, `None` when nothing is cached for the symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache file exists but cannot be read or parsed.
    pub fn load(&self, symbol: &str) -> Result<Option<Equity>> {
        let path = self.path(symbol);
        if !path.exists() {
            debug!(symbol, path = %path.display(), "cache miss");
            return Ok(None);
        }
        info!(symbol, path = %path.display(), "loading cached company data");
        Ok(Some(read_snapshot(&path)?))
    }

    /// Write the equity's snapshot, stamped with today's date.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn store(&self, equity: &Equity) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let mut snapshot = equity.snapshot();
        snapshot.as_of = Some(Local::now().date_naive());
        let path = self.path(&snapshot.symbol);
        std::fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
        info!(symbol = %snapshot.symbol, path = %path.display(), "cached company data");
        Ok(path)
    }
}

/// Files accepted by [`read_snapshot`].
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Stores(EquitySnapshot),
    Scraped(ScrapedEquity),
}

/// Read an equity from a snapshot file: a cache entry, or an offline export
/// of scraped statement tables.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is neither form, or holds a
/// malformed statement.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Equity> {
    let text = std::fs::read_to_string(path)?;
    let equity = match serde_json::from_str(&text)? {
        SnapshotFile::Stores(snapshot) => Equity::from_snapshot(snapshot)?,
        SnapshotFile::Scraped(scraped) => scraped.into_equity()?,
    };
    Ok(equity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FmpError;
    use tenet_traits::{Date, EquityData, Metric, StatementKind, StatementStore};

    fn equity() -> Equity {
        let income = StatementStore::builder(StatementKind::IncomeStatement)
            .periods([
                Date::from_ymd_opt(2023, 12, 31).unwrap(),
                Date::from_ymd_opt(2022, 12, 31).unwrap(),
            ])
            .metric("Net Income", [Some(120.0), None])
            .build()
            .unwrap();
        Equity::new("acme", "Acme Corp", 10.0)
            .with_market_cap(Some(1e9))
            .with_statement(income)
    }

    #[test]
    fn test_miss_then_hit() {
        let dir = tempfile::tempdir().unwrap();
        let cache = EquityCache::new(dir.path().join("cache"));
        assert!(cache.load("ACME").unwrap().is_none());

        let path = cache.store(&equity()).unwrap();
        assert_eq!(path, cache.dir().join("ACME.json"));

        let loaded = cache.load("acme").unwrap().unwrap();
        assert_eq!(loaded.name(), "Acme Corp");
        assert_eq!(loaded.market_cap(), Some(1e9));
        assert_eq!(
            loaded.history(Metric::NetIncome).unwrap().values(),
            &[Some(120.0), None]
        );
    }

    #[test]
    fn test_snapshot_is_stamped() {
        let dir = tempfile::tempdir().unwrap();
        let cache = EquityCache::new(dir.path());
        let path = cache.store(&equity()).unwrap();
        let snapshot: EquitySnapshot =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert!(snapshot.as_of.is_some());
    }

    #[test]
    fn test_scraped_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acme.json");
        std::fs::write(
            &path,
            r#"{
                "symbol": "ACME",
                "name": "Acme Corp",
                "price": 10.0,
                "market_cap": 5e8,
                "tables": [{
                    "kind": "income_statement",
                    "headers": ["202331/12", "202231/12"],
                    "rows": [{"label": "Net Income", "cells": ["12", "10"]}]
                }]
            }"#,
        )
        .unwrap();

        let equity = read_snapshot(&path).unwrap();
        assert_eq!(equity.market_cap(), Some(5e8));
        assert_eq!(
            equity.history(Metric::NetIncome).unwrap().values(),
            &[Some(12e6), Some(10e6)]
        );
    }

    #[test]
    fn test_corrupt_entry() {
        let dir = tempfile::tempdir().unwrap();
        let cache = EquityCache::new(dir.path());
        std::fs::write(cache.path("ACME"), "not json").unwrap();
        assert!(matches!(cache.load("ACME"), Err(FmpError::Json(_))));
    }
}
