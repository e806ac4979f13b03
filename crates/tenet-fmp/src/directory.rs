//! Identifier resolution.
//!
//! Users may designate a company by ticker or by ISIN. FMP is queried by
//! ticker, so ISINs go through a directory mapping each ISIN to its ticker.
//! The directory is a JSON object:
//!
//! ```json
//! { "US0378331005": "AAPL", "FR0000120271": "TTE.PA" }
//! ```

use crate::Result;
use std::{collections::HashMap, path::Path};
use tenet_traits::{Symbol, TenetError};
use tracing::debug;

/// Whether `id` has the shape of an ISIN: two letters, nine alphanumerics
/// and a check digit.
#[must_use]
pub fn is_isin(id: &str) -> bool {
    let bytes = id.as_bytes();
    bytes.len() == 12
        && bytes[..2].iter().all(u8::is_ascii_alphabetic)
        && bytes[2..11].iter().all(u8::is_ascii_alphanumeric)
        && bytes[11].is_ascii_digit()
}

/// ISIN to ticker directory.
#[derive(Debug, Clone, Default)]
pub struct IsinDirectory {
    tickers: HashMap<String, Symbol>,
}

impl IsinDirectory {
    /// Empty directory: tickers resolve, ISINs do not.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory from `(isin, ticker)` pairs.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Symbol>,
    {
        Self {
            tickers: pairs
                .into_iter()
                .map(|(isin, ticker)| (isin.as_ref().to_uppercase(), ticker.into()))
                .collect(),
        }
    }

    /// Load a JSON directory file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON object of
    /// strings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let map: HashMap<String, Symbol> = serde_json::from_str(&text)?;
        debug!(path = %path.as_ref().display(), entries = map.len(), "loaded ISIN directory");
        Ok(Self::from_pairs(map))
    }

    /// Number of known ISINs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    /// Whether no ISIN is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Resolve a user-supplied identifier to an upper-case ticker.
    ///
    /// ISIN-shaped identifiers are looked up; anything else is taken as a
    /// ticker.
    ///
    /// # Errors
    ///
    /// Returns [`TenetError::UnknownIdentifier`] for an ISIN missing from the
    /// directory, or an empty identifier.
    pub fn resolve(&self, id: &str) -> Result<Symbol> {
        let id = id.trim().to_uppercase();
        if id.is_empty() {
            return Err(TenetError::UnknownIdentifier("empty identifier".to_string()).into());
        }
        if !is_isin(&id) {
            return Ok(id);
        }
        self.tickers
            .get(&id)
            .map(|ticker| ticker.to_uppercase())
            .ok_or_else(|| TenetError::UnknownIdentifier(id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FmpError;

    #[test]
    fn test_isin_shape() {
        assert!(is_isin("US0378331005"));
        assert!(is_isin("FR0000120271"));
        assert!(!is_isin("AAPL"));
        assert!(!is_isin("US037833100X"));
        assert!(!is_isin("1S0378331005"));
    }

    #[test]
    fn test_resolve() {
        let directory = IsinDirectory::from_pairs([("us0378331005", "aapl")]);
        assert_eq!(directory.resolve("US0378331005").unwrap(), "AAPL");
        assert_eq!(directory.resolve(" msft ").unwrap(), "MSFT");

        let err = directory.resolve("FR0000120271").unwrap_err();
        assert!(matches!(err, FmpError::Core(TenetError::UnknownIdentifier(_))));
        assert!(directory.resolve("  ").is_err());
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("isin.json");
        std::fs::write(&path, r#"{"FR0000120271": "TTE.PA"}"#).unwrap();

        let directory = IsinDirectory::load(&path).unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.resolve("fr0000120271").unwrap(), "TTE.PA");

        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(IsinDirectory::load(&path), Err(FmpError::Json(_))));
    }
}
