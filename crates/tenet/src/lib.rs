#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tenet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # tenet
//!
//! tenet is an umbrella crate that re-exports all tenet sub-crates for
//! convenience.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tenet::prelude::*;
//! use tenet::fmp::FmpClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let equity = FmpClient::from_env()?
//!     .fundamental_data("AAPL", 5)
//!     .await?
//!     .to_equity()?;
//!
//! let evaluator = Evaluator::new(&TenetConfig::default());
//! print!("{}", evaluator.render_text(&equity, &Language::English));
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Data model ([`Equity`], [`StatementStore`], [`Philosophy`], ...)
//! - [`criteria`] - The investor rule sets and their registry
//! - [`eval`] - Verdicts, reports, earnings forecast and key ratios
//! - [`fmp`] - Financial Modeling Prep source, ISIN directory and cache

/// Version information for the tenet crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core types and traits.
///
/// - [`Equity`] / [`EquityData`] - a company and its four statements
/// - [`StatementStore`] - one statement as a most-recent-first time series
/// - [`Philosophy`] - an investor rule set
/// - [`Translator`] - message catalogue used in rendered text
pub mod traits {
    pub use tenet_traits::*;
}

pub use tenet_traits::{
    Assessment, Equity, EquityData, Language, Metric, Philosophy, Result, StatementKind,
    StatementStore, TenetError, Translator,
};

// ============================================================================
// Rule Sets
// ============================================================================

/// Investor philosophies.
///
/// ## Available Philosophies
///
/// - **Buffett** (value): margins, overhead, interest, earnings trend,
///   liquidity, capital intensity and debt
/// - **Slater** (growth): market cap band, earnings growth, ROCE, quick ratio
/// - **Mayer** (momentum): the 100-bagger profile
///
/// # Example
///
/// ```ignore
/// use tenet::criteria::registry::{CriteriaConfig, create_philosophy};
///
/// let philosophy = create_philosophy("growth", &CriteriaConfig::default())?;
/// assert_eq!(philosophy.investor(), "Jim Slater");
/// ```
pub mod criteria {
    pub use tenet_criteria::*;
}

// ============================================================================
// Scoring and Reports
// ============================================================================

/// Scoring and reports.
///
/// ```text
/// score = approved * 10 / evaluated
/// ```
///
/// - ratio > 0.7: meets most of the criteria
/// - 0.5 < ratio < 0.7: meets some of the criteria (bounds per [`eval::BandPolicy`])
/// - otherwise: does not meet the criteria
pub mod eval {
    pub use tenet_eval::*;
}

pub use tenet_eval::{Evaluator, TenetConfig, Verdict};

// ============================================================================
// Data Providers
// ============================================================================

/// Financial Modeling Prep (FMP) statement source.
///
/// ## Setup
///
/// 1. Get a free API key at <https://financialmodelingprep.com/>
/// 2. Set the `FMP_API_KEY` environment variable or add to `.env` file
pub mod fmp {
    pub use tenet_fmp::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use tenet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Equity, EquityData, Evaluator, Language, Philosophy, Result, TenetConfig, TenetError,
        Translator, Verdict,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        fn _accept_philosophy(_philosophy: &dyn Philosophy) {}
        fn _accept_equity(_equity: &dyn EquityData) {}
        fn _accept_translator(_tr: &dyn Translator) {}

        let _result: Result<()> = Ok(());
        let _error = TenetError::InvalidData("test".to_string());
    }

    #[test]
    fn test_umbrella_evaluates() {
        let equity = Equity::new("ACME", "Acme Corp", 1.0);
        let evaluator = Evaluator::new(&TenetConfig::default());
        assert!(evaluator.verdicts(&equity, &Language::English).is_empty());
        assert_eq!(criteria::registry::available_philosophies().len(), 3);
    }
}
