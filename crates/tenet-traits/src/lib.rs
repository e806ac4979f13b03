#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tenet/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]

//! Core trait definitions for the Tenet stock evaluation framework.
//!
//! This crate provides the data model shared by every other crate: statement
//! stores, the equity aggregate, the philosophy abstraction and the
//! translation hook.

/// The version of the tenet-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod assessment;
pub mod equity;
pub mod error;
pub mod philosophy;
pub mod statement;
pub mod stats;
pub mod table;
pub mod translate;
pub mod types;

// Re-exports
pub use assessment::{Assessment, CriterionResult, Grade, bullet_block};
pub use equity::{Equity, EquityData, EquitySnapshot};
pub use error::{Result, TenetError};
pub use philosophy::Philosophy;
pub use statement::{MetricSeries, StatementBuilder, StatementSnapshot, StatementStore};
pub use stats::{TrendEstimate, linear_trend};
pub use table::{RawTable, RowExport, ScrapedEquity, TableExport};
pub use translate::{Language, Translator};
pub use types::{Chronology, Date, Metric, Scale, StatementKind, Symbol};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
