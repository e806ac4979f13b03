//! Scoring and reporting for tenet.
//!
//! This crate turns philosophy assessments into something a reader can act on:
//! - Verdicts: the 0 to 10 recommendation and its qualitative band
//! - Reports: the plain-text block and the JSON document
//! - Earnings forecast from the three-anchor trend estimator
//! - Key-ratio summary with qualitative grades
//!
//! # Example
//!
//! ```rust,ignore
//! use tenet_eval::{Evaluator, TenetConfig};
//! use tenet_traits::Language;
//!
//! let evaluator = Evaluator::with_philosophies(&TenetConfig::default(), &["value"])?;
//! print!("{}", evaluator.render_text(&equity, &Language::English));
//! ```

pub mod config;
pub mod evaluator;
pub mod forecast;
pub mod metrics;
pub mod report;
pub mod verdict;

// Re-export main types
pub use config::TenetConfig;
pub use evaluator::Evaluator;
pub use forecast::{EarningsForecast, millify};
pub use metrics::{KeyRatio, KeyRatios, RatioUnit};
pub use report::{JsonReport, render_assessment, render_text};
pub use verdict::{Band, BandPolicy, Verdict, score};
