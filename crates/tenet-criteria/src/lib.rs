//! Investor philosophies for the tenet framework.
//!
//! This crate provides the rule sets evaluated against an equity:
//! - Value: Warren Buffett's durable-competitive-advantage checks
//! - Growth: Jim Slater's small-cap growth checks
//! - Momentum: Chris Mayer's 100-bagger screen
//!
//! Every philosophy is a [`check::Catalogue`] of independent checks. A check
//! whose inputs are missing is skipped, never failed.
//!
//! # Example
//!
//! ```ignore
//! use tenet_criteria::registry::{CriteriaConfig, create_philosophy};
//! use tenet_traits::Language;
//!
//! let philosophy = create_philosophy("value", &CriteriaConfig::default())?;
//! let assessment = philosophy.evaluate(&equity, &Language::English);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod growth;
pub mod momentum;
pub mod rates;
pub mod registry;
pub mod value;

// Re-export key types
pub use check::{Catalogue, Check, Inputs, Outcome, Requirement};
pub use registry::{CriteriaConfig, PhilosophyInfo, PhilosophyStyle};
