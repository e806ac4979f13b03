//! Philosophy registry for discovering and constructing the rule sets.
//!
//! This module provides metadata about every philosophy shipped with
//! tenet-criteria and builds them by name or alias.

use crate::{
    growth::{Slater, SlaterConfig},
    momentum::{Mayer, MayerConfig},
    value::{Buffett, BuffettConfig},
};
use serde::{Deserialize, Serialize};
use tenet_traits::{Philosophy, Result, TenetError};

/// Investment style classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhilosophyStyle {
    /// Buying quality businesses below their worth
    Value,
    /// Buying fast, profitable growers
    Growth,
    /// Buying small companies early in a compounding run
    Momentum,
}

impl PhilosophyStyle {
    /// Get a human-readable description of the style.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Value => "Durable competitive advantage at a sensible price",
            Self::Growth => "Quality small caps with strong earnings growth",
            Self::Momentum => "Small, reasonably valued companies with compounding potential",
        }
    }
}

/// Metadata about a philosophy.
#[derive(Debug, Clone, Serialize)]
pub struct PhilosophyInfo {
    /// Unique identifier
    pub name: &'static str,

    /// Investor the rules are attributed to
    pub investor: &'static str,

    /// Style classification
    pub style: PhilosophyStyle,

    /// Human-readable description
    pub description: &'static str,

    /// Other names accepted on the command line
    pub aliases: &'static [&'static str],

    /// Number of checks in the catalogue
    pub checks: usize,

    /// Whether a check needs the market capitalization
    pub uses_market_cap: bool,
}

impl PhilosophyInfo {
    /// Whether `name` designates this philosophy (case-insensitive).
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.name == name || self.aliases.iter().any(|a| *a == name)
    }
}

/// Thresholds of every philosophy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaConfig {
    /// Value thresholds.
    pub buffett: BuffettConfig,
    /// Growth thresholds.
    pub slater: SlaterConfig,
    /// Momentum bounds.
    pub mayer: MayerConfig,
}

/// Get information about all available philosophies.
#[must_use]
pub fn available_philosophies() -> Vec<PhilosophyInfo> {
    vec![
        PhilosophyInfo {
            name: Buffett::NAME,
            investor: "Warren Buffett",
            style: PhilosophyStyle::Value,
            description: "Margins, overhead, interest, earnings trend, liquidity, capital needs and debt",
            aliases: &["value", "buffet", "warren_buffett"],
            checks: 12,
            uses_market_cap: false,
        },
        PhilosophyInfo {
            name: Slater::NAME,
            investor: "Jim Slater",
            style: PhilosophyStyle::Growth,
            description: "Small caps with earnings growth above 15%, ROCE above 20% and quick ratio above 1",
            aliases: &["growth", "quality", "jim_slater"],
            checks: 4,
            uses_market_cap: true,
        },
        PhilosophyInfo {
            name: Mayer::NAME,
            investor: "Chris Mayer",
            style: PhilosophyStyle::Momentum,
            description: "100-bagger profile: market cap, revenue and price to sales bands",
            aliases: &["momentum", "100-bagger", "chris_mayer"],
            checks: 1,
            uses_market_cap: true,
        },
    ]
}

/// Get all philosophies of a given style.
#[must_use]
pub fn philosophies_by_style(style: &PhilosophyStyle) -> Vec<PhilosophyInfo> {
    available_philosophies()
        .into_iter()
        .filter(|info| &info.style == style)
        .collect()
}

/// Get information about a philosophy by name or alias.
#[must_use]
pub fn get_philosophy_info(name: &str) -> Option<PhilosophyInfo> {
    available_philosophies()
        .into_iter()
        .find(|info| info.matches(name))
}

/// Build a philosophy by name or alias.
///
/// # Errors
///
/// Returns [`TenetError::PhilosophyNotFound`] for an unknown name.
pub fn create_philosophy(name: &str, config: &CriteriaConfig) -> Result<Box<dyn Philosophy>> {
    let info =
        get_philosophy_info(name).ok_or_else(|| TenetError::PhilosophyNotFound(name.to_string()))?;
    Ok(match info.name {
        Buffett::NAME => Box::new(Buffett::new(config.buffett)),
        Slater::NAME => Box::new(Slater::new(config.slater)),
        Mayer::NAME => Box::new(Mayer::new(config.mayer)),
        other => return Err(TenetError::PhilosophyNotFound(other.to_string())),
    })
}

/// Build every philosophy, in registry order.
#[must_use]
pub fn all_philosophies(config: &CriteriaConfig) -> Vec<Box<dyn Philosophy>> {
    vec![
        Box::new(Buffett::new(config.buffett)),
        Box::new(Slater::new(config.slater)),
        Box::new(Mayer::new(config.mayer)),
    ]
}
