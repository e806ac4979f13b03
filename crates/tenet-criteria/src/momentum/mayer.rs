//! Chris Mayer's "100-bagger" screen.

use crate::check::{Catalogue, Check, Outcome, Requirement};
use serde::{Deserialize, Serialize};
use tenet_traits::{Assessment, EquityData, Metric, Metric::*, Philosophy, Translator};

/// Bounds of the composite check. Every bound is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MayerConfig {
    /// Market capitalization range (default: 300M to 700M).
    pub market_cap: (f64, f64),
    /// Revenue range (default: 140M to 200M).
    pub revenue: (f64, f64),
    /// Price to sales range (default: 2.5 to 3.5).
    pub price_to_sales: (f64, f64),
}

impl Default for MayerConfig {
    fn default() -> Self {
        Self {
            market_cap: (300e6, 700e6),
            revenue: (140e6, 200e6),
            price_to_sales: (2.5, 3.5),
        }
    }
}

fn within((low, high): (f64, f64), value: f64) -> bool {
    value > low && value < high
}

/// Momentum investing in the manner of Chris Mayer.
///
/// A single composite check: small company, modest revenue and a reasonable
/// price to sales, the profile from which 100-baggers historically emerged.
#[derive(Debug)]
pub struct Mayer {
    config: MayerConfig,
    catalogue: Catalogue,
}

impl Default for Mayer {
    fn default() -> Self {
        Self::new(MayerConfig::default())
    }
}

impl Mayer {
    /// Name used in the registry.
    pub const NAME: &'static str = "mayer";

    /// Create the philosophy with the given bounds.
    #[must_use]
    pub fn new(config: MayerConfig) -> Self {
        let catalogue = Catalogue::new().with(Check::new(
            "hundred_bagger",
            [
                Requirement::MarketCap,
                Requirement::Latest(Revenue),
                Requirement::Latest(PriceToSales),
            ],
            move |i, tr| {
                let cap = i.market_cap()?;
                let passed = within(config.market_cap, cap)
                    && within(config.revenue, i.latest(Revenue)?)
                    && within(config.price_to_sales, i.latest(PriceToSales)?);
                Some(Outcome::threshold(
                    tr,
                    passed,
                    cap,
                    "Mayer may consider this company as a potential 100-bagger provided it has an international expansion potential",
                    "Mayer may not consider this company as a potential 100-bagger",
                    "",
                ))
            },
        ));
        Self { config, catalogue }
    }

    /// Configured bounds.
    #[must_use]
    pub const fn config(&self) -> &MayerConfig {
        &self.config
    }
}

impl Philosophy for Mayer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn investor(&self) -> &str {
        "Chris Mayer"
    }

    fn description(&self) -> &str {
        "Momentum: small, reasonably priced companies with 100-bagger potential"
    }

    fn required_metrics(&self) -> Vec<Metric> {
        self.catalogue.metrics()
    }

    fn uses_market_cap(&self) -> bool {
        self.catalogue.uses_market_cap()
    }

    fn evaluate(&self, equity: &dyn EquityData, tr: &dyn Translator) -> Assessment {
        self.catalogue
            .assess(self.name(), self.investor(), equity, tr)
    }
}
