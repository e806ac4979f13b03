//! Jim Slater's small-cap growth checks.

use crate::{
    check::{Catalogue, Check, Outcome, Requirement, ratio},
    rates::earnings_trend,
};
use serde::{Deserialize, Serialize};
use tenet_traits::{Assessment, EquityData, Metric, Metric::*, Philosophy, Translator};

/// Thresholds of the growth checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaterConfig {
    /// Market capitalization must exceed this (default: 300M).
    pub min_market_cap: f64,
    /// Market capitalization must stay below this (default: 2B).
    pub max_market_cap: f64,
    /// Earnings trend must exceed this, in percent (default: 15%).
    pub min_earnings_trend: f64,
    /// Return on capital employed must exceed this, in percent (default: 20%).
    pub min_roce: f64,
    /// Quick ratio must exceed this (default: 1).
    pub min_quick_ratio: f64,
}

impl Default for SlaterConfig {
    fn default() -> Self {
        Self {
            min_market_cap: 300e6,
            max_market_cap: 2e9,
            min_earnings_trend: 15.0,
            min_roce: 20.0,
            min_quick_ratio: 1.0,
        }
    }
}

/// Growth and quality investing in the manner of Jim Slater.
///
/// Favors small capitalizations with fast-growing earnings, a high return on
/// the capital employed and enough liquid assets to cover current liabilities.
#[derive(Debug)]
pub struct Slater {
    config: SlaterConfig,
    catalogue: Catalogue,
}

impl Default for Slater {
    fn default() -> Self {
        Self::new(SlaterConfig::default())
    }
}

impl Slater {
    /// Name used in the registry.
    pub const NAME: &'static str = "slater";

    /// Create the philosophy with the given thresholds.
    #[must_use]
    pub fn new(config: SlaterConfig) -> Self {
        Self {
            config,
            catalogue: catalogue(config),
        }
    }

    /// Configured thresholds.
    #[must_use]
    pub const fn config(&self) -> &SlaterConfig {
        &self.config
    }
}

impl Philosophy for Slater {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn investor(&self) -> &str {
        "Jim Slater"
    }

    fn description(&self) -> &str {
        "Growth/quality: small caps with strong earnings growth and high returns on capital"
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

fn catalogue(c: SlaterConfig) -> Catalogue {
    Catalogue::new()
        .with(Check::new(
            "market_cap_band",
            [Requirement::MarketCap],
            move |i, tr| {
                let cap = i.market_cap()?;
                Some(Outcome::threshold(
                    tr,
                    cap > c.min_market_cap && cap < c.max_market_cap,
                    cap,
                    "Slater likes smallcaps",
                    "Slater prefers smallcaps",
                    "",
                ))
            },
        ))
        .with(Check::new(
            "earnings_trend",
            [Requirement::History(NetIncome)],
            move |i, tr| {
                let trend = earnings_trend(&i.values(NetIncome)?)?;
                Some(Outcome::threshold(
                    tr,
                    trend > c.min_earnings_trend,
                    trend,
                    "The annual earnings growth rate is higher than",
                    "The annual earnings growth rate is lower than",
                    format!(" {}% ({trend:.2}%)", c.min_earnings_trend),
                ))
            },
        ))
        .with(Check::new(
            "return_on_capital_employed",
            [
                Requirement::Latest(TotalAssets),
                Requirement::Latest(CurrentLiabilities),
                Requirement::Latest(NetIncomeBeforeTaxes),
            ],
            move |i, tr| {
                let employed = i.latest(TotalAssets)? - i.latest(CurrentLiabilities)?;
                let roce = ratio(i.latest(NetIncomeBeforeTaxes)?, employed)? * 100.0;
                Some(Outcome::threshold(
                    tr,
                    roce > c.min_roce,
                    roce,
                    "The return on capital employed is higher than",
                    "The return on capital employed is lower than",
                    format!(" {}% ({roce:.2}%)", c.min_roce),
                ))
            },
        ))
        .with(Check::new(
            "quick_ratio",
            [
                Requirement::Latest(CashAndEquivalents),
                Requirement::Latest(ShortTermInvestments),
                Requirement::Latest(AccountsReceivable),
                Requirement::Latest(CurrentLiabilities),
            ],
            move |i, tr| {
                let liquid = i.latest(CashAndEquivalents)?
                    + i.latest(ShortTermInvestments)?
                    + i.latest(AccountsReceivable)?;
                let quick = ratio(liquid, i.latest(CurrentLiabilities)?)?;
                Some(Outcome::threshold(
                    tr,
                    quick > c.min_quick_ratio,
                    quick,
                    "The company has good financials, its QR is higher than",
                    "The company doesn't have good financials, its QR is lower than",
                    format!(" {} ({quick:.2})", c.min_quick_ratio),
                ))
            },
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenet_traits::{Date, Equity, Language, StatementKind, StatementStore};

    fn single(kind: StatementKind, metrics: &[(Metric, f64)]) -> StatementStore {
        metrics
            .iter()
            .fold(
                StatementStore::builder(kind).periods([Date::from_ymd_opt(2023, 12, 31).unwrap()]),
                |b, (m, v)| b.metric(m.label(), [Some(*v)]),
            )
            .build()
            .unwrap()
    }

    fn assess(equity: &Equity) -> Assessment {
        Slater::default().evaluate(equity, &Language::English)
    }

    #[test]
    fn test_market_cap_band_excludes_its_bounds() {
        let caps = [
            (300e6, false),
            (2e9, false),
            (301e6, true),
            (1e9, true),
            (1.99e9, true),
            (299e6, false),
            (2.1e9, false),
        ];
        for (cap, passed) in caps {
            let equity = Equity::new("ACME", "Acme", 1.0).with_market_cap(Some(cap));
            let assessment = assess(&equity);
            assert_eq!(assessment.evaluated(), 1);
            assert_eq!(assessment.result("market_cap_band").unwrap().passed, passed, "cap {cap}");
        }
    }

    #[test]
    fn test_roce_and_quick_ratio() {
        let equity = Equity::new("ACME", "Acme", 1.0)
            .with_statement(single(
                StatementKind::IncomeStatement,
                &[(NetIncomeBeforeTaxes, 30.0)],
            ))
            .with_statement(single(
                StatementKind::BalanceSheet,
                &[
                    (TotalAssets, 200.0),
                    (CurrentLiabilities, 100.0),
                    (CashAndEquivalents, 50.0),
                    (ShortTermInvestments, 30.0),
                    (AccountsReceivable, 40.0),
                ],
            ));
        let assessment = assess(&equity);

        let roce = assessment.result("return_on_capital_employed").unwrap();
        assert_relative_eq!(roce.value, 30.0, epsilon = 1e-9);
        assert!(roce.passed);
        assert_eq!(roce.rationale, "The return on capital employed is higher than 20% (30.00%)");

        let quick = assessment.result("quick_ratio").unwrap();
        assert_relative_eq!(quick.value, 1.2, epsilon = 1e-9);
        assert!(quick.passed);

        // No market cap (no shares outstanding) and one period of earnings.
        assert_eq!(
            assessment.skipped,
            vec!["market_cap_band".to_string(), "earnings_trend".to_string()]
        );
    }

    #[test]
    fn test_quick_ratio_needs_short_term_investments() {
        let equity = Equity::new("ACME", "Acme", 1.0).with_statement(single(
            StatementKind::BalanceSheet,
            &[
                (CurrentLiabilities, 100.0),
                (CashAndEquivalents, 50.0),
                (AccountsReceivable, 40.0),
            ],
        ));
        let assessment = assess(&equity);
        assert!(assessment.result("quick_ratio").is_none());
        assert_eq!(assessment.evaluated(), 0);
    }

    #[test]
    fn test_earnings_growth_threshold() {
        let income = StatementStore::builder(StatementKind::IncomeStatement)
            .periods([2023, 2022, 2021].map(|y| Date::from_ymd_opt(y, 12, 31).unwrap()))
            .metric(NetIncome.label(), [Some(150.0), Some(100.0), Some(90.0)])
            .build()
            .unwrap();
        let equity = Equity::new("ACME", "Acme", 1.0).with_statement(income);
        let result = assess(&equity).result("earnings_trend").cloned().unwrap();
        // (1 - 1.5) * 100 flipped, over three periods.
        assert_relative_eq!(result.value, 50.0 / 3.0, epsilon = 1e-9);
        assert!(result.passed);
    }
}
