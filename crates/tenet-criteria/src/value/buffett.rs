//! Warren Buffett's durable-competitive-advantage checks.

use crate::{
    check::{Catalogue, Check, Outcome, Requirement, ratio},
    rates::{average_growth, co_movement, earnings_trend},
};
use serde::{Deserialize, Serialize};
use tenet_traits::{Assessment, EquityData, Grade, Metric, Metric::*, Philosophy, Translator};

/// Thresholds of the value checks. Percentages are expressed in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuffettConfig {
    /// Gross profit over revenue must exceed this (default: 40%).
    pub min_gross_margin: f64,
    /// Net income over revenue must exceed this (default: 20%).
    pub min_net_margin: f64,
    /// SG&A over gross profit must stay below this (default: 30%).
    pub max_sga_ratio: f64,
    /// Interest expense over operating income must stay below this (default: 15%).
    pub max_interest_ratio: f64,
    /// Earnings trend must exceed this (default: 0%).
    pub min_earnings_trend: f64,
    /// Current ratio must exceed this (default: 1.5).
    pub min_current_ratio: f64,
    /// Current ratio above which excess liquidity is noted (default: 2.5).
    pub high_current_ratio: f64,
    /// Current ratio below which the company cannot cover its debts (default: 1.0).
    pub critical_current_ratio: f64,
    /// PPE over net income must stay below this (default: 2).
    pub max_ppe_to_net_income: f64,
    /// Depreciation over gross profit must stay below this (default: 15%).
    pub max_depreciation_ratio: f64,
    /// Average cash growth must exceed this (default: 0%).
    pub min_cash_growth: f64,
    /// Long-term debt over net income must stay below this (default: 4).
    pub max_debt_to_net_income: f64,
    /// Capital expenditures over net income must stay below this (default: 50%).
    pub max_capex_ratio: f64,
}

impl Default for BuffettConfig {
    fn default() -> Self {
        Self {
            min_gross_margin: 40.0,
            min_net_margin: 20.0,
            max_sga_ratio: 30.0,
            max_interest_ratio: 15.0,
            min_earnings_trend: 0.0,
            min_current_ratio: 1.5,
            high_current_ratio: 2.5,
            critical_current_ratio: 1.0,
            max_ppe_to_net_income: 2.0,
            max_depreciation_ratio: 15.0,
            min_cash_growth: 0.0,
            max_debt_to_net_income: 4.0,
            max_capex_ratio: 50.0,
        }
    }
}

/// Value investing in the manner of Warren Buffett.
///
/// Looks for a durable competitive advantage in the statements: high and
/// stable margins, low overhead and interest burden, rising earnings, sound
/// liquidity, light capital needs and little long-term debt.
///
/// # Example
///
/// ```ignore
/// use tenet_criteria::value::{Buffett, BuffettConfig};
///
/// let strict = Buffett::new(BuffettConfig {
///     min_gross_margin: 50.0,
///     ..Default::default()
/// });
/// ```
#[derive(Debug)]
pub struct Buffett {
    config: BuffettConfig,
    catalogue: Catalogue,
}

impl Default for Buffett {
    fn default() -> Self {
        Self::new(BuffettConfig::default())
    }
}

impl Buffett {
    /// Name used in the registry.
    pub const NAME: &'static str = "buffett";

    /// Create the philosophy with the given thresholds.
    #[must_use]
    pub fn new(config: BuffettConfig) -> Self {
        Self {
            config,
            catalogue: catalogue(config),
        }
    }

    /// Configured thresholds.
    #[must_use]
    pub const fn config(&self) -> &BuffettConfig {
        &self.config
    }

    /// The check table.
    #[must_use]
    pub const fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }
}

impl Philosophy for Buffett {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn investor(&self) -> &str {
        "Warren Buffett"
    }

    fn description(&self) -> &str {
        "Value: durable competitive advantage read from margins, debt and capital needs"
    }

    fn required_metrics(&self) -> Vec<Metric> {
        self.catalogue.metrics()
    }

    fn evaluate(&self, equity: &dyn EquityData, tr: &dyn Translator) -> Assessment {
        self.catalogue
            .assess(self.name(), self.investor(), equity, tr)
    }
}

fn catalogue(c: BuffettConfig) -> Catalogue {
    Catalogue::new()
        .with(Check::new(
            "gross_margin",
            [Requirement::Latest(GrossProfit), Requirement::Latest(Revenue)],
            move |i, tr| {
                let margin = ratio(i.latest(GrossProfit)?, i.latest(Revenue)?)? * 100.0;
                Some(Outcome::threshold(
                    tr,
                    margin > c.min_gross_margin,
                    margin,
                    "The gross margin is higher than",
                    "The gross margin is lower than",
                    format!(" {}% ({margin:.2}%)", c.min_gross_margin),
                ))
            },
        ))
        .with(Check::new(
            "net_margin",
            [Requirement::Latest(NetIncome), Requirement::Latest(Revenue)],
            move |i, tr| {
                let margin = ratio(i.latest(NetIncome)?, i.latest(Revenue)?)? * 100.0;
                Some(Outcome::threshold(
                    tr,
                    margin > c.min_net_margin,
                    margin,
                    "The net margin is higher than",
                    "The net margin is lower than",
                    format!(" {}% ({margin:.2}%)", c.min_net_margin),
                ))
            },
        ))
        .with(Check::new(
            "sga_ratio",
            [
                Requirement::Latest(SellingGeneralAdministrative),
                Requirement::Latest(GrossProfit),
            ],
            move |i, tr| {
                let share = ratio(
                    i.latest(SellingGeneralAdministrative)? * 100.0,
                    i.latest(GrossProfit)?,
                )?;
                Some(Outcome::threshold(
                    tr,
                    share < c.max_sga_ratio,
                    share,
                    "Selling, General and Administrative expenses represent less than",
                    "Selling, General and Administrative expenses represent more than",
                    format!(
                        " {}% {} ({share:.2}%)",
                        c.max_sga_ratio,
                        tr.translate("of the gross margin")
                    ),
                ))
            },
        ))
        .with(Check::new(
            "interest_expense_ratio",
            [
                Requirement::Latest(InterestExpense),
                Requirement::Latest(OperatingIncome),
            ],
            move |i, tr| {
                let share = ratio(i.latest(InterestExpense)? * 100.0, i.latest(OperatingIncome)?)?;
                Some(Outcome::threshold(
                    tr,
                    share < c.max_interest_ratio,
                    share,
                    "The interest expense is lower than",
                    "The interest expense is higher than",
                    format!(" {}% ({share:.2}%)", c.max_interest_ratio),
                ))
            },
        ))
        .with(Check::new(
            "earnings_trend",
            [Requirement::History(NetIncome)],
            move |i, tr| {
                let earnings = i.values(NetIncome)?;
                let trend = earnings_trend(&earnings)?;
                Some(Outcome::threshold(
                    tr,
                    trend > c.min_earnings_trend,
                    trend,
                    "The net earnings follow an upward trend over a period of",
                    "The net earnings follow a downward trend over a period of",
                    format!(" {} {} ({trend:.2}%)", earnings.len(), tr.translate("years")),
                ))
            },
        ))
        .with(Check::new(
            "current_ratio",
            [
                Requirement::Latest(CurrentAssets),
                Requirement::Latest(CurrentLiabilities),
            ],
            move |i, tr| {
                let current = ratio(i.latest(CurrentAssets)?, i.latest(CurrentLiabilities)?)?;
                let passed = current > c.min_current_ratio;
                let outcome = Outcome::threshold(
                    tr,
                    passed,
                    current,
                    "The current ratio is higher than",
                    "The current ratio is lower than",
                    format!(" {} ({current:.2})", c.min_current_ratio),
                );
                Some(if passed {
                    let outcome = outcome.with_grade(Grade::Good);
                    if current > c.high_current_ratio {
                        outcome.with_note(format!(
                            "{} {}, {}",
                            tr.translate("However, you should note that the current ratio is higher than"),
                            c.high_current_ratio,
                            tr.translate("which may indicate mismanagement of money due to an inability to collect payments"),
                        ))
                    } else {
                        outcome
                    }
                } else if current < c.critical_current_ratio {
                    outcome.with_grade(Grade::VeryBad).with_note(tr.translate(
                        "The company must acquire new debt to pay its debt obligations",
                    ))
                } else {
                    outcome.with_grade(Grade::Bad)
                })
            },
        ))
        .with(Check::new(
            "inventory_co_movement",
            [Requirement::History(Inventory), Requirement::History(NetIncome)],
            |i, tr| {
                let together = co_movement(&i.values(Inventory)?, &i.values(NetIncome)?)?;
                Some(Outcome::threshold(
                    tr,
                    together,
                    if together { 1.0 } else { 0.0 },
                    "Inventories move in line with profits",
                    "Inventories do not move in line with profits (to be taken into account only if the products sold may become obsolete)",
                    "",
                ))
            },
        ))
        .with(Check::new(
            "ppe_to_net_income",
            [
                Requirement::Latest(PropertyPlantEquipment),
                Requirement::Latest(NetIncome),
            ],
            move |i, tr| {
                let multiple = ratio(i.latest(PropertyPlantEquipment)?, i.latest(NetIncome)?)?;
                Some(Outcome::threshold(
                    tr,
                    multiple < c.max_ppe_to_net_income,
                    multiple,
                    "Tangible fixed assets (PPE) are reasonable: the tangible fixed assets to net income ratio is less than",
                    "The tangible fixed assets (PPE) are not very reasonable: the tangible fixed assets to net income ratio is greater than",
                    format!(" {} ({multiple:.2})", c.max_ppe_to_net_income),
                ))
            },
        ))
        .with(Check::new(
            "depreciation_ratio",
            [Requirement::Latest(Depreciation), Requirement::Latest(GrossProfit)],
            move |i, tr| {
                let share = ratio(i.latest(Depreciation)? * 100.0, i.latest(GrossProfit)?)?;
                Some(Outcome::threshold(
                    tr,
                    share < c.max_depreciation_ratio,
                    share,
                    "The depreciation is low",
                    "The depreciation is high",
                    format!(" ({share:.2}%)"),
                ))
            },
        ))
        .with(Check::new(
            "cash_growth",
            [Requirement::History(CashAndEquivalents)],
            move |i, tr| {
                let growth = average_growth(&i.values(CashAndEquivalents)?)?;
                let passed = growth > c.min_cash_growth;
                let rationale = if passed {
                    format!(
                        "{} {growth:.2}% {}",
                        tr.translate("The company has a significant amount of cash which increases by"),
                        tr.translate("on average per year"),
                    )
                } else {
                    tr.translate("The company draws on its cash").into_owned()
                };
                Some(Outcome::new(passed, growth, rationale))
            },
        ))
        .with(Check::new(
            "long_term_debt_to_net_income",
            [Requirement::Latest(LongTermDebt), Requirement::Latest(NetIncome)],
            move |i, tr| {
                let multiple = ratio(i.latest(LongTermDebt)?, i.latest(NetIncome)?)?;
                Some(Outcome::threshold(
                    tr,
                    multiple < c.max_debt_to_net_income,
                    multiple,
                    "The company is in a strong position, its long-term debt to net income ratio is less than",
                    "The company is not in a strong position, its long-term debt to net income ratio is greater than",
                    format!(" {} ({multiple:.2})", c.max_debt_to_net_income),
                ))
            },
        ))
        .with(Check::new(
            "capex_to_net_income",
            [
                Requirement::Latest(CapitalExpenditures),
                Requirement::Latest(NetIncome),
            ],
            move |i, tr| {
                let share =
                    ratio(i.latest(CapitalExpenditures)?.abs() * 100.0, i.latest(NetIncome)?)?;
                Some(Outcome::threshold(
                    tr,
                    share < c.max_capex_ratio,
                    share,
                    "Capital expenditures are reasonable, they represent less than",
                    "Capital expenditures are not very reasonable, they represent more than",
                    format!(
                        " {}% {} ({share:.2}%)",
                        c.max_capex_ratio,
                        tr.translate("of the net income")
                    ),
                ))
            },
        ))
}
