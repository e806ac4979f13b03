//! Key-ratio summary.
//!
//! Profitability, liquidity and valuation ratios computed from the latest
//! period, each with the qualitative grade commonly attached to it:
//! - Margins (gross, operating, net): reported without grade
//! - ROA: above 5% good, above 10% excellent
//! - ROE: 15% to 20% good, above 20% excellent
//! - ROCE: above 20% excellent
//! - Current ratio: above 1.5 good, below 1 very bad
//! - Quick ratio: above 1 good, above 1.5 excellent
//! - P/E: at most 12 good, at most 10 excellent
//! - EV/EBITDA: below 14 good, below 11 excellent
//!
//! A ratio whose inputs are not reported is left out of the summary.

use serde::{Deserialize, Serialize};
use tenet_criteria::check::{Inputs, ratio};
use tenet_traits::{EquityData, Grade, Metric::*, Translator};

/// How a ratio is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioUnit {
    /// Percentage.
    Percent,
    /// Plain multiple.
    Multiple,
}

/// One computed ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRatio {
    /// English name, also the translation key.
    pub name: String,
    /// Value, in percent for [`RatioUnit::Percent`].
    pub value: f64,
    /// Display unit.
    pub unit: RatioUnit,
    /// Qualitative grade, when one applies.
    pub grade: Option<Grade>,
}

impl KeyRatio {
    fn new(name: &str, value: f64, unit: RatioUnit, grade: Option<Grade>) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit,
            grade,
        }
    }

    /// Formatted value, e.g. `12.34%` or `1.50`.
    #[must_use]
    pub fn formatted(&self) -> String {
        match self.unit {
            RatioUnit::Percent => format!("{:.2}%", self.value),
            RatioUnit::Multiple => format!("{:.2}", self.value),
        }
    }
}

/// The ratios that could be computed for one equity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyRatios {
    /// Ratios in display order.
    pub ratios: Vec<KeyRatio>,
}

impl KeyRatios {
    /// Compute the summary.
    #[must_use]
    pub fn compute(equity: &dyn EquityData) -> Self {
        let i = Inputs::new(equity);
        let mut ratios = Vec::new();
        let mut push =
            |name: &str, value: Option<f64>, unit: RatioUnit, grade: fn(f64) -> Option<Grade>| {
                if let Some(v) = value {
                    ratios.push(KeyRatio::new(name, v, unit, grade(v)));
                }
            };
        let percent = |num: Option<f64>, den: Option<f64>| Some(ratio(num?, den?)? * 100.0);

        push(
            "Gross margin",
            percent(i.latest(GrossProfit), i.latest(Revenue)),
            RatioUnit::Percent,
            |_| None,
        );
        push(
            "Operating margin",
            percent(i.latest(OperatingIncome), i.latest(Revenue)),
            RatioUnit::Percent,
            |_| None,
        );
        push(
            "Net margin",
            percent(i.latest(NetIncome), i.latest(Revenue)),
            RatioUnit::Percent,
            |_| None,
        );
        push(
            "Return on assets",
            percent(i.latest(NetIncome), i.latest(TotalAssets)),
            RatioUnit::Percent,
            |v| {
                Some(if v > 10.0 {
                    Grade::Excellent
                } else if v > 5.0 {
                    Grade::Good
                } else {
                    Grade::Bad
                })
            },
        );
        push(
            "Return on equity",
            percent(i.latest(NetIncome), i.latest(TotalEquity)),
            RatioUnit::Percent,
            |v| {
                Some(if v > 20.0 {
                    Grade::Excellent
                } else if v >= 15.0 {
                    Grade::Good
                } else {
                    Grade::Bad
                })
            },
        );
        let employed = i
            .latest(TotalAssets)
            .zip(i.latest(CurrentLiabilities))
            .map(|(assets, liabilities)| assets - liabilities);
        push(
            "Return on capital employed",
            percent(i.latest(NetIncomeBeforeTaxes), employed),
            RatioUnit::Percent,
            |v| (v > 20.0).then_some(Grade::Excellent),
        );
        push(
            "Current ratio",
            i.latest(CurrentAssets)
                .zip(i.latest(CurrentLiabilities))
                .and_then(|(a, l)| ratio(a, l)),
            RatioUnit::Multiple,
            |v| {
                if v > 1.5 {
                    Some(Grade::Good)
                } else if v < 1.0 {
                    Some(Grade::VeryBad)
                } else {
                    None
                }
            },
        );
        push(
            "Quick ratio",
            quick_assets(&i)
                .zip(i.latest(CurrentLiabilities))
                .and_then(|(q, l)| ratio(q, l)),
            RatioUnit::Multiple,
            |v| {
                Some(if v > 1.5 {
                    Grade::Excellent
                } else if v > 1.0 {
                    Grade::Good
                } else {
                    Grade::Bad
                })
            },
        );
        push(
            "Price to earnings",
            i.market_cap()
                .zip(i.latest(NetIncome))
                .and_then(|(cap, ni)| ratio(cap, ni)),
            RatioUnit::Multiple,
            |v| {
                Some(if v <= 10.0 {
                    Grade::Excellent
                } else if v <= 12.0 {
                    Grade::Good
                } else {
                    Grade::Bad
                })
            },
        );
        let ev = enterprise_value(&i);
        push(
            "EV to EBITDA",
            ev.zip(i.latest(Ebitda))
                .and_then(|(ev, ebitda)| ratio(ev, ebitda)),
            RatioUnit::Multiple,
            |v| {
                Some(if v < 11.0 {
                    Grade::Excellent
                } else if v < 14.0 {
                    Grade::Good
                } else {
                    Grade::Bad
                })
            },
        );
        push(
            "EBIT to EV",
            i.latest(NetIncomeBeforeTaxes)
                .zip(ev)
                .and_then(|(ebit, ev)| ratio(ebit, ev)),
            RatioUnit::Multiple,
            |_| None,
        );

        Self { ratios }
    }

    /// Ratio by English name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&KeyRatio> {
        self.ratios.iter().find(|r| r.name == name)
    }

    /// Render one `name: value -> grade` line per ratio.
    #[must_use]
    pub fn render(&self, tr: &dyn Translator) -> String {
        self.ratios
            .iter()
            .map(|r| match r.grade {
                Some(grade) => format!(
                    "{}: {} -> {}",
                    tr.translate(&r.name),
                    r.formatted(),
                    tr.translate(grade.label())
                ),
                None => format!("{}: {}", tr.translate(&r.name), r.formatted()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Cash, short-term investments and receivables.
fn quick_assets(i: &Inputs<'_>) -> Option<f64> {
    Some(
        i.latest(CashAndEquivalents)?
            + i.latest(ShortTermInvestments)?
            + i.latest(AccountsReceivable)?,
    )
}

/// Market capitalization plus short and long-term debt, minus cash.
fn enterprise_value(i: &Inputs<'_>) -> Option<f64> {
    Some(
        i.market_cap()? + i.latest(ShortTermDebt)? + i.latest(LongTermDebt)?
            - i.latest(CashAndEquivalents)?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenet_traits::{Date, Equity, Language, Metric, StatementKind, StatementStore};

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

    fn equity() -> Equity {
        Equity::new("ACME", "Acme", 10.0)
            .with_market_cap(Some(1000.0))
            .with_statement(single(
                StatementKind::IncomeStatement,
                &[
                    (Revenue, 400.0),
                    (GrossProfit, 200.0),
                    (OperatingIncome, 120.0),
                    (NetIncomeBeforeTaxes, 110.0),
                    (NetIncome, 100.0),
                    (Ebitda, 150.0),
                ],
            ))
            .with_statement(single(
                StatementKind::BalanceSheet,
                &[
                    (TotalAssets, 800.0),
                    (TotalEquity, 500.0),
                    (CurrentAssets, 300.0),
                    (CurrentLiabilities, 150.0),
                    (CashAndEquivalents, 100.0),
                    (ShortTermInvestments, 50.0),
                    (AccountsReceivable, 60.0),
                    (ShortTermDebt, 50.0),
                    (LongTermDebt, 250.0),
                ],
            ))
    }

    #[test]
    fn test_profitability_grades() {
        let ratios = KeyRatios::compute(&equity());

        let roa = ratios.get("Return on assets").unwrap();
        assert_relative_eq!(roa.value, 12.5);
        assert_eq!(roa.grade, Some(Grade::Excellent));

        let roe = ratios.get("Return on equity").unwrap();
        assert_relative_eq!(roe.value, 20.0);
        assert_eq!(roe.grade, Some(Grade::Good));

        assert_relative_eq!(ratios.get("Gross margin").unwrap().value, 50.0);
        assert_relative_eq!(ratios.get("Operating margin").unwrap().value, 30.0);
    }

    #[test]
    fn test_valuation_grades() {
        let ratios = KeyRatios::compute(&equity());

        let pe = ratios.get("Price to earnings").unwrap();
        assert_relative_eq!(pe.value, 10.0);
        assert_eq!(pe.grade, Some(Grade::Excellent));

        // EV = 1000 + 50 + 250 - 100 = 1200
        let ev_ebitda = ratios.get("EV to EBITDA").unwrap();
        assert_relative_eq!(ev_ebitda.value, 8.0);
        assert_eq!(ev_ebitda.grade, Some(Grade::Excellent));

        assert_relative_eq!(ratios.get("EBIT to EV").unwrap().value, 110.0 / 1200.0);
    }

    #[test]
    fn test_liquidity_grades() {
        let ratios = KeyRatios::compute(&equity());
        let current = ratios.get("Current ratio").unwrap();
        assert_relative_eq!(current.value, 2.0);
        assert_eq!(current.grade, Some(Grade::Good));

        let quick = ratios.get("Quick ratio").unwrap();
        assert_relative_eq!(quick.value, 1.4);
        assert_eq!(quick.grade, Some(Grade::Good));
    }

    #[test]
    fn test_missing_inputs_drop_ratios() {
        let ratios = KeyRatios::compute(&Equity::new("ACME", "Acme", 10.0));
        assert!(ratios.ratios.is_empty());
        assert_eq!(ratios.render(&Language::English), "");
    }

    #[test]
    fn test_render() {
        let text = KeyRatios::compute(&equity()).render(&Language::English);
        assert!(text.contains("Return on assets: 12.50% -> excellent"));
        assert!(text.contains("Gross margin: 50.00%"));
    }
}
