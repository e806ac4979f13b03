//! Declarative check tables.
//!
//! A philosophy is a [`Catalogue`]: an ordered list of [`Check`]s, each naming
//! the inputs it reads and a rule turning those inputs into an [`Outcome`].
//! The catalogue owns the skip logic, so individual rules only compute.

use std::fmt;
use tenet_traits::{
    Assessment, CriterionResult, EquityData, Grade, Metric, MetricSeries, Translator,
};
use tracing::debug;

/// An input a check cannot be evaluated without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The most recent value of a metric.
    Latest(Metric),
    /// The history of a metric.
    History(Metric),
    /// The market capitalization.
    MarketCap,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest(metric) => write!(f, "latest {metric}"),
            Self::History(metric) => write!(f, "history of {metric}"),
            Self::MarketCap => f.write_str("market capitalization"),
        }
    }
}

/// Read-only view of an equity handed to check rules.
///
/// A latest value counts as present only when it is reported, finite and
/// non-zero. Zero is how sources encode "not available", and treating it as
/// absent also guards every division by that value.
#[derive(Clone, Copy)]
pub struct Inputs<'a> {
    equity: &'a dyn EquityData,
}

impl fmt::Debug for Inputs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inputs")
            .field("symbol", &self.equity.symbol())
            .finish()
    }
}

impl<'a> Inputs<'a> {
    /// Wrap an equity.
    #[must_use]
    pub fn new(equity: &'a dyn EquityData) -> Self {
        Self { equity }
    }

    /// The wrapped equity.
    #[must_use]
    pub fn equity(&self) -> &'a dyn EquityData {
        self.equity
    }

    /// Most recent value of a metric, if present.
    #[must_use]
    pub fn latest(&self, metric: Metric) -> Option<f64> {
        self.equity.latest(metric).filter(|v| is_present(*v))
    }

    /// Full history of a metric, most recent first.
    #[must_use]
    pub fn history(&self, metric: Metric) -> Option<MetricSeries> {
        self.equity.history(metric)
    }

    /// Values of a metric's history, most recent first.
    #[must_use]
    pub fn values(&self, metric: Metric) -> Option<Vec<Option<f64>>> {
        Some(self.history(metric)?.values().to_vec())
    }

    /// Market capitalization, if present.
    #[must_use]
    pub fn market_cap(&self) -> Option<f64> {
        self.equity.market_cap().filter(|v| is_present(*v))
    }

    /// Whether a requirement is satisfied.
    #[must_use]
    pub fn satisfies(&self, requirement: Requirement) -> bool {
        match requirement {
            Requirement::Latest(metric) => self.latest(metric).is_some(),
            Requirement::History(metric) => self.history(metric).is_some(),
            Requirement::MarketCap => self.market_cap().is_some(),
        }
    }
}

fn is_present(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// What a rule concluded, before it is attached to a check name.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    passed: bool,
    value: f64,
    rationale: String,
    notes: Vec<String>,
    grade: Option<Grade>,
}

impl Outcome {
    /// Create an outcome.
    #[must_use]
    pub fn new(passed: bool, value: f64, rationale: impl Into<String>) -> Self {
        Self {
            passed,
            value,
            rationale: rationale.into(),
            notes: Vec::new(),
            grade: None,
        }
    }

    /// Build the usual threshold outcome: the translated pass or fail text
    /// followed by an untranslated detail such as `" 40% (45.00%)"`.
    #[must_use]
    pub fn threshold(
        tr: &dyn Translator,
        passed: bool,
        value: f64,
        pass_text: &str,
        fail_text: &str,
        detail: impl fmt::Display,
    ) -> Self {
        let text = if passed { pass_text } else { fail_text };
        Self::new(passed, value, format!("{}{detail}", tr.translate(text)))
    }

    /// Append an annotation line.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Attach a grade.
    #[must_use]
    pub const fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Whether the threshold was met.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.passed
    }

    fn into_result(self, criterion: &str) -> CriterionResult {
        let Self {
            passed,
            value,
            rationale,
            notes,
            grade,
        } = self;
        CriterionResult {
            criterion: criterion.to_string(),
            passed,
            value,
            rationale,
            notes,
            grade,
        }
    }
}

type Rule = Box<dyn Fn(&Inputs<'_>, &dyn Translator) -> Option<Outcome> + Send + Sync>;

/// One named, independently optional check.
pub struct Check {
    name: &'static str,
    requires: Vec<Requirement>,
    rule: Rule,
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .finish_non_exhaustive()
    }
}

impl Check {
    /// Create a check.
    ///
    /// The rule may still return `None` when a value it derives is not finite
    /// (for instance a zero denominator inside a history); the check is then
    /// skipped like one with a missing requirement.
    pub fn new<F>(name: &'static str, requires: impl Into<Vec<Requirement>>, rule: F) -> Self
    where
        F: Fn(&Inputs<'_>, &dyn Translator) -> Option<Outcome> + Send + Sync + 'static,
    {
        Self {
            name,
            requires: requires.into(),
            rule: Box::new(rule),
        }
    }

    /// Check name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared inputs.
    #[must_use]
    pub fn requires(&self) -> &[Requirement] {
        &self.requires
    }

    /// Run the check, `None` if it had to be skipped.
    #[must_use]
    pub fn run(&self, inputs: &Inputs<'_>, tr: &dyn Translator) -> Option<CriterionResult> {
        if let Some(missing) = self.requires.iter().find(|r| !inputs.satisfies(**r)) {
            debug!(check = self.name, %missing, "skipping check, input not available");
            return None;
        }
        match (self.rule)(inputs, tr) {
            Some(outcome) if outcome.value.is_finite() => Some(outcome.into_result(self.name)),
            _ => {
                debug!(check = self.name, "skipping check, value not computable");
                None
            }
        }
    }
}

/// An ordered list of checks.
#[derive(Debug, Default)]
pub struct Catalogue {
    checks: Vec<Check>,
}

impl Catalogue {
    /// Create an empty catalogue.
    #[must_use]
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Append a check.
    #[must_use]
    pub fn with(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Checks in evaluation order.
    #[must_use]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Metrics read by any check, in first-use order.
    #[must_use]
    pub fn metrics(&self) -> Vec<Metric> {
        let mut metrics = Vec::new();
        for requirement in self.checks.iter().flat_map(|c| c.requires.iter()) {
            if let Requirement::Latest(m) | Requirement::History(m) = requirement
                && !metrics.contains(m)
            {
                metrics.push(*m);
            }
        }
        metrics
    }

    /// Whether any check needs the market capitalization.
    #[must_use]
    pub fn uses_market_cap(&self) -> bool {
        self.checks
            .iter()
            .any(|c| c.requires.contains(&Requirement::MarketCap))
    }

    /// Run every check in order against one equity.
    #[must_use]
    pub fn assess(
        &self,
        philosophy: &str,
        investor: &str,
        equity: &dyn EquityData,
        tr: &dyn Translator,
    ) -> Assessment {
        let inputs = Inputs::new(equity);
        let mut assessment = Assessment::new(philosophy, investor, equity.name());
        for check in &self.checks {
            match check.run(&inputs, tr) {
                Some(result) => assessment.record(result),
                None => assessment.skip(check.name),
            }
        }
        debug!(
            philosophy,
            symbol = equity.symbol(),
            approved = assessment.approved(),
            evaluated = assessment.evaluated(),
            skipped = assessment.skipped.len(),
            "assessment complete"
        );
        assessment
    }
}

/// `numerator / denominator`, `None` unless the result is finite.
#[must_use]
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator).filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenet_traits::{Date, Equity, Language, StatementKind, StatementStore};

    fn equity(revenue: Option<f64>) -> Equity {
        let income = StatementStore::builder(StatementKind::IncomeStatement)
            .periods([Date::from_ymd_opt(2023, 12, 31).unwrap()])
            .metric("Total Revenue", [revenue])
            .metric("Gross Profit", [Some(45.0)])
            .build()
            .unwrap();
        Equity::new("ACME", "Acme", 10.0).with_statement(income)
    }

    fn margin_check() -> Check {
        Check::new(
            "gross_margin",
            [
                Requirement::Latest(Metric::GrossProfit),
                Requirement::Latest(Metric::Revenue),
            ],
            |inputs, tr| {
                let margin = ratio(
                    inputs.latest(Metric::GrossProfit)?,
                    inputs.latest(Metric::Revenue)?,
                )?;
                Some(Outcome::threshold(tr, margin > 0.4, margin, "high", "low", ""))
            },
        )
    }

    #[test]
    fn test_zero_latest_value_is_absent() {
        let equity = equity(Some(0.0));
        let inputs = Inputs::new(&equity);
        assert!(inputs.latest(Metric::Revenue).is_none());
        assert!(!inputs.satisfies(Requirement::Latest(Metric::Revenue)));
        assert!(inputs.satisfies(Requirement::History(Metric::Revenue)));
    }

    #[test]
    fn test_missing_requirement_skips() {
        let catalogue = Catalogue::new().with(margin_check());
        let assessment = catalogue.assess("test", "Tester", &equity(None), &Language::English);
        assert_eq!(assessment.evaluated(), 0);
        assert_eq!(assessment.skipped, vec!["gross_margin".to_string()]);
    }

    #[test]
    fn test_evaluated_check_is_recorded() {
        let catalogue = Catalogue::new().with(margin_check());
        let assessment =
            catalogue.assess("test", "Tester", &equity(Some(100.0)), &Language::English);
        assert_eq!(assessment.evaluated(), 1);
        assert_eq!(assessment.approved(), 1);
        assert_eq!(assessment.results[0].rationale, "high");
    }

    #[test]
    fn test_catalogue_metadata() {
        let catalogue = Catalogue::new()
            .with(margin_check())
            .with(Check::new("cap", [Requirement::MarketCap], |_, _| None));
        assert_eq!(catalogue.metrics(), vec![Metric::GrossProfit, Metric::Revenue]);
        assert!(catalogue.uses_market_cap());
    }

    #[test]
    fn test_ratio_guards_zero() {
        assert_eq!(ratio(1.0, 0.0), None);
        assert_eq!(ratio(1.0, 4.0), Some(0.25));
    }
}
