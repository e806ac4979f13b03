//! Criterion results and per-philosophy assessments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative grade attached to a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// Excellent.
    Excellent,
    /// Good.
    Good,
    /// Bad.
    Bad,
    /// Very bad.
    VeryBad,
}

impl Grade {
    /// English label, also the translation key.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Bad => "bad",
            Self::VeryBad => "very bad",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The outcome of one evaluated check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionResult {
    /// Check name.
    pub criterion: String,
    /// Whether the threshold was met.
    pub passed: bool,
    /// Value that drove the decision.
    pub value: f64,
    /// Human-readable rationale, already translated.
    pub rationale: String,
    /// Extra annotation lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Optional qualitative grade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
}

impl CriterionResult {
    /// Create a result without notes or grade.
    #[must_use]
    pub fn new(
        criterion: impl Into<String>,
        passed: bool,
        value: f64,
        rationale: impl Into<String>,
    ) -> Self {
        Self {
            criterion: criterion.into(),
            passed,
            value,
            rationale: rationale.into(),
            notes: Vec::new(),
            grade: None,
        }
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
}

/// Rationale and note lines of the results that passed (or failed), each
/// prefixed with `"\n-"`.
#[must_use]
pub fn bullet_block(results: &[CriterionResult], passed: bool) -> String {
    let mut out = String::new();
    for result in results.iter().filter(|r| r.passed == passed) {
        for line in std::iter::once(&result.rationale).chain(&result.notes) {
            out.push_str("\n-");
            out.push_str(line);
        }
    }
    out
}

/// Everything one philosophy concluded about one equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Philosophy name.
    pub philosophy: String,
    /// Investor the philosophy is named after.
    pub investor: String,
    /// Company display name.
    pub company: String,
    /// Evaluated checks in catalogue order.
    pub results: Vec<CriterionResult>,
    /// Names of checks skipped for lack of data.
    pub skipped: Vec<String>,
}

impl Assessment {
    /// Start an empty assessment.
    #[must_use]
    pub fn new(
        philosophy: impl Into<String>,
        investor: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            philosophy: philosophy.into(),
            investor: investor.into(),
            company: company.into(),
            results: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Record an evaluated check.
    pub fn record(&mut self, result: CriterionResult) {
        self.results.push(result);
    }

    /// Record a skipped check.
    pub fn skip(&mut self, criterion: impl Into<String>) {
        self.skipped.push(criterion.into());
    }

    /// Number of passed checks.
    #[must_use]
    pub fn approved(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of evaluated checks.
    #[must_use]
    pub fn evaluated(&self) -> usize {
        self.results.len()
    }

    /// Result of a named check, if it was evaluated.
    #[must_use]
    pub fn result(&self, criterion: &str) -> Option<&CriterionResult> {
        self.results.iter().find(|r| r.criterion == criterion)
    }

    /// Accumulated lines of passed checks, each prefixed with `"\n-"`.
    #[must_use]
    pub fn pros(&self) -> String {
        bullet_block(&self.results, true)
    }

    /// Accumulated lines of failed checks, each prefixed with `"\n-"`.
    #[must_use]
    pub fn cons(&self) -> String {
        bullet_block(&self.results, false)
    }
}
