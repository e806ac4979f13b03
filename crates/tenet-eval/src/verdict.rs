//! Scoring aggregator.
//!
//! Turns the approved and evaluated counts of an assessment into a 0 to 10
//! recommendation and one of three qualitative bands.

use serde::{Deserialize, Serialize};
use std::fmt;
use tenet_traits::{Assessment, CriterionResult};

/// How the "meets some" band treats its boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandPolicy {
    /// Ratio strictly between 0.5 and 0.7 meets some criteria.
    #[default]
    Strict,
    /// Ratio between 0.5 and 0.7, bounds included, meets some criteria.
    Inclusive,
}

/// Qualitative band of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Below the "some" band.
    DoesNotMeet,
    /// Within the "some" band.
    MeetsSome,
    /// Ratio above 0.7.
    MeetsMost,
}

impl Band {
    /// Classify an approval ratio.
    #[must_use]
    pub fn classify(ratio: f64, policy: BandPolicy) -> Self {
        let some = match policy {
            BandPolicy::Strict => ratio > 0.5 && ratio < 0.7,
            BandPolicy::Inclusive => (0.5..=0.7).contains(&ratio),
        };
        if some {
            Self::MeetsSome
        } else if ratio > 0.7 {
            Self::MeetsMost
        } else {
            Self::DoesNotMeet
        }
    }

    /// English phrase preceding the investor's name.
    #[must_use]
    pub const fn phrase(&self) -> &'static str {
        match self {
            Self::DoesNotMeet => "does not meet",
            Self::MeetsSome => "meets some of",
            Self::MeetsMost => "meets most of",
        }
    }

    /// English sentence fragment, also the translation key, e.g.
    /// `meets most of Warren Buffett's selection criteria`.
    #[must_use]
    pub fn criteria_sentence(&self, investor: &str) -> String {
        format!("{} {investor}'s selection criteria", self.phrase())
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Score out of ten, `None` when nothing was evaluated.
#[must_use]
pub fn score(approved: usize, evaluated: usize) -> Option<f64> {
    (evaluated > 0).then(|| approved as f64 * 10.0 / evaluated as f64)
}

/// Final per-philosophy output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Philosophy name.
    pub philosophy: String,
    /// Investor the philosophy is named after.
    pub investor: String,
    /// Company display name.
    pub company: String,
    /// Passed checks.
    pub approved: usize,
    /// Evaluated checks.
    pub evaluated: usize,
    /// `approved * 10 / evaluated`.
    pub score: f64,
    /// Qualitative band.
    pub band: Band,
    /// Evaluated checks in catalogue order.
    pub results: Vec<CriterionResult>,
    /// Checks skipped for lack of data.
    pub skipped: Vec<String>,
}

impl Verdict {
    /// Aggregate an assessment. Returns `None` if no check was evaluated.
    #[must_use]
    pub fn from_assessment(assessment: &Assessment, policy: BandPolicy) -> Option<Self> {
        let approved = assessment.approved();
        let evaluated = assessment.evaluated();
        let score = score(approved, evaluated)?;
        Some(Self {
            philosophy: assessment.philosophy.clone(),
            investor: assessment.investor.clone(),
            company: assessment.company.clone(),
            approved,
            evaluated,
            score,
            band: Band::classify(approved as f64 / evaluated as f64, policy),
            results: assessment.results.clone(),
            skipped: assessment.skipped.clone(),
        })
    }

    /// Approval ratio in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.score / 10.0
    }
}
