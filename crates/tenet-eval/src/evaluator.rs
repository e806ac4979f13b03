//! Runs a set of philosophies over one equity.
//!
//! The evaluator owns the configured philosophies and the band policy, so a
//! single instance can score any number of equities.

use crate::{
    config::TenetConfig,
    report::{JsonReport, render_assessment},
    verdict::{BandPolicy, Verdict},
};
use tenet_criteria::registry::{all_philosophies, create_philosophy};
use tenet_traits::{Assessment, EquityData, Philosophy, Result, Translator};
use tracing::debug;

/// Evaluates equities against a fixed list of philosophies.
pub struct Evaluator {
    philosophies: Vec<Box<dyn Philosophy>>,
    bands: BandPolicy,
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field(
                "philosophies",
                &self.philosophies.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("bands", &self.bands)
            .finish()
    }
}

impl Evaluator {
    /// Evaluator running every registered philosophy.
    #[must_use]
    pub fn new(config: &TenetConfig) -> Self {
        Self {
            philosophies: all_philosophies(&config.criteria),
            bands: config.bands,
        }
    }

    /// Evaluator running the named philosophies, in the given order.
    ///
    /// An empty list selects every philosophy.
    ///
    /// # Errors
    ///
    /// Returns [`tenet_traits::TenetError::PhilosophyNotFound`] for an
    /// unknown name or alias.
    pub fn with_philosophies<S: AsRef<str>>(config: &TenetConfig, names: &[S]) -> Result<Self> {
        if names.is_empty() {
            return Ok(Self::new(config));
        }
        let philosophies = names
            .iter()
            .map(|name| create_philosophy(name.as_ref(), &config.criteria))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            philosophies,
            bands: config.bands,
        })
    }

    /// Philosophies in evaluation order.
    #[must_use]
    pub fn philosophies(&self) -> &[Box<dyn Philosophy>] {
        &self.philosophies
    }

    /// Band policy applied to verdicts.
    #[must_use]
    pub const fn bands(&self) -> BandPolicy {
        self.bands
    }

    /// Assess the equity under every philosophy.
    #[must_use]
    pub fn assess(&self, equity: &dyn EquityData, tr: &dyn Translator) -> Vec<Assessment> {
        self.philosophies
            .iter()
            .map(|philosophy| {
                let assessment = philosophy.evaluate(equity, tr);
                debug!(
                    symbol = equity.symbol(),
                    philosophy = philosophy.name(),
                    approved = assessment.approved(),
                    evaluated = assessment.evaluated(),
                    skipped = assessment.skipped.len(),
                    "assessed"
                );
                assessment
            })
            .collect()
    }

    /// Verdicts of the philosophies that evaluated at least one check.
    #[must_use]
    pub fn verdicts(&self, equity: &dyn EquityData, tr: &dyn Translator) -> Vec<Verdict> {
        self.assess(equity, tr)
            .iter()
            .filter_map(|a| Verdict::from_assessment(a, self.bands))
            .collect()
    }

    /// Plain-text report, one block per philosophy.
    #[must_use]
    pub fn render_text(&self, equity: &dyn EquityData, tr: &dyn Translator) -> String {
        self.assess(equity, tr)
            .iter()
            .map(|a| render_assessment(a, self.bands, tr))
            .collect()
    }

    /// JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_json(&self, equity: &dyn EquityData, tr: &dyn Translator) -> Result<String> {
        let assessments = self.assess(equity, tr);
        JsonReport::new(equity.symbol(), equity.name(), &assessments, self.bands).to_json()
    }
}
