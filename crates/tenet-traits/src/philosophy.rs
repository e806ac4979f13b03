//! Philosophy trait for rule-based stock selection.
//!
//! This module defines the `Philosophy` trait, the core abstraction for
//! judging a company against an investor's published selection rules. A
//! philosophy reads an equity through [`EquityData`], runs its checks, and
//! returns an [`Assessment`] listing the evaluated and the skipped checks.

use crate::{Assessment, EquityData, Metric, Translator};

/// An investor's rule set.
///
/// Implementations must be thread-safe (`Send + Sync`) so that several
/// philosophies can assess the same immutable equity in parallel.
///
/// # Missing data
///
/// A philosophy never fails on missing data. A check whose inputs are not
/// reported is recorded as skipped; it counts neither as evaluated nor as
/// failed.
///
/// # Example
///
/// ```no_run
/// use tenet_traits::{Assessment, CriterionResult, EquityData, Metric, Philosophy, Translator};
///
/// struct Profitable;
///
/// impl Philosophy for Profitable {
///     fn name(&self) -> &str {
///         "profitable"
///     }
///
///     fn investor(&self) -> &str {
///         "Anyone"
///     }
///
///     fn required_metrics(&self) -> Vec<Metric> {
///         vec![Metric::NetIncome]
///     }
///
///     fn evaluate(&self, equity: &dyn EquityData, tr: &dyn Translator) -> Assessment {
///         let mut assessment = Assessment::new(self.name(), self.investor(), equity.name());
///         match equity.latest(Metric::NetIncome) {
///             Some(v) => assessment.record(CriterionResult::new(
///                 "net_income",
///                 v > 0.0,
///                 v,
///                 tr.translate("Net income"),
///             )),
///             None => assessment.skip("net_income"),
///         }
///         assessment
///     }
/// }
/// ```
pub trait Philosophy: Send + Sync {
    /// Returns the unique, lowercase name of this philosophy.
    fn name(&self) -> &str;

    /// Returns the investor the rules are attributed to, as used in verdicts.
    fn investor(&self) -> &str;

    /// Returns a short description of the investment style.
    fn description(&self) -> &str {
        ""
    }

    /// Returns the canonical metrics the checks may read.
    ///
    /// Informational; absence of any of them only causes checks to be skipped.
    fn required_metrics(&self) -> Vec<Metric>;

    /// Whether the checks also use the market capitalization.
    fn uses_market_cap(&self) -> bool {
        false
    }

    /// Assesses one equity.
    ///
    /// User-facing text in the assessment is produced through `tr`.
    fn evaluate(&self, equity: &dyn EquityData, tr: &dyn Translator) -> Assessment;
}
