//! Text and JSON rendering of verdicts.

use crate::verdict::{BandPolicy, Verdict};
use serde::Serialize;
use tenet_traits::{Assessment, Result, Translator, bullet_block};

/// Render a verdict as the plain-text block printed per philosophy:
/// headline, recommendation line, then the "Pros" and "Cons" blocks.
#[must_use]
pub fn render_text(verdict: &Verdict, tr: &dyn Translator) -> String {
    let sentence = verdict.band.criteria_sentence(&verdict.investor);
    let pros = bullet_block(&verdict.results, true);
    let cons = bullet_block(&verdict.results, false);
    format!(
        "\n{} {} {}\n\n{} {:.2}/10\n{}: {pros}\n{}: {cons}\n",
        tr.translate("The stock value of"),
        verdict.company,
        tr.translate(&sentence),
        tr.translate("Recommendation"),
        verdict.score,
        tr.translate("Pros"),
        tr.translate("Cons"),
    )
}

/// Render an assessment as text, or a notice when nothing was evaluated.
#[must_use]
pub fn render_assessment(
    assessment: &Assessment,
    policy: BandPolicy,
    tr: &dyn Translator,
) -> String {
    Verdict::from_assessment(assessment, policy).map_or_else(
        || {
            format!(
                "\n{} ({})\n",
                tr.translate("No criterion could be evaluated"),
                assessment.investor
            )
        },
        |verdict| render_text(&verdict, tr),
    )
}

/// JSON document for one equity: every verdict plus the philosophies that
/// produced none.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    /// Ticker symbol.
    pub symbol: &'a str,
    /// Company display name.
    pub company: &'a str,
    /// Verdicts in evaluation order.
    pub verdicts: Vec<Verdict>,
    /// Philosophies with no evaluable check.
    pub unevaluated: Vec<String>,
}

impl<'a> JsonReport<'a> {
    /// Aggregate assessments of one equity.
    #[must_use]
    pub fn new(
        symbol: &'a str,
        company: &'a str,
        assessments: &[Assessment],
        policy: BandPolicy,
    ) -> Self {
        let mut verdicts = Vec::new();
        let mut unevaluated = Vec::new();
        for assessment in assessments {
            match Verdict::from_assessment(assessment, policy) {
                Some(verdict) => verdicts.push(verdict),
                None => unevaluated.push(assessment.philosophy.clone()),
            }
        }
        Self {
            symbol,
            company,
            verdicts,
            unevaluated,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenet_traits::{CriterionResult, Language};

    fn assessment() -> Assessment {
        let mut assessment = Assessment::new("buffett", "Warren Buffett", "Acme Corp");
        assessment.record(CriterionResult::new(
            "gross_margin",
            true,
            45.0,
            "The gross margin is higher than 40% (45.00%)",
        ));
        assessment.record(CriterionResult::new(
            "net_margin",
            true,
            25.0,
            "The net margin is higher than 20% (25.00%)",
        ));
        assessment
    }

    #[test]
    fn test_render_text() {
        let text = render_assessment(&assessment(), BandPolicy::Strict, &Language::English);
        assert_eq!(
            text,
            "\nThe stock value of Acme Corp meets most of Warren Buffett's selection criteria\n\
             \nRecommendation 10.00/10\
             \nPros: \n-The gross margin is higher than 40% (45.00%)\
             \n-The net margin is higher than 20% (25.00%)\
             \nCons: \n"
        );
    }

    #[test]
    fn test_render_text_french_headline() {
        let text = render_assessment(&assessment(), BandPolicy::Strict, &Language::French);
        assert!(text.contains(
            "La valeur boursière de Acme Corp répond à la plupart des critères de sélection de Warren Buffett"
        ));
        assert!(text.contains("Recommandation 10.00/10"));
    }

    #[test]
    fn test_nothing_evaluated() {
        let empty = Assessment::new("mayer", "Chris Mayer", "Acme Corp");
        let text = render_assessment(&empty, BandPolicy::Strict, &Language::English);
        assert_eq!(text, "\nNo criterion could be evaluated (Chris Mayer)\n");
    }

    #[test]
    fn test_json_report() {
        let empty = Assessment::new("mayer", "Chris Mayer", "Acme Corp");
        let report =
            JsonReport::new("ACME", "Acme Corp", &[assessment(), empty], BandPolicy::Strict);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["verdicts"][0]["score"], 10.0);
        assert_eq!(value["unevaluated"][0], "mayer");
    }
}
