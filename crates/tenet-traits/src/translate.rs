//! Message translation.
//!
//! Evaluators and renderers receive a `&dyn Translator` and pass every
//! user-facing English fragment through it. Numbers are formatted outside the
//! translated fragments. English text is the lookup key; fragments without an
//! entry in a catalogue are returned unchanged.

use crate::{Result, TenetError};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt, str::FromStr};
use tracing::warn;

/// Translates English message fragments.
pub trait Translator: Send + Sync {
    /// Translate `text`, or return it unchanged if no translation exists.
    fn translate<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Built-in message catalogues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// English (identity translation).
    #[default]
    English,
    /// French.
    French,
}

impl Language {
    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }

    /// Resolve a language code, falling back to English with a warning.
    #[must_use]
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            warn!(
                language = code,
                "The specified language was not found, the default language will be used"
            );
            Self::default()
        })
    }
}

impl FromStr for Language {
    type Err = TenetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en_us" | "en_gb" | "english" => Ok(Self::English),
            "fr" | "fr_fr" | "french" | "français" => Ok(Self::French),
            other => Err(TenetError::InvalidData(format!("unsupported language '{other}'"))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Translator for Language {
    fn translate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::English => Cow::Borrowed(text),
            Self::French => Cow::Borrowed(french(text).unwrap_or(text)),
        }
    }
}

fn french(text: &str) -> Option<&'static str> {
    let translated = match text {
        // Verdicts
        "The stock value of" => "La valeur boursière de",
        "Recommendation" => "Recommandation",
        "Pros" => "Points forts",
        "Cons" => "Points faibles",
        "meets some of Warren Buffett's selection criteria" => {
            "répond à certains critères de sélection de Warren Buffett"
        }
        "meets most of Warren Buffett's selection criteria" => {
            "répond à la plupart des critères de sélection de Warren Buffett"
        }
        "does not meet Warren Buffett's selection criteria" => {
            "ne répond pas aux critères de sélection de Warren Buffett"
        }
        "meets some of Jim Slater's selection criteria" => {
            "répond à certains critères de sélection de Jim Slater"
        }
        "meets most of Jim Slater's selection criteria" => {
            "répond à la plupart des critères de sélection de Jim Slater"
        }
        "does not meet Jim Slater's selection criteria" => {
            "ne répond pas aux critères de sélection de Jim Slater"
        }
        "meets some of Chris Mayer's selection criteria" => {
            "répond à certains critères de sélection de Chris Mayer"
        }
        "meets most of Chris Mayer's selection criteria" => {
            "répond à la plupart des critères de sélection de Chris Mayer"
        }
        "does not meet Chris Mayer's selection criteria" => {
            "ne répond pas aux critères de sélection de Chris Mayer"
        }
        "No criterion could be evaluated" => "Aucun critère n'a pu être évalué",

        // Value
        "The gross margin is higher than" => "La marge brute est supérieure à",
        "The gross margin is lower than" => "La marge brute est inférieure à",
        "The net margin is higher than" => "La marge nette est supérieure à",
        "The net margin is lower than" => "La marge nette est inférieure à",
        "Selling, General and Administrative expenses represent less than" => {
            "Les frais de vente, généraux et administratifs représentent moins de"
        }
        "Selling, General and Administrative expenses represent more than" => {
            "Les frais de vente, généraux et administratifs représentent plus de"
        }
        "of the gross margin" => "de la marge brute",
        "The interest expense is lower than" => "Les charges d'intérêts sont inférieures à",
        "The interest expense is higher than" => "Les charges d'intérêts sont supérieures à",
        "The net earnings follow an upward trend over a period of" => {
            "Le résultat net suit une tendance haussière sur une période de"
        }
        "The net earnings follow a downward trend over a period of" => {
            "Le résultat net suit une tendance baissière sur une période de"
        }
        "years" => "ans",
        "The current ratio is higher than" => "Le ratio de liquidité générale est supérieur à",
        "The current ratio is lower than" => "Le ratio de liquidité générale est inférieur à",
        "However, you should note that the current ratio is higher than" => {
            "Notez toutefois que le ratio de liquidité générale est supérieur à"
        }
        "which may indicate mismanagement of money due to an inability to collect payments" => {
            "ce qui peut indiquer une mauvaise gestion de la trésorerie due à une incapacité à recouvrer les paiements"
        }
        "The company must acquire new debt to pay its debt obligations" => {
            "L'entreprise doit contracter de nouvelles dettes pour honorer ses obligations"
        }
        "Inventories move in line with profits" => {
            "Les stocks évoluent en ligne avec les bénéfices"
        }
        "Inventories do not move in line with profits (to be taken into account only if the products sold may become obsolete)" => {
            "Les stocks n'évoluent pas en ligne avec les bénéfices (à prendre en compte uniquement si les produits vendus peuvent devenir obsolètes)"
        }
        "Tangible fixed assets (PPE) are reasonable: the tangible fixed assets to net income ratio is less than" => {
            "Les immobilisations corporelles sont raisonnables : le ratio immobilisations corporelles sur résultat net est inférieur à"
        }
        "The tangible fixed assets (PPE) are not very reasonable: the tangible fixed assets to net income ratio is greater than" => {
            "Les immobilisations corporelles sont peu raisonnables : le ratio immobilisations corporelles sur résultat net est supérieur à"
        }
        "The depreciation is low" => "Les amortissements sont faibles",
        "The depreciation is high" => "Les amortissements sont élevés",
        "The company has a significant amount of cash which increases by" => {
            "L'entreprise dispose d'une trésorerie importante qui augmente de"
        }
        "on average per year" => "en moyenne par an",
        "The company draws on its cash" => "L'entreprise puise dans sa trésorerie",
        "The company is in a strong position, its long-term debt to net income ratio is less than" => {
            "L'entreprise est en position de force, son ratio dette à long terme sur résultat net est inférieur à"
        }
        "The company is not in a strong position, its long-term debt to net income ratio is greater than" => {
            "L'entreprise n'est pas en position de force, son ratio dette à long terme sur résultat net est supérieur à"
        }
        "Capital expenditures are reasonable, they represent less than" => {
            "Les dépenses d'investissement sont raisonnables, elles représentent moins de"
        }
        "Capital expenditures are not very reasonable, they represent more than" => {
            "Les dépenses d'investissement sont peu raisonnables, elles représentent plus de"
        }
        "of the net income" => "du résultat net",

        // Growth
        "Slater likes smallcaps" => "Slater apprécie les petites capitalisations",
        "Slater prefers smallcaps" => "Slater préfère les petites capitalisations",
        "The annual earnings growth rate is higher than" => {
            "Le taux de croissance annuel des bénéfices est supérieur à"
        }
        "The annual earnings growth rate is lower than" => {
            "Le taux de croissance annuel des bénéfices est inférieur à"
        }
        "The return on capital employed is higher than" => {
            "La rentabilité des capitaux employés est supérieure à"
        }
        "The return on capital employed is lower than" => {
            "La rentabilité des capitaux employés est inférieure à"
        }
        "The company has good financials, its QR is higher than" => {
            "L'entreprise a de bons fondamentaux, son ratio de liquidité immédiate est supérieur à"
        }
        "The company doesn't have good financials, its QR is lower than" => {
            "L'entreprise n'a pas de bons fondamentaux, son ratio de liquidité immédiate est inférieur à"
        }

        // Momentum
        "Mayer may consider this company as a potential 100-bagger provided it has an international expansion potential" => {
            "Mayer peut considérer cette entreprise comme un potentiel 100-bagger à condition qu'elle ait un potentiel d'expansion internationale"
        }
        "Mayer may not consider this company as a potential 100-bagger" => {
            "Mayer ne considère probablement pas cette entreprise comme un potentiel 100-bagger"
        }

        // Reports
        "Net income" => "Résultat net",
        "Est." => "Est.",
        "No estimate" => "Aucune estimation",
        "Ratio" => "Ratio",
        "Value" => "Valeur",
        "Grade" => "Appréciation",
        "excellent" => "excellent",
        "good" => "bon",
        "bad" => "mauvais",
        "very bad" => "très mauvais",
        "Operating margin" => "Marge opérationnelle",
        "Gross margin" => "Marge brute",
        "Net margin" => "Marge nette",
        "Return on assets" => "Rentabilité des actifs",
        "Return on equity" => "Rentabilité des capitaux propres",
        "Return on capital employed" => "Rentabilité des capitaux employés",
        "Current ratio" => "Ratio de liquidité générale",
        "Quick ratio" => "Ratio de liquidité immédiate",
        "Price to earnings" => "Cours sur bénéfice",
        "EV to EBITDA" => "VE sur EBITDA",
        "EBIT to EV" => "EBIT sur VE",
        "Market capitalization" => "Capitalisation boursière",
        "Downloading the company's data..." => "Téléchargement des données de l'entreprise...",
        "Successfully downloaded the company's data" => {
            "Données de l'entreprise téléchargées avec succès"
        }
        "Loading cached company's data..." => {
            "Chargement des données de l'entreprise en cache..."
        }
        _ => return None,
    };
    Some(translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_is_identity() {
        let text = "The gross margin is higher than";
        assert!(matches!(Language::English.translate(text), Cow::Borrowed(t) if t == text));
    }

    #[test]
    fn test_french_catalogue() {
        assert_eq!(Language::French.translate("Pros"), "Points forts");
        assert_eq!(
            Language::French.translate("meets most of Jim Slater's selection criteria"),
            "répond à la plupart des critères de sélection de Jim Slater"
        );
    }

    #[test]
    fn test_unknown_fragment_passes_through() {
        assert_eq!(Language::French.translate("ACME Corp"), "ACME Corp");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("fr".parse::<Language>().unwrap(), Language::French);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::from_code_or_default("de"), Language::English);
        assert_eq!(Language::French.to_string(), "fr");
    }
}
