//! Next-year earnings estimate.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tenet_traits::{EquityData, Metric, Result, TenetError, Translator, linear_trend};
use tracing::warn;

/// Net income history with the trend estimate for the following fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsForecast {
    /// `(fiscal year, net income)`, oldest first.
    pub history: Vec<(i32, f64)>,
    /// `(fiscal year, estimated net income)`, absent when no estimate exists.
    pub estimate: Option<(i32, f64)>,
}

impl EarningsForecast {
    /// Build the forecast from an equity's net income history.
    ///
    /// Too short a history yields a forecast without an estimate.
    ///
    /// # Errors
    ///
    /// Returns [`TenetError::MissingMetric`] if net income is not reported.
    pub fn from_equity(equity: &dyn EquityData) -> Result<Self> {
        let series = equity
            .history(Metric::NetIncome)
            .ok_or_else(|| TenetError::MissingMetric(Metric::NetIncome.label().to_string()))?;
        let history: Vec<(i32, f64)> = series
            .chronological()
            .into_iter()
            .map(|(date, value)| (date.year(), value))
            .collect();
        let points: Vec<(f64, f64)> = history.iter().map(|(y, v)| (f64::from(*y), *v)).collect();

        let estimate = match linear_trend(&points) {
            Ok(trend) => Some((trend.next_period as i32, trend.projected)),
            Err(TenetError::InsufficientData(reason)) => {
                warn!(symbol = equity.symbol(), %reason, "no earnings estimate");
                None
            }
            Err(e) => {
                warn!(symbol = equity.symbol(), error = %e, "earnings trend failed");
                None
            }
        };
        Ok(Self { history, estimate })
    }

    /// Render as a two-row table: fiscal years then net income, the estimate
    /// last under an `Est. YYYY` header.
    #[must_use]
    pub fn render(&self, tr: &dyn Translator) -> String {
        let mut headers: Vec<String> = self.history.iter().map(|(y, _)| y.to_string()).collect();
        let mut values: Vec<String> = self.history.iter().map(|(_, v)| millify(*v)).collect();
        match self.estimate {
            Some((year, value)) => {
                headers.push(format!("{} {year}", tr.translate("Est.")));
                values.push(millify(value));
            }
            None => {
                headers.push(tr.translate("Est.").into_owned());
                values.push(tr.translate("No estimate").into_owned());
            }
        }
        let widths: Vec<usize> = headers
            .iter()
            .zip(&values)
            .map(|(h, v)| h.chars().count().max(v.chars().count()))
            .collect();
        let row = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{c:>width$}", width = *w))
                .collect::<Vec<_>>()
                .join("  ")
        };
        let label = tr.translate("Net income");
        let pad = label.chars().count();
        format!(
            "{:pad$}  {}\n{label}  {}",
            "",
            row(&headers),
            row(&values)
        )
    }
}

/// Abbreviate a large figure, e.g. `1.23B`.
#[must_use]
pub fn millify(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];
    UNITS
        .iter()
        .find(|(scale, _)| value.abs() >= *scale)
        .map_or_else(
            || format!("{value:.2}"),
            |(scale, unit)| format!("{:.2}{unit}", value / scale),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenet_traits::{Date, Equity, Language, StatementKind, StatementStore};

    fn equity(values: &[f64]) -> Equity {
        // values oldest first, fiscal years 2017 onwards
        let periods: Vec<Date> = (0..values.len())
            .map(|i| Date::from_ymd_opt(2017 + i as i32, 12, 31).unwrap())
            .collect();
        let income = StatementStore::builder(StatementKind::IncomeStatement)
            .periods(periods)
            .chronology(tenet_traits::Chronology::OldestFirst)
            .metric("Net Income", values.iter().map(|v| Some(*v)))
            .build()
            .unwrap();
        Equity::new("ACME", "Acme", 1.0).with_statement(income)
    }

    #[test]
    fn test_estimate_for_next_fiscal_year() {
        let forecast =
            EarningsForecast::from_equity(&equity(&[10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 21.0]))
                .unwrap();
        assert_eq!(forecast.history.first(), Some(&(2017, 10.0)));
        let (year, value) = forecast.estimate.unwrap();
        assert_eq!(year, 2024);
        assert_relative_eq!(value, 23.433_333_333_333_334, epsilon = 1e-6);
    }

    #[test]
    fn test_short_history_has_no_estimate() {
        let forecast = EarningsForecast::from_equity(&equity(&[10.0, 12.0])).unwrap();
        assert!(forecast.estimate.is_none());
        assert!(forecast.render(&Language::English).contains("No estimate"));
    }

    #[test]
    fn test_missing_net_income() {
        let result = EarningsForecast::from_equity(&Equity::new("ACME", "Acme", 1.0));
        assert!(matches!(result, Err(TenetError::MissingMetric(_))));
    }

    #[test]
    fn test_render_headers() {
        let forecast = EarningsForecast::from_equity(&equity(&[1e9, 2e9, 3e9])).unwrap();
        let table = forecast.render(&Language::English);
        assert!(table.contains("2017"));
        assert!(table.contains("Est. 2020"));
        assert!(table.contains("4.00B"));
    }

    #[test]
    fn test_millify() {
        assert_eq!(millify(1_234_000_000.0), "1.23B");
        assert_eq!(millify(-5_500_000.0), "-5.50M");
        assert_eq!(millify(12.0), "12.00");
    }
}
