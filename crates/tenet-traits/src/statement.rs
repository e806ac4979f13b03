//! Financial statement stores.
//!
//! A [`StatementStore`] holds one statement category as a Polars DataFrame with
//! one Float64 column per metric label and one row per fiscal period. Row 0 is
//! always the most recent period. Stores are built once through
//! [`StatementBuilder`], which is the single place where source chronology is
//! normalized and source units are scaled; they are immutable afterwards.
//!
//! # Example
//!
//! ```
//! use tenet_traits::{Chronology, Date, Scale, StatementKind, StatementStore};
//!
//! let store = StatementStore::builder(StatementKind::IncomeStatement)
//!     .periods([
//!         Date::from_ymd_opt(2022, 12, 31).unwrap(),
//!         Date::from_ymd_opt(2023, 12, 31).unwrap(),
//!     ])
//!     .chronology(Chronology::OldestFirst)
//!     .scale(Scale::Millions)
//!     .metric("Total Revenue", [Some(90.0), Some(100.0)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.latest("Total Revenue"), Some(100e6));
//! assert!(store.series("Gross Profit").is_none());
//! ```

use crate::{Chronology, Date, Metric, Result, Scale, StatementKind, TenetError};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// One metric across the fiscal periods of a statement, most recent first.
///
/// Individual periods may be missing; a metric missing in every period is not
/// represented by a series at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    label: String,
    periods: Vec<Date>,
    values: Vec<Option<f64>>,
}

impl MetricSeries {
    /// Create a series from most-recent-first periods and values.
    ///
    /// Non-finite values are treated as missing.
    #[must_use]
    pub fn new(label: impl Into<String>, periods: Vec<Date>, values: Vec<Option<f64>>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.filter(|x| x.is_finite()))
            .collect();
        Self {
            label: label.into(),
            periods,
            values,
        }
    }

    /// Metric label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index` (0 = most recent), `None` if missing or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Most recent value.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.get(0)
    }

    /// All values, most recent first.
    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Period end dates, most recent first.
    #[must_use]
    pub fn periods(&self) -> &[Date] {
        &self.periods
    }

    /// Iterate over `(period, value)` pairs, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = (Date, Option<f64>)> + '_ {
        self.periods.iter().copied().zip(self.values.iter().copied())
    }

    /// `(period, value)` pairs with a reported value, oldest first.
    #[must_use]
    pub fn chronological(&self) -> Vec<(Date, f64)> {
        let mut points: Vec<(Date, f64)> = self
            .iter()
            .filter_map(|(period, value)| value.map(|v| (period, v)))
            .collect();
        points.reverse();
        points
    }
}

/// One financial statement as a labeled time series.
#[derive(Debug, Clone)]
pub struct StatementStore {
    kind: StatementKind,
    periods: Vec<Date>,
    data: DataFrame,
}

impl StatementStore {
    /// Start building a store for the given statement.
    #[must_use]
    pub fn builder(kind: StatementKind) -> StatementBuilder {
        StatementBuilder::new(kind)
    }

    /// A store with no periods and no metrics, for sources that lack a statement.
    #[must_use]
    pub fn empty(kind: StatementKind) -> Self {
        Self {
            kind,
            periods: Vec::new(),
            data: DataFrame::default(),
        }
    }

    /// Statement category.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Period end dates, most recent first.
    #[must_use]
    pub fn periods(&self) -> &[Date] {
        &self.periods
    }

    /// Number of periods on the axis shared by every metric.
    #[must_use]
    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// Whether the store holds no metric at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.width() == 0
    }

    /// The underlying DataFrame (one column per metric, row 0 most recent).
    #[must_use]
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Metric labels in storage order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Whether a metric is reported.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.series(label).is_some()
    }

    /// Look up a metric by label.
    ///
    /// Returns `None` when the label is not present or carries no value in any
    /// period. Never fails.
    #[must_use]
    pub fn series(&self, label: &str) -> Option<MetricSeries> {
        let column = self.data.column(label).ok()?;
        let values: Vec<Option<f64>> = column
            .as_materialized_series()
            .f64()
            .ok()?
            .into_iter()
            .collect();
        let series = MetricSeries::new(label, self.periods.clone(), values);
        series.values().iter().any(Option::is_some).then_some(series)
    }

    /// Look up a canonical metric.
    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<MetricSeries> {
        if metric.statement() != self.kind {
            return None;
        }
        self.series(metric.label())
    }

    /// Most recent value of a metric.
    #[must_use]
    pub fn latest(&self, label: &str) -> Option<f64> {
        self.series(label).and_then(|s| s.latest())
    }

    /// Serializable copy of the store.
    #[must_use]
    pub fn snapshot(&self) -> StatementSnapshot {
        let metrics = self
            .labels()
            .into_iter()
            .filter_map(|label| {
                let series = self.series(&label)?;
                Some((label, series.values().to_vec()))
            })
            .collect();
        StatementSnapshot {
            kind: self.kind,
            periods: self.periods.clone(),
            metrics,
        }
    }

    /// Rebuild a store from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot violates the store invariants.
    pub fn from_snapshot(snapshot: StatementSnapshot) -> Result<Self> {
        snapshot
            .metrics
            .into_iter()
            .fold(
                Self::builder(snapshot.kind)
                    .periods(snapshot.periods)
                    .chronology(Chronology::NewestFirst),
                |builder, (label, values)| builder.metric(label, values),
            )
            .build()
    }
}

/// Serialized form of a [`StatementStore`], most recent period first, raw units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSnapshot {
    /// Statement category.
    pub kind: StatementKind,
    /// Period end dates, most recent first.
    pub periods: Vec<Date>,
    /// Values per metric label.
    pub metrics: BTreeMap<String, Vec<Option<f64>>>,
}

/// Builder normalizing a source table into a [`StatementStore`].
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    kind: StatementKind,
    periods: Vec<Date>,
    chronology: Chronology,
    scale: Scale,
    metrics: Vec<(String, Vec<Option<f64>>)>,
}

impl StatementBuilder {
    /// Create a builder. Defaults to newest-first periods in raw units.
    #[must_use]
    pub const fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            periods: Vec::new(),
            chronology: Chronology::NewestFirst,
            scale: Scale::Units,
            metrics: Vec::new(),
        }
    }

    /// Period end dates in source order.
    #[must_use]
    pub fn periods(mut self, periods: impl IntoIterator<Item = Date>) -> Self {
        self.periods = periods.into_iter().collect();
        self
    }

    /// Declared order of the source periods.
    #[must_use]
    pub const fn chronology(mut self, chronology: Chronology) -> Self {
        self.chronology = chronology;
        self
    }

    /// Unit of the source figures.
    #[must_use]
    pub const fn scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Add a metric, values in source order.
    #[must_use]
    pub fn metric(
        mut self,
        label: impl Into<String>,
        values: impl IntoIterator<Item = Option<f64>>,
    ) -> Self {
        self.metrics
            .push((label.into(), values.into_iter().collect()));
        self
    }

    /// Validate, normalize and build the store.
    ///
    /// Periods are reversed here when the source is oldest-first, and figures
    /// are multiplied by the scale factor here and nowhere else. Metrics with no
    /// value in any period are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TenetError::InvalidData`] if a metric does not match the period
    /// axis, a label is duplicated, or the period dates contradict the declared
    /// chronology.
    pub fn build(self) -> Result<StatementStore> {
        let Self {
            kind,
            mut periods,
            chronology,
            scale,
            metrics,
        } = self;

        match Chronology::infer(&periods) {
            Some(actual) if periods.len() < 2 || actual == chronology => {}
            Some(actual) => {
                return Err(TenetError::InvalidData(format!(
                    "{kind}: periods declared {chronology:?} but dates run {actual:?}"
                )));
            }
            None => {
                return Err(TenetError::InvalidData(format!(
                    "{kind}: period dates are not strictly ordered"
                )));
            }
        }

        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(metrics.len());
        for (label, mut values) in metrics {
            if values.len() != periods.len() {
                return Err(TenetError::InvalidData(format!(
                    "{kind}: metric '{label}' has {} values for {} periods",
                    values.len(),
                    periods.len()
                )));
            }
            if !seen.insert(label.clone()) {
                return Err(TenetError::InvalidData(format!(
                    "{kind}: duplicate metric '{label}'"
                )));
            }
            if values.iter().all(|v| v.is_none()) {
                debug!(statement = %kind, %label, "dropping metric with no reported value");
                continue;
            }
            if chronology == Chronology::OldestFirst {
                values.reverse();
            }
            let factor = scale.factor();
            let values: Vec<Option<f64>> = values
                .into_iter()
                .map(|v| v.filter(|x| x.is_finite()).map(|x| x * factor))
                .collect();
            columns.push(Column::from(Series::new(
                PlSmallStr::from(label.as_str()),
                values,
            )));
        }

        if chronology == Chronology::OldestFirst {
            periods.reverse();
        }

        let data = if columns.is_empty() {
            DataFrame::default()
        } else {
            DataFrame::new(columns)?
        };
        debug!(
            statement = %kind,
            periods = periods.len(),
            metrics = data.width(),
            "built statement store"
        );

        Ok(StatementStore {
            kind,
            periods,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn year_end(y: i32) -> Date {
        Date::from_ymd_opt(y, 12, 31).unwrap()
    }

    fn income_store(chronology: Chronology, revenue: &[f64]) -> Result<StatementStore> {
        let mut years: Vec<Date> = (2019..2019 + revenue.len() as i32).map(year_end).collect();
        if chronology == Chronology::NewestFirst {
            years.reverse();
        }
        StatementStore::builder(StatementKind::IncomeStatement)
            .periods(years)
            .chronology(chronology)
            .metric("Total Revenue", revenue.iter().map(|v| Some(*v)))
            .build()
    }

    #[test]
    fn test_missing_label_is_absent() {
        let store = income_store(Chronology::NewestFirst, &[3.0, 2.0, 1.0]).unwrap();
        assert!(store.series("Gross Profit").is_none());
        assert!(store.latest("Gross Profit").is_none());
        assert!(!store.contains("Gross Profit"));
        assert!(store.contains("Total Revenue"));
    }

    #[test]
    fn test_chronological_source_is_reversed_at_load() {
        let chronological = [1.0, 2.0, 3.0, 4.0];
        let reversed: Vec<f64> = chronological.iter().rev().copied().collect();

        let from_oldest = income_store(Chronology::OldestFirst, &chronological).unwrap();
        let from_newest = income_store(Chronology::NewestFirst, &reversed).unwrap();

        let a = from_oldest.series("Total Revenue").unwrap();
        let b = from_newest.series("Total Revenue").unwrap();
        assert_eq!(a, b);
        assert_eq!(from_oldest.periods(), from_newest.periods());

        // Index 0 is the most recent period and the series is the element-wise
        // reverse of the chronological input.
        assert_eq!(a.latest(), Some(4.0));
        assert_eq!(from_oldest.periods()[0], year_end(2022));
        let loaded: Vec<f64> = a.values().iter().map(|v| v.unwrap()).collect();
        assert_eq!(loaded, reversed);
    }

    #[test]
    fn test_declared_order_contradicting_dates_is_rejected() {
        let result = StatementStore::builder(StatementKind::IncomeStatement)
            .periods([year_end(2021), year_end(2022)])
            .chronology(Chronology::NewestFirst)
            .metric("Total Revenue", [Some(1.0), Some(2.0)])
            .build();
        assert!(matches!(result, Err(TenetError::InvalidData(_))));
    }

    #[test]
    fn test_unordered_dates_are_rejected() {
        let result = StatementStore::builder(StatementKind::BalanceSheet)
            .periods([year_end(2022), year_end(2023), year_end(2021)])
            .metric("Total Assets", [Some(1.0), Some(2.0), Some(3.0)])
            .build();
        assert!(matches!(result, Err(TenetError::InvalidData(_))));
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let result = StatementStore::builder(StatementKind::IncomeStatement)
            .periods([year_end(2023), year_end(2022)])
            .metric("Total Revenue", [Some(1.0)])
            .build();
        assert!(matches!(result, Err(TenetError::InvalidData(_))));
    }

    #[test]
    fn test_duplicate_label_is_rejected() {
        let result = StatementStore::builder(StatementKind::IncomeStatement)
            .periods([year_end(2023)])
            .metric("Net Income", [Some(1.0)])
            .metric("Net Income", [Some(2.0)])
            .build();
        assert!(matches!(result, Err(TenetError::InvalidData(_))));
    }

    #[test]
    fn test_millions_are_scaled_once() {
        let store = StatementStore::builder(StatementKind::IncomeStatement)
            .periods([year_end(2023), year_end(2022)])
            .scale(Scale::Millions)
            .metric("Net Income", [Some(1.5), Some(2.0)])
            .build()
            .unwrap();
        let series = store.series("Net Income").unwrap();
        assert_relative_eq!(series.get(0).unwrap(), 1.5e6);
        assert_relative_eq!(series.get(1).unwrap(), 2.0e6);

        // A snapshot round trip must not scale again.
        let rebuilt = StatementStore::from_snapshot(store.snapshot()).unwrap();
        assert_relative_eq!(rebuilt.latest("Net Income").unwrap(), 1.5e6);
    }

    #[test]
    fn test_all_missing_metric_is_dropped() {
        let store = StatementStore::builder(StatementKind::CashFlow)
            .periods([year_end(2023), year_end(2022)])
            .metric("Capital Expenditures", [None, None])
            .metric("Depreciation/Depletion", [None, Some(4.0)])
            .build()
            .unwrap();
        assert_eq!(store.labels(), vec!["Depreciation/Depletion".to_string()]);
        let depreciation = store.series("Depreciation/Depletion").unwrap();
        assert_eq!(depreciation.latest(), None);
        assert_eq!(depreciation.get(1), Some(4.0));
    }

    #[test]
    fn test_non_finite_values_become_missing() {
        let store = StatementStore::builder(StatementKind::IncomeStatement)
            .periods([year_end(2023), year_end(2022)])
            .metric("Net Income", [Some(f64::NAN), Some(3.0)])
            .build()
            .unwrap();
        let series = store.series("Net Income").unwrap();
        assert_eq!(series.values(), &[None, Some(3.0)]);
    }

    #[test]
    fn test_metric_lookup_checks_statement() {
        let store = income_store(Chronology::NewestFirst, &[1.0]).unwrap();
        assert!(store.metric(Metric::Revenue).is_some());
        assert!(store.metric(Metric::TotalAssets).is_none());
    }

    #[test]
    fn test_chronological_points() {
        let store = StatementStore::builder(StatementKind::IncomeStatement)
            .periods([year_end(2023), year_end(2022), year_end(2021)])
            .metric("Net Income", [Some(3.0), None, Some(1.0)])
            .build()
            .unwrap();
        let points = store.series("Net Income").unwrap().chronological();
        assert_eq!(points, vec![(year_end(2021), 1.0), (year_end(2023), 3.0)]);
    }

    #[test]
    fn test_empty_store() {
        let store = StatementStore::empty(StatementKind::Ratios);
        assert!(store.is_empty());
        assert_eq!(store.period_count(), 0);
        assert!(store.series("Price to Sales TTM").is_none());
    }
}
