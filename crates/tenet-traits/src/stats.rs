//! Trend estimation over short annual series.
//!
//! Statement histories rarely span more than a handful of fiscal years, so the
//! estimator here is deliberately simple: the series is cut into three
//! contiguous chunks, each chunk is reduced to its mean point, and a line is
//! drawn through the centroid of those three anchors with the slope between
//! the outer two.

use crate::{Result, TenetError};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Minimum number of points accepted by [`linear_trend`].
pub const MIN_TREND_POINTS: usize = 3;

/// A fitted three-anchor trend and its one-step projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendEstimate {
    /// Slope between the first and last anchor.
    pub slope: f64,
    /// Intercept of the line through the anchors' centroid.
    pub intercept: f64,
    /// Period one step after the latest input period.
    pub next_period: f64,
    /// Value of the line at `next_period`.
    pub projected: f64,
}

impl TrendEstimate {
    /// Value of the fitted line at `period`.
    #[must_use]
    pub fn predict(&self, period: f64) -> f64 {
        self.intercept + self.slope * period
    }
}

/// Fit the three-anchor trend through `(period, value)` points.
///
/// Points are split in input order into a first and last chunk of
/// `len / 3` points each and a middle chunk holding the rest. The line is
/// extrapolated to the largest period plus one.
///
/// # Errors
///
/// - [`TenetError::InsufficientData`] with fewer than three points.
/// - [`TenetError::InvalidData`] if a point is not finite.
/// - [`TenetError::Computation`] if the outer anchors share the same period.
///
/// # Examples
///
/// ```
/// use tenet_traits::stats::linear_trend;
///
/// let points: Vec<(f64, f64)> = [10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 21.0]
///     .iter()
///     .enumerate()
///     .map(|(i, v)| (i as f64, *v))
///     .collect();
///
/// let trend = linear_trend(&points).unwrap();
/// assert!((trend.slope - 1.9).abs() < 1e-12);
/// assert_eq!(trend.next_period, 7.0);
/// ```
pub fn linear_trend(points: &[(f64, f64)]) -> Result<TrendEstimate> {
    if points.len() < MIN_TREND_POINTS {
        return Err(TenetError::InsufficientData(format!(
            "trend needs at least {MIN_TREND_POINTS} points, got {}",
            points.len()
        )));
    }
    if points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(TenetError::InvalidData(
            "trend input contains a non-finite point".to_string(),
        ));
    }

    let periods: Array1<f64> = points.iter().map(|(x, _)| *x).collect();
    let values: Array1<f64> = points.iter().map(|(_, y)| *y).collect();

    let n = points.len() / 3;
    let bounds = [(0, n), (n, points.len() - n), (points.len() - n, points.len())];

    let mut anchors = [(0.0, 0.0); 3];
    for (anchor, (start, end)) in anchors.iter_mut().zip(bounds) {
        *anchor = (
            chunk_mean(periods.slice(ndarray::s![start..end]))?,
            chunk_mean(values.slice(ndarray::s![start..end]))?,
        );
    }

    let [(x1, y1), (x2, y2), (x3, y3)] = anchors;
    let run = x3 - x1;
    if run == 0.0 {
        return Err(TenetError::Computation(
            "first and last trend anchors share the same period".to_string(),
        ));
    }
    let slope = (y3 - y1) / run;
    let centroid_x = (x1 + x2 + x3) / 3.0;
    let centroid_y = (y1 + y2 + y3) / 3.0;
    let intercept = centroid_y - slope * centroid_x;

    let next_period = periods.fold(f64::NEG_INFINITY, |acc, x| acc.max(*x)) + 1.0;
    let projected = intercept + slope * next_period;
    if !projected.is_finite() {
        return Err(TenetError::Computation(
            "trend projection is not finite".to_string(),
        ));
    }

    Ok(TrendEstimate {
        slope,
        intercept,
        next_period,
        projected,
    })
}

fn chunk_mean(chunk: ArrayView1<'_, f64>) -> Result<f64> {
    chunk
        .mean()
        .ok_or_else(|| TenetError::Computation("empty trend chunk".to_string()))
}
