//! Growth computations over statement histories.
//!
//! All inputs are most-recent-first, as stored in a
//! [`StatementStore`](tenet_traits::StatementStore).

use std::cmp::Ordering;

/// Earnings trend: the signed sum of period-over-period percentage changes,
/// divided by the total number of periods.
///
/// Pairs are walked from the oldest eligible one to the newest, leaving out the
/// very first and very last index: for `i` from `n - 2` down to `1`, the term
/// is `(1 - v[i-1] / v[i]) * 100`, negated when `v[i-1] > v[i]`. The sum is
/// divided once by `n`, not by the number of pairs.
///
/// Returns `None` with fewer than three periods, or when a value in the window
/// is missing or an older value is zero.
#[must_use]
pub fn earnings_trend(values: &[Option<f64>]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    let mut sum = 0.0;
    for i in (1..n - 1).rev() {
        let newer = values[i - 1]?;
        let older = values[i]?;
        if older == 0.0 {
            return None;
        }
        let term = (1.0 - newer / older) * 100.0;
        sum += if newer > older { -term } else { term };
    }
    Some(sum / n as f64).filter(|v| v.is_finite())
}

/// Average period-over-period percentage change, `(newer / older - 1) * 100`.
///
/// Pairs with a missing value or a zero older value are left out of the
/// average. Returns `None` if no pair can be computed.
#[must_use]
pub fn average_growth(values: &[Option<f64>]) -> Option<f64> {
    let changes: Vec<f64> = values
        .windows(2)
        .filter_map(|pair| match (pair[0], pair[1]) {
            (Some(newer), Some(older)) if older != 0.0 => Some((newer / older - 1.0) * 100.0),
            _ => None,
        })
        .filter(|v| v.is_finite())
        .collect();
    if changes.is_empty() {
        return None;
    }
    Some(changes.iter().sum::<f64>() / changes.len() as f64)
}

/// Whether two aligned histories move in the same direction for every
/// adjacent pair of periods.
///
/// Pairs where either history has a missing value are ignored. Returns `None`
/// when the histories have different lengths or no pair is comparable.
#[must_use]
pub fn co_movement(first: &[Option<f64>], second: &[Option<f64>]) -> Option<bool> {
    if first.len() != second.len() {
        return None;
    }
    let directions: Vec<(Ordering, Ordering)> = first
        .windows(2)
        .zip(second.windows(2))
        .filter_map(|(a, b)| Some((direction(a[0]?, a[1]?)?, direction(b[0]?, b[1]?)?)))
        .collect();
    if directions.is_empty() {
        return None;
    }
    Some(directions.iter().all(|(a, b)| a == b))
}

fn direction(newer: f64, older: f64) -> Option<Ordering> {
    newer.partial_cmp(&older)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_earnings_trend_window_and_divisor() {
        // n = 4: pairs (v[1], v[2]) then (v[0], v[1]).
        // (v1=110, v2=100): newer > older, term = -(1 - 1.1) * 100 = 10
        // (v0=99, v1=110): term = (1 - 0.9) * 100 = 10
        // sum = 20, divided by 4.
        let trend = earnings_trend(&some(&[99.0, 110.0, 100.0, 7.0])).unwrap();
        assert_relative_eq!(trend, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_earnings_trend_ignores_outer_pair() {
        // The oldest value only sets n.
        let a = earnings_trend(&some(&[12.0, 10.0, 5.0])).unwrap();
        let b = earnings_trend(&some(&[12.0, 10.0, 5000.0])).unwrap();
        assert_relative_eq!(a, b);
        assert_relative_eq!(a, 20.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_earnings_trend_needs_three_periods() {
        assert_eq!(earnings_trend(&some(&[2.0, 1.0])), None);
        assert_eq!(earnings_trend(&[Some(3.0), None, Some(1.0)]), None);
        assert_eq!(earnings_trend(&some(&[3.0, 0.0, 1.0])), None);
    }

    #[test]
    fn test_flat_earnings_have_zero_trend() {
        assert_relative_eq!(earnings_trend(&some(&[5.0, 5.0, 5.0, 5.0])).unwrap(), 0.0);
    }

    #[test]
    fn test_average_growth() {
        // 110/100 -> +10%, 100/125 -> -20%
        let growth = average_growth(&some(&[110.0, 100.0, 125.0])).unwrap();
        assert_relative_eq!(growth, -5.0, epsilon = 1e-9);
        assert_eq!(average_growth(&some(&[1.0])), None);
        assert_eq!(average_growth(&[Some(1.0), Some(0.0)]), None);
    }

    #[test]
    fn test_co_movement() {
        let inventory = some(&[30.0, 20.0, 10.0]);
        let earnings = some(&[9.0, 8.0, 7.0]);
        assert_eq!(co_movement(&inventory, &earnings), Some(true));

        let falling = some(&[7.0, 8.0, 9.0]);
        assert_eq!(co_movement(&inventory, &falling), Some(false));

        let gappy = [Some(30.0), None, Some(10.0)];
        assert_eq!(co_movement(&gappy, &earnings), None);
        assert_eq!(co_movement(&inventory, &some(&[1.0, 2.0])), None);
    }
}
