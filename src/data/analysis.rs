use super::model::{EigenvalueSeries, VarianceProfile};

// ---------------------------------------------------------------------------
// Proportion of variance
// ---------------------------------------------------------------------------

/// Express every eigenvalue as a percentage of the total variance.
///
/// A zero total is not special-cased: the proportions come out non-finite
/// and are passed downstream unchanged.
pub fn analyze(series: &EigenvalueSeries) -> VarianceProfile {
    let total = series.total();
    let proportions = series
        .values()
        .iter()
        .map(|&value| value / total * 100.0)
        .collect();
    let ranks = (1..=series.len() as u32).collect();

    VarianceProfile {
        total,
        ranks,
        proportions,
    }
}

/// Rank of the first eigenvalue that is larger than the one before it.
///
/// The chart's Y limit and "top components" labels read the leading entries,
/// so they are only meaningful for a series sorted largest-first.
pub fn descending_violation(values: &[f64]) -> Option<u32> {
    values
        .windows(2)
        .position(|pair| pair[1] > pair[0])
        .map(|idx| idx as u32 + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(values: &[f64]) -> VarianceProfile {
        analyze(&EigenvalueSeries::new(values.to_vec()))
    }

    #[test]
    fn proportions_of_reference_series() {
        let p = profile(&[10.0, 5.0, 5.0]);
        assert_eq!(p.total, 20.0);
        assert_eq!(p.proportions, vec![50.0, 25.0, 25.0]);
        assert_eq!(p.ranks, vec![1, 2, 3]);
    }

    #[test]
    fn single_value_is_whole_variance() {
        let p = profile(&[7.5]);
        assert_eq!(p.proportions, vec![100.0]);
        assert_eq!(p.ranks, vec![1]);
    }

    #[test]
    fn proportions_sum_to_hundred() {
        let values: Vec<f64> = (0..137).map(|i| 3.7 * (-(i as f64) / 9.0).exp()).collect();
        let p = profile(&values);
        let sum: f64 = p.proportions.iter().sum();
        assert_eq!(p.len(), values.len());
        assert!(((sum - 100.0) / 100.0).abs() < 1e-6, "sum = {sum}");
    }

    #[test]
    fn ranks_are_one_based_positions() {
        let p = profile(&[4.0, 3.0, 2.0, 1.0, 0.5]);
        assert_eq!(p.ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_total_propagates_non_finite() {
        let p = profile(&[0.0, 0.0]);
        assert!(p.proportions.iter().all(|v| !v.is_finite()));
    }

    #[test]
    fn empty_series_gives_empty_profile() {
        let p = profile(&[]);
        assert!(p.is_empty());
        assert!(p.ranks.is_empty());
    }

    #[test]
    fn detects_first_out_of_order_rank() {
        assert_eq!(descending_violation(&[5.0, 4.0, 4.0, 1.0]), None);
        assert_eq!(descending_violation(&[5.0, 4.0, 6.0, 1.0]), Some(3));
        assert_eq!(descending_violation(&[1.0, 2.0]), Some(2));
        assert_eq!(descending_violation(&[]), None);
    }
}
