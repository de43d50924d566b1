//! Preprocessing run by the host before data is handed to the chart.

use crate::domain::DataPoint;
use crate::models::filter::remove_outliers;

/// Current yield as a z-score against the 5-year yield distribution.
/// `None` when any input is missing or the spread is zero.
pub fn relative_yield(point: &DataPoint) -> Option<f64> {
    let dist = point.yield_dist5y?;
    let div_yield = point.div_yield?;
    if dist.std == 0.0 || !dist.std.is_finite() || !dist.mean.is_finite() {
        return None;
    }
    Some((div_yield - dist.mean) / dist.std)
}

/// Copies `records`, fills in `relative`, and optionally drops payout/growth outliers.
/// The input slice is never reordered or modified.
pub fn preprocess(records: &[DataPoint], outliers: bool) -> Vec<DataPoint> {
    let augmented: Vec<DataPoint> = records
        .iter()
        .map(|record| {
            let mut point = record.clone();
            point.relative = relative_yield(record);
            point
        })
        .collect();

    if outliers {
        remove_outliers(&augmented).into_iter().cloned().collect()
    } else {
        augmented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::YieldDistribution;

    fn with_dist(ticker: &str, div_yield: f64, mean: f64, std: f64) -> DataPoint {
        let mut point = DataPoint::new(ticker).with_field("divYield", div_yield);
        point.yield_dist5y = Some(YieldDistribution {
            mean,
            std,
            ..Default::default()
        });
        point
    }

    #[test]
    fn relative_is_the_yield_z_score() {
        let out = preprocess(&[with_dist("A", 4.0, 3.0, 0.5)], false);
        assert_eq!(out[0].relative, Some(2.0));
    }

    #[test]
    fn degenerate_distribution_leaves_relative_unset() {
        let records = [
            with_dist("FLAT", 3.0, 3.0, 0.0),
            DataPoint::new("NODIST").with_field("divYield", 3.0),
        ];
        let out = preprocess(&records, false);
        assert!(out.iter().all(|p| p.relative.is_none()));
    }

    #[test]
    fn outlier_step_trims_a_copy() {
        let records: Vec<DataPoint> = (0..20)
            .map(|i| {
                with_dist(&format!("C{i:02}"), 3.0, 3.0, 1.0)
                    .with_field("payout", 10.0 + i as f64)
                    .with_field("divg3y", i as f64)
            })
            .collect();
        let before = records.clone();

        let trimmed = preprocess(&records, true);
        assert_eq!(records, before);
        assert_eq!(trimmed.len(), 19);
        assert!(trimmed.iter().all(|p| p.ticker != "C19"));
        assert!(trimmed.iter().all(|p| p.relative == Some(0.0)));
    }
}
