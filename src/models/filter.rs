//! Filter evaluator: which records are visible.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::FILTER_DEFAULTS;
use crate::domain::{Category, DataPoint};
use crate::utils::quantile_sorted;

/// Half-open numeric interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    const fn from_pair(pair: (f64, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }

    /// Lower bound only; `max` is ignored.
    pub fn at_least(&self, value: f64) -> bool {
        value >= self.min
    }
}

/// Declarative inclusion predicates, ANDed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub categories: BTreeSet<Category>,
    pub div_yield: Range,
    pub payout: Range,
    pub relative: Range,
    pub divg3y: Range,
    /// Only `min` applies; open-ended above
    pub yield_growth_sum: Range,
    /// Drop the top 5% of payout and growth before the range checks
    pub outliers: bool,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            categories: FILTER_DEFAULTS.categories.iter().copied().collect(),
            div_yield: Range::from_pair(FILTER_DEFAULTS.div_yield),
            payout: Range::from_pair(FILTER_DEFAULTS.payout),
            relative: Range::from_pair(FILTER_DEFAULTS.relative),
            divg3y: Range::from_pair(FILTER_DEFAULTS.divg3y),
            yield_growth_sum: Range::from_pair(FILTER_DEFAULTS.yield_growth_sum),
            outliers: FILTER_DEFAULTS.outliers,
        }
    }
}

/// Keys accepted by `Filter::range_mut`, in display order.
pub const RANGE_KEYS: &[&str] = &["divYield", "payout", "relative", "divg3y", "yieldGrowthSum"];

impl Filter {
    /// Every category allowed, every range wide open.
    pub fn permissive() -> Self {
        let everything = Range::new(f64::NEG_INFINITY, f64::INFINITY);
        Self {
            categories: FILTER_DEFAULTS.categories.iter().copied().collect(),
            div_yield: everything,
            payout: everything,
            relative: everything,
            divg3y: everything,
            yield_growth_sum: everything,
            outliers: false,
        }
    }

    pub fn range_mut(&mut self, key: &str) -> Option<&mut Range> {
        match key {
            "divYield" => Some(&mut self.div_yield),
            "payout" => Some(&mut self.payout),
            "relative" => Some(&mut self.relative),
            "divg3y" => Some(&mut self.divg3y),
            "yieldGrowthSum" => Some(&mut self.yield_growth_sum),
            _ => None,
        }
    }

    /// True when `point` passes the category and range predicates.
    /// A missing value fails its predicate.
    pub fn admits(&self, point: &DataPoint) -> bool {
        let in_range = |value: Option<f64>, range: &Range| value.is_some_and(|v| range.contains(v));

        point
            .resolved_category()
            .is_some_and(|category| self.categories.contains(&category))
            && in_range(point.div_yield, &self.div_yield)
            && in_range(point.payout, &self.payout)
            && in_range(point.relative, &self.relative)
            && in_range(point.divg3y, &self.divg3y)
            && point
                .yield_growth_sum()
                .is_some_and(|sum| self.yield_growth_sum.at_least(sum))
    }
}

/// Present values of `field`, ascending (a private copy).
fn sorted_values<'a>(data: impl IntoIterator<Item = &'a DataPoint>, field: &str) -> Vec<f64> {
    data.into_iter()
        .filter_map(|point| point.field(field))
        .sorted_by(|a, b| a.total_cmp(b))
        .collect()
}

/// Drops points at/above the 95th percentile of payout or of 3y growth (computed over
/// all of `data`), and points with no or zero payout. Order is preserved.
pub fn remove_outliers(data: &[DataPoint]) -> Vec<&DataPoint> {
    let percentile = FILTER_DEFAULTS.outlier_percentile;
    let payout_threshold = quantile_sorted(&sorted_values(data, "payout"), percentile);
    let growth_threshold = quantile_sorted(&sorted_values(data, "divg3y"), percentile);

    data.iter()
        .filter(|point| {
            let payout_ok = match (point.payout, payout_threshold) {
                (Some(payout), Some(threshold)) => payout != 0.0 && payout < threshold,
                _ => false,
            };
            let growth_ok = match (point.divg3y, growth_threshold) {
                (Some(growth), Some(threshold)) => growth < threshold,
                _ => false,
            };
            payout_ok && growth_ok
        })
        .collect()
}

/// The visible subset of `data` under `filter`, in input order. Pure.
pub fn apply<'a>(data: &'a [DataPoint], filter: &Filter) -> Vec<&'a DataPoint> {
    let candidates: Vec<&DataPoint> = if filter.outliers {
        remove_outliers(data)
    } else {
        data.iter().collect()
    };

    candidates
        .into_iter()
        .filter(|point| filter.admits(point))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(ticker: &str, category: Category, div_yield: f64, payout: f64, divg3y: f64) -> DataPoint {
        DataPoint::new(ticker)
            .with_category(category)
            .with_field("divYield", div_yield)
            .with_field("payout", payout)
            .with_field("divg3y", divg3y)
            .with_field("relative", 0.0)
    }

    fn universe() -> Vec<DataPoint> {
        (0..40)
            .map(|i| {
                let category = match i % 3 {
                    0 => Category::Champion,
                    1 => Category::Contender,
                    _ => Category::Challenger,
                };
                let f = i as f64;
                company(&format!("C{i:02}"), category, 1.0 + f * 0.1, 20.0 + f * 2.0, f * 0.5)
            })
            .collect()
    }

    fn tickers(points: &[&DataPoint]) -> Vec<String> {
        points.iter().map(|p| p.ticker.clone()).collect()
    }

    #[test]
    fn apply_is_pure_and_order_preserving() {
        let data = universe();
        let mut filter = Filter::default();
        filter.div_yield = Range::new(1.5, 4.0);
        let first = tickers(&apply(&data, &filter));
        let second = tickers(&apply(&data, &filter));
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
        assert!(!first.is_empty());
    }

    #[test]
    fn result_is_exactly_the_admitted_records() {
        let data = universe();
        let mut filter = Filter::default();
        filter.categories = [Category::Champion, Category::Challenger].into_iter().collect();
        filter.payout = Range::new(30.0, 80.0);
        filter.yield_growth_sum = Range::new(8.0, 0.0);

        let visible = apply(&data, &filter);
        for point in &visible {
            assert!(filter.admits(point));
        }
        let kept: BTreeSet<&str> = visible.iter().map(|p| p.ticker.as_str()).collect();
        for point in data.iter().filter(|p| !kept.contains(p.ticker.as_str())) {
            assert!(!filter.admits(point), "{} should have been visible", point.ticker);
        }
    }

    #[test]
    fn ranges_are_half_open() {
        let data = vec![
            company("LOW", Category::Champion, 2.0, 50.0, 5.0),
            company("HIGH", Category::Champion, 4.0, 50.0, 5.0),
        ];
        let mut filter = Filter::default();
        filter.div_yield = Range::new(2.0, 4.0);
        assert_eq!(tickers(&apply(&data, &filter)), ["LOW"]);
    }

    #[test]
    fn empty_category_set_hides_everything() {
        let data = universe();
        let mut filter = Filter::default();
        filter.categories.clear();
        assert!(apply(&data, &filter).is_empty());
    }

    #[test]
    fn missing_values_fail_their_predicate() {
        let data = vec![DataPoint::new("BARE").with_category(Category::Champion)];
        assert!(apply(&data, &Filter::default()).is_empty());
    }

    #[test]
    fn outlier_trim_never_grows_the_result() {
        let data = universe();
        let mut filter = Filter::permissive();
        let without = apply(&data, &filter).len();
        filter.outliers = true;
        let with = apply(&data, &filter).len();
        assert!(with <= without);
        // Top two of 40 payouts and growths sit at/above the 95th percentile
        assert_eq!(with, 38);
    }

    #[test]
    fn outlier_trim_drops_zero_payout() {
        let mut data = universe();
        data[5].payout = Some(0.0);
        let trimmed = remove_outliers(&data);
        assert!(trimmed.iter().all(|p| p.ticker != "C05"));
    }
}
