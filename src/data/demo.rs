//! Deterministic demo dataset.
//!
//! Each curated company gets a synthetic yield history from which its 5-year
//! yield distribution is taken, and a payout ratio derived from dividend over
//! earnings, the same way the real pipeline fills those fields in.

use crate::config::{DEMO, DemoCompany};
use crate::domain::{Category, DataPoint, YieldDistribution};
use crate::utils::{extent, mean_and_stddev};

pub fn demo_dataset() -> Vec<DataPoint> {
    DEMO.companies
        .iter()
        .enumerate()
        .map(|(i, company)| demo_company(i, company))
        .collect()
}

/// Smooth deterministic wiggle in [-1, 1] for company `seed` at step `t`.
fn wave(seed: f64, t: f64) -> f64 {
    0.75 * (seed * 1.7 + t * 0.21).sin() + 0.25 * (seed * 3.1 + t * 0.9).cos()
}

fn yield_distribution(seed: f64, current: f64) -> YieldDistribution {
    let history: Vec<f64> = (0..DEMO.history_len)
        .map(|k| current * (1.0 + 0.18 * wave(seed, k as f64)))
        .collect();
    let (mean, std) = mean_and_stddev(&history);
    let bounds = extent(&history);
    YieldDistribution {
        mean,
        std,
        min: bounds.map(|(min, _)| min),
        max: bounds.map(|(_, max)| max),
        interval: Some(DEMO.history_interval_years),
    }
}

fn demo_company(index: usize, company: &DemoCompany) -> DataPoint {
    let seed = index as f64 + 1.0;
    let streak = company.raise_years;

    // Long raise streaks grow slower; a broken streak means no recent growth
    let growth = |horizon: f64| {
        if streak < 1.0 {
            return 0.0;
        }
        let base = 3.0 + 40.0 / (streak + 4.0);
        (base + 2.5 * wave(seed, horizon)).max(0.0)
    };

    let payout_share = 0.5 + 0.3 * (seed * 2.3).sin();
    let annual_dividend = company.eps * payout_share;
    let payout = (company.eps > 0.0).then(|| annual_dividend / company.eps * 100.0);

    let mut point = DataPoint::new(company.ticker)
        .with_category(Category::from_raise_years(streak))
        .with_field("divYield", company.div_yield)
        .with_field("divRaiseYrs", streak)
        .with_field("divg1y", growth(1.0))
        .with_field("divg3y", growth(3.0))
        .with_field("divg5y", growth(5.0))
        .with_field("divg10y", growth(10.0))
        .with_field("annualDividend", annual_dividend)
        .with_field("EPS", company.eps);
    point.name = Some(company.name.to_string());
    point.industry = Some(company.industry.to_string());
    point.payout = payout;
    point.yield_dist5y = Some(yield_distribution(seed, company.div_yield));
    point
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_is_deterministic_and_unique() {
        let first = demo_dataset();
        assert_eq!(first, demo_dataset());
        assert_eq!(first.len(), DEMO.companies.len());
        let tickers: HashSet<&str> = first.iter().map(|p| p.ticker.as_str()).collect();
        assert_eq!(tickers.len(), first.len());
    }

    #[test]
    fn every_category_is_represented() {
        let categories: HashSet<Category> = demo_dataset()
            .iter()
            .filter_map(|p| p.resolved_category())
            .collect();
        assert_eq!(categories.len(), 3);
    }

    #[test]
    fn distributions_bracket_their_mean() {
        for point in demo_dataset() {
            let dist = point.yield_dist5y.unwrap();
            assert!(dist.std > 0.0, "{}", point.ticker);
            assert!(dist.min.unwrap() <= dist.mean && dist.mean <= dist.max.unwrap());
            assert!(point.payout.is_some_and(|p| p > 0.0));
        }
    }
}
