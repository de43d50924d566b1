//! Starting filter (what the page shows before the user touches anything)

use crate::domain::Category;

pub struct FilterDefaults {
    pub categories: &'static [Category],
    pub div_yield: (f64, f64),
    pub payout: (f64, f64),
    pub relative: (f64, f64),
    pub divg3y: (f64, f64),
    pub yield_growth_sum: (f64, f64),
    pub outliers: bool,
    /// Percentile at/above which payout and growth count as outliers
    pub outlier_percentile: f64,
}

pub const FILTER_DEFAULTS: FilterDefaults = FilterDefaults {
    categories: &[Category::Champion, Category::Contender, Category::Challenger],
    div_yield: (0.0, 1000.0),
    payout: (0.0, 300_000.0),
    relative: (-1000.0, 1000.0),
    divg3y: (0.0, 1000.0),
    yield_growth_sum: (0.0, 1000.0),
    outliers: false,
    outlier_percentile: 0.95,
};
