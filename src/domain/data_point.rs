use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::category::{Category, deserialize_lenient};

/// Historical dividend-yield statistics for one company.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct YieldDistribution {
    pub mean: f64,
    pub std: f64,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Years covered
    #[serde(default)]
    pub interval: Option<f64>,
}

/// One traded company, as delivered by the dataset source.
///
/// `ticker` is the identity. Numeric fields are optional because the upstream
/// sheet has holes; a missing value simply leaves that bubble unplaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub ticker: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub category: Option<Category>,

    #[serde(default)]
    pub div_yield: Option<f64>,
    #[serde(default)]
    pub divg1y: Option<f64>,
    #[serde(default)]
    pub divg3y: Option<f64>,
    #[serde(default)]
    pub divg5y: Option<f64>,
    #[serde(default)]
    pub divg10y: Option<f64>,
    #[serde(default)]
    pub div_raise_yrs: Option<f64>,
    #[serde(default)]
    pub payout: Option<f64>,
    #[serde(default)]
    pub annual_dividend: Option<f64>,
    #[serde(default, rename = "EPS")]
    pub eps: Option<f64>,
    #[serde(default, alias = "yieldDist")]
    pub yield_dist5y: Option<YieldDistribution>,

    /// z-score of the current yield against `yield_dist5y`, filled in by preprocessing
    #[serde(default)]
    pub relative: Option<f64>,

    /// Anything else the source sends along; numeric entries stay addressable by name.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl DataPoint {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            name: None,
            industry: None,
            category: None,
            div_yield: None,
            divg1y: None,
            divg3y: None,
            divg5y: None,
            divg10y: None,
            div_raise_yrs: None,
            payout: None,
            annual_dividend: None,
            eps: None,
            yield_dist5y: None,
            relative: None,
            extra: BTreeMap::new(),
        }
    }

    /// Looks a numeric field up by its wire name (`divYield`, `divg3y`, ...).
    /// Non-finite values count as missing.
    pub fn field(&self, name: &str) -> Option<f64> {
        let value = match name {
            "divYield" => self.div_yield,
            "divg1y" => self.divg1y,
            "divg3y" => self.divg3y,
            "divg5y" => self.divg5y,
            "divg10y" => self.divg10y,
            "divRaiseYrs" => self.div_raise_yrs,
            "payout" => self.payout,
            "annualDividend" => self.annual_dividend,
            "EPS" => self.eps,
            "relative" => self.relative,
            "yieldGrowthSum" => self.yield_growth_sum(),
            other => self.extra.get(other).and_then(serde_json::Value::as_f64),
        };
        value.filter(|v| v.is_finite())
    }

    /// Current yield plus three-year dividend growth.
    pub fn yield_growth_sum(&self) -> Option<f64> {
        Some(self.divg3y? + self.div_yield?)
    }

    /// Category as delivered, falling back to the raise-streak classification.
    pub fn resolved_category(&self) -> Option<Category> {
        self.category
            .or_else(|| self.div_raise_yrs.map(Category::from_raise_years))
    }

    /// Builder helpers, mostly for fixtures and the demo dataset.
    pub fn with_field(mut self, name: &str, value: f64) -> Self {
        match name {
            "divYield" => self.div_yield = Some(value),
            "divg1y" => self.divg1y = Some(value),
            "divg3y" => self.divg3y = Some(value),
            "divg5y" => self.divg5y = Some(value),
            "divg10y" => self.divg10y = Some(value),
            "divRaiseYrs" => self.div_raise_yrs = Some(value),
            "payout" => self.payout = Some(value),
            "annualDividend" => self.annual_dividend = Some(value),
            "EPS" => self.eps = Some(value),
            "relative" => self.relative = Some(value),
            other => {
                self.extra.insert(other.to_string(), serde_json::json!(value));
            }
        }
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_names_and_keeps_unknown_fields() {
        let json = r#"{
            "ticker": "KO",
            "name": "Coca-Cola",
            "category": "champion",
            "divYield": 3.1,
            "divg3y": 4.5,
            "payout": 74.0,
            "EPS": 2.2,
            "yieldDist": {"mean": 3.0, "std": 0.25, "interval": 10},
            "peRatio": 24.5,
            "downloaded": "2018-01-02"
        }"#;
        let point: DataPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.ticker, "KO");
        assert_eq!(point.category, Some(Category::Champion));
        assert_eq!(point.field("divYield"), Some(3.1));
        assert_eq!(point.field("EPS"), Some(2.2));
        assert_eq!(point.field("peRatio"), Some(24.5));
        assert_eq!(point.field("downloaded"), None);
        assert_eq!(point.yield_dist5y.map(|d| d.std), Some(0.25));
    }

    #[test]
    fn nulls_and_unknown_categories_are_tolerated() {
        let json = r#"{"ticker": "XYZ", "category": "aristocrat", "divYield": null, "divRaiseYrs": 12}"#;
        let point: DataPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.category, None);
        assert_eq!(point.field("divYield"), None);
        assert_eq!(point.resolved_category(), Some(Category::Contender));
    }

    #[test]
    fn yield_growth_sum_needs_both_parts() {
        let point = DataPoint::new("A").with_field("divYield", 2.0);
        assert_eq!(point.field("yieldGrowthSum"), None);
        let point = point.with_field("divg3y", 7.5);
        assert_eq!(point.field("yieldGrowthSum"), Some(9.5));
    }
}
