//! Detail-fetch collaborator: what the info panel shows for one ticker.

use anyhow::{Result, anyhow};
use itertools::Itertools;
use std::collections::HashMap;

use crate::domain::{Category, DataPoint, FIELDS};

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyDetail {
    pub ticker: String,
    pub name: Option<String>,
    pub industry: Option<String>,
    pub category: Option<Category>,
    /// (label, value), sorted by label
    pub rows: Vec<(String, f64)>,
}

impl CompanyDetail {
    pub fn from_point(point: &DataPoint) -> Self {
        let catalogued = FIELDS
            .iter()
            .filter_map(|spec| point.field(spec.key).map(|v| (spec.label.to_string(), v)));
        let distribution = point.yield_dist5y.into_iter().flat_map(|dist| {
            [
                Some(("5y average yield".to_string(), dist.mean)),
                Some(("5y yield std. dev.".to_string(), dist.std)),
                dist.min.map(|v| ("5y lowest yield".to_string(), v)),
                dist.max.map(|v| ("5y highest yield".to_string(), v)),
            ]
            .into_iter()
            .flatten()
        });
        let extra = point
            .extra
            .iter()
            .filter_map(|(key, value)| value.as_f64().map(|v| (key.clone(), v)));

        Self {
            ticker: point.ticker.clone(),
            name: point.name.clone(),
            industry: point.industry.clone(),
            category: point.resolved_category(),
            rows: catalogued
                .chain(point.eps.map(|v| ("EPS".to_string(), v)))
                .chain(distribution)
                .chain(extra)
                .filter(|(_, v)| v.is_finite())
                .sorted_by(|a, b| a.0.cmp(&b.0))
                .collect(),
        }
    }
}

/// Answers "fetch detail for ticker T". Runs off the UI thread natively.
pub trait DetailProvider: Send + Sync {
    fn fetch(&self, ticker: &str) -> Result<CompanyDetail>;
}

/// Serves details straight from the loaded records.
pub struct DatasetDetailProvider {
    records: HashMap<String, DataPoint>,
}

impl DatasetDetailProvider {
    pub fn new(records: &[DataPoint]) -> Self {
        Self {
            records: records
                .iter()
                .map(|r| (r.ticker.clone(), r.clone()))
                .collect(),
        }
    }
}

impl DetailProvider for DatasetDetailProvider {
    fn fetch(&self, ticker: &str) -> Result<CompanyDetail> {
        self.records
            .get(ticker)
            .map(CompanyDetail::from_point)
            .ok_or_else(|| anyhow!("No company data for {}", ticker))
    }
}
