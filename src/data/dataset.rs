//! Dataset source: company records from a JSON file, or the built-in demo.

use anyhow::{Context, Result};
use log::{error, info, warn};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::DF;
#[cfg(not(target_arch = "wasm32"))]
use crate::config::PERSISTENCE;
use crate::data::demo::demo_dataset;
use crate::domain::DataPoint;

/// Where the records on screen came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOrigin {
    File(PathBuf),
    Demo,
}

impl fmt::Display for DatasetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DatasetOrigin::File(path) => write!(f, "{}", path.display()),
            DatasetOrigin::Demo => write!(f, "built-in demo"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<DataPoint>,
    pub origin: DatasetOrigin,
}

impl Dataset {
    pub fn demo() -> Self {
        Self {
            records: demo_dataset(),
            origin: DatasetOrigin::Demo,
        }
    }
}

/// Drops repeated tickers (first one wins) and fills a missing category from
/// the raise streak.
fn normalize(records: Vec<DataPoint>) -> Vec<DataPoint> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.ticker.clone());
            if !fresh {
                warn!("Skipping duplicate record for {}", record.ticker);
            }
            fresh
        })
        .map(|mut record| {
            record.category = record.resolved_category();
            if record.category.is_none() {
                warn!("{} has no category and no raise streak", record.ticker);
            }
            record
        })
        .collect()
}

/// Decodes a JSON array of company records.
pub fn parse_companies(json: &str) -> Result<Vec<DataPoint>> {
    let records: Vec<DataPoint> =
        serde_json::from_str(json).context("Failed to decode company records")?;
    Ok(normalize(records))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_companies(path: &Path) -> Result<Vec<DataPoint>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    parse_companies(&text).with_context(|| format!("Failed to load dataset: {}", path.display()))
}

/// Loads `path`, else the default file when present, else the demo. Load
/// failures are logged and fall back to the demo.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dataset(path: Option<&Path>) -> Dataset {
    let default_path = Path::new(PERSISTENCE.dataset.default_path);
    let path = match path {
        Some(path) => path,
        None if default_path.exists() => default_path,
        None => return Dataset::demo(),
    };

    match load_companies(path) {
        Ok(records) => {
            if DF.log_data_load {
                info!("Loaded {} companies from {}", records.len(), path.display());
            }
            Dataset {
                records,
                origin: DatasetOrigin::File(path.to_path_buf()),
            }
        }
        Err(e) => {
            error!("{:#}. Falling back to the demo dataset.", e);
            Dataset::demo()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_dataset(_path: Option<&Path>) -> Dataset {
    let dataset = Dataset::demo();
    if DF.log_data_load {
        info!("Loaded {} demo companies", dataset.records.len());
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn derives_missing_categories_and_drops_duplicates() {
        let json = r#"[
            {"ticker": "AAA", "divRaiseYrs": 30, "divYield": 2.0},
            {"ticker": "BBB", "divRaiseYrs": 10},
            {"ticker": "CCC", "category": "champion", "divRaiseYrs": 1},
            {"ticker": "AAA", "divRaiseYrs": 1, "divYield": 9.0}
        ]"#;
        let records = parse_companies(json).unwrap();
        let summary: Vec<(&str, Option<Category>)> = records
            .iter()
            .map(|r| (r.ticker.as_str(), r.category))
            .collect();
        assert_eq!(
            summary,
            [
                ("AAA", Some(Category::Champion)),
                ("BBB", Some(Category::Contender)),
                ("CCC", Some(Category::Champion)),
            ]
        );
        assert_eq!(records[0].div_yield, Some(2.0));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_companies(r#"{"ticker": "AAA"}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to decode company records"));
    }

    #[test]
    fn reads_a_file_and_falls_back_on_failure() {
        let dir = std::env::temp_dir().join(format!("dividend-bubbles-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("companies.json");
        std::fs::write(&path, r#"[{"ticker": "KO", "category": "champion", "divYield": 3.0}]"#)
            .unwrap();

        let dataset = load_dataset(Some(&path));
        assert_eq!(dataset.origin, DatasetOrigin::File(path.clone()));
        assert_eq!(dataset.records.len(), 1);

        let missing = dir.join("missing.json");
        assert!(load_companies(&missing).is_err());
        assert_eq!(load_dataset(Some(&missing)).origin, DatasetOrigin::Demo);

        std::fs::remove_dir_all(&dir).ok();
    }
}
