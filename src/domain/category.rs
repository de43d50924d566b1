use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Dividend-raising streak taxonomy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    /// 25+ consecutive years of raises
    Champion,
    /// 10-24 years
    Contender,
    /// 5-9 years
    Challenger,
}

impl Category {
    /// Classifies a company by how many consecutive years it has raised its dividend.
    pub fn from_raise_years(years: f64) -> Self {
        if years > 24.0 {
            Self::Champion
        } else if years > 9.0 {
            Self::Contender
        } else {
            Self::Challenger
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Champion => "Champions",
            Self::Contender => "Contenders",
            Self::Challenger => "Challengers",
        }
    }
}

/// Unknown category strings decode to `None` rather than failing the whole dataset.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|text| match Category::from_str(text.trim()) {
        Ok(category) => Some(category),
        Err(_) => {
            log::warn!("Unknown category '{}', will derive from raise years", text);
            None
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_years_map_to_streak_buckets() {
        assert_eq!(Category::from_raise_years(25.0), Category::Champion);
        assert_eq!(Category::from_raise_years(24.0), Category::Contender);
        assert_eq!(Category::from_raise_years(10.0), Category::Contender);
        assert_eq!(Category::from_raise_years(9.0), Category::Challenger);
        assert_eq!(Category::from_raise_years(0.0), Category::Challenger);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Category::from_str("Champion").ok(), Some(Category::Champion));
        assert_eq!(Category::from_str("CONTENDER").ok(), Some(Category::Contender));
        assert!(Category::from_str("aristocrat").is_err());
        assert_eq!(Category::Challenger.to_string(), "challenger");
    }
}
