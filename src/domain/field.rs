/// A plottable numeric field: the wire name plus the label shown on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "divYield",
        label: "Dividend yield",
    },
    FieldSpec {
        key: "divg1y",
        label: "1 year dividend growth",
    },
    FieldSpec {
        key: "divg3y",
        label: "3 years dividend growth",
    },
    FieldSpec {
        key: "divg5y",
        label: "5 years dividend growth",
    },
    FieldSpec {
        key: "divg10y",
        label: "10 years dividend growth",
    },
    FieldSpec {
        key: "payout",
        label: "Payout ratio",
    },
    FieldSpec {
        key: "relative",
        label: "Yield vs. 5 year average",
    },
    FieldSpec {
        key: "divRaiseYrs",
        label: "Years of raises",
    },
    FieldSpec {
        key: "annualDividend",
        label: "Annual dividend",
    },
    FieldSpec {
        key: "yieldGrowthSum",
        label: "Yield + 3y growth",
    },
];

/// Label for a field key, or the key itself when it is not in the catalogue.
pub fn field_label(key: &str) -> &str {
    FIELDS
        .iter()
        .find(|spec| spec.key == key)
        .map(|spec| spec.label)
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_come_from_the_catalogue() {
        assert_eq!(field_label("divg3y"), "3 years dividend growth");
        assert_eq!(field_label("customMetric"), "customMetric");
        assert!(FIELDS.iter().all(|spec| !spec.label.is_empty()));
    }
}
