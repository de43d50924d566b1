use std::sync::LazyLock;

pub struct UiText {
    // Controls panel
    pub controls_heading: String,
    pub channels_heading: String,
    pub categories_heading: String,
    pub ranges_heading: String,
    pub label_unbound: String,
    pub label_outliers: String,
    pub outliers_hover: String,
    pub label_min: String,
    pub label_max: String,
    pub label_open_ended: String,
    pub button_reset_filter: String,
    pub label_visible: String,
    pub label_source: String,

    // Detail panel
    pub detail_heading: String,
    pub detail_empty: String,
    pub detail_loading: String,
    pub detail_failed: String,
    pub label_industry: String,
    pub label_category: String,

    // Chart
    pub chart_unavailable: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    controls_heading: "Chart".to_string(),
    channels_heading: "Channels".to_string(),
    categories_heading: "Categories".to_string(),
    ranges_heading: "Ranges".to_string(),
    label_unbound: "None".to_string(),
    label_outliers: "Remove outliers".to_string(),
    outliers_hover: "Drop the top 5% of payout and of 3y growth, and zero payouts".to_string(),
    label_min: "min".to_string(),
    label_max: "max".to_string(),
    label_open_ended: "open".to_string(),
    button_reset_filter: "Reset filter".to_string(),
    label_visible: "Visible".to_string(),
    label_source: "Source".to_string(),

    detail_heading: "Company".to_string(),
    detail_empty: "Click a bubble to pin it and show its details. Click the background to clear."
        .to_string(),
    detail_loading: "Loading...".to_string(),
    detail_failed: "Could not load details".to_string(),
    label_industry: "Industry".to_string(),
    label_category: "Category".to_string(),

    chart_unavailable: "Chart unavailable".to_string(),
});

#[cfg(test)]
mod tests {
    use super::*;

    fn is_private_use(c: char) -> bool {
        matches!(c as u32, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
    }

    #[test]
    fn headings_need_no_icon_font() {
        for heading in [
            &UI_TEXT.controls_heading,
            &UI_TEXT.channels_heading,
            &UI_TEXT.categories_heading,
            &UI_TEXT.ranges_heading,
            &UI_TEXT.detail_heading,
        ] {
            assert!(!heading.chars().any(is_private_use), "{heading:?}");
        }
    }
}
