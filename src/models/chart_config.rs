//! Channel bindings and the scales derived from them.
//!
//! `ChartConfig` is an immutable value: rebinding a channel returns a new
//! config and leaves the old one intact.

use serde::{Deserialize, Serialize};

use crate::domain::{Channel, DataPoint};
use crate::models::ChartError;
use crate::models::scales::{AxisKind, ColorScale, LinearScale, RadiusScale};

/// A data field bound to a channel, with the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub field: String,
    pub label: String,
}

impl Binding {
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub x: Binding,
    pub y: Binding,
    pub color: Option<Binding>,
    pub radius: Option<Binding>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x: Binding::new("divg3y", "3 years dividend growth"),
            y: Binding::new("divYield", "Dividend yield"),
            color: None,
            radius: None,
        }
    }
}

impl ChartConfig {
    /// Rebinds one channel.
    ///
    /// For x/y a missing `field` keeps the current field. For color/radius a missing
    /// `field` unbinds the channel. The label defaults to the field name.
    pub fn with_channel(&self, channel: Channel, field: Option<&str>, label: Option<&str>) -> Self {
        let mut next = self.clone();
        let bind = |field: &str| match label {
            Some(label) => Binding::new(field, label),
            None => Binding::new(field, field),
        };

        match channel {
            Channel::X => next.x = bind(field.unwrap_or(self.x.field.as_str())),
            Channel::Y => next.y = bind(field.unwrap_or(self.y.field.as_str())),
            Channel::Color => next.color = field.map(bind),
            Channel::Radius => next.radius = field.map(bind),
        }
        next
    }

    pub fn binding(&self, channel: Channel) -> Option<&Binding> {
        match channel {
            Channel::X => Some(&self.x),
            Channel::Y => Some(&self.y),
            Channel::Color => self.color.as_ref(),
            Channel::Radius => self.radius.as_ref(),
        }
    }

    pub fn field(&self, channel: Channel) -> Option<&str> {
        self.binding(channel).map(|b| b.field.as_str())
    }
}

/// Scales for every channel, consistent with one config and one dataset.
#[derive(Debug)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub color: ColorScale,
    pub radius: RadiusScale,
}

impl Scales {
    pub fn calibrate(config: &ChartConfig, data: &[&DataPoint]) -> Result<Self, ChartError> {
        Ok(Self {
            x: LinearScale::for_field(data, &config.x.field, AxisKind::Horizontal)?,
            y: LinearScale::for_field(data, &config.y.field, AxisKind::Vertical)?,
            color: ColorScale::for_field(data, config.field(Channel::Color))?,
            radius: RadiusScale::for_field(data, config.field(Channel::Radius))?,
        })
    }

    /// Where the horizontal axis rests: at zero when zero is in range, else at the floor.
    pub fn x_axis_anchor(&self) -> f64 {
        let floor = self.y.domain().0.min(self.y.domain().1);
        self.y.map(floor.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PLOT_CONFIG;

    #[test]
    fn rebinding_returns_a_new_config() {
        let config = ChartConfig::default();
        let next = config.with_channel(Channel::X, Some("payout"), Some("Payout ratio"));
        assert_eq!(config.x.field, "divg3y");
        assert_eq!(next.x, Binding::new("payout", "Payout ratio"));
        assert_eq!(next.y, config.y);
    }

    #[test]
    fn positional_channels_keep_their_field_when_none_given() {
        let next = ChartConfig::default().with_channel(Channel::Y, None, Some("Yield %"));
        assert_eq!(next.y, Binding::new("divYield", "Yield %"));
    }

    #[test]
    fn color_and_radius_can_be_unbound() {
        let bound = ChartConfig::default().with_channel(Channel::Radius, Some("payout"), None);
        assert_eq!(bound.radius, Some(Binding::new("payout", "payout")));
        let unbound = bound.with_channel(Channel::Radius, None, None);
        assert_eq!(unbound.radius, None);
    }

    #[test]
    fn x_axis_rests_on_zero_or_the_floor() {
        let data = [
            DataPoint::new("A").with_field("divg3y", 1.0).with_field("divYield", -2.0),
            DataPoint::new("B").with_field("divg3y", 5.0).with_field("divYield", 8.0),
        ];
        let refs: Vec<&DataPoint> = data.iter().collect();
        let scales = Scales::calibrate(&ChartConfig::default(), &refs).unwrap();
        assert_eq!(scales.x_axis_anchor(), scales.y.map(0.0));

        let data = [
            DataPoint::new("A").with_field("divg3y", 1.0).with_field("divYield", 2.0),
            DataPoint::new("B").with_field("divg3y", 5.0).with_field("divYield", 8.0),
        ];
        let refs: Vec<&DataPoint> = data.iter().collect();
        let scales = Scales::calibrate(&ChartConfig::default(), &refs).unwrap();
        assert_eq!(scales.y.domain().0, 2.0);
        assert_eq!(scales.x_axis_anchor(), PLOT_CONFIG.plot_height());
    }
}
