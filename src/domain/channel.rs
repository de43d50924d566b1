use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter};

use crate::models::ChartError;

/// One of the four visual mappings a data field can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Channel {
    #[strum(to_string = "x")]
    X,
    #[strum(to_string = "y")]
    Y,
    #[strum(to_string = "color")]
    Color,
    #[strum(to_string = "radius")]
    Radius,
}

impl Channel {
    /// x and y always carry a field; color and radius may be unbound.
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::X | Self::Y)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::X => "X axis",
            Self::Y => "Y axis",
            Self::Color => "Color",
            Self::Radius => "Size",
        }
    }
}

impl FromStr for Channel {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "color" | "colour" => Ok(Self::Color),
            "r" | "radius" => Ok(Self::Radius),
            _ => Err(ChartError::InvalidChannel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_and_long_names() {
        assert_eq!("X".parse::<Channel>(), Ok(Channel::X));
        assert_eq!("r".parse::<Channel>(), Ok(Channel::Radius));
        assert_eq!("Radius".parse::<Channel>(), Ok(Channel::Radius));
        assert_eq!("colour".parse::<Channel>(), Ok(Channel::Color));
    }

    #[test]
    fn rejects_unknown_channel() {
        assert_eq!(
            "z".parse::<Channel>(),
            Err(ChartError::InvalidChannel("z".to_string()))
        );
    }
}
