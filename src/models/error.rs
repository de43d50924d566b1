use std::error::Error;
use std::fmt;

/// Failures the chart core reports back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// `set` was called with a channel name that is not x, y, color or radius
    InvalidChannel(String),
    /// A scale was requested over zero usable rows for `field`
    EmptyDataset { field: String },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChartError::InvalidChannel(name) => write!(f, "Invalid channel: '{}'", name),
            ChartError::EmptyDataset { field } => {
                write!(f, "Cannot build a scale for '{}': no data rows", field)
            }
        }
    }
}

impl Error for ChartError {}
