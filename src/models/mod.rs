// The chart core: scales, filtering, scene reconciliation and pointer dispatch.
mod axis;
mod chart;
mod chart_config;
mod error;
mod interaction;
mod scene;
mod transition;

pub mod filter;
pub mod scales;

pub use axis::{AxisFrame, LabelFrame, TickFrame};
pub use chart::{Chart, ChartEvent, ChartFrame};
pub use chart_config::{Binding, ChartConfig, Scales};
pub use error::ChartError;
pub use filter::{Filter, RANGE_KEYS, Range};
pub use interaction::PointerState;
pub use scene::{BubbleFrame, Reconciliation};
