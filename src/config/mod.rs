//! Configuration module for the dividend bubble chart.

// Can all be private now because we have a public re-export.
mod animation;
mod debug;
mod demo;
mod filter;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use animation::{ANIMATION, AnimationConfig, Easing};
pub use debug::DF;
pub use demo::{DEMO, DemoCompany};
pub use filter::{FILTER_DEFAULTS, FilterDefaults};
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;

pub const LOG_PERFORMANCE: bool = DF.log_performance;
