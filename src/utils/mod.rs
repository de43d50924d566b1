mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{AppInstant, elapsed_ms};

pub use maths_utils::{extent, mean_and_stddev, quantile_sorted, remap};
