mod root;
mod state;

pub(crate) use state::{ChartSettings, Clock, DetailState};

pub use root::App;
