#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for main.rs and inspect.rs)
pub use app::App;
pub use config::PERSISTENCE;
pub use data::{Dataset, DatasetOrigin, load_dataset, preprocess};
pub use domain::{Category, Channel, DataPoint};
pub use models::{Chart, ChartConfig, ChartError, Filter};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Company records (JSON array). Falls back to companies.json, then the demo set
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Start with the top 5% of payout and yield growth trimmed
    #[arg(long, default_value_t = false)]
    pub outliers: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
