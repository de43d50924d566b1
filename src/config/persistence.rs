//! File persistence configuration

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state (native only)
    pub state_path: &'static str,
}

/// Where the dataset comes from when nothing is passed on the command line.
pub struct DatasetConfig {
    /// Default dataset file looked up next to the binary
    pub default_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
    pub dataset: DatasetConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
    dataset: DatasetConfig {
        default_path: "companies.json",
    },
};
