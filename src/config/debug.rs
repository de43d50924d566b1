//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Summaries of every enter/update/exit pass
    pub log_reconcile: bool,

    /// Pointer and click dispatch (hover guards, persisted re-clicks, etc.)
    pub log_interaction: bool,

    /// Dataset loading and preprocessing counts
    pub log_data_load: bool,

    /// Detail panel requests
    pub log_detail: bool,

    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_data_load: true,
    log_detail: true,

    log_reconcile: false,
    log_interaction: false,
    log_performance: false,
};
