// src/app/state.rs

use anyhow::Result;
use poll_promise::Promise;
use serde::{Deserialize, Serialize};

use crate::data::CompanyDetail;
use crate::models::{ChartConfig, Filter};
use crate::ui::DetailView;
use crate::utils::{AppInstant, elapsed_ms};

/// Chart settings that survive a restart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ChartSettings {
    pub(crate) config: ChartConfig,
    pub(crate) filter: Filter,
}

/// Detail panel contents. Only the most recent request is kept; replacing the
/// state drops any older promise.
#[derive(Default)]
pub(crate) enum DetailState {
    #[default]
    Empty,
    Pending {
        ticker: String,
        promise: Promise<Result<CompanyDetail>>,
    },
}

impl DetailState {
    pub(crate) fn view(&self) -> DetailView<'_> {
        match self {
            DetailState::Empty => DetailView::Empty,
            DetailState::Pending { ticker, promise } => match promise.ready() {
                None => DetailView::Loading(ticker),
                Some(result) => DetailView::Ready(result),
            },
        }
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self, DetailState::Pending { promise, .. } if promise.ready().is_none())
    }
}

/// Milliseconds since the app started; the timeline every chart animation runs on.
pub(crate) struct Clock {
    start: AppInstant,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            start: AppInstant::now(),
        }
    }
}

impl Clock {
    pub(crate) fn now_ms(&self) -> f64 {
        elapsed_ms(self.start)
    }
}
