mod chart_view;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_text;

pub(crate) use chart_view::{ChartView, PointerEvent};
pub(crate) use styles::UiStyleExt;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::{ControlEvent, ControlsPanel, DetailPanel, DetailView, Panel};
