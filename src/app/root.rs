use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, SidePanel, Visuals},
    },
    log::{debug, error, info},
    poll_promise::Promise,
    serde::{Deserialize, Serialize},
    std::sync::Arc,
};

use crate::{
    Cli,
    app::{ChartSettings, Clock, DetailState},
    config::DF,
    data::{DatasetDetailProvider, DatasetOrigin, DetailProvider, load_dataset, preprocess},
    domain::field_label,
    models::{Chart, ChartEvent, Filter},
    ui::{
        ChartView, ControlEvent, ControlsPanel, DetailPanel, Panel, PointerEvent, UI_CONFIG,
        UI_TEXT, UiStyleExt,
    },
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) settings: ChartSettings, // persists across sessions.
    #[serde(skip)]
    pub(crate) chart: Chart,
    #[serde(skip)]
    pub(crate) chart_view: ChartView,
    #[serde(skip)]
    pub(crate) detail: DetailState,
    #[serde(skip)]
    pub(crate) provider: Option<Arc<dyn DetailProvider>>,
    #[serde(skip)]
    pub(crate) origin: Option<DatasetOrigin>,
    #[serde(skip)]
    clock: Clock,
}

impl Default for App {
    fn default() -> Self {
        Self {
            settings: ChartSettings::default(),
            chart: Chart::new(),
            chart_view: ChartView::new(),
            detail: DetailState::default(),
            provider: None,
            origin: None,
            clock: Clock::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        if args.outliers {
            app.settings.filter.outliers = true;
        }

        let dataset = load_dataset(args.data.as_deref());
        // The chart's filter owns the outlier step
        let records = preprocess(&dataset.records, false);
        if DF.log_data_load {
            info!(
                "Dataset ready: {} companies from {}",
                records.len(),
                dataset.origin
            );
        }

        app.provider = Some(Arc::new(DatasetDetailProvider::new(&records)));
        app.origin = Some(dataset.origin);
        app.chart = Chart::with_config(app.settings.config.clone(), app.settings.filter.clone());
        if let Err(e) = app.chart.set_data(records) {
            error!("Cannot calibrate chart: {}", e);
        }
        app.refresh_chart();
        app
    }

    fn refresh_chart(&mut self) {
        let now = self.clock.now_ms();
        match self.chart.update(now) {
            Ok(result) => {
                if DF.log_reconcile {
                    debug!("Chart refreshed: {:?}", result);
                }
            }
            Err(e) => error!("Chart update failed: {}", e),
        }
    }

    fn apply_control(&mut self, event: ControlEvent) {
        let mut filter = self.settings.filter.clone();
        match event {
            ControlEvent::Bind { channel, field } => {
                let label = field.map(field_label);
                if let Err(e) = self.chart.set(&channel.to_string(), field, label) {
                    error!("Cannot bind {} to {:?}: {}", channel, field, e);
                }
                self.settings.config = self.chart.config().clone();
                return;
            }
            ControlEvent::ToggleCategory(category, on) => {
                if on {
                    filter.categories.insert(category);
                } else {
                    filter.categories.remove(&category);
                }
            }
            ControlEvent::SetOutliers(on) => filter.outliers = on,
            ControlEvent::SetRange { key, range } => {
                if let Some(slot) = filter.range_mut(key) {
                    *slot = range;
                }
            }
            ControlEvent::ResetFilter => filter = Filter::default(),
        }

        if let Err(e) = self.chart.set_filter(filter.clone()) {
            error!("Filter applied but scales are unavailable: {}", e);
        }
        self.settings.filter = filter;
    }

    fn apply_pointer(&mut self, event: PointerEvent) {
        let now = self.clock.now_ms();
        match event {
            PointerEvent::Enter(ticker) => self.chart.pointer_enter(&ticker, now),
            PointerEvent::Leave(ticker) => self.chart.pointer_leave(&ticker, now),
            PointerEvent::Click(ticker) => self.chart.click(&ticker, now),
            PointerEvent::Background => self.chart.clear_persisted(now),
        }
    }

    fn handle_chart_events(&mut self) {
        for event in self.chart.take_events() {
            match event {
                ChartEvent::DetailRequested(ticker) => {
                    if DF.log_detail {
                        info!("Fetching detail for {}", ticker);
                    }
                    if let Some(provider) = &self.provider {
                        self.detail = DetailState::Pending {
                            promise: request_detail(Arc::clone(provider), ticker.clone()),
                            ticker,
                        };
                    }
                }
                ChartEvent::DetailCleared => self.detail = DetailState::Empty,
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn request_detail(
    provider: Arc<dyn DetailProvider>,
    ticker: String,
) -> Promise<anyhow::Result<crate::data::CompanyDetail>> {
    Promise::spawn_thread("detail_fetch", move || provider.fetch(&ticker))
}

#[cfg(target_arch = "wasm32")]
fn request_detail(
    provider: Arc<dyn DetailProvider>,
    ticker: String,
) -> Promise<anyhow::Result<crate::data::CompanyDetail>> {
    Promise::from_ready(provider.fetch(&ticker))
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let now = self.clock.now_ms();
        self.chart.tick(now);

        let controls = SidePanel::left("controls_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(UI_CONFIG.side_panel_width)
            .show(ctx, |ui| {
                ControlsPanel::new(
                    self.chart.config(),
                    self.chart.filter(),
                    self.chart.visible().len(),
                    self.chart.data().len(),
                    self.origin.as_ref(),
                )
                .render(ui)
            })
            .inner;

        SidePanel::right("detail_panel")
            .frame(UI_CONFIG.side_panel_frame())
            .default_width(UI_CONFIG.side_panel_width)
            .show(ctx, |ui| {
                DetailPanel::new(self.detail.view()).render(ui);
            });

        let pointer = CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                if let Some(e) = self.chart.calibration_error() {
                    ui.label_error(format!("{}: {}", UI_TEXT.chart_unavailable, e));
                }
                self.chart_view.show(ui, &self.chart, now)
            })
            .inner;

        if !controls.is_empty() {
            for event in controls {
                self.apply_control(event);
            }
            self.refresh_chart();
        }
        for event in pointer {
            self.apply_pointer(event);
        }
        self.handle_chart_events();

        if self.chart.is_animating(self.clock.now_ms()) || self.detail.is_loading() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.settings.config = self.chart.config().clone();
        self.settings.filter = self.chart.filter().clone();
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
