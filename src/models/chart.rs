//! The chart facade.
//!
//! Owns the dataset, the active filter and channel bindings, the rendered scene
//! and the pointer state. Host code drives it with `set`, `set_filter`,
//! `set_data` and `update`, forwards pointer events, and paints `frame(now)`.

use log::{debug, warn};
use std::collections::{HashMap, HashSet};

use crate::config::DF;
use crate::domain::{Channel, DataPoint};
use crate::models::ChartError;
use crate::models::axis::{AxisFrame, AxisRenderer};
use crate::models::chart_config::{ChartConfig, Scales};
use crate::models::filter::{self, Filter};
use crate::models::interaction::{Effect, Interaction, PointerState};
use crate::models::scene::{BubbleFrame, EntityTarget, Reconciliation, Scene};
use crate::trace_time;

/// Requests for the host's detail-display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartEvent {
    DetailRequested(String),
    DetailCleared,
}

/// Everything needed to paint the chart at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    /// Bottom to top
    pub bubbles: Vec<BubbleFrame>,
    pub axes: AxisFrame,
    pub animating: bool,
}

pub struct Chart {
    data: Vec<DataPoint>,
    /// ticker -> position in `data`
    index: HashMap<String, usize>,
    filter: Filter,
    config: ChartConfig,
    calibration: Result<Scales, ChartError>,
    scene: Scene,
    interaction: Interaction,
    axes: AxisRenderer,
    events: Vec<ChartEvent>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self::with_config(ChartConfig::default(), Filter::default())
    }

    pub fn with_config(config: ChartConfig, filter: Filter) -> Self {
        let calibration = Scales::calibrate(&config, &[]);
        Self {
            data: Vec::new(),
            index: HashMap::new(),
            filter,
            config,
            calibration,
            scene: Scene::new(),
            interaction: Interaction::new(),
            axes: AxisRenderer::new(),
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    pub fn point(&self, ticker: &str) -> Option<&DataPoint> {
        self.index.get(ticker).and_then(|&i| self.data.get(i))
    }

    pub fn persisted(&self) -> Option<&str> {
        self.interaction.persisted()
    }

    pub fn entity_state(&self, ticker: &str) -> Option<PointerState> {
        self.interaction.entity_state(ticker)
    }

    pub fn scales(&self) -> Option<&Scales> {
        self.calibration.as_ref().ok()
    }

    pub fn calibration_error(&self) -> Option<&ChartError> {
        self.calibration.as_ref().err()
    }

    /// Records that pass the active filter, in dataset order.
    pub fn visible(&self) -> Vec<&DataPoint> {
        filter::apply(&self.data, &self.filter)
    }

    /// Rebinds `channel` (x, y, color/colour, r/radius). An unknown channel is
    /// rejected and the current configuration is kept as it was.
    ///
    /// Recalibrates immediately; an `EmptyDataset` error is returned but the new
    /// binding stays in place.
    pub fn set(
        &mut self,
        channel: &str,
        field: Option<&str>,
        label: Option<&str>,
    ) -> Result<&ChartConfig, ChartError> {
        let channel: Channel = channel.parse()?;
        self.config = self.config.with_channel(channel, field, label);
        self.recalibrate()?;
        Ok(&self.config)
    }

    /// Replaces the active filter and recalibrates against the new visible subset.
    pub fn set_filter(&mut self, filter: Filter) -> Result<(), ChartError> {
        self.filter = filter;
        self.recalibrate()
    }

    /// Replaces the dataset and recalibrates every channel against it.
    /// Later records with an already-seen ticker are dropped.
    pub fn set_data(&mut self, data: Vec<DataPoint>) -> Result<(), ChartError> {
        let mut seen = HashSet::new();
        self.data = data
            .into_iter()
            .filter(|point| {
                let fresh = seen.insert(point.ticker.clone());
                if !fresh {
                    warn!("Duplicate ticker {} dropped", point.ticker);
                }
                fresh
            })
            .collect();
        self.index = self
            .data
            .iter()
            .enumerate()
            .map(|(i, point)| (point.ticker.clone(), i))
            .collect();
        self.recalibrate()
    }

    /// The rows scales are computed from: the visible subset, or the whole
    /// dataset when the filter hides everything so the axes keep a domain.
    fn calibration_set(&self) -> Vec<&DataPoint> {
        let visible = self.visible();
        if visible.is_empty() {
            self.data.iter().collect()
        } else {
            visible
        }
    }

    fn recalibrate(&mut self) -> Result<(), ChartError> {
        let calibration = Scales::calibrate(&self.config, &self.calibration_set());
        self.calibration = calibration;
        self.calibration.as_ref().map(|_| ()).map_err(|e| e.clone())
    }

    fn target_for(&self, scales: &Scales, point: &DataPoint) -> EntityTarget {
        let value = |channel: Channel| self.config.field(channel).and_then(|f| point.field(f));
        EntityTarget {
            x: point.field(&self.config.x.field).map(|v| scales.x.map(v)),
            y: point.field(&self.config.y.field).map(|v| scales.y.map(v)),
            radius: scales.radius.radius(value(Channel::Radius)),
            fill: scales.color.color(value(Channel::Color)),
        }
    }

    /// Drives the scene toward the current visible subset.
    ///
    /// Fails only when the scales could not be built and there is something to
    /// show; with nothing visible the remaining entities just exit.
    pub fn update(&mut self, now_ms: f64) -> Result<Reconciliation, ChartError> {
        trace_time!("Chart::update", 2000, {
            let targets: Vec<(String, EntityTarget)> = {
                let visible = self.visible();
                match &self.calibration {
                    Ok(scales) => visible
                        .iter()
                        .map(|point| (point.ticker.clone(), self.target_for(scales, point)))
                        .collect(),
                    Err(e) if !visible.is_empty() => return Err(e.clone()),
                    Err(_) => Vec::new(),
                }
            };

            let persisted = self.interaction.persisted().map(str::to_string);
            let result = self
                .scene
                .reconcile(&targets, persisted.as_deref(), now_ms);

            for ticker in &result.entered {
                self.interaction.register(ticker);
                if persisted.as_deref() == Some(ticker.as_str()) {
                    self.scene.highlight(ticker, now_ms);
                }
            }

            if let Ok(scales) = &self.calibration {
                self.axes.update(scales, &self.config, now_ms);
            }

            if DF.log_reconcile {
                debug!(
                    "Reconciled {} visible: {} entered, {} updated, {} exited",
                    targets.len(),
                    result.entered.len(),
                    result.updated.len(),
                    result.exited.len()
                );
            }
            Ok(result)
        })
    }

    pub fn pointer_enter(&mut self, ticker: &str, now_ms: f64) {
        let effects = self.interaction.pointer_enter(ticker);
        self.run(effects, now_ms);
    }

    pub fn pointer_leave(&mut self, ticker: &str, now_ms: f64) {
        let effects = self.interaction.pointer_leave(ticker);
        self.run(effects, now_ms);
    }

    pub fn click(&mut self, ticker: &str, now_ms: f64) {
        let effects = self.interaction.click(ticker);
        self.run(effects, now_ms);
    }

    /// Background interaction: drop the persisted selection and clear the detail surface.
    pub fn clear_persisted(&mut self, now_ms: f64) {
        let effects = self.interaction.clear_persisted();
        self.run(effects, now_ms);
    }

    fn run(&mut self, effects: Vec<Effect>, now_ms: f64) {
        for effect in effects {
            match effect {
                Effect::Highlight(ticker) => self.scene.highlight(&ticker, now_ms),
                Effect::RemoveHighlight(ticker) => {
                    let target = match (&self.calibration, self.point(&ticker)) {
                        (Ok(scales), Some(point)) => Some(self.target_for(scales, point)),
                        _ => None,
                    };
                    self.scene.remove_highlight(&ticker, target.as_ref(), now_ms);
                }
                Effect::RequestDetail(ticker) => {
                    self.events.push(ChartEvent::DetailRequested(ticker))
                }
                Effect::ClearDetail => self.events.push(ChartEvent::DetailCleared),
            }
        }
    }

    /// Detail requests raised since the last call.
    pub fn take_events(&mut self) -> Vec<ChartEvent> {
        std::mem::take(&mut self.events)
    }

    /// Housekeeping between frames: finished exits are dropped along with their
    /// dispatch entries, due label swaps are committed.
    pub fn tick(&mut self, now_ms: f64) {
        for ticker in self.scene.prune(now_ms) {
            self.interaction.unregister(&ticker);
        }
        self.axes.prune(now_ms);
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.scene.is_animating(now_ms) || self.axes.is_animating(now_ms)
    }

    pub fn frame(&self, now_ms: f64) -> ChartFrame {
        ChartFrame {
            bubbles: self.scene.frame(now_ms),
            axes: self.axes.frame(now_ms),
            animating: self.is_animating(now_ms),
        }
    }

    /// Topmost live bubble under `point` (plot pixels).
    pub fn hit_test(&self, point: (f64, f64), now_ms: f64) -> Option<String> {
        self.scene
            .frame(now_ms)
            .into_iter()
            .rev()
            .find(|bubble| !bubble.exiting && bubble.contains(point))
            .map(|bubble| bubble.ticker)
    }
}
