//! Axis and label renderer state.
//!
//! Ticks are keyed by value: a tick that exists under both the old and the new
//! scale glides to its new position, new ticks fade in from where the old scale
//! would have put them, and dropped ticks slide along with the new scale while
//! fading out. Axis titles swap in two phases (fade out and shift, then fade
//! back in from the shifted position).

use crate::config::{ANIMATION, PLOT_CONFIG};
use crate::models::chart_config::{ChartConfig, Scales};
use crate::models::scales::LinearScale;
use crate::models::transition::Tween;

const SAME_TICK_EPSILON: f64 = 1e-9;

fn same_value(a: f64, b: f64) -> bool {
    (a - b).abs() <= SAME_TICK_EPSILON * a.abs().max(b.abs()).max(1.0)
}

#[derive(Debug, Clone)]
struct Tick {
    value: f64,
    text: String,
    position: Tween<f64>,
    opacity: Tween<f64>,
    removal_at: Option<f64>,
}

/// One tick label, in plot pixels along its axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TickFrame {
    pub value: f64,
    pub text: String,
    pub position: f64,
    pub opacity: f64,
}

/// Ticks for one position axis.
#[derive(Debug, Default)]
struct AxisTrack {
    ticks: Vec<Tick>,
    scale: Option<LinearScale>,
}

impl AxisTrack {
    fn update(&mut self, scale: &LinearScale, now_ms: f64) {
        let long = ANIMATION.long_ms;
        let labels = scale.tick_labels(PLOT_CONFIG.target_tick_count);
        let previous = self.scale;

        for tick in self.ticks.iter_mut() {
            let kept = labels.iter().any(|(value, _)| same_value(*value, tick.value));
            tick.position.retarget(scale.map(tick.value), now_ms, long);
            if !kept && tick.removal_at.is_none() {
                tick.opacity.retarget(0.0, now_ms, long);
                tick.removal_at = Some(now_ms + long);
            }
        }

        for (value, text) in labels {
            match self.ticks.iter_mut().find(|t| same_value(t.value, value)) {
                Some(tick) => {
                    tick.text = text;
                    if tick.removal_at.take().is_some() {
                        tick.opacity.retarget(1.0, now_ms, long);
                    }
                }
                None => {
                    let target = scale.map(value);
                    let (position, opacity) = match previous {
                        Some(old) => (
                            Tween::new(old.map(value), target, now_ms, long),
                            Tween::new(0.0, 1.0, now_ms, long),
                        ),
                        None => (Tween::settled(target), Tween::settled(1.0)),
                    };
                    self.ticks.push(Tick {
                        value,
                        text,
                        position,
                        opacity,
                        removal_at: None,
                    });
                }
            }
        }

        self.ticks.sort_by(|a, b| a.value.total_cmp(&b.value));
        self.scale = Some(*scale);
    }

    fn prune(&mut self, now_ms: f64) {
        self.ticks
            .retain(|t| t.removal_at.is_none_or(|at| now_ms < at));
    }

    fn is_animating(&self, now_ms: f64) -> bool {
        self.ticks.iter().any(|t| {
            t.removal_at.is_some() || t.position.is_running(now_ms) || t.opacity.is_running(now_ms)
        })
    }

    fn frame(&self, now_ms: f64) -> Vec<TickFrame> {
        self.ticks
            .iter()
            .filter(|t| t.removal_at.is_none_or(|at| now_ms < at))
            .map(|t| TickFrame {
                value: t.value,
                text: t.text.clone(),
                position: t.position.value_at(now_ms),
                opacity: t.opacity.value_at(now_ms),
            })
            .collect()
    }
}

/// Axis title with a pending swap.
#[derive(Debug)]
struct LabelTrack {
    /// Pixel shift applied while faded out, along the label's travel direction
    shift: (f64, f64),
    shown: String,
    target: String,
    opacity: Tween<f64>,
    offset: Tween<f64>,
    /// When the fade-out completes and the text is replaced
    swap_at: Option<f64>,
}

/// Axis title as it should be painted now.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFrame {
    pub text: String,
    /// Pixel offset from the resting anchor
    pub offset: (f64, f64),
    pub opacity: f64,
}

impl LabelTrack {
    fn new(shift: (f64, f64)) -> Self {
        Self {
            shift,
            shown: String::new(),
            target: String::new(),
            opacity: Tween::settled(0.0),
            offset: Tween::settled(0.0),
            swap_at: None,
        }
    }

    fn update(&mut self, label: &str, now_ms: f64) {
        if label == self.target {
            return;
        }
        self.commit(now_ms);
        self.target = label.to_string();

        if self.shown.is_empty() {
            self.shown = label.to_string();
            self.opacity = Tween::settled(1.0);
            self.offset = Tween::settled(0.0);
            return;
        }

        if label == self.shown {
            // Changed back before the swap happened
            self.opacity.retarget(1.0, now_ms, ANIMATION.long_ms);
            self.offset.retarget(0.0, now_ms, ANIMATION.long_ms);
            self.swap_at = None;
            return;
        }

        let fast = ANIMATION.fast_ms;
        self.opacity.retarget(0.0, now_ms, fast);
        self.offset.retarget(1.0, now_ms, fast);
        self.swap_at = Some(now_ms + fast);
    }

    /// Text and tweens in effect at `now_ms`, including a swap that is due but not committed.
    fn phase(&self, now_ms: f64) -> (&str, Tween<f64>, Tween<f64>) {
        match self.swap_at {
            Some(at) if now_ms >= at => {
                let long = ANIMATION.long_ms;
                (
                    self.target.as_str(),
                    Tween::new(0.0, 1.0, at, long),
                    Tween::new(1.0, 0.0, at, long),
                )
            }
            _ => (self.shown.as_str(), self.opacity, self.offset),
        }
    }

    fn commit(&mut self, now_ms: f64) {
        if self.swap_at.is_some_and(|at| now_ms >= at) {
            let (_, opacity, offset) = self.phase(now_ms);
            self.shown = self.target.clone();
            self.opacity = opacity;
            self.offset = offset;
            self.swap_at = None;
        }
    }

    fn is_animating(&self, now_ms: f64) -> bool {
        let (_, opacity, offset) = self.phase(now_ms);
        self.swap_at.is_some() || opacity.is_running(now_ms) || offset.is_running(now_ms)
    }

    fn frame(&self, now_ms: f64) -> LabelFrame {
        let (text, opacity, offset) = self.phase(now_ms);
        let k = offset.value_at(now_ms);
        LabelFrame {
            text: text.to_string(),
            offset: (self.shift.0 * k, self.shift.1 * k),
            opacity: opacity.value_at(now_ms),
        }
    }
}

/// Everything the axes need to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFrame {
    pub x_ticks: Vec<TickFrame>,
    pub y_ticks: Vec<TickFrame>,
    /// Vertical pixel position of the horizontal axis line
    pub x_axis_y: f64,
    pub x_label: LabelFrame,
    pub y_label: LabelFrame,
}

#[derive(Debug)]
pub struct AxisRenderer {
    x: AxisTrack,
    y: AxisTrack,
    x_anchor: Option<Tween<f64>>,
    x_label: LabelTrack,
    y_label: LabelTrack,
}

impl Default for AxisRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisRenderer {
    pub fn new() -> Self {
        Self {
            x: AxisTrack::default(),
            y: AxisTrack::default(),
            x_anchor: None,
            x_label: LabelTrack::new((PLOT_CONFIG.x_label_shift, 0.0)),
            y_label: LabelTrack::new((0.0, PLOT_CONFIG.y_label_shift)),
        }
    }

    pub fn update(&mut self, scales: &Scales, config: &ChartConfig, now_ms: f64) {
        let long = ANIMATION.long_ms;
        self.x.update(&scales.x, now_ms);
        self.y.update(&scales.y, now_ms);

        let anchor = scales.x_axis_anchor();
        match self.x_anchor.as_mut() {
            Some(tween) => tween.retarget(anchor, now_ms, long),
            None => {
                self.x_anchor = Some(Tween::new(
                    PLOT_CONFIG.plot_height(),
                    anchor,
                    now_ms,
                    long,
                ))
            }
        }

        self.x_label.update(&config.x.label, now_ms);
        self.y_label.update(&config.y.label, now_ms);
    }

    /// Drops faded-out ticks and commits due label swaps.
    pub fn prune(&mut self, now_ms: f64) {
        self.x.prune(now_ms);
        self.y.prune(now_ms);
        self.x_label.commit(now_ms);
        self.y_label.commit(now_ms);
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.x.is_animating(now_ms)
            || self.y.is_animating(now_ms)
            || self.x_anchor.is_some_and(|t| t.is_running(now_ms))
            || self.x_label.is_animating(now_ms)
            || self.y_label.is_animating(now_ms)
    }

    pub fn frame(&self, now_ms: f64) -> AxisFrame {
        AxisFrame {
            x_ticks: self.x.frame(now_ms),
            y_ticks: self.y.frame(now_ms),
            x_axis_y: self
                .x_anchor
                .map_or(PLOT_CONFIG.plot_height(), |t| t.value_at(now_ms)),
            x_label: self.x_label.frame(now_ms),
            y_label: self.y_label.frame(now_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Channel, DataPoint};

    fn scales_for(config: &ChartConfig, rows: &[(f64, f64)]) -> Scales {
        let data: Vec<DataPoint> = rows
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                DataPoint::new(format!("T{i}"))
                    .with_field("divg3y", *x)
                    .with_field("divYield", *y)
                    .with_field("payout", *x * 10.0)
            })
            .collect();
        let refs: Vec<&DataPoint> = data.iter().collect();
        Scales::calibrate(config, &refs).unwrap()
    }

    #[test]
    fn first_update_shows_ticks_and_labels_at_rest() {
        let config = ChartConfig::default();
        let mut axes = AxisRenderer::new();
        axes.update(&scales_for(&config, &[(0.0, 1.0), (10.0, 5.0)]), &config, 0.0);

        let frame = axes.frame(0.0);
        assert_eq!(frame.x_ticks.first().map(|t| t.text.as_str()), Some("0"));
        assert_eq!(frame.x_ticks.last().map(|t| t.position), Some(PLOT_CONFIG.plot_width()));
        assert!(frame.x_ticks.iter().all(|t| t.opacity == 1.0));
        assert_eq!(frame.x_label.text, "3 years dividend growth");
        assert_eq!(frame.x_label.opacity, 1.0);
        assert_eq!(frame.y_label.offset, (0.0, 0.0));
        assert!(!axes.is_animating(ANIMATION.long_ms));
    }

    #[test]
    fn label_swap_fades_out_swaps_then_fades_in() {
        let config = ChartConfig::default();
        let mut axes = AxisRenderer::new();
        let scales = scales_for(&config, &[(0.0, 1.0), (10.0, 5.0)]);
        axes.update(&scales, &config, 0.0);

        let next = config.with_channel(Channel::X, Some("payout"), Some("Payout ratio"));
        let scales = scales_for(&next, &[(0.0, 1.0), (10.0, 5.0)]);
        axes.update(&scales, &next, 1000.0);

        let fading = axes.frame(1100.0).x_label;
        assert_eq!(fading.text, "3 years dividend growth");
        assert!(fading.opacity > 0.0 && fading.opacity < 1.0);
        assert!(fading.offset.0 > 0.0);

        let swapped = axes.frame(1000.0 + ANIMATION.fast_ms).x_label;
        assert_eq!(swapped.text, "Payout ratio");
        assert_eq!(swapped.opacity, 0.0);
        assert_eq!(swapped.offset, (PLOT_CONFIG.x_label_shift, 0.0));

        let done = 1000.0 + ANIMATION.fast_ms + ANIMATION.long_ms;
        axes.prune(done);
        let settled = axes.frame(done).x_label;
        assert_eq!(settled.text, "Payout ratio");
        assert_eq!(settled.opacity, 1.0);
        assert_eq!(settled.offset, (0.0, 0.0));
    }

    #[test]
    fn unchanged_label_does_not_animate() {
        let config = ChartConfig::default();
        let mut axes = AxisRenderer::new();
        let scales = scales_for(&config, &[(0.0, 1.0), (10.0, 5.0)]);
        axes.update(&scales, &config, 0.0);
        axes.update(&scales, &config, 1000.0);
        assert_eq!(axes.frame(1050.0).y_label.opacity, 1.0);
    }

    #[test]
    fn dropped_ticks_fade_and_are_pruned() {
        let config = ChartConfig::default();
        let mut axes = AxisRenderer::new();
        axes.update(&scales_for(&config, &[(0.0, 1.0), (10.0, 5.0)]), &config, 0.0);

        axes.update(&scales_for(&config, &[(0.0, 1.0), (100.0, 5.0)]), &config, 1000.0);
        let mid = axes.frame(1300.0).x_ticks;
        let leaving = mid.iter().find(|t| t.text == "1").unwrap();
        assert!(leaving.opacity > 0.0 && leaving.opacity < 1.0);
        assert!(mid.iter().any(|t| t.text == "100"));

        axes.prune(1000.0 + ANIMATION.long_ms);
        let after = axes.frame(1000.0 + ANIMATION.long_ms).x_ticks;
        assert!(after.iter().all(|t| t.opacity == 1.0));
        assert!(after.iter().any(|t| t.text == "100"));
        assert!(!after.iter().any(|t| t.text == "1"));
    }

    #[test]
    fn kept_tick_glides_to_its_new_position() {
        let config = ChartConfig::default();
        let mut axes = AxisRenderer::new();
        axes.update(&scales_for(&config, &[(0.0, 1.0), (10.0, 5.0)]), &config, 0.0);
        axes.update(&scales_for(&config, &[(0.0, 1.0), (20.0, 5.0)]), &config, 1000.0);

        let position_of = |frame: &AxisFrame| {
            frame
                .x_ticks
                .iter()
                .find(|t| t.text == "10")
                .map(|t| t.position)
        };
        assert_eq!(position_of(&axes.frame(1000.0)), Some(PLOT_CONFIG.plot_width()));
        assert_eq!(
            position_of(&axes.frame(1000.0 + ANIMATION.long_ms)),
            Some(PLOT_CONFIG.plot_width() / 2.0)
        );
    }

    #[test]
    fn horizontal_axis_follows_zero_or_floor() {
        let config = ChartConfig::default();
        let mut axes = AxisRenderer::new();
        let spans_zero = scales_for(&config, &[(0.0, -2.0), (10.0, 8.0)]);
        axes.update(&spans_zero, &config, 0.0);
        let zero_line = spans_zero.y.map(0.0);
        assert_eq!(axes.frame(ANIMATION.long_ms).x_axis_y, zero_line);

        axes.update(&scales_for(&config, &[(0.0, 2.0), (10.0, 8.0)]), &config, 1000.0);
        assert_eq!(axes.frame(1000.0).x_axis_y, zero_line);
        assert_eq!(
            axes.frame(1000.0 + ANIMATION.long_ms).x_axis_y,
            PLOT_CONFIG.plot_height()
        );
    }
}
