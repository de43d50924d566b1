//! Scale factory: data domain -> pixels, colors and radii.

use colorgrad::{Gradient, GradientBuilder, LinearGradient};
use eframe::egui::Color32;
use itertools::Itertools;
use std::fmt;

use crate::config::PLOT_CONFIG;
use crate::domain::DataPoint;
use crate::models::ChartError;
use crate::utils::{extent, quantile_sorted, remap};

/// Which way a position scale runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    /// 0 ..= width, left to right
    Horizontal,
    /// height ..= 0, so larger values render higher
    Vertical,
}

impl AxisKind {
    fn pixel_range(&self) -> (f64, f64) {
        match self {
            AxisKind::Horizontal => (0.0, PLOT_CONFIG.plot_width()),
            AxisKind::Vertical => (PLOT_CONFIG.plot_height(), 0.0),
        }
    }
}

/// Present, finite values of `field` in input order.
fn field_values(data: &[&DataPoint], field: &str) -> Vec<f64> {
    data.iter().filter_map(|point| point.field(field)).collect()
}

// Tick step thresholds: sqrt(50), sqrt(10), sqrt(2)
const E10: f64 = 7.0710678118654755;
const E5: f64 = 3.1622776601683795;
const E2: f64 = 1.4142135623730951;

/// Step between "nice" ticks. Positive values are the step itself; negative values
/// are the reciprocal of a sub-unit step (so -10 means 0.1), which keeps the
/// arithmetic exact for small steps.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if step <= 0.0 || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Actual distance between ticks for an increment from `tick_increment`.
fn step_from_increment(increment: f64) -> f64 {
    if increment < 0.0 { -1.0 / increment } else { increment }
}

/// Linear position scale with a nice-d domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Maps [min, max] of `field` over `data` onto the pixel range for `kind`,
    /// then extends the domain outward to round numbers.
    pub fn for_field(data: &[&DataPoint], field: &str, kind: AxisKind) -> Result<Self, ChartError> {
        let values = field_values(data, field);
        let (min, max) = extent(&values).ok_or_else(|| ChartError::EmptyDataset {
            field: field.to_string(),
        })?;
        Ok(Self::new((min, max), kind.pixel_range()).nice(PLOT_CONFIG.target_tick_count))
    }

    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn map(&self, value: f64) -> f64 {
        remap(value, self.domain.0, self.domain.1, self.range.0, self.range.1)
    }

    /// Rounds the domain outward to multiples of the tick step, repeating until the
    /// step stops changing.
    pub fn nice(self, count: usize) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }

        let mut previous = None;
        for _ in 0..10 {
            let increment = tick_increment(start, stop, count);
            if previous == Some(increment) {
                break;
            }
            if increment > 0.0 {
                start = (start / increment).floor() * increment;
                stop = (stop / increment).ceil() * increment;
            } else if increment < 0.0 {
                start = (start * increment).ceil() / increment;
                stop = (stop * increment).floor() / increment;
            } else {
                break;
            }
            previous = Some(increment);
        }

        let domain = if reversed { (stop, start) } else { (start, stop) };
        Self { domain, ..self }
    }

    /// Round-number tick values inside the domain, ascending.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if start == stop {
            return vec![start];
        }
        let increment = tick_increment(start, stop, count);
        if increment > 0.0 {
            let first = (start / increment).ceil() as i64;
            let last = (stop / increment).floor() as i64;
            (first..=last).map(|i| i as f64 * increment).collect()
        } else if increment < 0.0 {
            let inverse = -increment;
            let first = (start * inverse).ceil() as i64;
            let last = (stop * inverse).floor() as i64;
            (first..=last).map(|i| i as f64 / inverse).collect()
        } else {
            Vec::new()
        }
    }

    /// Labels for `ticks(count)`, with just enough decimals for the step.
    pub fn tick_labels(&self, count: usize) -> Vec<(f64, String)> {
        let (start, stop) = self.domain;
        let step = step_from_increment(tick_increment(start.min(stop), start.max(stop), count));
        let decimals = if step > 0.0 && step < 1.0 {
            (-step.log10().floor()) as usize
        } else {
            0
        };
        self.ticks(count)
            .into_iter()
            .map(|value| {
                // Avoid "-0"
                let value = if value == 0.0 { 0.0 } else { value };
                (value, format!("{:.*}", decimals, value))
            })
            .collect()
    }
}

/// Piecewise color scale (green <= median, green -> yellow up to Q3, yellow -> red to max)
/// or a constant when no field is bound.
pub enum ColorScale {
    Constant(Color32),
    Piecewise {
        median: f64,
        upper_quartile: f64,
        max: f64,
        gradient: LinearGradient,
    },
}

impl fmt::Debug for ColorScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScale::Constant(color) => f.debug_tuple("Constant").field(color).finish(),
            ColorScale::Piecewise {
                median,
                upper_quartile,
                max,
                ..
            } => f
                .debug_struct("Piecewise")
                .field("median", median)
                .field("upper_quartile", upper_quartile)
                .field("max", max)
                .finish(),
        }
    }
}

impl ColorScale {
    /// Works on a sorted private copy of the values; the caller's ordering is untouched.
    pub fn for_field(data: &[&DataPoint], field: Option<&str>) -> Result<Self, ChartError> {
        let Some(field) = field else {
            return Ok(ColorScale::Constant(PLOT_CONFIG.default_fill));
        };

        let sorted = field_values(data, field)
            .into_iter()
            .sorted_by(|a, b| a.total_cmp(b))
            .collect_vec();
        let empty = || ChartError::EmptyDataset {
            field: field.to_string(),
        };
        let median = quantile_sorted(&sorted, 0.5).ok_or_else(empty)?;
        let upper_quartile = quantile_sorted(&sorted, 0.75).ok_or_else(empty)?;
        let max = *sorted.last().ok_or_else(empty)?;

        // Stops sit at 0.0, 0.5 and 1.0 of the gradient; values are placed piecewise
        let gradient = match GradientBuilder::new()
            .html_colors(PLOT_CONFIG.color_scale_stops)
            .build::<LinearGradient>()
        {
            Ok(gradient) => gradient,
            Err(err) => {
                log::error!("Color gradient failed to build ({}), using constant fill", err);
                return Ok(ColorScale::Constant(PLOT_CONFIG.default_fill));
            }
        };

        Ok(ColorScale::Piecewise {
            median,
            upper_quartile,
            max,
            gradient,
        })
    }

    pub fn color(&self, value: Option<f64>) -> Option<Color32> {
        match self {
            ColorScale::Constant(color) => Some(*color),
            ColorScale::Piecewise {
                median,
                upper_quartile,
                max,
                gradient,
            } => {
                let value = value?;
                let t = if value <= *median {
                    0.0
                } else if value < *upper_quartile {
                    0.5 * (value - median) / (upper_quartile - median)
                } else if value < *max {
                    0.5 + 0.5 * (value - upper_quartile) / (max - upper_quartile)
                } else if value == *upper_quartile {
                    // Q3 == max
                    0.5
                } else {
                    1.0
                };
                Some(to_egui_color(gradient.at(t as f32)))
            }
        }
    }
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

/// Bubble radius: linear [min, max] -> [3, 12] px, or a constant 5 px when unbound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadiusScale {
    Constant(f64),
    Linear(LinearScale),
}

impl RadiusScale {
    pub fn for_field(data: &[&DataPoint], field: Option<&str>) -> Result<Self, ChartError> {
        let Some(field) = field else {
            return Ok(RadiusScale::Constant(PLOT_CONFIG.constant_radius));
        };
        let values = field_values(data, field);
        let (min, max) = extent(&values).ok_or_else(|| ChartError::EmptyDataset {
            field: field.to_string(),
        })?;
        Ok(RadiusScale::Linear(LinearScale::new(
            (min, max),
            PLOT_CONFIG.radius_range,
        )))
    }

    pub fn radius(&self, value: Option<f64>) -> Option<f64> {
        match self {
            RadiusScale::Constant(radius) => Some(*radius),
            RadiusScale::Linear(scale) => value.map(|v| scale.map(v)),
        }
    }
}
