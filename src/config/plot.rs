//! Plot visualization configuration

use eframe::egui::Color32;

/// Outer canvas margins (pixels). The plot area sits inside these.
#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

pub struct PlotConfig {
    /// Full canvas size including margins
    pub outer_width: f64,
    pub outer_height: f64,
    pub margin: Margin,

    // --- BUBBLES ---
    /// Fill used when no color channel is bound, and for highlighted bubbles
    pub default_fill: Color32,
    pub highlight_fill: Color32,
    pub highlight_stroke: Color32,
    pub highlight_stroke_width: f64,
    /// Radius used when no radius channel is bound
    pub constant_radius: f64,
    /// Output range of the radius scale
    pub radius_range: (f64, f64),
    /// Radius of hovered and persisted bubbles
    pub highlight_radius: f64,
    /// Resting opacity of a bubble (0.0 = invisible, 1.0 = fully opaque)
    pub resting_opacity: f64,
    pub highlight_opacity: f64,

    // --- COLOR SCALE STOPS ---
    // value <= median, median..Q3, Q3..max
    pub color_scale_stops: &'static [&'static str],

    // --- AXES ---
    /// How many ticks the scale aims for (the real count comes from nice steps)
    pub target_tick_count: usize,
    /// Pixel shift applied to the x label while it fades out
    pub x_label_shift: f64,
    /// Pixel shift applied to the y label while it fades out
    pub y_label_shift: f64,
    pub x_label_anchor: (f64, f64),
    pub y_label_anchor: (f64, f64),
    pub ticker_label_offset: (f64, f64),

    // --- TEXT / STROKES ---
    pub axis_color: Color32,
    pub axis_label_color: Color32,
    pub tick_label_color: Color32,
    pub ticker_label_color: Color32,
    pub axis_line_width: f32,
    pub tick_font_size: f32,
    pub axis_label_font_size: f32,
    pub ticker_font_size: f32,
    pub background_color: Color32,
}

impl PlotConfig {
    /// Width of the inner plot rectangle.
    pub const fn plot_width(&self) -> f64 {
        self.outer_width - self.margin.left - self.margin.right
    }

    /// Height of the inner plot rectangle.
    pub const fn plot_height(&self) -> f64 {
        self.outer_height - self.margin.top - self.margin.bottom
    }
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    outer_width: 700.0,
    outer_height: 500.0,
    margin: Margin {
        left: 60.0,
        right: 60.0,
        top: 60.0,
        bottom: 60.0,
    },

    default_fill: Color32::from_rgb(0x66, 0x0B, 0x60), // Plum
    highlight_fill: Color32::from_rgb(0x66, 0x0B, 0x60),
    highlight_stroke: Color32::WHITE,
    highlight_stroke_width: 2.0,
    constant_radius: 5.0,
    radius_range: (3.0, 12.0),
    highlight_radius: 25.0,
    resting_opacity: 0.8,
    highlight_opacity: 1.0,

    color_scale_stops: &[
        "#008000", // Green
        "#ffff00", // Yellow
        "#ff0000", // Red
    ],

    target_tick_count: 10,
    x_label_shift: 200.0,
    y_label_shift: -200.0,
    // Relative to the plot origin (top-left of the inner rect)
    x_label_anchor: (580.0 + 10.0, 380.0 + 60.0 - 20.0),
    y_label_anchor: (-20.0, -20.0),
    ticker_label_offset: (0.0, 2.0),

    axis_color: Color32::from_gray(160),
    axis_label_color: Color32::LIGHT_GRAY,
    tick_label_color: Color32::GRAY,
    ticker_label_color: Color32::WHITE,
    axis_line_width: 1.0,
    tick_font_size: 11.0,
    axis_label_font_size: 14.0,
    ticker_font_size: 11.0,
    background_color: Color32::from_rgb(25, 25, 25),
};
