//! Paints a `ChartFrame` with the egui painter and turns pointer activity into
//! chart events.

use eframe::egui::{Align2, FontId, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, vec2};

use crate::config::PLOT_CONFIG;
use crate::models::{AxisFrame, BubbleFrame, Chart, ChartFrame, LabelFrame};
use crate::ui::styles::apply_opacity;

/// Pointer activity over the chart, in the vocabulary the chart understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(String),
    Leave(String),
    Click(String),
    Background,
}

#[derive(Default)]
pub struct ChartView {
    hovered: Option<String>,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the chart and reports what the pointer did this frame.
    pub fn show(&mut self, ui: &mut Ui, chart: &Chart, now_ms: f64) -> Vec<PointerEvent> {
        let size = vec2(
            PLOT_CONFIG.outer_width as f32,
            PLOT_CONFIG.outer_height as f32,
        );
        let (outer, response) = ui.allocate_exact_size(size, Sense::click());
        let origin = outer.min
            + vec2(
                PLOT_CONFIG.margin.left as f32,
                PLOT_CONFIG.margin.top as f32,
            );

        let frame = chart.frame(now_ms);
        if ui.is_rect_visible(outer) {
            let painter = ui.painter_at(outer);
            painter.rect_filled(outer, 0.0, PLOT_CONFIG.background_color);
            paint_axes(&painter, origin, &frame.axes);
            paint_bubbles(&painter, origin, &frame);
        }

        self.pointer_events(&response, chart, origin, now_ms)
    }

    fn pointer_events(
        &mut self,
        response: &Response,
        chart: &Chart,
        origin: Pos2,
        now_ms: f64,
    ) -> Vec<PointerEvent> {
        let to_plot = |pos: Pos2| ((pos.x - origin.x) as f64, (pos.y - origin.y) as f64);
        let under_pointer = response
            .hover_pos()
            .and_then(|pos| chart.hit_test(to_plot(pos), now_ms));

        let mut events = Vec::new();
        if under_pointer != self.hovered {
            if let Some(previous) = self.hovered.take() {
                events.push(PointerEvent::Leave(previous));
            }
            if let Some(next) = &under_pointer {
                events.push(PointerEvent::Enter(next.clone()));
            }
            self.hovered = under_pointer.clone();
        }

        if response.clicked() {
            events.push(match under_pointer {
                Some(ticker) => PointerEvent::Click(ticker),
                None => PointerEvent::Background,
            });
        }
        events
    }
}

fn at(origin: Pos2, x: f64, y: f64) -> Pos2 {
    origin + vec2(x as f32, y as f32)
}

fn paint_label(painter: &Painter, anchor: Pos2, align: Align2, label: &LabelFrame) {
    if label.opacity <= 0.0 {
        return;
    }
    painter.text(
        anchor + vec2(label.offset.0 as f32, label.offset.1 as f32),
        align,
        &label.text,
        FontId::proportional(PLOT_CONFIG.axis_label_font_size),
        apply_opacity(PLOT_CONFIG.axis_label_color, label.opacity as f32),
    );
}

fn paint_axes(painter: &Painter, origin: Pos2, axes: &AxisFrame) {
    let width = PLOT_CONFIG.plot_width();
    let height = PLOT_CONFIG.plot_height();
    let line = Stroke::new(PLOT_CONFIG.axis_line_width, PLOT_CONFIG.axis_color);
    let tick_font = FontId::proportional(PLOT_CONFIG.tick_font_size);

    // Horizontal axis rests on zero (or the floor); vertical axis on the left edge
    let axis_y = axes.x_axis_y;
    painter.line_segment([at(origin, 0.0, axis_y), at(origin, width, axis_y)], line);
    painter.line_segment([at(origin, 0.0, 0.0), at(origin, 0.0, height)], line);

    // Tick marks have zero length; only their labels are drawn
    for tick in &axes.x_ticks {
        painter.text(
            at(origin, tick.position, axis_y + 4.0),
            Align2::CENTER_TOP,
            &tick.text,
            tick_font.clone(),
            apply_opacity(PLOT_CONFIG.tick_label_color, tick.opacity as f32),
        );
    }
    for tick in &axes.y_ticks {
        painter.text(
            at(origin, -6.0, tick.position),
            Align2::RIGHT_CENTER,
            &tick.text,
            tick_font.clone(),
            apply_opacity(PLOT_CONFIG.tick_label_color, tick.opacity as f32),
        );
    }

    let (x_anchor_x, x_anchor_y) = PLOT_CONFIG.x_label_anchor;
    let (y_anchor_x, y_anchor_y) = PLOT_CONFIG.y_label_anchor;
    paint_label(
        painter,
        at(origin, x_anchor_x, x_anchor_y),
        Align2::RIGHT_BOTTOM,
        &axes.x_label,
    );
    paint_label(
        painter,
        at(origin, y_anchor_x, y_anchor_y),
        Align2::LEFT_BOTTOM,
        &axes.y_label,
    );
}

fn paint_bubble(painter: &Painter, origin: Pos2, bubble: &BubbleFrame) {
    let (Some((x, y)), Some(radius)) = (bubble.center, bubble.radius) else {
        return;
    };
    if radius <= 0.0 {
        return;
    }
    let center = at(origin, x, y);
    let opacity = bubble.opacity as f32;
    if let Some(fill) = bubble.fill {
        painter.circle_filled(center, radius as f32, apply_opacity(fill, opacity));
    }
    if bubble.stroke_width > 0.0 {
        painter.circle_stroke(
            center,
            radius as f32,
            Stroke::new(bubble.stroke_width as f32, apply_opacity(bubble.stroke, opacity)),
        );
    }
    if bubble.label_opacity > 0.0 {
        let (dx, dy) = PLOT_CONFIG.ticker_label_offset;
        painter.text(
            center + Vec2::new(dx as f32, dy as f32),
            Align2::CENTER_CENTER,
            &bubble.ticker,
            FontId::proportional(PLOT_CONFIG.ticker_font_size),
            apply_opacity(PLOT_CONFIG.ticker_label_color, bubble.label_opacity as f32),
        );
    }
}

fn paint_bubbles(painter: &Painter, origin: Pos2, frame: &ChartFrame) {
    let plot = Rect::from_min_size(
        origin,
        vec2(
            PLOT_CONFIG.plot_width() as f32,
            PLOT_CONFIG.plot_height() as f32,
        ),
    );
    // Let highlighted bubbles spill into the margins but not past the canvas
    let painter = painter.with_clip_rect(plot.expand(PLOT_CONFIG.highlight_radius as f32));
    for bubble in frame.bubbles.iter().filter(|b| b.is_drawable()) {
        paint_bubble(&painter, origin, bubble);
    }
}
