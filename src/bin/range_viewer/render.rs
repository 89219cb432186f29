use macroquad::prelude::*;
use parabolic_range::core::{AxisWindow, ChartSpec};

use crate::constants::{
    BOTTOM_MARGIN, LABEL_COLOR, LEFT_MARGIN, MIN_PLOT_HEIGHT, MIN_PLOT_WIDTH, RIGHT_MARGIN,
    TITLE_Y, TOP_MARGIN, X_GRID_LINES, Y_GRID_LINES,
};

/// Screen rectangle the data is drawn into.
#[derive(Clone, Copy)]
pub(crate) struct PlotRect {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotRect {
    /// Margins shrink the plot, but never below the minimum size; a window
    /// smaller than that just clips the right and bottom edges.
    pub(crate) fn from_screen(screen_w: f32, screen_h: f32) -> Self {
        Self {
            left: LEFT_MARGIN,
            right: (screen_w - RIGHT_MARGIN).max(LEFT_MARGIN + MIN_PLOT_WIDTH),
            top: TOP_MARGIN,
            bottom: (screen_h - BOTTOM_MARGIN).max(TOP_MARGIN + MIN_PLOT_HEIGHT),
        }
    }

    pub(crate) fn data_to_screen(&self, window: &AxisWindow, x: f64, y: f64) -> Vec2 {
        let (u, v) = window.normalize(x, y);
        vec2(
            self.left + (u as f32) * (self.right - self.left),
            self.bottom - (v as f32) * (self.bottom - self.top),
        )
    }
}

/// Left edge for a label centered on `center_x`, kept inside the plot when it
/// fits and pinned to the left edge when it does not.
pub(crate) fn label_left(center_x: f32, label_width: f32, rect: PlotRect) -> f32 {
    let min_x = rect.left + 4.0;
    let max_x = (rect.right - label_width - 4.0).max(min_x);
    (center_x - label_width * 0.5).max(min_x).min(max_x)
}

fn format_axis_value(value: f64, span: f64) -> String {
    if span >= 1000.0 {
        format!("{value:.0}")
    } else if span >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_grid(rect: PlotRect, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = rect.left + t * (rect.right - rect.left);
        draw_line(x, rect.top, x, rect.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = rect.bottom - t * (rect.bottom - rect.top);
        draw_line(rect.left, y, rect.right, y, 1.0, color);
    }
}

pub(crate) fn draw_axes(rect: PlotRect, window: &AxisWindow) {
    draw_line(rect.left, rect.top, rect.left, rect.bottom, 2.0, DARKGRAY);
    // The zero-range line sits above the bottom edge once ranges go negative.
    let zero = rect.data_to_screen(window, window.x_min, 0.0);
    draw_line(rect.left, zero.y, rect.right, zero.y, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(rect: PlotRect, window: &AxisWindow, spec: &ChartSpec) {
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f64 / X_GRID_LINES as f64;
        let value = window.x_min + t * window.x_span();
        let label = format_axis_value(value, window.x_span());
        let size = measure_text(&label, None, tick_font_size, 1.0);
        let x = rect.left + (t as f32) * (rect.right - rect.left);
        draw_text(
            &label,
            x - (size.width * 0.5),
            rect.bottom + 22.0,
            tick_font_size as f32,
            LABEL_COLOR,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f64 / Y_GRID_LINES as f64;
        let value = window.y_min + t * window.y_span();
        let label = format_axis_value(value, window.y_span());
        let size = measure_text(&label, None, tick_font_size, 1.0);
        let y = rect.bottom - (t as f32) * (rect.bottom - rect.top);
        draw_text(
            &label,
            (rect.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size as f32,
            LABEL_COLOR,
        );
    }

    let x_size = measure_text(&spec.x_label, None, 20, 1.0);
    draw_text(
        &spec.x_label,
        (rect.left + rect.right - x_size.width) * 0.5,
        rect.bottom + 52.0,
        20.0,
        LABEL_COLOR,
    );
    draw_text(&spec.y_label, rect.left + 10.0, rect.top - 10.0, 20.0, LABEL_COLOR);
}

pub(crate) fn draw_title(spec: &ChartSpec, rect: PlotRect) {
    let center = (rect.left + rect.right) * 0.5;
    for (i, line) in spec.title_lines().enumerate() {
        let font_size = if i == 0 { 30.0 } else { 22.0 };
        let size = measure_text(line, None, font_size as u16, 1.0);
        draw_text(
            line,
            center - (size.width * 0.5),
            TITLE_Y + (i as f32 * 30.0),
            font_size,
            Color::from_rgba(30, 30, 35, 255),
        );
    }
}

pub(crate) fn draw_curve(
    points: impl Iterator<Item = (f64, f64)>,
    rect: PlotRect,
    window: &AxisWindow,
    thickness: f32,
    color: Color,
) {
    let mut prev: Option<Vec2> = None;
    for (x, y) in points {
        let cur = rect.data_to_screen(window, x, y);
        if let Some(p) = prev {
            draw_line(p.x, p.y, cur.x, cur.y, thickness, color);
        }
        prev = Some(cur);
    }
}

pub(crate) fn draw_peak(peak: (f64, f64), rect: PlotRect, window: &AxisWindow) {
    let (angle, range) = peak;
    let p = rect.data_to_screen(window, angle, range);
    draw_circle(p.x, p.y, 6.0, RED);
    draw_circle_lines(p.x, p.y, 6.0, 2.0, MAROON);

    let label = format!("Peak: {range:.2} m at {angle:.1} deg");
    let size = measure_text(&label, None, 18, 1.0);
    let label_x = label_left(p.x, size.width, rect);
    let label_y = (p.y - 14.0).max(rect.top + 18.0);
    draw_text(&label, label_x, label_y, 18.0, DARKGRAY);
}
