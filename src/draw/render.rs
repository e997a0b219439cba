//! Cairo-based rendering for the sketch surface.

use super::color::Color;
use super::frame::Frame;
use super::stroke::Point;
use crate::config::Config;

/// Fixed visual style applied to every render pass.
///
/// Strokes carry no per-stroke styling; the whole surface is painted with
/// one style resolved from the config at startup, which keeps the rendered
/// output a pure function of the stroke state.
#[derive(Debug, Clone, Copy)]
pub struct CanvasStyle {
    /// Full-surface background tone
    pub backdrop: Color,
    /// Tone of the decorative inset panel
    pub panel: Color,
    /// Stroke color shared by all strokes
    pub stroke: Color,
    /// Stroke line width in pixels
    pub stroke_width: f64,
}

impl CanvasStyle {
    /// Resolves the style from user configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            backdrop: config.canvas.backdrop_color.to_color(),
            panel: config.canvas.panel_color.to_color(),
            stroke: config.drawing.stroke_color.to_color(),
            stroke_width: config.drawing.stroke_width,
        }
    }
}

/// Repaints the full surface from the retained stroke state.
///
/// Every pass fully overwrites the previous frame:
/// 1. The backdrop tone fills the whole surface.
/// 2. The inset panel (half the surface size, quarter-offset) is filled in
///    the panel tone. Decorative only; strokes are not clipped to it.
/// 3. Committed strokes render in frame order, then the active stroke last,
///    so the in-progress gesture always sits visually on top.
pub fn render_canvas(
    ctx: &cairo::Context,
    width: u32,
    height: u32,
    style: &CanvasStyle,
    frame: &Frame,
    active: &[Point],
) {
    render_backdrop(ctx, width, height, style);

    for stroke in &frame.strokes {
        render_stroke(ctx, &stroke.points, style.stroke, style.stroke_width);
    }

    render_stroke(ctx, active, style.stroke, style.stroke_width);
}

/// Fills the backdrop and the inset panel.
fn render_backdrop(ctx: &cairo::Context, width: u32, height: u32, style: &CanvasStyle) {
    let w = width as f64;
    let h = height as f64;

    // Source operator so the fill replaces whatever the buffer held before.
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(
        style.backdrop.r,
        style.backdrop.g,
        style.backdrop.b,
        style.backdrop.a,
    );
    let _ = ctx.paint();
    ctx.set_operator(cairo::Operator::Over);

    ctx.set_source_rgba(style.panel.r, style.panel.g, style.panel.b, style.panel.a);
    ctx.rectangle(w / 4.0, h / 4.0, w / 2.0, h / 2.0);
    let _ = ctx.fill();
}

/// Renders one stroke as a polyline through its points.
///
/// Strokes with no points are skipped. A single-point stroke produces no
/// visible segment but still participates in state, matching the commit
/// rules of the interaction loop.
pub fn render_stroke(ctx: &cairo::Context, points: &[Point], color: Color, width: f64) {
    if points.is_empty() {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    let (x0, y0) = points[0];
    ctx.move_to(x0 as f64, y0 as f64);

    for &(x, y) in &points[1..] {
        ctx.line_to(x as f64, y as f64);
    }

    let _ = ctx.stroke();
}
