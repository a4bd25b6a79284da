//! Paint operations: the snapshots shapes register on the canvas.

use super::color::Color;

/// A self-contained paint operation captured at registration time.
///
/// Each variant snapshots the full geometry and color of one shape kind, so
/// repainting never reaches back into the shape object that registered it.
/// Moving or recoloring a shape means removing the old entry and registering
/// a fresh snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintOp {
    /// Filled pie wedge of the disc inscribed at (x, y) with side `diameter`.
    ///
    /// Angles are in degrees, 0 at three o'clock, increasing counterclockwise
    /// on screen (y grows downward).
    Arc {
        /// Bounding-square left edge
        x: i32,
        /// Bounding-square top edge
        y: i32,
        /// Side of the bounding square
        diameter: i32,
        /// Angle the sweep starts at
        start_angle: i32,
        /// Counterclockwise sweep in degrees
        extent: i32,
        /// Fill color
        color: Color,
    },
    /// Filled disc inscribed in the square at (x, y) with side `diameter`.
    Circle {
        /// Bounding-square left edge
        x: i32,
        /// Bounding-square top edge
        y: i32,
        /// Diameter in pixels
        diameter: i32,
        /// Fill color
        color: Color,
    },
    /// Filled axis-aligned rectangle.
    Rect {
        /// Left edge
        x: i32,
        /// Top edge
        y: i32,
        /// Width in pixels
        width: i32,
        /// Height in pixels
        height: i32,
        /// Fill color
        color: Color,
    },
    /// Filled isoceles triangle with the apex at (x, y) and the base
    /// `height` pixels below it; negative height points the apex down.
    Triangle {
        /// Apex X coordinate
        x: i32,
        /// Apex Y coordinate
        y: i32,
        /// Base width in pixels
        width: i32,
        /// Signed height in pixels
        height: i32,
        /// Fill color
        color: Color,
    },
}

impl PaintOp {
    /// Renders this operation onto a Cairo context.
    ///
    /// Degenerate geometry (non-positive diameter or rectangle sides, zero
    /// arc extent) draws nothing rather than erroring.
    pub fn paint(&self, ctx: &cairo::Context) {
        match *self {
            PaintOp::Arc {
                x,
                y,
                diameter,
                start_angle,
                extent,
                color,
            } => paint_arc(ctx, x, y, diameter, start_angle, extent, color),
            PaintOp::Circle {
                x,
                y,
                diameter,
                color,
            } => paint_circle(ctx, x, y, diameter, color),
            PaintOp::Rect {
                x,
                y,
                width,
                height,
                color,
            } => paint_rect(ctx, x, y, width, height, color),
            PaintOp::Triangle {
                x,
                y,
                width,
                height,
                color,
            } => paint_triangle(ctx, x, y, width, height, color),
        }
    }

    /// Returns the fill color of this operation.
    pub fn color(&self) -> Color {
        match *self {
            PaintOp::Arc { color, .. }
            | PaintOp::Circle { color, .. }
            | PaintOp::Rect { color, .. }
            | PaintOp::Triangle { color, .. } => color,
        }
    }
}

fn set_source(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
}

fn paint_circle(ctx: &cairo::Context, x: i32, y: i32, diameter: i32, color: Color) {
    if diameter <= 0 {
        return;
    }

    let radius = diameter as f64 / 2.0;
    set_source(ctx, color);
    ctx.arc(
        x as f64 + radius,
        y as f64 + radius,
        radius,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    let _ = ctx.fill();
}

fn paint_arc(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    diameter: i32,
    start_angle: i32,
    extent: i32,
    color: Color,
) {
    if diameter <= 0 || extent == 0 {
        return;
    }

    let radius = diameter as f64 / 2.0;
    let cx = x as f64 + radius;
    let cy = y as f64 + radius;

    // Screen coordinates put y downward, so a counterclockwise sweep in
    // canvas terms runs toward negative Cairo angles.
    let from = -(start_angle as f64).to_radians();
    let to = -((start_angle + extent) as f64).to_radians();

    set_source(ctx, color);
    ctx.move_to(cx, cy);
    if extent > 0 {
        ctx.arc_negative(cx, cy, radius, from, to);
    } else {
        ctx.arc(cx, cy, radius, from, to);
    }
    ctx.close_path();
    let _ = ctx.fill();
}

fn paint_rect(ctx: &cairo::Context, x: i32, y: i32, width: i32, height: i32, color: Color) {
    if width <= 0 || height <= 0 {
        return;
    }

    set_source(ctx, color);
    ctx.rectangle(x as f64, y as f64, width as f64, height as f64);
    let _ = ctx.fill();
}

fn paint_triangle(ctx: &cairo::Context, x: i32, y: i32, width: i32, height: i32, color: Color) {
    if width <= 0 || height == 0 {
        return;
    }

    // Integer halving keeps the base corners exactly where the original
    // geometry puts them for odd widths.
    let half = width / 2;

    set_source(ctx, color);
    ctx.move_to(x as f64, y as f64);
    ctx.line_to((x + half) as f64, (y + height) as f64);
    ctx.line_to((x - half) as f64, (y + height) as f64);
    ctx.close_path();
    let _ = ctx.fill();
}
