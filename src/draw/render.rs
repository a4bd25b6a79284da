//! Render pipeline: background fill plus ordered replay of paint operations.

use super::color::Color;
use super::frame::{Frame, FrameError};
use super::paint::PaintOp;

/// Renders one scene onto an existing Cairo context.
///
/// Fills the full `width` x `height` area with the background color, then
/// replays every paint operation in iteration order. The first operation ends
/// up bottom-most; later ones paint over it.
pub fn render_scene<'a>(
    ctx: &cairo::Context,
    background: Color,
    width: i32,
    height: i32,
    ops: impl IntoIterator<Item = &'a PaintOp>,
) {
    ctx.set_source_rgba(background.r, background.g, background.b, background.a);
    ctx.rectangle(0.0, 0.0, width as f64, height as f64);
    let _ = ctx.fill();

    for op in ops {
        op.paint(ctx);
    }
}

/// Produces one complete off-screen frame from the given scene.
///
/// This is the render half of the double-buffering discipline: the caller
/// presents the returned [`Frame`] whole, never a surface that is still being
/// drawn into.
pub fn render_frame<'a>(
    width: i32,
    height: i32,
    background: Color,
    ops: impl IntoIterator<Item = &'a PaintOp>,
) -> Result<Frame, FrameError> {
    let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render_scene(&ctx, background, width, height, ops);
    }
    Frame::from_surface(surface)
}
