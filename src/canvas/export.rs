//! Captioned PNG export of the current canvas contents.

use super::error::CanvasError;
use super::registry::Registry;
use crate::draw::{CaptionFont, Color, render_scene};
use std::fs;
use std::path::Path;

/// Extra rows below the caption band, matching the historical layout.
const BAND_PADDING: i32 = 2;

/// Renders the scene plus a caption band and writes it as a PNG file.
///
/// The output raster is `width x (height + band + 2)` where `band` is the
/// line height of the resolved caption font. The band is white with the
/// title drawn in black, left-aligned, its baseline placed so the whole line
/// is visible. Caption font resolution never fails (it falls back to a
/// generic family); every rasterization or I/O failure is surfaced once as
/// [`CanvasError::ExportFailed`].
pub fn export_frame(
    registry: &Registry,
    background: Color,
    title: &str,
    width: i32,
    height: i32,
    destination: &Path,
) -> Result<(), CanvasError> {
    // Resolve the caption font and measure the band on a throwaway surface;
    // the layout is all we need, not the pixels.
    let (font, band) = {
        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, 1, 1)
            .map_err(|e| export_failed(destination, &e))?;
        let ctx = cairo::Context::new(&surface).map_err(|e| export_failed(destination, &e))?;
        let font = CaptionFont::resolve(&ctx);
        let band = font.line_height(&ctx, title);
        (font, band)
    };

    let total_height = height + band + BAND_PADDING;
    let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, total_height)
        .map_err(|e| export_failed(destination, &e))?;
    {
        let ctx =
            cairo::Context::new(&surface).map_err(|e| export_failed(destination, &e))?;

        // White base so the caption band below the scene stays clean.
        ctx.set_source_rgb(1.0, 1.0, 1.0);
        ctx.paint().map_err(|e| export_failed(destination, &e))?;

        // The scene is clipped to the canvas area so oversized shapes cannot
        // bleed into the caption band.
        ctx.save().ok();
        ctx.rectangle(0.0, 0.0, width as f64, height as f64);
        ctx.clip();
        render_scene(&ctx, background, width, height, registry.paint_ops());
        ctx.restore().ok();

        // Caption: black, left-aligned, one pixel below the scene.
        ctx.set_source_rgb(0.0, 0.0, 0.0);
        ctx.move_to(0.0, (height + 1) as f64);
        let layout = font.layout(&ctx, title);
        pangocairo::functions::show_layout(&ctx, &layout);
    }
    surface.flush();

    let mut file =
        fs::File::create(destination).map_err(|e| export_failed(destination, &e))?;
    surface
        .write_to_png(&mut file)
        .map_err(|e| export_failed(destination, &e))?;

    log::info!(
        "canvas exported to {} ({}x{})",
        destination.display(),
        width,
        total_height
    );
    Ok(())
}

fn export_failed(destination: &Path, err: &dyn std::fmt::Display) -> CanvasError {
    CanvasError::ExportFailed(format!("{}: {err}", destination.display()))
}
