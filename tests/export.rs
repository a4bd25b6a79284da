//! Captioned PNG export behavior.

use shapepad::draw::color::{CYAN, RED, WHITE};
use shapepad::{Canvas, CanvasError, CanvasHandle, CanvasOptions, Color, PaintOp, ShapeId};
use std::fs;
use std::path::Path;

const WIDTH: i32 = 160;
const HEIGHT: i32 = 120;

fn canvas_with(background: Color) -> CanvasHandle {
    Canvas::shared(CanvasOptions {
        title: "Export Test".to_string(),
        width: WIDTH,
        height: HEIGHT,
        background,
        headless: true,
    })
}

fn load_png(path: &Path) -> cairo::ImageSurface {
    let mut file = fs::File::open(path).expect("exported file should open");
    cairo::ImageSurface::create_from_png(&mut file).expect("exported file should be a PNG")
}

fn surface_pixel(surface: &mut cairo::ImageSurface, x: i32, y: i32) -> u32 {
    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data().expect("surface data");
    let offset = y as usize * stride + x as usize * 4;
    let word = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    word & 0x00ff_ffff
}

#[test]
fn export_writes_a_decodable_png_with_a_caption_band() {
    let canvas = canvas_with(CYAN);
    canvas
        .add(
            ShapeId::fresh(),
            PaintOp::Rect {
                x: 10,
                y: 10,
                width: 30,
                height: 30,
                color: RED,
            },
        )
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("picture.png");
    canvas.save_to_file(&path).unwrap();

    let mut surface = load_png(&path);
    assert_eq!(surface.width(), WIDTH);
    // The caption band plus its padding sit below the scene.
    assert!(surface.height() > HEIGHT + 2);

    // Scene pixels: shape over background.
    assert_eq!(surface_pixel(&mut surface, 20, 20), RED.to_xrgb());
    assert_eq!(surface_pixel(&mut surface, 100, 100), CYAN.to_xrgb());

    // The band's right edge is past the caption text and stays white.
    let bottom = surface.height() - 2;
    assert_eq!(surface_pixel(&mut surface, WIDTH - 2, bottom), WHITE.to_xrgb());
}

#[test]
fn exported_scene_matches_the_registry_not_the_presenter() {
    // A headless canvas presents nothing, yet its export shows the scene.
    let canvas = canvas_with(WHITE);
    canvas.pause(true);
    canvas
        .add(
            ShapeId::fresh(),
            PaintOp::Circle {
                x: 40,
                y: 40,
                diameter: 40,
                color: RED,
            },
        )
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paused.png");
    canvas.save_to_file(&path).unwrap();

    let mut surface = load_png(&path);
    assert_eq!(surface_pixel(&mut surface, 60, 60), RED.to_xrgb());
}

#[test]
fn oversized_shapes_cannot_bleed_into_the_caption_band() {
    let canvas = canvas_with(WHITE);
    canvas
        .add(
            ShapeId::fresh(),
            PaintOp::Rect {
                x: 0,
                y: 0,
                width: WIDTH * 2,
                height: HEIGHT * 2,
                color: RED,
            },
        )
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clipped.png");
    canvas.save_to_file(&path).unwrap();

    let mut surface = load_png(&path);
    assert_eq!(surface_pixel(&mut surface, 5, 5), RED.to_xrgb());
    let bottom = surface.height() - 2;
    assert_eq!(surface_pixel(&mut surface, WIDTH - 2, bottom), WHITE.to_xrgb());
}

#[test]
fn unwritable_destination_reports_export_failed() {
    let canvas = canvas_with(WHITE);
    let dir = tempfile::tempdir().unwrap();

    // A directory cannot be created as a file.
    let result = canvas.save_to_file(dir.path());
    assert!(matches!(result, Err(CanvasError::ExportFailed(_))));
}
