//! End-to-end canvas behavior through the in-memory presentation backend.

use shapepad::draw::color::{BLUE, GREEN, RED, WHITE};
use shapepad::{Canvas, CanvasError, CanvasHandle, CanvasOptions, Color, PaintOp, ShapeId};
use std::thread;

const WIDTH: i32 = 120;
const HEIGHT: i32 = 90;

fn presenting_canvas() -> CanvasHandle {
    let canvas = Canvas::shared(CanvasOptions {
        title: "canvas test".to_string(),
        width: WIDTH,
        height: HEIGHT,
        background: WHITE,
        headless: false,
    });
    canvas.set_visible(true);
    canvas
}

fn pixel(canvas: &CanvasHandle, x: i32, y: i32) -> Color {
    canvas.with_frame(|frame| {
        frame
            .and_then(|frame| frame.pixel(x, y))
            .unwrap_or_else(|| panic!("no pixel at ({x}, {y})"))
    })
}

fn red_square() -> PaintOp {
    // Covers x 20..60, y 20..60.
    PaintOp::Rect {
        x: 20,
        y: 20,
        width: 40,
        height: 40,
        color: RED,
    }
}

fn blue_circle() -> PaintOp {
    // Covers the square's center but not its corner.
    PaintOp::Circle {
        x: 25,
        y: 25,
        diameter: 30,
        color: BLUE,
    }
}

#[test]
fn first_show_presents_the_background() {
    let canvas = presenting_canvas();
    assert_eq!(pixel(&canvas, 0, 0), WHITE);
    assert_eq!(pixel(&canvas, WIDTH - 1, HEIGHT - 1), WHITE);
}

#[test]
fn later_shapes_paint_over_earlier_ones() {
    let canvas = presenting_canvas();
    canvas.add(ShapeId::fresh(), red_square()).unwrap();
    canvas.add(ShapeId::fresh(), blue_circle()).unwrap();

    // Circle center wins where the two overlap.
    assert_eq!(pixel(&canvas, 40, 40), BLUE);
    // The square still shows where the circle does not reach.
    assert_eq!(pixel(&canvas, 22, 58), RED);
    // Background is untouched elsewhere.
    assert_eq!(pixel(&canvas, 100, 80), WHITE);
}

#[test]
fn removing_and_re_adding_moves_a_shape_to_the_top() {
    let canvas = presenting_canvas();
    let square = ShapeId::fresh();
    canvas.add(square, red_square()).unwrap();
    canvas.add(ShapeId::fresh(), blue_circle()).unwrap();
    assert_eq!(pixel(&canvas, 40, 40), BLUE);

    // Freed identities may be reused; the re-added square now paints last.
    canvas.remove(square).unwrap();
    canvas.add(square, red_square()).unwrap();
    assert_eq!(pixel(&canvas, 40, 40), RED);
}

#[test]
fn duplicate_add_changes_nothing() {
    let canvas = presenting_canvas();
    let id = ShapeId::fresh();
    canvas.add(id, red_square()).unwrap();

    let result = canvas.add(
        id,
        PaintOp::Rect {
            x: 0,
            y: 0,
            width: WIDTH,
            height: HEIGHT,
            color: GREEN,
        },
    );
    assert!(matches!(result, Err(CanvasError::DuplicateEntry)));
    assert_eq!(canvas.shape_count(), 1);
    assert_eq!(pixel(&canvas, 40, 40), RED);
    assert_eq!(pixel(&canvas, 0, 0), WHITE);
}

#[test]
fn removing_an_unknown_shape_is_an_error() {
    let canvas = presenting_canvas();
    let result = canvas.remove(ShapeId::fresh());
    assert!(matches!(result, Err(CanvasError::NotFound)));
}

#[test]
fn paused_mutations_keep_the_presented_frame_stale() {
    let canvas = presenting_canvas();
    canvas.pause(true);
    canvas.add(ShapeId::fresh(), red_square()).unwrap();
    canvas.add(ShapeId::fresh(), blue_circle()).unwrap();

    // Both shapes are registered but nothing has been presented.
    assert_eq!(canvas.shape_count(), 2);
    assert_eq!(pixel(&canvas, 40, 40), WHITE);
}

#[test]
fn resuming_alone_does_not_repaint() {
    let canvas = presenting_canvas();
    canvas.pause(true);
    canvas.add(ShapeId::fresh(), red_square()).unwrap();
    canvas.pause(false);

    // The frame stays stale until something triggers a redraw.
    assert_eq!(pixel(&canvas, 40, 40), WHITE);

    canvas.redraw();
    assert_eq!(pixel(&canvas, 40, 40), RED);
}

#[test]
fn erase_presents_a_blank_frame_even_while_paused() {
    let canvas = presenting_canvas();
    canvas.add(ShapeId::fresh(), red_square()).unwrap();
    canvas.pause(true);

    canvas.erase();
    assert_eq!(canvas.shape_count(), 0);
    assert_eq!(pixel(&canvas, 40, 40), WHITE);
}

#[test]
fn background_change_shows_on_the_next_redraw() {
    let canvas = presenting_canvas();
    canvas.set_background(GREEN);
    assert_eq!(pixel(&canvas, 0, 0), WHITE);

    canvas.redraw();
    assert_eq!(pixel(&canvas, 0, 0), GREEN);
}

#[test]
fn concurrent_adds_all_land() {
    let canvas = presenting_canvas();
    let mut handles = Vec::new();
    for i in 0..8 {
        let canvas = canvas.clone();
        handles.push(thread::spawn(move || {
            for j in 0..10 {
                let op = PaintOp::Rect {
                    x: i * 10,
                    y: j * 5,
                    width: 5,
                    height: 3,
                    color: RED,
                };
                canvas.add(ShapeId::fresh(), op).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(canvas.shape_count(), 80);
}
