//! A triangle that can be manipulated and that draws itself on a canvas.

use super::MOVE_STEP;
use crate::canvas::{CanvasHandle, ShapeId};
use crate::draw::{Color, PaintOp};
use std::fmt;

/// A movable, resizable, recolorable isoceles triangle.
///
/// The anchor point (x, y) is the apex; the base sits `height` pixels below
/// it. A negative height points the apex downward.
pub struct Triangle {
    canvas: CanvasHandle,
    id: ShapeId,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color,
    visible: bool,
}

impl Triangle {
    /// Creates a new triangle at the default position with the default color.
    pub fn new(canvas: &CanvasHandle) -> Self {
        Self {
            canvas: canvas.clone(),
            id: ShapeId::fresh(),
            x: 210,
            y: 140,
            width: 70,
            height: 60,
            color: Color::parse("green"),
            visible: false,
        }
    }

    /// Makes this triangle visible. If it was already visible, does nothing.
    pub fn make_visible(&mut self) {
        if !self.visible {
            self.visible = true;
            self.draw();
        }
    }

    /// Makes this triangle invisible. If it was already invisible, does
    /// nothing.
    pub fn make_invisible(&mut self) {
        if self.visible {
            self.undraw();
            self.visible = false;
        }
    }

    /// Whether the triangle is currently shown on the canvas.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Moves the triangle a few pixels to the right.
    pub fn move_right(&mut self) {
        self.move_horizontal(MOVE_STEP);
    }

    /// Moves the triangle a few pixels to the left.
    pub fn move_left(&mut self) {
        self.move_horizontal(-MOVE_STEP);
    }

    /// Moves the triangle a few pixels up.
    pub fn move_up(&mut self) {
        self.move_vertical(-MOVE_STEP);
    }

    /// Moves the triangle a few pixels down.
    pub fn move_down(&mut self) {
        self.move_vertical(MOVE_STEP);
    }

    /// Moves the triangle horizontally by `distance` pixels, positive right.
    pub fn move_horizontal(&mut self, distance: i32) {
        self.undraw();
        self.x += distance;
        self.draw();
    }

    /// Moves the triangle vertically by `distance` pixels, positive down.
    pub fn move_vertical(&mut self, distance: i32) {
        self.undraw();
        self.y += distance;
        self.draw();
    }

    /// Changes the size; width must be > 0, negative height points down.
    pub fn change_size(&mut self, new_height: i32, new_width: i32) {
        self.undraw();
        self.height = new_height;
        self.width = new_width;
        self.draw();
    }

    /// Changes the color.
    ///
    /// Valid colors are "red", "yellow", "blue", "green", "magenta", "cyan",
    /// "brown", "white", and "black", or `#rrggbb` hex strings; anything else
    /// paints black.
    pub fn change_color(&mut self, new_color: &str) {
        self.undraw();
        self.color = Color::parse(new_color);
        self.draw();
    }

    fn paint_op(&self) -> PaintOp {
        PaintOp::Triangle {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            color: self.color,
        }
    }

    fn draw(&self) {
        if self.visible
            && let Err(err) = self.canvas.add(self.id, self.paint_op())
        {
            log::warn!("triangle could not be drawn: {err}");
        }
    }

    fn undraw(&self) {
        if self.visible
            && let Err(err) = self.canvas.remove(self.id)
        {
            log::warn!("triangle could not be erased: {err}");
        }
    }
}

impl Drop for Triangle {
    fn drop(&mut self) {
        self.undraw();
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visibility = if self.visible { "Visible" } else { "Invisible" };
        write!(
            f,
            "{visibility} Triangle with width {} height {} at ({}, {}) with color #{:06x}",
            self.width,
            self.height,
            self.x,
            self.y,
            self.color.to_xrgb()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, CanvasOptions};
    use crate::draw::color::WHITE;

    fn canvas() -> CanvasHandle {
        Canvas::shared(CanvasOptions {
            title: "test".to_string(),
            width: 400,
            height: 300,
            background: WHITE,
            headless: true,
        })
    }

    #[test]
    fn moves_accumulate_in_both_axes() {
        let canvas = canvas();
        let mut triangle = Triangle::new(&canvas);
        triangle.move_right();
        triangle.move_right();
        triangle.move_up();
        assert!(format!("{triangle}").contains("at (250, 120)"));
    }

    #[test]
    fn toggling_visibility_registers_and_unregisters() {
        let canvas = canvas();
        let mut triangle = Triangle::new(&canvas);
        triangle.make_visible();
        assert_eq!(canvas.shape_count(), 1);
        triangle.make_invisible();
        assert_eq!(canvas.shape_count(), 0);
    }
}
