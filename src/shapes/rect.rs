//! A rectangle that can be manipulated and that draws itself on a canvas.

use super::MOVE_STEP;
use crate::canvas::{CanvasHandle, ShapeId};
use crate::draw::{Color, PaintOp};
use std::fmt;

/// A movable, resizable, recolorable rectangle.
pub struct Rect {
    canvas: CanvasHandle,
    id: ShapeId,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color,
    visible: bool,
}

impl Rect {
    /// Creates a new rectangle at the default position with the default color.
    pub fn new(canvas: &CanvasHandle) -> Self {
        Self {
            canvas: canvas.clone(),
            id: ShapeId::fresh(),
            x: 310,
            y: 120,
            width: 60,
            height: 60,
            color: Color::parse("red"),
            visible: false,
        }
    }

    /// Makes this rectangle visible. If it was already visible, does nothing.
    pub fn make_visible(&mut self) {
        if !self.visible {
            self.visible = true;
            self.draw();
        }
    }

    /// Makes this rectangle invisible. If it was already invisible, does
    /// nothing.
    pub fn make_invisible(&mut self) {
        if self.visible {
            self.undraw();
            self.visible = false;
        }
    }

    /// Whether the rectangle is currently shown on the canvas.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Moves the rectangle a few pixels to the right.
    pub fn move_right(&mut self) {
        self.move_horizontal(MOVE_STEP);
    }

    /// Moves the rectangle a few pixels to the left.
    pub fn move_left(&mut self) {
        self.move_horizontal(-MOVE_STEP);
    }

    /// Moves the rectangle a few pixels up.
    pub fn move_up(&mut self) {
        self.move_vertical(-MOVE_STEP);
    }

    /// Moves the rectangle a few pixels down.
    pub fn move_down(&mut self) {
        self.move_vertical(MOVE_STEP);
    }

    /// Moves the rectangle horizontally by `distance` pixels, positive right.
    pub fn move_horizontal(&mut self, distance: i32) {
        self.undraw();
        self.x += distance;
        self.draw();
    }

    /// Moves the rectangle vertically by `distance` pixels, positive down.
    pub fn move_vertical(&mut self, distance: i32) {
        self.undraw();
        self.y += distance;
        self.draw();
    }

    /// Makes the rectangle a square of the given side (in pixels, >= 0).
    pub fn change_size(&mut self, new_size: i32) {
        self.undraw();
        self.width = new_size;
        self.height = new_size;
        self.draw();
    }

    /// Changes to a non-square size; both sides must be >= 0.
    pub fn change_dimensions(&mut self, new_height: i32, new_width: i32) {
        self.undraw();
        self.width = new_width;
        self.height = new_height;
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
        PaintOp::Rect {
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
            log::warn!("rectangle could not be drawn: {err}");
        }
    }

    fn undraw(&self) {
        if self.visible
            && let Err(err) = self.canvas.remove(self.id)
        {
            log::warn!("rectangle could not be erased: {err}");
        }
    }
}

impl Drop for Rect {
    fn drop(&mut self) {
        self.undraw();
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visibility = if self.visible { "Visible" } else { "Invisible" };
        write!(
            f,
            "{visibility} Rectangle with width {} height {} at ({}, {}) with color #{:06x}",
            self.width,
            self.height,
            self.x,
            self.y,
            self.color.to_xrgb()
        )
    }
}
