//! A circle that can be manipulated and that draws itself on a canvas.

use super::MOVE_STEP;
use crate::canvas::{CanvasHandle, ShapeId};
use crate::draw::{Color, PaintOp};
use std::fmt;

/// A movable, resizable, recolorable circle.
pub struct Circle {
    canvas: CanvasHandle,
    id: ShapeId,
    diameter: i32,
    x: i32,
    y: i32,
    color: Color,
    visible: bool,
}

impl Circle {
    /// Creates a new circle at the default position with the default color.
    pub fn new(canvas: &CanvasHandle) -> Self {
        Self {
            canvas: canvas.clone(),
            id: ShapeId::fresh(),
            diameter: 68,
            x: 230,
            y: 90,
            color: Color::parse("blue"),
            visible: false,
        }
    }

    /// Makes this circle visible. If it was already visible, does nothing.
    pub fn make_visible(&mut self) {
        if !self.visible {
            self.visible = true;
            self.draw();
        }
    }

    /// Makes this circle invisible. If it was already invisible, does nothing.
    pub fn make_invisible(&mut self) {
        if self.visible {
            self.undraw();
            self.visible = false;
        }
    }

    /// Whether the circle is currently shown on the canvas.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Moves the circle a few pixels to the right.
    pub fn move_right(&mut self) {
        self.move_horizontal(MOVE_STEP);
    }

    /// Moves the circle a few pixels to the left.
    pub fn move_left(&mut self) {
        self.move_horizontal(-MOVE_STEP);
    }

    /// Moves the circle a few pixels up.
    pub fn move_up(&mut self) {
        self.move_vertical(-MOVE_STEP);
    }

    /// Moves the circle a few pixels down.
    pub fn move_down(&mut self) {
        self.move_vertical(MOVE_STEP);
    }

    /// Moves the circle horizontally by `distance` pixels, positive right.
    pub fn move_horizontal(&mut self, distance: i32) {
        self.undraw();
        self.x += distance;
        self.draw();
    }

    /// Moves the circle vertically by `distance` pixels, positive down.
    pub fn move_vertical(&mut self, distance: i32) {
        self.undraw();
        self.y += distance;
        self.draw();
    }

    /// Changes the diameter (in pixels). Size must be >= 0.
    pub fn change_size(&mut self, new_diameter: i32) {
        self.undraw();
        self.diameter = new_diameter;
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
        PaintOp::Circle {
            x: self.x,
            y: self.y,
            diameter: self.diameter,
            color: self.color,
        }
    }

    fn draw(&self) {
        if self.visible
            && let Err(err) = self.canvas.add(self.id, self.paint_op())
        {
            log::warn!("circle could not be drawn: {err}");
        }
    }

    fn undraw(&self) {
        if self.visible
            && let Err(err) = self.canvas.remove(self.id)
        {
            log::warn!("circle could not be erased: {err}");
        }
    }
}

impl Drop for Circle {
    fn drop(&mut self) {
        self.undraw();
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visibility = if self.visible { "Visible" } else { "Invisible" };
        write!(
            f,
            "{visibility} Circle of diameter {} at ({}, {}) with color #{:06x}",
            self.diameter,
            self.x,
            self.y,
            self.color.to_xrgb()
        )
    }
}
