//! An arc that can be manipulated and that draws itself on a canvas.

use super::MOVE_STEP;
use crate::canvas::{CanvasHandle, ShapeId};
use crate::draw::{Color, PaintOp};
use std::fmt;

/// A movable, resizable pie-slice arc.
///
/// Angles are in degrees with 0 at three o'clock, increasing
/// counterclockwise on screen. The sweep (`extent`) is always normalized to
/// the range 0..360.
pub struct Arc {
    canvas: CanvasHandle,
    id: ShapeId,
    diameter: i32,
    x: i32,
    y: i32,
    start_angle: i32,
    extent: i32,
    color: Color,
    visible: bool,
}

impl Arc {
    /// Creates a new arc at the default position with the default color.
    pub fn new(canvas: &CanvasHandle) -> Self {
        Self {
            canvas: canvas.clone(),
            id: ShapeId::fresh(),
            diameter: 68,
            x: 130,
            y: 75,
            start_angle: 30,
            extent: 120,
            color: Color::parse("magenta"),
            visible: false,
        }
    }

    /// Creates an arc at a given position with explicit shape and color.
    ///
    /// The sweep runs counterclockwise from `start_angle` to `end_angle`
    /// (normalized to less than a full turn). When `visible` is true the arc
    /// is placed on the canvas immediately.
    #[allow(clippy::too_many_arguments)]
    pub fn with_geometry(
        canvas: &CanvasHandle,
        x: i32,
        y: i32,
        diameter: i32,
        start_angle: i32,
        end_angle: i32,
        color: &str,
        visible: bool,
    ) -> Self {
        let mut arc = Self {
            canvas: canvas.clone(),
            id: ShapeId::fresh(),
            diameter,
            x,
            y,
            start_angle,
            extent: normalize_extent(end_angle - start_angle),
            color: Color::parse(color),
            visible: false,
        };
        if visible {
            arc.make_visible();
        }
        arc
    }

    /// Makes this arc visible. If it was already visible, does nothing.
    pub fn make_visible(&mut self) {
        if !self.visible {
            self.visible = true;
            self.draw();
        }
    }

    /// Makes this arc invisible. If it was already invisible, does nothing.
    pub fn make_invisible(&mut self) {
        if self.visible {
            self.undraw();
            self.visible = false;
        }
    }

    /// Whether the arc is currently shown on the canvas.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Moves the arc a few pixels to the right.
    pub fn move_right(&mut self) {
        self.move_horizontal(MOVE_STEP);
    }

    /// Moves the arc a few pixels to the left.
    pub fn move_left(&mut self) {
        self.move_horizontal(-MOVE_STEP);
    }

    /// Moves the arc a few pixels up.
    pub fn move_up(&mut self) {
        self.move_vertical(-MOVE_STEP);
    }

    /// Moves the arc a few pixels down.
    pub fn move_down(&mut self) {
        self.move_vertical(MOVE_STEP);
    }

    /// Moves the arc horizontally by `distance` pixels, positive right.
    pub fn move_horizontal(&mut self, distance: i32) {
        self.undraw();
        self.x += distance;
        self.draw();
    }

    /// Moves the arc vertically by `distance` pixels, positive down.
    pub fn move_vertical(&mut self, distance: i32) {
        self.undraw();
        self.y += distance;
        self.draw();
    }

    /// Moves the arc horizontally to a given X location.
    pub fn set_x(&mut self, x: i32) {
        self.undraw();
        self.x = x;
        self.draw();
    }

    /// Moves the arc vertically to a given Y location.
    pub fn set_y(&mut self, y: i32) {
        self.undraw();
        self.y = y;
        self.draw();
    }

    /// Moves the arc to a given (x, y) coordinate.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.undraw();
        self.x = x;
        self.y = y;
        self.draw();
    }

    /// Current X location of the arc.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Current Y location of the arc.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Opens the mouth of the arc a bit, keeping it centered on its start.
    pub fn open_arc(&mut self) {
        self.undraw();
        self.start_angle = (self.start_angle + 10).min(180);
        self.extent = 360 - 2 * self.start_angle;
        self.draw();
    }

    /// Closes the mouth of the arc a bit, keeping it centered on its start.
    pub fn close_arc(&mut self) {
        self.undraw();
        self.start_angle = (self.start_angle - 10).max(0);
        self.extent = 360 - 2 * self.start_angle;
        self.draw();
    }

    /// Changes the angle the sweep starts at.
    pub fn change_arc_beginning(&mut self, angle: i32) {
        self.undraw();
        self.start_angle = angle;
        self.draw();
    }

    /// Changes the angle the sweep ends at.
    pub fn change_arc_end(&mut self, angle: i32) {
        self.undraw();
        self.extent = normalize_extent(angle - self.start_angle);
        self.draw();
    }

    /// Angle (in degrees) the sweep starts at.
    pub fn arc_beginning(&self) -> i32 {
        self.start_angle
    }

    /// Angle (in degrees) the sweep ends at.
    pub fn arc_end(&self) -> i32 {
        self.start_angle + self.extent
    }

    /// Degrees the arc traces counterclockwise.
    pub fn arc_length(&self) -> i32 {
        self.extent
    }

    /// Changes the diameter (in pixels). Size must be >= 0.
    pub fn change_size(&mut self, new_diameter: i32) {
        self.undraw();
        self.diameter = new_diameter;
        self.draw();
    }

    /// Current diameter of the arc.
    pub fn diameter(&self) -> i32 {
        self.diameter
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
        PaintOp::Arc {
            x: self.x,
            y: self.y,
            diameter: self.diameter,
            start_angle: self.start_angle,
            extent: self.extent,
            color: self.color,
        }
    }

    fn draw(&self) {
        if self.visible
            && let Err(err) = self.canvas.add(self.id, self.paint_op())
        {
            log::warn!("arc could not be drawn: {err}");
        }
    }

    fn undraw(&self) {
        if self.visible
            && let Err(err) = self.canvas.remove(self.id)
        {
            log::warn!("arc could not be erased: {err}");
        }
    }
}

/// Folds a sweep into 0..360 degrees.
fn normalize_extent(extent: i32) -> i32 {
    let folded = extent % 360;
    if folded < 0 { folded + 360 } else { folded }
}

impl Drop for Arc {
    fn drop(&mut self) {
        self.undraw();
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visibility = if self.visible { "Visible" } else { "Invisible" };
        write!(
            f,
            "{visibility} Arc of diameter {} at ({}, {}) starting at {} degrees, \
             {} degrees wide, with color #{:06x}",
            self.diameter,
            self.x,
            self.y,
            self.start_angle,
            self.extent,
            self.color.to_xrgb()
        )
    }
}
