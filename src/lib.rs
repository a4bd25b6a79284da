//! shapepad: a small teaching toolkit for drawing simple shapes.
//!
//! The crate is built around a shared [`Canvas`] surface. Shape objects
//! ([`shapes::Circle`], [`shapes::Rect`], [`shapes::Triangle`],
//! [`shapes::Arc`]) hold a [`CanvasHandle`] and register their own paint
//! operations; the canvas replays the scene in insertion order over a
//! background fill and presents complete frames through a pluggable backend.
//! Snapshots of the scene can be exported as captioned PNG files.
//!
//! ```no_run
//! use shapepad::{Canvas, CanvasOptions, shapes::Circle};
//!
//! let canvas = Canvas::shared(CanvasOptions::default());
//! canvas.set_visible(true);
//!
//! let mut sun = Circle::new(&canvas);
//! sun.change_color("yellow");
//! sun.make_visible();
//! sun.move_right();
//! ```

pub mod backend;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod shapes;

pub use canvas::{Canvas, CanvasError, CanvasHandle, CanvasOptions, ShapeId};
pub use config::Config;
pub use draw::{Color, Frame, PaintOp};
