//! Thin shape objects that draw themselves through a shared canvas.
//!
//! Each shape owns its geometry, color and visibility flag plus a handle to
//! the canvas it draws on. Mutators follow the snapshot discipline: a visible
//! shape removes its registry entry, updates its state, then registers a
//! fresh paint snapshot, which repaints the canvas unless redraws are paused.

pub mod arc;
pub mod circle;
pub mod rect;
pub mod triangle;

pub use arc::Arc;
pub use circle::Circle;
pub use rect::Rect;
pub use triangle::Triangle;

/// Default step for the directional move helpers, in pixels.
pub(crate) const MOVE_STEP: i32 = 20;
