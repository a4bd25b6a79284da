//! Rendering primitives for the canvas (Cairo-based).
//!
//! This module defines the drawing types the canvas core is built on:
//! - [`Color`]: RGBA color representation with the canvas palette
//! - [`PaintOp`]: per-shape paint operations captured at registration time
//! - [`Frame`]: one complete rendered raster
//! - [`CaptionFont`]: caption typeface resolution for exports
//! - Rendering functions that replay a scene in registration order

pub mod color;
pub mod font;
pub mod frame;
pub mod paint;
pub mod render;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::CaptionFont;
pub use frame::{Frame, FrameError};
pub use paint::PaintOp;
pub use render::{render_frame, render_scene};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, BROWN, CYAN, GREEN, MAGENTA, RED, WHITE, YELLOW};
