//! Presentation backends for the canvas.
//!
//! The canvas core renders complete [`Frame`]s and hands them to a
//! [`Presenter`]; everything display-specific lives behind this trait. Two
//! backends ship with the crate: a double-buffered in-memory presenter (the
//! seam where a real windowing backend would plug in) and a headless null
//! presenter that keeps registry, redraw and export semantics identical
//! without any presentation side effects.

pub mod headless;
pub mod memory;

pub use headless::HeadlessPresenter;
pub use memory::MemoryPresenter;

use crate::draw::{Color, Frame};

/// A presentation target the canvas pushes finished frames to.
///
/// Lifecycle: presenters start hidden; the first `set_visible(true)` performs
/// one-time buffer allocation and an initial background fill, after which
/// visibility is a pure toggle. `present` always receives a complete frame,
/// never one that is still being drawn.
pub trait Presenter: Send {
    /// Shows or hides the presentation surface.
    ///
    /// The background color is used for the initial fill on the first show.
    fn set_visible(&mut self, visible: bool, background: Color);

    /// Whether the surface is currently shown.
    fn is_visible(&self) -> bool;

    /// Whether this presenter can receive frames at all right now.
    ///
    /// Headless presenters never accept frames; windowed ones accept them
    /// once the first show has allocated their buffers.
    fn accepts_frames(&self) -> bool;

    /// Updates the displayed title.
    fn set_title(&mut self, title: &str);

    /// Atomically replaces the visible frame with a finished one.
    fn present(&mut self, frame: Frame);

    /// The frame a viewer currently sees, if any.
    fn front(&self) -> Option<&Frame>;
}

/// Picks the backend for the requested mode.
pub fn create(headless: bool, width: i32, height: i32) -> Box<dyn Presenter> {
    if headless {
        Box::new(HeadlessPresenter::new())
    } else {
        Box::new(MemoryPresenter::new(width, height))
    }
}
