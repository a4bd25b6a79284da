//! Double-buffered in-memory presentation surface.

use super::Presenter;
use crate::draw::{Color, Frame};

/// Software presentation backend.
///
/// The canvas draws each frame off-screen and this presenter swaps it in
/// whole, so an observer reading [`MemoryPresenter::front`] sees either the
/// previous complete frame or the new complete frame, never a mixture. A
/// real window backend would blit `front` to the screen here; keeping it in
/// memory makes the presentation path fully testable without a display.
#[derive(Debug)]
pub struct MemoryPresenter {
    width: i32,
    height: i32,
    visible: bool,
    shown_once: bool,
    title: String,
    front: Option<Frame>,
}

impl MemoryPresenter {
    /// Creates a hidden presenter for a surface of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            visible: false,
            shown_once: false,
            title: String::new(),
            front: None,
        }
    }

    /// The title most recently pushed by the canvas.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Presenter for MemoryPresenter {
    fn set_visible(&mut self, visible: bool, background: Color) {
        if visible && !self.shown_once {
            // First show: allocate the buffer and fill it with the
            // background, so the surface never appears with garbage content.
            self.shown_once = true;
            self.front = Some(Frame::solid(self.width, self.height, background));
            log::debug!(
                "presentation surface shown ({}x{})",
                self.width,
                self.height
            );
        }
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn accepts_frames(&self) -> bool {
        self.shown_once
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn present(&mut self, frame: Frame) {
        self.front = Some(frame);
    }

    fn front(&self) -> Option<&Frame> {
        self.front.as_ref()
    }
}
