//! Null presentation backend for display-less runs.

use super::Presenter;
use crate::draw::{Color, Frame};

/// Presenter that never shows anything.
///
/// Every presentation operation is a no-op; the canvas still mutates its
/// registry and exports identically, which is what makes the core testable
/// without a display.
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    visible: bool,
}

impl HeadlessPresenter {
    /// Creates a headless presenter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for HeadlessPresenter {
    fn set_visible(&mut self, visible: bool, _background: Color) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn accepts_frames(&self) -> bool {
        false
    }

    fn set_title(&mut self, _title: &str) {}

    fn present(&mut self, _frame: Frame) {}

    fn front(&self) -> Option<&Frame> {
        None
    }
}
