//! Canvas surface: the shared façade every shape draws through.
//!
//! The canvas owns the shape registry, the render pipeline, a pausable
//! auto-redraw policy and the captioned PNG export. All registry mutation and
//! traversal happens inside one exclusive critical section, so a redraw
//! always sees a consistent, non-interleaved snapshot of the scene.

pub mod error;
pub mod export;
pub mod registry;

pub use error::CanvasError;
pub use registry::{Registry, ShapeId};

use crate::backend::{self, Presenter};
use crate::draw::{self, Color, Frame, PaintOp};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Shared handle to a canvas; cloned into every shape that draws on it.
pub type CanvasHandle = Arc<Canvas>;

/// Construction parameters for a [`Canvas`].
#[derive(Debug, Clone)]
pub struct CanvasOptions {
    /// Title shown by the presentation backend and used for export captions.
    pub title: String,
    /// Client-area width in pixels, fixed for the canvas lifetime.
    pub width: i32,
    /// Client-area height in pixels, fixed for the canvas lifetime.
    pub height: i32,
    /// Initial background color.
    pub background: Color,
    /// Disables the presentation path while keeping all other semantics.
    pub headless: bool,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            title: "Picture Demo".to_string(),
            width: 800,
            height: 600,
            background: draw::color::WHITE,
            headless: !display_available(),
        }
    }
}

/// Whether a display server looks reachable from this process.
pub fn display_available() -> bool {
    std::env::var_os("WAYLAND_DISPLAY").is_some() || std::env::var_os("DISPLAY").is_some()
}

/// State guarded by the canvas's single exclusive lock.
struct Inner {
    registry: Registry,
    background: Color,
    title: String,
    presenter: Box<dyn Presenter>,
}

/// The drawing surface shared by all shapes.
///
/// A canvas is an explicitly constructed context object: the application
/// root builds one and passes a [`CanvasHandle`] to every shape, which keeps
/// "one shared surface" semantics without ambient global state and lets
/// tests construct isolated instances. The canvas is `Send + Sync`; shape
/// mutators may call in from any thread.
pub struct Canvas {
    width: i32,
    height: i32,
    paused: AtomicBool,
    inner: Mutex<Inner>,
}

impl Canvas {
    /// Creates a canvas with the given options.
    pub fn new(options: CanvasOptions) -> Self {
        log::debug!(
            "creating {}x{} canvas \"{}\" (headless: {})",
            options.width,
            options.height,
            options.title,
            options.headless
        );

        let mut presenter = backend::create(options.headless, options.width, options.height);
        presenter.set_title(&options.title);

        Self {
            width: options.width,
            height: options.height,
            paused: AtomicBool::new(false),
            inner: Mutex::new(Inner {
                registry: Registry::new(),
                background: options.background,
                title: options.title,
                presenter,
            }),
        }
    }

    /// Creates a canvas and wraps it in a shareable handle.
    pub fn shared(options: CanvasOptions) -> CanvasHandle {
        Arc::new(Self::new(options))
    }

    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Registers a paint operation under a shape identity.
    ///
    /// The new entry paints on top of everything registered before it. When
    /// auto-redraw is not paused the updated scene is presented immediately.
    ///
    /// # Errors
    ///
    /// [`CanvasError::DuplicateEntry`] if the identity is already registered;
    /// the registry is left unchanged.
    pub fn add(&self, id: ShapeId, op: PaintOp) -> Result<(), CanvasError> {
        let mut inner = self.inner();
        inner.registry.add(id, op)?;
        if !self.is_paused() {
            self.redraw_locked(&mut inner);
        }
        Ok(())
    }

    /// Removes a shape's entry, leaving the rest of the paint order intact.
    ///
    /// # Errors
    ///
    /// [`CanvasError::NotFound`] if the identity is not registered.
    pub fn remove(&self, id: ShapeId) -> Result<(), CanvasError> {
        let mut inner = self.inner();
        inner.registry.remove(id)?;
        if !self.is_paused() {
            self.redraw_locked(&mut inner);
        }
        Ok(())
    }

    /// Pauses or resumes automatic redraws on `add`/`remove`.
    ///
    /// While paused the registry still mutates but the presented frame goes
    /// stale. Unpausing does not redraw by itself; callers that want the
    /// frame refreshed must call [`Canvas::redraw`] afterwards.
    pub fn pause(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }

    /// Whether automatic redraws are currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    /// Renders the current scene and presents it.
    ///
    /// No-op while the presentation backend accepts no frames (headless mode,
    /// or a windowed canvas that has not been shown yet).
    pub fn redraw(&self) {
        let mut inner = self.inner();
        self.redraw_locked(&mut inner);
    }

    /// Removes every shape and presents a blank background frame.
    ///
    /// The blank frame is presented even while paused, matching the
    /// long-standing behavior of the original surface.
    pub fn erase(&self) {
        let mut inner = self.inner();
        inner.registry.clear();
        if inner.presenter.accepts_frames() {
            let blank = Frame::solid(self.width, self.height, inner.background);
            inner.presenter.present(blank);
        }
    }

    /// Changes the background color; takes effect on the next render/export.
    pub fn set_background(&self, background: Color) {
        self.inner().background = background;
    }

    /// Changes the canvas title used by the presenter and export captions.
    pub fn set_title(&self, title: &str) {
        let mut inner = self.inner();
        inner.title = title.to_string();
        inner.presenter.set_title(title);
    }

    /// Shows or hides the presentation surface.
    ///
    /// The first show performs the one-time buffer allocation and initial
    /// background fill; later calls are pure visibility toggles.
    pub fn set_visible(&self, visible: bool) {
        let mut inner = self.inner();
        let background = inner.background;
        inner.presenter.set_visible(visible, background);
    }

    /// Number of shapes currently registered.
    pub fn shape_count(&self) -> usize {
        self.inner().registry.len()
    }

    /// Exports the current scene plus a caption band as a PNG file.
    ///
    /// The snapshot is taken under the same lock as every redraw, so the
    /// exported picture can never show a half-applied mutation.
    ///
    /// # Errors
    ///
    /// [`CanvasError::ExportFailed`] when rasterizing or writing fails; the
    /// destination may be left partially written.
    pub fn save_to_file(&self, destination: &Path) -> Result<(), CanvasError> {
        let inner = self.inner();
        export::export_frame(
            &inner.registry,
            inner.background,
            &inner.title,
            self.width,
            self.height,
            destination,
        )
    }

    /// Suspends the calling thread for `milliseconds`.
    ///
    /// Used by shape-driven animations to pace visible changes. An early
    /// wake-up is treated as the wait simply ending, never as an error.
    pub fn wait(&self, milliseconds: u64) {
        std::thread::sleep(Duration::from_millis(milliseconds));
    }

    /// Runs `f` with the frame a viewer currently sees (`None` in headless
    /// mode or before the first show).
    ///
    /// The frame is observed under the canvas lock, so it is always one
    /// complete presented picture.
    pub fn with_frame<R>(&self, f: impl FnOnce(Option<&Frame>) -> R) -> R {
        let inner = self.inner();
        f(inner.presenter.front())
    }

    fn redraw_locked(&self, inner: &mut Inner) {
        if !inner.presenter.accepts_frames() {
            return;
        }
        match draw::render_frame(
            self.width,
            self.height,
            inner.background,
            inner.registry.paint_ops(),
        ) {
            Ok(frame) => inner.presenter.present(frame),
            Err(err) => log::error!("canvas redraw failed: {err}"),
        }
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("paused", &self.is_paused())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    fn headless_canvas() -> Canvas {
        Canvas::new(CanvasOptions {
            title: "test".to_string(),
            width: 64,
            height: 48,
            background: WHITE,
            headless: true,
        })
    }

    fn red_square() -> PaintOp {
        PaintOp::Rect {
            x: 4,
            y: 4,
            width: 8,
            height: 8,
            color: RED,
        }
    }

    #[test]
    fn headless_canvas_mutates_state_without_presentation() {
        let canvas = headless_canvas();
        canvas.set_visible(true);

        let id = ShapeId::fresh();
        canvas.add(id, red_square()).unwrap();
        assert_eq!(canvas.shape_count(), 1);
        canvas.with_frame(|frame| assert!(frame.is_none()));

        canvas.remove(id).unwrap();
        assert_eq!(canvas.shape_count(), 0);
    }

    #[test]
    fn erase_clears_registry_even_while_paused() {
        let canvas = headless_canvas();
        canvas.pause(true);
        canvas.add(ShapeId::fresh(), red_square()).unwrap();
        canvas.add(ShapeId::fresh(), red_square()).unwrap();

        canvas.erase();
        assert_eq!(canvas.shape_count(), 0);
        assert!(canvas.is_paused());
    }

    #[test]
    fn wait_blocks_for_roughly_the_requested_time() {
        let canvas = headless_canvas();
        let start = std::time::Instant::now();
        canvas.wait(20);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn canvases_are_independent() {
        let first = headless_canvas();
        let second = headless_canvas();
        first.add(ShapeId::fresh(), red_square()).unwrap();
        assert_eq!(first.shape_count(), 1);
        assert_eq!(second.shape_count(), 0);
    }
}
