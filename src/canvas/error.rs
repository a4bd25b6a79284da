//! Error taxonomy for canvas operations.

use thiserror::Error;

/// Errors surfaced by the canvas façade.
///
/// Duplicate and missing entries are programming-contract violations on the
/// caller's side; they are reported once and never retried. Export failures
/// wrap whatever went wrong while rasterizing or writing the image, with no
/// partial-file cleanup guarantee.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("shape is already on the canvas")]
    DuplicateEntry,

    #[error("shape is not on the canvas")]
    NotFound,

    #[error("failed to export canvas image: {0}")]
    ExportFailed(String),
}
