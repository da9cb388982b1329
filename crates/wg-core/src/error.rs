//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced by `wg-core` validation.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("degenerate grid {width}x{height}: both dimensions must be at least 1")]
    DegenerateGrid { width: u32, height: u32 },

    #[error("grid {width}x{height} exceeds the {max_cells}-cell limit")]
    GridTooLarge { width: u32, height: u32, max_cells: usize },

    #[error("invalid canvas {width}x{height}: extents must be finite and positive")]
    InvalidCanvas { width: f64, height: f64 },
}

/// Shorthand result type for `wg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
