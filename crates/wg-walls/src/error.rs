//! Wall-store error type.

use thiserror::Error;

use wg_core::Cell;

/// Errors produced by `wg-walls`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WallError {
    #[error("cells {0} and {1} do not share an edge")]
    NotAdjacent(Cell, Cell),
}

pub type WallResult<T> = Result<T, WallError>;
