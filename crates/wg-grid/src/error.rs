use thiserror::Error;

use wg_core::{Cell, CoreError};

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("state vector length {got} does not match cell count {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("invalid mass {value} for cell {cell}: must be finite and non-negative")]
    InvalidMass { cell: Cell, value: f64 },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GridResult<T> = Result<T, GridError>;
