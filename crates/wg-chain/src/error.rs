//! Chain error type.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("{what} length {got} does not match matrix dimension {expected}")]
    DimensionMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type ChainResult<T> = Result<T, ChainError>;
