use thiserror::Error;

use wg_chain::ChainError;
use wg_core::{Cell, CoreError};
use wg_grid::GridError;
use wg_walls::WallError;

#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    #[error("board configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("wall {from} -> {to} lies outside the grid")]
    WallOutOfBounds { from: Cell, to: Cell },

    #[error(transparent)]
    Wall(#[from] WallError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Chain(#[from] ChainError),
}

pub type BoardResult<T> = Result<T, BoardError>;
