//! `wg-chain` — the Markov chain implied by a wall topology.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`matrix`]    | `TransitionMatrix` — dense, row-major, row-stochastic     |
//! | [`generator`] | `transition_matrix`, `classify`, `CellRole`               |
//! | [`stepper`]   | `step`, `step_into` — `state' = state · M`                |
//! | [`error`]     | `ChainError`, `ChainResult<T>`                            |
//!
//! # Transition rule
//!
//! From each cell, mass splits uniformly over the walls it can leave
//! through: any wall whose `from` is the cell, plus `Open` walls whose `to`
//! is the cell.  A cell with no such wall keeps all of its mass
//! (absorbing).  Walls with an endpoint outside the grid are ignored.
//!
//! Rows and columns use the column-major cell index of
//! [`GridDims::index_of`](wg_core::GridDims::index_of).

pub mod error;
pub mod generator;
pub mod matrix;
pub mod stepper;


pub use error::{ChainError, ChainResult};
pub use generator::{classify, exits, transition_matrix, CellRole};
pub use matrix::TransitionMatrix;
pub use stepper::{step, step_into};
