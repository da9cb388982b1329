//! `wg-grid` — grid state and cell addressing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`grid`]    | `Grid` — column-major per-cell mass, flatten/unflatten        |
//! | [`locator`] | `Locator` — canvas point → cell, nearest cell boundary        |
//! | [`error`]   | `GridError`, `GridResult<T>`                                  |

pub mod error;
pub mod grid;
pub mod locator;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use locator::Locator;
