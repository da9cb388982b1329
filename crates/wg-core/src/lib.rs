//! `wg-core` — foundational types for the `wallgrid` workspace.
//!
//! This crate is a dependency of every other `wg-*` crate.  It has no
//! `wg-*` dependencies and a single required external one (`thiserror`),
//! plus optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`cell`]    | `Cell`, `CanvasPoint`, `GridDims` (column-major indexing) |
//! | [`ids`]     | `WallId`                                                  |
//! | [`step`]    | `Step` counter                                            |
//! | [`config`]  | `BoardConfig`, `StaleWallPolicy`                          |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{CanvasPoint, Cell, GridDims};
pub use config::{check_canvas, BoardConfig, StaleWallPolicy};
pub use error::{CoreError, CoreResult};
pub use ids::WallId;
pub use step::Step;
