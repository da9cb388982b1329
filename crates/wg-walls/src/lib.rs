//! `wg-walls` — the authoritative set of walls between adjacent cells.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`wall`]    | `WallKind`, `Wall`, `BoundaryKey`, `BoundaryState`, `Side`  |
//! | [`store`]   | `WallStore`, `ToggleOutcome`                                |
//! | [`error`]   | `WallError`, `WallResult<T>`                                |
//!
//! # Toggle cycle
//!
//! Each boundary runs a four-state automaton keyed on the side the toggle
//! comes from:
//!
//! ```text
//! Closed ──(either side X)──▶ OneWay X→Y
//! OneWay S→T ──(from T)──▶ OneWay T→S      reverse, same id
//! OneWay S→T ──(from S)──▶ Open            same id
//! Open ──(either side)──▶ Closed           wall deleted
//! ```
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Keys the wall index with `rustc_hash::FxHashMap`.          |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.         |

pub mod error;
pub mod store;
pub mod wall;


pub use error::{WallError, WallResult};
pub use store::{ToggleOutcome, WallStore};
pub use wall::{BoundaryKey, BoundaryState, Side, Wall, WallKind};
