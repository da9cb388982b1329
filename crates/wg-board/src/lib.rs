//! `wg-board` — the owned aggregate an input shell talks to.
//!
//! A [`Board`] holds one wall store, one grid, one locator and a step
//! counter.  There is no global state: any number of boards can coexist.
//!
//! # Shell contract
//!
//! ```text
//! mutate:   toggle_wall · resize_grid · increment_cell · set_state
//!           click · scroll · resize_canvas · set_mode
//! compute:  transition_matrix · state_vector · step · run_steps
//! address:  locate_cell · locate_nearest_boundary
//! ```
//!
//! Every call runs to completion synchronously.  The shell re-reads the
//! accessors after any mutation to re-render.
//!
//! # Quick-start
//!
//! ```rust
//! use wg_board::BoardBuilder;
//! use wg_core::{BoardConfig, Cell};
//!
//! let config = BoardConfig { width: 2, height: 1, ..BoardConfig::default() };
//! let mut board = BoardBuilder::new(config).initial_state(vec![1.0, 0.0]).build()?;
//! board.toggle_wall(Cell::new(0, 0), Cell::new(1, 0));
//! board.step()?;
//! assert_eq!(board.state_vector(), vec![0.0, 1.0]);
//! # Ok::<(), wg_board::BoardError>(())
//! ```

pub mod board;
pub mod builder;
pub mod error;
pub mod observer;


pub use board::{Board, Mode};
pub use builder::BoardBuilder;
pub use error::{BoardError, BoardResult};
pub use observer::{BoardObserver, NoopObserver};

pub use wg_walls::ToggleOutcome;
