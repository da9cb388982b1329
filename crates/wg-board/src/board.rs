//! The `Board` aggregate and its shell-facing operations.

use std::fmt;

use tracing::{debug, info};

use wg_chain::{step_into, transition_matrix, TransitionMatrix};
use wg_core::{BoardConfig, CanvasPoint, Cell, GridDims, StaleWallPolicy, Step};
use wg_grid::{Grid, Locator};
use wg_walls::{ToggleOutcome, WallStore};

use crate::{BoardObserver, BoardResult};

// ── Mode ──────────────────────────────────────────────────────────────────────

/// What the shell is currently doing with the board.  Informational only:
/// the board accepts every operation in either mode.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// Walls and mass are being edited.
    #[default]
    Editing,
    /// The shell is stepping the chain.
    Running,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Editing => "editing",
            Mode::Running => "running",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Board ─────────────────────────────────────────────────────────────────────

/// Walls, grid state and addressing for one Markov board.
///
/// Fields are private so that every wall mutation goes through a bounds
/// check: the store itself never sees an out-of-range cell from this type.
/// Create via [`BoardBuilder`][crate::BoardBuilder].
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) config:  BoardConfig,
    pub(crate) walls:   WallStore,
    pub(crate) grid:    Grid,
    pub(crate) locator: Locator,
    pub(crate) mode:    Mode,
    pub(crate) steps:   Step,
}

impl Board {
    // ── Accessors ─────────────────────────────────────────────────────────

    /// Configuration, with `width`/`height` and canvas extents kept current
    /// across resizes.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn walls(&self) -> &WallStore {
        &self.walls
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.grid.dims()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Steps applied since the grid state was last reset by a resize.
    #[inline]
    pub fn steps(&self) -> Step {
        self.steps
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Toggle the boundary between `side` and `across`, triggered from
    /// `side`.  See [`WallStore::toggle`] for the cycle.
    ///
    /// Requests with an out-of-range cell or non-adjacent cells are rejected
    /// here and return [`ToggleOutcome::Unchanged`].
    pub fn toggle_wall(&mut self, side: Cell, across: Cell) -> ToggleOutcome {
        let dims = self.dims();
        if !dims.contains(side) || !dims.contains(across) {
            debug!(%side, %across, %dims, "toggle rejected: out of bounds");
            return ToggleOutcome::Unchanged;
        }
        match self.walls.toggle(side, across) {
            Ok(outcome) => {
                debug!(%side, %across, ?outcome, "wall toggled");
                outcome
            }
            Err(e) => {
                debug!(error = %e, "toggle rejected");
                ToggleOutcome::Unchanged
            }
        }
    }

    /// Replace the grid with an all-zero `width × height` one and reset the
    /// step counter.  Walls are pruned or kept per
    /// [`BoardConfig::stale_walls`]; returns the number pruned.
    ///
    /// # Errors
    ///
    /// [`BoardError::Grid`](crate::BoardError::Grid) for a zero extent; the
    /// board is unchanged.
    pub fn resize_grid(&mut self, width: u32, height: u32) -> BoardResult<usize> {
        self.grid.resize(width, height)?;
        let dims = self.grid.dims();
        self.locator.set_dims(dims);
        self.config.width = width;
        self.config.height = height;
        self.steps = Step::ZERO;

        let pruned = match self.config.stale_walls {
            StaleWallPolicy::Keep  => 0,
            StaleWallPolicy::Prune => self.walls.prune_outside(dims),
        };
        info!(%dims, pruned, walls = self.walls.len(), "board resized");
        Ok(pruned)
    }

    /// Add `delta` to the mass at `cell`, clamped at 0.  Returns `false` for
    /// an out-of-range cell.
    pub fn increment_cell(&mut self, cell: Cell, delta: f64) -> bool {
        self.grid.increment(cell, delta)
    }

    /// Overwrite the grid from a column-major state vector.
    ///
    /// # Errors
    ///
    /// [`BoardError::Grid`](crate::BoardError::Grid) on a length mismatch or
    /// a negative/non-finite entry; the grid is unchanged.
    pub fn set_state(&mut self, state: &[f64]) -> BoardResult<()> {
        self.grid.unflatten(state)?;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Flip between `Editing` and `Running`, returning the new mode.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = match self.mode {
            Mode::Editing => Mode::Running,
            Mode::Running => Mode::Editing,
        };
        self.mode
    }

    /// Track a change in the shell's drawing-surface size.
    ///
    /// # Errors
    ///
    /// [`BoardError::Config`](crate::BoardError::Config) for a non-finite or
    /// non-positive extent.
    pub fn resize_canvas(&mut self, width: f64, height: f64) -> BoardResult<()> {
        self.locator.resize_canvas(width, height)?;
        self.config.canvas_width = width;
        self.config.canvas_height = height;
        Ok(())
    }

    /// Pointer click at `p`: find the cell under it and the nearest boundary
    /// of that cell, then toggle that boundary from the clicked cell's side.
    ///
    /// Returns `Unchanged` if the click is off the grid or its nearest edge
    /// is the outer border.
    pub fn click(&mut self, p: CanvasPoint) -> ToggleOutcome {
        let Some(cell) = self.locate_cell(p) else {
            return ToggleOutcome::Unchanged;
        };
        let Some(across) = self.locate_nearest_boundary(cell, p) else {
            return ToggleOutcome::Unchanged;
        };
        self.toggle_wall(cell, across)
    }

    /// Scroll at `p`: add `delta` to the mass of the cell under the pointer.
    pub fn scroll(&mut self, p: CanvasPoint, delta: f64) -> bool {
        match self.locate_cell(p) {
            Some(cell) => self.increment_cell(cell, delta),
            None => false,
        }
    }

    // ── Compute ───────────────────────────────────────────────────────────

    /// One-step transition matrix for the current walls and dimensions.
    pub fn transition_matrix(&self) -> TransitionMatrix {
        transition_matrix(&self.walls, self.dims())
    }

    /// Current grid state, column-major.
    pub fn state_vector(&self) -> Vec<f64> {
        self.grid.flatten()
    }

    /// Apply one Markov step to the grid and return the new step count.
    ///
    /// # Errors
    ///
    /// Propagates a dimension mismatch between the grid and the matrix; with
    /// the invariants this type maintains that cannot happen.
    pub fn step(&mut self) -> BoardResult<Step> {
        let matrix = self.transition_matrix();
        let mut next = vec![0.0; matrix.dim()];
        self.advance(&matrix, &mut next)?;
        debug!(step = %self.steps, mass = self.grid.total_mass(), "stepped");
        Ok(self.steps)
    }

    /// Apply `n` single steps, calling `observer` around each one.
    ///
    /// The walls cannot change during the run, so the matrix is generated
    /// once.  No convergence check is made.
    pub fn run_steps<O: BoardObserver>(&mut self, n: u64, observer: &mut O) -> BoardResult<Step> {
        let matrix = self.transition_matrix();
        let mut next = vec![0.0; matrix.dim()];
        for _ in 0..n {
            observer.on_step_start(self.steps);
            self.advance(&matrix, &mut next)?;
            observer.on_step_end(self.steps, self.grid.as_slice());
        }
        observer.on_run_end(self.steps);
        debug!(n, step = %self.steps, mass = self.grid.total_mass(), "run finished");
        Ok(self.steps)
    }

    fn advance(&mut self, matrix: &TransitionMatrix, buf: &mut [f64]) -> BoardResult<()> {
        step_into(matrix, self.grid.as_slice(), buf)?;
        self.grid.unflatten(buf)?;
        self.steps = self.steps.next();
        Ok(())
    }

    // ── Addressing ────────────────────────────────────────────────────────

    /// Cell under canvas point `p`, if any.
    pub fn locate_cell(&self, p: CanvasPoint) -> Option<Cell> {
        self.locator.locate_cell(p)
    }

    /// Neighbour of `cell` across the edge nearest `p`; see
    /// [`Locator::locate_nearest_boundary`] for the tie-break.
    pub fn locate_nearest_boundary(&self, cell: Cell, p: CanvasPoint) -> Option<Cell> {
        self.locator.locate_nearest_boundary(cell, p)
    }
}
