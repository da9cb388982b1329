//! Transition-matrix generation.
//!
//! A pure function of the wall set and the grid dimensions: identical inputs
//! always give an identical matrix.

use tracing::debug;

use wg_core::{Cell, GridDims};
use wg_walls::WallStore;

use crate::TransitionMatrix;

/// How a cell behaves as a Markov state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CellRole {
    /// No in-grid wall touches the cell.  Absorbing.
    Isolated,
    /// Walls touch the cell but none can be crossed from it (every one is a
    /// `OneWay` pointing in).  Absorbing.
    DeadEnd,
    /// Mass leaves uniformly through `exits` walls.
    Transient { exits: usize },
}

impl CellRole {
    #[inline]
    pub fn is_absorbing(self) -> bool {
        !matches!(self, CellRole::Transient { .. })
    }
}

/// Neighbours that mass in `cell` can move to in one step, ordered by wall
/// id.  Walls with an endpoint outside `dims` are skipped.
pub fn exits(walls: &WallStore, dims: GridDims, cell: Cell) -> Vec<Cell> {
    walls
        .find_by_endpoint(cell)
        .into_iter()
        .filter(|w| dims.contains(w.from) && dims.contains(w.to))
        .filter_map(|w| w.exit_from(cell))
        .collect()
}

/// Classify `cell` against the current walls.
pub fn classify(walls: &WallStore, dims: GridDims, cell: Cell) -> CellRole {
    let touching = walls
        .find_by_endpoint(cell)
        .into_iter()
        .filter(|w| dims.contains(w.from) && dims.contains(w.to))
        .count();
    if touching == 0 {
        return CellRole::Isolated;
    }
    match exits(walls, dims, cell).len() {
        0 => CellRole::DeadEnd,
        n => CellRole::Transient { exits: n },
    }
}

/// Build the one-step transition matrix for `dims` under `walls`.
///
/// Row `s`: if `s` has `k > 0` exits, each exit neighbour gets `1/k` and
/// every other entry is 0; otherwise the row is the identity row (`1` at
/// `s`).  Every row therefore sums to 1.
pub fn transition_matrix(walls: &WallStore, dims: GridDims) -> TransitionMatrix {
    let n = dims.cell_count();
    let mut matrix = TransitionMatrix::zeros(n);
    let mut absorbing = 0usize;

    for (i, cell) in dims.cells().enumerate() {
        let out = exits(walls, dims, cell);
        let row = matrix.row_mut(i);
        if out.is_empty() {
            row[i] = 1.0;
            absorbing += 1;
            continue;
        }
        let p = 1.0 / out.len() as f64;
        for target in out {
            // `exits` only yields in-grid cells.
            if let Some(j) = dims.index_of(target) {
                row[j] = p;
            }
        }
    }

    debug!(%dims, walls = walls.len(), absorbing, "transition matrix generated");
    matrix
}
