//! Per-cell mass storage.
//!
//! The backing `Vec` is already in flatten order (`c * height + r`), so
//! flattening is a copy and unflattening is a checked overwrite.

use tracing::debug;

use wg_core::{Cell, GridDims};

use crate::{GridError, GridResult};

/// Non-negative scalar per cell: probability mass or an occupancy count.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    dims:  GridDims,
    cells: Vec<f64>,
}

impl Grid {
    /// All-zero grid of the given size.
    pub fn new(dims: GridDims) -> Self {
        Self { dims, cells: vec![0.0; dims.cell_count()] }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    /// Replace the grid with an all-zero one of the new size.  Old values are
    /// discarded even when the size is unchanged.
    ///
    /// # Errors
    ///
    /// [`GridError::Core`] wrapping `DegenerateGrid` if either extent is zero;
    /// the grid is left untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> GridResult<()> {
        let dims = GridDims::new(width, height)?;
        debug!(from = %self.dims, to = %dims, "grid resized");
        *self = Grid::new(dims);
        Ok(())
    }

    /// Mass at `cell`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<f64> {
        self.dims.index_of(cell).map(|i| self.cells[i])
    }

    /// Set the mass at `cell`, clamped to a floor of 0.  Returns `false`
    /// (and does nothing) if `cell` is out of bounds or `value` is not
    /// finite.
    pub fn set(&mut self, cell: Cell, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self.dims.index_of(cell) {
            Some(i) => {
                self.cells[i] = value.max(0.0);
                true
            }
            None => false,
        }
    }

    /// Add `delta` (possibly negative) to `cell`, clamping the result at 0.
    /// Returns `false` (and does nothing) if `cell` is out of bounds or the
    /// new mass would not be finite.
    pub fn increment(&mut self, cell: Cell, delta: f64) -> bool {
        let Some(i) = self.dims.index_of(cell) else {
            return false;
        };
        let value = self.cells[i] + delta;
        if !value.is_finite() {
            return false;
        }
        self.cells[i] = value.max(0.0);
        true
    }

    /// Sum of all cells.
    pub fn total_mass(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Zero every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(0.0);
    }

    /// The state vector in column-major order.
    pub fn flatten(&self) -> Vec<f64> {
        self.cells.clone()
    }

    /// Borrowing form of [`flatten`](Self::flatten).
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    /// Overwrite every cell from a column-major state vector.
    ///
    /// # Errors
    ///
    /// - [`GridError::DimensionMismatch`] if `state.len()` is not the cell
    ///   count.  Nothing is truncated or padded.
    /// - [`GridError::InvalidMass`] for a negative or non-finite entry.
    ///
    /// On error the grid is unchanged.
    pub fn unflatten(&mut self, state: &[f64]) -> GridResult<()> {
        let expected = self.dims.cell_count();
        if state.len() != expected {
            return Err(GridError::DimensionMismatch { expected, got: state.len() });
        }
        if let Some((i, &value)) = state
            .iter()
            .enumerate()
            .find(|&(_, v)| !v.is_finite() || *v < 0.0)
        {
            let cell = self.dims.cell_at(i).unwrap_or_default();
            return Err(GridError::InvalidMass { cell, value });
        }
        self.cells.copy_from_slice(state);
        Ok(())
    }

    /// `(cell, mass)` pairs in flatten order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.dims.cells().zip(self.cells.iter().copied())
    }
}
