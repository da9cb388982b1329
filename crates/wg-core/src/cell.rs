//! Cell addressing.
//!
//! A grid is `width` columns by `height` rows.  Cells are addressed by
//! `(c, r)` and flattened **column-major**:
//!
//! ```text
//! index = c * height + r
//! ```
//!
//! Every vector and matrix in the workspace uses this ordering, so a state
//! vector, a transition-matrix row, and the grid's backing storage all agree
//! on which slot belongs to which cell.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One addressable grid cell, `c` = column, `r` = row.
///
/// Coordinates are signed so a neighbour one step outside the grid is still
/// representable (and can be rejected by [`GridDims::contains`]).  The derived
/// `Ord` is column-then-row, which is also the flatten order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub c: i32,
    pub r: i32,
}

impl Cell {
    #[inline]
    pub const fn new(c: i32, r: i32) -> Self {
        Self { c, r }
    }

    /// The four edge-sharing neighbours in scan order: left, top, right,
    /// bottom.  Some may lie outside any given grid.
    ///
    /// Coordinates saturate at the `i32` bounds, so a cell on that bound
    /// gets itself back in place of the missing neighbour; a cell is never
    /// adjacent to itself.
    #[inline]
    pub const fn neighbours(self) -> [Cell; 4] {
        let Cell { c, r } = self;
        [
            Cell { c: c.saturating_sub(1), r },
            Cell { c, r: r.saturating_sub(1) },
            Cell { c: c.saturating_add(1), r },
            Cell { c, r: r.saturating_add(1) },
        ]
    }

    /// `true` if `other` shares an edge with `self` (Manhattan distance 1).
    #[inline]
    pub const fn is_adjacent(self, other: Cell) -> bool {
        let dc = self.c.abs_diff(other.c);
        let dr = self.r.abs_diff(other.r);
        (dc == 1 && dr == 0) || (dc == 0 && dr == 1)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.c, self.r)
    }
}

// ── CanvasPoint ───────────────────────────────────────────────────────────────

/// A continuous position on the shell's drawing surface, origin top-left,
/// `y` growing downwards.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for CanvasPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── GridDims ──────────────────────────────────────────────────────────────────

/// Grid dimensions.  Both extents are at least 1; construct through
/// [`GridDims::new`] to enforce it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    width:  u32,
    height: u32,
}

impl GridDims {
    /// Largest `width * height` accepted.  The transition matrix is dense,
    /// so this bounds it at `MAX_CELLS²` entries, and every coordinate of an
    /// in-grid cell fits in an `i32`.
    pub const MAX_CELLS: usize = 4096;

    /// # Errors
    ///
    /// - [`CoreError::DegenerateGrid`] if either extent is zero.
    /// - [`CoreError::GridTooLarge`] if `width * height` exceeds
    ///   [`MAX_CELLS`](Self::MAX_CELLS).
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::DegenerateGrid { width, height });
        }
        if u64::from(width) * u64::from(height) > Self::MAX_CELLS as u64 {
            return Err(CoreError::GridTooLarge { width, height, max_cells: Self::MAX_CELLS });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    /// `width * height` — the length of every state vector and the side of
    /// every transition matrix for this grid.
    #[inline]
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.c >= 0
            && cell.r >= 0
            && (cell.c as u32) < self.width
            && (cell.r as u32) < self.height
    }

    /// Column-major flat index of `cell`, or `None` if it is out of bounds.
    #[inline]
    pub fn index_of(self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.c as usize * self.height as usize + cell.r as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn cell_at(self, index: usize) -> Option<Cell> {
        if index >= self.cell_count() {
            return None;
        }
        let h = self.height as usize;
        Some(Cell::new((index / h) as i32, (index % h) as i32))
    }

    /// All cells in flat-index order.  Both extents are at most
    /// [`MAX_CELLS`](Self::MAX_CELLS), so the casts are lossless.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let h = self.height as i32;
        (0..self.width as i32).flat_map(move |c| (0..h).map(move |r| Cell::new(c, r)))
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
