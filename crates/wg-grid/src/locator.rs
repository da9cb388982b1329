//! Canvas-to-grid addressing.
//!
//! The shell draws the grid stretched over a `canvas_width × canvas_height`
//! surface, so one cell is `canvas_width / width` by
//! `canvas_height / height` canvas units.  The locator turns pointer
//! positions back into cells and boundaries.

use wg_core::{check_canvas, CanvasPoint, Cell, CoreResult, GridDims};

/// Maps canvas points to cells and to the nearest cell boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Locator {
    canvas_width:  f64,
    canvas_height: f64,
    dims:          GridDims,
}

impl Locator {
    /// # Errors
    ///
    /// [`CoreError::InvalidCanvas`](wg_core::CoreError::InvalidCanvas) for a
    /// non-finite or non-positive extent.
    pub fn new(canvas_width: f64, canvas_height: f64, dims: GridDims) -> CoreResult<Self> {
        check_canvas(canvas_width, canvas_height)?;
        Ok(Self { canvas_width, canvas_height, dims })
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Track a grid resize.
    #[inline]
    pub fn set_dims(&mut self, dims: GridDims) {
        self.dims = dims;
    }

    /// Track a canvas resize.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new); the locator is unchanged on error.
    pub fn resize_canvas(&mut self, canvas_width: f64, canvas_height: f64) -> CoreResult<()> {
        check_canvas(canvas_width, canvas_height)?;
        self.canvas_width = canvas_width;
        self.canvas_height = canvas_height;
        Ok(())
    }

    /// `(width, height)` of one cell in canvas units.
    #[inline]
    pub fn cell_size(&self) -> (f64, f64) {
        (
            self.canvas_width / self.dims.width() as f64,
            self.canvas_height / self.dims.height() as f64,
        )
    }

    /// The cell under `p`: `floor(x / cell_width)`, `floor(y / cell_height)`.
    ///
    /// Returns `None` for points off the canvas or with non-finite
    /// coordinates.  The right and bottom canvas edges belong to no cell.
    pub fn locate_cell(&self, p: CanvasPoint) -> Option<Cell> {
        if !p.is_finite() {
            return None;
        }
        let (cw, ch) = self.cell_size();
        let c = (p.x / cw).floor();
        let r = (p.y / ch).floor();
        if c < 0.0 || r < 0.0 {
            return None;
        }
        let cell = Cell::new(c as i32, r as i32);
        self.dims.contains(cell).then_some(cell)
    }

    /// The neighbour of `cell` across whichever of its four edges is
    /// closest to `p`.
    ///
    /// Edges are scanned left, top, right, bottom.  The running best starts
    /// at `cell_width + cell_height` and a candidate replaces it only when
    /// strictly closer, so on a tie the earlier edge in scan order wins.  At
    /// the exact centre of a square cell all four tie and the left neighbour
    /// is chosen; in a wide cell the top edge is nearer and wins, in a tall
    /// one the left edge.
    ///
    /// Returns `None` if `p` is not inside `cell`'s box (edges included),
    /// `cell` itself is out of bounds, or the chosen neighbour is outside the
    /// grid.  Nothing falls back to the next-nearest edge.
    pub fn locate_nearest_boundary(&self, cell: Cell, p: CanvasPoint) -> Option<Cell> {
        if !p.is_finite() || !self.dims.contains(cell) {
            return None;
        }
        let (cw, ch) = self.cell_size();
        let rx = p.x - cell.c as f64 * cw;
        let ry = p.y - cell.r as f64 * ch;
        if !(0.0..=cw).contains(&rx) || !(0.0..=ch).contains(&ry) {
            return None;
        }

        let [left, top, right, bottom] = cell.neighbours();
        let candidates = [(rx, left), (ry, top), (cw - rx, right), (ch - ry, bottom)];

        let mut best_distance = cw + ch;
        let mut best = None;
        for (distance, neighbour) in candidates {
            if distance < best_distance {
                best_distance = distance;
                best = Some(neighbour);
            }
        }

        best.filter(|&n| self.dims.contains(n))
    }
}
