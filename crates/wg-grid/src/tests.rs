//! Unit tests for wg-grid.

#[cfg(test)]
mod grid {
    use wg_core::{Cell, CoreError, GridDims};

    use crate::{Grid, GridError};

    fn grid(w: u32, h: u32) -> Grid {
        Grid::new(GridDims::new(w, h).unwrap())
    }

    #[test]
    fn starts_zeroed() {
        let g = grid(3, 2);
        assert_eq!(g.flatten(), vec![0.0; 6]);
        assert_eq!(g.total_mass(), 0.0);
    }

    #[test]
    fn flatten_is_column_major() {
        let mut g = grid(2, 3);
        g.set(Cell::new(0, 2), 1.0);
        g.set(Cell::new(1, 0), 2.0);
        assert_eq!(g.flatten(), vec![0.0, 0.0, 1.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn flatten_unflatten_identity() {
        let mut g = grid(3, 2);
        g.unflatten(&[0.1, 0.2, 0.0, 0.3, 0.4, 0.0]).unwrap();
        let before = g.clone();
        let flat = g.flatten();
        g.unflatten(&flat).unwrap();
        assert_eq!(g, before);
    }

    #[test]
    fn unflatten_length_mismatch_is_an_error() {
        let mut g = grid(2, 2);
        g.set(Cell::new(1, 1), 5.0);
        assert_eq!(
            g.unflatten(&[1.0, 0.0, 0.0]),
            Err(GridError::DimensionMismatch { expected: 4, got: 3 })
        );
        assert!(g.unflatten(&[0.0; 5]).is_err());
        // Untouched on error.
        assert_eq!(g.get(Cell::new(1, 1)), Some(5.0));
    }

    #[test]
    fn unflatten_rejects_negative_mass() {
        let mut g = grid(2, 1);
        let err = g.unflatten(&[0.5, -0.1]).unwrap_err();
        assert_eq!(err, GridError::InvalidMass { cell: Cell::new(1, 0), value: -0.1 });
        assert!(g.unflatten(&[f64::NAN, 0.0]).is_err());
        assert_eq!(g.total_mass(), 0.0);
    }

    #[test]
    fn increment_clamps_at_zero() {
        let mut g = grid(1, 1);
        let c = Cell::new(0, 0);
        assert!(g.increment(c, 2.0));
        assert!(g.increment(c, -5.0));
        assert_eq!(g.get(c), Some(0.0));
        assert!(g.increment(c, 1.5));
        assert_eq!(g.get(c), Some(1.5));
    }

    #[test]
    fn increment_out_of_bounds_is_noop() {
        let mut g = grid(2, 2);
        assert!(!g.increment(Cell::new(2, 0), 1.0));
        assert!(!g.increment(Cell::new(0, -1), 1.0));
        assert!(!g.increment(Cell::new(0, 0), f64::INFINITY));
        assert_eq!(g.total_mass(), 0.0);
    }

    #[test]
    fn increment_overflow_leaves_cell_unchanged() {
        let mut g = grid(1, 1);
        let c = Cell::new(0, 0);
        assert!(g.increment(c, 1e308));
        assert!(!g.increment(c, 1e308));
        assert_eq!(g.get(c), Some(1e308));
        let flat = g.flatten();
        assert!(g.unflatten(&flat).is_ok());
    }

    #[test]
    fn set_rejects_non_finite() {
        let mut g = grid(2, 1);
        let c = Cell::new(0, 0);
        g.set(c, 2.0);
        assert!(!g.set(c, f64::INFINITY));
        assert!(!g.set(c, f64::NAN));
        assert_eq!(g.get(c), Some(2.0));
        let flat = g.flatten();
        assert!(g.unflatten(&flat).is_ok());
    }

    #[test]
    fn resize_discards_values() {
        let mut g = grid(2, 2);
        g.set(Cell::new(0, 0), 1.0);
        g.resize(2, 2).unwrap();
        assert_eq!(g.total_mass(), 0.0);
        g.resize(4, 1).unwrap();
        assert_eq!((g.width(), g.height()), (4, 1));
        assert_eq!(g.flatten().len(), 4);
    }

    #[test]
    fn resize_to_zero_rejected() {
        let mut g = grid(2, 2);
        g.set(Cell::new(1, 1), 3.0);
        assert_eq!(
            g.resize(0, 5),
            Err(GridError::Core(CoreError::DegenerateGrid { width: 0, height: 5 }))
        );
        assert_eq!(g.get(Cell::new(1, 1)), Some(3.0));
    }

    #[test]
    fn iter_pairs_cells_with_mass() {
        let mut g = grid(2, 1);
        g.set(Cell::new(1, 0), 0.25);
        let pairs: Vec<_> = g.iter().collect();
        assert_eq!(pairs, vec![(Cell::new(0, 0), 0.0), (Cell::new(1, 0), 0.25)]);
    }
}

#[cfg(test)]
mod locator {
    use wg_core::{CanvasPoint, Cell, GridDims};

    use crate::Locator;

    /// 4×2 grid on a 400×200 canvas: every cell is 100×100.
    fn square_cells() -> Locator {
        Locator::new(400.0, 200.0, GridDims::new(4, 2).unwrap()).unwrap()
    }

    fn pt(x: f64, y: f64) -> CanvasPoint {
        CanvasPoint::new(x, y)
    }

    #[test]
    fn rejects_bad_canvas() {
        let d = GridDims::new(1, 1).unwrap();
        assert!(Locator::new(0.0, 10.0, d).is_err());
        assert!(Locator::new(10.0, f64::NAN, d).is_err());
        let mut l = Locator::new(10.0, 10.0, d).unwrap();
        assert!(l.resize_canvas(-1.0, 10.0).is_err());
        assert_eq!(l.cell_size(), (10.0, 10.0));
    }

    #[test]
    fn locate_cell_floors() {
        let l = square_cells();
        assert_eq!(l.locate_cell(pt(0.0, 0.0)), Some(Cell::new(0, 0)));
        assert_eq!(l.locate_cell(pt(99.9, 99.9)), Some(Cell::new(0, 0)));
        assert_eq!(l.locate_cell(pt(100.0, 150.0)), Some(Cell::new(1, 1)));
        assert_eq!(l.locate_cell(pt(399.0, 10.0)), Some(Cell::new(3, 0)));
    }

    #[test]
    fn locate_cell_off_canvas() {
        let l = square_cells();
        assert_eq!(l.locate_cell(pt(-0.5, 10.0)), None);
        assert_eq!(l.locate_cell(pt(400.0, 10.0)), None);
        assert_eq!(l.locate_cell(pt(10.0, 200.0)), None);
        assert_eq!(l.locate_cell(pt(f64::NAN, 1.0)), None);
    }

    #[test]
    fn canvas_resize_rescales_cells() {
        let mut l = square_cells();
        l.resize_canvas(800.0, 400.0).unwrap();
        assert_eq!(l.locate_cell(pt(150.0, 150.0)), Some(Cell::new(0, 0)));
        l.set_dims(GridDims::new(8, 4).unwrap());
        assert_eq!(l.locate_cell(pt(150.0, 150.0)), Some(Cell::new(1, 1)));
    }

    #[test]
    fn nearest_boundary_each_edge() {
        let l = square_cells();
        let cell = Cell::new(1, 0); // box x∈[100,200], y∈[0,100]
        assert_eq!(l.locate_nearest_boundary(cell, pt(105.0, 50.0)), Some(Cell::new(0, 0)));
        assert_eq!(l.locate_nearest_boundary(cell, pt(195.0, 50.0)), Some(Cell::new(2, 0)));
        assert_eq!(l.locate_nearest_boundary(cell, pt(150.0, 95.0)), Some(Cell::new(1, 1)));
        // Top edge of row 0 is the canvas border.
        assert_eq!(l.locate_nearest_boundary(cell, pt(150.0, 5.0)), None);
    }

    #[test]
    fn centre_of_square_cell_ties_to_left() {
        let l = square_cells();
        assert_eq!(
            l.locate_nearest_boundary(Cell::new(1, 1), pt(150.0, 150.0)),
            Some(Cell::new(0, 1))
        );
        // Column 0: the left neighbour is off-grid, and there is no fallback.
        assert_eq!(l.locate_nearest_boundary(Cell::new(0, 1), pt(50.0, 150.0)), None);
    }

    #[test]
    fn centre_of_non_square_cells() {
        // Wide cells (200×100): top/bottom edges are nearer; top wins the tie.
        let wide = Locator::new(400.0, 300.0, GridDims::new(2, 3).unwrap()).unwrap();
        assert_eq!(
            wide.locate_nearest_boundary(Cell::new(0, 1), pt(100.0, 150.0)),
            Some(Cell::new(0, 0))
        );
        // Tall cells (100×200): left/right edges are nearer; left wins.
        let tall = Locator::new(300.0, 400.0, GridDims::new(3, 2).unwrap()).unwrap();
        assert_eq!(
            tall.locate_nearest_boundary(Cell::new(1, 0), pt(150.0, 100.0)),
            Some(Cell::new(0, 0))
        );
    }

    #[test]
    fn four_quadrants_around_centre() {
        let l = Locator::new(300.0, 300.0, GridDims::new(3, 3).unwrap()).unwrap();
        let cell = Cell::new(1, 1); // centre (150, 150)

        // Up-left, mostly left.
        assert_eq!(l.locate_nearest_boundary(cell, pt(120.0, 140.0)), Some(Cell::new(0, 1)));
        // Up-left, mostly up.
        assert_eq!(l.locate_nearest_boundary(cell, pt(140.0, 120.0)), Some(Cell::new(1, 0)));
        // Up-right, mostly right.
        assert_eq!(l.locate_nearest_boundary(cell, pt(180.0, 140.0)), Some(Cell::new(2, 1)));
        // Up-right, mostly up.
        assert_eq!(l.locate_nearest_boundary(cell, pt(160.0, 120.0)), Some(Cell::new(1, 0)));
        // Down-left, mostly down.
        assert_eq!(l.locate_nearest_boundary(cell, pt(140.0, 180.0)), Some(Cell::new(1, 2)));
        // Down-right, mostly right.
        assert_eq!(l.locate_nearest_boundary(cell, pt(180.0, 160.0)), Some(Cell::new(2, 1)));
        // Exact diagonals: the earlier edge in scan order wins.
        assert_eq!(l.locate_nearest_boundary(cell, pt(130.0, 130.0)), Some(Cell::new(0, 1)));
        assert_eq!(l.locate_nearest_boundary(cell, pt(170.0, 130.0)), Some(Cell::new(1, 0)));
        assert_eq!(l.locate_nearest_boundary(cell, pt(170.0, 170.0)), Some(Cell::new(2, 1)));
        assert_eq!(l.locate_nearest_boundary(cell, pt(130.0, 170.0)), Some(Cell::new(0, 1)));
    }

    #[test]
    fn point_outside_cell_box() {
        let l = square_cells();
        assert_eq!(l.locate_nearest_boundary(Cell::new(0, 0), pt(150.0, 50.0)), None);
        assert_eq!(l.locate_nearest_boundary(Cell::new(9, 9), pt(50.0, 50.0)), None);
    }
}
