//! Unit tests for wg-core primitives.

#[cfg(test)]
mod cell {
    use crate::{CanvasPoint, Cell};

    #[test]
    fn neighbours_scan_order() {
        let n = Cell::new(2, 3).neighbours();
        assert_eq!(n, [Cell::new(1, 3), Cell::new(2, 2), Cell::new(3, 3), Cell::new(2, 4)]);
    }

    #[test]
    fn adjacency() {
        let a = Cell::new(1, 1);
        assert!(a.is_adjacent(Cell::new(1, 2)));
        assert!(a.is_adjacent(Cell::new(0, 1)));
        assert!(!a.is_adjacent(a));
        assert!(!a.is_adjacent(Cell::new(2, 2))); // diagonal
        assert!(!a.is_adjacent(Cell::new(3, 1)));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let max = Cell::new(i32::MAX, i32::MAX);
        let min = Cell::new(i32::MIN, i32::MIN);
        assert_eq!(
            max.neighbours(),
            [Cell::new(i32::MAX - 1, i32::MAX), Cell::new(i32::MAX, i32::MAX - 1), max, max]
        );
        assert_eq!(min.neighbours()[0], min);
        assert!(!max.is_adjacent(min));
        assert!(!Cell::new(i32::MIN, 0).is_adjacent(Cell::new(i32::MAX, 0)));
        assert!(max.is_adjacent(Cell::new(i32::MAX - 1, i32::MAX)));
        assert!(!max.neighbours().iter().any(|&n| n == max && max.is_adjacent(n)));
    }

    #[test]
    fn ordering_is_column_then_row() {
        assert!(Cell::new(0, 5) < Cell::new(1, 0));
        assert!(Cell::new(1, 0) < Cell::new(1, 1));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(4, -1).to_string(), "(4, -1)");
        assert_eq!(CanvasPoint::new(1.0, 2.5).to_string(), "(1.00, 2.50)");
    }

    #[test]
    fn non_finite_point() {
        assert!(CanvasPoint::new(0.0, 0.0).is_finite());
        assert!(!CanvasPoint::new(f64::NAN, 0.0).is_finite());
    }
}

#[cfg(test)]
mod dims {
    use crate::{Cell, CoreError, GridDims};

    #[test]
    fn zero_extent_rejected() {
        assert_eq!(
            GridDims::new(0, 3),
            Err(CoreError::DegenerateGrid { width: 0, height: 3 })
        );
        assert!(GridDims::new(3, 0).is_err());
        assert!(GridDims::new(1, 1).is_ok());
    }

    #[test]
    fn oversized_grid_rejected() {
        assert!(GridDims::new(64, 64).is_ok());
        assert!(GridDims::new(GridDims::MAX_CELLS as u32, 1).is_ok());
        assert_eq!(
            GridDims::new(65, 64),
            Err(CoreError::GridTooLarge { width: 65, height: 64, max_cells: GridDims::MAX_CELLS })
        );
        // The product would overflow a u32.
        assert!(matches!(
            GridDims::new(u32::MAX, u32::MAX),
            Err(CoreError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn cells_at_the_limit_stay_in_range() {
        let d = GridDims::new(1, GridDims::MAX_CELLS as u32).unwrap();
        let last = d.cells().last().unwrap();
        assert_eq!(last, Cell::new(0, GridDims::MAX_CELLS as i32 - 1));
        assert_eq!(d.index_of(last), Some(GridDims::MAX_CELLS - 1));
    }

    #[test]
    fn column_major_index() {
        let d = GridDims::new(3, 2).unwrap();
        assert_eq!(d.cell_count(), 6);
        assert_eq!(d.index_of(Cell::new(0, 0)), Some(0));
        assert_eq!(d.index_of(Cell::new(0, 1)), Some(1));
        assert_eq!(d.index_of(Cell::new(1, 0)), Some(2));
        assert_eq!(d.index_of(Cell::new(2, 1)), Some(5));
        assert_eq!(d.index_of(Cell::new(3, 0)), None);
        assert_eq!(d.index_of(Cell::new(0, -1)), None);
    }

    #[test]
    fn cell_at_inverts_index_of() {
        let d = GridDims::new(4, 3).unwrap();
        for (i, cell) in d.cells().enumerate() {
            assert_eq!(d.index_of(cell), Some(i));
            assert_eq!(d.cell_at(i), Some(cell));
        }
        assert_eq!(d.cell_at(12), None);
    }

    #[test]
    fn contains_bounds() {
        let d = GridDims::new(2, 1).unwrap();
        assert!(d.contains(Cell::new(1, 0)));
        assert!(!d.contains(Cell::new(2, 0)));
        assert!(!d.contains(Cell::new(0, 1)));
        assert!(!d.contains(Cell::new(-1, 0)));
    }
}

#[cfg(test)]
mod step {
    use crate::Step;

    #[test]
    fn next_and_display() {
        assert_eq!(Step::ZERO.next(), Step(1));
        assert!(Step(1) > Step::ZERO);
        assert_eq!(Step(2).to_string(), "S2");
    }
}

#[cfg(test)]
mod ids {
    use crate::WallId;

    #[test]
    fn monotonic() {
        assert_eq!(WallId::FIRST.next(), WallId(1));
        assert!(WallId(1) < WallId(2));
        assert_eq!(WallId(7).to_string(), "WallId(7)");
    }
}

#[cfg(test)]
mod config {
    use crate::{BoardConfig, CoreError, StaleWallPolicy};

    #[test]
    fn default_is_single_cell() {
        let cfg = BoardConfig::default();
        let dims = cfg.validate().unwrap();
        assert_eq!(dims.cell_count(), 1);
        assert_eq!(cfg.stale_walls, StaleWallPolicy::Keep);
    }

    #[test]
    fn bad_canvas_rejected() {
        let cfg = BoardConfig { canvas_width: 0.0, ..BoardConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidCanvas { .. })));
        let cfg = BoardConfig { canvas_height: f64::INFINITY, ..BoardConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_width_rejected() {
        let cfg = BoardConfig { width: 0, ..BoardConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::DegenerateGrid { .. })));
    }
}
