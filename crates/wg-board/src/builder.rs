//! Fluent builder for constructing a [`Board`].

use wg_core::{BoardConfig, Cell, Step};
use wg_grid::{Grid, Locator};
use wg_walls::{WallKind, WallStore};

use crate::{Board, BoardError, BoardResult, Mode};

/// Fluent builder for [`Board`].
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                 |
/// |-----------------------|-------------------------|
/// | `.wall(from, to, k)`  | no walls (all closed)   |
/// | `.initial_state(v)`   | all-zero grid           |
/// | `.mode(m)`            | `Mode::Editing`         |
///
/// # Example
///
/// ```rust,ignore
/// let mut board = BoardBuilder::new(config)
///     .wall(Cell::new(0, 0), Cell::new(1, 0), WallKind::Open)
///     .initial_state(vec![1.0, 0.0])
///     .build()?;
/// board.step()?;
/// ```
pub struct BoardBuilder {
    config: BoardConfig,
    walls:  Vec<(Cell, Cell, WallKind)>,
    state:  Option<Vec<f64>>,
    mode:   Mode,
}

impl BoardBuilder {
    pub fn new(config: BoardConfig) -> Self {
        Self { config, walls: Vec::new(), state: None, mode: Mode::default() }
    }

    /// Pre-seed one wall.  Later walls on the same boundary replace earlier
    /// ones.
    pub fn wall(mut self, from: Cell, to: Cell, kind: WallKind) -> Self {
        self.walls.push((from, to, kind));
        self
    }

    /// Pre-seed several walls.
    pub fn walls<I>(mut self, walls: I) -> Self
    where
        I: IntoIterator<Item = (Cell, Cell, WallKind)>,
    {
        self.walls.extend(walls);
        self
    }

    /// Supply the initial column-major state vector (must be length
    /// `width * height`).
    pub fn initial_state(mut self, state: Vec<f64>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate inputs and return a ready [`Board`].
    ///
    /// # Errors
    ///
    /// - [`BoardError::Config`] for a degenerate grid or bad canvas.
    /// - [`BoardError::WallOutOfBounds`] for a seeded wall off the grid.
    /// - [`BoardError::Wall`] for a seeded wall between non-adjacent cells.
    /// - [`BoardError::Grid`] for a wrong-length or negative initial state.
    pub fn build(self) -> BoardResult<Board> {
        let dims = self.config.validate()?;
        let locator = Locator::new(self.config.canvas_width, self.config.canvas_height, dims)?;

        let mut walls = WallStore::new();
        for (from, to, kind) in self.walls {
            if !dims.contains(from) || !dims.contains(to) {
                return Err(BoardError::WallOutOfBounds { from, to });
            }
            walls.insert(from, to, kind)?;
        }

        let mut grid = Grid::new(dims);
        if let Some(state) = self.state {
            grid.unflatten(&state)?;
        }

        Ok(Board {
            config: self.config,
            walls,
            grid,
            locator,
            mode:   self.mode,
            steps:  Step::ZERO,
        })
    }
}

impl Board {
    /// Board with no walls and an all-zero grid.
    ///
    /// # Errors
    ///
    /// As [`BoardBuilder::build`].
    pub fn new(config: BoardConfig) -> BoardResult<Board> {
        BoardBuilder::new(config).build()
    }
}
