//! JSON scenario format: a board configuration, optional seed walls and
//! state, and a list of shell commands to replay against the board.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use wg_board::{Board, BoardBuilder, BoardObserver, Mode};
use wg_core::{BoardConfig, CanvasPoint, Cell, Step};
use wg_walls::WallKind;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub config: BoardConfig,
    #[serde(default)]
    pub walls: Vec<SeedWall>,
    #[serde(default)]
    pub initial_state: Option<Vec<f64>>,
    pub commands: Vec<Command>,
}

#[derive(Debug, Deserialize)]
pub struct SeedWall {
    pub from: Cell,
    pub to:   Cell,
    pub kind: WallKind,
}

/// One shell event.  Mirrors the board's public operations.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Toggle { side: Cell, across: Cell },
    Resize { width: u32, height: u32 },
    ResizeCanvas { width: f64, height: f64 },
    Increment { cell: Cell, delta: f64 },
    SetState { state: Vec<f64> },
    Click { x: f64, y: f64 },
    Scroll { x: f64, y: f64, delta: f64 },
    Mode { mode: Mode },
    ToggleMode,
    Step,
    Run { steps: u64 },
    Print,
}

impl Scenario {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scenario JSON")
    }

    /// Build the board the scenario starts from.
    pub fn build_board(&self) -> Result<Board> {
        let mut builder = BoardBuilder::new(self.config.clone())
            .walls(self.walls.iter().map(|w| (w.from, w.to, w.kind)));
        if let Some(state) = &self.initial_state {
            builder = builder.initial_state(state.clone());
        }
        Ok(builder.build()?)
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs the mass distribution after every step of a run.
struct TraceObserver;

impl BoardObserver for TraceObserver {
    fn on_step_end(&mut self, step: Step, state: &[f64]) {
        info!(%step, ?state, "step");
    }

    fn on_run_end(&mut self, final_step: Step) {
        info!(%final_step, "run complete");
    }
}

// ── Replay ────────────────────────────────────────────────────────────────────

/// Apply one command.  Rejected toggles and off-grid pointer events are
/// logged and skipped; hard errors abort the replay.
pub fn apply(board: &mut Board, command: &Command) -> Result<()> {
    match *command {
        Command::Toggle { side, across } => {
            let outcome = board.toggle_wall(side, across);
            if !outcome.changed() {
                warn!(%side, %across, "toggle ignored");
            }
        }
        Command::Resize { width, height } => {
            let pruned = board
                .resize_grid(width, height)
                .with_context(|| format!("resize to {width}x{height}"))?;
            info!(width, height, pruned, "resized");
        }
        Command::ResizeCanvas { width, height } => board.resize_canvas(width, height)?,
        Command::Increment { cell, delta } => {
            if !board.increment_cell(cell, delta) {
                warn!(%cell, "increment outside the grid");
            }
        }
        Command::SetState { ref state } => board.set_state(state)?,
        Command::Click { x, y } => {
            let outcome = board.click(CanvasPoint::new(x, y));
            info!(x, y, ?outcome, "click");
        }
        Command::Scroll { x, y, delta } => {
            if !board.scroll(CanvasPoint::new(x, y), delta) {
                warn!(x, y, "scroll outside the grid");
            }
        }
        Command::Mode { mode } => board.set_mode(mode),
        Command::ToggleMode => {
            let mode = board.toggle_mode();
            info!(%mode, "mode");
        }
        Command::Step => {
            board.step()?;
        }
        Command::Run { steps } => {
            board.run_steps(steps, &mut TraceObserver)?;
        }
        Command::Print => print_board(board),
    }
    Ok(())
}

pub fn print_board(board: &Board) {
    let dims = board.dims();
    println!(
        "── {} grid  |  mode: {}  |  step: {}  |  walls: {} ──",
        dims,
        board.mode(),
        board.steps(),
        board.walls().len()
    );
    for wall in board.walls().iter() {
        println!("  {wall}");
    }
    println!("transition matrix:");
    print!("{}", board.transition_matrix());

    // Rows of the grid, top to bottom.
    println!("state:");
    for r in 0..dims.height() as i32 {
        let row: Vec<String> = (0..dims.width() as i32)
            .map(|c| format!("{:>7.3}", board.grid().get(Cell::new(c, r)).unwrap_or(0.0)))
            .collect();
        println!("  {}", row.join(" "));
    }
    println!("total mass: {:.6}", board.grid().total_mass());
    println!();
}
