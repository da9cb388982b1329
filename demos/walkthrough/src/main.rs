//! walkthrough — replays a scripted shell session against a wall-grid board.
//!
//! Usage: `walkthrough [scenario.json]`.  Without an argument the built-in
//! two-cell scenario runs.  Set `RUST_LOG=debug` to see every toggle and
//! step.

mod script;

use std::env;
use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use script::{Scenario, apply, print_board};

const DEFAULT_SCENARIO: &str = include_str!("../scenarios/two_cell.json");

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wg_board=info,wg_walls=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let (name, json) = match env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            (path, json)
        }
        None => ("two_cell (built-in)".to_owned(), DEFAULT_SCENARIO.to_owned()),
    };

    let scenario = Scenario::parse(&json)?;
    println!("=== walkthrough — {name} ===");
    println!(
        "Grid: {}x{}  |  Canvas: {}x{}  |  Seed walls: {}  |  Commands: {}",
        scenario.config.width,
        scenario.config.height,
        scenario.config.canvas_width,
        scenario.config.canvas_height,
        scenario.walls.len(),
        scenario.commands.len()
    );
    println!();

    let mut board = scenario.build_board()?;

    let t0 = Instant::now();
    for (i, command) in scenario.commands.iter().enumerate() {
        apply(&mut board, command).with_context(|| format!("command #{i}: {command:?}"))?;
    }
    info!(elapsed_ms = t0.elapsed().as_secs_f64() * 1e3, "replay finished");

    println!("Final board:");
    print_board(&board);
    Ok(())
}
