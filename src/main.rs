#![warn(clippy::all)]

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use text_life::{Config, Grid, Pacer, Simulation, TerminalScreen};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _unused = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let config = Config::parse();

    let grid = Grid::random(config.rows, config.cols, config.seed)
        .context("failed to create the grid")?;
    let mut simulation = Simulation::with_grid(grid, config.steps);

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = interrupted.clone();
        ctrlc::set_handler(move || interrupted.store(true, Ordering::Relaxed))
            .context("failed to install the Ctrl-C handler")?;
    }

    let mut screen = TerminalScreen::stdout(Pacer::from_millis(config.delay_ms), !config.no_clear);
    simulation
        .run_until(&mut screen, || interrupted.load(Ordering::Relaxed))
        .context("failed to display a generation")?;
    Ok(())
}
