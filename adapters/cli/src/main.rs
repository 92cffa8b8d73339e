#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Game of Life simulation and prints its progress.

mod patterns;
mod seed_transfer;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use conway_core::GridSize;
use conway_system_life::Simulation;
use log::info;

use crate::{
    patterns::PatternName,
    seed_transfer::{within_cell_limit, SeedSnapshot, MAX_CELLS},
};

/// Runs Conway's Game of Life on a bounded grid.
#[derive(Debug, Parser)]
#[command(name = "conway", version)]
struct Cli {
    /// Number of grid rows.
    #[arg(long, default_value_t = 10)]
    rows: u32,
    /// Number of grid columns.
    #[arg(long, default_value_t = 10)]
    columns: u32,
    /// Number of generations to simulate.
    #[arg(short, long, default_value_t = 10)]
    generations: u64,
    /// Built-in pattern placed in the middle of the grid.
    #[arg(short, long, value_enum, default_value_t = PatternName::Blinker)]
    pattern: PatternName,
    /// Seed string produced by `--export`; overrides the pattern and dimensions.
    #[arg(long)]
    seed: Option<String>,
    /// Print a status report every N generations.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,
    /// Print a seed string of the final grid after the run.
    #[arg(long)]
    export: bool,
}

/// Entry point for the Game of Life command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut simulation = seed_simulation(&cli)?;
    print_status(&simulation);

    for _ in 0..cli.generations {
        simulation.step();
        if simulation.generation() % cli.every == 0 {
            print_status(&simulation);
        }
    }

    if cli.export {
        println!("{}", SeedSnapshot::capture(simulation.grid()).encode());
    }

    Ok(())
}

fn seed_simulation(cli: &Cli) -> Result<Simulation> {
    if let Some(seed) = &cli.seed {
        let snapshot = SeedSnapshot::decode(seed).context("failed to decode --seed")?;
        let size = snapshot.size();
        info!(
            "seeding {} live cells on a {}x{} grid",
            snapshot.alive.len(),
            size.rows(),
            size.columns()
        );
        return Ok(Simulation::from_initializer(size, &snapshot.initializer()));
    }

    ensure!(
        within_cell_limit(cli.rows, cli.columns),
        "a {}x{} grid exceeds the limit of {MAX_CELLS} cells",
        cli.rows,
        cli.columns
    );
    let size = GridSize::new(cli.rows, cli.columns);
    let pattern = cli.pattern.pattern();
    info!(
        "seeding {} on a {}x{} grid",
        pattern.name,
        size.rows(),
        size.columns()
    );
    Ok(Simulation::from_initializer(size, &pattern.initializer(size)))
}

fn print_status(simulation: &Simulation) {
    println!("{}\n", simulation.status());
}

#[cfg(test)]
mod tests {
    use super::{seed_simulation, Cli};
    use clap::Parser;

    #[test]
    fn defaults_run_a_centered_blinker() {
        let cli = Cli::parse_from(["conway"]);
        assert_eq!(cli.rows, 10);
        assert_eq!(cli.columns, 10);
        assert_eq!(cli.generations, 10);

        let simulation = seed_simulation(&cli).expect("default seed");
        assert_eq!(simulation.grid().alive_cells().len(), 3);
    }

    #[test]
    fn seed_string_overrides_dimensions() {
        let cli = Cli::parse_from([
            "conway",
            "--rows",
            "3",
            "--seed",
            "life:v1:2x4:eyJhbGl2ZSI6W119",
        ]);

        let simulation = seed_simulation(&cli).expect("seed decodes");
        assert_eq!(simulation.size().rows(), 2);
        assert_eq!(simulation.size().columns(), 4);
        assert!(!simulation.is_any_cell_alive());
    }

    #[test]
    fn malformed_seed_is_reported() {
        let cli = Cli::parse_from(["conway", "--seed", "life:v1:2x4"]);
        let error = seed_simulation(&cli).expect_err("seed is incomplete");
        assert!(format!("{error:#}").contains("missing the payload"));
    }

    #[test]
    fn oversized_grid_is_reported() {
        let cli = Cli::parse_from(["conway", "--rows", "4294967295", "--columns", "4294967295"]);
        let error = seed_simulation(&cli).expect_err("grid is too large");
        assert!(error.to_string().contains("exceeds the limit"));
    }

    #[test]
    fn oversized_seed_is_reported() {
        let cli = Cli::parse_from(["conway", "--seed", "life:v1:100000x100000:eyJhbGl2ZSI6W119"]);
        let error = seed_simulation(&cli).expect_err("seed grid is too large");
        assert!(format!("{error:#}").contains("could not parse grid dimensions"));
    }

    #[test]
    fn zero_report_interval_is_rejected() {
        assert!(Cli::try_parse_from(["conway", "--every", "0"]).is_err());
    }
}
