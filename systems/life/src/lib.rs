#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Game of Life rule system and the simulation driver built on top of it.
//!
//! [`Simulation`] owns the authoritative [`World`] and advances it one
//! generation at a time. Every step runs in two phases: the rule engine in
//! [`rules`] evaluates each cell against an immutable snapshot of the current
//! generation, then the collected batch is submitted to the world, which
//! writes it and bumps the generation counter.

use std::fmt;

use conway_core::{CellCoord, Command, Event, GridSize};
use conway_world::{self as world, query, Grid, World};

pub mod rules;

pub use rules::Transition;

/// Owns a world and advances it by whole generations.
#[derive(Clone, Debug)]
pub struct Simulation {
    world: World,
    events: Vec<Event>,
}

impl Simulation {
    /// Creates a simulation of the provided size with every cell dead.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self::from_world(World::new(size))
    }

    /// Creates a simulation seeded from a row-major liveness sequence.
    ///
    /// Missing entries leave cells dead and surplus entries are ignored.
    #[must_use]
    pub fn from_initializer(size: GridSize, initializer: &[bool]) -> Self {
        Self::from_world(World::from_initializer(size, initializer))
    }

    fn from_world(world: World) -> Self {
        Self {
            world,
            events: Vec::new(),
        }
    }

    /// Number of completed generations.
    #[must_use]
    pub fn generation(&self) -> u64 {
        query::generation(&self.world)
    }

    /// Dimensions of the simulated grid.
    #[must_use]
    pub fn size(&self) -> GridSize {
        query::grid(&self.world).size()
    }

    /// Read-only access to the current generation's grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        query::grid(&self.world)
    }

    /// Reports whether the provided cell is alive.
    ///
    /// # Panics
    ///
    /// Panics when `cell` lies outside the grid.
    #[must_use]
    pub fn is_cell_alive(&self, cell: CellCoord) -> bool {
        query::is_cell_alive(&self.world, cell)
    }

    /// Reports whether any cell is alive. Scans the whole grid.
    #[must_use]
    pub fn is_any_cell_alive(&self) -> bool {
        query::is_any_cell_alive(&self.world)
    }

    /// Number of live neighbors of the provided cell, between 0 and 8.
    ///
    /// # Panics
    ///
    /// Panics when `cell` lies outside the grid.
    #[must_use]
    pub fn neighbor_count(&self, cell: CellCoord) -> u8 {
        let view = query::grid_view(&self.world);
        assert!(
            view.size().contains(cell),
            "cell ({}, {}) lies outside the {}x{} grid",
            cell.row(),
            cell.column(),
            view.size().rows(),
            view.size().columns()
        );
        rules::neighbor_count(&view, cell)
    }

    /// Advances the simulation by exactly one generation.
    pub fn step(&mut self) {
        let mut operations = Vec::new();
        rules::evaluate(&query::grid_view(&self.world), &mut operations);

        self.events.clear();
        world::apply(
            &mut self.world,
            Command::ApplyGeneration { operations },
            &mut self.events,
        );
    }

    /// Advances the simulation by `generations` steps and returns every event emitted.
    pub fn run(&mut self, generations: u64) -> Vec<Event> {
        let mut emitted = Vec::new();
        for _ in 0..generations {
            self.step();
            emitted.extend(self.events.iter().cloned());
        }
        emitted
    }

    /// Events emitted by the world during the most recent step.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Captures the generation, a rendering of the grid, and whether anything is alive.
    #[must_use]
    pub fn status(&self) -> StatusReport {
        StatusReport {
            generation: self.generation(),
            rendering: self.grid().to_string(),
            any_alive: self.is_any_cell_alive(),
        }
    }
}

/// Point-in-time summary of a simulation for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusReport {
    generation: u64,
    rendering: String,
    any_alive: bool,
}

impl StatusReport {
    /// Generation the report was captured at.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Bordered text rendering of the grid.
    #[must_use]
    pub fn rendering(&self) -> &str {
        &self.rendering
    }

    /// Whether any cell was alive when the report was captured.
    #[must_use]
    pub const fn any_alive(&self) -> bool {
        self.any_alive
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generation: {}", self.generation)?;
        writeln!(f, "{}", self.rendering)?;
        write!(f, "Any cell alive? {}", self.any_alive)
    }
}
