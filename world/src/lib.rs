#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for the Game of Life.

mod grid;

use conway_core::{Command, Event, GridSize, Operation, RejectionReason};
use log::{debug, trace, warn};

pub use grid::Grid;

/// Represents the authoritative Game of Life world state.
#[derive(Clone, Debug)]
pub struct World {
    grid: Grid,
    generation: u64,
}

impl World {
    /// Creates a world of the provided size with every cell dead.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            grid: Grid::new(size),
            generation: 0,
        }
    }

    /// Creates a world seeded from a row-major liveness sequence.
    #[must_use]
    pub fn from_initializer(size: GridSize, initializer: &[bool]) -> Self {
        Self {
            grid: Grid::from_initializer(size, initializer),
            generation: 0,
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ApplyGeneration { operations } => {
            if let Some(operation) = first_out_of_bounds(&world.grid, &operations) {
                let cell = operation.cell();
                warn!(
                    "rejected generation {} batch: operation targets ({}, {}) outside the grid",
                    world.generation.saturating_add(1),
                    cell.row(),
                    cell.column()
                );
                out_events.push(Event::CommandRejected {
                    reason: RejectionReason::OutOfBounds { cell },
                });
                return;
            }

            for operation in &operations {
                trace!("applying {operation}");
                world.grid.set(operation.cell(), operation.state());
            }

            world.generation = world.generation.saturating_add(1);
            debug!(
                "advanced to generation {} with {} changed cells",
                world.generation,
                operations.len()
            );
            out_events.push(Event::GenerationAdvanced {
                generation: world.generation,
                changed: operations.len(),
            });
        }
    }
}

fn first_out_of_bounds<'a>(grid: &Grid, operations: &'a [Operation]) -> Option<&'a Operation> {
    let size = grid.size();
    operations
        .iter()
        .find(|operation| !size.contains(operation.cell()))
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use conway_core::{CellCoord, GridView};

    use super::{Grid, World};

    /// Provides read-only access to the world's cell grid.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        &world.grid
    }

    /// Captures a read-only view of the current generation's cells.
    #[must_use]
    pub fn grid_view(world: &World) -> GridView<'_> {
        world.grid.view()
    }

    /// Number of generations the world has completed.
    #[must_use]
    pub fn generation(world: &World) -> u64 {
        world.generation
    }

    /// Reports whether the provided cell is alive.
    ///
    /// # Panics
    ///
    /// Panics when `cell` lies outside the grid.
    #[must_use]
    pub fn is_cell_alive(world: &World, cell: CellCoord) -> bool {
        world.grid.get(cell).is_alive()
    }

    /// Reports whether any cell in the grid is alive.
    #[must_use]
    pub fn is_any_cell_alive(world: &World) -> bool {
        world.grid.view().iter().any(|state| state.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, query, World};
    use conway_core::{CellCoord, CellState, Command, Event, GridSize, Operation, RejectionReason};

    #[test]
    fn new_world_starts_at_generation_zero() {
        let world = World::new(GridSize::new(4, 4));
        assert_eq!(query::generation(&world), 0);
        assert!(!query::is_any_cell_alive(&world));
    }

    #[test]
    fn apply_generation_writes_batch_and_advances_counter() {
        let mut world = World::from_initializer(GridSize::new(2, 2), &[true, false, false, false]);
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::ApplyGeneration {
                operations: vec![
                    Operation::new(CellCoord::new(0, 0), CellState::Dead),
                    Operation::new(CellCoord::new(1, 1), CellState::Alive),
                ],
            },
            &mut events,
        );

        assert_eq!(query::generation(&world), 1);
        assert_eq!(query::grid(&world).alive_cells(), vec![CellCoord::new(1, 1)]);
        assert_eq!(
            events,
            vec![Event::GenerationAdvanced {
                generation: 1,
                changed: 2,
            }]
        );
    }

    #[test]
    fn empty_batch_still_advances_generation() {
        let mut world = World::new(GridSize::new(2, 2));
        let mut events = Vec::new();

        for _ in 0..3 {
            apply(
                &mut world,
                Command::ApplyGeneration {
                    operations: Vec::new(),
                },
                &mut events,
            );
        }

        assert_eq!(query::generation(&world), 3);
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn batch_with_out_of_bounds_operation_is_rejected_whole() {
        let mut world = World::new(GridSize::new(2, 2));
        let mut events = Vec::new();
        let stray = CellCoord::new(0, 9);

        apply(
            &mut world,
            Command::ApplyGeneration {
                operations: vec![
                    Operation::new(CellCoord::new(0, 0), CellState::Alive),
                    Operation::new(stray, CellState::Alive),
                ],
            },
            &mut events,
        );

        assert!(!query::is_any_cell_alive(&world), "no write may land");
        assert_eq!(query::generation(&world), 0);
        assert_eq!(
            events,
            vec![Event::CommandRejected {
                reason: RejectionReason::OutOfBounds { cell: stray },
            }]
        );
    }
}
