#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Game of Life engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and the pure rule system. The rule system reads an
//! immutable [`GridView`] and produces a batch of [`Operation`] values, the
//! batch is submitted to the world as a [`Command`], and the world reports
//! what it did through [`Event`] values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Cell is dead.
    #[default]
    Dead,
    /// Cell is alive.
    Alive,
}

impl CellState {
    /// Reports whether the state is [`CellState::Alive`].
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Upper-case label used by debug output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alive => "ALIVE",
            Self::Dead => "DEAD",
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Location of a single grid cell expressed as row and column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    row: u32,
    column: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// Fixed dimensions of a grid measured in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    rows: u32,
    columns: u32,
}

impl GridSize {
    /// Creates a new size descriptor with explicit dimensions.
    #[must_use]
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Total number of cells stored by a grid of this size.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Reports whether the cell lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.row() < self.rows && cell.column() < self.columns
    }

    /// Row-major storage index of the cell, or `None` when it lies outside the grid.
    #[must_use]
    pub fn index(&self, cell: CellCoord) -> Option<usize> {
        if self.contains(cell) {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }

    /// Iterator over every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |column| CellCoord::new(row, column)))
    }
}

/// Computed next state for a single cell awaiting application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    cell: CellCoord,
    state: CellState,
}

impl Operation {
    /// Creates a new pending change targeting the provided cell.
    #[must_use]
    pub const fn new(cell: CellCoord, state: CellState) -> Self {
        Self { cell, state }
    }

    /// Cell the operation writes to.
    #[must_use]
    pub const fn cell(&self) -> CellCoord {
        self.cell
    }

    /// State the cell holds once the operation is applied.
    #[must_use]
    pub const fn state(&self) -> CellState {
        self.state
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Operation[row={}, col={}, state={}]",
            self.cell.row(),
            self.cell.column(),
            self.state
        )
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Applies a fully evaluated generation and advances the generation counter.
    ApplyGeneration {
        /// Pending changes computed against the previous generation.
        operations: Vec<Operation>,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that the world completed a generation.
    GenerationAdvanced {
        /// Generation counter after the advance.
        generation: u64,
        /// Number of operations applied during the advance.
        changed: usize,
    },
    /// Reports that a command was rejected without touching the world.
    CommandRejected {
        /// Specific reason the command failed.
        reason: RejectionReason,
    },
}

/// Reasons a command may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// The command targets a cell outside the configured grid.
    OutOfBounds {
        /// Offending cell.
        cell: CellCoord,
    },
}

/// Read-only view into the dense cell grid.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    cells: &'a [CellState],
    size: GridSize,
}

impl<'a> GridView<'a> {
    /// Captures a new grid view backed by the provided cell slice.
    #[must_use]
    pub fn new(cells: &'a [CellState], size: GridSize) -> Self {
        Self { cells, size }
    }

    /// Returns the state of the provided cell, or `None` outside the grid.
    #[must_use]
    pub fn state(&self, cell: CellCoord) -> Option<CellState> {
        self.size
            .index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Reports whether the cell exists and is alive.
    #[must_use]
    pub fn is_alive(&self, cell: CellCoord) -> bool {
        self.state(cell).is_some_and(CellState::is_alive)
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellState> + 'a {
        self.cells.iter().copied()
    }

    /// Provides the dimensions of the underlying grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }
}
