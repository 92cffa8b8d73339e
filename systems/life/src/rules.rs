//! Conway's rule table and the evaluate phase of a generation step.

use conway_core::{CellCoord, CellState, GridView, Operation};
use log::trace;

// 0 1 2
// 3 X 4
// 5 6 7
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Outcome of applying the rule table to a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Live cell with fewer than two live neighbors dies.
    UnderPopulation,
    /// Live cell with two or three live neighbors lives on.
    Survival,
    /// Live cell with more than three live neighbors dies.
    Overcrowding,
    /// Dead cell with exactly three live neighbors comes alive.
    Reproduction,
    /// Dead cell without exactly three live neighbors stays dead.
    StaysDead,
}

impl Transition {
    /// Classifies a cell from its current liveness and live neighbor count.
    #[must_use]
    pub const fn classify(alive: bool, neighbors: u8) -> Self {
        match (alive, neighbors) {
            (true, 0..=1) => Self::UnderPopulation,
            (true, 2..=3) => Self::Survival,
            (true, _) => Self::Overcrowding,
            (false, 3) => Self::Reproduction,
            (false, _) => Self::StaysDead,
        }
    }

    /// State that must be written for this transition, or `None` when the cell keeps its state.
    #[must_use]
    pub const fn next_state(self) -> Option<CellState> {
        match self {
            Self::UnderPopulation | Self::Overcrowding => Some(CellState::Dead),
            Self::Reproduction => Some(CellState::Alive),
            Self::Survival | Self::StaysDead => None,
        }
    }

    /// Short human-readable name of the rule that fired.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderPopulation => "under-population",
            Self::Survival => "survival",
            Self::Overcrowding => "overcrowding",
            Self::Reproduction => "reproduction",
            Self::StaysDead => "stays dead",
        }
    }
}

/// Counts live cells among the up to eight grid-adjacent neighbors of `cell`.
///
/// Positions outside the grid do not exist and are never counted; the grid
/// does not wrap around.
#[must_use]
pub fn neighbor_count(view: &GridView<'_>, cell: CellCoord) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(row_delta, column_delta)| offset(cell, row_delta, column_delta))
        .filter(|neighbor| view.is_alive(*neighbor))
        .fold(0, |count, _| count + 1)
}

/// Evaluates every cell of `view` in row-major order and appends the resulting changes.
///
/// Only cells whose state changes produce an [`Operation`]. The view is a
/// single immutable snapshot, so no evaluation observes another cell's next
/// state.
pub fn evaluate(view: &GridView<'_>, out: &mut Vec<Operation>) {
    for cell in view.size().cells() {
        let alive = view.is_alive(cell);
        let transition = Transition::classify(alive, neighbor_count(view, cell));
        if let Some(state) = transition.next_state() {
            trace!(
                "({}, {}) -> {state} by {}",
                cell.row(),
                cell.column(),
                transition.label()
            );
            out.push(Operation::new(cell, state));
        }
    }
}

fn offset(cell: CellCoord, row_delta: i32, column_delta: i32) -> Option<CellCoord> {
    let row = cell.row().checked_add_signed(row_delta)?;
    let column = cell.column().checked_add_signed(column_delta)?;
    Some(CellCoord::new(row, column))
}
