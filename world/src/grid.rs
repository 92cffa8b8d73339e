use std::fmt;

use conway_core::{CellCoord, CellState, GridSize, GridView};

const ALIVE_GLYPH: &str = "\u{25fc} ";
const DEAD_GLYPH: &str = "  ";

/// Dense row-major storage for every cell of the world.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid of the provided size with every cell dead.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![CellState::Dead; size.cell_count()],
        }
    }

    /// Creates a grid seeded from a row-major liveness sequence.
    ///
    /// Entry `i` marks the cell at index `i` alive when `true`. The sequence
    /// does not need to match the grid: cells past its end stay dead and
    /// entries past the last cell are ignored.
    #[must_use]
    pub fn from_initializer(size: GridSize, initializer: &[bool]) -> Self {
        let mut grid = Self::new(size);
        for (cell, alive) in grid.cells.iter_mut().zip(initializer) {
            *cell = CellState::from(*alive);
        }
        grid
    }

    /// Dimensions of the grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// State of the provided cell.
    ///
    /// # Panics
    ///
    /// Panics when `cell` lies outside the grid.
    #[must_use]
    pub fn get(&self, cell: CellCoord) -> CellState {
        self.cells[self.checked_index(cell)]
    }

    /// State of the provided cell, or `None` when it lies outside the grid.
    #[must_use]
    pub fn try_get(&self, cell: CellCoord) -> Option<CellState> {
        self.size
            .index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// `"ALIVE"` or `"DEAD"` for the provided cell.
    ///
    /// # Panics
    ///
    /// Panics when `cell` lies outside the grid.
    #[must_use]
    pub fn display_string(&self, cell: CellCoord) -> &'static str {
        self.get(cell).label()
    }

    /// Overwrites the state of the provided cell.
    ///
    /// # Panics
    ///
    /// Panics when `cell` lies outside the grid.
    pub fn set(&mut self, cell: CellCoord, state: CellState) {
        let index = self.checked_index(cell);
        self.cells[index] = state;
    }

    /// Every live cell in row-major order.
    #[must_use]
    pub fn alive_cells(&self) -> Vec<CellCoord> {
        self.size
            .cells()
            .zip(&self.cells)
            .filter(|(_, state)| state.is_alive())
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Captures a read-only view of the current cell states.
    #[must_use]
    pub fn view(&self) -> GridView<'_> {
        GridView::new(&self.cells, self.size)
    }

    fn checked_index(&self, cell: CellCoord) -> usize {
        match self.size.index(cell) {
            Some(index) => index,
            None => panic!(
                "cell ({}, {}) lies outside the {}x{} grid",
                cell.row(),
                cell.column(),
                self.size.rows(),
                self.size.columns()
            ),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.columns() as usize * 2 + 2;
        let divider = "-".repeat(width);

        writeln!(f, "{divider}")?;
        for row in 0..self.size.rows() {
            f.write_str("|")?;
            for column in 0..self.size.columns() {
                let glyph = if self.get(CellCoord::new(row, column)).is_alive() {
                    ALIVE_GLYPH
                } else {
                    DEAD_GLYPH
                };
                f.write_str(glyph)?;
            }
            writeln!(f, "|")?;
        }
        f.write_str(&divider)
    }
}
