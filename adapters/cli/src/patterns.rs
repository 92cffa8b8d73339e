use clap::ValueEnum;
use conway_core::{CellCoord, GridSize};

/// Named starting pattern expressed relative to its own upper-left corner.
#[derive(Debug)]
pub(crate) struct Pattern {
    pub(crate) name: &'static str,
    pub(crate) cells: &'static [(u32, u32)],
}

const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

/// Patterns selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum PatternName {
    /// Period-two oscillator of three cells in a row.
    Blinker,
    /// Two-by-two still life.
    Block,
    /// Smallest spaceship, travels diagonally.
    Glider,
    /// Period-two oscillator of two offset rows.
    Toad,
    /// Period-two oscillator of two diagonal blocks.
    Beacon,
    /// Methuselah that runs for over a thousand generations on an open plane.
    RPentomino,
}

impl PatternName {
    pub(crate) const fn pattern(self) -> &'static Pattern {
        match self {
            Self::Blinker => &BLINKER,
            Self::Block => &BLOCK,
            Self::Glider => &GLIDER,
            Self::Toad => &TOAD,
            Self::Beacon => &BEACON,
            Self::RPentomino => &R_PENTOMINO,
        }
    }
}

impl Pattern {
    fn extent(&self) -> (u32, u32) {
        self.cells
            .iter()
            .fold((0, 0), |(rows, columns), &(row, column)| {
                (rows.max(row + 1), columns.max(column + 1))
            })
    }

    /// Places the pattern in the middle of the grid and returns the row-major seed.
    ///
    /// Cells that do not fit inside the grid are dropped.
    pub(crate) fn initializer(&self, size: GridSize) -> Vec<bool> {
        let (height, width) = self.extent();
        let row_offset = size.rows().saturating_sub(height) / 2;
        let column_offset = size.columns().saturating_sub(width) / 2;

        let mut initializer = vec![false; size.cell_count()];
        for &(row, column) in self.cells {
            let cell = CellCoord::new(row + row_offset, column + column_offset);
            if let Some(index) = size.index(cell) {
                initializer[index] = true;
            }
        }
        initializer
    }
}
