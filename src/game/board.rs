pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of discs a board holds when every cell is filled.
pub const CAPACITY: usize = ROWS * COLS;

/// Step directions checked from every occupied cell: right, down, down-right,
/// down-left. Scanning every cell covers the opposite sense of each line.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Row-major view of the grid, top row first.
    pub fn cells(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Check if a column is full (columns past the edge count as full)
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// `None` when the column is full or off the board.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Option<usize> {
        if col >= COLS {
            return None;
        }

        let row = (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)?;
        self.cells[row][col] = cell;
        Some(row)
    }

    /// Count of occupied cells
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check whether any four-in-a-row exists anywhere on the board.
    pub fn has_win(&self) -> bool {
        self.winning_line().is_some()
    }

    /// Find the first line of four identical discs, scanning top-left to
    /// bottom-right. Returns the `(row, col)` of each disc in the line.
    pub fn winning_line(&self) -> Option<[(usize, usize); 4]> {
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = self.cells[row][col];
                if cell == Cell::Empty {
                    continue;
                }
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(line) = self.line_from(row, col, dr, dc, cell) {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    /// Collect four cells starting at `(row, col)` stepping by `(dr, dc)`,
    /// provided all of them stay on the board and hold `cell`.
    fn line_from(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        cell: Cell,
    ) -> Option<[(usize, usize); 4]> {
        let mut line = [(row, col); 4];
        for (step, slot) in line.iter_mut().enumerate().skip(1) {
            let r = row.checked_add_signed(dr * step as isize)?;
            let c = col.checked_add_signed(dc * step as isize)?;
            if r >= ROWS || c >= COLS || self.cells[r][c] != cell {
                return None;
            }
            *slot = (r, c);
        }
        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
