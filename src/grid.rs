use anyhow::{anyhow, Result};

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::{win, COLS, ROWS};

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    Human,
    Engine,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Engine,
            Player::Engine => Player::Human,
        }
    }

    /// The marker this player leaves on the grid
    pub fn cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Engine => Cell::Engine,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Human,
    Engine,
    Empty,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Cell::Human => 'X',
            Cell::Engine => 'O',
            Cell::Empty => '.',
        }
    }

    fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'X' | 'x' => Some(Cell::Human),
            'O' | 'o' => Some(Cell::Engine),
            '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// The game board and its per-column fill counters
///
/// Row `0` is the top of the board, row `ROWS - 1` the bottom. Pieces fall to
/// the lowest empty row of their column, so `heights[c]` is always the number
/// of occupied cells in column `c`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Builds a position from a string of 1-indexed column digits, players alternating
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Player) -> Result<Self> {
        let mut grid = Self::new();
        let mut player = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=COLS) => {
                    let column = column - 1;
                    if !grid.is_legal_move(column) {
                        return Err(anyhow!("Invalid move, column {} full", column + 1));
                    }
                    // abort if the position is won at any point
                    if grid.has_win(Player::Human) || grid.has_win(Player::Engine) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    grid.place(column, player);
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(grid)
    }

    /// Builds a position from one string per row, top row first, using `X`, `O` and `.`
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        if rows.len() != ROWS {
            return Err(anyhow!("expected {} rows, got {}", ROWS, rows.len()));
        }
        let mut grid = Self::new();

        for (row, line) in rows.iter().enumerate() {
            let markers: Vec<char> = line.chars().collect();
            if markers.len() != COLS {
                return Err(anyhow!(
                    "row {} has {} cells, expected {}",
                    row,
                    markers.len(),
                    COLS
                ));
            }
            for (column, &marker) in markers.iter().enumerate() {
                grid.cells[row][column] = Cell::from_marker(marker)
                    .ok_or_else(|| anyhow!("unknown cell marker '{}'", marker))?;
            }
        }

        for column in 0..COLS {
            let height = (0..ROWS)
                .rev()
                .take_while(|&row| !grid.cells[row][column].is_empty())
                .count();
            // every piece above the stack would be floating
            if (0..ROWS - height).any(|row| !grid.cells[row][column].is_empty()) {
                return Err(anyhow!("column {} has a floating piece", column + 1));
            }
            grid.heights[column] = height;
        }
        Ok(grid)
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    pub fn num_moves(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Drops `player`'s marker into `column`
    ///
    /// The move must be legal, see [`Grid::is_legal_move`]
    pub fn place(&mut self, column: usize, player: Player) {
        debug_assert!(self.is_legal_move(column), "column {} is not playable", column);
        let row = ROWS - 1 - self.heights[column];
        self.cells[row][column] = player.cell();
        self.heights[column] += 1;
    }

    /// Removes the most recently placed marker in `column`
    ///
    /// The column must not be empty
    pub fn unplace(&mut self, column: usize) {
        debug_assert!(self.heights[column] > 0, "column {} is empty", column);
        let row = ROWS - self.heights[column];
        self.cells[row][column] = Cell::Empty;
        self.heights[column] -= 1;
    }

    /// Places a marker for the lifetime of the returned guard, which undoes the move when dropped
    pub fn placed(&mut self, column: usize, player: Player) -> Placed<'_> {
        self.place(column, player);
        Placed { grid: self, column }
    }

    pub fn is_legal_move(&self, column: usize) -> bool {
        column < COLS && self.heights[column] < ROWS
    }

    pub fn is_full(&self) -> bool {
        self.num_moves() == ROWS * COLS
    }

    pub fn has_win(&self, player: Player) -> bool {
        win::has_win(self, player)
    }

    #[cfg(test)]
    pub(crate) fn set_unchecked(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row][column] = cell;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: String = (1..=COLS).map(|x| x.to_string()).collect();
        writeln!(f, " {}", header)?;
        for row in self.cells.iter() {
            let line: String = row.iter().map(|cell| cell.marker()).collect();
            writeln!(f, "|{}|", line)?;
        }
        write!(f, "+{}+", "-".repeat(COLS))
    }
}

/// A move that is taken back when the guard goes out of scope
pub struct Placed<'a> {
    grid: &'a mut Grid,
    column: usize,
}

impl Deref for Placed<'_> {
    type Target = Grid;

    fn deref(&self) -> &Self::Target {
        self.grid
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.grid
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.grid.unplace(self.column);
    }
}
