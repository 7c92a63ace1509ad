//! Detection of four-in-a-row over the whole grid

use crate::{
    grid::{Grid, Player},
    COLS, ROWS, WIN_LENGTH,
};

// right, down, up-left, up-right as (row, column) steps
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, -1), (-1, 1)];

/// Returns whether `player` has a run of `WIN_LENGTH` anywhere on the grid
pub fn has_win(grid: &Grid, player: Player) -> bool {
    winning_line(grid, player).is_some()
}

/// Returns the cells of the first winning run of `player`, scanning from the top-left
pub fn winning_line(grid: &Grid, player: Player) -> Option<[(usize, usize); WIN_LENGTH]> {
    let marker = player.cell();
    for row in 0..ROWS {
        for column in 0..COLS {
            if grid.cell(row, column) != marker {
                continue;
            }
            for &direction in DIRECTIONS.iter() {
                if let Some(line) = run_from(grid, (row, column), direction, player) {
                    return Some(line);
                }
            }
        }
    }
    None
}

fn run_from(
    grid: &Grid,
    (row, column): (usize, usize),
    (dy, dx): (isize, isize),
    player: Player,
) -> Option<[(usize, usize); WIN_LENGTH]> {
    let reach = (WIN_LENGTH - 1) as isize;
    let (end_y, end_x) = (row as isize + dy * reach, column as isize + dx * reach);
    if end_y < 0 || end_y >= ROWS as isize || end_x < 0 || end_x >= COLS as isize {
        return None;
    }

    let mut line = [(row, column); WIN_LENGTH];
    for (step, cell) in line.iter_mut().enumerate() {
        let y = (row as isize + dy * step as isize) as usize;
        let x = (column as isize + dx * step as isize) as usize;
        if grid.cell(y, x) != player.cell() {
            return None;
        }
        *cell = (y, x);
    }
    Some(line)
}
