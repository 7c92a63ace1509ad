//! Heuristic scoring of positions at the search horizon

use crate::{
    grid::{Cell, Grid, Player},
    COLS, ROWS, WIN_LENGTH,
};

/// The column taking part in the most windows
pub const CENTER_COLUMN: usize = COLS / 2;

/// Bonus for each of the player's markers in the centre column
pub const CENTER_BONUS: i32 = 2;

// right, down, down-right, up-right as (row, column) steps
static WINDOW_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Scores the grid from the point of view of `player`
///
/// Every window of `WIN_LENGTH` cells is scored by how many of its cells each
/// side holds (see [`window_score`]), and the player's centre-column markers
/// earn [`CENTER_BONUS`] each. Only the relative order of scores is meaningful.
pub fn score(grid: &Grid, player: Player) -> i32 {
    let own = player.cell();
    let other = player.opponent().cell();

    let center: i32 = (0..ROWS)
        .filter(|&row| grid.cell(row, CENTER_COLUMN) == own)
        .map(|_| CENTER_BONUS)
        .sum();

    let windows: i32 = windows()
        .map(|window| {
            let cells = window.iter().map(|&(row, column)| grid.cell(row, column));
            let (player_count, opponent_count) =
                cells.fold((0, 0), |(mine, theirs), cell: Cell| {
                    if cell == own {
                        (mine + 1, theirs)
                    } else if cell == other {
                        (mine, theirs + 1)
                    } else {
                        (mine, theirs)
                    }
                });
            window_score(player_count, opponent_count)
        })
        .sum();

    center + windows
}

/// The contribution of a single window holding `player_count` of the player's
/// markers and `opponent_count` of the opponent's
pub fn window_score(player_count: usize, opponent_count: usize) -> i32 {
    match (player_count, opponent_count) {
        (4, _) => 100,
        (3, 0) => 6,
        (2, 0) => 2,
        (0, 3) => -4,
        _ => 0,
    }
}

/// Every run of `WIN_LENGTH` cells that lies entirely on the grid
pub fn windows() -> impl Iterator<Item = [(usize, usize); WIN_LENGTH]> {
    let reach = (WIN_LENGTH - 1) as isize;
    (0..ROWS)
        .flat_map(|row| (0..COLS).map(move |column| (row, column)))
        .flat_map(|start| WINDOW_DIRECTIONS.iter().map(move |&direction| (start, direction)))
        .filter(move |&((row, column), (dy, dx))| {
            let end_y = row as isize + dy * reach;
            let end_x = column as isize + dx * reach;
            end_y >= 0 && end_y < ROWS as isize && end_x >= 0 && end_x < COLS as isize
        })
        .map(|((row, column), (dy, dx))| {
            let mut window = [(row, column); WIN_LENGTH];
            for (step, cell) in window.iter_mut().enumerate() {
                *cell = (
                    (row as isize + dy * step as isize) as usize,
                    (column as isize + dx * step as isize) as usize,
                );
            }
            window
        })
}
