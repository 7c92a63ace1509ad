use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{
    grid::{Cell, Grid, Player},
    win, COLS, ROWS,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    Playing,
    HumanWin,
    EngineWin,
    Draw,
}

/// A game between a human and the engine, tracking whose turn it is
pub struct Game {
    grid: Grid,
    pub to_move: Player,
    pub history: String,
    pub state: GameState,
}

impl Game {
    pub fn new(first: Player) -> Self {
        Self {
            grid: Grid::new(),
            to_move: first,
            history: String::new(),
            state: GameState::Playing,
        }
    }

    pub fn from_moves(moves: &str, first: Player) -> Result<Self> {
        let mut game = Self::new(first);

        for column_char in moves.chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    if game.state != GameState::Playing {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    game.play_checked(column as usize)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(game)
    }

    /// The grid for the engine to search on, left as it was found once the search returns
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > COLS {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                COLS
            ));
        }
        let column = column_one_indexed - 1;
        if !self.grid.is_legal_move(column) {
            return Err(anyhow!("Invalid move, column {} full", column_one_indexed));
        }

        self.grid.place(column, self.to_move);
        self.history.push_str(&column_one_indexed.to_string());

        self.state = if self.grid.has_win(self.to_move) {
            match self.to_move {
                Player::Human => GameState::HumanWin,
                Player::Engine => GameState::EngineWin,
            }
        } else if self.grid.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.to_move = self.to_move.opponent();

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        // highlight the winning four once the game is decided
        let line = win::winning_line(&self.grid, Player::Human)
            .or_else(|| win::winning_line(&self.grid, Player::Engine));

        let cols: String = (1..=COLS).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in 0..ROWS {
            for column in 0..COLS {
                let cell = self.grid.cell(row, column);
                let highlighted = line.map_or(false, |line| line.contains(&(row, column)));

                let mut content = style("O").attribute(Attribute::Bold).on(Color::DarkBlue);
                if highlighted {
                    content = content.attribute(Attribute::Reverse);
                }
                stdout.queue(PrintStyledContent(content.with(match cell {
                    Cell::Human => Color::Red,
                    Cell::Engine => Color::Yellow,
                    Cell::Empty => Color::DarkBlue,
                })))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
