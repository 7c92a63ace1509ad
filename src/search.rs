//! A depth-limited minimax agent with alpha-beta pruning

use anyhow::{anyhow, Result};
use tracing::{debug, trace};

use crate::{
    evaluator,
    grid::{Grid, Player},
    COLS, MAX_SEARCH_DEPTH,
};

/// The score of a position the engine has won, negated for a position the human has won
///
/// Larger in magnitude than any heuristic score
pub const WIN_SCORE: i32 = 100_000_000;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchConfig {
    /// Plies searched below the root position
    pub depth: usize,
    /// Whether to cut off siblings once `alpha >= beta`
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: MAX_SEARCH_DEPTH,
            pruning: true,
        }
    }
}

/// A move picked at the root of the search, with the score it achieved
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Choice {
    pub column: usize,
    pub score: i32,
}

/// An agent choosing moves by minimax search
///
/// # Notes
/// The engine is always the maximising side and the human the minimising side,
/// whichever of them is to move. Positions the engine has won score
/// [`WIN_SCORE`], positions the human has won `-WIN_SCORE`, full boards 0, and
/// positions at the search horizon are scored by [`evaluator::score`] for the
/// side to move.
///
/// The grid is borrowed mutably for the duration of a search and every move
/// tried is taken back before the search returns, so the caller sees the grid
/// unchanged.
#[derive(Clone, Debug, Default)]
pub struct Searcher {
    config: SearchConfig,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` searching `MAX_SEARCH_DEPTH` plies with pruning
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            node_count: 0,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Picks the best column for `player` searching with an unbounded window
    pub fn choose_move(&mut self, grid: &mut Grid, player: Player) -> Result<Choice> {
        self.choose_move_within(grid, player, i32::MIN, i32::MAX)
    }

    /// Picks the best column for `player` searching with the window `alpha..beta`
    ///
    /// Fails if the game on `grid` is already over or the configured depth is zero
    pub fn choose_move_within(
        &mut self,
        grid: &mut Grid,
        player: Player,
        alpha: i32,
        beta: i32,
    ) -> Result<Choice> {
        if self.config.depth == 0 {
            return Err(anyhow!("search depth must be at least one ply"));
        }
        if grid.has_win(Player::Engine) || grid.has_win(Player::Human) {
            return Err(anyhow!("Invalid position, game is over"));
        }
        if grid.is_full() {
            return Err(anyhow!("no legal moves, the grid is full"));
        }

        let nodes_before = self.node_count;
        let choice = self
            .explore(grid, player, self.config.depth, alpha, beta, true)
            .ok_or_else(|| anyhow!("no legal moves, the grid is full"))?;

        debug!(
            column = choice.column,
            score = choice.score,
            nodes = self.node_count - nodes_before,
            "chose move for {:?}",
            player
        );
        Ok(choice)
    }

    /// Scores the position on `grid` with `player` to move, searching `depth` plies
    pub fn evaluate_node(
        &mut self,
        grid: &mut Grid,
        player: Player,
        depth: usize,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.node_count += 1;

        if grid.has_win(Player::Engine) {
            return WIN_SCORE;
        }
        if grid.has_win(Player::Human) {
            return -WIN_SCORE;
        }
        if grid.is_full() {
            return 0;
        }
        if depth == 0 {
            return evaluator::score(grid, player);
        }

        self.explore(grid, player, depth, alpha, beta, false)
            .map_or(0, |choice| choice.score)
    }

    /// Tries every legal column in ascending order and returns the best for `player`
    ///
    /// Ties keep the earliest column. Returns `None` only if no column is playable.
    fn explore(
        &mut self,
        grid: &mut Grid,
        player: Player,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        root: bool,
    ) -> Option<Choice> {
        let mut best: Option<Choice> = None;

        for column in 0..COLS {
            if grid.is_legal_move(column) {
                let score = {
                    let mut child = grid.placed(column, player);
                    self.evaluate_node(&mut child, player.opponent(), depth - 1, alpha, beta)
                };
                if root {
                    trace!(column, score, "root move scored");
                }

                let improves = match (player, best) {
                    (_, None) => true,
                    (Player::Engine, Some(current)) => score > current.score,
                    (Player::Human, Some(current)) => score < current.score,
                };
                if improves {
                    best = Some(Choice { column, score });
                }

                match player {
                    Player::Engine => alpha = alpha.max(score),
                    Player::Human => beta = beta.min(score),
                }
            }
            if self.config.pruning && alpha >= beta {
                break;
            }
        }
        best
    }
}
