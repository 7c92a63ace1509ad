use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    grid::Player,
    search::{Searcher, WIN_SCORE},
};

mod game;
use game::*;

#[derive(Parser)]
struct Args {
    /// Let the engine make the first move
    #[arg(short, long, default_value_t = false)]
    engine_first: bool,

    /// Start from a position given as 1-indexed columns, e.g. "4453"
    #[arg(short, long)]
    moves: Option<String>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let first = if args.engine_first {
        Player::Engine
    } else {
        Player::Human
    };
    let mut game = match &args.moves {
        Some(moves) => Game::from_moves(moves, first)?,
        None => Game::new(first),
    };
    let mut searcher = Searcher::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        game.display()?;

        match game.state {
            GameState::Playing => {
                let next_move = match game.to_move {
                    Player::Engine => {
                        println!("Engine is thinking...");
                        stdout().flush()?;

                        let choice = searcher.choose_move(game.grid_mut(), Player::Engine)?;
                        info!(history = %game.history, nodes = searcher.node_count, "engine searched");

                        if choice.score == WIN_SCORE {
                            println!("The engine can force a win.");
                        } else if choice.score == -WIN_SCORE {
                            println!("The engine cannot stop a human win with best play.");
                        }
                        println!("Engine plays: {}", choice.column + 1);
                        choice.column + 1
                    }
                    Player::Human => {
                        print!("Move input > ");
                        stdout().flush()?;
                        let mut input_str = String::new();
                        if stdin.read_line(&mut input_str)? == 0 {
                            println!();
                            return Ok(());
                        }

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    }
                };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::HumanWin => {
                println!("You win!");
                break;
            }
            GameState::EngineWin => {
                println!("The engine wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
