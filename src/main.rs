//! goboard: play or replay Go games from the command line.
//!
//! ## Usage
//!
//! - `goboard` - Random self-play on a 9x9 board
//! - `goboard selfplay --size 5 --seed 42` - Reproducible self-play
//! - `goboard replay C3 B3 pass pass` - Apply moves from a new game
//!
//! Set `RUST_LOG=debug` to see placements and captures on stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use goboard::agent::RandomAgent;
use goboard::constants::{DEFAULT_BOARD_SIZE, max_game_len};
use goboard::game::{GameState, Move};
use goboard::types::Player;

/// goboard: the rules of Go, played from the terminal
#[derive(Parser)]
#[command(name = "goboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Let two random agents play each other
    Selfplay {
        /// Board size (NxN)
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Stop after this many plies (defaults to three times the board area)
        #[arg(long)]
        max_moves: Option<usize>,
        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply a sequence of moves (e.g. `D4`, `pass`, `resign`), Black first
    Replay {
        /// Board size (NxN)
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        moves: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay {
            size,
            max_moves,
            seed,
        }) => run_selfplay(size, max_moves, seed),
        Some(Commands::Replay { size, moves }) => run_replay(size, &moves),
        None => run_selfplay(DEFAULT_BOARD_SIZE, None, None),
    }
}

fn run_selfplay(size: usize, max_moves: Option<usize>, seed: Option<u64>) -> Result<()> {
    let mut game = GameState::new_game(size).context("cannot start a new game")?;
    let mut black = seed.map_or_else(RandomAgent::new, RandomAgent::with_seed);
    let mut white =
        seed.map_or_else(RandomAgent::new, |s| RandomAgent::with_seed(s.wrapping_add(1)));
    let max_moves = max_moves.unwrap_or_else(|| max_game_len(size));

    let mut plies = 0;
    while !game.is_over() && plies < max_moves {
        let player = game.next_player();
        let agent = match player {
            Player::Black => &mut black,
            Player::White => &mut white,
        };
        let mv = agent.select_move(&game);
        game = game
            .apply_move(mv)
            .with_context(|| format!("{player} could not play {mv}"))?;
        plies += 1;

        println!("{player} {mv}");
        println!("{}", game.board());
    }

    print_result(&game, plies);
    Ok(())
}

fn run_replay(size: usize, moves: &[String]) -> Result<()> {
    let mut game = GameState::new_game(size).context("cannot start a new game")?;
    for (i, text) in moves.iter().enumerate() {
        let mv: Move = text
            .parse()
            .with_context(|| format!("move {}: cannot parse {text:?}", i + 1))?;
        game = game
            .apply_move(mv)
            .with_context(|| format!("move {}: {text} is not playable", i + 1))?;
        if game.is_over() && i + 1 < moves.len() {
            println!("game ended after move {}; ignoring the rest", i + 1);
            break;
        }
    }

    println!("{}", game.board());
    print_result(&game, game.history().count() - 1);
    Ok(())
}

fn print_result(game: &GameState, plies: usize) {
    if !game.is_over() {
        println!("{plies} plies played, game not over; {} to move", game.next_player());
        return;
    }
    match game.last_move() {
        Some(Move::Resign) => {
            // The resigning player is the one who just moved
            println!("{} resigned after {plies} plies", game.next_player().other());
        }
        _ => println!("both players passed after {plies} plies"),
    }
}
