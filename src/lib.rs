//! goboard: the rules of Go as an immutable game-state API.
//!
//! This crate tracks board occupancy, stone groups and their liberties,
//! captures, and turn-by-turn game states. Every move produces a new
//! [`GameState`](game::GameState) and leaves the old one untouched, so
//! states can be explored freely by search code built on top.
//!
//! Ko, superko and scoring are not part of the rules here. A game ends on
//! two consecutive passes or a resignation.
//!
//! ## Modules
//!
//! - [`types`] - Points and players
//! - [`group`] - Stone groups and their liberties
//! - [`board`] - Stone placement and capture
//! - [`game`] - Moves and game states
//! - [`agent`] - A random-move agent
//! - [`constants`] - Board-size limits and rendering characters
//! - [`error`] - The error type
//!
//! ## Example
//!
//! ```
//! use goboard::game::{GameState, Move};
//! use goboard::types::Point;
//!
//! let game = GameState::new_game(9)?;
//! let game = game.apply_move(Move::play(Point::new(3, 3)))?;
//! let game = game.apply_move(Move::pass_turn())?;
//! let game = game.apply_move(Move::pass_turn())?;
//! assert!(game.is_over());
//! println!("{}", game.board());
//! # Ok::<(), goboard::error::GoError>(())
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod group;
pub mod types;

pub use error::{GoError, Result};
