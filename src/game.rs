//! Moves and immutable game states.
//!
//! A game is a chain of [`GameState`] snapshots, each pointing back at the
//! one it was derived from. Applying a move never changes the state it is
//! applied to, so any state can be branched from freely during lookahead.

use std::fmt;
use std::iter;
use std::rc::Rc;
use std::str::FromStr;

use tracing::info;

use crate::board::Board;
use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GoError, Result};
use crate::types::{Player, Point};

/// One ply: place a stone, pass, or resign.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Point),
    Pass,
    Resign,
}

impl Move {
    pub fn play(point: Point) -> Self {
        Move::Play(point)
    }

    pub fn pass_turn() -> Self {
        Move::Pass
    }

    pub fn resign() -> Self {
        Move::Resign
    }

    /// Build a move from loose flags.
    ///
    /// # Errors
    /// [`GoError::InvalidMove`] unless exactly one of `point`, `is_pass` and
    /// `is_resign` is set.
    pub fn new(point: Option<Point>, is_pass: bool, is_resign: bool) -> Result<Self> {
        match (point, is_pass, is_resign) {
            (Some(p), false, false) => Ok(Move::Play(p)),
            (None, true, false) => Ok(Move::Pass),
            (None, false, true) => Ok(Move::Resign),
            _ => Err(GoError::InvalidMove),
        }
    }

    pub fn is_play(&self) -> bool {
        matches!(self, Move::Play(_))
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn is_resign(&self) -> bool {
        matches!(self, Move::Resign)
    }

    /// The point played, for [`Move::Play`].
    pub fn point(&self) -> Option<Point> {
        match self {
            Move::Play(p) => Some(*p),
            _ => None,
        }
    }
}

/// Parse `"pass"`, `"resign"` (any case) or a vertex such as `"D4"`.
impl FromStr for Move {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") {
            Ok(Move::Pass)
        } else if s.eq_ignore_ascii_case("resign") {
            Ok(Move::Resign)
        } else {
            s.parse().map(Move::Play)
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(p) => write!(f, "{p}"),
            Move::Pass => f.write_str("pass"),
            Move::Resign => f.write_str("resign"),
        }
    }
}

/// An immutable snapshot of a game after some number of plies.
///
/// States are handed out as `Rc<GameState>`. Each one holds its predecessor
/// so that [`GameState::is_over`] can look one ply back; the predecessor
/// never refers forward.
#[derive(Debug)]
pub struct GameState {
    board: Rc<Board>,
    next_player: Player,
    previous_state: Option<Rc<GameState>>,
    last_move: Option<Move>,
}

impl GameState {
    /// Start a game on an empty `board_size` x `board_size` board with Black
    /// to move.
    ///
    /// # Errors
    /// [`GoError::InvalidBoardSize`] if the size is outside
    /// `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new_game(board_size: usize) -> Result<Rc<GameState>> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(GoError::InvalidBoardSize(board_size));
        }
        Ok(Rc::new(GameState {
            board: Rc::new(Board::new(board_size, board_size)),
            next_player: Player::Black,
            previous_state: None,
            last_move: None,
        }))
    }

    pub fn board(&self) -> &Rc<Board> {
        &self.board
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn previous_state(&self) -> Option<&Rc<GameState>> {
        self.previous_state.as_ref()
    }

    /// Return the state that follows `self` after `next_player` makes `mv`.
    ///
    /// A play is made on a fresh copy of the board; pass and resign reuse
    /// the current board as-is. `self` is never modified.
    ///
    /// # Errors
    /// Placement errors from [`Board::place_stone`] for a play that is off the
    /// grid or on an occupied point.
    pub fn apply_move(self: &Rc<Self>, mv: Move) -> Result<Rc<GameState>> {
        let next_board = match mv {
            Move::Play(point) => {
                let mut board = Board::clone(&self.board);
                board.place_stone(self.next_player, point)?;
                Rc::new(board)
            }
            Move::Pass | Move::Resign => Rc::clone(&self.board),
        };

        let next = Rc::new(GameState {
            board: next_board,
            next_player: self.next_player.other(),
            previous_state: Some(Rc::clone(self)),
            last_move: Some(mv),
        });
        if next.is_over() {
            info!(player = %self.next_player, last_move = %mv, "game over");
        }
        Ok(next)
    }

    /// Whether the game has ended: the last move was a resignation, or the
    /// last two moves were both passes.
    ///
    /// Only the previous ply is consulted. No repetition check is made.
    pub fn is_over(&self) -> bool {
        let Some(last_move) = self.last_move else {
            return false;
        };
        if last_move.is_resign() {
            return true;
        }
        let Some(second_last_move) = self.previous_state.as_ref().and_then(|s| s.last_move) else {
            return false;
        };
        last_move.is_pass() && second_last_move.is_pass()
    }

    /// This state followed by each of its predecessors, back to the start
    /// of the game.
    pub fn history(&self) -> impl Iterator<Item = &GameState> {
        iter::successors(Some(self), |s| s.previous_state.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new_game(9).unwrap();
        assert_eq!(game.next_player(), Player::Black);
        assert_eq!(game.last_move(), None);
        assert!(game.previous_state().is_none());
        assert_eq!(game.board().num_rows(), 9);
        assert_eq!(game.board().num_cols(), 9);
        assert!(!game.is_over());
    }

    #[test]
    fn test_new_game_rejects_bad_sizes() {
        assert_eq!(GameState::new_game(0).unwrap_err(), GoError::InvalidBoardSize(0));
        assert_eq!(GameState::new_game(26).unwrap_err(), GoError::InvalidBoardSize(26));
        assert!(GameState::new_game(1).is_ok());
        assert!(GameState::new_game(25).is_ok());
    }

    #[test]
    fn test_move_new_requires_exactly_one_action() {
        assert_eq!(Move::new(Some(pt(1, 1)), false, false), Ok(Move::Play(pt(1, 1))));
        assert_eq!(Move::new(None, true, false), Ok(Move::Pass));
        assert_eq!(Move::new(None, false, true), Ok(Move::Resign));

        assert_eq!(Move::new(None, false, false), Err(GoError::InvalidMove));
        assert_eq!(Move::new(Some(pt(1, 1)), true, false), Err(GoError::InvalidMove));
        assert_eq!(Move::new(Some(pt(1, 1)), false, true), Err(GoError::InvalidMove));
        assert_eq!(Move::new(None, true, true), Err(GoError::InvalidMove));
        assert_eq!(Move::new(Some(pt(1, 1)), true, true), Err(GoError::InvalidMove));
    }

    #[test]
    fn test_move_predicates() {
        let m = Move::play(pt(2, 3));
        assert!(m.is_play() && !m.is_pass() && !m.is_resign());
        assert_eq!(m.point(), Some(pt(2, 3)));
        assert!(Move::pass_turn().is_pass());
        assert!(Move::resign().is_resign());
        assert_eq!(Move::resign().point(), None);
    }

    #[test]
    fn test_move_parse() {
        assert_eq!("pass".parse::<Move>(), Ok(Move::Pass));
        assert_eq!("PASS".parse::<Move>(), Ok(Move::Pass));
        assert_eq!("Resign".parse::<Move>(), Ok(Move::Resign));
        assert_eq!("c3".parse::<Move>(), Ok(Move::Play(pt(3, 3))));
        assert!("passs".parse::<Move>().is_err());
        assert_eq!(Move::play(pt(4, 4)).to_string(), "D4");
    }

    #[test]
    fn test_players_alternate() {
        let game = GameState::new_game(5).unwrap();
        let game = game.apply_move(Move::play(pt(3, 3))).unwrap();
        assert_eq!(game.next_player(), Player::White);
        let game = game.apply_move(Move::pass_turn()).unwrap();
        assert_eq!(game.next_player(), Player::Black);
        assert_eq!(game.board().stone_at(pt(3, 3)), Some(Player::Black));
    }

    #[test]
    fn test_pass_shares_board_play_does_not() {
        let game = GameState::new_game(5).unwrap();
        let passed = game.apply_move(Move::pass_turn()).unwrap();
        assert!(Rc::ptr_eq(game.board(), passed.board()));

        let resigned = game.apply_move(Move::resign()).unwrap();
        assert!(Rc::ptr_eq(game.board(), resigned.board()));

        let played = game.apply_move(Move::play(pt(1, 1))).unwrap();
        assert!(!Rc::ptr_eq(game.board(), played.board()));
        assert_eq!(game.board().stone_at(pt(1, 1)), None);
    }

    #[test]
    fn test_failed_play_returns_error() {
        let game = GameState::new_game(5).unwrap();
        let game = game.apply_move(Move::play(pt(3, 3))).unwrap();
        assert_eq!(
            game.apply_move(Move::play(pt(3, 3))).unwrap_err(),
            GoError::PointOccupied(pt(3, 3))
        );
        assert_eq!(
            game.apply_move(Move::play(pt(6, 1))).unwrap_err(),
            GoError::OffGrid(pt(6, 1))
        );
        assert_eq!(game.next_player(), Player::White);
    }

    #[test]
    fn test_is_over_two_passes() {
        let game = GameState::new_game(5).unwrap();
        let game = game.apply_move(Move::pass_turn()).unwrap();
        assert!(!game.is_over());
        let game = game.apply_move(Move::pass_turn()).unwrap();
        assert!(game.is_over());
    }

    #[test]
    fn test_is_over_pass_then_play() {
        let game = GameState::new_game(5).unwrap();
        let game = game.apply_move(Move::pass_turn()).unwrap();
        let game = game.apply_move(Move::play(pt(2, 2))).unwrap();
        assert!(!game.is_over());
        let game = game.apply_move(Move::pass_turn()).unwrap();
        assert!(!game.is_over());
    }

    #[test]
    fn test_is_over_resign_needs_no_pass() {
        let game = GameState::new_game(5).unwrap();
        let game = game.apply_move(Move::resign()).unwrap();
        assert!(game.is_over());
    }

    #[test]
    fn test_history() {
        let start = GameState::new_game(5).unwrap();
        let end = start
            .apply_move(Move::play(pt(1, 1)))
            .and_then(|s| s.apply_move(Move::pass_turn()))
            .and_then(|s| s.apply_move(Move::play(pt(2, 2))))
            .unwrap();

        let moves: Vec<Option<Move>> = end.history().map(GameState::last_move).collect();
        assert_eq!(
            moves,
            vec![
                Some(Move::Play(pt(2, 2))),
                Some(Move::Pass),
                Some(Move::Play(pt(1, 1))),
                None,
            ]
        );
    }
}
