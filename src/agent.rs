//! A random-move agent, for self-play and for exercising the rules.
//!
//! The agent only uses the public board and game-state API.

use crate::board::Board;
use crate::game::{GameState, Move};
use crate::types::{Player, Point};

/// Check if an empty point is a true eye of `player`.
///
/// Every on-grid orthogonal neighbor must be one of `player`'s stones. The
/// diagonals may hold at most one opponent stone in the center, and none at
/// the edge.
pub fn is_point_an_eye(board: &Board, point: Point, player: Player) -> bool {
    if board.stone_at(point).is_some() {
        return false;
    }
    let surrounded = point
        .neighbors()
        .into_iter()
        .filter(|&n| board.is_on_grid(n))
        .all(|n| board.stone_at(n) == Some(player));
    if !surrounded {
        return false;
    }

    let mut at_edge = false;
    let mut false_count = 0;
    for d in diagonal_neighbors(point) {
        if !board.is_on_grid(d) {
            at_edge = true;
        } else if board.stone_at(d) == Some(player.other()) {
            false_count += 1;
        }
    }

    let tolerance = if at_edge { 0 } else { 1 };
    false_count <= tolerance
}

#[inline]
fn diagonal_neighbors(pt: Point) -> [Point; 4] {
    [
        Point::new(pt.row - 1, pt.col - 1),
        Point::new(pt.row - 1, pt.col + 1),
        Point::new(pt.row + 1, pt.col - 1),
        Point::new(pt.row + 1, pt.col + 1),
    ]
}

/// Plays a uniformly random empty point that is not one of its own eyes,
/// and passes when there is none.
pub struct RandomAgent {
    rng: fastrand::Rng,
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomAgent {
    /// An agent seeded from the system.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// An agent whose choices are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn select_move(&mut self, state: &GameState) -> Move {
        let board = state.board();
        let player = state.next_player();
        let candidates: Vec<Point> = board
            .points()
            .filter(|&p| board.stone_at(p).is_none() && !is_point_an_eye(board, p, player))
            .collect();

        if candidates.is_empty() {
            Move::pass_turn()
        } else {
            Move::play(candidates[self.rng.usize(..candidates.len())])
        }
    }
}
