//! Error type for rule violations and caller misuse.

use thiserror::Error;

use crate::types::{Player, Point};

/// Every way an operation on the board or game state can be refused.
///
/// None of these are retried internally. When one is returned, nothing was
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoError {
    /// A move was built from flags with zero or several actions set.
    #[error("a move must be exactly one of play, pass or resign")]
    InvalidMove,

    #[error("point {0:?} is off the grid")]
    OffGrid(Point),

    #[error("point {0:?} is already occupied")]
    PointOccupied(Point),

    #[error("cannot merge a {found:?} group into a {expected:?} group")]
    ColorMismatch { expected: Player, found: Player },

    #[error("point {0:?} is not a liberty of this group")]
    LibertyNotPresent(Point),

    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("unsupported board size {0}")]
    InvalidBoardSize(usize),
}

pub type Result<T> = std::result::Result<T, GoError>;
