//! Stone groups: maximal sets of connected same-color stones and their liberties.

use std::collections::HashSet;

use crate::error::{GoError, Result};
use crate::types::{Player, Point};

/// One maximal connected set of same-color stones.
///
/// `stones` and `liberties` are always disjoint. A group with no liberties is
/// dead and is removed by the board as soon as that is detected.
///
/// Equality is structural, over color, stones and liberties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoneGroup {
    color: Player,
    stones: HashSet<Point>,
    liberties: HashSet<Point>,
}

impl StoneGroup {
    /// Create a group. Any liberty that is also one of `stones` is dropped.
    pub fn new(
        color: Player,
        stones: impl IntoIterator<Item = Point>,
        liberties: impl IntoIterator<Item = Point>,
    ) -> Self {
        let stones: HashSet<Point> = stones.into_iter().collect();
        let liberties = liberties
            .into_iter()
            .filter(|p| !stones.contains(p))
            .collect();
        StoneGroup {
            color,
            stones,
            liberties,
        }
    }

    pub fn color(&self) -> Player {
        self.color
    }

    pub fn stones(&self) -> &HashSet<Point> {
        &self.stones
    }

    pub fn liberties(&self) -> &HashSet<Point> {
        &self.liberties
    }

    /// Number of liberties. Zero means the group is captured.
    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    /// Remove `point` from the liberties.
    ///
    /// # Errors
    /// [`GoError::LibertyNotPresent`] if `point` is not currently a liberty.
    pub fn remove_liberty(&mut self, point: Point) -> Result<()> {
        if self.liberties.remove(&point) {
            Ok(())
        } else {
            Err(GoError::LibertyNotPresent(point))
        }
    }

    /// Add `point` as a liberty. Adding an existing liberty is a no-op.
    pub fn add_liberty(&mut self, point: Point) {
        self.liberties.insert(point);
    }

    /// Combine two groups of the same color into a new one.
    ///
    /// The result's stones are the union of both stone sets, and its
    /// liberties are the union of both liberty sets minus those stones.
    /// Neither input is changed.
    ///
    /// # Errors
    /// [`GoError::ColorMismatch`] if the colors differ.
    pub fn merge(&self, other: &StoneGroup) -> Result<StoneGroup> {
        if other.color != self.color {
            return Err(GoError::ColorMismatch {
                expected: self.color,
                found: other.color,
            });
        }
        let stones: HashSet<Point> = self.stones.union(&other.stones).copied().collect();
        let liberties = self
            .liberties
            .union(&other.liberties)
            .filter(|p| !stones.contains(p))
            .copied()
            .collect();
        Ok(StoneGroup {
            color: self.color,
            stones,
            liberties,
        })
    }
}
