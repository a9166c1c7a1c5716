//! The Go board: stone placement, group bookkeeping and capture.
//!
//! Occupied points map to a group id, and the groups themselves live in a
//! small arena keyed by that id. Every stone of a group shares one entry, so a
//! liberty update made through any of its points is seen by all of them.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::constants::{COLUMN_LETTERS, EMPTY, STONE_BLACK, STONE_WHITE};
use crate::error::{GoError, Result};
use crate::group::StoneGroup;
use crate::types::{Player, Point};

/// Arena key of a live group. Ids are never reused within one board.
type GroupId = u32;

#[derive(Clone, Debug)]
pub struct Board {
    num_rows: usize,
    num_cols: usize,
    /// Occupied points only. Empty points are absent.
    grid: HashMap<Point, GroupId>,
    groups: HashMap<GroupId, StoneGroup>,
    next_id: GroupId,
}

impl Board {
    /// Create an empty board with `num_rows` rows and `num_cols` columns.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            grid: HashMap::new(),
            groups: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Whether `point` lies within `1..=num_rows` x `1..=num_cols`.
    pub fn is_on_grid(&self, point: Point) -> bool {
        let in_range = |v: i32, max: usize| v >= 1 && (v as usize) <= max;
        in_range(point.row, self.num_rows) && in_range(point.col, self.num_cols)
    }

    /// The group occupying `point`, or `None` if the point is empty.
    pub fn get_group(&self, point: Point) -> Option<&StoneGroup> {
        self.grid.get(&point).and_then(|id| self.groups.get(id))
    }

    /// Color of the stone at `point`, if any.
    pub fn stone_at(&self, point: Point) -> Option<Player> {
        self.get_group(point).map(StoneGroup::color)
    }

    /// Every on-grid point, row by row starting at (1, 1).
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (1..=self.num_rows as i32)
            .flat_map(move |row| (1..=self.num_cols as i32).map(move |col| Point::new(row, col)))
    }

    /// All live groups, in no particular order.
    pub fn groups(&self) -> impl Iterator<Item = &StoneGroup> + '_ {
        self.groups.values()
    }

    /// Place a stone for `player` at `point`, merging with friendly groups
    /// and capturing any enemy group left without liberties.
    ///
    /// Neither ko nor suicide is checked: a stone that ends with no
    /// liberties and captures nothing stays on the board.
    ///
    /// # Errors
    /// - [`GoError::OffGrid`] if `point` is outside the board
    /// - [`GoError::PointOccupied`] if a stone is already there
    ///
    /// The board is unchanged when an error is returned.
    pub fn place_stone(&mut self, player: Player, point: Point) -> Result<()> {
        if !self.is_on_grid(point) {
            return Err(GoError::OffGrid(point));
        }
        if self.grid.contains_key(&point) {
            return Err(GoError::PointOccupied(point));
        }

        // Classify the neighbors before touching anything.
        let mut liberties = Vec::with_capacity(4);
        let mut adjacent_same_color: Vec<GroupId> = Vec::with_capacity(4);
        let mut adjacent_opposite_color: Vec<GroupId> = Vec::with_capacity(4);
        for neighbor in point.neighbors() {
            if !self.is_on_grid(neighbor) {
                continue;
            }
            let Some(&id) = self.grid.get(&neighbor) else {
                liberties.push(neighbor);
                continue;
            };
            let seen = if self.groups[&id].color() == player {
                &mut adjacent_same_color
            } else {
                &mut adjacent_opposite_color
            };
            if !seen.contains(&id) {
                seen.push(id);
            }
        }

        let mut new_group = StoneGroup::new(player, [point], liberties);
        for id in &adjacent_same_color {
            new_group = new_group.merge(&self.groups[id])?;
        }
        if !adjacent_same_color.is_empty() {
            trace!(
                %point,
                merged = adjacent_same_color.len(),
                stones = new_group.stones().len(),
                "merged groups"
            );
        }

        // Commit: the merged group replaces every friendly group it absorbed.
        for id in &adjacent_same_color {
            self.groups.remove(id);
        }
        let new_id = self.allocate_id();
        for &stone in new_group.stones() {
            self.grid.insert(stone, new_id);
        }
        self.groups.insert(new_id, new_group);
        debug!(%player, %point, "placed stone");

        for id in &adjacent_opposite_color {
            if let Some(group) = self.groups.get_mut(id) {
                group.remove_liberty(point)?;
            }
        }
        for &id in &adjacent_opposite_color {
            if self.groups.get(&id).is_some_and(|g| g.num_liberties() == 0) {
                self.remove_group(id);
            }
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> GroupId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take a captured group off the board. Each vacated point becomes a
    /// liberty of every other group that touches it.
    fn remove_group(&mut self, id: GroupId) {
        let Some(captured) = self.groups.remove(&id) else {
            return;
        };
        for &stone in captured.stones() {
            for neighbor in stone.neighbors() {
                let Some(&neighbor_id) = self.grid.get(&neighbor) else {
                    continue;
                };
                if neighbor_id == id {
                    continue;
                }
                if let Some(group) = self.groups.get_mut(&neighbor_id) {
                    group.add_liberty(stone);
                }
            }
        }
        for stone in captured.stones() {
            self.grid.remove(stone);
        }
        debug!(
            color = %captured.color(),
            stones = captured.stones().len(),
            "captured group"
        );
    }
}

/// Boards are equal when they have the same size and the same groups on
/// the same points. Arena ids are not compared.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.num_rows == other.num_rows
            && self.num_cols == other.num_cols
            && self.grid.len() == other.grid.len()
            && self
                .grid
                .keys()
                .all(|&p| self.get_group(p) == other.get_group(p))
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.num_rows as i32).rev() {
            write!(f, "{row:>2} ")?;
            for col in 1..=self.num_cols as i32 {
                let ch = match self.stone_at(Point::new(row, col)) {
                    Some(Player::Black) => STONE_BLACK,
                    Some(Player::White) => STONE_WHITE,
                    None => EMPTY,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..self.num_cols {
            match COLUMN_LETTERS.get(col) {
                Some(&c) => write!(f, "{} ", c as char)?,
                None => write!(f, "? ")?,
            }
        }
        writeln!(f)
    }
}
