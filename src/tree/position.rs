//! Node positions and complete-tree addressing
//!
//! Position = index into the slot array
//! Parent:      (i - 1) / 2
//! Left child:  2i + 1
//! Right child: 2i + 2

use std::fmt;

use super::Side;

/// Index of a node in the slot array
///
/// The arithmetic here is pure: it says where a relative *would* live,
/// not whether that slot is occupied. The tree validates occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position(usize);

impl Position {
    /// Slot of the root
    pub const ROOT: Position = Position(0);

    /// Wrap a raw slot index
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw slot index
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Check if this is slot 0
    #[inline]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }

    /// Parent slot: `(i - 1) / 2`, `None` for the root
    #[inline]
    pub const fn parent_index(self) -> Option<Position> {
        if self.0 == 0 {
            None
        } else {
            Some(Position((self.0 - 1) / 2))
        }
    }

    /// Left child slot: `2i + 1`
    #[inline]
    pub const fn left_index(self) -> Position {
        Position(2 * self.0 + 1)
    }

    /// Right child slot: `2i + 2`
    #[inline]
    pub const fn right_index(self) -> Position {
        Position(2 * self.0 + 2)
    }

    /// Child slot on the given side
    #[inline]
    pub const fn child_index(self, side: Side) -> Position {
        match side {
            Side::Left => self.left_index(),
            Side::Right => self.right_index(),
        }
    }

    /// Which side of its parent this slot hangs on (odd = left)
    pub const fn side(self) -> Option<Side> {
        if self.0 == 0 {
            None
        } else if self.0 % 2 == 1 {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// The other child slot of the same parent
    pub const fn sibling_index(self) -> Option<Position> {
        match self.side() {
            None => None,
            Some(Side::Left) => Some(Position(self.0 + 1)),
            Some(Side::Right) => Some(Position(self.0 - 1)),
        }
    }

    /// Level in the complete-tree layout: `⌊log2(i + 1)⌋`
    ///
    /// Equals the node's depth, since every ancestor of an occupied slot
    /// is occupied.
    #[inline]
    pub const fn level(self) -> usize {
        (usize::BITS - 1 - (self.0 + 1).leading_zeros()) as usize
    }
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<Position> for usize {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
