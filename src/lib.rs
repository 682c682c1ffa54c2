//! # Array-backed binary trees
//!
//! A binary tree whose nodes live in a flat, growable slot array.
//! Relationships are pure index arithmetic (complete-tree addressing):
//!
//! - parent of `i`: `(i - 1) / 2`
//! - left child of `i`: `2i + 1`
//! - right child of `i`: `2i + 2`
//!
//! Positions are plain indices, so navigation is O(1) and the tree stores
//! no pointers. The price is paid on mutation: deleting a node with a
//! single child lifts that child's entire subtree one level, and storage
//! grows by doubling as deeper slots are written.
//!
//! ## Usage Example
//!
//! ```
//! use slotree::{ArrayBinaryTree, TreeError};
//!
//! let mut tree = ArrayBinaryTree::new();
//! let root = tree.add_root("A")?;
//! let b = tree.add_left(root, "B")?;
//! tree.add_left(b, "D")?;
//!
//! assert_eq!(tree.delete(b)?, "B");
//! assert_eq!(tree.get(tree.left(root)?.unwrap())?, &"D");
//! assert_eq!(tree.delete(root), Ok("A"));
//! # Ok::<(), TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod storage; // Slot array and growth accounting
pub mod tree; // Tree ADT, positions, traversals

// Re-exports for convenience
pub use storage::{GrowthEvent, GrowthProfile, SlotArray};
pub use tree::{ArrayBinaryTree, LevelOrder, Position, Preorder, Side};

use thiserror::Error;

/// Construction parameters for a tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Empty slots allocated up front (default 0)
    pub initial_capacity: usize,

    /// Record every storage growth in a [`GrowthProfile`]
    pub profile_growth: bool,
}

impl TreeConfig {
    /// Preallocate enough slots for a full tree of the given height:
    /// `2^(height + 1) - 1`
    pub fn for_height(height: u32) -> Self {
        let slots = 1usize
            .checked_shl(height + 1)
            .map_or(usize::MAX, |full| full - 1);
        Self {
            initial_capacity: slots,
            profile_growth: false,
        }
    }

    /// Set the number of preallocated slots
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Enable growth profiling
    pub fn with_growth_profiling(mut self, enabled: bool) -> Self {
        self.profile_growth = enabled;
        self
    }
}

/// Structural precondition failures
///
/// All are recoverable. The tree is unchanged whenever one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// Position is out of bounds or names an empty slot
    #[error("invalid position {0}: no node stored there")]
    InvalidPosition(Position),

    /// `add_root` on a tree that already has nodes
    #[error("tree is not empty")]
    TreeNotEmpty,

    /// `add_left`/`add_right` where that child already exists
    #[error("slot {0} is already occupied")]
    SlotOccupied(Position),

    /// `delete` on a node with two children
    #[error("position {0} has two children")]
    HasTwoChildren(Position),

    /// `attach` on a node that already has a child
    #[error("position {0} must be a leaf")]
    NotALeaf(Position),
}
