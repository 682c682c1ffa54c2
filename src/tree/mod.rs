//! Array-backed binary tree
//!
//! Nodes live in a flat slot array; relationships are index arithmetic
//! (see [`Position`]). Navigation never stores pointers, so the only
//! structural state is which slots are occupied.

mod mutation;
mod position;
mod traversal;

pub use position::Position;
pub use traversal::{LevelOrder, Preorder, Side};

use std::fmt;

use crate::storage::{GrowthProfile, SlotArray};
use crate::{TreeConfig, TreeError};

/// Binary tree stored in complete-tree layout
///
/// Invariants:
/// - `count` equals the number of occupied slots
/// - every occupied slot other than 0 has an occupied parent
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArrayBinaryTree<T> {
    /// Slot storage
    slots: SlotArray<T>,

    /// Occupied slot count (cached)
    count: usize,
}

impl<T> ArrayBinaryTree<T> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Create an empty tree with preallocated slots and/or growth profiling
    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            slots: SlotArray::new(config.initial_capacity, config.profile_growth),
            count: 0,
        }
    }

    /// Number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// True when the tree has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current slot-array length
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Read-only view of the backing slots
    pub fn slots(&self) -> &SlotArray<T> {
        &self.slots
    }

    /// Growth profile, if enabled in the config
    pub fn growth_profile(&self) -> Option<&GrowthProfile> {
        self.slots.profile()
    }

    /// In bounds and occupied
    pub fn is_valid(&self, p: Position) -> bool {
        self.slots.is_occupied(p.index())
    }

    fn validate(&self, p: Position) -> Result<Position, TreeError> {
        if self.is_valid(p) {
            Ok(p)
        } else {
            Err(TreeError::InvalidPosition(p))
        }
    }

    /// `p` if it names a node, without failing
    fn occupied(&self, p: Position) -> Option<Position> {
        self.is_valid(p).then_some(p)
    }

    /// Element stored at `p`
    pub fn get(&self, p: Position) -> Result<&T, TreeError> {
        self.slots
            .get(p.index())
            .ok_or(TreeError::InvalidPosition(p))
    }

    /// Mutable element stored at `p`
    pub fn get_mut(&mut self, p: Position) -> Result<&mut T, TreeError> {
        self.slots
            .get_mut(p.index())
            .ok_or(TreeError::InvalidPosition(p))
    }

    // Navigation

    /// Position of the root, `None` if empty
    pub fn root(&self) -> Option<Position> {
        (!self.is_empty()).then_some(Position::ROOT)
    }

    /// Parent of `p`, `None` for the root
    pub fn parent(&self, p: Position) -> Result<Option<Position>, TreeError> {
        Ok(self.validate(p)?.parent_index())
    }

    /// Left child of `p`, if present
    pub fn left(&self, p: Position) -> Result<Option<Position>, TreeError> {
        Ok(self.occupied(self.validate(p)?.left_index()))
    }

    /// Right child of `p`, if present
    pub fn right(&self, p: Position) -> Result<Option<Position>, TreeError> {
        Ok(self.occupied(self.validate(p)?.right_index()))
    }

    /// Child of `p` on `side`, if present
    pub fn child(&self, p: Position, side: Side) -> Result<Option<Position>, TreeError> {
        match side {
            Side::Left => self.left(p),
            Side::Right => self.right(p),
        }
    }

    /// The other child of `p`'s parent, `None` for the root or a lone child
    pub fn sibling(&self, p: Position) -> Result<Option<Position>, TreeError> {
        Ok(self
            .validate(p)?
            .sibling_index()
            .and_then(|s| self.occupied(s)))
    }

    /// `(left, right)` children of `p`
    pub fn children(
        &self,
        p: Position,
    ) -> Result<(Option<Position>, Option<Position>), TreeError> {
        Ok((self.left(p)?, self.right(p)?))
    }

    /// Number of present children (0, 1 or 2)
    pub fn num_children(&self, p: Position) -> Result<usize, TreeError> {
        let (left, right) = self.children(p)?;
        Ok(usize::from(left.is_some()) + usize::from(right.is_some()))
    }

    /// Check if `p` is the root
    pub fn is_root(&self, p: Position) -> Result<bool, TreeError> {
        Ok(self.validate(p)?.is_root())
    }

    /// Check if `p` has no children
    pub fn is_leaf(&self, p: Position) -> Result<bool, TreeError> {
        Ok(self.num_children(p)? == 0)
    }

    // Structural queries

    /// Number of edges from the root to `p`
    pub fn depth(&self, p: Position) -> Result<usize, TreeError> {
        let mut node = self.validate(p)?;
        let mut depth = 0;

        // Parent indices strictly decrease, so this reaches 0
        while let Some(parent) = node.parent_index() {
            node = parent;
            depth += 1;
        }

        Ok(depth)
    }

    /// Height of the subtree rooted at `p` (0 for a leaf)
    ///
    /// Longest downward path, measured as the deepest level in the subtree
    /// minus the level of `p`.
    pub fn subtree_height(&self, p: Position) -> Result<usize, TreeError> {
        let p = self.validate(p)?;
        let base = p.level();

        Ok(Preorder::subtree(&self.slots, p)
            .map(|(node, _)| node.level() - base)
            .max()
            .unwrap_or(0))
    }

    /// Height of the whole tree, -1 when empty
    pub fn height(&self) -> isize {
        match self.root() {
            None => -1,
            Some(root) => self.subtree_height(root).map_or(-1, |h| h as isize),
        }
    }

    // Iteration

    /// `(position, element)` pairs in level order
    pub fn iter(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(&self.slots)
    }

    /// Occupied positions in level order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter().map(|(p, _)| p)
    }

    /// `(position, element)` pairs depth-first, left before right
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::subtree(&self.slots, Position::ROOT)
    }
}

impl<T> Default for ArrayBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Relation column in the `Display` listing
struct Link(Option<Position>);

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "{}", p),
            None => write!(f, "None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for ArrayBinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Empty Tree");
        }

        for (n, (p, value)) in self.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "Index {}: {} (parent: {}, left: {}, right: {})",
                p,
                value,
                Link(p.parent_index()),
                Link(self.occupied(p.left_index())),
                Link(self.occupied(p.right_index())),
            )?;
        }

        Ok(())
    }
}
