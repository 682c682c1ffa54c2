//! Structural mutation
//!
//! Every precondition is checked before the first write, so a failed call
//! leaves the tree exactly as it was.

use super::traversal::PairedWalk;
use super::{ArrayBinaryTree, Position, Side};
use crate::TreeError;

impl<T> ArrayBinaryTree<T> {
    /// Place the root of an empty tree
    pub fn add_root(&mut self, value: T) -> Result<Position, TreeError> {
        if !self.is_empty() {
            return Err(TreeError::TreeNotEmpty);
        }

        self.slots.insert(Position::ROOT.index(), value);
        self.count = 1;
        tracing::trace!("added root");

        Ok(Position::ROOT)
    }

    /// Add a left child under `p`
    pub fn add_left(&mut self, p: Position, value: T) -> Result<Position, TreeError> {
        self.add_child(p, Side::Left, value)
    }

    /// Add a right child under `p`
    pub fn add_right(&mut self, p: Position, value: T) -> Result<Position, TreeError> {
        self.add_child(p, Side::Right, value)
    }

    /// Add a child of `p` on `side`, growing storage if the slot is past the end
    pub fn add_child(&mut self, p: Position, side: Side, value: T) -> Result<Position, TreeError> {
        if let Some(existing) = self.child(p, side)? {
            return Err(TreeError::SlotOccupied(existing));
        }

        let child = p.child_index(side);
        self.slots.insert(child.index(), value);
        self.count += 1;
        tracing::trace!("added {:?} child {} under {}", side, child, p);

        Ok(child)
    }

    /// Overwrite the element at `p`, returning the old one
    pub fn replace(&mut self, p: Position, value: T) -> Result<T, TreeError> {
        let slot = self.get_mut(p)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Remove the node at `p` and return its element
    ///
    /// A leaf is simply vacated. A node with one child is replaced by that
    /// child's whole subtree, lifted one level so each node keeps its
    /// left/right orientation under its new parent. Nodes with two children
    /// are rejected.
    pub fn delete(&mut self, p: Position) -> Result<T, TreeError> {
        let child = match self.children(p)? {
            (Some(_), Some(_)) => return Err(TreeError::HasTwoChildren(p)),
            (Some(child), None) | (None, Some(child)) => Some(child),
            (None, None) => None,
        };

        let Some(removed) = self.slots.take(p.index()) else {
            return Err(TreeError::InvalidPosition(p));
        };

        if let Some(child) = child {
            self.relocate(child, p);
        }
        self.count -= 1;
        tracing::trace!("deleted node {}", p);

        Ok(removed)
    }

    /// Move the subtree at `from` so its root lands on the (vacant) slot `to`
    ///
    /// Two phases: every source slot is vacated before any destination is
    /// written, since a destination may be a source not yet read.
    fn relocate(&mut self, from: Position, to: Position) {
        let pairs: Vec<(Position, Position)> = PairedWalk::new(&self.slots, from, to).collect();

        let mut moved = Vec::with_capacity(pairs.len());
        for (src, dst) in pairs {
            if let Some(value) = self.slots.take(src.index()) {
                moved.push((dst, value));
            }
        }

        tracing::debug!("relocated {} nodes from {} to {}", moved.len(), from, to);
        for (dst, value) in moved {
            self.slots.insert(dst.index(), value);
        }
    }

    /// Check that `p` is a leaf that can take attached subtrees
    fn check_attachable(&self, p: Position) -> Result<(), TreeError> {
        if self.is_leaf(p)? {
            Ok(())
        } else {
            Err(TreeError::NotALeaf(p))
        }
    }

    /// Attach `left` and `right` under leaf `p` by copying their nodes
    ///
    /// Donors are left untouched. An empty donor attaches nothing.
    pub fn attach(&mut self, p: Position, left: &Self, right: &Self) -> Result<(), TreeError>
    where
        T: Clone,
    {
        self.check_attachable(p)?;

        for (donor, side) in [(left, Side::Left), (right, Side::Right)] {
            let target = p.child_index(side);
            let mut copied = 0;
            for (src, dst) in PairedWalk::new(&donor.slots, Position::ROOT, target) {
                if let Some(value) = donor.slots.get(src.index()) {
                    self.slots.insert(dst.index(), value.clone());
                    self.count += 1;
                    copied += 1;
                }
            }
            if copied > 0 {
                tracing::debug!("attached {} copied nodes at {}", copied, target);
            }
        }

        Ok(())
    }

    /// Attach `left` and `right` under leaf `p`, moving their nodes
    ///
    /// Same layout as [`attach`](Self::attach), but consumes the donors
    /// and does not need `T: Clone`.
    pub fn attach_owned(&mut self, p: Position, left: Self, right: Self) -> Result<(), TreeError> {
        self.check_attachable(p)?;

        for (mut donor, side) in [(left, Side::Left), (right, Side::Right)] {
            let target = p.child_index(side);
            let pairs: Vec<(Position, Position)> =
                PairedWalk::new(&donor.slots, Position::ROOT, target).collect();

            let mut moved = 0;
            for (src, dst) in pairs {
                if let Some(value) = donor.slots.take(src.index()) {
                    self.slots.insert(dst.index(), value);
                    self.count += 1;
                    moved += 1;
                }
            }
            if moved > 0 {
                tracing::debug!("attached {} moved nodes at {}", moved, target);
            }
        }

        Ok(())
    }
}
