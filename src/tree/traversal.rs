//! Iterative traversals over the slot array
//!
//! No recursion anywhere: preorder uses an explicit stack and the
//! paired walk (relocation, attach) uses a FIFO queue, so deep or
//! one-sided trees cannot exhaust the call stack.

use std::collections::VecDeque;

use super::Position;
use crate::storage::SlotArray;

/// Which child of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Child at `2i + 1`
    Left,

    /// Child at `2i + 2`
    Right,
}

/// Occupied slots in ascending index order
///
/// Ascending index order is level order under complete-tree addressing.
#[derive(Debug)]
pub struct LevelOrder<'a, T> {
    slots: &'a SlotArray<T>,
    next: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(slots: &'a SlotArray<T>) -> Self {
        Self { slots, next: 0 }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = (Position, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.slots.len() {
            let index = self.next;
            self.next += 1;
            if let Some(value) = self.slots.get(index) {
                return Some((Position::new(index), value));
            }
        }
        None
    }
}

/// Depth-first, node before children, left before right
#[derive(Debug)]
pub struct Preorder<'a, T> {
    slots: &'a SlotArray<T>,
    stack: Vec<Position>,
}

impl<'a, T> Preorder<'a, T> {
    /// Walk the subtree rooted at `start` (empty if `start` is unoccupied)
    pub(crate) fn subtree(slots: &'a SlotArray<T>, start: Position) -> Self {
        let mut stack = Vec::new();
        if slots.is_occupied(start.index()) {
            stack.push(start);
        }
        Self { slots, stack }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = (Position, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let value = self.slots.get(node.index())?;

        // Right first so left is popped first
        for child in [node.right_index(), node.left_index()] {
            if self.slots.is_occupied(child.index()) {
                self.stack.push(child);
            }
        }

        Some((node, value))
    }
}

/// Breadth-first walk pairing a source subtree with a destination subtree
///
/// Yields `(source, destination)` for every occupied slot under
/// `source_root`, where the destination follows the same left/right path
/// from `destination_root`. The source array is only read.
pub(crate) struct PairedWalk<'a, T> {
    source: &'a SlotArray<T>,
    queue: VecDeque<(Position, Position)>,
}

impl<'a, T> PairedWalk<'a, T> {
    pub(crate) fn new(
        source: &'a SlotArray<T>,
        source_root: Position,
        destination_root: Position,
    ) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((source_root, destination_root));
        Self { source, queue }
    }
}

impl<'a, T> Iterator for PairedWalk<'a, T> {
    type Item = (Position, Position);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((src, dst)) = self.queue.pop_front() {
            if !self.source.is_occupied(src.index()) {
                continue;
            }
            for side in [Side::Left, Side::Right] {
                self.queue.push_back((src.child_index(side), dst.child_index(side)));
            }
            return Some((src, dst));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SlotArray<char> {
        //        A
        //      /   \
        //     B     C
        //      \   /
        //       E F
        let mut slots = SlotArray::new(0, false);
        for (i, v) in [(0, 'A'), (1, 'B'), (2, 'C'), (4, 'E'), (5, 'F')] {
            slots.insert(i, v);
        }
        slots
    }

    #[test]
    fn test_level_order_is_index_order() {
        let slots = sample();
        let order: Vec<char> = LevelOrder::new(&slots).map(|(_, v)| *v).collect();
        assert_eq!(order, vec!['A', 'B', 'C', 'E', 'F']);
    }

    #[test]
    fn test_preorder() {
        let slots = sample();
        let order: Vec<char> = Preorder::subtree(&slots, Position::ROOT)
            .map(|(_, v)| *v)
            .collect();
        assert_eq!(order, vec!['A', 'B', 'E', 'C', 'F']);

        let right: Vec<usize> = Preorder::subtree(&slots, Position::new(2))
            .map(|(p, _)| p.index())
            .collect();
        assert_eq!(right, vec![2, 5]);

        assert_eq!(Preorder::subtree(&slots, Position::new(3)).count(), 0);
    }

    #[test]
    fn test_paired_walk_shifts_up_one_level() {
        let slots = sample();

        // Lift the subtree at B (1) into the root slot (0)
        let pairs: Vec<(usize, usize)> =
            PairedWalk::new(&slots, Position::new(1), Position::ROOT)
                .map(|(s, d)| (s.index(), d.index()))
                .collect();
        assert_eq!(pairs, vec![(1, 0), (4, 2)]);
    }

    #[test]
    fn test_paired_walk_descends_into_other_tree() {
        let slots = sample();

        // Copy the whole tree under slot 6 of some other tree
        let pairs: Vec<(usize, usize)> =
            PairedWalk::new(&slots, Position::ROOT, Position::new(6))
                .map(|(s, d)| (s.index(), d.index()))
                .collect();
        assert_eq!(pairs, vec![(0, 6), (1, 13), (2, 14), (4, 28), (5, 29)]);
    }
}
