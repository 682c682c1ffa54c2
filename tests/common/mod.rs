//! Shared fixtures and checks for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use slotree::{ArrayBinaryTree, Position, Side};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("SLOTREE_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set SLOTREE_UPDATE_SNAPSHOTS=1 to regenerate.\n\
             Expected:\n{}\nActual:\n{}",
            path, expected, actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n").trim_end().to_string()
}

/// Tree left behind by the scripted walkthrough
///
/// A at the root, D lifted into B's old slot, C_New carrying X and Y.
pub fn demo_tree() -> ArrayBinaryTree<&'static str> {
    let mut tree = ArrayBinaryTree::new();
    let root = tree.add_root("A").unwrap();
    let b = tree.add_left(root, "B").unwrap();
    let c = tree.add_right(root, "C").unwrap();
    tree.replace(c, "C_New").unwrap();
    tree.add_left(b, "D").unwrap();
    tree.delete(b).unwrap();

    let mut t1 = ArrayBinaryTree::new();
    let mut t2 = ArrayBinaryTree::new();
    t1.add_root("X").unwrap();
    t2.add_root("Y").unwrap();
    tree.attach(c, &t1, &t2).unwrap();
    tree
}

/// Complete tree holding `base, base + 1, ...` in level order
pub fn complete_tree(size: usize, base: u16) -> ArrayBinaryTree<u16> {
    let mut tree = ArrayBinaryTree::new();
    for i in 0..size {
        let value = base + i as u16;
        if i == 0 {
            tree.add_root(value).unwrap();
            continue;
        }
        let parent = Position::new((i - 1) / 2);
        let side = if i % 2 == 1 { Side::Left } else { Side::Right };
        tree.add_child(parent, side, value).unwrap();
    }
    tree
}

/// One-sided chain `0, 1, ..., depth`; returns the tree and each node's position
pub fn chain(depth: usize, side: Side) -> (ArrayBinaryTree<usize>, Vec<Position>) {
    let mut tree = ArrayBinaryTree::new();
    let mut positions = vec![tree.add_root(0).unwrap()];
    for level in 1..=depth {
        let last = *positions.last().unwrap();
        positions.push(tree.add_child(last, side, level).unwrap());
    }
    (tree, positions)
}

/// Check the structural invariants that must hold after any operation
pub fn assert_invariants<T>(tree: &ArrayBinaryTree<T>) {
    assert_eq!(
        tree.len(),
        tree.slots().count_occupied(),
        "cached size disagrees with occupied slots"
    );
    assert_eq!(tree.root().is_some(), !tree.is_empty());

    for p in tree.positions() {
        if let Some(parent) = p.parent_index() {
            assert!(tree.is_valid(parent), "node {} has no parent", p);
        }
        if let Some(left) = tree.left(p).unwrap() {
            assert_eq!(tree.parent(left).unwrap(), Some(p));
        }
        if let Some(right) = tree.right(p).unwrap() {
            assert_eq!(tree.parent(right).unwrap(), Some(p));
        }
    }

    if let Some(root) = tree.root() {
        let height = tree.height();
        assert_eq!(height, tree.subtree_height(root).unwrap() as isize);

        let mut deepest_leaf = 0;
        for p in tree.positions() {
            let depth = tree.depth(p).unwrap() as isize;
            assert!(depth <= height, "depth {} of {} exceeds height {}", depth, p, height);
            if tree.is_leaf(p).unwrap() {
                deepest_leaf = deepest_leaf.max(depth);
            }
        }
        assert_eq!(deepest_leaf, height, "no leaf reaches the tree height");
    } else {
        assert_eq!(tree.height(), -1);
    }
}
