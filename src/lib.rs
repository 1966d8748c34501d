//! This crate exposes a deliberately simple, unbalanced Binary Search
//! Tree (BST) mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! These invariants mean searching for a key takes `O(height)` (where
//! `height` is the longest path from the root `Node` to a leaf `Node`),
//! and that visiting the left subtree, then the subtree root, then the
//! right subtree yields every key in ascending order. Because this tree
//! never rebalances itself, its height is only `O(lg N)` for friendly
//! insertion orders - inserting keys in sorted order degrades it to a
//! linked list with `O(N)` operations.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod recursive;
