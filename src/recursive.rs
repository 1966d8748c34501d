//! A BST built around recursive reattachment. Every structural operation
//! is a private recursive function that takes ownership of a subtree root
//! and returns the (possibly new) root for the caller to store back into
//! the exact link it descended through. New nodes, spliced-out nodes, and
//! promoted successors all propagate back to the top this way, so no node
//! ever needs a parent pointer.
//!
//! The tree never rebalances itself. Inserting keys in sorted order
//! degrades every operation to `O(N)`.
//!
//! # Examples
//!
//! ```
//! use naive_bst::recursive::Tree;
//!
//! let mut tree = Tree::new();
//! for &key in &[50, 30, 20, 40, 70, 60, 80] {
//!     tree.insert(key);
//! }
//!
//! // Keys come back in ascending order no matter the insertion order.
//! assert_eq!(tree.in_order(), vec![&20, &30, &40, &50, &60, &70, &80]);
//!
//! // Deleting the root promotes its in-order successor.
//! tree.delete(&50);
//! assert_eq!(tree.in_order(), vec![&20, &30, &40, &60, &70, &80]);
//! assert!(tree.search(&50).is_none());
//! ```

use std::cmp;
use std::fmt;

/// A child link. Owns the whole subtree below it, or nothing.
type Link<K> = Option<Box<Node<K>>>;

/// An unbalanced Binary Search Tree storing a set of keys. Duplicate
/// inserts are silently ignored and deleting a missing key is a no-op,
/// so every operation is total.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Ensures the tree contains a node with the given key. Inserting a
    /// key that is already present leaves the tree structurally unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.in_order(), vec![&1, &2]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: cmp::Ord,
    {
        self.root = Self::insert_node(self.root.take(), key);
    }

    /// Potentially finds the node holding the given key. If no node has
    /// the corresponding key, `None` is returned. Never mutates the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|node| node.key()), Some(&1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: cmp::Ord,
    {
        Self::search_node(&self.root, key)
    }

    /// Removes the node holding the given key, if any. Deleting a key
    /// that isn't present (including from an empty tree) is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// tree.delete(&1);
    /// tree.delete(&999);
    ///
    /// assert!(tree.search(&1).is_none());
    /// assert_eq!(tree.in_order(), vec![&2]);
    /// ```
    pub fn delete(&mut self, key: &K)
    where
        K: cmp::Ord,
    {
        self.root = Self::delete_node(self.root.take(), key);
    }

    /// Returns every key in the tree in ascending order. The sequence is
    /// recomputed fresh on each call - it is not a live cursor.
    ///
    /// For any tree built solely through [`insert`][Self::insert], this
    /// equals the sorted, duplicate-free set of inserted keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::recursive::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.in_order(), vec![&1, &2, &3]);
    /// ```
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        Self::visit_in_order(&self.root, &mut keys);
        keys
    }

    fn insert_node(link: Link<K>, key: K) -> Link<K>
    where
        K: cmp::Ord,
    {
        match link {
            // Found the empty slot - this node is the attachment point.
            None => Some(Box::new(Node::new(key))),
            Some(mut node) => {
                match key.cmp(&node.key) {
                    cmp::Ordering::Less => node.left = Self::insert_node(node.left.take(), key),
                    cmp::Ordering::Equal => {}
                    cmp::Ordering::Greater => node.right = Self::insert_node(node.right.take(), key),
                }
                Some(node)
            }
        }
    }

    fn search_node<'a>(link: &'a Link<K>, key: &K) -> Option<&'a Node<K>>
    where
        K: cmp::Ord,
    {
        let node = link.as_deref()?;
        match key.cmp(&node.key) {
            cmp::Ordering::Less => Self::search_node(&node.left, key),
            cmp::Ordering::Equal => Some(node),
            cmp::Ordering::Greater => Self::search_node(&node.right, key),
        }
    }

    fn delete_node(link: Link<K>, key: &K) -> Link<K>
    where
        K: cmp::Ord,
    {
        let mut node = link?;
        match key.cmp(&node.key) {
            cmp::Ordering::Less => node.left = Self::delete_node(node.left.take(), key),
            cmp::Ordering::Greater => node.right = Self::delete_node(node.right.take(), key),
            cmp::Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => return Some(child),
                (Some(left), Some(right)) => {
                    // Two children: unlink the in-order successor (the
                    // minimum of the right subtree, never the maximum of
                    // the left) and promote its key into this node. The
                    // node itself is reused, only its key changes.
                    let (right, successor_key) = Self::delete_min(right);
                    node.key = successor_key;
                    node.left = Some(left);
                    node.right = right;
                }
            },
        }
        Some(node)
    }

    /// Unlinks the minimum node of the given subtree, returning the
    /// remaining subtree and the minimum's key. The minimum has no left
    /// child, so removing it is always a leaf or one-child splice.
    fn delete_min(mut node: Box<Node<K>>) -> (Link<K>, K) {
        match node.left.take() {
            None => (node.right.take(), node.key),
            Some(left) => {
                let (rest, min_key) = Self::delete_min(left);
                node.left = rest;
                (Some(node), min_key)
            }
        }
    }

    fn visit_in_order<'a>(link: &'a Link<K>, keys: &mut Vec<&'a K>) {
        if let Some(node) = link {
            Self::visit_in_order(&node.left, keys);
            keys.push(&node.key);
            Self::visit_in_order(&node.right, keys);
        }
    }
}

/// A `Node` holds one key and exclusively owns its two child subtrees
/// (either of which may be empty). Handed out read-only by
/// [`Tree::search`].
#[derive(Clone, Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key this node was inserted with.
    pub fn key(&self) -> &K {
        &self.key
    }
}

/// A `Node` displays as its key's textual representation.
///
/// ```
/// use naive_bst::recursive::Tree;
///
/// let mut tree = Tree::new();
/// tree.insert(50);
///
/// assert_eq!(tree.search(&50).unwrap().to_string(), "50");
/// ```
impl<K> fmt::Display for Node<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}
