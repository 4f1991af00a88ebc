//! Augmented interval tree -- the per-day conflict-detection structure.
//!
//! A binary search tree keyed on interval start minute, where each node also
//! caches the maximum end minute across its subtree. That augmentation lets
//! [`IntervalTree::overlap_search`] descend a single root-to-leaf path instead
//! of scanning every stored interval.
//!
//! Nodes live in an arena (`Vec<Node>`) and reference children by index, so
//! the tree needs no `Box` chains and traversals never fight the borrow
//! checker. No rebalancing is performed; depth is bounded by insertion order,
//! which is fine for per-day event counts.

use crate::interval::Interval;

#[derive(Debug, Clone)]
struct Node {
    interval: Interval,
    /// Maximum `end_minute` across this node's entire subtree.
    max_end: u32,
    left: Option<usize>,
    right: Option<usize>,
}

impl Node {
    fn new(interval: Interval) -> Self {
        let max_end = interval.end_minute();
        Self {
            interval,
            max_end,
            left: None,
            right: None,
        }
    }
}

/// An augmented BST holding the intervals scheduled for one calendar date.
#[derive(Debug, Clone, Default)]
pub struct IntervalTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl IntervalTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored intervals.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert an interval, keyed on its start minute.
    ///
    /// Equal start minutes descend right, so duplicates are kept as distinct
    /// nodes in insertion order rather than being dropped. `max_end` is
    /// refreshed on every node along the descent path.
    pub fn insert(&mut self, interval: Interval) {
        let start = interval.start_minute();
        let end = interval.end_minute();

        let new_id = self.nodes.len();
        self.nodes.push(Node::new(interval));

        let Some(mut cur) = self.root else {
            self.root = Some(new_id);
            return;
        };

        loop {
            let node = &mut self.nodes[cur];
            if end > node.max_end {
                node.max_end = end;
            }
            let slot = if start < node.interval.start_minute() {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(child) => cur = child,
                None => {
                    *slot = Some(new_id);
                    return;
                }
            }
        }
    }

    /// Find some stored interval overlapping `query`, or `None` if no stored
    /// interval does.
    ///
    /// Classic augmented-tree descent: report the current node on a hit,
    /// otherwise go left iff the left subtree's cached max end reaches the
    /// query's start, else go right. A single path is examined, so the result
    /// is *an* overlap, not necessarily the earliest one.
    pub fn overlap_search(&self, query: &Interval) -> Option<&Interval> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            if node.interval.overlaps(query) {
                return Some(&node.interval);
            }
            cur = match node.left {
                Some(left) if self.nodes[left].max_end >= query.start_minute() => Some(left),
                _ => node.right,
            };
        }
        None
    }

    /// In-order iterator over the stored intervals (ascending start minute,
    /// insertion order among equal starts).
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }
}

impl<'a> IntoIterator for &'a IntervalTree {
    type Item = &'a Interval;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// In-order traversal over an [`IntervalTree`].
#[derive(Debug)]
pub struct Iter<'a> {
    tree: &'a IntervalTree,
    stack: Vec<usize>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut cur: Option<usize>) {
        while let Some(id) = cur {
            self.stack.push(id);
            cur = self.tree.nodes[id].left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Interval;

    fn next(&mut self) -> Option<&'a Interval> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id];
        self.push_left_spine(node.right);
        Some(&node.interval)
    }
}
