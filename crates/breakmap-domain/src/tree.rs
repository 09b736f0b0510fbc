//! Break tree - immutable balanced search tree over breakpoints
//!
//! Nodes live in a flat arena in key order, so the node for the `i`-th
//! smallest key sits at index `i`. The tree shape comes from recursive
//! median splits over that order, which keeps the height at
//! `floor(log2(n)) + 1`. Every child link caches the least and greatest key
//! of the subtree it points to, letting a strategy test adjacency at a node
//! without walking the subtree.

use crate::boundary::{NodeBounds, Step};
use crate::{Breakpoint, ConstructionError};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Link to a child subtree with its cached key extremes
#[derive(Debug, Clone, Copy)]
struct Branch<A> {
    index: usize,
    least: A,
    greatest: A,
}

#[derive(Debug, Clone)]
struct Node<A, B> {
    breakpoint: Breakpoint<A, B>,
    left: Option<Branch<A>>,
    right: Option<Branch<A>>,
}

impl<A: Copy, B> Node<A, B> {
    fn bounds(&self) -> NodeBounds<A> {
        NodeBounds {
            key: self.breakpoint.value,
            left_greatest: self.left.map(|b| b.greatest),
            right_least: self.right.map(|b| b.least),
        }
    }
}

/// Balanced binary search tree over a fixed set of breakpoints
///
/// Built once, never mutated. Searching performs no allocation.
///
/// # Examples
///
/// ```
/// use breakmap_domain::{BoundaryMode, BreakTree};
///
/// let tree: BreakTree<i32, char> = BreakTree::build([(1, 'a'), (5, 'b'), (10, 'c')]).unwrap();
/// let lte = BoundaryMode::LessThanOrEqualTo.strategy();
///
/// assert_eq!(tree.search(4, lte).map(|bp| bp.class), Some('b'));
/// assert_eq!(tree.search(11, lte), None);
/// ```
#[derive(Debug, Clone)]
pub struct BreakTree<A, B> {
    nodes: Vec<Node<A, B>>,
    root: usize,
}

impl<A, B> BreakTree<A, B>
where
    A: PartialOrd + Copy + Debug,
{
    /// Build a tree from breakpoints in any order
    ///
    /// Fails if the set is empty, if a key cannot be ordered (NaN), or if
    /// two breakpoints share a key.
    pub fn build<I>(breakpoints: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator,
        I::Item: Into<Breakpoint<A, B>>,
    {
        let mut sorted: Vec<Breakpoint<A, B>> =
            breakpoints.into_iter().map(Into::into).collect();

        if sorted.is_empty() {
            return Err(ConstructionError::Empty);
        }

        if let Some(index) = sorted
            .iter()
            .position(|bp| bp.value.partial_cmp(&bp.value).is_none())
        {
            return Err(ConstructionError::UnorderedKey { index });
        }

        // Every key is self-comparable now, so the fallback never triggers
        sorted.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));

        if let Some(pair) = sorted.windows(2).find(|w| w[0].value == w[1].value) {
            return Err(ConstructionError::DuplicateKey {
                key: format!("{:?}", pair[0].value),
            });
        }

        let mut nodes: Vec<Node<A, B>> = sorted
            .into_iter()
            .map(|breakpoint| Node {
                breakpoint,
                left: None,
                right: None,
            })
            .collect();

        let len = nodes.len();
        let root = Self::link(&mut nodes, 0, len).map_or(0, |b| b.index);

        Ok(Self { nodes, root })
    }

    /// Wire up the subtree over `nodes[lo..hi]` and return a link to its root
    fn link(nodes: &mut [Node<A, B>], lo: usize, hi: usize) -> Option<Branch<A>> {
        if lo >= hi {
            return None;
        }

        let mid = lo + (hi - lo) / 2;
        let left = Self::link(nodes, lo, mid);
        let right = Self::link(nodes, mid + 1, hi);

        let node = &mut nodes[mid];
        node.left = left;
        node.right = right;

        Some(Branch {
            index: mid,
            least: nodes[lo].breakpoint.value,
            greatest: nodes[hi - 1].breakpoint.value,
        })
    }

    /// Walk from the root, letting `strategy` decide at each node
    ///
    /// Returns `None` when the walk falls off the tree, i.e. no breakpoint
    /// satisfies the strategy's relation.
    pub fn search<F>(&self, query: A, strategy: F) -> Option<&Breakpoint<A, B>>
    where
        F: Fn(A, &NodeBounds<A>) -> Step,
    {
        let mut cursor = Some(self.root);

        while let Some(index) = cursor {
            let node = &self.nodes[index];
            cursor = match strategy(query, &node.bounds()) {
                Step::Accept => return Some(&node.breakpoint),
                Step::Left => node.left.map(|b| b.index),
                Step::Right => node.right.map(|b| b.index),
            };
        }

        None
    }

    /// Number of breakpoints
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; an empty tree cannot be built
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Breakpoints in increasing key order
    pub fn breakpoints(&self) -> impl Iterator<Item = &Breakpoint<A, B>> + '_ {
        self.nodes.iter().map(|node| &node.breakpoint)
    }

    /// Smallest key
    pub fn min_key(&self) -> A {
        self.nodes[0].breakpoint.value
    }

    /// Largest key
    pub fn max_key(&self) -> A {
        self.nodes[self.nodes.len() - 1].breakpoint.value
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        self.depth_below(Some(self.root))
    }

    fn depth_below(&self, index: Option<usize>) -> usize {
        match index {
            None => 0,
            Some(i) => {
                let node = &self.nodes[i];
                1 + self
                    .depth_below(node.left.map(|b| b.index))
                    .max(self.depth_below(node.right.map(|b| b.index)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundaryMode;

    fn sample() -> BreakTree<i32, char> {
        BreakTree::build([(10, 'c'), (1, 'a'), (5, 'b')]).unwrap()
    }

    /// In-order walk over the linked structure (not the arena order)
    fn in_order<A: PartialOrd + Copy + Debug, B>(tree: &BreakTree<A, B>) -> Vec<A> {
        fn walk<A: PartialOrd + Copy + Debug, B>(
            tree: &BreakTree<A, B>,
            index: Option<usize>,
            out: &mut Vec<A>,
        ) {
            if let Some(i) = index {
                let node = &tree.nodes[i];
                walk(tree, node.left.map(|b| b.index), out);
                out.push(node.breakpoint.value);
                walk(tree, node.right.map(|b| b.index), out);
            }
        }

        let mut out = Vec::new();
        walk(tree, Some(tree.root), &mut out);
        out
    }

    #[test]
    fn test_build_empty_fails() {
        let result = BreakTree::<i32, i32>::build(Vec::<(i32, i32)>::new());
        assert_eq!(result.unwrap_err(), ConstructionError::Empty);
    }

    #[test]
    fn test_build_rejects_nan_key() {
        let result = BreakTree::<f64, i32>::build([(1.0, 1), (f64::NAN, 2)]);
        assert_eq!(
            result.unwrap_err(),
            ConstructionError::UnorderedKey { index: 1 }
        );
    }

    #[test]
    fn test_build_rejects_duplicate_key() {
        let result = BreakTree::<i32, char>::build([(3, 'x'), (1, 'y'), (3, 'z')]);
        assert_eq!(
            result.unwrap_err(),
            ConstructionError::DuplicateKey {
                key: "3".to_string()
            }
        );
    }

    #[test]
    fn test_sorted_and_balanced() {
        let tree = sample();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.root, 1);
        assert_eq!(in_order(&tree), vec![1, 5, 10]);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.min_key(), 1);
        assert_eq!(tree.max_key(), 10);
    }

    #[test]
    fn test_cached_extremes() {
        let tree: BreakTree<i32, i32> = BreakTree::build((0..7).map(|k| (k * 10, k))).unwrap();
        let root = &tree.nodes[tree.root];
        assert_eq!(root.breakpoint.value, 30);

        let left = root.left.unwrap();
        assert_eq!((left.least, left.greatest), (0, 20));
        let right = root.right.unwrap();
        assert_eq!((right.least, right.greatest), (40, 60));

        let bounds = root.bounds();
        assert_eq!(bounds.left_greatest, Some(20));
        assert_eq!(bounds.right_least, Some(40));
    }

    #[test]
    fn test_height_is_logarithmic() {
        for n in 1..=130usize {
            let tree: BreakTree<i64, i64> = BreakTree::build((0..n as i64).map(|k| (k, k))).unwrap();
            let expected = (usize::BITS - n.leading_zeros()) as usize;
            assert_eq!(tree.height(), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_search_single_node() {
        let tree: BreakTree<i32, char> = BreakTree::build([(5, 'x')]).unwrap();
        let gte = BoundaryMode::GreaterThanOrEqualTo.strategy();
        assert_eq!(tree.search(7, gte).map(|bp| bp.class), Some('x'));
        assert_eq!(tree.search(4, gte), None);
    }

    #[test]
    fn test_search_with_closure() {
        let tree = sample();
        // A custom strategy: always go right until the end
        let rightmost = tree.search(0, |_, node: &NodeBounds<i32>| {
            if node.right_least.is_none() {
                Step::Accept
            } else {
                Step::Right
            }
        });
        assert_eq!(rightmost.map(|bp| bp.class), Some('c'));
    }

    #[test]
    fn test_breakpoints_in_order() {
        let tree = sample();
        let classes: Vec<char> = tree.breakpoints().map(|bp| bp.class).collect();
        assert_eq!(classes, vec!['a', 'b', 'c']);
    }
}
