//! Structural verification of left-leaning red-black trees

use super::OrderedMap;
use super::node::{Color, Link};
use crate::compare::Comparator;
use crate::error::{InvariantKind, OmapError, Result};

impl<K, V, C: Comparator<K>> OrderedMap<K, V, C> {
    /// Verify every structural invariant of the tree
    ///
    /// Checks key order under the comparator, that no red node has a red
    /// child, that no red link leans right, perfect black balance, a black root
    /// and the cached entry count. Returns the black height of the
    /// tree (0 when empty).
    ///
    /// Runs in O(n); intended for tests and debugging.
    ///
    /// ```rust
    /// use omap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// for i in 0..100 {
    ///     map.insert(i, i * 2);
    /// }
    /// let black_height = map.check_invariants().unwrap();
    /// assert!(black_height >= 1);
    /// ```
    pub fn check_invariants(&self) -> Result<usize> {
        if let Some(root) = self.root.as_ref() {
            if root.color != Color::Black {
                return Err(OmapError::invariant(
                    InvariantKind::RootNotBlack,
                    "root node is red",
                ));
            }
        }

        let mut count = 0;
        let black_height = self.check_subtree(&self.root, None, None, 0, &mut count)?;

        if count != self.len {
            return Err(OmapError::invariant(
                InvariantKind::LengthMismatch,
                format!("tree holds {} nodes but len() is {}", count, self.len),
            ));
        }

        Ok(black_height)
    }

    /// Length of the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        fn depth<K, V>(link: &Link<K, V>) -> usize {
            match link {
                Some(node) => 1 + depth(&node.left).max(depth(&node.right)),
                None => 0,
            }
        }
        depth(&self.root)
    }

    fn check_subtree(
        &self,
        link: &Link<K, V>,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
        count: &mut usize,
    ) -> Result<usize> {
        let Some(node) = link else {
            return Ok(0);
        };
        *count += 1;

        if lower.is_some_and(|lo| !self.cmp.less(lo, &node.key)) {
            return Err(OmapError::invariant(
                InvariantKind::KeyOrder,
                format!("node at depth {} does not sort after its left ancestor", depth),
            ));
        }
        if upper.is_some_and(|hi| !self.cmp.less(&node.key, hi)) {
            return Err(OmapError::invariant(
                InvariantKind::KeyOrder,
                format!("node at depth {} does not sort before its right ancestor", depth),
            ));
        }
        let red_chain = [&node.left, &node.right]
            .into_iter()
            .flatten()
            .any(|child| child.color == Color::Red && (child.left_is_red() || child.right_is_red()));
        if red_chain {
            return Err(OmapError::invariant(
                InvariantKind::DoubleRed,
                format!("node at depth {} starts two consecutive red links", depth),
            ));
        }
        if node.right_is_red() {
            return Err(OmapError::invariant(
                InvariantKind::RightLeaningRed,
                format!("node at depth {} has a red right child", depth),
            ));
        }

        let left = self.check_subtree(&node.left, lower, Some(&node.key), depth + 1, count)?;
        let right = self.check_subtree(&node.right, Some(&node.key), upper, depth + 1, count)?;
        if left != right {
            return Err(OmapError::invariant(
                InvariantKind::BlackImbalance,
                format!(
                    "node at depth {} has black height {} on the left and {} on the right",
                    depth, left, right
                ),
            ));
        }

        Ok(left + usize::from(node.color == Color::Black))
    }
}
