//! Tree nodes and the rebalancing primitives shared by insertion and deletion
//!
//! Every primitive takes ownership of a subtree root and hands back the new
//! root, so restructuring never needs parent pointers. All of them are total:
//! when a rotation finds no child to pivot on it returns the subtree as is.

use super::stats::MapStats;

/// Color of the link from a node's parent to the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    #[inline]
    fn flipped(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// Owning link to a child subtree; `None` is a black nil
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// New leaves are red: they do not count toward black height
    #[inline]
    pub(crate) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        })
    }

    /// Consume a node that is being unlinked, yielding its entry and the
    /// right subtree that takes its place
    #[inline]
    pub(crate) fn unlink(self: Box<Self>) -> (Link<K, V>, (K, V)) {
        let node = *self;
        (node.right, (node.key, node.value))
    }

    #[inline]
    pub(crate) fn left_is_red(&self) -> bool {
        is_red(&self.left)
    }

    #[inline]
    pub(crate) fn right_is_red(&self) -> bool {
        is_red(&self.right)
    }

    /// Left child and its own left child are both red
    #[inline]
    pub(crate) fn left_left_is_red(&self) -> bool {
        self.left.as_ref().is_some_and(|l| l.color == Color::Red && l.left_is_red())
    }

    /// Left child is black and so is its left child
    #[inline]
    pub(crate) fn left_needs_red(&self) -> bool {
        !self.left_is_red() && !self.left.as_ref().is_some_and(|l| l.left_is_red())
    }

    /// Right child is black and so is its left child
    #[inline]
    pub(crate) fn right_needs_red(&self) -> bool {
        !self.right_is_red() && !self.right.as_ref().is_some_and(|r| r.left_is_red())
    }
}

#[inline]
pub(crate) fn is_red<K, V>(link: &Link<K, V>) -> bool {
    matches!(link, Some(node) if node.color == Color::Red)
}

/// Rotations, color flips and the fix-up pass
///
/// Carries the optional statistics sink so structural work can be counted
/// without threading counters through every call.
#[derive(Clone, Copy)]
pub(crate) struct Rebalancer<'a> {
    stats: Option<&'a MapStats>,
}

impl<'a> Rebalancer<'a> {
    pub(crate) fn new(stats: Option<&'a MapStats>) -> Self {
        Self { stats }
    }

    /// Turn a right-leaning red link into a left-leaning one
    pub(crate) fn rotate_left<K, V>(&self, mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let Some(mut x) = h.right.take() else {
            return h;
        };
        h.right = x.left.take();
        x.color = h.color;
        h.color = Color::Red;
        x.left = Some(h);
        if let Some(stats) = self.stats {
            stats.record_rotation();
        }
        x
    }

    /// Lift the left child above its parent
    pub(crate) fn rotate_right<K, V>(&self, mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let Some(mut x) = h.left.take() else {
            return h;
        };
        h.left = x.right.take();
        x.color = h.color;
        h.color = Color::Red;
        x.right = Some(h);
        if let Some(stats) = self.stats {
            stats.record_rotation();
        }
        x
    }

    /// Toggle the colors of a node and both of its children
    pub(crate) fn flip_colors<K, V>(&self, h: &mut Node<K, V>) {
        h.color = h.color.flipped();
        if let Some(left) = h.left.as_mut() {
            left.color = left.color.flipped();
        }
        if let Some(right) = h.right.as_mut() {
            right.color = right.color.flipped();
        }
        if let Some(stats) = self.stats {
            stats.record_color_flip();
        }
    }

    /// Make `h.left` or one of its children red before descending left
    pub(crate) fn move_red_left<K, V>(&self, mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        self.flip_colors(&mut h);
        if h.right.as_ref().is_some_and(|r| r.left_is_red()) {
            h.right = h.right.take().map(|r| self.rotate_right(r));
            h = self.rotate_left(h);
            self.flip_colors(&mut h);
        }
        h
    }

    /// Make `h.right` or one of its children red before descending right
    pub(crate) fn move_red_right<K, V>(&self, mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        self.flip_colors(&mut h);
        if h.left.as_ref().is_some_and(|l| l.left_is_red()) {
            h = self.rotate_right(h);
            self.flip_colors(&mut h);
        }
        h
    }

    /// Restore the invariants at `h` on the way back up an insertion or deletion
    ///
    /// Leans a red right link left, untangles two red left links and splits
    /// the resulting 4-node, so `h` never keeps two red children.
    pub(crate) fn fix_up<K, V>(&self, mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if h.right_is_red() {
            h = self.rotate_left(h);
        }
        if h.left_left_is_red() {
            h = self.rotate_right(h);
        }
        if h.left_is_red() && h.right_is_red() {
            self.flip_colors(&mut h);
        }
        h
    }

    /// Remove the minimum entry of the subtree rooted at `h`
    ///
    /// `h` must be red or have a red left child; the borrowing below keeps
    /// that true at every level so the leftmost node is red when unlinked.
    pub(crate) fn delete_min<K, V>(&self, mut h: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
        if h.left.is_none() {
            return h.unlink();
        }
        if h.left_needs_red() {
            h = self.move_red_left(h);
        }
        match h.left.take() {
            Some(left) => {
                let (rest, min) = self.delete_min(left);
                h.left = rest;
                (Some(self.fix_up(h)), min)
            }
            None => h.unlink(),
        }
    }
}
