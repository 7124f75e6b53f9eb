use crate::interval::{Endpoint, Interval};

#[derive(Debug, Clone)]
pub(crate) struct Node<R> {
    /// Child nodes pointers.
    left: Option<Box<Node<R>>>,
    right: Option<Box<Node<R>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent child counts as 0.
    ///
    /// A u8 holds a maximum value of 255, which is far beyond the height of
    /// any AVL tree that fits in memory.
    height: u8,

    /// The maximum upper bound of all intervals for the subtree rooted at this
    /// [`Node`].
    subtree_max: R,

    interval: Interval<R>,
}

impl<R> Node<R> {
    pub(crate) fn interval(&self) -> &Interval<R> {
        &self.interval
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }
}

impl<R> Node<R>
where
    R: Endpoint,
{
    pub(crate) fn new(interval: Interval<R>) -> Self {
        Self {
            subtree_max: interval.end(),
            interval,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `interval` into the subtree rooted at `self`, rebalancing it on
    /// the way back up.
    ///
    /// Intervals are ordered by their start bound only. An interval with a
    /// start equal to this node's start descends right, so duplicates are
    /// retained.
    pub(crate) fn insert(self: &mut Box<Self>, interval: Interval<R>) {
        let child = if interval.start() < self.interval.start() {
            &mut self.left
        } else {
            &mut self.right
        };

        match child {
            Some(v) => v.insert(interval),
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(interval)));

                // Inserting this new child node cannot skew the tree in the
                // direction of the new addition such that it requires the tree
                // be rebalanced as, at most, it creates an absolute difference
                // of 1 in this direction (from balanced, or slightly skewed in
                // the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                self.update_height();
                self.update_subtree_max();
                return;
            }
        };

        self.update_height();
        self.update_subtree_max();

        // Determine the balance factor of the subtree rooted at self and
        // correct it if the absolute difference in height between branches is
        // > 1.
        //
        // The side of the unbalanced child that received the new interval is
        // derived from the same start comparison used to descend.
        match (self.balance_factor(), self.left(), self.right()) {
            // Left-heavy, inserted into the outer (left-left) grandchild.
            (2, Some(l), _) if interval.start() < l.interval.start() => {
                rotate_right(self);
            }
            // Left-heavy, inserted into the inner (left-right) grandchild.
            (2, Some(_l), _) => {
                if let Some(l) = self.left_mut() {
                    rotate_left(l);
                }
                rotate_right(self);
            }
            // Right-heavy, inserted into the outer (right-right) grandchild.
            (-2, _, Some(r)) if interval.start() >= r.interval.start() => {
                rotate_left(self);
            }
            // Right-heavy, inserted into the inner (right-left) grandchild.
            (-2, _, Some(_r)) => {
                if let Some(r) = self.right_mut() {
                    rotate_right(r);
                }
                rotate_left(self);
            }
            (-1..=1, _, _) => { /* The tree is well balanced */ }
            _ => unreachable!(),
        };

        // Invariant: the absolute difference between tree heights ("balance
        // factor") cannot exceed 1.
        debug_assert!(self.balance_factor().abs() <= 1);
    }

    pub(crate) fn subtree_max(&self) -> R {
        self.subtree_max
    }

    /// Recompute the height of this node from its (already correct) children.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
    }

    /// Recompute the maximum upper bound of the subtree rooted at this node
    /// from its own interval and its (already correct) children.
    pub(crate) fn update_subtree_max(&mut self) {
        let mut max = self.interval.end();
        for child in [self.left(), self.right()].into_iter().flatten() {
            if child.subtree_max > max {
                max = child.subtree_max;
            }
        }
        self.subtree_max = max;
    }

    /// Compute the "balance factor" of the subtree rooted at `self`.
    ///
    /// Returns the subtree height skew / magnitude, which is a positive number
    /// when left heavy, and a negative number when right heavy.
    pub(crate) fn balance_factor(&self) -> i8 {
        // Correctness: the height is a u8, the maximal value of which fits in
        // an i16 without truncation or sign inversion.
        (height(self.left()) as i16 - height(self.right()) as i16) as i8
    }
}

fn height<R>(n: Option<&Node<R>>) -> u8 {
    n.map(|v| v.height).unwrap_or_default()
}

/// Walk the whole subtree rooted at `n` and compute its height without
/// reading any cached value.
#[cfg(test)]
pub(crate) fn recompute_height<R>(n: Option<&Node<R>>) -> usize {
    match n {
        Some(n) => 1 + recompute_height(n.left.as_deref()).max(recompute_height(n.right.as_deref())),
        None => 0,
    }
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// The demoted `x` has its aggregates recomputed before the promoted `P`,
/// which depends on them.
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<R>(x: &mut Box<Node<R>>)
where
    R: Endpoint,
{
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    p.update_height();
    p.update_subtree_max();

    x.left = Some(p);
    x.update_height();
    x.update_subtree_max();
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// The demoted `y` has its aggregates recomputed before the promoted `P`,
/// which depends on them.
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<R>(y: &mut Box<Node<R>>)
where
    R: Endpoint,
{
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    p.update_height();
    p.update_subtree_max();

    y.right = Some(p);
    y.update_height();
    y.update_subtree_max();
}
