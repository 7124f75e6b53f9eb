use crate::{
    error::Error,
    interval::{Endpoint, Interval},
    iter::{OverlapsPruner, PointPruner, PruningIter, RefIter},
    node::Node,
};

/// An AVL-balanced interval tree, augmented with the maximum upper bound of
/// each subtree.
///
/// Intervals are closed (`[start, end]`) and ordered by their start bound.
/// Duplicate intervals are retained. There is no removal; replace the tree to
/// discard its contents.
#[derive(Debug, Clone)]
pub struct IntervalTree<R>(Option<Box<Node<R>>>);

impl<R> Default for IntervalTree<R> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<R> IntervalTree<R>
where
    R: Endpoint,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `interval` into the tree, rebalancing it as needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if the interval start is greater
    /// than its end, or the bounds cannot be compared. The tree is left
    /// unchanged.
    pub fn insert(&mut self, interval: impl Into<Interval<R>>) -> Result<(), Error<R>> {
        let interval = interval.into();
        if !interval.is_well_formed() {
            return Err(Error::InvalidInterval {
                start: interval.start(),
                end: interval.end(),
            });
        }

        match self.0 {
            Some(ref mut v) => v.insert(interval),
            None => self.0 = Some(Box::new(Node::new(interval))),
        }

        Ok(())
    }

    /// Return all intervals containing `point`, inclusive of their bounds.
    ///
    /// Intervals are yielded in ascending order of their start bound.
    pub fn query_point(&self, point: R) -> impl Iterator<Item = &Interval<R>> {
        self.0
            .iter()
            .flat_map(move |v| PruningIter::new(v, PointPruner(point)))
            .map(|v| v.interval())
    }

    /// Return all intervals overlapping `query`, including those that only
    /// touch one of its bounds.
    ///
    /// Intervals are yielded in ascending order of their start bound.
    pub fn query_interval(
        &self,
        query: impl Into<Interval<R>>,
    ) -> impl Iterator<Item = &Interval<R>> {
        let query = query.into();
        self.0
            .iter()
            .flat_map(move |v| PruningIter::new(v, OverlapsPruner(query)))
            .map(|v| v.interval())
    }

    /// Iterate over all intervals in the tree, in ascending order of their
    /// start bound.
    pub fn iter(&self) -> impl Iterator<Item = &Interval<R>> {
        self.0
            .iter()
            .flat_map(|v| RefIter::new(v))
            .map(|v| v.interval())
    }

    /// Collect all intervals in the tree, in ascending order of their start
    /// bound.
    pub fn intervals(&self) -> Vec<Interval<R>> {
        self.iter().copied().collect()
    }

    /// The height of the tree, read from the cached root height.
    ///
    /// An empty tree has a height of 0, a single interval a height of 1.
    pub fn height(&self) -> usize {
        self.0.as_ref().map(|v| v.height() as usize).unwrap_or_default()
    }

    /// The number of intervals in the tree.
    ///
    /// This is not cached, and visits every node.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}
