use crate::{node::Node, Endpoint, Interval};

use super::pruning_iter::PruningOracle;

/// Yields all intervals containing a single point.
#[derive(Debug)]
pub(crate) struct PointPruner<R>(pub(crate) R);

impl<R> PruningOracle<R> for PointPruner<R>
where
    R: Endpoint,
{
    fn visit_subtree(&self, subtree_root: &Node<R>) -> bool {
        // Every interval in this subtree ends before the point.
        subtree_root.subtree_max() >= self.0
    }

    fn visit_right(&self, n: &Node<R>) -> bool {
        // Every interval in the right subtree starts at or after "n", so if
        // "n" starts after the point, none of them can contain it.
        n.interval().start() <= self.0
    }

    fn filter_yield(&self, n: &Node<R>) -> bool {
        n.interval().contains_point(self.0)
    }
}

/// Yields all intervals overlapping a closed query interval.
#[derive(Debug)]
pub(crate) struct OverlapsPruner<R>(pub(crate) Interval<R>);

impl<R> PruningOracle<R> for OverlapsPruner<R>
where
    R: Endpoint,
{
    fn visit_subtree(&self, subtree_root: &Node<R>) -> bool {
        subtree_root.subtree_max() >= self.0.start()
    }

    fn visit_right(&self, n: &Node<R>) -> bool {
        n.interval().start() <= self.0.end()
    }

    fn filter_yield(&self, n: &Node<R>) -> bool {
        n.interval().overlaps(&self.0)
    }
}
