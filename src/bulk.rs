//! Construct an [`IntervalTree`] from a batch of intervals.
//!
//! The batch is ordered by interval midpoint, and the median of each sorted
//! sub-range is inserted before its two halves. This seeds the tree in a
//! nearly balanced shape, reducing the number of rotations performed compared
//! to inserting in arrival or start order. The resulting tree is AVL balanced
//! regardless.

use log::trace;

use crate::{Endpoint, Error, Interval, IntervalTree};

/// Build an [`IntervalTree`] containing all `intervals`.
///
/// An empty batch yields an empty tree.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] for the first interval in `intervals`
/// that is not well-formed. No tree is built.
pub fn build<R, I>(intervals: I) -> Result<IntervalTree<R>, Error<R>>
where
    R: Endpoint,
    I: IntoIterator,
    I::Item: Into<Interval<R>>,
{
    let intervals = intervals
        .into_iter()
        .map(Into::into)
        .map(|v: Interval<R>| {
            if v.is_well_formed() {
                Ok(v)
            } else {
                Err(Error::InvalidInterval {
                    start: v.start(),
                    end: v.end(),
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let n = intervals.len();
    let mut tree = IntervalTree::new();
    for v in seed_order(intervals) {
        tree.insert(v)?;
    }

    trace!(
        "bulk loaded {} intervals, tree height {}",
        n,
        tree.height()
    );

    Ok(tree)
}

/// Order `intervals` for insertion: sort by midpoint, then emit the median of
/// each sorted sub-range before the medians of its two halves.
fn seed_order<R>(mut intervals: Vec<Interval<R>>) -> Vec<Interval<R>>
where
    R: Endpoint,
{
    // A stable sort keeps intervals with equal midpoints in arrival order.
    intervals.sort_by(|a, b| a.midpoint().total_cmp(&b.midpoint()));

    let mut out = Vec::with_capacity(intervals.len());
    push_medians(&intervals, &mut out);
    out
}

/// Push the median of `intervals`, then recurse into each half.
///
/// Recursion depth is bounded by `log2(intervals.len())`.
fn push_medians<R>(intervals: &[Interval<R>], out: &mut Vec<Interval<R>>)
where
    R: Endpoint,
{
    if intervals.is_empty() {
        return;
    }

    let mid = (intervals.len() - 1) / 2;
    out.push(intervals[mid]);

    push_medians(&intervals[..mid], out);
    push_medians(&intervals[mid + 1..], out);
}
