use log::{debug, trace};

use crate::{Endpoint, Error, Interval, IntervalTree};

/// The lifecycle state of an [`IntervalIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// No intervals have been loaded, or the last load was empty.
    #[default]
    Uninitialized,

    /// The index holds a tree and accepts queries.
    Ready,
}

/// An [`IntervalTree`] with a load / query / rebuild lifecycle.
///
/// The index is populated from a flat batch of intervals supplied by some
/// producer (a store, a generated dataset, ...) and answers point and range
/// queries until it is rebuilt from a new batch. A rebuild replaces the
/// previous contents entirely.
///
/// Intervals are inserted one at a time in the order given, and balance is
/// maintained by the tree's own rotations (see [`crate::bulk::build()`] for a
/// batch-optimised construction).
///
/// ```
/// use interval_index::{Interval, IntervalIndex};
///
/// let mut index = IntervalIndex::new();
/// index.initialize([(1, 3), (2, 5), (4, 7), (8, 10)]).unwrap();
///
/// let mut got = index.query_range(3, 6).unwrap();
/// got.sort_by_key(|v| v.start());
/// assert_eq!(got, [Interval::new(1, 3), Interval::new(2, 5), Interval::new(4, 7)]);
/// ```
///
/// Mutation requires exclusive access, so a query can never observe a
/// partially rebuilt tree. Share an index between threads behind a lock such
/// as [`std::sync::RwLock`].
#[derive(Debug, Clone)]
pub struct IntervalIndex<R> {
    tree: IntervalTree<R>,
    state: State,
}

impl<R> Default for IntervalIndex<R> {
    fn default() -> Self {
        Self {
            tree: IntervalTree::default(),
            state: State::default(),
        }
    }
}

impl<R> IntervalIndex<R>
where
    R: Endpoint,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of the index with `intervals`.
    ///
    /// An empty batch leaves the index empty and [`State::Uninitialized`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if any interval is not well-formed,
    /// in which case the previous contents and state are retained.
    pub fn initialize<I>(&mut self, intervals: I) -> Result<(), Error<R>>
    where
        I: IntoIterator,
        I::Item: Into<Interval<R>>,
    {
        // Build the replacement to completion before swapping it in, so a
        // rejected batch leaves the current tree intact.
        let mut tree = IntervalTree::new();
        for v in intervals {
            tree.insert(v).inspect_err(|e| trace!("rejected interval batch: {e}"))?;
        }

        self.state = if tree.is_empty() {
            State::Uninitialized
        } else {
            State::Ready
        };
        self.tree = tree;

        debug!(
            "interval index loaded, state={:?}, n_intervals={}, height={}",
            self.state,
            self.tree.len(),
            self.tree.height()
        );

        Ok(())
    }

    /// Replace the contents of the index with `intervals`.
    ///
    /// Identical to [`IntervalIndex::initialize()`]; no intervals from the
    /// previous load are retained.
    pub fn rebuild<I>(&mut self, intervals: I) -> Result<(), Error<R>>
    where
        I: IntoIterator,
        I::Item: Into<Interval<R>>,
    {
        self.initialize(intervals)
    }

    /// Return all intervals overlapping the closed range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] if the index holds no intervals, and
    /// [`Error::InvalidRange`] if `start` is greater than `end`.
    pub fn query_range(&self, start: R, end: R) -> Result<Vec<Interval<R>>, Error<R>> {
        self.ensure_ready()?;

        let query = Interval::new(start, end);
        if !query.is_well_formed() {
            trace!("rejected query range [{start:?}, {end:?}]");
            return Err(Error::InvalidRange { start, end });
        }

        Ok(self.tree.query_interval(query).copied().collect())
    }

    /// Return all intervals containing `point`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] if the index holds no intervals.
    pub fn query_point(&self, point: R) -> Result<Vec<Interval<R>>, Error<R>> {
        self.ensure_ready()?;

        Ok(self.tree.query_point(point).copied().collect())
    }

    /// All stored intervals, in ascending order of their start bound.
    pub fn intervals(&self) -> Vec<Interval<R>> {
        self.tree.intervals()
    }

    /// The number of stored intervals.
    ///
    /// This visits every interval in the index.
    pub fn interval_count(&self) -> usize {
        self.tree.len()
    }

    pub fn tree_height(&self) -> usize {
        self.tree.height()
    }

    pub fn is_initialized(&self) -> bool {
        self.state == State::Ready
    }

    pub fn state(&self) -> State {
        self.state
    }

    fn ensure_ready(&self) -> Result<(), Error<R>> {
        match self.state {
            State::Ready => Ok(()),
            State::Uninitialized => {
                trace!("query rejected, interval index is not initialised");
                Err(Error::NotInitialized)
            }
        }
    }
}
