//! An in-memory interval index answering "which intervals contain this point"
//! and "which intervals overlap this range" in `O(log n + k)` time.
//!
//! Intervals are closed (`[start, end]`) numeric ranges, stored in an AVL
//! balanced binary search tree ordered by start bound. Each node caches the
//! maximum end bound of its subtree, allowing queries to skip subtrees that
//! cannot contain a match.
//!
//! * [`IntervalTree`] is the balanced, augmented tree itself.
//! * [`bulk::build()`] constructs a tree from a batch of intervals, seeding
//!   it in a rotation-friendly insertion order.
//! * [`IntervalIndex`] wraps a tree with a load / query / rebuild lifecycle
//!   and query validation.
//!
//! ```
//! use interval_index::{Interval, IntervalTree};
//!
//! let mut t = IntervalTree::new();
//! t.insert((5, 10)).unwrap();
//! t.insert((2, 6)).unwrap();
//! t.insert((8, 12)).unwrap();
//!
//! let got = t.query_point(6).copied().collect::<Vec<_>>();
//! assert_eq!(got, [Interval::new(2, 6), Interval::new(5, 10)]);
//!
//! // Malformed intervals are rejected.
//! assert!(t.insert((9, 1)).is_err());
//! ```

pub mod bulk;
mod error;
mod index;
mod interval;
mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use index::{IntervalIndex, State};
pub use interval::{Endpoint, Interval};
pub use tree::IntervalTree;
