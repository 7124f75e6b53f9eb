use std::{cmp::Ordering, fmt::Debug, ops::RangeInclusive};

/// A numeric bound type that can be stored in an [`Interval`].
///
/// Implemented for all primitive integer and floating point types.
pub trait Endpoint: PartialOrd + Copy + Debug {
    /// Widen this value to an [`f64`].
    ///
    /// Used only to order intervals by midpoint when bulk loading, so a loss
    /// of precision for very large integers affects the seed insertion order
    /// and never query results.
    fn to_f64(self) -> f64;
}

macro_rules! impl_endpoint {
    ($($t:ty),+) => {
        $(
            impl Endpoint for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_endpoint!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// A closed interval `[start, end]`.
///
/// Construction is unchecked; an [`Interval`] whose `start` is greater than
/// its `end` (or whose bounds cannot be compared, such as `NaN`) is rejected
/// when inserted into an [`IntervalTree`](crate::IntervalTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "(R, R)",
        into = "(R, R)",
        bound(
            serialize = "R: serde::Serialize + Clone",
            deserialize = "R: serde::Deserialize<'de>"
        )
    )
)]
pub struct Interval<R> {
    start: R,
    end: R,
}

impl<R> Interval<R>
where
    R: Endpoint,
{
    pub fn new(start: R, end: R) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> R {
        self.start
    }

    pub fn end(&self) -> R {
        self.end
    }

    /// Returns true when `start <= end`.
    ///
    /// Bounds that do not compare (`NaN`) are never well-formed.
    pub fn is_well_formed(&self) -> bool {
        matches!(
            self.start.partial_cmp(&self.end),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Returns true if `point` lies within `[start, end]`, inclusive of both
    /// bounds.
    pub fn contains_point(&self, point: R) -> bool {
        self.start <= point && point <= self.end
    }

    /// Returns true if `self` and `other` share at least one point.
    ///
    /// Intervals that only touch at an endpoint overlap.
    pub fn overlaps(&self, other: &Interval<R>) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The midpoint `(start + end) / 2`.
    pub fn midpoint(&self) -> f64 {
        (self.start.to_f64() + self.end.to_f64()) / 2.0
    }
}

impl<R> From<(R, R)> for Interval<R> {
    fn from((start, end): (R, R)) -> Self {
        Self { start, end }
    }
}

impl<R> From<[R; 2]> for Interval<R> {
    fn from([start, end]: [R; 2]) -> Self {
        Self { start, end }
    }
}

impl<R> From<RangeInclusive<R>> for Interval<R> {
    fn from(value: RangeInclusive<R>) -> Self {
        let (start, end) = value.into_inner();
        Self { start, end }
    }
}

impl<R> From<Interval<R>> for (R, R) {
    fn from(value: Interval<R>) -> Self {
        (value.start, value.end)
    }
}

impl<R> PartialEq<(R, R)> for Interval<R>
where
    R: PartialEq,
{
    fn eq(&self, other: &(R, R)) -> bool {
        self.start == other.0 && self.end == other.1
    }
}
