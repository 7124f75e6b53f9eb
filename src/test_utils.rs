use std::fmt::Display;

use proptest::prelude::*;

use crate::{node::Node, Endpoint, Interval};

const RANGE_MAX: i64 = 30;

/// Generate arbitrary (potentially malformed!) intervals with bounds from
/// [0..[`RANGE_MAX`]).
///
/// The small domain encourages overlapping intervals and duplicate start
/// bounds.
pub(crate) fn arbitrary_interval() -> impl Strategy<Value = Interval<i64>> {
    (0..RANGE_MAX, 0..RANGE_MAX).prop_map(|(start, end)| Interval::new(start, end))
}

/// Render the subtree rooted at `n` in a compact, parenthesised pre-order
/// form.
///
/// A leaf renders as `[start, end]`, an inner node as `[start, end](L R)`, and
/// an absent child as `-`.
pub(crate) fn render<R>(n: Option<&Node<R>>) -> String
where
    R: Endpoint + Display,
{
    let Some(n) = n else {
        return "-".to_string();
    };

    let label = format!("[{}, {}]", n.interval().start(), n.interval().end());
    if n.left().is_none() && n.right().is_none() {
        return label;
    }

    format!("{label}({} {})", render(n.left()), render(n.right()))
}

#[test]
fn test_render() {
    let mut n = Box::new(Node::new(Interval::new(5, 10)));
    assert_eq!(render(Some(&*n)), "[5, 10]");

    n.insert(Interval::new(2, 6));
    assert_eq!(render(Some(&*n)), "[5, 10]([2, 6] -)");

    n.insert(Interval::new(8, 12));
    assert_eq!(render(Some(&*n)), "[5, 10]([2, 6] [8, 12])");

    assert_eq!(render::<i64>(None), "-");
}
