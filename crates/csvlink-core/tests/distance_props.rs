//! Metric properties of the edit-distance primitive.

use csvlink_core::distance;
use proptest::prelude::*;

proptest! {
    #[test]
    fn identity(s in ".{0,40}") {
        prop_assert_eq!(distance(&s, &s), 0);
    }

    #[test]
    fn symmetry(a in ".{0,30}", b in ".{0,30}") {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn triangle_inequality(a in ".{0,15}", b in ".{0,15}", c in ".{0,15}") {
        prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }
}

#[test]
fn known_distances() {
    assert_eq!(distance("kitten", "sitting"), 3);
    assert_eq!(distance("", "abc"), 3);
    assert_eq!(distance("abc", ""), 3);
    assert_eq!(distance("flaw", "lawn"), 2);
}
