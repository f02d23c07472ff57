//! Collection-level conveniences layered on deep equality.
//!
//! Each element is the comparison source and `item` the compare side, so
//! intersection matching tolerates members missing on either.

use crate::equality::{deep_equals, DeepEqualityTester};
use crate::options::{CompareMode, CompareOptions};
use crate::reflect::Reflect;

fn tester(mode: CompareMode, ignore: &[&str]) -> DeepEqualityTester {
    DeepEqualityTester::new(
        CompareOptions::default()
            .with_mode(mode)
            .ignoring(ignore.iter().copied()),
    )
}

/// True when any element deep-equals `item`
pub fn contains_one_deep_equal_to<'a, T: Reflect>(
    items: impl IntoIterator<Item = &'a T>,
    item: &dyn Reflect,
    ignore: &[&str],
) -> bool {
    let tester = tester(CompareMode::Strict, ignore);
    items.into_iter().any(|e| tester.are_deep_equal(e, item))
}

/// True when any element is intersection-equal to `item`
pub fn contains_one_intersection_equal_to<'a, T: Reflect>(
    items: impl IntoIterator<Item = &'a T>,
    item: &dyn Reflect,
    ignore: &[&str],
) -> bool {
    let tester = tester(CompareMode::Intersection, ignore);
    items.into_iter().any(|e| tester.are_deep_equal(e, item))
}

/// True when exactly one element deep-equals `item`
pub fn contains_only_one_deep_equal_to<'a, T: Reflect>(
    items: impl IntoIterator<Item = &'a T>,
    item: &dyn Reflect,
    ignore: &[&str],
) -> bool {
    let tester = tester(CompareMode::Strict, ignore);
    contains_only_one_matching(items, item, |e, i| tester.are_deep_equal(e, i))
}

/// True when exactly one element is intersection-equal to `item`
pub fn contains_only_one_intersection_equal_to<'a, T: Reflect>(
    items: impl IntoIterator<Item = &'a T>,
    item: &dyn Reflect,
    ignore: &[&str],
) -> bool {
    let tester = tester(CompareMode::Intersection, ignore);
    contains_only_one_matching(items, item, |e, i| tester.are_deep_equal(e, i))
}

/// True when `comparer` accepts exactly one element.
///
/// Stops scanning as soon as a second match is found.
pub fn contains_only_one_matching<'a, T: 'a, U: ?Sized>(
    items: impl IntoIterator<Item = &'a T>,
    item: &U,
    comparer: impl Fn(&T, &U) -> bool,
) -> bool {
    items
        .into_iter()
        .filter(|e| comparer(*e, item))
        .take(2)
        .count()
        == 1
}

#[deprecated(note = "use `deep_equals`, or `deep_sub_equals` for a subset of members")]
pub fn all_properties_match(source: &dyn Reflect, compare: &dyn Reflect, ignore: &[&str]) -> bool {
    deep_equals(source, compare, ignore)
}

#[deprecated(note = "use `contains_one_deep_equal_to`")]
pub fn contains_one_like<'a, T: Reflect>(
    items: impl IntoIterator<Item = &'a T>,
    item: &dyn Reflect,
) -> bool {
    contains_one_deep_equal_to(items, item, &[])
}
