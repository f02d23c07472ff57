//! Deep equality engine.
//!
//! Compares two object graphs by structure and value rather than by identity
//! or type. The two sides may be different Rust types, or a typed struct and
//! a `serde_json::Value` document.
//!
//! ## Entry point
//!
//! ```
//! use graphlens_core::equality::{deep_equals, deep_sub_equals};
//! use serde_json::json;
//!
//! let a = json!({"name": "Bob", "tags": ["a", "b"]});
//! let b = json!({"name": "Bob", "tags": ["a", "b"], "extra": 1});
//! assert!(!deep_equals(&a, &b, &[]));
//! assert!(deep_sub_equals(&a, &b, &[]));
//! ```
//!
//! ## Modes
//!
//! - **Strict**: member-name sets must match exactly.
//! - **SubEquals**: the source's members must all exist on the compare side
//!   and be equal; extra compare members are tolerated.
//! - **Intersection**: only members present on both sides are compared, and
//!   sequences are compared over their overlapping index range.
//!
//! Ignored member names are skipped at every depth. Cyclic graphs are not
//! supported.

pub mod engine;
pub mod model;
pub mod summary;

pub use engine::DeepEqualityTester;
pub use model::{Comparison, Mismatch, MismatchKind};
pub use summary::render_summary;

use crate::options::{CompareMode, CompareOptions};
use crate::reflect::Reflect;

fn tester(mode: CompareMode, ignore: &[&str]) -> DeepEqualityTester {
    DeepEqualityTester::new(
        CompareOptions::default()
            .with_mode(mode)
            .ignoring(ignore.iter().copied()),
    )
}

/// Strict deep equality, skipping `ignore` member names
pub fn deep_equals(source: &dyn Reflect, compare: &dyn Reflect, ignore: &[&str]) -> bool {
    tester(CompareMode::Strict, ignore).are_deep_equal(source, compare)
}

/// Source-subset deep equality, skipping `ignore` member names
pub fn deep_sub_equals(source: &dyn Reflect, compare: &dyn Reflect, ignore: &[&str]) -> bool {
    tester(CompareMode::SubEquals, ignore).are_deep_equal(source, compare)
}

/// Shared-members deep equality, skipping `ignore` member names
pub fn deep_intersection_equals(
    source: &dyn Reflect,
    compare: &dyn Reflect,
    ignore: &[&str],
) -> bool {
    tester(CompareMode::Intersection, ignore).are_deep_equal(source, compare)
}
