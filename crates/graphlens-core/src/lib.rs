//! graphlens core - object-graph inspection toolkit
//!
//! This crate compares, copies and navigates arbitrary object graphs through
//! an explicit introspection capability, including:
//! - Deep equality with strict, sub-equals and intersection modes, producing
//!   a structured mismatch report
//! - Recursive property copy between structurally similar graphs
//! - Dotted property path reads and writes
//! - Collection conveniences ("contains exactly one deep-equal item")
//!
//! Types opt in through [`reflect::Reflect`]. Scalars, `Option`, `Box`,
//! sequences, string-keyed maps and `serde_json::Value` are covered out of the
//! box; structs register with [`reflect_struct!`].

pub use graphlens_core_types as core_types;

pub mod collections;
pub mod copy;
pub mod equality;
pub mod errors;
pub mod ext;
pub mod logging_facility;
pub mod options;
pub mod path;
pub mod reflect;

// Re-export commonly used types
pub use copy::{copy_properties_to, copy_properties_with, CopyReport};
pub use equality::{
    deep_equals, deep_intersection_equals, deep_sub_equals, render_summary, Comparison,
    DeepEqualityTester, Mismatch, MismatchKind,
};
pub use errors::{ExError, ExErrorKind, GraphError, Result};
pub use ext::GraphExt;
pub use options::{CompareMode, CompareOptions, CopyOptions};
pub use path::PropertyPath;
pub use reflect::{Reflect, Typed};
