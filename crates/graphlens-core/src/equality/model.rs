//! Comparison output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.

use serde::{Deserialize, Serialize};

use crate::options::CompareMode;

/// Structured result of one deep comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    /// True iff no mismatch was recorded
    pub equal: bool,
    /// Mode the comparison ran under
    pub mode: CompareMode,
    /// Every failing check, in traversal order
    pub mismatches: Vec<Mismatch>,
}

impl Comparison {
    pub fn is_equal(&self) -> bool {
        self.equal
    }

    /// Mismatch recorded at exactly `path`, if any
    pub fn mismatch_at(&self, path: &str) -> Option<&Mismatch> {
        self.mismatches.iter().find(|m| m.path == path)
    }
}

/// A single failing check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mismatch {
    /// Dotted member path with `[i]` for sequence elements; empty at the root
    pub path: String,
    pub kind: MismatchKind,
    /// Rendering of the source-side value, absent for a missing member
    pub source: Option<String>,
    /// Rendering of the compare-side value, absent for a missing member
    pub compare: Option<String>,
}

/// Why a check failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// Exactly one side is null
    NullMismatch,
    /// Both terminal, different values
    ValueMismatch,
    /// Terminal, sequence and composite do not line up
    ShapeMismatch,
    /// Sequence lengths differ outside intersection mode
    CountMismatch { source_len: usize, compare_len: usize },
    /// Source member absent on the compare side
    MissingMember,
    /// Compare member absent on the source side (strict mode only)
    ExtraMember,
}

impl MismatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MismatchKind::NullMismatch => "null_mismatch",
            MismatchKind::ValueMismatch => "value_mismatch",
            MismatchKind::ShapeMismatch => "shape_mismatch",
            MismatchKind::CountMismatch { .. } => "count_mismatch",
            MismatchKind::MissingMember => "missing_member",
            MismatchKind::ExtraMember => "extra_member",
        }
    }
}
