//! Deep equality computation engine.
//!
//! The entry point is [`DeepEqualityTester`], configured once with
//! [`CompareOptions`] and then applied to any number of value pairs.

use std::collections::BTreeSet;

use crate::core_types::schema::{EVENT_MISMATCH, OP_DEEP_EQUALS};
use crate::equality::model::{Comparison, Mismatch, MismatchKind};
use crate::options::{CompareMode, CompareOptions};
use crate::reflect::{same_instance, MemberInfo, Reflect, Sequence, Shape};
use crate::{log_op_detail, log_op_end, log_op_start};

/// Compares two object graphs member by member.
///
/// The tester holds no mutable state; one instance can be shared across
/// threads and reused for any number of comparisons.
#[derive(Debug, Clone, Default)]
pub struct DeepEqualityTester {
    options: CompareOptions,
}

impl DeepEqualityTester {
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// True when `source` and `compare` are equal under the configured mode
    pub fn are_deep_equal(&self, source: &dyn Reflect, compare: &dyn Reflect) -> bool {
        self.compare(source, compare).is_equal()
    }

    /// Full comparison with one [`Mismatch`] per failing check.
    ///
    /// Evaluation continues after a failure so the report is complete.
    pub fn compare(&self, source: &dyn Reflect, compare: &dyn Reflect) -> Comparison {
        log_op_start!(OP_DEEP_EQUALS, mode = self.options.mode.as_str());
        let start = std::time::Instant::now();

        let mut walk = Walk {
            options: &self.options,
            mismatches: Vec::new(),
        };
        walk.values(source, compare, String::new());

        let comparison = Comparison {
            equal: walk.mismatches.is_empty(),
            mode: self.options.mode,
            mismatches: walk.mismatches,
        };

        log_op_end!(
            OP_DEEP_EQUALS,
            duration_ms = start.elapsed().as_millis() as u64,
            equal = comparison.equal,
            mismatch_count = comparison.mismatches.len() as u64
        );
        comparison
    }
}

struct Walk<'o> {
    options: &'o CompareOptions,
    mismatches: Vec<Mismatch>,
}

impl Walk<'_> {
    fn record(
        &mut self,
        path: String,
        kind: MismatchKind,
        source: Option<&dyn Reflect>,
        compare: Option<&dyn Reflect>,
    ) {
        log_op_detail!(OP_DEEP_EQUALS, EVENT_MISMATCH, path, kind = kind.as_str());
        self.mismatches.push(Mismatch {
            path,
            kind,
            source: source.map(Reflect::describe),
            compare: compare.map(Reflect::describe),
        });
    }

    fn values(&mut self, source: &dyn Reflect, compare: &dyn Reflect, path: String) {
        if same_instance(source, compare) {
            return;
        }
        match (source.shape(), compare.shape()) {
            (Shape::Null, Shape::Null) => {}
            (Shape::Null, _) | (_, Shape::Null) => {
                self.record(path, MismatchKind::NullMismatch, Some(source), Some(compare));
            }
            (Shape::Terminal(a), Shape::Terminal(b)) => {
                if a != b {
                    self.record(path, MismatchKind::ValueMismatch, Some(source), Some(compare));
                }
            }
            (Shape::Sequence(a), Shape::Sequence(b)) => {
                self.sequences(a, b, source, compare, path);
            }
            (Shape::Composite, Shape::Composite) => self.members(source, compare, &path),
            _ => self.record(path, MismatchKind::ShapeMismatch, Some(source), Some(compare)),
        }
    }

    fn sequences(
        &mut self,
        a: &dyn Sequence,
        b: &dyn Sequence,
        source: &dyn Reflect,
        compare: &dyn Reflect,
        path: String,
    ) {
        let (source_len, compare_len) = (a.len(), b.len());
        if source_len != compare_len && self.options.mode != CompareMode::Intersection {
            self.record(
                path,
                MismatchKind::CountMismatch {
                    source_len,
                    compare_len,
                },
                Some(source),
                Some(compare),
            );
            return;
        }

        for index in 0..source_len.min(compare_len) {
            if let (Some(x), Some(y)) = (a.element(index), b.element(index)) {
                self.values(x, y, format!("{}[{}]", path, index));
            }
        }
    }

    fn selected(&self, value: &dyn Reflect) -> Vec<MemberInfo> {
        value
            .members()
            .into_iter()
            .filter(|m| m.is_readable() && !self.options.ignores(m.name()))
            .collect()
    }

    fn members(&mut self, source: &dyn Reflect, compare: &dyn Reflect, path: &str) {
        let source_members = self.selected(source);
        let compare_members = self.selected(compare);
        let compare_names: BTreeSet<&str> = compare_members.iter().map(|m| m.name()).collect();
        let child = |name: &str| {
            if path.is_empty() {
                name.to_string()
            } else {
                format!("{}.{}", path, name)
            }
        };

        for info in &source_members {
            let name = info.name();
            let shared = compare_names.contains(name);
            if !shared {
                if self.options.mode != CompareMode::Intersection {
                    let value = source.member(name);
                    self.record(child(name), MismatchKind::MissingMember, value, None);
                }
                continue;
            }
            if let (Some(x), Some(y)) = (source.member(name), compare.member(name)) {
                self.values(x, y, child(name));
            }
        }

        if self.options.mode == CompareMode::Strict {
            let source_names: BTreeSet<&str> = source_members.iter().map(|m| m.name()).collect();
            for info in &compare_members {
                if !source_names.contains(info.name()) {
                    self.record(
                        child(info.name()),
                        MismatchKind::ExtraMember,
                        None,
                        compare.member(info.name()),
                    );
                }
            }
        }
    }
}
