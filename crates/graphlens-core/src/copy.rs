//! Recursive property copy between structurally similar graphs.
//!
//! Source and destination are walked in parallel. A source member is copied
//! only onto a destination member with the same name, the same declared type
//! and a writable flag; anything else is skipped silently. Copying never
//! fails: the returned [`CopyReport`] lists what was copied and what was
//! skipped, by dotted path.

use serde::{Deserialize, Serialize};

use crate::core_types::schema::{EVENT_SKIP, OP_COPY_PROPERTIES};
use crate::options::CopyOptions;
use crate::reflect::{MemberInfo, Reflect, Shape, TypeClass};
use crate::{log_op_detail, log_op_end, log_op_start};

/// Outcome of a copy, by member path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReport {
    /// Members written on the destination
    pub copied: Vec<String>,
    /// Source members with no compatible destination, or whose copy degraded
    pub skipped: Vec<String>,
}

impl CopyReport {
    fn copied(&mut self, path: String) {
        self.copied.push(path);
    }

    fn skipped(&mut self, path: String, reason: &'static str) {
        log_op_detail!(OP_COPY_PROPERTIES, EVENT_SKIP, path, reason = reason);
        self.skipped.push(path);
    }
}

/// Deep copy with no ignored members.
pub fn copy_properties_to(source: &dyn Reflect, destination: &mut dyn Reflect) -> CopyReport {
    copy_properties_with(source, destination, &CopyOptions::default())
}

/// Copy every readable source member onto `destination`.
///
/// When either root is null nothing happens. With `options.deep` unset every
/// member is assigned directly; otherwise sequences are duplicated element-wise
/// and composites are copied member by member.
pub fn copy_properties_with(
    source: &dyn Reflect,
    destination: &mut dyn Reflect,
    options: &CopyOptions,
) -> CopyReport {
    log_op_start!(OP_COPY_PROPERTIES, deep = options.deep);
    let start = std::time::Instant::now();

    let mut report = CopyReport::default();
    copy_members(source, destination, options, "", &mut report);

    log_op_end!(
        OP_COPY_PROPERTIES,
        duration_ms = start.elapsed().as_millis() as u64,
        copied_count = report.copied.len() as u64,
        skipped_count = report.skipped.len() as u64
    );
    report
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn find_target<'m>(targets: &'m [MemberInfo], source: &MemberInfo) -> Option<&'m MemberInfo> {
    targets.iter().find(|t| {
        t.name() == source.name() && t.declared() == source.declared() && t.is_writable()
    })
}

fn copy_members(
    source: &dyn Reflect,
    destination: &mut dyn Reflect,
    options: &CopyOptions,
    prefix: &str,
    report: &mut CopyReport,
) {
    if source.shape().is_null() || destination.shape().is_null() {
        return;
    }

    let targets = destination.members();
    for info in source.members() {
        if !info.is_readable() || options.ignores(info.name()) {
            continue;
        }
        let path = join(prefix, info.name());
        if find_target(&targets, &info).is_none() {
            report.skipped(path, "no compatible destination member");
            continue;
        }
        let (Some(value), Some(target)) =
            (source.member(info.name()), destination.member_mut(info.name()))
        else {
            report.skipped(path, "member not accessible");
            continue;
        };

        let class = info.declared().class();
        if !options.deep || matches!(class, TypeClass::Terminal | TypeClass::Dynamic) {
            assign_member(value, target, path, report);
        } else if class == TypeClass::Sequence {
            copy_sequence(value, target, path, report);
        } else if value.shape().is_null() {
            if target.clear() {
                report.copied(path);
            } else {
                report.skipped(path, "destination is not nullable");
            }
        } else if target.shape().is_null() {
            assign_member(value, target, path, report);
        } else {
            copy_members(value, target, options, &path, report);
        }
    }
}

fn assign_member(
    value: &dyn Reflect,
    target: &mut dyn Reflect,
    path: String,
    report: &mut CopyReport,
) {
    match target.assign(value) {
        Ok(()) => report.copied(path),
        Err(_) => report.skipped(path, "value rejected by destination"),
    }
}

/// Replace `target` with a fresh element-wise copy of `value`. When the copy
/// cannot be made the target is cleared, or left untouched if not nullable.
fn copy_sequence(
    value: &dyn Reflect,
    target: &mut dyn Reflect,
    path: String,
    report: &mut CopyReport,
) {
    let duplicate = match value.shape() {
        Shape::Sequence(seq) => seq.duplicate(),
        _ => None,
    };
    let copied = match duplicate {
        Some(fresh) => target.assign(&*fresh).is_ok(),
        None if value.shape().is_null() => target.clear(),
        None => false,
    };

    if copied {
        report.copied(path);
    } else if target.clear() {
        report.skipped(path, "sequence copy failed, destination cleared");
    } else {
        report.skipped(path, "sequence copy failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Leaf {
        value: i32,
    }
    crate::reflect_struct!(Leaf { value });

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Node {
        name: String,
        leaf: Option<Leaf>,
        items: Vec<Leaf>,
    }
    crate::reflect_struct!(Node { name, leaf, items });

    #[test]
    fn test_join_paths() {
        assert_eq!(join("", "a"), "a");
        assert_eq!(join("a", "b"), "a.b");
    }

    #[test]
    fn test_null_destination_child_receives_whole_value() {
        let source = Node {
            name: "n".into(),
            leaf: Some(Leaf { value: 3 }),
            items: vec![Leaf { value: 1 }],
        };
        let mut destination = Node::default();
        let report = copy_properties_to(&source, &mut destination);
        assert_eq!(destination, source);
        assert!(report.copied.contains(&"leaf".to_string()));
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_existing_destination_child_is_copied_into() {
        let source = Node {
            leaf: Some(Leaf { value: 9 }),
            ..Node::default()
        };
        let mut destination = Node {
            leaf: Some(Leaf { value: 1 }),
            ..Node::default()
        };
        let report = copy_properties_to(&source, &mut destination);
        assert_eq!(destination.leaf, Some(Leaf { value: 9 }));
        assert!(report.copied.contains(&"leaf.value".to_string()));
    }

    #[test]
    fn test_null_source_composite_clears_destination() {
        let source = Node::default();
        let mut destination = Node {
            leaf: Some(Leaf { value: 1 }),
            ..Node::default()
        };
        copy_properties_to(&source, &mut destination);
        assert_eq!(destination.leaf, None);
    }
}
