//! Dotted property path resolution.
//!
//! A path such as `address.city` is split on `.` and walked one member at a
//! time. Reads follow readable members; writes walk every segment but the last
//! and then replace the final member, which must be writable.
//!
//! ## Errors
//!
//! - `MemberNotFound`: a segment names no member on the value reached so far,
//!   or the final segment of a write is not writable
//! - `TypeMismatch`: a typed read or a write meets a value of the wrong type

use std::fmt;
use std::str::FromStr;

use crate::core_types::schema::OP_PATH_GET;
use crate::core_types::schema::OP_PATH_SET;
use crate::errors::{GraphError, Result};
use crate::reflect::{concrete, downcast_concrete, Reflect, TypeInfo, Typed};
use crate::{log_op_end, log_op_error, log_op_start};

/// A parsed dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<String>,
}

impl PropertyPath {
    /// Split `path` on `.`; empty segments are kept and fail resolution
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for PropertyPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

fn member_not_found(owner: &dyn Reflect, member: &str) -> GraphError {
    GraphError::MemberNotFound {
        type_name: concrete(owner).type_info().short_name(),
        member: member.to_string(),
    }
}

fn read_member<'a>(owner: &'a dyn Reflect, name: &str) -> Result<&'a dyn Reflect> {
    let readable = owner
        .members()
        .iter()
        .any(|m| m.name() == name && m.is_readable());
    match owner.member(name) {
        Some(value) if readable => Ok(value),
        _ => Err(member_not_found(owner, name)),
    }
}

/// Read a single member by exact name, without path splitting.
///
/// # Errors
///
/// Returns `MemberNotFound` naming the owner's type and `name`.
pub fn property_value<'a>(instance: &'a dyn Reflect, name: &str) -> Result<&'a dyn Reflect> {
    log_op_start!(OP_PATH_GET, path = name);
    let start = std::time::Instant::now();

    let value = read_member(instance, name).map_err(|e| {
        log_op_error!(
            OP_PATH_GET,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(OP_PATH_GET, duration_ms = start.elapsed().as_millis() as u64);
    Ok(value)
}

/// Resolve the value at `path`.
///
/// # Errors
///
/// Returns `MemberNotFound` for the first segment that cannot be read.
pub fn get<'a>(instance: &'a dyn Reflect, path: &str) -> Result<&'a dyn Reflect> {
    log_op_start!(OP_PATH_GET, path = path);
    let start = std::time::Instant::now();

    let value = get_impl(instance, &PropertyPath::parse(path)).map_err(|e| {
        log_op_error!(
            OP_PATH_GET,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(OP_PATH_GET, duration_ms = start.elapsed().as_millis() as u64);
    Ok(value)
}

fn get_impl<'a>(instance: &'a dyn Reflect, path: &PropertyPath) -> Result<&'a dyn Reflect> {
    path.segments()
        .iter()
        .try_fold(instance, |current, segment| read_member(current, segment))
}

/// Resolve the value at `path` as a `T`.
///
/// The value may be a `T` itself or hold one behind a wrapper (`Some`, `Box`,
/// a JSON string, bool or array).
///
/// JSON numbers carry no typed Rust value to borrow, so `get_typed::<i64>`
/// on one is a `TypeMismatch`; read it through [`get`] and its
/// [`Shape::Terminal`](crate::reflect::Shape) scalar instead.
///
/// # Errors
///
/// - `MemberNotFound` as for [`get`]
/// - `TypeMismatch` naming the root type, the path, `T` and the actual type
pub fn get_typed<'a, T: Reflect + Typed>(instance: &'a dyn Reflect, path: &str) -> Result<&'a T> {
    log_op_start!(OP_PATH_GET, path = path);
    let start = std::time::Instant::now();

    let value = get_typed_impl::<T>(instance, &PropertyPath::parse(path)).map_err(|e| {
        log_op_error!(
            OP_PATH_GET,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(OP_PATH_GET, duration_ms = start.elapsed().as_millis() as u64);
    Ok(value)
}

fn get_typed_impl<'a, T: Reflect + Typed>(
    instance: &'a dyn Reflect,
    path: &PropertyPath,
) -> Result<&'a T> {
    let value = get_impl(instance, path)?;
    let expected = TypeInfo::of::<T>();
    let mismatch = || GraphError::TypeMismatch {
        declaring_type: instance.type_info().short_name(),
        path: path.to_string(),
        expected: expected.short_name(),
        actual: concrete(value).type_info().short_name(),
    };

    let compatible =
        value.type_info().is_assignable_to(&expected) || concrete(value).type_info() == expected;
    if !compatible {
        return Err(mismatch());
    }
    downcast_concrete::<T>(value).ok_or_else(mismatch)
}

/// Like [`get_typed`], but a missing member yields `default`.
///
/// # Errors
///
/// Returns `TypeMismatch` when the member exists with an incompatible type.
pub fn get_or_default<T: Reflect + Typed + Clone>(
    instance: &dyn Reflect,
    path: &str,
    default: T,
) -> Result<T> {
    log_op_start!(OP_PATH_GET, path = path);
    let start = std::time::Instant::now();

    let result = match get_typed_impl::<T>(instance, &PropertyPath::parse(path)) {
        Ok(value) => Ok(value.clone()),
        Err(e) if e.is_member_not_found() => {
            tracing::debug!(path = path, "member not found, using default");
            Ok(default)
        }
        Err(e) => Err(e),
    };

    let value = result.map_err(|e| {
        log_op_error!(
            OP_PATH_GET,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(OP_PATH_GET, duration_ms = start.elapsed().as_millis() as u64);
    Ok(value)
}

/// Replace the value at `path` with `value`.
///
/// # Errors
///
/// - `MemberNotFound` when a segment is missing or the final member is not
///   writable
/// - `TypeMismatch` when `value` is incompatible with the final member
pub fn set(instance: &mut dyn Reflect, path: &str, value: &dyn Reflect) -> Result<()> {
    log_op_start!(OP_PATH_SET, path = path);
    let start = std::time::Instant::now();

    set_impl(instance, &PropertyPath::parse(path), value).map_err(|e| {
        log_op_error!(
            OP_PATH_SET,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(OP_PATH_SET, duration_ms = start.elapsed().as_millis() as u64);
    Ok(())
}

fn set_impl(instance: &mut dyn Reflect, path: &PropertyPath, value: &dyn Reflect) -> Result<()> {
    let declaring_type = instance.type_info().short_name();
    let Some((last, parents)) = path.segments().split_last() else {
        return Err(member_not_found(instance, ""));
    };

    let mut current = instance;
    for segment in parents {
        let readable = current
            .members()
            .iter()
            .any(|m| m.name() == *segment && m.is_readable());
        if !readable {
            return Err(member_not_found(current, segment));
        }
        let type_name = concrete(current).type_info().short_name();
        current = current
            .member_mut(segment)
            .ok_or_else(|| GraphError::MemberNotFound {
                type_name,
                member: segment.clone(),
            })?;
    }

    let writable = current
        .members()
        .iter()
        .any(|m| m.name() == *last && m.is_writable());
    if !writable {
        return Err(member_not_found(current, last));
    }
    let type_name = concrete(current).type_info().short_name();
    let target = current
        .member_mut(last)
        .ok_or_else(|| GraphError::MemberNotFound {
            type_name,
            member: last.clone(),
        })?;

    target.assign(value).map_err(|e| GraphError::TypeMismatch {
        declaring_type,
        path: path.to_string(),
        expected: e.expected.to_string(),
        actual: e.actual.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Inner {
        label: String,
    }
    crate::reflect_struct!(Inner { label });

    #[derive(Clone, Debug, PartialEq)]
    struct Outer {
        id: u32,
        inner: Inner,
        maybe: Option<Inner>,
    }
    crate::reflect_struct!(Outer { #[readonly] id, inner, maybe });

    fn outer() -> Outer {
        Outer {
            id: 1,
            inner: Inner { label: "in".into() },
            maybe: None,
        }
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let path: PropertyPath = "a.b.c".parse().unwrap();
        assert_eq!(path.segments(), ["a", "b", "c"]);
        assert_eq!(path.to_string(), "a.b.c");
    }

    #[test]
    fn test_get_walks_nested_members() {
        let value = outer();
        let label = get_typed::<String>(&value, "inner.label").unwrap();
        assert_eq!(label, "in");
    }

    #[test]
    fn test_get_through_null_is_member_not_found() {
        let value = outer();
        let err = get(&value, "maybe.label").unwrap_err();
        assert!(err.is_member_not_found());
    }

    #[test]
    fn test_set_rejects_readonly_member() {
        let mut value = outer();
        let err = set(&mut value, "id", &5u32).unwrap_err();
        assert_eq!(
            err,
            GraphError::MemberNotFound {
                type_name: "Outer".to_string(),
                member: "id".to_string()
            }
        );
        assert_eq!(value.id, 1);
    }

    #[test]
    fn test_set_into_null_option() {
        let mut value = outer();
        set(&mut value, "maybe", &Inner { label: "new".into() }).unwrap();
        assert_eq!(value.maybe.map(|i| i.label).as_deref(), Some("new"));
    }
}
