//! Runtime introspection capability.
//!
//! Every engine in this crate walks object graphs through two traits:
//!
//! - [`Typed`]: a static descriptor of a Rust type ([`TypeInfo`]), used for
//!   declared member types and the terminal/sequence/composite classification.
//! - [`Reflect`]: an object-safe view of a single value that can enumerate its
//!   named members, read and write them, and expose terminal values as a
//!   normalized [`Scalar`].
//!
//! Implementations are provided for the scalar types, `Option`, `Box`,
//! sequences, string-keyed maps and `serde_json::Value`. User structs opt in
//! through [`reflect_struct!`](crate::reflect_struct).
//!
//! # Example
//!
//! ```
//! use graphlens_core::reflect::{Reflect, Shape};
//! use graphlens_core::reflect_struct;
//!
//! #[derive(Clone)]
//! struct Point { x: i32, y: i32 }
//! reflect_struct!(Point { x, y });
//!
//! let p = Point { x: 1, y: 2 };
//! assert_eq!(p.members().len(), 2);
//! assert!(matches!(p.member("x").map(|v| v.shape()), Some(Shape::Terminal(_))));
//! ```

mod impls;
mod json;
mod macros;
mod scalar;

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use json::to_json;
pub use scalar::Scalar;

/// Classification of a type for traversal purposes.
///
/// The classification of a Rust type never depends on where it appears in a
/// graph. `Dynamic` types (`serde_json::Value`) are classified per value by
/// their runtime [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeClass {
    Terminal,
    Sequence,
    Composite,
    Dynamic,
}

/// Static type descriptor.
///
/// Two descriptors are equal when they describe the same Rust type.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
    class: TypeClass,
    wraps: Option<TypeId>,
    nullable: bool,
}

impl TypeInfo {
    /// Descriptor for a plain (non-wrapping) type
    pub fn new<T: ?Sized + 'static>(class: TypeClass) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            class,
            wraps: None,
            nullable: false,
        }
    }

    /// Descriptor for a wrapper type `W` around `inner`; the wrapper inherits
    /// the inner classification
    pub fn wrapping<W: ?Sized + 'static>(inner: TypeInfo, nullable: bool) -> Self {
        Self {
            id: TypeId::of::<W>(),
            name: std::any::type_name::<W>(),
            class: inner.class,
            wraps: Some(inner.id),
            nullable,
        }
    }

    /// Descriptor of `T`
    pub fn of<T: Typed>() -> Self {
        T::type_info()
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name with module paths stripped, e.g. `Option<Address>`
    pub fn short_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut ident = String::new();
        for c in self.name.chars() {
            if c.is_alphanumeric() || c == '_' || c == ':' {
                ident.push(c);
            } else {
                out.push_str(ident.rsplit("::").next().unwrap_or_default());
                ident.clear();
                out.push(c);
            }
        }
        out.push_str(ident.rsplit("::").next().unwrap_or_default());
        out
    }

    pub fn class(&self) -> TypeClass {
        self.class
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Type-compatibility predicate: a value of this type can be handed out as
    /// a `target` either directly or by unwrapping one wrapper level.
    pub fn is_assignable_to(&self, target: &TypeInfo) -> bool {
        self.id == target.id || self.wraps == Some(target.id)
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl std::hash::Hash for TypeInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Static type descriptor provider.
pub trait Typed: 'static {
    fn type_info() -> TypeInfo;
}

/// A named member exposed by a composite value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    name: Cow<'static, str>,
    declared: TypeInfo,
    readable: bool,
    writable: bool,
}

impl MemberInfo {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        declared: TypeInfo,
        readable: bool,
        writable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            declared,
            readable,
            writable,
        }
    }

    /// Describe a struct field; the declared type is taken from the field itself.
    pub fn of_field<T: Typed>(name: &'static str, _field: &T, writable: bool) -> Self {
        Self::new(name, T::type_info(), true, writable)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared(&self) -> TypeInfo {
        self.declared
    }

    pub fn is_readable(&self) -> bool {
        self.readable
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }
}

/// Runtime shape of a value.
pub enum Shape<'a> {
    /// Absent value (`None`, JSON `null`)
    Null,
    /// Directly comparable scalar
    Terminal(Scalar<'a>),
    /// Ordered, indexable elements
    Sequence(&'a dyn Sequence),
    /// Named members, reachable through [`Reflect::members`]
    Composite,
}

impl Shape<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, Shape::Null)
    }

    /// Traversal class of this runtime shape; null counts as terminal.
    pub fn class(&self) -> TypeClass {
        match self {
            Shape::Null | Shape::Terminal(_) => TypeClass::Terminal,
            Shape::Sequence(_) => TypeClass::Sequence,
            Shape::Composite => TypeClass::Composite,
        }
    }
}

/// Write rejected because the value is not of the target's type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot assign value of type '{actual}' to '{expected}'")]
pub struct AssignError {
    pub expected: &'static str,
    pub actual: &'static str,
}

/// Object-safe introspection over a single value.
pub trait Reflect: Any {
    /// Descriptor of this value's own type
    fn type_info(&self) -> TypeInfo;

    fn shape(&self) -> Shape<'_>;

    /// Members of a composite value, in declaration order
    fn members(&self) -> Vec<MemberInfo> {
        Vec::new()
    }

    fn member(&self, _name: &str) -> Option<&dyn Reflect> {
        None
    }

    /// Mutable access for traversal; whether the member itself may be replaced
    /// is governed by [`MemberInfo::is_writable`].
    fn member_mut(&mut self, _name: &str) -> Option<&mut dyn Reflect> {
        None
    }

    /// Replace this value with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError`] when `value` is not of this type, directly or
    /// behind a wrapper.
    fn assign(&mut self, value: &dyn Reflect) -> Result<(), AssignError>;

    /// Set this value to null. Returns false when the type is not nullable.
    fn clear(&mut self) -> bool {
        false
    }

    /// The value behind a wrapper (`Some`, `Box`, a JSON string), if any
    fn inner(&self) -> Option<&dyn Reflect> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    /// Short rendering used in diagnostics
    fn describe(&self) -> String {
        match self.shape() {
            Shape::Null => "null".to_string(),
            Shape::Terminal(scalar) => scalar.to_string(),
            Shape::Sequence(seq) => format!("{} (len {})", self.type_info().name(), seq.len()),
            Shape::Composite => self.type_info().name().to_string(),
        }
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Ordered, indexable view over a sequence value.
pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect>;

    fn element_type(&self) -> TypeInfo;

    /// A fresh sequence of the same type holding a positional copy of every
    /// element, or `None` when the elements cannot be copied.
    fn duplicate(&self) -> Option<Box<dyn Reflect>>;
}

/// Strip every wrapper level from `value`.
pub fn concrete(value: &dyn Reflect) -> &dyn Reflect {
    let mut current = value;
    while let Some(next) = current.inner() {
        current = next;
    }
    current
}

/// Downcast `value` to `T`, looking through wrappers when the value itself is
/// not a `T`.
pub fn downcast_concrete<T: Any>(value: &dyn Reflect) -> Option<&T> {
    let mut current = value;
    loop {
        if let Some(typed) = current.as_any().downcast_ref::<T>() {
            return Some(typed);
        }
        current = current.inner()?;
    }
}

/// `Reflect::assign` for `Clone` types.
///
/// # Errors
///
/// Returns [`AssignError`] when `value` is not a `T`.
pub fn assign_cloned<T: Reflect + Clone>(
    target: &mut T,
    value: &dyn Reflect,
) -> Result<(), AssignError> {
    match downcast_concrete::<T>(value) {
        Some(typed) => {
            *target = typed.clone();
            Ok(())
        }
        None => Err(AssignError {
            expected: std::any::type_name::<T>(),
            actual: concrete(value).type_info().name(),
        }),
    }
}

/// True when both references point at the same instance of the same type.
pub fn same_instance(a: &dyn Reflect, b: &dyn Reflect) -> bool {
    std::ptr::addr_eq(a as *const dyn Reflect, b as *const dyn Reflect)
        && a.type_info() == b.type_info()
}
