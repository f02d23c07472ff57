//! `Reflect` implementations for std, chrono and uuid types.

use std::any::Any;
use std::collections::{BTreeMap, HashMap, VecDeque};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use uuid::Uuid;

use super::{
    assign_cloned, downcast_concrete, AssignError, MemberInfo, Reflect, Scalar, Sequence, Shape,
    TypeClass, TypeInfo, Typed,
};

macro_rules! impl_terminal {
    ($($ty:ty => |$v:ident| $scalar:expr),* $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::new::<$ty>(TypeClass::Terminal)
                }
            }

            impl Reflect for $ty {
                fn type_info(&self) -> TypeInfo {
                    <$ty as Typed>::type_info()
                }

                fn shape(&self) -> Shape<'_> {
                    let $v = self;
                    Shape::Terminal($scalar)
                }

                fn assign(&mut self, value: &dyn Reflect) -> Result<(), AssignError> {
                    assign_cloned(self, value)
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

impl_terminal! {
    bool => |v| Scalar::Bool(*v),
    i8 => |v| Scalar::Int(i128::from(*v)),
    i16 => |v| Scalar::Int(i128::from(*v)),
    i32 => |v| Scalar::Int(i128::from(*v)),
    i64 => |v| Scalar::Int(i128::from(*v)),
    i128 => |v| Scalar::Int(*v),
    isize => |v| Scalar::Int(*v as i128),
    u8 => |v| Scalar::Int(i128::from(*v)),
    u16 => |v| Scalar::Int(i128::from(*v)),
    u32 => |v| Scalar::Int(i128::from(*v)),
    u64 => |v| Scalar::Int(i128::from(*v)),
    u128 => |v| Scalar::UInt(*v),
    usize => |v| Scalar::Int(*v as i128),
    f32 => |v| Scalar::Float(f64::from(*v)),
    f64 => |v| Scalar::Float(*v),
    char => |v| Scalar::Char(*v),
    String => |v| Scalar::Text(v.as_str()),
    &'static str => |v| Scalar::Text(v),
    Uuid => |v| Scalar::Uuid(*v),
    DateTime<Utc> => |v| Scalar::Instant(*v),
    DateTime<FixedOffset> => |v| Scalar::Instant(v.with_timezone(&Utc)),
    NaiveDateTime => |v| Scalar::DateTime(*v),
    NaiveDate => |v| Scalar::Date(*v),
    NaiveTime => |v| Scalar::Time(*v),
    TimeDelta => |v| Scalar::Duration(*v),
}

// ---------------------------------------------------------------------------
// Nullable and boxed wrappers
// ---------------------------------------------------------------------------

impl<T: Reflect + Typed + Clone> Typed for Option<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::wrapping::<Option<T>>(TypeInfo::of::<T>(), true)
    }
}

impl<T: Reflect + Typed + Clone> Reflect for Option<T> {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::Null,
        }
    }

    fn members(&self) -> Vec<MemberInfo> {
        self.as_ref().map(Reflect::members).unwrap_or_default()
    }

    fn member(&self, name: &str) -> Option<&dyn Reflect> {
        self.as_ref()?.member(name)
    }

    fn member_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        self.as_mut()?.member_mut(name)
    }

    fn assign(&mut self, value: &dyn Reflect) -> Result<(), AssignError> {
        if let Some(same) = value.as_any().downcast_ref::<Option<T>>() {
            *self = same.clone();
            return Ok(());
        }
        if value.shape().is_null() {
            *self = None;
            return Ok(());
        }
        if let Some(current) = self.as_mut() {
            return current.assign(value);
        }
        match downcast_concrete::<T>(value) {
            Some(inner) => {
                *self = Some(inner.clone());
                Ok(())
            }
            None => Err(AssignError {
                expected: std::any::type_name::<Option<T>>(),
                actual: value.type_info().name(),
            }),
        }
    }

    fn clear(&mut self) -> bool {
        *self = None;
        true
    }

    fn inner(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Reflect + Typed + Clone> Typed for Box<T> {
    fn type_info() -> TypeInfo {
        TypeInfo::wrapping::<Box<T>>(TypeInfo::of::<T>(), false)
    }
}

impl<T: Reflect + Typed + Clone> Reflect for Box<T> {
    fn type_info(&self) -> TypeInfo {
        <Self as Typed>::type_info()
    }

    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn members(&self) -> Vec<MemberInfo> {
        (**self).members()
    }

    fn member(&self, name: &str) -> Option<&dyn Reflect> {
        (**self).member(name)
    }

    fn member_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        (**self).member_mut(name)
    }

    fn assign(&mut self, value: &dyn Reflect) -> Result<(), AssignError> {
        match value.as_any().downcast_ref::<Box<T>>() {
            Some(same) => {
                *self = same.clone();
                Ok(())
            }
            None => (**self).assign(value),
        }
    }

    fn clear(&mut self) -> bool {
        (**self).clear()
    }

    fn inner(&self) -> Option<&dyn Reflect> {
        Some(&**self as &dyn Reflect)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

macro_rules! impl_sequence {
    ($(impl<$t:ident $(, const $n:ident: usize)?> for $ty:ty;)*) => {
        $(
            impl<$t: Reflect + Typed + Clone $(, const $n: usize)?> Typed for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::new::<$ty>(TypeClass::Sequence)
                }
            }

            impl<$t: Reflect + Typed + Clone $(, const $n: usize)?> Reflect for $ty {
                fn type_info(&self) -> TypeInfo {
                    <Self as Typed>::type_info()
                }

                fn shape(&self) -> Shape<'_> {
                    Shape::Sequence(self)
                }

                fn assign(&mut self, value: &dyn Reflect) -> Result<(), AssignError> {
                    assign_cloned(self, value)
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }

            impl<$t: Reflect + Typed + Clone $(, const $n: usize)?> Sequence for $ty {
                fn len(&self) -> usize {
                    self.iter().count()
                }

                fn element(&self, index: usize) -> Option<&dyn Reflect> {
                    self.iter().nth(index).map(|item| item as &dyn Reflect)
                }

                fn element_type(&self) -> TypeInfo {
                    TypeInfo::of::<$t>()
                }

                fn duplicate(&self) -> Option<Box<dyn Reflect>> {
                    let copied: $ty = self.iter().cloned().collect::<Vec<$t>>().try_into().ok()?;
                    Some(Box::new(copied))
                }
            }
        )*
    };
}

impl_sequence! {
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<T, const N: usize> for [T; N];
    impl<T> for Box<[T]>;
}

// ---------------------------------------------------------------------------
// String-keyed maps behave like composites whose members are the keys
// ---------------------------------------------------------------------------

macro_rules! impl_string_map {
    ($($map:ident),*) => {
        $(
            impl<T: Reflect + Typed + Clone> Typed for $map<String, T> {
                fn type_info() -> TypeInfo {
                    TypeInfo::new::<$map<String, T>>(TypeClass::Composite)
                }
            }

            impl<T: Reflect + Typed + Clone> Reflect for $map<String, T> {
                fn type_info(&self) -> TypeInfo {
                    <Self as Typed>::type_info()
                }

                fn shape(&self) -> Shape<'_> {
                    Shape::Composite
                }

                fn members(&self) -> Vec<MemberInfo> {
                    let mut keys: Vec<&String> = self.keys().collect();
                    keys.sort();
                    keys.into_iter()
                        .map(|key| MemberInfo::new(key.clone(), TypeInfo::of::<T>(), true, true))
                        .collect()
                }

                fn member(&self, name: &str) -> Option<&dyn Reflect> {
                    self.get(name).map(|value| value as &dyn Reflect)
                }

                fn member_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
                    self.get_mut(name).map(|value| value as &mut dyn Reflect)
                }

                fn assign(&mut self, value: &dyn Reflect) -> Result<(), AssignError> {
                    assign_cloned(self, value)
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

impl_string_map!(BTreeMap, HashMap);
