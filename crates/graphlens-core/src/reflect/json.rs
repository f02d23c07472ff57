//! `serde_json::Value` as a dynamic graph node.
//!
//! A JSON value is classified by its runtime variant: objects are composites
//! whose members are their keys, arrays are sequences, everything else is a
//! terminal. This lets typed structs be compared against JSON fixtures.

use std::any::Any;

use serde_json::{Map, Value};

use super::{
    downcast_concrete, AssignError, MemberInfo, Reflect, Scalar, Shape, TypeClass, TypeInfo,
    Typed,
};

impl Typed for Value {
    fn type_info() -> TypeInfo {
        TypeInfo::new::<Value>(TypeClass::Dynamic)
    }
}

impl Reflect for Value {
    fn type_info(&self) -> TypeInfo {
        <Value as Typed>::type_info()
    }

    fn shape(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Null,
            Value::Bool(b) => Shape::Terminal(Scalar::Bool(*b)),
            Value::Number(n) => {
                let scalar = if let Some(i) = n.as_i64() {
                    Scalar::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Scalar::Int(i128::from(u))
                } else {
                    Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
                };
                Shape::Terminal(scalar)
            }
            Value::String(s) => Shape::Terminal(Scalar::Text(s)),
            Value::Array(items) => Shape::Sequence(items),
            Value::Object(_) => Shape::Composite,
        }
    }

    fn members(&self) -> Vec<MemberInfo> {
        let declared = TypeInfo::of::<Value>();
        self.as_object()
            .map(|object| {
                object
                    .keys()
                    .map(|key| MemberInfo::new(key.clone(), declared, true, true))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn member(&self, name: &str) -> Option<&dyn Reflect> {
        self.as_object()?.get(name).map(|v| v as &dyn Reflect)
    }

    fn member_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        self.as_object_mut()?
            .get_mut(name)
            .map(|v| v as &mut dyn Reflect)
    }

    /// Any value is accepted; non-JSON values are converted with [`to_json`].
    fn assign(&mut self, value: &dyn Reflect) -> Result<(), AssignError> {
        *self = match downcast_concrete::<Value>(value) {
            Some(json) => json.clone(),
            None => to_json(value),
        };
        Ok(())
    }

    fn clear(&mut self) -> bool {
        *self = Value::Null;
        true
    }

    fn inner(&self) -> Option<&dyn Reflect> {
        match self {
            Value::String(s) => Some(s as &dyn Reflect),
            Value::Bool(b) => Some(b as &dyn Reflect),
            Value::Array(items) => Some(items as &dyn Reflect),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Render any reflected value as JSON.
///
/// Composites become objects of their readable members, sequences become
/// arrays, terminals follow the serde representation of their type.
pub fn to_json(value: &dyn Reflect) -> Value {
    if let Some(json) = value.as_any().downcast_ref::<Value>() {
        return json.clone();
    }
    match value.shape() {
        Shape::Null => Value::Null,
        Shape::Terminal(scalar) => scalar.to_json(),
        Shape::Sequence(seq) => Value::Array(
            (0..seq.len())
                .filter_map(|index| seq.element(index))
                .map(to_json)
                .collect(),
        ),
        Shape::Composite => {
            let mut object = Map::new();
            for info in value.members().iter().filter(|m| m.is_readable()) {
                if let Some(member) = value.member(info.name()) {
                    object.insert(info.name().to_string(), to_json(member));
                }
            }
            Value::Object(object)
        }
    }
}
