#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{sample_person, Address, Person};
use graphlens_core::errors::GraphError;
use graphlens_core::ext::GraphExt;
use graphlens_core::path::{get, get_or_default, get_typed, property_value, set, PropertyPath};
use graphlens_core::reflect::{Reflect, Scalar, Shape};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_set_then_get_nested_city() {
    let mut person = sample_person("Ann");

    set(&mut person, "address.city", &"Town".to_string()).unwrap();

    let city = get_typed::<String>(&person, "address.city").unwrap();
    assert_eq!(city, "Town");
}

#[test]
fn test_get_returns_reflected_value() {
    let person = sample_person("Ann");
    let value = get(&person, "age").unwrap();
    assert!(matches!(value.shape(), Shape::Terminal(Scalar::Int(42))));
}

#[test]
fn test_missing_member_names_type_and_member() {
    let person = sample_person("Ann");

    let err = get(&person, "nickname").unwrap_err();
    assert_eq!(
        err,
        GraphError::MemberNotFound {
            type_name: "Person".to_string(),
            member: "nickname".to_string(),
        }
    );

    let err = get(&person, "address.zip").unwrap_err();
    assert_eq!(
        err,
        GraphError::MemberNotFound {
            type_name: "Address".to_string(),
            member: "zip".to_string(),
        }
    );
}

#[test]
fn test_wrong_type_is_type_mismatch_not_member_not_found() {
    let person = sample_person("Ann");

    let err = get_typed::<String>(&person, "age").unwrap_err();

    assert!(!err.is_member_not_found());
    assert_eq!(
        err,
        GraphError::TypeMismatch {
            declaring_type: "Person".to_string(),
            path: "age".to_string(),
            expected: "String".to_string(),
            actual: "u32".to_string(),
        }
    );
    assert!(err.to_string().contains("Person.age"));
}

#[test]
fn test_typed_get_looks_through_nullable_wrapper() {
    let person = sample_person("Ann");
    let address = get_typed::<Address>(&person, "address").unwrap();
    assert_eq!(address.city, "Springfield");

    let wrapped = get_typed::<Option<Address>>(&person, "address").unwrap();
    assert!(wrapped.is_some());
}

#[test]
fn test_get_or_default_only_swallows_member_not_found() {
    let person = sample_person("Ann");

    let value = get_or_default(&person, "nickname", "none".to_string()).unwrap();
    assert_eq!(value, "none");

    let value = get_or_default(&person, "name", "none".to_string()).unwrap();
    assert_eq!(value, "Ann");

    let err = get_or_default(&person, "age", String::new()).unwrap_err();
    assert!(matches!(err, GraphError::TypeMismatch { .. }));
}

#[test]
fn test_set_rejects_missing_readonly_and_wrong_type() {
    let mut person = sample_person("Ann");

    let err = set(&mut person, "address.zip", &"x".to_string()).unwrap_err();
    assert!(err.is_member_not_found());

    let err = set(&mut person, "id", &uuid::Uuid::nil()).unwrap_err();
    assert!(err.is_member_not_found());

    let err = set(&mut person, "age", &"old".to_string()).unwrap_err();
    assert!(matches!(err, GraphError::TypeMismatch { ref path, .. } if path == "age"));
    assert_eq!(person.age, 42);
}

#[test]
fn test_set_through_null_intermediate_fails() {
    let mut person = Person::default();
    let err = set(&mut person, "address.city", &"Town".to_string()).unwrap_err();
    assert_eq!(
        err,
        GraphError::MemberNotFound {
            type_name: "Option<Address>".to_string(),
            member: "city".to_string(),
        }
    );
}

#[test]
fn test_property_value_does_not_split() {
    let doc = json!({"a.b": 1, "a": {"b": 2}});
    let direct = property_value(&doc, "a.b").unwrap();
    assert!(matches!(direct.shape(), Shape::Terminal(Scalar::Int(1))));
    let nested = get(&doc, "a.b").unwrap();
    assert!(matches!(nested.shape(), Shape::Terminal(Scalar::Int(2))));
}

#[test]
fn test_json_paths() {
    let mut doc = json!({"address": {"city": "Old"}, "tags": ["a"]});

    set(&mut doc, "address.city", &"Town".to_string()).unwrap();
    assert_eq!(doc["address"]["city"], json!("Town"));
    assert_eq!(get_typed::<String>(&doc, "address.city").unwrap(), "Town");
    assert_eq!(
        get_typed::<Vec<serde_json::Value>>(&doc, "tags").unwrap(),
        &vec![json!("a")]
    );
    assert!(get(&doc, "address.zip").unwrap_err().is_member_not_found());
}

#[test]
fn test_empty_segment_is_member_not_found() {
    let person = sample_person("Ann");
    let err = get(&person, "address.").unwrap_err();
    assert_eq!(
        err,
        GraphError::MemberNotFound {
            type_name: "Address".to_string(),
            member: String::new(),
        }
    );
}

#[test]
fn test_property_path_parse_and_display() {
    let path: PropertyPath = "address.city".parse().unwrap();
    assert_eq!(path.segments().len(), 2);
    assert_eq!(path.to_string(), "address.city");
}

#[test]
fn test_extension_methods() {
    let mut person = sample_person("Ann");
    person.set_path("name", &"Bea".to_string()).unwrap();
    assert_eq!(person.get_path::<String>("name").unwrap(), "Bea");
    assert_eq!(person.get_path_or_default("missing", 7u32).unwrap(), 7);
    assert!(person.members().iter().any(|m| m.name() == "born"));
}

proptest! {
    #[test]
    fn prop_set_then_get_returns_value(city in "\\PC{0,16}", age in any::<u32>()) {
        let mut person = sample_person("Ann");
        set(&mut person, "address.city", &city).unwrap();
        set(&mut person, "age", &age).unwrap();
        prop_assert_eq!(get_typed::<String>(&person, "address.city").unwrap(), &city);
        prop_assert_eq!(*get_typed::<u32>(&person, "age").unwrap(), age);
    }
}

#[test]
fn test_path_operations_compose_with_question_mark() -> anyhow::Result<()> {
    let mut person = sample_person("Ann");

    set(&mut person, "name", &"Bea".to_string())?;
    let name = get_typed::<String>(&person, "name")?;
    let path: PropertyPath = "address.city".parse()?;
    let city = get_typed::<String>(&person, &path.to_string())?;

    anyhow::ensure!(name == "Bea", "unexpected name {name}");
    anyhow::ensure!(city == "Springfield", "unexpected city {city}");
    Ok(())
}
