#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{sample_person, Team};
use graphlens_core::equality::{deep_equals, deep_sub_equals, DeepEqualityTester, MismatchKind};
use graphlens_core::reflect::{to_json, Reflect, TypeClass, TypeInfo};
use serde_json::{json, Value};

#[test]
fn test_bob_scenario_on_documents() {
    let a = json!({"Name": "Bob", "Tags": ["a", "b"]});
    let b = json!({"Name": "Bob", "Tags": ["a", "b"], "Extra": 1});

    assert!(!deep_equals(&a, &b, &[]));
    assert!(deep_sub_equals(&a, &b, &[]));
    assert!(graphlens_core::deep_intersection_equals(&a, &b, &[]));
}

#[test]
fn test_value_is_classified_per_variant() {
    assert_eq!(TypeInfo::of::<Value>().class(), TypeClass::Dynamic);
    assert_eq!(json!({"a": 1}).shape().class(), TypeClass::Composite);
    assert_eq!(json!([1]).shape().class(), TypeClass::Sequence);
    assert_eq!(json!("a").shape().class(), TypeClass::Terminal);
    assert_eq!(json!(null).shape().class(), TypeClass::Terminal);
}

#[test]
fn test_to_json_then_compare_round_trips_a_graph() {
    let team = Team {
        title: "core".to_string(),
        members: vec![sample_person("Ann")],
        lead: None,
    };
    let doc = to_json(&team);

    assert_eq!(doc["members"][0]["name"], json!("Ann"));
    assert_eq!(doc["lead"], Value::Null);
    assert!(deep_equals(&team, &doc, &[]));
}

#[test]
fn test_mismatch_inside_json_array_reports_index() {
    let a = json!({"rows": [{"v": 1}, {"v": 2}]});
    let b = json!({"rows": [{"v": 1}, {"v": 3}]});
    let comparison = DeepEqualityTester::default().compare(&a, &b);
    let mismatch = comparison.mismatch_at("rows[1].v").unwrap();
    assert_eq!(mismatch.kind, MismatchKind::ValueMismatch);
}

#[test]
fn test_text_does_not_equal_number() {
    assert!(!deep_equals(&json!("1"), &json!(1), &[]));
    assert!(!deep_equals(&"1".to_string(), &1u8, &[]));
}

#[test]
fn test_json_numbers_read_as_scalars_not_typed_values() {
    use graphlens_core::errors::GraphError;
    use graphlens_core::path::{get, get_typed};
    use graphlens_core::reflect::{Scalar, Shape};

    let doc = json!({"name": "Ann", "age": 42});

    assert_eq!(get_typed::<String>(&doc, "name").unwrap(), "Ann");
    let err = get_typed::<i64>(&doc, "age").unwrap_err();
    assert!(matches!(err, GraphError::TypeMismatch { .. }));

    let age = get(&doc, "age").unwrap();
    assert!(matches!(age.shape(), Shape::Terminal(Scalar::Int(42))));
}
