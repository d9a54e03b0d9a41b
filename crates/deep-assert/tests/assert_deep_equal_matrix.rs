//! Assertion wrapper tests: success path, failure payload, operator label.

use deep_assert::{assert_deep_equal, Value, ASSERT_DEEP_EQUAL_OPERATOR};
use serde_json::json;

fn v(j: serde_json::Value) -> Value {
    Value::from(j)
}

#[test]
fn equal_values_return_ok() {
    let actual = v(json!({"a": 1}));
    let expected = v(json!({"a": 1}));
    assert!(assert_deep_equal(&actual, &expected, "ok").is_ok());
}

#[test]
fn equal_nested_values_return_ok() {
    let actual = v(json!({"x": [1, {"y": 2}], "z": null}));
    let expected = v(json!({"z": null, "x": [1, {"y": 2}]}));
    assert!(assert_deep_equal(&actual, &expected, "nested ok").is_ok());
}

#[test]
fn unequal_values_fail_with_message() {
    let actual = v(json!({"a": 1}));
    let expected = v(json!({"a": 2}));
    let failure = assert_deep_equal(&actual, &expected, "mismatch")
        .expect_err("values differ, assertion must fail");
    assert_eq!(failure.message, "mismatch");
}

#[test]
fn failure_carries_both_values() {
    let actual = v(json!([1, 2, 3]));
    let expected = v(json!([1, 2]));
    let failure = assert_deep_equal(&actual, &expected, "length")
        .expect_err("lengths differ, assertion must fail");
    assert_eq!(failure.actual, actual);
    assert_eq!(failure.expected, expected);
}

#[test]
fn failure_carries_operator_label() {
    let failure = assert_deep_equal(&Value::Null, &Value::Undefined, "nullish")
        .expect_err("null vs undefined must fail");
    assert_eq!(failure.operator, ASSERT_DEEP_EQUAL_OPERATOR);
    assert_eq!(failure.operator, "assertDeepEqual");
}

#[test]
fn failure_display_is_the_message() {
    let failure = assert_deep_equal(&v(json!(1)), &v(json!(2)), "numbers differ")
        .expect_err("numbers differ");
    assert_eq!(failure.to_string(), "numbers differ");
}

#[test]
fn error_propagates_through_question_mark() {
    fn check() -> Result<(), deep_assert::AssertionFailure> {
        let actual = v(json!({"a": 1}));
        assert_deep_equal(&actual, &actual.clone(), "same")?;
        assert_deep_equal(&actual, &v(json!({"a": 2})), "different")?;
        Ok(())
    }
    let failure = check().expect_err("second assertion fails");
    assert_eq!(failure.message, "different");
}
