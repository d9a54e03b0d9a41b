use deep_assert_value::{IndexMap, Shape, Value};

/// Recursive structural equality between two [`Value`] trees.
///
/// Compares structure and contents only, never host type identity, so two
/// structurally identical values built in different execution realms compare
/// equal. Checks run in order, first match wins:
///
/// 1. identical references, or same-kind primitives with equal payloads
///    (`NaN` excluded by IEEE semantics);
/// 2. any remaining nullish operand makes the pair unequal, so
///    `Null` vs `Undefined` is unequal;
/// 3. sequences are equal iff same length and elementwise equal, in order;
/// 4. mappings are equal iff their sorted key sequences match and every key's
///    value matches;
/// 5. everything else (sequence vs mapping, mismatched primitive kinds) is
///    unequal.
///
/// Recursion is stack-based with no depth guard; very deep trees can exhaust
/// the call stack.
///
/// # Examples
///
/// ```
/// use deep_assert::is_equal;
/// use deep_assert_value::Value;
///
/// let a = Value::from(serde_json::json!({"x": [1, {"y": 2}]}));
/// let b = Value::from(serde_json::json!({"x": [1, {"y": 2}]}));
///
/// assert!(is_equal(&a, &b));
/// assert!(!is_equal(&Value::Null, &Value::Undefined));
/// ```
pub fn is_equal(actual: &Value, expected: &Value) -> bool {
    if std::ptr::eq(actual as *const _, expected as *const _) {
        return true;
    }
    if strict_equal(actual, expected) {
        return true;
    }
    if actual.shape() == Shape::Nullish || expected.shape() == Shape::Nullish {
        return false;
    }
    match (actual, expected) {
        (Value::Array(a), Value::Array(b)) => sequence_equal(a, b),
        (Value::Object(a), Value::Object(b)) => mapping_equal(a, b),
        _ => false,
    }
}

/// Same-kind primitive equality. Containers only match here by reference,
/// which [`is_equal`] has already checked.
fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Integer(x), Value::Integer(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        _ => false,
    }
}

fn sequence_equal(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| is_equal(x, y))
}

fn mapping_equal(a: &IndexMap<String, Value>, b: &IndexMap<String, Value>) -> bool {
    let mut keys_a: Vec<&str> = a.keys().map(String::as_str).collect();
    let mut keys_b: Vec<&str> = b.keys().map(String::as_str).collect();
    keys_a.sort_unstable();
    keys_b.sort_unstable();
    // Sequence rule over the sorted key names: both objects must expose
    // exactly the same own-key set before any values are compared.
    if keys_a.len() != keys_b.len() || keys_a.iter().zip(&keys_b).any(|(x, y)| x != y) {
        return false;
    }
    for (key, val_a) in a {
        match b.get(key) {
            Some(val_b) => {
                if !is_equal(val_a, val_b) {
                    return false;
                }
            }
            None => return false,
        }
    }
    true
}
