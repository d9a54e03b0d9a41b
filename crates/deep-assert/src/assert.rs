use deep_assert_value::Value;
use thiserror::Error;

use crate::deep_equal::is_equal;

/// Operator label carried by failures from [`assert_deep_equal`], for
/// reporters that group failures by assertion kind.
pub const ASSERT_DEEP_EQUAL_OPERATOR: &str = "assertDeepEqual";

/// A failed deep-equality assertion.
///
/// Carries both compared values alongside the caller's message so a test
/// reporter can render a diff. `Display` shows the message only.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct AssertionFailure {
    pub actual: Value,
    pub expected: Value,
    pub message: String,
    pub operator: &'static str,
}

/// Asserts that `actual` is deeply equal to `expected`.
///
/// Returns [`AssertionFailure`] when [`is_equal`] evaluates false; otherwise
/// returns normally with no side effect. Equality is structural, so values
/// from different execution realms validate against each other.
pub fn assert_deep_equal(
    actual: &Value,
    expected: &Value,
    message: &str,
) -> Result<(), AssertionFailure> {
    if is_equal(actual, expected) {
        return Ok(());
    }
    Err(AssertionFailure {
        actual: actual.clone(),
        expected: expected.clone(),
        message: message.to_string(),
        operator: ASSERT_DEEP_EQUAL_OPERATOR,
    })
}
