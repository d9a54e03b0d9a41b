//! deep-assert - structural deep-equality assertion for dynamic values.
//!
//! Provides [`is_equal`] for recursively comparing two [`Value`] trees by
//! structure and contents, and [`assert_deep_equal`], which wraps the
//! predicate into a test assertion that fails with a structured
//! [`AssertionFailure`].
//!
//! The comparison never inspects host type identity (prototypes,
//! constructors, vtables), so it can validate equality between structurally
//! identical values that originate from different isolated execution realms.

mod assert;
mod deep_equal;

pub use assert::{assert_deep_equal, AssertionFailure, ASSERT_DEEP_EQUAL_OPERATOR};
pub use deep_equal::is_equal;

pub use deep_assert_value::{IndexMap, Shape, Value};
