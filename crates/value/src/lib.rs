//! Dynamic value model for deep-assert.
//!
//! [`Value`] is an owned tree covering the shapes a structural comparison
//! needs: the distinct `Undefined`/`Null` nullish pair, primitives, ordered
//! sequences, and insertion-ordered mappings. [`Shape`] classifies a value
//! structurally, without consulting host type identity, so classification
//! gives the same answer for values built in different execution realms.

mod shape;
mod value;

pub use indexmap::IndexMap;
pub use shape::Shape;
pub use value::Value;
