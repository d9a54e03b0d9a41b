use crate::Value;

/// Structural classification of a [`Value`].
///
/// Classification is purely structural, so it holds across execution realms
/// where host type tags may differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `Undefined` or `Null`.
    Nullish,
    /// Ordered, integer-indexed, length-bearing container.
    Sequence,
    /// Keyed collection compared by its own key set.
    Mapping,
    /// Everything else: booleans, numbers, strings.
    Primitive,
}

impl Value {
    pub fn shape(&self) -> Shape {
        match self {
            Value::Undefined | Value::Null => Shape::Nullish,
            Value::Array(_) => Shape::Sequence,
            Value::Object(_) => Shape::Mapping,
            _ => Shape::Primitive,
        }
    }
}
