//! Runtime value representation.
//!
//! Values are what live on the operand stack during execution. Each value
//! carries its type as the enum tag, so the stack can enforce operand types
//! at runtime without a separate validation pass.

use std::fmt;

/// The runtime type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Signed 32-bit integer.
    I32,
}

/// All value types, in definition order.
pub const ALL_VALUE_TYPES: [ValueType; 1] = [ValueType::I32];

impl ValueType {
    /// Returns the text-format name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::I32 => "i32",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single machine word on the operand stack.
///
/// Equality is structural: two values are equal when they have the same
/// variant and the same scalar. Values of different variants never compare
/// equal, even when their scalars coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// Signed 32-bit integer.
    I32(i32),
}

impl Default for Value {
    fn default() -> Self {
        Value::I32(0)
    }
}

impl Value {
    /// Construct an `i32` value.
    pub const fn i32(n: i32) -> Self {
        Value::I32(n)
    }

    /// Returns the type tag for this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::I32(_) => ValueType::I32,
        }
    }

    /// Returns the scalar if this is an `i32` value.
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Value::I32(n) => Some(n),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::I32(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I32(n) => write!(f, "i32:{n}"),
        }
    }
}
