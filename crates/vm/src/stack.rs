//! The operand stack.

use crate::context::Context;
use crate::error::Trap;
use picowasm_common::{Value, ValueType};

/// LIFO sequence of runtime values with type-checked pops.
///
/// Index 0 of [`values`](OperandStack::values) is the bottom of the stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandStack {
    values: Vec<Value>,
}

impl OperandStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a value onto the top of the stack.
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> Result<Value, Trap> {
        self.values.pop().ok_or(Trap::StackUnderflow)
    }

    /// Return the top value without removing it.
    pub fn peek(&self) -> Result<&Value, Trap> {
        self.values.last().ok_or(Trap::StackUnderflow)
    }

    /// Remove and return the top value if its type is `expected`.
    ///
    /// The type is checked before anything is removed, so a mismatch
    /// leaves the stack exactly as it was. `I32` is the only value type,
    /// so the mismatch branch cannot be reached through real values yet.
    pub fn pop_typed(&mut self, expected: ValueType) -> Result<Value, Trap> {
        let found = *self.peek()?;
        if found.value_type() != expected {
            return Err(Trap::TypeMismatch { expected, found });
        }
        self.pop()
    }

    /// Current number of values.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The stack contents, bottom to top.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl From<Vec<Value>> for OperandStack {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl Context for OperandStack {
    fn push(&mut self, value: Value) {
        OperandStack::push(self, value)
    }

    fn pop(&mut self) -> Result<Value, Trap> {
        OperandStack::pop(self)
    }

    fn peek(&self) -> Result<&Value, Trap> {
        OperandStack::peek(self)
    }

    fn pop_typed(&mut self, expected: ValueType) -> Result<Value, Trap> {
        OperandStack::pop_typed(self, expected)
    }
}
