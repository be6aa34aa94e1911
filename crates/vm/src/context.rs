//! The interface instructions evaluate against.

use crate::error::Trap;
use picowasm_common::{Value, ValueType};

/// Stack operations available to an instruction during evaluation.
///
/// Implemented by [`OperandStack`](crate::OperandStack) itself and by
/// [`Machine`](crate::Machine), which forwards to the stack it owns. This
/// lets instruction semantics be tested against a bare stack.
pub trait Context {
    /// Push a value onto the top of the stack.
    fn push(&mut self, value: Value);

    /// Remove and return the top value.
    fn pop(&mut self) -> Result<Value, Trap>;

    /// Return the top value without removing it.
    fn peek(&self) -> Result<&Value, Trap>;

    /// Remove and return the top value if it has type `expected`.
    ///
    /// On a type mismatch the stack is left unchanged.
    fn pop_typed(&mut self, expected: ValueType) -> Result<Value, Trap>;
}
