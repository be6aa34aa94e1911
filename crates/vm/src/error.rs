//! Runtime errors for the picowasm VM.
//!
//! [`Trap`] is what an instruction's evaluation produces. It knows nothing
//! about program positions, so the same evaluation code runs against a bare
//! [`OperandStack`](crate::OperandStack). The [`Machine`](crate::Machine)
//! and [`run_all`](crate::run_all) wrap traps into [`RuntimeError`] with the
//! index of the failing instruction.

use picowasm_common::{Value, ValueType};
use thiserror::Error;

/// Failures raised while evaluating a single instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Trap {
    /// Pop or peek on an empty stack.
    #[error("stack underflow")]
    StackUnderflow,

    /// The top of the stack has a different type than the instruction needs.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: ValueType, found: Value },

    /// Signed division with a zero divisor.
    #[error("integer divide by zero")]
    DivisionByZero,

    /// Signed division whose quotient does not fit (`i32::MIN / -1`).
    #[error("integer overflow")]
    IntegerOverflow,
}

/// Errors that halt a running program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The instruction at index `at` trapped.
    #[error("{source} at instruction {at} ({mnemonic})")]
    Trap {
        at: usize,
        mnemonic: &'static str,
        #[source]
        source: Trap,
    },

    /// `step` was called with the program counter past the last instruction.
    #[error("program counter {pc} out of range (program length {len})")]
    ProgramCounterOutOfRange { pc: usize, len: usize },
}

impl RuntimeError {
    /// The underlying trap, if this error came from an instruction.
    pub fn trap(&self) -> Option<&Trap> {
        match self {
            RuntimeError::Trap { source, .. } => Some(source),
            RuntimeError::ProgramCounterOutOfRange { .. } => None,
        }
    }
}
