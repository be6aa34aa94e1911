//! picowasm virtual machine — executes i32 instruction sequences.
//!
//! The VM is a stack machine with:
//! - An [`OperandStack`] that type-checks operands as they are popped
//! - A [`Context`] trait naming the stack operations instructions may use
//! - A [`Machine`] that owns a program, a stack and a program counter
//!
//! # Usage
//!
//! ```
//! use picowasm_common::{instruction::I32_ADD, Instruction, Value};
//! use picowasm_vm::Machine;
//!
//! let mut vm = Machine::new(vec![
//!     Instruction::i32_const(42),
//!     Instruction::i32_const(23),
//!     I32_ADD,
//! ]);
//!
//! vm.step().unwrap();
//! assert_eq!(vm.stack(), &[Value::I32(42)]);
//! vm.step().unwrap();
//! vm.step().unwrap();
//! assert_eq!(vm.stack(), &[Value::I32(65)]);
//! ```

pub mod context;
pub mod error;
pub mod execute;
pub mod machine;
pub mod stack;

pub use context::Context;
pub use error::{RuntimeError, Trap};
pub use execute::Evaluate;
pub use machine::{run_all, Machine};
pub use stack::OperandStack;

use picowasm_common::{Program, Value};

/// Execute a program to completion and return the final stack, bottom to top.
///
/// # Errors
///
/// Returns [`RuntimeError`] for the first instruction that traps (stack
/// underflow, type mismatch, division by zero, overflow).
pub fn run(program: impl Into<Program>) -> Result<Vec<Value>, RuntimeError> {
    let mut vm = Machine::new(program);
    vm.run()?;
    Ok(vm.stack().to_vec())
}
