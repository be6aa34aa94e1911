//! picowasm common types.
//!
//! This crate provides the foundational data structures for the picowasm
//! instruction subset, a numeric slice of WebAssembly over `i32`:
//!
//! - [`Value`] / [`ValueType`] — tagged runtime values for the operand stack
//! - [`Opcode`] — the 13 supported opcodes with their WebAssembly bytes
//! - [`Instruction`] — immutable instruction descriptors and shared constants
//! - [`Program`] — a fixed sequence of instructions
//! - [`OpcodeError`] — errors from opcode lookup
//!
//! Evaluation lives in `picowasm-vm`; this crate carries no execution
//! semantics.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod value;

// Re-export commonly used types at the crate root.
pub use error::OpcodeError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::Program;
pub use value::{Value, ValueType};

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy that generates a random supported Opcode.
    fn arb_opcode() -> impl Strategy<Value = Opcode> {
        prop::sample::select(&opcode::ALL_OPCODES[..])
    }

    /// Strategy that generates a random Instruction.
    fn arb_instruction() -> impl Strategy<Value = Instruction> {
        (arb_opcode(), any::<i32>()).prop_map(|(op, k)| {
            Instruction::without_immediate(op).unwrap_or(Instruction::i32_const(k))
        })
    }

    proptest! {
        /// Instruction metadata always agrees with its opcode.
        #[test]
        fn mnemonic_agrees_with_opcode(instr in arb_instruction()) {
            prop_assert_eq!(instr.mnemonic(), instr.opcode().mnemonic());
            prop_assert_eq!(instr.immediate().is_some(), instr.opcode().has_immediate());
        }

        /// Any byte either maps to an opcode whose encoding is that byte,
        /// or is reported as unknown.
        #[test]
        fn opcode_lookup_is_exact(byte in any::<u8>()) {
            match Opcode::try_from(byte) {
                Ok(op) => prop_assert_eq!(op as u8, byte),
                Err(e) => prop_assert_eq!(e, OpcodeError::UnknownOpcode(byte)),
            }
        }

        /// Values of equal scalar compare equal and format identically.
        #[test]
        fn value_equality_is_structural(n in any::<i32>()) {
            prop_assert_eq!(Value::i32(n), Value::I32(n));
            prop_assert_eq!(Value::i32(n).to_string(), format!("i32:{n}"));
        }
    }
}
