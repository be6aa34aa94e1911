//! Instruction descriptors.
//!
//! An instruction is an immutable value: an opcode, its mnemonic, and an
//! optional immediate. Payload-free instructions are shared as constants;
//! `i32.const` is built with [`Instruction::i32_const`].
//!
//! ```
//! use picowasm_common::instruction::{self, Instruction};
//! use picowasm_common::Opcode;
//!
//! let push = Instruction::i32_const(42);
//! assert_eq!(push.opcode(), Opcode::I32Const);
//! assert_eq!(push.to_string(), "i32.const 42");
//! assert_eq!(instruction::I32_ADD.mnemonic(), "i32.add");
//! ```

use std::fmt;

use crate::opcode::Opcode;
use crate::value::Value;

/// A single instruction. Immediates live in the variant payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Nop,
    Drop,
    I32Const(i32),
    I32Eq,
    I32Ne,
    I32LtS,
    I32GtS,
    I32LeS,
    I32GeS,
    I32Add,
    I32Sub,
    I32Mul,
    I32DivS,
}

pub const NOP: Instruction = Instruction::Nop;
pub const DROP: Instruction = Instruction::Drop;
pub const I32_EQ: Instruction = Instruction::I32Eq;
pub const I32_NE: Instruction = Instruction::I32Ne;
pub const I32_LT_S: Instruction = Instruction::I32LtS;
pub const I32_GT_S: Instruction = Instruction::I32GtS;
pub const I32_LE_S: Instruction = Instruction::I32LeS;
pub const I32_GE_S: Instruction = Instruction::I32GeS;
pub const I32_ADD: Instruction = Instruction::I32Add;
pub const I32_SUB: Instruction = Instruction::I32Sub;
pub const I32_MUL: Instruction = Instruction::I32Mul;
pub const I32_DIV_S: Instruction = Instruction::I32DivS;

impl Instruction {
    /// Create an `i32.const` instruction pushing `value`.
    pub const fn i32_const(value: i32) -> Self {
        Instruction::I32Const(value)
    }

    /// Returns the instruction for an opcode that takes no immediate.
    ///
    /// Returns `None` for opcodes that require an immediate (`i32.const`).
    pub fn without_immediate(opcode: Opcode) -> Option<Self> {
        let instr = match opcode {
            Opcode::I32Const => return None,
            Opcode::Nop => Instruction::Nop,
            Opcode::Drop => Instruction::Drop,
            Opcode::I32Eq => Instruction::I32Eq,
            Opcode::I32Ne => Instruction::I32Ne,
            Opcode::I32LtS => Instruction::I32LtS,
            Opcode::I32GtS => Instruction::I32GtS,
            Opcode::I32LeS => Instruction::I32LeS,
            Opcode::I32GeS => Instruction::I32GeS,
            Opcode::I32Add => Instruction::I32Add,
            Opcode::I32Sub => Instruction::I32Sub,
            Opcode::I32Mul => Instruction::I32Mul,
            Opcode::I32DivS => Instruction::I32DivS,
        };
        Some(instr)
    }

    /// The operation this instruction performs.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Nop => Opcode::Nop,
            Instruction::Drop => Opcode::Drop,
            Instruction::I32Const(_) => Opcode::I32Const,
            Instruction::I32Eq => Opcode::I32Eq,
            Instruction::I32Ne => Opcode::I32Ne,
            Instruction::I32LtS => Opcode::I32LtS,
            Instruction::I32GtS => Opcode::I32GtS,
            Instruction::I32LeS => Opcode::I32LeS,
            Instruction::I32GeS => Opcode::I32GeS,
            Instruction::I32Add => Opcode::I32Add,
            Instruction::I32Sub => Opcode::I32Sub,
            Instruction::I32Mul => Opcode::I32Mul,
            Instruction::I32DivS => Opcode::I32DivS,
        }
    }

    /// The text-format mnemonic, e.g. `i32.add`.
    pub fn mnemonic(&self) -> &'static str {
        self.opcode().mnemonic()
    }

    /// The immediate operand, if this instruction carries one.
    pub fn immediate(&self) -> Option<Value> {
        match *self {
            Instruction::I32Const(n) => Some(Value::I32(n)),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::I32Const(n) => write!(f, "{} {n}", self.mnemonic()),
            _ => f.write_str(self.mnemonic()),
        }
    }
}
