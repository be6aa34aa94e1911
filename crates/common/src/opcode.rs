//! Opcode definitions for the picowasm instruction subset.
//!
//! Byte values follow the WebAssembly binary encoding. They identify
//! instructions for documentation, tracing and equality; the interpreter
//! never dispatches on them.

use crate::error::OpcodeError;

/// Identifies the operation an instruction performs.
///
/// The `#[repr(u8)]` attribute pins each variant to its WebAssembly byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Control
    /// No operation.
    Nop = 0x01,

    // Parametric
    /// Pop one value of any type and discard it.
    Drop = 0x1a,

    // Constants
    /// Push the immediate as an `i32`.
    I32Const = 0x41,

    // Comparison
    /// Pop two, push 1 if equal.
    I32Eq = 0x46,
    /// Pop two, push 1 if not equal.
    I32Ne = 0x47,
    /// Pop two, push 1 if second_popped < first_popped (signed).
    I32LtS = 0x48,
    /// Pop two, push 1 if second_popped > first_popped (signed).
    I32GtS = 0x4a,
    /// Pop two, push 1 if second_popped <= first_popped (signed).
    I32LeS = 0x4c,
    /// Pop two, push 1 if second_popped >= first_popped (signed).
    I32GeS = 0x4e,

    // Arithmetic
    /// Pop two, push their wrapping sum.
    I32Add = 0x6a,
    /// Pop two, push (second_popped - first_popped), wrapping.
    I32Sub = 0x6b,
    /// Pop two, push their wrapping product.
    I32Mul = 0x6c,
    /// Pop two, push the signed quotient truncated toward zero.
    I32DivS = 0x6d,
}

/// All supported opcodes, in encoding order.
pub const ALL_OPCODES: [Opcode; 13] = [
    Opcode::Nop,
    Opcode::Drop,
    Opcode::I32Const,
    Opcode::I32Eq,
    Opcode::I32Ne,
    Opcode::I32LtS,
    Opcode::I32GtS,
    Opcode::I32LeS,
    Opcode::I32GeS,
    Opcode::I32Add,
    Opcode::I32Sub,
    Opcode::I32Mul,
    Opcode::I32DivS,
];

impl TryFrom<u8> for Opcode {
    type Error = OpcodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Opcode::Nop),
            0x1a => Ok(Opcode::Drop),
            0x41 => Ok(Opcode::I32Const),
            0x46 => Ok(Opcode::I32Eq),
            0x47 => Ok(Opcode::I32Ne),
            0x48 => Ok(Opcode::I32LtS),
            0x4a => Ok(Opcode::I32GtS),
            0x4c => Ok(Opcode::I32LeS),
            0x4e => Ok(Opcode::I32GeS),
            0x6a => Ok(Opcode::I32Add),
            0x6b => Ok(Opcode::I32Sub),
            0x6c => Ok(Opcode::I32Mul),
            0x6d => Ok(Opcode::I32DivS),
            _ => Err(OpcodeError::UnknownOpcode(value)),
        }
    }
}

impl Opcode {
    /// Returns the text-format mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Nop => "nop",
            Opcode::Drop => "drop",
            Opcode::I32Const => "i32.const",
            Opcode::I32Eq => "i32.eq",
            Opcode::I32Ne => "i32.ne",
            Opcode::I32LtS => "i32.lt_s",
            Opcode::I32GtS => "i32.gt_s",
            Opcode::I32LeS => "i32.le_s",
            Opcode::I32GeS => "i32.ge_s",
            Opcode::I32Add => "i32.add",
            Opcode::I32Sub => "i32.sub",
            Opcode::I32Mul => "i32.mul",
            Opcode::I32DivS => "i32.div_s",
        }
    }

    /// Looks up an opcode by its mnemonic. Matching is case-sensitive.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == mnemonic)
            .copied()
    }

    /// Returns true if instructions with this opcode carry an immediate.
    pub fn has_immediate(&self) -> bool {
        matches!(self, Opcode::I32Const)
    }
}
