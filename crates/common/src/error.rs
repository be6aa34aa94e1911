//! Errors for opcode lookup.

use thiserror::Error;

/// Errors that occur when mapping a raw byte to an [`Opcode`](crate::Opcode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpcodeError {
    /// The byte is a valid WebAssembly opcode outside the supported subset,
    /// or not an opcode at all.
    #[error("unknown opcode: {0:#04x}")]
    UnknownOpcode(u8),
}
