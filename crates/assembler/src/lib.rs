//! picowasm assembler — text ↔ program translation.
//!
//! The text format is a flat, WAT-like listing: one instruction per line,
//! lowercase WebAssembly mnemonics, `;;` line comments.
//!
//! # Usage
//!
//! ```
//! use picowasm_assembler::{assemble, disassemble};
//!
//! let text = "i32.const 42\ni32.const 23\ni32.add\n";
//! let program = assemble(text).unwrap();
//! assert_eq!(program.len(), 3);
//! assert_eq!(disassemble(&program), text);
//! ```
//!
//! # Roundtrip Guarantee
//!
//! `assemble(disassemble(program)) == program` holds for all programs.
//! The disassembler outputs canonical text; the assembler also accepts
//! comments, indentation and hex immediates.

pub mod error;

mod disassembler;
mod lexer;
mod parser;

pub use error::AsmError;

use lexer::tokenize_line;
use parser::parse_line;
use picowasm_common::Program;

/// Assemble text into a program.
///
/// Returns the first error encountered.
pub fn assemble(text: &str) -> Result<Program, AsmError> {
    let mut instructions = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let tokens = tokenize_line(line, line_num)?;
        if let Some(instr) = parse_line(&tokens, line_num)? {
            instructions.push(instr);
        }
    }

    Ok(Program::new(instructions))
}

/// Disassemble a program into canonical assembly text.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}
