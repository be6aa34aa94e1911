//! Disassembler: program → canonical assembly text.
//!
//! One instruction per line, no indentation, no comments, decimal
//! immediates.

use picowasm_common::Program;

/// Disassemble a program into canonical assembly text.
///
/// The output is guaranteed to reassemble to an identical program.
pub fn disassemble(program: &Program) -> String {
    let mut text = String::new();
    for instr in program {
        text.push_str(&instr.to_string());
        text.push('\n');
    }
    text
}
