//! Parser for picowasm assembly tokens → instructions.

use crate::error::AsmError;
use crate::lexer::Token;
use picowasm_common::{Instruction, Opcode};

/// Parse the tokens of a single line into an instruction.
///
/// Returns `Ok(None)` for blank lines (empty token list).
pub(crate) fn parse_line(
    tokens: &[Token],
    line_num: usize,
) -> Result<Option<Instruction>, AsmError> {
    let Some((first, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let mnemonic = match first {
        Token::Ident(s) => s.as_str(),
        Token::Number { text, .. } => {
            return Err(AsmError::UnexpectedToken {
                line: line_num,
                token: text.clone(),
            })
        }
    };

    let opcode =
        Opcode::from_mnemonic(mnemonic).ok_or_else(|| AsmError::UnknownInstruction {
            line: line_num,
            token: mnemonic.to_string(),
        })?;

    match Instruction::without_immediate(opcode) {
        Some(instr) => {
            expect_end(args, line_num)?;
            Ok(Some(instr))
        }
        None => {
            let value = expect_i32(args, line_num, opcode.mnemonic())?;
            expect_end(&args[1..], line_num)?;
            Ok(Some(Instruction::i32_const(value)))
        }
    }
}

/// Read the immediate at `args[0]` as an `i32`.
fn expect_i32(args: &[Token], line_num: usize, mnemonic: &'static str) -> Result<i32, AsmError> {
    match args.first() {
        Some(Token::Number { value, .. }) => Ok(*value),
        Some(Token::Ident(s)) => Err(AsmError::UnexpectedToken {
            line: line_num,
            token: s.clone(),
        }),
        None => Err(AsmError::MissingImmediate {
            line: line_num,
            mnemonic,
        }),
    }
}

/// Reject trailing tokens.
fn expect_end(args: &[Token], line_num: usize) -> Result<(), AsmError> {
    match args.first() {
        None => Ok(()),
        Some(tok) => Err(AsmError::UnexpectedToken {
            line: line_num,
            token: match tok {
                Token::Ident(s) => s.clone(),
                Token::Number { text, .. } => text.clone(),
            },
        }),
    }
}
