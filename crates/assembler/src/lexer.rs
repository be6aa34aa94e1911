//! Tokenizer for picowasm assembly text.

use crate::error::AsmError;

/// A single token from an assembly line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// An identifier (instruction mnemonic). Case is preserved.
    Ident(String),
    /// A numeric literal that fits in `i32`, with its source text.
    ///
    /// Unsigned hex literals are read as 32-bit patterns. Signed hex and
    /// decimal literals must lie in `i32::MIN..=i32::MAX`.
    Number { value: i32, text: String },
}

/// Tokenize a single line of assembly text.
///
/// Returns an empty Vec for blank lines and comment-only lines.
/// Comments start with `;;` and extend to end of line.
pub(crate) fn tokenize_line(line: &str, line_num: usize) -> Result<Vec<Token>, AsmError> {
    let line = match line.find(";;") {
        Some(pos) => &line[..pos],
        None => line,
    };

    let mut tokens = Vec::new();
    for word in line.split_whitespace() {
        let invalid = || AsmError::InvalidNumber {
            line: line_num,
            token: word.to_string(),
        };

        let (negative, digits) = match word.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, word.strip_prefix('+').unwrap_or(word)),
        };

        let token = if let Some(hex) = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            if !hex.as_bytes().first().is_some_and(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            // Unsigned hex is a bit pattern; signed hex is a magnitude.
            let value = if digits.len() == word.len() {
                u32::from_str_radix(hex, 16).map(|bits| bits as i32).ok()
            } else {
                i64::from_str_radix(hex, 16)
                    .ok()
                    .and_then(|magnitude| signed(negative, magnitude))
            };
            Token::Number {
                value: value.ok_or_else(invalid)?,
                text: word.to_string(),
            }
        } else if digits.as_bytes().first().is_some_and(|b| b.is_ascii_digit()) {
            let value = digits
                .parse::<i64>()
                .ok()
                .and_then(|magnitude| signed(negative, magnitude));
            Token::Number {
                value: value.ok_or_else(invalid)?,
                text: word.to_string(),
            }
        } else if digits.len() != word.len() {
            // A bare sign, or a sign in front of something that is not a number.
            return Err(invalid());
        } else {
            Token::Ident(word.to_string())
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// Apply the sign to `magnitude`, or `None` if the result leaves `i32`.
fn signed(negative: bool, magnitude: i64) -> Option<i32> {
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
