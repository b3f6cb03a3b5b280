//! Decoding of string literal tokens into their logical values
//!
//! Interpreted strings follow Go escape rules: the single-character escapes, octal and
//! hex byte escapes, and `\u`/`\U` code points. Byte escapes are collected as raw bytes,
//! so the decoded result is only accepted if it forms valid UTF-8. Raw strings are
//! taken verbatim with carriage returns removed.

use std::fmt;

/// Errors that can occur while decoding a literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnquoteError {
    /// The text is not wrapped in matching `"` or `` ` `` quotes
    MissingQuotes,
    /// A literal newline inside an interpreted string
    RawNewline,
    /// A quote character inside the literal body
    UnescapedQuote,
    /// A backslash followed by a character that starts no escape
    InvalidEscape(char),
    /// The literal ends in the middle of an escape sequence
    TruncatedEscape,
    /// An octal escape above `\377`
    OctalOutOfRange(u32),
    /// A `\u` or `\U` escape that is not a Unicode scalar value
    InvalidCodePoint(u32),
    /// Byte escapes that do not assemble into UTF-8
    InvalidUtf8,
}

impl fmt::Display for UnquoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnquoteError::MissingQuotes => write!(f, "literal is not quoted"),
            UnquoteError::RawNewline => write!(f, "newline in string literal"),
            UnquoteError::UnescapedQuote => write!(f, "unescaped quote in string literal"),
            UnquoteError::InvalidEscape(c) => write!(f, "unknown escape sequence: \\{}", c),
            UnquoteError::TruncatedEscape => write!(f, "escape sequence not terminated"),
            UnquoteError::OctalOutOfRange(value) => {
                write!(f, "octal escape value {} > 255", value)
            }
            UnquoteError::InvalidCodePoint(value) => {
                write!(f, "escape sequence is invalid Unicode code point: {:#x}", value)
            }
            UnquoteError::InvalidUtf8 => write!(f, "literal bytes are not valid UTF-8"),
        }
    }
}

impl std::error::Error for UnquoteError {}

/// Decode an interpreted (`"..."`) or raw (`` `...` ``) string literal
pub fn unquote(literal: &str) -> Result<String, UnquoteError> {
    let quoted_by = |quote: char| {
        literal.len() >= 2 && literal.starts_with(quote) && literal.ends_with(quote)
    };
    if quoted_by('"') {
        unquote_interpreted(&literal[1..literal.len() - 1])
    } else if quoted_by('`') {
        let body = &literal[1..literal.len() - 1];
        if body.contains('`') {
            return Err(UnquoteError::UnescapedQuote);
        }
        Ok(body.replace('\r', ""))
    } else {
        Err(UnquoteError::MissingQuotes)
    }
}

fn unquote_interpreted(body: &str) -> Result<String, UnquoteError> {
    // Fast path: nothing to decode
    if !body.contains(['\\', '"', '\n']) {
        return Ok(body.to_string());
    }

    let mut bytes = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(UnquoteError::UnescapedQuote),
            '\n' => return Err(UnquoteError::RawNewline),
            '\\' => decode_escape(&mut chars, &mut bytes)?,
            _ => push_char(&mut bytes, c),
        }
    }

    String::from_utf8(bytes).map_err(|_| UnquoteError::InvalidUtf8)
}

fn decode_escape(chars: &mut std::str::Chars<'_>, bytes: &mut Vec<u8>) -> Result<(), UnquoteError> {
    let escape = chars.next().ok_or(UnquoteError::TruncatedEscape)?;
    match escape {
        'a' => bytes.push(0x07),
        'b' => bytes.push(0x08),
        'f' => bytes.push(0x0c),
        'n' => bytes.push(b'\n'),
        'r' => bytes.push(b'\r'),
        't' => bytes.push(b'\t'),
        'v' => bytes.push(0x0b),
        '\\' => bytes.push(b'\\'),
        '"' => bytes.push(b'"'),
        '0'..='7' => {
            let rest = take_digits(chars, 2, 8)?;
            let value = (escape as u32 - '0' as u32) * 64 + rest;
            if value > 255 {
                return Err(UnquoteError::OctalOutOfRange(value));
            }
            bytes.push(value as u8);
        }
        'x' => bytes.push(take_digits(chars, 2, 16)? as u8),
        'u' | 'U' => {
            let width = if escape == 'u' { 4 } else { 8 };
            let value = take_digits(chars, width, 16)?;
            let c = char::from_u32(value).ok_or(UnquoteError::InvalidCodePoint(value))?;
            push_char(bytes, c);
        }
        other => return Err(UnquoteError::InvalidEscape(other)),
    }
    Ok(())
}

fn take_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> Result<u32, UnquoteError> {
    let mut value = 0u32;
    for _ in 0..count {
        let c = chars.next().ok_or(UnquoteError::TruncatedEscape)?;
        let digit = c.to_digit(radix).ok_or(UnquoteError::InvalidEscape(c))?;
        value = value * radix + digit;
    }
    Ok(value)
}

fn push_char(bytes: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
