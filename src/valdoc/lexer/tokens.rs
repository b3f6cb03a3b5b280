//! Token definitions for validator argument lists
//!
//! The grammar covered here is the literal-and-operator subset of Go expressions that
//! shows up inside validator calls. Only the two string forms carry values; everything
//! else exists so that non-string arguments are recognized as such and skipped.
use logos::{Lexer, Logos};

fn block_comment(lex: &mut Lexer<ArgToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

/// All tokens that can appear in an argument list
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum ArgToken {
    // "double quoted", backslash escapes allowed
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    InterpretedString,

    // `raw`, no escapes
    #[regex(r"`[^`]*`")]
    RawString,

    #[regex(r"'([^'\\\n]|\\[^\n])*'")]
    Rune,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9][0-9A-Za-z_.]*")]
    Number,

    #[regex(r"//[^\n]*")]
    #[token("/*", block_comment)]
    Comment,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,

    #[regex(r"[-+*/%&|^<>=!:;~?]")]
    Operator,
}

impl ArgToken {
    /// Check if this token is a string literal of either form
    pub fn is_string(&self) -> bool {
        matches!(self, ArgToken::InterpretedString | ArgToken::RawString)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, ArgToken::Comment)
    }

    /// Opening bracket of any kind
    pub fn opens(&self) -> bool {
        matches!(
            self,
            ArgToken::OpenParen | ArgToken::OpenBracket | ArgToken::OpenBrace
        )
    }

    /// Closing bracket of any kind
    pub fn closes(&self) -> bool {
        matches!(
            self,
            ArgToken::CloseParen | ArgToken::CloseBracket | ArgToken::CloseBrace
        )
    }
}
