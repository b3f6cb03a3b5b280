//! Argument-list lexer
//!
//! Once the scanner has located a call, its argument text is tokenized with logos so the
//! extractor can split it into top-level arguments and decide which of them are plain
//! string literals. Whitespace is skipped by the lexer itself, comments are dropped here.

pub mod tokens;

pub use tokens::ArgToken;

use logos::Logos;

/// A token with its byte span. `token` is None for input logos could not classify.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Option<ArgToken>,
    pub span: logos::Span,
}

/// Tokenize an argument list, keeping spans and unrecognized input
pub fn tokenize_with_spans(source: &str) -> Vec<Lexeme> {
    let mut lexer = ArgToken::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.ok();
        if token.is_some_and(|t| t.is_comment()) {
            continue;
        }
        lexemes.push(Lexeme {
            token,
            span: lexer.span(),
        });
    }

    lexemes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> Vec<Option<ArgToken>> {
        tokenize_with_spans(source)
            .into_iter()
            .map(|lexeme| lexeme.token)
            .collect()
    }

    #[test]
    fn test_simple_arguments() {
        let tokens = tokenize(r#""a", "b""#);
        assert_eq!(
            tokens,
            vec![
                Some(ArgToken::InterpretedString),
                Some(ArgToken::Comma),
                Some(ArgToken::InterpretedString),
            ]
        );
    }

    #[test]
    fn test_comments_are_dropped() {
        let tokens = tokenize("\"a\" // first\n, /* second */ \"b\"");
        assert_eq!(
            tokens,
            vec![
                Some(ArgToken::InterpretedString),
                Some(ArgToken::Comma),
                Some(ArgToken::InterpretedString),
            ]
        );
    }

    #[test]
    fn test_spans_point_at_literals() {
        let source = r#" "a,b" , "c" "#;
        let lexemes = tokenize_with_spans(source);
        assert_eq!(&source[lexemes[0].span.clone()], r#""a,b""#);
        assert_eq!(&source[lexemes[2].span.clone()], r#""c""#);
    }

    #[test]
    fn test_unclassified_input_is_kept() {
        let tokens = tokenize("\"a\", #");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2], None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
        assert_eq!(tokenize("  \n\t "), vec![]);
    }
}
