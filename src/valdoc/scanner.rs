//! Call-site recognizer for validator source text
//!
//!     Validator fragments arrive as opaque source snippets such as
//!     `stringvalidator.OneOf("a", "b")`. Rather than evaluating them, we run a small
//!     hand-written scanner over the text that knows exactly enough of the expression
//!     syntax to tell code apart from literal and comment content. The scanner emits a flat
//!     list of code tokens, and the matcher walks that list looking for the
//!     `<package> . <Function> (` shape.
//!
//! Scanner States
//!
//!     Code:
//!         Identifiers, dots, brackets and punctuation are emitted as tokens. Whitespace is
//!         dropped. A `"`, `` ` `` or `'` switches into the matching literal state, and
//!         `//` or `/*` into a comment state.
//!
//!     Literal states (string, escape, raw string, rune, rune escape):
//!         Everything up to the closing quote belongs to one Literal token. A backslash moves
//!         into the escape state so that the following character, quote included, never
//!         terminates the literal. Raw strings have no escapes.
//!
//!     Comment states (line, block):
//!         Content is discarded until the newline or the closing `*/`.
//!
//! Validity
//!
//!     A fragment is all-or-nothing. If it ends inside a literal or block comment, or its
//!     brackets are unbalanced or mismatched, or a comma leaves an empty list element
//!     (`(,"a")`, `("a",,"b")`), [scan] returns None and [find_calls] reports no matches at
//!     all. A single trailing comma before the closing bracket is allowed. Parentheses
//!     inside literals never count towards balance, so a value like `"a)"` cannot truncate
//!     an argument list.

use std::ops::Range;

/// Bracket families tracked for balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Paren,
    Square,
    Curly,
}

/// Tokens produced by the scanner while in code state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeToken {
    Ident,
    Number,
    Dot,
    Comma,
    Open(Bracket),
    Close(Bracket),
    /// A complete string, raw string or rune literal, quotes included
    Literal,
    Punct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedToken {
    pub kind: CodeToken,
    pub span: Range<usize>,
    /// For open brackets, index of the balancing close token
    pub close: Option<usize>,
}

impl ScannedToken {
    fn new(kind: CodeToken, span: Range<usize>) -> Self {
        ScannedToken {
            kind,
            span,
            close: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Code,
    InString,
    InEscape,
    InRawString,
    InRune,
    InRuneEscape,
    InLineComment,
    InBlockComment,
}

/// One recognized invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallMatch<'s> {
    /// Byte range from the package identifier to the closing parenthesis
    pub span: Range<usize>,
    /// Exact text between the parentheses
    pub arguments: &'s str,
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Scan source text into code tokens.
///
/// Returns None when the text is not a well-formed expression as far as literals,
/// comments and brackets are concerned.
pub fn scan(source: &str) -> Option<Vec<ScannedToken>> {
    let mut tokens = Vec::new();
    // Open brackets awaiting their close, with the index of their token
    let mut stack: Vec<(Bracket, usize)> = Vec::new();
    let mut state = ScanState::Code;
    let mut literal_start = 0;
    let mut chars = source.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match state {
            ScanState::Code => {
                let kind = match c {
                    c if c.is_whitespace() => continue,
                    '"' | '`' | '\'' => {
                        literal_start = i;
                        state = match c {
                            '"' => ScanState::InString,
                            '`' => ScanState::InRawString,
                            _ => ScanState::InRune,
                        };
                        continue;
                    }
                    '/' if matches!(chars.peek(), Some((_, '/'))) => {
                        chars.next();
                        state = ScanState::InLineComment;
                        continue;
                    }
                    '/' if matches!(chars.peek(), Some((_, '*'))) => {
                        chars.next();
                        state = ScanState::InBlockComment;
                        continue;
                    }
                    c if is_ident_start(c) || c.is_ascii_digit() => {
                        let mut end = i + c.len_utf8();
                        while let Some(&(j, next)) = chars.peek() {
                            let continues = if is_ident_start(c) {
                                is_ident_continue(next)
                            } else {
                                is_ident_continue(next) || next == '.'
                            };
                            if !continues {
                                break;
                            }
                            end = j + next.len_utf8();
                            chars.next();
                        }
                        let kind = if is_ident_start(c) {
                            CodeToken::Ident
                        } else {
                            CodeToken::Number
                        };
                        tokens.push(ScannedToken::new(kind, i..end));
                        continue;
                    }
                    '.' => CodeToken::Dot,
                    ',' => {
                        let previous = tokens.last().map(|t: &ScannedToken| t.kind);
                        if matches!(previous, Some(CodeToken::Open(_) | CodeToken::Comma)) {
                            return None;
                        }
                        CodeToken::Comma
                    }
                    '(' | '[' | '{' => {
                        let bracket = bracket_of(c);
                        stack.push((bracket, tokens.len()));
                        CodeToken::Open(bracket)
                    }
                    ')' | ']' | '}' => {
                        let bracket = bracket_of(c);
                        match stack.pop() {
                            Some((open, index)) if open == bracket => {
                                tokens[index].close = Some(tokens.len());
                            }
                            _ => return None,
                        }
                        CodeToken::Close(bracket)
                    }
                    _ => CodeToken::Punct,
                };
                tokens.push(ScannedToken::new(kind, i..i + c.len_utf8()));
            }
            ScanState::InString => match c {
                '\\' => state = ScanState::InEscape,
                '"' => {
                    tokens.push(ScannedToken::new(CodeToken::Literal, literal_start..i + 1));
                    state = ScanState::Code;
                }
                '\n' => return None,
                _ => {}
            },
            ScanState::InEscape => {
                if c == '\n' {
                    return None;
                }
                state = ScanState::InString;
            }
            ScanState::InRawString => {
                if c == '`' {
                    tokens.push(ScannedToken::new(CodeToken::Literal, literal_start..i + 1));
                    state = ScanState::Code;
                }
            }
            ScanState::InRune => match c {
                '\\' => state = ScanState::InRuneEscape,
                '\'' => {
                    tokens.push(ScannedToken::new(CodeToken::Literal, literal_start..i + 1));
                    state = ScanState::Code;
                }
                '\n' => return None,
                _ => {}
            },
            ScanState::InRuneEscape => {
                if c == '\n' {
                    return None;
                }
                state = ScanState::InRune;
            }
            ScanState::InLineComment => {
                if c == '\n' {
                    state = ScanState::Code;
                }
            }
            ScanState::InBlockComment => {
                if c == '*' && matches!(chars.peek(), Some((_, '/'))) {
                    chars.next();
                    state = ScanState::Code;
                }
            }
        }
    }

    let finished = matches!(state, ScanState::Code | ScanState::InLineComment);
    if finished && stack.is_empty() {
        Some(tokens)
    } else {
        None
    }
}

fn bracket_of(c: char) -> Bracket {
    match c {
        '(' | ')' => Bracket::Paren,
        '[' | ']' => Bracket::Square,
        _ => Bracket::Curly,
    }
}

/// Find every `package.function(...)` invocation in `source`, in source order.
///
/// Nested invocations are reported too, each with its own argument text. A package
/// identifier that is itself the right-hand side of a selector (`x.package.function`)
/// does not match.
pub fn find_calls<'s>(source: &'s str, package: &str, function: &str) -> Vec<CallMatch<'s>> {
    let tokens = match scan(source) {
        Some(tokens) => tokens,
        None => {
            tracing::debug!(source, "fragment is not a well-formed expression");
            return Vec::new();
        }
    };

    let text = move |token: &ScannedToken| -> &'s str { &source[token.span.clone()] };
    let mut matches = Vec::new();

    for (i, window) in tokens.windows(4).enumerate() {
        let [pkg, dot, func, open] = window else {
            continue;
        };
        let is_call = pkg.kind == CodeToken::Ident
            && text(pkg) == package
            && dot.kind == CodeToken::Dot
            && func.kind == CodeToken::Ident
            && text(func) == function
            && open.kind == CodeToken::Open(Bracket::Paren);
        if !is_call {
            continue;
        }
        if i > 0 && tokens[i - 1].kind == CodeToken::Dot {
            continue;
        }

        if let Some(close) = open.close.map(|index| &tokens[index]) {
            matches.push(CallMatch {
                span: pkg.span.start..close.span.end,
                arguments: &source[open.span.end..close.span.start],
            });
        }
    }

    matches
}
