//! Pattern extraction passes (scanner stages 1-5).
//!
//! Each pass repeatedly searches the remaining line buffer for the leftmost
//! occurrence of its pattern, emits one token per match, and excises the
//! matched span before searching again. The five passes run in a fixed
//! order - comments, preprocessor directives, string literals, character
//! literals, numbers - and each pass drains every match it can find before
//! the next pass sees the buffer. Text around a match is rejoined and stays
//! visible to later passes and to the residual scanner.
//!
//! The order is load-bearing: a string literal sitting after `//` on the
//! same line is consumed by the comment pass and never reaches the string
//! pass. Tokens therefore come out in stage order, not source-column order.

use std::sync::LazyLock;

use regex::Regex;

use crate::sink::TokenSink;
use crate::token::{Token, TokenCategory};

/// Line comments, or block comments that close on the same line.
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*|/\*.*?\*/").unwrap());

/// A `#` followed by the directive keyword; arguments are not captured.
static PREPROCESSOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").unwrap());

/// A double-quoted run of non-quote characters. No escape awareness: an
/// escaped quote inside the literal terminates the match early.
static STRING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]*""#).unwrap());

/// Same shape as the string pattern, with single quotes.
static CHAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'[^']*'").unwrap());

/// Hexadecimal, floating, or integer literals at word boundaries.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(0[xX][0-9A-Fa-f]+|\d+\.\d+|\d+)\b").unwrap());

/// Runs the five extraction passes over `buffer` in their fixed order,
/// emitting one token per match and leaving only unmatched text behind.
pub fn run_extraction_passes(buffer: &mut String, sink: &mut dyn TokenSink) {
    drain(&COMMENT, TokenCategory::Comment, buffer, sink);
    drain(&PREPROCESSOR, TokenCategory::PreprocessorDirective, buffer, sink);
    drain(&STRING, TokenCategory::StringLiteral, buffer, sink);
    drain(&CHAR, TokenCategory::CharLiteral, buffer, sink);
    drain(&NUMBER, TokenCategory::Number, buffer, sink);
}

/// Drains every occurrence of `pattern` from `buffer`, leftmost first.
fn drain(pattern: &Regex, category: TokenCategory, buffer: &mut String, sink: &mut dyn TokenSink) {
    // Every pattern matches at least one character, so each excision
    // shrinks the buffer and the loop terminates.
    while let Some((range, lexeme)) = pattern
        .find(buffer)
        .map(|m| (m.range(), m.as_str().to_owned()))
    {
        sink.accept(Token::new(lexeme, category));
        buffer.replace_range(range, "");
    }
}
