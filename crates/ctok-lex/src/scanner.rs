//! Scanner implementation: the per-line driver and the residual scanner.

use ctok_util::{Diagnostic, Handler};

use crate::extract;
use crate::sink::TokenSink;
use crate::tables;
use crate::token::{Token, TokenCategory};

/// Line-oriented scanner for the C subset.
///
/// Each call to [`scan_line`](Scanner::scan_line) classifies one physical
/// line of input: the five extraction passes drain comments, preprocessor
/// directives, string and character literals, and numbers from a line
/// buffer, then the residual scanner walks whatever text is left character
/// by character. The only state carried between lines is the 1-based line
/// counter used in diagnostics, so scanning the same text twice from two
/// scanners yields identical token sequences.
///
/// Unrecognized symbols are reported to the [`Handler`] and never abort the
/// scan; the scanner resumes at the next character.
///
/// # Example
///
/// ```
/// use ctok_lex::{Scanner, TokenCategory};
/// use ctok_util::Handler;
///
/// let handler = Handler::new();
/// let mut scanner = Scanner::new(&handler);
/// let tokens = scanner.scan_line("return 0;");
///
/// assert_eq!(tokens[0].category, TokenCategory::Number);
/// assert_eq!(tokens[1].lexeme, "return");
/// assert_eq!(tokens[2].lexeme, ";");
/// ```
pub struct Scanner<'a> {
    /// Handler receiving unrecognized-symbol diagnostics.
    handler: &'a Handler,

    /// Number of the line currently being scanned (1-based).
    line: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner reporting diagnostics to `handler`.
    pub fn new(handler: &'a Handler) -> Self {
        Self { handler, line: 0 }
    }

    /// Returns the 1-based number of the most recently scanned line, or 0
    /// before the first call.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Scans one line and returns its tokens in emission order.
    pub fn scan_line(&mut self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.scan_line_into(text, &mut tokens);
        tokens
    }

    /// Scans one line, pushing tokens into `sink` in emission order.
    ///
    /// Emission order is stage order: all comment tokens first, then
    /// preprocessor directives, strings, chars, numbers, and finally the
    /// residual tokens in left-to-right position order.
    pub fn scan_line_into(&mut self, text: &str, sink: &mut dyn TokenSink) {
        self.line += 1;
        let mut buffer = text.to_string();
        extract::run_extraction_passes(&mut buffer, sink);
        self.scan_residual(&buffer, sink);
    }

    /// Stage 6: walks the post-extraction text character by character.
    fn scan_residual(&mut self, text: &str, sink: &mut dyn TokenSink) {
        let chars: Vec<char> = text.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            // Delimiters win before operators and identifiers.
            if tables::is_delimiter(c) {
                sink.accept(Token::new(c.to_string(), TokenCategory::Delimiter));
                i += 1;
                continue;
            }

            // Greedy two-character lookahead: `==` wins over `=`.
            let mut lexeme = c.to_string();
            if i + 1 < chars.len() {
                let two: String = [c, chars[i + 1]].into_iter().collect();
                if tables::is_operator(&two) {
                    lexeme = two;
                }
            }
            if tables::is_operator(&lexeme) {
                i += lexeme.chars().count();
                sink.accept(Token::new(lexeme, TokenCategory::Operator));
                continue;
            }

            if tables::is_ident_start(c) {
                let start = i;
                while i < chars.len() && tables::is_ident_continue(chars[i]) {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                let category = if tables::is_reserved_word(&word) {
                    TokenCategory::ReservedWord
                } else {
                    TokenCategory::Identifier
                };
                sink.accept(Token::new(word, category));
                continue;
            }

            // Recoverable: report and resume at the next character.
            self.handler.report(
                Diagnostic::error(format!("unrecognized symbol '{}'", c)).with_line(self.line),
            );
            i += 1;
        }
    }
}
