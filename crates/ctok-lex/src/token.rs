//! Token type definitions.

use std::fmt;

/// The closed set of token categories the scanner can emit.
///
/// Category names rendered through `Display` are the literal strings the
/// token sink expects: `comment`, `preprocessor directive`, `string
/// literal`, `character literal`, `number`, `reserved word`, `identifier`,
/// `operator`, `delimiter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// A line comment or a block comment closed on the same line
    Comment,
    /// A `#` directive keyword such as `#include`
    PreprocessorDirective,
    /// A double-quoted string literal
    StringLiteral,
    /// A single-quoted character literal
    CharLiteral,
    /// An integer, floating, or hexadecimal literal
    Number,
    /// A word reserved by the grammar, e.g. `if`, `return`
    ReservedWord,
    /// A name that is not a reserved word
    Identifier,
    /// A 1- or 2-character operator spelling
    Operator,
    /// A single punctuation character with structural meaning
    Delimiter,
}

impl TokenCategory {
    /// Returns the category name used in rendered token output.
    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::Comment => "comment",
            TokenCategory::PreprocessorDirective => "preprocessor directive",
            TokenCategory::StringLiteral => "string literal",
            TokenCategory::CharLiteral => "character literal",
            TokenCategory::Number => "number",
            TokenCategory::ReservedWord => "reserved word",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Operator => "operator",
            TokenCategory::Delimiter => "delimiter",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// Tokens are plain values: a lexeme paired with its category, with no
/// identity beyond the two. `Display` renders the sink format
/// `<lexeme, category>`.
///
/// # Example
///
/// ```
/// use ctok_lex::{Token, TokenCategory};
///
/// let token = Token::new("while", TokenCategory::ReservedWord);
/// assert_eq!(token.to_string(), "<while, reserved word>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The literal substring of source text that forms this token
    pub lexeme: String,
    /// The classification assigned by the scanner
    pub category: TokenCategory,
}

impl Token {
    /// Creates a token from a lexeme and its category.
    pub fn new(lexeme: impl Into<String>, category: TokenCategory) -> Self {
        Self {
            lexeme: lexeme.into(),
            category,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.lexeme, self.category)
    }
}
