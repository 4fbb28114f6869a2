//! ctok-lex - Lexical Analyzer for a Subset of C
//!
//! This crate provides a line-oriented tokenizer for a subset of the C
//! programming language. It classifies raw text into a token stream that a
//! downstream parsing stage can consume.
//!
//! # Overview
//!
//! Scanning is a per-line pipeline of six ordered stages. Stages 1-5 are
//! pattern extraction passes over a mutable line buffer, each drained to
//! exhaustion before the next runs:
//!
//! 1. Comments (`//` to end of line, or `/* */` closed on the same line)
//! 2. Preprocessor directives (`#` + the directive keyword)
//! 3. String literals
//! 4. Character literals
//! 5. Numbers (hexadecimal, floating, integer)
//!
//! Stage 6 walks the leftover text character by character, classifying
//! delimiters, operators (with greedy 2-character lookahead), identifiers,
//! and reserved words, and reporting anything else as an unrecognized
//! symbol.
//!
//! Because the input is scanned one line at a time, block comments and
//! string literals never span lines; an unterminated construct falls
//! through to stage 6 and its characters are classified individually.
//!
//! # Example Usage
//!
//! ```
//! use ctok_lex::Scanner;
//! use ctok_util::Handler;
//!
//! let handler = Handler::new();
//! let mut scanner = Scanner::new(&handler);
//!
//! for token in scanner.scan_line("int x; // declare x") {
//!     println!("{}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and category definitions
//! - [`tables`] - Static classification tables (reserved words, operators,
//!   delimiters)
//! - [`extract`] - The five pattern extraction passes
//! - [`scanner`] - The per-line scanner and the residual stage
//! - [`sink`] - The token sink interface

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod extract;
pub mod scanner;
pub mod sink;
pub mod tables;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use scanner::Scanner;
pub use sink::TokenSink;
pub use token::{Token, TokenCategory};
