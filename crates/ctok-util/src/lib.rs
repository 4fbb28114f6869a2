//! ctok-util - Foundation types for the ctok tokenizer.
//!
//! This crate provides the diagnostic infrastructure shared by the scanner
//! and the driver: severity levels, diagnostic values carrying an optional
//! source line, and the [`Handler`] that collects them.
//!
//! It also re-exports the hash collections used for the scanner's
//! classification tables.

pub mod diagnostic;

pub use diagnostic::{Diagnostic, Handler, Level};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
