//! JavaScript scanner/tokenizer for the jsnames compiler passes.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine
//! - `char_codes` - Character classification and reserved-word utilities

pub mod char_codes;
pub mod scanner;
pub mod syntax_kind;

pub use char_codes::{is_identifier_part, is_identifier_start, is_identifier_text, is_reserved_word};
pub use scanner::{ScannerDiagnostic, ScannerState};
pub use syntax_kind::{SyntaxKind, text_to_keyword};

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod scanner_tests;
