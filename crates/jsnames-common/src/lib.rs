//! Common types and utilities for the jsnames compiler passes.
//!
//! This crate provides foundational types used across all jsnames crates:
//! - Parse diagnostics (`Diagnostic`, `DiagnosticCategory`, `diagnostic_codes`)
//! - Traversal and recursion limits
//! - Line/column positions for reporting (`LineMap`, `Position`)

// Diagnostics shared by the scanner and parser
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Centralized limits and thresholds
pub mod limits;

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

#[cfg(test)]
#[path = "tests/position_tests.rs"]
mod position_tests;
