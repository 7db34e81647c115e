//! JavaScript printer for the jsnames compiler passes.
//!
//! [`Printer`] walks a [`NodeArena`](jsnames_parser::NodeArena) and writes
//! JavaScript text. Two layouts are supported: a readable one for program
//! output and a compact one without optional whitespace, which the naming
//! passes use to render computed keys inside qualified paths.

pub mod emitter;
pub mod source_writer;

pub use emitter::{
    Printer, PrinterOptions, print_expression_compact, print_node, print_source_file, quote_string,
};
pub use source_writer::SourceWriter;
