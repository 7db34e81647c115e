//! JavaScript parser and AST types for the jsnames compiler passes.
//!
//! The tree lives in a [`parser::NodeArena`]: nodes are addressed by
//! [`parser::NodeIndex`], every node records its parent, and passes mutate
//! nodes in place through the arena.

pub mod parser;

pub use parser::{Node, NodeArena, NodeData, NodeIndex, NodeList, ParserState};
