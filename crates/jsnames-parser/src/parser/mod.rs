//! Parser module: arena AST and recursive-descent `ParserState`.

pub mod base;
pub mod node;
mod node_access;
mod node_arena;
mod state;
mod state_class_members;
mod state_expressions;
mod state_statements;

pub use base::{NodeIndex, NodeList};
pub use node::*;
pub use state::{ParseDiagnostic, ParserState};

#[cfg(test)]
#[path = "tests/node_arena_tests.rs"]
mod node_arena_tests;
