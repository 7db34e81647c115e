//! Anonymous function naming for the jsnames compiler passes.
//!
//! Gives anonymous function expressions debuggable names derived from the
//! place they are bound (`a.prototype.b = function() {}`):
//!
//! - [`NameGenerator`] - infinite, deterministic sequence of short identifiers
//! - [`QualifiedPath`] / [`PathSegment`] - canonical text of a binding location
//! - [`PathBuilder`] - reconstructs the path of one function node, or reports
//!   why the node is not a naming context
//! - [`VariableMap`] - persistent name <-> path mapping and its line format
//! - [`NameAnonymousFunctionsMapped`] - short synthetic names plus a map
//! - [`NameAnonymousFunctions`] - names spelled after the path itself

pub mod anonymous_functions;
pub mod name_generator;
pub mod options;
pub mod path_builder;
pub mod qualified_path;
pub mod variable_map;

pub use anonymous_functions::{
    MappedPassResult, NameAnonymousFunctions, NameAnonymousFunctionsMapped, UnmappedPassStats,
    collect_function_nodes, collect_identifier_texts,
};
pub use name_generator::{DEFAULT_PREFIX, NameGenerator};
pub use options::{NamingMode, NamingOptions, OptionsError};
pub use path_builder::{PathBuilder, PathResolution, SkipReason};
pub use qualified_path::{ComputedForm, PathSegment, QualifiedPath};
pub use variable_map::{MapParseError, MapParseErrorKind, VariableMap};

#[cfg(test)]
#[path = "tests/name_generator_tests.rs"]
mod name_generator_tests;

#[cfg(test)]
#[path = "tests/qualified_path_tests.rs"]
mod qualified_path_tests;

#[cfg(test)]
#[path = "tests/path_builder_tests.rs"]
mod path_builder_tests;

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;
