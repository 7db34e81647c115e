//! Library side of the `jsnames` binary: argument parsing, configuration,
//! the driver that runs a naming pass over one script, and tracing setup.

pub mod args;
pub mod config;
pub mod driver;
pub mod tracing_config;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
