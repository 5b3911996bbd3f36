//! CLI mode for transcryb.
//!
//! One positional argument, one transcript on stdout.

pub mod args;
pub mod transcribe;

pub use args::Cli;
