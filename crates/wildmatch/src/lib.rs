//! Glob-style wildcard pattern matching with configurable wildcard symbols.

pub mod pattern;

pub use pattern::{Error, Pattern, Wildcards};
