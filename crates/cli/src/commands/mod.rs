//! CLI command implementations.

pub mod rush;
