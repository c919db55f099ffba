//! Shared utilities for shadegen.
//!
//! This crate provides cross-cutting concerns used by all other shadegen crates:
//! the unified error type, filesystem helpers and Cargo-style status lines.

pub mod errors;
pub mod fs;
pub mod progress;
