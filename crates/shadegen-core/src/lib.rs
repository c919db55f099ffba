//! Core data types for shadegen.
//!
//! This crate defines the values that flow through the relocation pipeline:
//! Java package names, artifact coordinates and descriptors, artifact
//! filters, relocation prefixes and rules, the `Shade.toml` manifest and
//! the global user configuration.
//!
//! This crate is intentionally free of archive I/O.

/// Relocation prefix used when neither the manifest nor the global config sets one.
pub const DEFAULT_RELOCATION_PREFIX: &str = "relocated.";

pub mod artifact;
pub mod config;
pub mod filter;
pub mod java;
pub mod manifest;
pub mod package;
pub mod relocation;
pub mod shade;
