//! CLI argument definitions for shadegen.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "shadegen",
    version,
    about = "Compute package relocation rules for shading dependencies",
    long_about = "shadegen scans the jars a project bundles, finds the minimal set of root \
                  packages they define and generates relocation rules for the \
                  maven-shade-plugin so the bundled classes cannot collide with the \
                  consumer's classpath."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the shade plugin configuration
    Generate {
        /// Path to Shade.toml (default: search from the current directory upwards)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        /// Relocation prefix, e.g. `relocated.`
        #[arg(short, long)]
        prefix: Option<String>,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,
        /// How discovered packages are collapsed into roots
        #[arg(long, value_enum)]
        collapse: Option<Collapse>,
        /// Write the configuration to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the packages found in each bundled artifact
    Packages {
        /// Path to Shade.toml (default: search from the current directory upwards)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        /// Show only the root packages of each artifact
        #[arg(long)]
        roots: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Format {
    Xml,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Collapse {
    Union,
    PerArtifact,
}

pub fn parse() -> Cli {
    Cli::parse()
}
