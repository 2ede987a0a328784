use crate::file::generator::CollisionPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod error;
pub mod output;
pub mod handler;

/// Generates timestamped Hello World Markdown documents
#[derive(Parser, Debug)]
#[command(name = "hellomd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Override config directory path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (TRACE level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Write a new hello_world_YYYYMMDD_HHMMSS.md document
    Generate {
        /// Directory to write into (default: current directory)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// What to do if a document for this second already exists
        #[arg(long, value_enum)]
        on_collision: Option<CollisionPolicy>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a document's filename and content carry the same timestamp
    Verify {
        /// Path to the generated document
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Generate {
            output_dir: None,
            on_collision: None,
            json: false,
        }
    }
}

/// Configuration actions
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the settings.toml location
    Path,

    /// Write a default settings.toml
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}
