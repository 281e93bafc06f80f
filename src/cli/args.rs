//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// meetflow - Meeting transcripts to rendered flowcharts
#[derive(Parser, Debug)]
#[command(name = "meetflow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a flowchart from a meeting transcript
    Generate {
        /// Transcript file (defaults to the built-in sample meeting)
        #[arg(short, long)]
        transcript: Option<PathBuf>,

        /// Participant display names (defaults to the speakers found in the
        /// transcript)
        #[arg(short, long, num_args = 2, value_names = ["NAME", "NAME"])]
        participants: Option<Vec<String>>,

        /// Markdown file for the generated Mermaid source
        #[arg(short, long, default_value = "meeting_flowchart.md")]
        markdown: PathBuf,

        /// Output image file
        #[arg(short, long, default_value = "meeting_flowchart.svg")]
        output: PathBuf,
    },

    /// Print the built-in sample transcript
    Sample,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
