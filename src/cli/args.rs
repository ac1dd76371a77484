//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `render`: Export phrase documents as an Android XML, JSON or plaintext resource file
//! - `status`: Report translation completeness per phrase
//! - `init`: Initialize phrasekit configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Render(args)) => args.common.verbose,
            Some(Command::Status(args)) => args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Phrase documents or directories containing them
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format (overrides config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Value for plural quantities without content (overrides config file)
    #[arg(long)]
    pub plural_default: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Fail if any phrase is less complete than this ratio (overrides config file)
    #[arg(long)]
    pub min_completeness: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render phrase documents as a resource file
    Render(RenderArgs),
    /// Show translation completeness for each phrase
    Status(StatusArgs),
    /// Initialize a new .phrasekitrc.json configuration file
    Init,
}
