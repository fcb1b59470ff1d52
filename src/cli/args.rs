//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Validate translation sources and report out-of-date artifacts
//! - `fix`: Validate translation sources and rewrite out-of-date artifacts
//! - `init`: Initialize a langsync configuration file
//! - `pseudo`: Print the pseudolocalized form of some text

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Fix(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Pseudo(_)) | None => false,
        }
    }
}

/// Common arguments shared by the pipeline commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root to search for the configuration file (defaults to the current directory)
    #[arg(long, env = "LANGSYNC_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only report what would be rewritten
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct PseudoCommand {
    /// Text to pseudolocalize; each argument is printed on its own line
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation sources and generated artifacts
    Check(CheckCommand),
    /// Regenerate out-of-date artifacts from the translation sources
    Fix(FixCommand),
    /// Initialize a new .langsyncrc.json configuration file
    Init,
    /// Print the pseudolocalized form of the given text
    Pseudo(PseudoCommand),
}
