use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "iqcheck",
    version,
    about = "Grades how well student identifiers reflect the problem statement vocabulary"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one or more student programs against a problem statement
    Check(CheckCommand),
    /// Print the vocabulary derived from a problem statement
    Vocab(VocabCommand),
    /// Print the identifiers extracted from a student program
    Identifiers(IdentifiersCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    /// One matching fragment is enough (permissive union, default)
    Any,
    /// Every fragment must match (strict intersection)
    All,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Problem statement file (.json/.toml with a text field, or plain text)
    pub statement: PathBuf,
    /// Student program file, or a directory of .py programs
    pub program: PathBuf,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,
    /// Force the statement language instead of detecting it
    #[arg(long)]
    pub language: Option<String>,
    /// Warn (exit 1) when coverage falls below this ratio
    #[arg(long)]
    pub min_coverage: Option<f64>,
}

#[derive(Args)]
pub struct VocabCommand {
    pub statement: PathBuf,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
    #[arg(long)]
    pub language: Option<String>,
}

#[derive(Args)]
pub struct IdentifiersCommand {
    pub program: PathBuf,
}
