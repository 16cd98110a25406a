use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Treeline - renders a directory as a plain-text tree
#[derive(Parser, Debug)]
#[command(name = "treeline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to render
    #[arg(value_name = "PATH", required_unless_present = "completions")]
    pub path: Option<PathBuf>,

    /// Include files in the output in addition to directories
    #[arg(short = 'f', long = "files")]
    pub files: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
