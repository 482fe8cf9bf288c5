use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CleanTMP: remove junk files from a folder
#[derive(Parser, Debug)]
#[command(
    name = "cleantmp",
    version,
    about = "Remove temporary and junk files from a folder",
    long_about = "CleanTMP deletes OS metadata (.DS_Store, Thumbs.db, ._*), editor backups (*~)\n\
                   and Vim swap files from user folders. Trash, Spotlight and restore-point\n\
                   folders are never entered.",
    after_help = "EXAMPLES:\n  \
        cleantmp ~/Music                       Clean the top level of a folder\n  \
        cleantmp -r ~/Pictures                 Clean a folder and everything below it\n  \
        cleantmp -r --dry-run /Volumes/USB     Show what would be removed\n  \
        cleantmp -r --format json ~/Shared     Machine-readable report"
)]
pub struct Cli {
    /// Folder to clean
    #[arg(value_name = "PATH", required_unless_present = "completions")]
    pub path: Option<PathBuf>,

    /// Descend into subfolders
    #[arg(long, short, env = "CLEANTMP_RECURSIVE")]
    pub recursive: bool,

    /// Report what would be removed without deleting anything
    #[arg(long, env = "CLEANTMP_DRY_RUN")]
    pub dry_run: bool,

    /// Match file names case-insensitively
    #[arg(long, env = "CLEANTMP_IGNORE_CASE")]
    pub ignore_case: bool,

    /// List every removed file in the report
    #[arg(long)]
    pub detailed: bool,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Quiet mode, minimal output
    #[arg(long, short)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<CompletionShell>,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Quiet,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
