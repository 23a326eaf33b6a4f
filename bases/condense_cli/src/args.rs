// bases/condense_cli/src/args.rs
use clap::{Parser, Subcommand};
use library_config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

/// Keep a condensed copy of a music library in line with its playlists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Copy or transcode missing tracks, drop orphans and rewrite playlists
    Run,
    /// Dump library and playlist tags as JSON
    Export,
}
