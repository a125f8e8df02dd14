use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    version,
    about,
    bin_name = "bmpv",
    disable_version_flag = true,
    after_help = "If no part is specified, the file's current version is displayed."
)]
pub struct Arguments {
    /// Path to the file containing the version string
    pub file: PathBuf,
    /// Part to increment: major, minor, or patch
    pub part: Option<String>,
    /// Show version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
    /// Print debug logging to stderr
    #[arg(long)]
    pub verbose: bool,
}
