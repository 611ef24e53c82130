//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vmccopilot")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
#[command(
    about = "Estimate cutting force and tool life, and write templated G-code and CAD files",
    long_about = None
)]
pub struct Cli {
    /// Machining request file (.toml or .json)
    pub request: Option<PathBuf>,

    /// Load configuration from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory receiving the generated artifacts
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Replace existing artifacts with the same name
    #[arg(long, conflicts_with = "no_overwrite")]
    pub overwrite: bool,

    /// Fail instead of replacing existing artifacts
    #[arg(long)]
    pub no_overwrite: bool,

    /// STL mesh forwarded to the CAM backend
    #[arg(long, value_name = "FILE.stl")]
    pub mesh: Option<PathBuf>,

    /// Print the configured default request as TOML and exit
    #[arg(long, conflicts_with = "request")]
    pub defaults: bool,
}

impl Cli {
    /// Overwrite policy requested on the command line, if any
    pub fn overwrite_override(&self) -> Option<bool> {
        match (self.overwrite, self.no_overwrite) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
