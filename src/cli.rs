//! Command-line interface definitions

use std::path::PathBuf;

use clap::Parser;

use crate::Backend;

/// Generate the PingMon extension icon set
#[derive(Debug, Parser)]
#[command(name = "pingmon-icons", version, about)]
pub struct Cli {
    /// Directory to write the icon files into
    #[arg(long, default_value = "icons")]
    pub out_dir: PathBuf,

    /// Rendering backend
    #[arg(long, value_enum, default_value_t = Backend::Skia)]
    pub backend: Backend,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}
