//! pingmon-icons - generates the PingMon browser extension icon set
//!
//! Produces `icons/icon16.png`, `icons/icon48.png` and `icons/icon128.png`.
//! Generation failures are reported with a suggested fallback; the process
//! always exits cleanly since missing icons are recoverable by hand.

use clap::Parser;
use pingmon_icons::{cli::Cli, generate_icons, logging, Backend};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
    }

    run(&cli);
}

fn run(cli: &Cli) {
    match generate_icons(&cli.out_dir, cli.backend) {
        Ok(()) => {}
        Err(e) if cli.backend == Backend::Skia => {
            eprintln!("Error generating icons with the skia backend: {e:#}");
            eprintln!("Falling back to the built-in PNG encoder.");
            if let Err(e) = generate_icons(&cli.out_dir, Backend::Builtin) {
                eprintln!("Error generating icons: {e:#}");
                eprintln!("You can also create the icon files manually.");
            }
        }
        Err(e) => {
            eprintln!("Error generating icons: {e:#}");
            eprintln!("Try `--backend skia`, or create the icon files manually.");
        }
    }
}
