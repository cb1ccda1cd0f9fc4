//! Icon asset generator for the PingMon browser extension
//!
//! Renders the extension's radar-ping icon at the sizes the manifest asks for
//! (16, 48, 128) and writes them to `icons/icon{size}.png`. Two backends
//! produce the same file set:
//! - `skia`: draws with tiny-skia and uses its PNG writer
//! - `builtin`: hand-rolled pixel-buffer drawing plus a minimal PNG encoder

pub mod canvas;
pub mod cli;
pub mod logging;
pub mod png;
pub mod render;
pub mod skia;

use std::fs;
use std::path::Path;

use anyhow::Context;

/// Icon sizes required by the extension manifest
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Rendering backend used to produce the icon files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Backend {
    /// Rasterize with tiny-skia
    #[default]
    Skia,
    /// Hand-rolled pixel drawing and PNG encoding
    Builtin,
}

/// File name for one icon size, as referenced by the manifest
pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

/// Render every icon size into `out_dir` with the chosen backend
///
/// Creates `out_dir` if needed and prints one status line per file, matching
/// what the extension's build notes expect.
pub fn generate_icons(out_dir: &Path, backend: Backend) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for &size in &ICON_SIZES {
        let path = out_dir.join(icon_filename(size));
        tracing::debug!(size, ?backend, "rendering icon");

        let bytes = match backend {
            Backend::Skia => skia::render_png(size)?,
            Backend::Builtin => {
                let canvas = render::render_icon(size);
                png::encode_rgba(canvas.width(), canvas.height(), canvas.data())?
            }
        };

        fs::write(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        println!("Generated {}", path.display());
    }

    println!("All icons generated successfully!");
    Ok(())
}
