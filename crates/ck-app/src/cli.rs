use std::path::PathBuf;

use clap::Parser;

/// curvekey — sample a drawn curve and export animation keyframes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Curve bitmap to load on startup (PNG, JPEG, BMP, GIF).
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// TOML configuration file. Default: config/curvekey.toml.
    #[arg(short, long, default_value = "config/curvekey.toml")]
    pub config: PathBuf,

    /// Number of sample columns [2, 100].
    #[arg(long)]
    pub samples: Option<u32>,

    /// Brightness threshold [0, 255].
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Export format: "json" (scale frames) or "css" (keyframe rules).
    #[arg(long)]
    pub format: Option<String>,

    /// Write exported text to this file instead of opening a save dialog.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Headless mode: sample once, emit the export text, and exit.
    /// Requires --image. Writes to --out if given, stdout otherwise.
    #[arg(long, default_value_t = false)]
    pub export: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate the flag combination before anything heavy runs.
    ///
    /// # Errors
    /// Returns an error if `--export` is given without `--image`.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.export && self.image.is_none() {
            anyhow::bail!("--export requires --image (nothing to sample headlessly)");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_without_image_is_rejected() {
        let cli = Cli::parse_from(["curvekey", "--export"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn export_with_image_is_accepted() {
        let cli = Cli::parse_from(["curvekey", "--export", "--image", "curve.png"]);
        assert!(cli.validate().is_ok());
    }
}
