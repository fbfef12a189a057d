use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// UI bounds for the sample count slider.
pub const SAMPLE_COUNT_MIN: u32 = 2;
/// Upper bound: more points than this stops being "a small sequence".
pub const SAMPLE_COUNT_MAX: u32 = 100;

/// Output format for the exported keyframe text.
///
/// # Example
/// ```
/// use ck_core::config::ExportFormat;
/// let f = ExportFormat::default();
/// assert!(matches!(f, ExportFormat::ScaleFrames));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum ExportFormat {
    /// JSON array of `{"scale": "1 <f>"}` objects, 2-space pretty print.
    #[default]
    ScaleFrames,
    /// Percentage-keyed `translate` rules, one per line.
    CssKeyframes,
}

impl ExportFormat {
    /// Human-readable label for the sidebar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ScaleFrames => "scale frames (JSON)",
            Self::CssKeyframes => "CSS keyframes",
        }
    }

    /// Cycle to the other format (the dropdown has exactly two entries).
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::ScaleFrames => Self::CssKeyframes,
            Self::CssKeyframes => Self::ScaleFrames,
        }
    }
}

/// Sampling and export parameters, loadable from TOML.
///
/// Each field has a sane default; CLI flags override file values.
///
/// # Example
/// ```
/// use ck_core::config::SampleConfig;
/// let config = SampleConfig::default();
/// assert_eq!(config.sample_count, 20);
/// assert_eq!(config.threshold, 127);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SampleConfig {
    /// Number of sample columns, in `[2, 100]`.
    pub sample_count: u32,
    /// Brightness threshold in `[0, 255]`. A pixel is part of the curve when
    /// all three of r, g, b fall below it and the pixel is fully opaque.
    pub threshold: u8,
    /// Active export format.
    pub format: ExportFormat,
    /// Draw vertical guide lines at the sampled columns in the preview.
    pub show_guides: bool,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            sample_count: 20,
            threshold: 127,
            format: ExportFormat::ScaleFrames,
            show_guides: true,
        }
    }
}

impl SampleConfig {
    /// Check the invariants the sampler's contract requires.
    ///
    /// # Errors
    /// Returns an error if `sample_count` is outside `[2, 100]`.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count < SAMPLE_COUNT_MIN || self.sample_count > SAMPLE_COUNT_MAX {
            anyhow::bail!(
                "sample_count out of range: {} (expected {SAMPLE_COUNT_MIN}..={SAMPLE_COUNT_MAX})",
                self.sample_count
            );
        }
        Ok(())
    }
}

/// On-disk TOML shape. Every field optional so partial files work.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    sampler: SamplerSection,
    #[serde(default)]
    export: ExportSection,
}

#[derive(Debug, Default, Deserialize)]
struct SamplerSection {
    sample_count: Option<u32>,
    threshold: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
struct ExportSection {
    format: Option<ExportFormat>,
    show_guides: Option<bool>,
}

/// Load a config from a TOML file, filling gaps with defaults.
///
/// # Errors
/// Returns an error if the file cannot be read, does not parse, or holds an
/// out-of-range `sample_count`.
pub fn load_config(path: &Path) -> Result<SampleConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    let mut config = SampleConfig::default();

    if let Some(v) = file.sampler.sample_count {
        config.sample_count = v;
    }
    if let Some(v) = file.sampler.threshold {
        config.threshold = v;
    }
    if let Some(v) = file.export.format {
        config.format = v;
    }
    if let Some(v) = file.export.show_guides {
        config.show_guides = v;
    }

    config.validate()?;
    log::debug!(
        "config loaded from {}: {} samples, threshold {}",
        path.display(),
        config.sample_count,
        config.threshold
    );
    Ok(config)
}
