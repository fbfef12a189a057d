use std::path::Path;

use anyhow::Result;
use ck_core::config::SampleConfig;

/// One-shot export without the TUI: load, sample, render, emit.
///
/// The terminal analog of the copy button — the text goes to `out` when
/// given, to stdout otherwise, so it can be piped straight into a
/// clipboard tool.
///
/// # Errors
/// Returns an error if the image cannot be loaded, the sampler rejects
/// its parameters, or the output file cannot be written.
pub fn run_export(image: &Path, config: &SampleConfig, out: Option<&Path>) -> Result<()> {
    let loaded = ck_source::load_image(image)?;
    let samples = ck_sampler::sample(&loaded.buffer, config.sample_count, config.threshold)?;
    let text = ck_export::render(config.format, &samples, loaded.buffer.height);

    log::info!(
        "{}: {} points as {}",
        loaded.name,
        samples.len(),
        config.format.label()
    );

    match out {
        Some(path) => ck_export::writer::write_text(path, &text)?,
        None => println!("{text}"),
    }
    Ok(())
}
