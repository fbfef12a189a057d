use anyhow::Result;
use ck_core::config::{ExportFormat, SampleConfig};
use clap::Parser;

pub mod app;
pub mod cli;
pub mod headless;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Initialize logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    cli.validate()?;

    // 3. Load config and apply CLI overrides
    let config = resolve_config(&cli)?;

    // 4. Headless one-shot export
    if cli.export {
        // validate() guarantees the image path is present.
        if let Some(ref image) = cli.image {
            return headless::run_export(image, &config, cli.out.as_deref());
        }
    }

    // 5. Initialize the terminal
    let terminal = ratatui::init();

    // 6. Build the app
    let mut app_instance = app::App::new(config, cli.out.clone());
    if let Some(ref path) = cli.image {
        app_instance.load_image_from(path);
    }

    // 7. Main loop
    let result = app_instance.run(terminal);

    // 8. Restore the terminal (ALWAYS, even on error)
    ratatui::restore();

    result
}

/// Resolve config: file values first, CLI flags on top.
fn resolve_config(cli: &cli::Cli) -> Result<SampleConfig> {
    let mut config = if cli.config.exists() {
        ck_core::config::load_config(&cli.config)?
    } else {
        log::warn!(
            "config not found: {}. Using defaults.",
            cli.config.display()
        );
        SampleConfig::default()
    };

    if let Some(n) = cli.samples {
        config.sample_count = n;
    }
    if let Some(t) = cli.threshold {
        config.threshold = t;
    }
    if let Some(ref format) = cli.format {
        config.format = match format.as_str() {
            "json" => ExportFormat::ScaleFrames,
            "css" => ExportFormat::CssKeyframes,
            _ => {
                log::warn!("unknown format '{format}', keeping {}", config.format.label());
                config.format
            }
        };
    }

    config.validate()?;
    Ok(config)
}
