use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use ck_core::config::{SampleConfig, SAMPLE_COUNT_MAX, SAMPLE_COUNT_MIN};
use ck_core::curve::SampleSet;
use ck_render::ui::{self, DrawContext, RenderState};
use ck_source::LoadedImage;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;

/// Threshold slider step per keypress.
const THRESHOLD_STEP: u8 = 5;

/// Application state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppState {
    /// Normal interactive state.
    Running,
    /// Help overlay visible (`?` key).
    Help,
    /// Shutting down; the loop exits on the next turn.
    Quitting,
}

/// Main application struct holding all state.
pub struct App {
    /// Current application state.
    pub state: AppState,
    /// Live sampling/export parameters.
    pub config: SampleConfig,
    /// Loaded image, if any. Frozen between loads; the sampler reruns
    /// against it whenever a parameter moves.
    pub image: Option<LoadedImage>,
    /// Current sample set. Recomputed from scratch on every change —
    /// no incremental state to invalidate.
    pub samples: SampleSet,
    /// Rendered export text shown in the preview pane.
    pub export_text: String,
    /// One-line status message for the sidebar.
    pub status: String,
    /// Fixed output path from --out; save goes straight there when set.
    out_path: Option<PathBuf>,
    /// Deferred dialog flags; dialogs run outside the draw call.
    open_requested: bool,
    save_requested: bool,
}

impl App {
    /// Build the app with no image loaded.
    #[must_use]
    pub fn new(config: SampleConfig, out_path: Option<PathBuf>) -> Self {
        Self {
            state: AppState::Running,
            config,
            image: None,
            samples: SampleSet::new(),
            export_text: String::new(),
            status: String::new(),
            out_path,
            open_requested: false,
            save_requested: false,
        }
    }

    /// Load an image from disk and resample. Failures land in the status
    /// line instead of tearing the TUI down.
    pub fn load_image_from(&mut self, path: &Path) {
        match ck_source::load_image(path) {
            Ok(loaded) => {
                self.status = format!("loaded {}", loaded.name);
                self.image = Some(loaded);
                self.resample();
            }
            Err(e) => {
                log::warn!("image load failed: {e:#}");
                self.status = format!("load failed: {e}");
            }
        }
    }

    /// Recompute samples and export text from the current image and
    /// parameters. Pure recomputation; nothing is cached between calls.
    pub fn resample(&mut self) {
        let Some(ref loaded) = self.image else {
            // No image yet: the whole-page render is the empty string,
            // not an empty array.
            self.samples.clear();
            self.export_text = String::new();
            return;
        };
        match ck_sampler::sample(&loaded.buffer, self.config.sample_count, self.config.threshold) {
            Ok(samples) => {
                self.samples = samples;
                self.export_text =
                    ck_export::render(self.config.format, &self.samples, loaded.buffer.height);
            }
            Err(e) => {
                // Parameters are UI-clamped, so this is unexpected.
                log::error!("sampling failed: {e}");
                self.status = format!("sampling failed: {e}");
                self.samples.clear();
                self.export_text = String::new();
            }
        }
    }

    /// Main loop: draw, run any requested dialog, poll for input.
    ///
    /// # Errors
    /// Returns an error if the terminal backend fails.
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            if self.state == AppState::Quitting {
                break;
            }

            let render_state = match self.state {
                AppState::Help => RenderState::Help,
                _ => RenderState::Running,
            };
            let ctx = DrawContext {
                image: self.image.as_ref().map(|l| &l.buffer),
                image_name: self.image.as_ref().map(|l| l.name.as_str()),
                samples: &self.samples,
                config: &self.config,
                export_text: &self.export_text,
                status: &self.status,
            };
            terminal.draw(|frame| ui::draw(frame, &ctx, &render_state))?;

            // File dialogs, deferred out of the draw path.
            if self.open_requested {
                self.open_requested = false;
                self.open_image_dialog(&mut terminal);
            }
            if self.save_requested {
                self.save_requested = false;
                self.save_export_dialog(&mut terminal);
            }

            if event::poll(Duration::from_millis(100))? {
                self.handle_event(&event::read()?);
            }
        }
        Ok(())
    }

    /// Route terminal events. Only key presses matter; resize is handled
    /// implicitly by redrawing every turn.
    pub fn handle_event(&mut self, event: &Event) {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = *event
        {
            if self.state == AppState::Help {
                self.handle_help_key(code);
            } else {
                self.handle_running_key(code);
            }
        }
    }

    fn handle_help_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.state = AppState::Quitting,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => {
                self.state = AppState::Running;
            }
            _ => {}
        }
    }

    fn handle_running_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.state = AppState::Quitting,
            KeyCode::Char('?') => self.state = AppState::Help,
            KeyCode::Char('o') => self.open_requested = true,
            KeyCode::Char('s') => self.save_requested = true,
            KeyCode::Char('+' | '=') => {
                let n = (self.config.sample_count + 1).min(SAMPLE_COUNT_MAX);
                self.set_sample_count(n);
            }
            KeyCode::Char('-') => {
                let n = self.config.sample_count.saturating_sub(1).max(SAMPLE_COUNT_MIN);
                self.set_sample_count(n);
            }
            KeyCode::Char(']') => {
                self.config.threshold = self.config.threshold.saturating_add(THRESHOLD_STEP);
                self.status = format!("threshold {}", self.config.threshold);
                self.resample();
            }
            KeyCode::Char('[') => {
                self.config.threshold = self.config.threshold.saturating_sub(THRESHOLD_STEP);
                self.status = format!("threshold {}", self.config.threshold);
                self.resample();
            }
            KeyCode::Char('f') => {
                self.config.format = self.config.format.toggled();
                self.status = format!("format: {}", self.config.format.label());
                self.resample();
            }
            KeyCode::Char('g') => {
                self.config.show_guides = !self.config.show_guides;
            }
            _ => {}
        }
    }

    fn set_sample_count(&mut self, n: u32) {
        if n != self.config.sample_count {
            self.config.sample_count = n;
            self.status = format!("{n} samples");
            self.resample();
        }
    }

    /// Pick an image file via the native dialog and load it.
    fn open_image_dialog(&mut self, terminal: &mut DefaultTerminal) {
        let picked = Self::suspended(terminal, || {
            rfd::FileDialog::new()
                .set_title("Open curve bitmap \u{2014} curvekey")
                .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif"])
                .pick_file()
        });
        if let Some(path) = picked {
            self.load_image_from(&path);
        }
    }

    /// Save the current export text: straight to --out when given,
    /// otherwise through the native save dialog.
    fn save_export_dialog(&mut self, terminal: &mut DefaultTerminal) {
        if self.export_text.is_empty() {
            self.status = "nothing to save yet".to_string();
            return;
        }
        let target = if let Some(ref path) = self.out_path {
            Some(path.clone())
        } else {
            let default_name = match self.config.format {
                ck_core::config::ExportFormat::ScaleFrames => "frames.json",
                ck_core::config::ExportFormat::CssKeyframes => "keyframes.css",
            };
            Self::suspended(terminal, || {
                rfd::FileDialog::new()
                    .set_title("Save export \u{2014} curvekey")
                    .set_file_name(default_name)
                    .save_file()
            })
        };
        if let Some(path) = target {
            match ck_export::writer::write_text(&path, &self.export_text) {
                Ok(()) => self.status = format!("saved {}", path.display()),
                Err(e) => {
                    log::warn!("save failed: {e:#}");
                    self.status = format!("save failed: {e}");
                }
            }
        }
    }

    /// Run `f` with the terminal dropped back to the normal screen, then
    /// re-enter the alternate screen and force a full redraw.
    fn suspended<T>(terminal: &mut DefaultTerminal, f: impl FnOnce() -> T) -> T {
        crossterm::terminal::disable_raw_mode().ok();
        crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen).ok();

        let result = f();

        crossterm::terminal::enable_raw_mode().ok();
        crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen).ok();
        terminal.clear().ok();

        result
    }
}

#[cfg(test)]
mod tests {
    use ck_core::frame::PixelBuffer;

    use super::*;

    fn app_with_image(width: u32, height: u32) -> App {
        let mut app = App::new(SampleConfig::default(), None);
        let mut buffer = PixelBuffer::new(width, height);
        for byte in &mut buffer.data {
            *byte = 255;
        }
        app.image = Some(LoadedImage {
            buffer,
            name: "test.png".to_string(),
        });
        app.resample();
        app
    }

    #[test]
    fn no_image_renders_empty_string() {
        let mut app = App::new(SampleConfig::default(), None);
        app.resample();
        assert_eq!(app.export_text, "");
        assert!(app.samples.is_empty());
    }

    #[test]
    fn loaded_image_produces_full_sample_set() {
        let app = app_with_image(40, 20);
        assert_eq!(app.samples.len(), 20);
        assert!(app.export_text.starts_with('['));
    }

    #[test]
    fn sample_count_clamps_at_bounds() {
        let mut app = app_with_image(40, 20);
        app.config.sample_count = SAMPLE_COUNT_MIN;
        app.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char('-'))));
        assert_eq!(app.config.sample_count, SAMPLE_COUNT_MIN);

        app.config.sample_count = SAMPLE_COUNT_MAX;
        app.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char('+'))));
        assert_eq!(app.config.sample_count, SAMPLE_COUNT_MAX);
    }

    #[test]
    fn parameter_change_recomputes_samples() {
        let mut app = app_with_image(40, 20);
        app.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char('+'))));
        assert_eq!(app.samples.len(), 21);
    }

    #[test]
    fn format_toggle_rerenders_export() {
        let mut app = app_with_image(40, 20);
        app.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char('f'))));
        assert!(app.export_text.contains("% { translate: 0 "));
        app.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char('f'))));
        assert!(app.export_text.starts_with('['));
    }

    #[test]
    fn help_overlay_toggles() {
        let mut app = app_with_image(40, 20);
        app.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char('?'))));
        assert_eq!(app.state, AppState::Help);
        app.handle_event(&Event::Key(KeyEvent::from(KeyCode::Esc)));
        assert_eq!(app.state, AppState::Running);
    }
}
