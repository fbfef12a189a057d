use ck_core::config::SampleConfig;
use ck_core::curve::CurvePoint;
use ck_core::frame::PixelBuffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::canvas;

/// Width of the parameter sidebar in characters.
pub const SIDEBAR_WIDTH: u16 = 30;
/// Height of the export preview pane.
pub const EXPORT_PANE_HEIGHT: u16 = 8;

/// Application state mirrored for rendering decisions.
///
/// # Example
/// ```
/// use ck_render::ui::RenderState;
/// let state = RenderState::Running;
/// assert!(matches!(state, RenderState::Running));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// Normal running state.
    Running,
    /// Help overlay visible.
    Help,
}

/// Everything one draw call needs, borrowed from the app.
pub struct DrawContext<'a> {
    /// Loaded image, if any.
    pub image: Option<&'a PixelBuffer>,
    /// Display name of the loaded file.
    pub image_name: Option<&'a str>,
    /// Current sample set (empty when no image).
    pub samples: &'a [CurvePoint],
    /// Live sampling/export parameters.
    pub config: &'a SampleConfig,
    /// Rendered export text for the preview pane.
    pub export_text: &'a str,
    /// One-line status message (last action / error).
    pub status: &'a str,
}

/// Draw the full UI: preview canvas + export pane + sidebar.
pub fn draw(frame: &mut Frame, ctx: &DrawContext, state: &RenderState) {
    let area = frame.area();

    // Horizontal split: [canvas | sidebar]
    let h_chunks = Layout::horizontal([Constraint::Min(40), Constraint::Length(SIDEBAR_WIDTH)])
        .split(area);

    // Vertical split of left panel: [canvas | export preview]
    let v_chunks = Layout::vertical([Constraint::Min(10), Constraint::Length(EXPORT_PANE_HEIGHT)])
        .split(h_chunks[0]);

    draw_canvas(frame, v_chunks[0], ctx);
    draw_export_pane(frame, v_chunks[1], ctx);
    draw_sidebar(frame, h_chunks[1], ctx);

    if *state == RenderState::Help {
        draw_help_overlay(frame, area);
    }
}

/// Image preview with guide lines, or a placeholder when nothing is loaded.
fn draw_canvas(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    if let Some(image) = ctx.image {
        canvas::render_preview(
            frame.buffer_mut(),
            area,
            image,
            ctx.samples,
            ctx.config.show_guides,
        );
    } else {
        let placeholder = Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                "No image loaded",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw("Press o to open a curve bitmap"),
        ])
        .centered()
        .block(Block::default().borders(Borders::ALL).title(" curvekey "));
        frame.render_widget(placeholder, area);
    }
}

/// First lines of the current export text.
fn draw_export_pane(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let title = format!(" export \u{2014} {} ", ctx.config.format.label());
    let text: Vec<Line> = ctx
        .export_text
        .lines()
        .take(usize::from(EXPORT_PANE_HEIGHT.saturating_sub(2)))
        .map(Line::raw)
        .collect();
    let pane = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(pane, area);
}

/// Parameter sidebar with all live values and key hints.
fn draw_sidebar(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let dim = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Yellow);

    let mut lines = vec![Line::from(vec![
        Span::styled("image    ", dim),
        Span::raw(ctx.image_name.unwrap_or("\u{2014}")),
    ])];
    if let Some(image) = ctx.image {
        lines.push(Line::from(vec![
            Span::styled("size     ", dim),
            Span::styled(format!("{}\u{00d7}{}", image.width, image.height), value),
        ]));
    }
    lines.extend([
        Line::raw(""),
        Line::from(vec![
            Span::styled("samples  ", dim),
            Span::styled(ctx.config.sample_count.to_string(), value),
            Span::styled("  (-/+)", dim),
        ]),
        Line::from(vec![
            Span::styled("threshold", dim),
            Span::styled(format!(" {}", ctx.config.threshold), value),
            Span::styled("  ([/])", dim),
        ]),
        Line::from(vec![
            Span::styled("format   ", dim),
            Span::styled(ctx.config.format.label(), value),
            Span::styled("  (f)", dim),
        ]),
        Line::from(vec![
            Span::styled("guides   ", dim),
            Span::styled(if ctx.config.show_guides { "on" } else { "off" }, value),
            Span::styled("  (g)", dim),
        ]),
        Line::from(vec![
            Span::styled("points   ", dim),
            Span::styled(ctx.samples.len().to_string(), value),
        ]),
        Line::raw(""),
        Line::styled("o open   s save", dim),
        Line::styled("? help   q quit", dim),
    ]);
    if !ctx.status.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            ctx.status.to_string(),
            Style::default().fg(Color::Green),
        ));
    }

    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::LEFT)
            .title(" parameters "),
    );
    frame.render_widget(sidebar, area);
}

/// Centered help overlay listing every key binding.
fn draw_help_overlay(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled("  curvekey keys", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::raw("  o        open image"),
        Line::raw("  + / -    sample count (2..100)"),
        Line::raw("  ] / [    brightness threshold (0..255)"),
        Line::raw("  f        toggle export format"),
        Line::raw("  g        toggle guide lines"),
        Line::raw("  s        save export text"),
        Line::raw("  ?        close this help"),
        Line::raw("  q / Esc  quit"),
    ];
    let height = (lines.len() + 2) as u16;
    let popup = centered_rect(44, height, area);
    frame.render_widget(Clear, popup);
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" help ")
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(help, popup);
}

/// A fixed-size rect centered inside `area`, clipped to it.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_rect(44, 13, area);
        assert!(popup.x + popup.width <= 80);
        assert!(popup.y + popup.height <= 24);
    }

    #[test]
    fn centered_rect_clips_to_small_areas() {
        let area = Rect::new(0, 0, 10, 4);
        let popup = centered_rect(44, 13, area);
        assert_eq!(popup.width, 10);
        assert_eq!(popup.height, 4);
    }
}
