use ck_core::curve::CurvePoint;
use ck_core::frame::PixelBuffer;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Guide line and sample marker colors.
const GUIDE_COLOR: Color = Color::Cyan;
const MARKER_COLOR: Color = Color::Red;

/// Write an image preview directly into a `ratatui::Buffer`.
///
/// No Canvas widget — direct half-block writes for zero overhead. Each
/// terminal cell shows two vertically stacked pixels via `▀` (fg = upper,
/// bg = lower), nearest-neighbour mapped from the source buffer.
///
/// When `show_guides` is set, the sampled columns get a tinted vertical
/// guide line and each sample point a marker. Markers are drawn last so
/// they stay visible on top of the guides.
pub fn render_preview(
    buf: &mut Buffer,
    area: Rect,
    image: &PixelBuffer,
    samples: &[CurvePoint],
    show_guides: bool,
) {
    if area.width == 0 || area.height == 0 || image.width == 0 || image.height == 0 {
        return;
    }
    log::trace!(
        "preview {}\u{00d7}{} image into {}\u{00d7}{} cells ({} samples)",
        image.width,
        image.height,
        area.width,
        area.height,
        samples.len()
    );
    let cols = u32::from(area.width);
    let rows = u32::from(area.height) * 2; // two pixel rows per cell

    for cy in 0..u32::from(area.height) {
        for cx in 0..cols {
            let upper = pixel_at(image, cx, cy * 2, cols, rows);
            let lower = pixel_at(image, cx, cy * 2 + 1, cols, rows);

            let buf_x = area.x + cx as u16;
            let buf_y = area.y + cy as u16;
            if let Some(cell) = buf.cell_mut((buf_x, buf_y)) {
                cell.set_char('\u{2580}'); // ▀
                cell.set_fg(rgba_color(upper));
                cell.set_bg(rgba_color(lower));
            }
        }
    }

    if !show_guides {
        return;
    }

    // Vertical guides at the sampled columns.
    for point in samples {
        let gx = point.x * cols / image.width;
        for cy in 0..area.height {
            if let Some(cell) = buf.cell_mut((area.x + gx as u16, area.y + cy)) {
                cell.set_fg(GUIDE_COLOR);
            }
        }
    }

    // Sample markers. y is flipped (height above bottom), so the row index
    // is height - y.
    for point in samples {
        let gx = point.x * cols / image.width;
        let row = image.height - point.y;
        let gy = row * u32::from(area.height) / image.height;
        if let Some(cell) = buf.cell_mut((area.x + gx as u16, area.y + gy.min(u32::from(area.height) - 1) as u16)) {
            cell.set_char('\u{25CF}'); // ●
            cell.set_fg(MARKER_COLOR);
        }
    }
}

/// Nearest-neighbour lookup: map preview coordinates to source pixels.
#[inline(always)]
fn pixel_at(image: &PixelBuffer, cx: u32, py: u32, cols: u32, rows: u32) -> (u8, u8, u8, u8) {
    let px = (cx * image.width / cols.max(1)).min(image.width - 1);
    let py = (py * image.height / rows.max(1)).min(image.height - 1);
    image.pixel(px, py)
}

/// Map an RGBA pixel to a terminal color. Transparent pixels fall back to
/// the terminal default so the "nothing here" areas stay neutral.
#[inline(always)]
fn rgba_color(rgba: (u8, u8, u8, u8)) -> Color {
    let (r, g, b, a) = rgba;
    if a == 0 {
        Color::Reset
    } else {
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(width: u32, height: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(width, height);
        for byte in &mut buf.data {
            *byte = 255;
        }
        buf
    }

    #[test]
    fn preview_fills_cells_with_half_blocks() {
        let image = white(4, 4);
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        render_preview(&mut buf, area, &image, &[], false);
        let cell = buf.cell((0, 0)).unwrap();
        assert_eq!(cell.symbol(), "\u{2580}");
        assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn marker_lands_on_the_flipped_row() {
        // y = 4 on a 4-high image is the TOP row of the preview.
        let image = white(4, 4);
        let samples = [CurvePoint { x: 0, y: 4 }];
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        render_preview(&mut buf, area, &image, &samples, true);
        let cell = buf.cell((0, 0)).unwrap();
        assert_eq!(cell.symbol(), "\u{25CF}");
        assert_eq!(cell.fg, MARKER_COLOR);
    }

    #[test]
    fn guides_only_tint_when_enabled() {
        let image = white(4, 4);
        let samples = [CurvePoint { x: 2, y: 1 }];
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        render_preview(&mut buf, area, &image, &samples, false);
        // Guide column keeps the image color, no cyan tint.
        assert_eq!(buf.cell((2, 0)).unwrap().fg, Color::Rgb(255, 255, 255));
    }
}
