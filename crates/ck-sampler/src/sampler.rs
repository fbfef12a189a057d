use ck_core::curve::{CurvePoint, SampleSet};
use ck_core::error::CoreError;
use ck_core::frame::PixelBuffer;

/// True when the pixel belongs to the curve: fully opaque and darker than
/// the threshold on all three channels.
#[inline(always)]
fn is_curve_pixel(rgba: (u8, u8, u8, u8), threshold: u8) -> bool {
    let (r, g, b, a) = rgba;
    r < threshold && g < threshold && b < threshold && a == 255
}

/// Sample `sample_count` evenly spaced columns of `buffer` and return the
/// topmost curve pixel of each as a [`CurvePoint`].
///
/// Columns are spaced `width / (sample_count - 1)` apart, covering
/// `[0, width]` inclusive; the final position is clamped back to the last
/// real column. Within a column, rows are scanned top to bottom and the
/// first pixel darker than `threshold` (and fully opaque) wins. The bottom
/// row always counts as a hit, so every column contributes exactly one
/// point even when the column is blank — the exporters divide by
/// `len - 1` and rely on the fixed length.
///
/// `y` in the result is flipped (`height - row`, height above the bottom
/// edge); see [`CurvePoint`].
///
/// Pure function: identical inputs give identical output, nothing is
/// cached between calls, and `buffer` is never mutated.
///
/// # Errors
/// [`CoreError::InvalidSampleCount`] when `sample_count < 2`,
/// [`CoreError::InvalidDimensions`] when the buffer has zero width or
/// height. Both are precondition failures, not states to recover from.
///
/// # Example
/// ```
/// use ck_core::frame::PixelBuffer;
/// use ck_sampler::sample;
///
/// // All-transparent 4×4 image: every column falls back to the bottom row.
/// let buf = PixelBuffer::new(4, 4);
/// let points = sample(&buf, 3, 127).unwrap();
/// assert_eq!(points.len(), 3);
/// assert!(points.iter().all(|p| p.y == 1));
/// ```
pub fn sample(
    buffer: &PixelBuffer,
    sample_count: u32,
    threshold: u8,
) -> Result<SampleSet, CoreError> {
    if sample_count < 2 {
        return Err(CoreError::InvalidSampleCount {
            count: sample_count,
        });
    }
    let (width, height) = (buffer.width, buffer.height);
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height });
    }

    // Positions i * step for i in 0..n land evenly on [0, width] inclusive;
    // the last one points one past the final column and gets clamped.
    let step = f64::from(width) / f64::from(sample_count - 1);

    let mut points = SampleSet::with_capacity(sample_count as usize);
    for i in 0..sample_count {
        let x = f64::from(i) * step;
        let column = (x.floor() as u32).min(width - 1);

        for row in 0..height {
            let hit = is_curve_pixel(buffer.pixel(column, row), threshold) || row == height - 1;
            if hit {
                points.push(CurvePoint {
                    x: column,
                    y: height - row,
                });
                break;
            }
        }
    }

    log::trace!(
        "sampled {} points from {width}×{height} buffer (threshold {threshold})",
        points.len()
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// All-white, fully opaque buffer.
    fn white_buffer(width: u32, height: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(width, height);
        for byte in &mut buf.data {
            *byte = 255;
        }
        buf
    }

    fn black_at(buf: &mut PixelBuffer, x: u32, y: u32) {
        buf.set_pixel(x, y, (0, 0, 0, 255));
    }

    #[test]
    fn fixed_length_and_monotonic_x() {
        let buf = white_buffer(64, 32);
        for n in [2u32, 3, 10, 64, 100] {
            let points = sample(&buf, n, 127).unwrap();
            assert_eq!(points.len(), n as usize);
            for pair in points.windows(2) {
                assert!(pair[0].x <= pair[1].x, "x not monotonic for n={n}");
            }
            for p in &points {
                assert!(p.x < 64);
                assert!(p.y >= 1 && p.y <= 32);
            }
        }
    }

    #[test]
    fn blank_column_falls_back_to_bottom_row() {
        let buf = white_buffer(10, 8);
        let points = sample(&buf, 5, 127).unwrap();
        // H - (H - 1) = 1 for every column.
        assert!(points.iter().all(|p| p.y == 1));
    }

    #[test]
    fn top_row_hit_gives_maximum_y() {
        let mut buf = white_buffer(10, 8);
        black_at(&mut buf, 0, 0);
        let points = sample(&buf, 2, 127).unwrap();
        assert_eq!(points[0], CurvePoint { x: 0, y: 8 });
    }

    #[test]
    fn topmost_hit_wins_over_lower_ones() {
        let mut buf = white_buffer(6, 10);
        black_at(&mut buf, 0, 3);
        black_at(&mut buf, 0, 7);
        let points = sample(&buf, 2, 127).unwrap();
        assert_eq!(points[0].y, 10 - 3);
    }

    #[test]
    fn transparent_dark_pixels_do_not_count() {
        let mut buf = white_buffer(6, 10);
        // Dark but not fully opaque: must be skipped.
        buf.set_pixel(0, 2, (0, 0, 0, 254));
        black_at(&mut buf, 0, 6);
        let points = sample(&buf, 2, 127).unwrap();
        assert_eq!(points[0].y, 10 - 6);
    }

    #[test]
    fn all_channels_must_be_below_threshold() {
        let mut buf = white_buffer(6, 10);
        // Red channel at the threshold: not a hit.
        buf.set_pixel(0, 2, (127, 0, 0, 255));
        let points = sample(&buf, 2, 127).unwrap();
        assert_eq!(points[0].y, 1);
    }

    #[test]
    fn feature_between_sample_columns_is_missed() {
        // 4×4, single black pixel at column 2 / row 1. With two samples the
        // columns are {0, 3}; column 2 is never inspected.
        let mut buf = white_buffer(4, 4);
        black_at(&mut buf, 2, 1);
        let points = sample(&buf, 2, 127).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], CurvePoint { x: 0, y: 1 });
        assert_eq!(points[1], CurvePoint { x: 3, y: 1 });
    }

    #[test]
    fn last_column_is_clamped_to_width() {
        let buf = white_buffer(7, 3);
        let points = sample(&buf, 4, 127).unwrap();
        assert_eq!(points.last().unwrap().x, 6);
    }

    #[test]
    fn idempotent() {
        let mut buf = white_buffer(20, 20);
        black_at(&mut buf, 5, 5);
        black_at(&mut buf, 10, 2);
        let a = sample(&buf, 9, 127).unwrap();
        let b = sample(&buf, 9, 127).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sample_count_below_two_is_rejected() {
        let buf = white_buffer(4, 4);
        assert!(matches!(
            sample(&buf, 1, 127),
            Err(CoreError::InvalidSampleCount { count: 1 })
        ));
        assert!(matches!(
            sample(&buf, 0, 127),
            Err(CoreError::InvalidSampleCount { count: 0 })
        ));
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        let buf = PixelBuffer::new(0, 4);
        assert!(matches!(
            sample(&buf, 2, 127),
            Err(CoreError::InvalidDimensions { .. })
        ));
        let buf = PixelBuffer::new(4, 0);
        assert!(matches!(
            sample(&buf, 2, 127),
            Err(CoreError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn threshold_zero_never_hits_before_bottom() {
        let mut buf = white_buffer(4, 4);
        black_at(&mut buf, 0, 0);
        // r < 0 is impossible, so even a black pixel is not a hit.
        let points = sample(&buf, 2, 0).unwrap();
        assert!(points.iter().all(|p| p.y == 1));
    }
}
