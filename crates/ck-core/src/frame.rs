/// Read-only pixel buffer handed to the sampler.
///
/// Stores pixels in RGBA row-major order, 4 bytes per pixel. Owned by the
/// caller; the sampler only ever borrows it.
///
/// # Example
/// ```
/// use ck_core::frame::PixelBuffer;
/// let buf = PixelBuffer::new(10, 10);
/// assert_eq!(buf.data.len(), 400);
/// ```
pub struct PixelBuffer {
    /// RGBA pixels, row-major, 4 bytes per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Byte length of a width×height RGBA buffer, widened to usize before
/// multiplying: `w * h * 4` overflows u32 for images past 32768².
#[inline(always)]
fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

impl PixelBuffer {
    /// Create a zeroed buffer of the given dimensions.
    ///
    /// # Example
    /// ```
    /// use ck_core::frame::PixelBuffer;
    /// let buf = PixelBuffer::new(100, 50);
    /// assert_eq!(buf.width, 100);
    /// assert_eq!(buf.height, 50);
    /// assert_eq!(buf.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; byte_len(width, height)],
            width,
            height,
        }
    }

    /// Wrap an existing RGBA byte array.
    ///
    /// `data.len()` must equal `width * height * 4`.
    #[must_use]
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), byte_len(width, height));
        Self {
            data,
            width,
            height,
        }
    }

    /// Access pixel (x, y) → (r, g, b, a).
    ///
    /// `y` here is the raw top-down row index, not the flipped curve
    /// coordinate.
    ///
    /// # Example
    /// ```
    /// use ck_core::frame::PixelBuffer;
    /// let buf = PixelBuffer::new(10, 10);
    /// let (r, g, b, a) = buf.pixel(0, 0);
    /// assert_eq!((r, g, b, a), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.index(x, y);
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Write pixel (x, y). Out-of-bounds writes are ignored.
    ///
    /// For building fixtures; the sampler itself never mutates a buffer.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: (u8, u8, u8, u8)) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        self.data[idx] = rgba.0;
        self.data[idx + 1] = rgba.1;
        self.data[idx + 2] = rgba.2;
        self.data[idx + 3] = rgba.3;
    }

    /// Flat byte index of pixel (x, y), computed in usize so the row
    /// offset of a very large image cannot wrap.
    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_len_survives_dimensions_past_u32_range() {
        // 33_000² × 4 does not fit in u32; the math must widen first.
        assert_eq!(byte_len(33_000, 33_000), 33_000usize * 33_000 * 4);
        assert_eq!(byte_len(65_536, 65_536), 65_536usize * 65_536 * 4);
    }

    #[test]
    fn index_reaches_the_far_corner_of_large_images() {
        // No allocation: only the arithmetic is under test.
        let buf = PixelBuffer {
            data: Vec::new(),
            width: 40_000,
            height: 40_000,
        };
        assert_eq!(buf.index(39_999, 39_999), (39_999usize * 40_000 + 39_999) * 4);
    }

    #[test]
    fn pixel_round_trips_through_set_pixel() {
        let mut buf = PixelBuffer::new(3, 3);
        buf.set_pixel(2, 1, (10, 20, 30, 255));
        assert_eq!(buf.pixel(2, 1), (10, 20, 30, 255));
    }
}
