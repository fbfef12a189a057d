/// Round to two decimal places: `round(v * 100) / 100`.
///
/// This is the rounding rule of the interchange format — consumers parse
/// numbers with at most two decimals and no trailing zeros.
///
/// # Example
/// ```
/// use ck_export::ratio::round2;
/// assert_eq!(round2(0.254), 0.25);
/// assert_eq!(round2(0.256), 0.26);
/// assert_eq!(round2(1.0), 1.0);
/// ```
#[must_use]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Normalized height of a point above the bottom edge, rounded to two
/// decimals. `y` is the flipped coordinate, so the result stays in [0, 1].
#[must_use]
pub fn fraction(y: u32, image_height: u32) -> f64 {
    round2(f64::from(y) / f64::from(image_height))
}
