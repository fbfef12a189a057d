/// One sampled point on the curve.
///
/// `y` is stored FLIPPED: `y = image_height - row`, the height of the point
/// above the bottom edge of the image, not the top-down row index. Every
/// consumer (both exporters, the preview) relies on this orientation.
///
/// With rows scanned in `0..height`, `y` lands in `[1, height]`: a hit on
/// row 0 gives `y = height`, the bottom-row fallback gives `y = 1`.
///
/// # Example
/// ```
/// use ck_core::curve::CurvePoint;
/// let p = CurvePoint { x: 3, y: 98 };
/// assert_eq!(p.x, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurvePoint {
    /// Column index in `[0, width - 1]`.
    pub x: u32,
    /// Height above the bottom edge, in `[1, image_height]`.
    pub y: u32,
}

/// Ordered sample points, ascending x, one per sampled column.
///
/// A pure derived value: recomputed from scratch on every sampler call,
/// no identity across calls.
pub type SampleSet = Vec<CurvePoint>;
