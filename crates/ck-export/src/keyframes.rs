use ck_core::curve::CurvePoint;

use crate::ratio::fraction;

/// Render the samples as percentage-keyed CSS keyframe rules.
///
/// One line per sample: `"<p>% { translate: 0 <f> }"`. The percentage
/// starts at 0 and increments by `floor(100 / (len - 1))` — an integer
/// step accumulated across samples, so the last key drifts below 100 for
/// counts that do not divide 100 evenly (e.g. 0/33/66/99 for four
/// samples). That drift is part of the contract and is not corrected.
///
/// No `@keyframes` wrapper or selector is emitted; the caller owns any
/// wrapping. Returns `""` for a zero image height or fewer than two
/// samples (nothing to key between).
///
/// # Example
/// ```
/// use ck_core::curve::CurvePoint;
/// use ck_export::render_css_keyframes;
///
/// let samples = [CurvePoint { x: 0, y: 30 }, CurvePoint { x: 9, y: 90 }];
/// let css = render_css_keyframes(&samples, 100);
/// assert_eq!(css, "0% { translate: 0 0.3 }\n100% { translate: 0 0.9 }");
/// ```
#[must_use]
pub fn render_css_keyframes(samples: &[CurvePoint], image_height: u32) -> String {
    if image_height == 0 || samples.len() < 2 {
        return String::new();
    }
    // Minimum divisor is 1 (two samples).
    let step = 100 / (samples.len() - 1);

    samples
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "{}% {{ translate: 0 {} }}",
                i * step,
                fraction(p.y, image_height)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
