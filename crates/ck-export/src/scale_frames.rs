use ck_core::curve::CurvePoint;
use serde::{Deserialize, Serialize};

use crate::ratio::fraction;

/// One exported keyframe: a 2D scale descriptor.
///
/// The string encodes an x/y pair, x fixed at 1 and y the normalized curve
/// height rounded to two decimals: `"1 0.42"`. Animation consumers depend
/// on this exact shape.
///
/// # Example
/// ```
/// use ck_export::ScaleFrame;
/// let f = ScaleFrame { scale: "1 0.42".into() };
/// assert!(f.scale.starts_with("1 "));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScaleFrame {
    /// `"1 <f>"` with `f = round2(y / image_height)`.
    pub scale: String,
}

/// Map each sample to a [`ScaleFrame`].
///
/// # Example
/// ```
/// use ck_core::curve::CurvePoint;
/// use ck_export::scale_frames;
///
/// let frames = scale_frames(&[CurvePoint { x: 0, y: 30 }], 100);
/// assert_eq!(frames[0].scale, "1 0.3");
/// ```
#[must_use]
pub fn scale_frames(samples: &[CurvePoint], image_height: u32) -> Vec<ScaleFrame> {
    samples
        .iter()
        .map(|p| ScaleFrame {
            scale: format!("1 {}", fraction(p.y, image_height)),
        })
        .collect()
}

/// Render the samples as a pretty-printed JSON array (2-space indent).
///
/// An empty sample set renders as `"[]"` — the "image loaded but zero
/// samples" state. A zero `image_height` renders as `""`, the "no image
/// yet" state; the distinction is deliberate and both forms are part of
/// the contract.
///
/// # Example
/// ```
/// use ck_core::curve::CurvePoint;
/// use ck_export::render_scale_frames;
///
/// let json = render_scale_frames(&[CurvePoint { x: 0, y: 100 }], 100);
/// assert_eq!(json, "[\n  {\n    \"scale\": \"1 1\"\n  }\n]");
/// ```
#[must_use]
pub fn render_scale_frames(samples: &[CurvePoint], image_height: u32) -> String {
    if image_height == 0 {
        return String::new();
    }
    let frames = scale_frames(samples, image_height);
    // Serializing a Vec of plain structs cannot fail.
    serde_json::to_string_pretty(&frames).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_preserves_count_and_shape() {
        let samples: Vec<CurvePoint> = (0..10)
            .map(|i| CurvePoint {
                x: i,
                y: (i + 1) * 10,
            })
            .collect();
        let json = render_scale_frames(&samples, 100);
        let parsed: Vec<ScaleFrame> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), samples.len());
        for frame in &parsed {
            let (one, f) = frame.scale.split_once(' ').unwrap();
            assert_eq!(one, "1");
            let f: f64 = f.parse().unwrap();
            assert!((0.0..=1.0).contains(&f));
            // Two decimal places at most.
            assert_eq!((f * 100.0).round() / 100.0, f);
        }
    }

    #[test]
    fn empty_samples_render_as_empty_array() {
        assert_eq!(render_scale_frames(&[], 100), "[]");
    }

    #[test]
    fn zero_height_renders_as_empty_string() {
        let samples = [CurvePoint { x: 0, y: 1 }];
        assert_eq!(render_scale_frames(&samples, 0), "");
    }

    #[test]
    fn uses_two_space_indent() {
        let samples = [CurvePoint { x: 0, y: 50 }];
        let json = render_scale_frames(&samples, 100);
        assert!(json.contains("\n  {"));
        assert!(json.contains("\n    \"scale\": \"1 0.5\""));
    }
}
