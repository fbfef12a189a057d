/// Keyframe export for curvekey.
///
/// Turns a set of sampled curve points into animation-ready text: a JSON
/// array of scale descriptors, or a block of percentage-keyed CSS rules.

pub mod keyframes;
pub mod ratio;
pub mod scale_frames;
pub mod writer;

pub use keyframes::render_css_keyframes;
pub use scale_frames::{render_scale_frames, scale_frames, ScaleFrame};

use ck_core::config::ExportFormat;
use ck_core::curve::CurvePoint;

/// Render the samples in the requested format.
///
/// Both renderers return the neutral empty string for a zero image height;
/// see the per-format functions for the exact empty-state shapes.
///
/// # Example
/// ```
/// use ck_core::config::ExportFormat;
/// use ck_core::curve::CurvePoint;
/// use ck_export::render;
///
/// let samples = [CurvePoint { x: 0, y: 50 }, CurvePoint { x: 9, y: 100 }];
/// let text = render(ExportFormat::CssKeyframes, &samples, 100);
/// assert_eq!(text, "0% { translate: 0 0.5 }\n100% { translate: 0 1 }");
/// ```
#[must_use]
pub fn render(format: ExportFormat, samples: &[CurvePoint], image_height: u32) -> String {
    match format {
        ExportFormat::ScaleFrames => render_scale_frames(samples, image_height),
        ExportFormat::CssKeyframes => render_css_keyframes(samples, image_height),
    }
}
