/// TUI rendering for curvekey.
///
/// Draws the image preview (half-block cells), the sampled points with
/// their guide lines, the parameter sidebar, and the export preview pane.
/// Guide drawing lives here and only here — the sampler never sees it.

pub mod canvas;
pub mod ui;
