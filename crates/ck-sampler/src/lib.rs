/// Curve sampling for curvekey.
///
/// Converts a pixel buffer into an ordered set of curve points,
/// one per sampled column.

pub mod sampler;

pub use sampler::sample;
