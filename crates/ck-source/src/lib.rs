/// Image decoding for curvekey.
///
/// Turns an on-disk bitmap into the read-only `PixelBuffer` the sampler
/// scans. Decoding happens once per load; the sampler then reruns against
/// the frozen buffer as parameters change.

pub mod image;

pub use image::{load_image, LoadedImage};
