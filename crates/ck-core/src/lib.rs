/// Configuration, types, and shared structures for curvekey.
///
/// This crate contains all shared types and configuration logic
/// used across the curvekey workspace.

pub mod config;
pub mod curve;
pub mod error;
pub mod frame;

pub use config::{ExportFormat, SampleConfig};
pub use curve::{CurvePoint, SampleSet};
pub use error::CoreError;
pub use frame::PixelBuffer;
