use thiserror::Error;

/// Errors originating from the core sampling contract.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Sample count below the minimum of 2 (the exporters divide by
    /// `count - 1`).
    #[error("invalid sample count: {count} (minimum is 2)")]
    InvalidSampleCount {
        /// The rejected count.
        count: u32,
    },

    /// Zero-width or zero-height pixel buffer: no columns or rows to scan.
    #[error("invalid image dimensions: {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
