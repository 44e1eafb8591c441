//! Error types for canvas operations

use thiserror::Error;

/// Errors that can occur while painting or encoding a canvas
#[derive(Error, Debug)]
pub enum RasterError {
    /// The canvas could not be allocated
    #[error("Failed to create canvas ({width}x{height})")]
    Canvas { width: u32, height: u32 },

    /// A draw operation was given an inverted or non-finite region
    #[error("Degenerate {shape}: {reason}")]
    DegenerateShape { shape: &'static str, reason: String },

    /// A polygon or polyline needs more points than it was given
    #[error("{shape} needs at least {min} points, got {got}")]
    TooFewPoints {
        shape: &'static str,
        min: usize,
        got: usize,
    },

    /// Text layout failed before anything was painted
    #[error("Text rendering failed: {0}")]
    Text(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

impl RasterError {
    /// Create a degenerate shape error
    pub fn degenerate(shape: &'static str, reason: impl Into<String>) -> Self {
        Self::DegenerateShape {
            shape,
            reason: reason.into(),
        }
    }
}

/// Result type for canvas operations
pub type Result<T> = std::result::Result<T, RasterError>;
