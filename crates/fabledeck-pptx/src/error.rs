//! Error types for PPTX generation.

use thiserror::Error;

/// Result type for PPTX operations
pub type Result<T> = std::result::Result<T, PptxError>;

/// Errors that can occur while building or writing a presentation
#[derive(Error, Debug)]
pub enum PptxError {
    /// A slide, shape or frame size that cannot be represented
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// Picture data that cannot be embedded
    #[error("Image error: {reason}")]
    ImageError { reason: String },

    /// Shape properties that are not well-formed XML
    #[error("Invalid shape XML: {reason}")]
    InvalidXml { reason: String },

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// ZIP archive error
    #[error("Archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PptxError {
    /// Create an invalid geometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Create an image error
    pub fn image_error(reason: impl Into<String>) -> Self {
        Self::ImageError {
            reason: reason.into(),
        }
    }

    /// Create an invalid XML error
    pub fn invalid_xml(reason: impl Into<String>) -> Self {
        Self::InvalidXml {
            reason: reason.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidGeometry { .. } => "PPTX001",
            Self::ImageError { .. } => "PPTX002",
            Self::InvalidXml { .. } => "PPTX003",
            Self::XmlError(_) => "PPTX004",
            Self::ZipError(_) => "PPTX005",
            Self::IoError(_) => "PPTX006",
        }
    }
}
