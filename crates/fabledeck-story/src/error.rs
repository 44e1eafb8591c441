//! Error types for story loading and deck assembly.

use std::fmt;

use thiserror::Error;

use crate::scenes::Scene;

/// Result type for story operations
pub type Result<T> = std::result::Result<T, StoryError>;

/// Step of the per-slide assembly loop an error occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyStage {
    RenderScene,
    PlaceBackground,
    PlaceTitle,
    PlaceBody,
}

impl fmt::Display for AssemblyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssemblyStage::RenderScene => "render scene",
            AssemblyStage::PlaceBackground => "place background",
            AssemblyStage::PlaceTitle => "place title",
            AssemblyStage::PlaceBody => "place body",
        };
        f.write_str(name)
    }
}

/// What went wrong inside an assembly stage
#[derive(Error, Debug)]
pub enum StageError {
    #[error(transparent)]
    Raster(#[from] fabledeck_raster::RasterError),

    #[error(transparent)]
    Pptx(#[from] fabledeck_pptx::PptxError),
}

/// Errors raised while loading a story table or assembling its deck
#[derive(Error, Debug)]
pub enum StoryError {
    /// A story table or deck style that cannot be used
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A slide failed part-way; no deck is produced
    #[error("Slide {slide} ({scene}) failed to {stage}")]
    Assembly {
        slide: usize,
        scene: Scene,
        stage: AssemblyStage,
        #[source]
        source: StageError,
    },
}

impl StoryError {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Wrap a stage failure with the slide it belongs to
    pub fn assembly(
        slide: usize,
        scene: Scene,
        stage: AssemblyStage,
        source: impl Into<StageError>,
    ) -> Self {
        Self::Assembly {
            slide,
            scene,
            stage,
            source: source.into(),
        }
    }

    /// Whether the error was raised before any rendering started
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Toml(_) | Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabledeck_raster::RasterError;

    #[test]
    fn test_assembly_error_display() {
        let err = StoryError::assembly(
            3,
            Scene::Bored,
            AssemblyStage::RenderScene,
            RasterError::degenerate("rectangle", "x1 (5) is left of x0 (10)"),
        );
        let msg = err.to_string();
        assert!(msg.contains("Slide 3"));
        assert!(msg.contains("bored"));
        assert!(msg.contains("render scene"));
        assert!(!err.is_config());
    }

    #[test]
    fn test_config_error() {
        let err = StoryError::config("story table has no slides");
        assert!(err.is_config());
        assert!(err.to_string().contains("no slides"));
    }
}
