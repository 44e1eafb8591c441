//! The in-memory deck and its persistence.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::constants::{WIDESCREEN_SLIDE_HEIGHT_EMU, WIDESCREEN_SLIDE_WIDTH_EMU};
use crate::error::{PptxError, Result};
use crate::slide::Slide;
use crate::writer::PackageWriter;

/// An ordered, append-only list of slides plus package metadata
#[derive(Debug, Clone)]
pub struct Presentation {
    width: i64,
    height: i64,
    slides: Vec<Slide>,
    title: Option<String>,
    author: Option<String>,
    locale: String,
}

impl Presentation {
    /// Create an empty deck with the given slide size in EMU
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(PptxError::invalid_geometry(format!(
                "slide size must be positive, got {}x{} EMU",
                width, height
            )));
        }

        Ok(Self {
            width,
            height,
            slides: Vec::new(),
            title: None,
            author: None,
            locale: "en-US".to_string(),
        })
    }

    /// Empty 16:9 deck (13.333" x 7.5")
    pub fn widescreen() -> Self {
        Self {
            width: WIDESCREEN_SLIDE_WIDTH_EMU,
            height: WIDESCREEN_SLIDE_HEIGHT_EMU,
            slides: Vec::new(),
            title: None,
            author: None,
            locale: "en-US".to_string(),
        }
    }

    /// Set the presentation title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the language tag written on every text run
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Append a blank slide and return it
    pub fn add_slide(&mut self) -> &mut Slide {
        let index = self.slides.len();
        self.slides.push(Slide::new(index as u32 + 1));
        &mut self.slides[index]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide width in EMU
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Slide height in EMU
    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Serialize the whole package
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::new(self).generate()
    }

    /// Write the package to `path`.
    ///
    /// The bytes go to a temporary file next to `path` which is renamed into
    /// place only once fully written, so a failed save leaves no file behind.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| PptxError::IoError(e.error))?;

        tracing::debug!(
            path = %path.display(),
            slides = self.slides.len(),
            bytes = bytes.len(),
            "Saved presentation"
        );
        Ok(())
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::widescreen()
    }
}
