//! # fabledeck-pptx
//!
//! PowerPoint (PPTX) package writing for picture-book decks.
//!
//! A [`Presentation`] is an ordered list of blank-layout [`Slide`]s. Each slide
//! holds full-bleed pictures and free-floating text shapes positioned in EMU.
//! The [`styling`] module edits a shape's serialized properties directly for
//! effects the typed API does not cover, such as fill transparency.
//!
//! ## Example
//!
//! ```no_run
//! use fabledeck_pptx::{inches, Alignment, Presentation, Rect};
//!
//! let mut deck = Presentation::widescreen();
//! let slide = deck.add_slide();
//! let title = slide.add_textbox(Rect::new(inches(0.5), inches(0.3), inches(12.33), inches(1.2)))?;
//! title
//!     .text_frame_mut()
//!     .add_paragraph("狼 来 了")
//!     .with_alignment(Alignment::Center);
//! deck.save("story.pptx")?;
//! # Ok::<(), fabledeck_pptx::PptxError>(())
//! ```

pub mod error;
pub mod presentation;
pub mod slide;
pub mod styling;
pub mod text;
pub mod writer;

// Re-exports
pub use error::{PptxError, Result};
pub use presentation::Presentation;
pub use slide::{Fill, Geometry, Line, Picture, Rect, ShapeRef, Slide, TextShape, TextShapeKind};
pub use styling::{apply_fill_alpha, FillPatch};
pub use text::{Alignment, Font, Paragraph, RgbColor, TextFrame};

/// Convert inches to EMU, truncating toward zero
pub fn inches(value: f64) -> i64 {
    (value * constants::EMU_PER_INCH as f64) as i64
}

/// Convert points to EMU, truncating toward zero
pub fn points(value: f64) -> i64 {
    (value * constants::EMU_PER_POINT as f64) as i64
}

/// PPTX-related constants
pub mod constants {
    /// Widescreen 16:9 slide width in EMU (13.333" width)
    pub const WIDESCREEN_SLIDE_WIDTH_EMU: i64 = 12_192_000;

    /// Widescreen 16:9 slide height in EMU (7.5" height)
    pub const WIDESCREEN_SLIDE_HEIGHT_EMU: i64 = 6_858_000;

    /// EMU per inch
    pub const EMU_PER_INCH: i64 = 914_400;

    /// EMU per point
    pub const EMU_PER_POINT: i64 = 12_700;

    /// Hundredths of a point per point (for `sz` font sizes)
    pub const FONT_SIZE_UNITS_PER_POINT: u32 = 100;

    /// Fully opaque, in DrawingML hundred-thousandths
    pub const ALPHA_OPAQUE: u32 = 100_000;

    /// PresentationML namespace
    pub const NS_PRESENTATION: &str =
        "http://schemas.openxmlformats.org/presentationml/2006/main";

    /// DrawingML namespace
    pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    /// Relationships namespace
    pub const NS_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    /// Package relationships namespace
    pub const NS_PACKAGE_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";

    /// Slide relationship type
    pub const REL_TYPE_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

    /// Slide layout relationship type
    pub const REL_TYPE_SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

    /// Slide master relationship type
    pub const REL_TYPE_SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

    /// Theme relationship type
    pub const REL_TYPE_THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

    /// Image relationship type
    pub const REL_TYPE_IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
}
