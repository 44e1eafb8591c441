//! Text painting through a one-element SVG document.
//!
//! tiny-skia has no glyph support, so text is laid out by `usvg` against a
//! shared font database and rasterized by `resvg` straight onto the canvas.

use std::fmt;
use std::sync::Arc;

use crate::color::Rgb;

/// Font families tried in order. CJK faces come first so story text renders.
const FONT_FAMILIES: &str =
    "'Noto Sans CJK SC', 'Source Han Sans SC', 'WenQuanYi Micro Hei', 'Microsoft YaHei', sans-serif";

/// Fraction of the font size between the top of the text box and the baseline
const ASCENT_RATIO: f32 = 0.8;

/// Shared, read-only font database used to shape canvas text.
///
/// Cloning is cheap; all clones point at the same database.
#[derive(Clone)]
pub struct FontBook {
    db: Arc<usvg::fontdb::Database>,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::system()
    }
}

impl FontBook {
    /// Load every font installed on the system
    pub fn system() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();

        if db.is_empty() {
            log::warn!("No system fonts found, canvas text will not be drawn");
        }

        Self { db: Arc::new(db) }
    }

    /// A font book with no faces. Text calls become no-ops.
    pub fn empty() -> Self {
        Self {
            db: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Number of loaded font faces
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    pub(crate) fn svg_options(&self) -> usvg::Options<'static> {
        let mut opts = usvg::Options::default();
        opts.fontdb = Arc::clone(&self.db);
        opts
    }
}

impl fmt::Debug for FontBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.face_count())
            .finish()
    }
}

/// Build an SVG document of the canvas size holding a single text run whose
/// box starts at `(x, y)`.
pub(crate) fn text_svg(
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    text: &str,
    color: Rgb,
    size: f32,
) -> String {
    let baseline = y as f32 + size * ASCENT_RATIO;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><text x="{x}" y="{baseline}" font-size="{size}" font-family="{FONT_FAMILIES}" fill="{color}" xml:space="preserve">{text}</text></svg>"#,
        w = width,
        h = height,
        text = escape_xml(text),
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
