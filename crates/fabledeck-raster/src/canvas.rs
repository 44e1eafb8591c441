//! The drawing surface scenes paint onto.
//!
//! Every operation paints opaque pixels without anti-aliasing, so overlapping
//! shapes follow the painter's algorithm exactly: whatever is drawn last wins.
//! Coordinates outside the surface are clipped, never rejected.

use std::fmt;

use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::color::Rgb;
use crate::error::{RasterError, Result};
use crate::shape::{BBox, ShapeStyle};
use crate::text::{self, FontBook};

/// Degrees per segment when flattening arcs into polylines
const ARC_STEP_DEGREES: f32 = 3.0;

/// A fixed-size RGB raster surface
pub struct Canvas {
    pixmap: Pixmap,
    fonts: FontBook,
}

impl Canvas {
    /// Allocate a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgb, fonts: FontBook) -> Result<Self> {
        let mut canvas = Self::transparent(width, height, fonts)?;
        canvas.pixmap.fill(background.to_skia());
        Ok(canvas)
    }

    /// Allocate a canvas with every pixel fully transparent.
    ///
    /// Used to check that a composition covers the whole surface on its own.
    pub fn transparent(width: u32, height: u32, fonts: FontBook) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::Canvas { width, height })?;
        Ok(Self { pixmap, fonts })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Ellipse inscribed in `bbox`. The outline is painted inside the box.
    pub fn ellipse(&mut self, bbox: BBox, style: ShapeStyle) -> Result<()> {
        bbox.to_rect("ellipse")?;
        self.paint_framed(bbox, style, |b| {
            let rect = b.to_rect("ellipse")?;
            Ok(PathBuilder::from_oval(rect))
        })
    }

    /// Axis-aligned rectangle covering `bbox` inclusively
    pub fn rectangle(&mut self, bbox: BBox, style: ShapeStyle) -> Result<()> {
        bbox.to_rect("rectangle")?;
        self.paint_framed(bbox, style, |b| {
            let rect = b.to_rect("rectangle")?;
            Ok(Some(PathBuilder::from_rect(rect)))
        })
    }

    /// Closed polygon through `points`, with an optional outline on top
    pub fn polygon(&mut self, points: &[(i32, i32)], style: ShapeStyle) -> Result<()> {
        if points.len() < 3 {
            return Err(RasterError::TooFewPoints {
                shape: "polygon",
                min: 3,
                got: points.len(),
            });
        }

        let mut pb = PathBuilder::new();
        for (i, &(x, y)) in points.iter().enumerate() {
            let (px, py) = pixel_center(x, y);
            if i == 0 {
                pb.move_to(px, py);
            } else {
                pb.line_to(px, py);
            }
        }
        pb.close();

        // Collinear points collapse to nothing; that paints no pixels.
        let path = pb.finish();
        if let Some(fill) = style.fill {
            self.fill(path.clone(), fill);
        }
        if let Some(outline) = style.outline {
            self.stroke(path, outline, style.width.max(1), LineCap::Butt);
        }
        Ok(())
    }

    /// Straight segment of the given width
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb, width: u32) -> Result<()> {
        let mut pb = PathBuilder::new();
        let (x0, y0) = pixel_center(from.0, from.1);
        let (x1, y1) = pixel_center(to.0, to.1);
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);

        self.stroke(pb.finish(), color, width.max(1), LineCap::Square);
        Ok(())
    }

    /// Arc of the ellipse inscribed in `bbox`, from `start` to `end` degrees.
    ///
    /// Angles run clockwise from three o'clock. An `end` smaller than `start`
    /// wraps around through 360.
    pub fn arc(&mut self, bbox: BBox, start: f32, end: f32, color: Rgb, width: u32) -> Result<()> {
        bbox.to_rect("arc")?;
        if !start.is_finite() || !end.is_finite() {
            return Err(RasterError::degenerate("arc", "angles must be finite"));
        }

        let width = width.max(1);
        let (cx, cy, rx, ry) = bbox.ellipse_params();
        // Keep the stroke inside the box like the outline of a filled ellipse.
        let half = width as f32 / 2.0;
        let (rx, ry) = ((rx - half).max(0.5), (ry - half).max(0.5));

        let mut end = end;
        while end < start {
            end += 360.0;
        }
        let sweep = end - start;
        let steps = ((sweep / ARC_STEP_DEGREES).ceil() as usize).max(1);

        let mut pb = PathBuilder::new();
        for i in 0..=steps {
            let angle = (start + sweep * i as f32 / steps as f32).to_radians();
            let (px, py) = (cx + rx * angle.cos(), cy + ry * angle.sin());
            if i == 0 {
                pb.move_to(px, py);
            } else {
                pb.line_to(px, py);
            }
        }

        self.stroke(pb.finish(), color, width, LineCap::Butt);
        Ok(())
    }

    /// Text whose box starts at `at`, `size` pixels tall
    pub fn text(&mut self, at: (i32, i32), content: &str, color: Rgb, size: f32) -> Result<()> {
        if content.trim().is_empty() || self.fonts.face_count() == 0 {
            return Ok(());
        }

        let svg = text::text_svg(self.width(), self.height(), at.0, at.1, content, color, size);
        let tree = usvg::Tree::from_str(&svg, &self.fonts.svg_options())
            .map_err(|e| RasterError::Text(e.to_string()))?;
        resvg::render(&tree, Transform::identity(), &mut self.pixmap.as_mut());
        Ok(())
    }

    /// Color of one pixel, `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Rgb::new(c.red(), c.green(), c.blue())
        })
    }

    /// Whether every pixel has full alpha
    pub fn is_fully_opaque(&self) -> bool {
        self.pixmap.pixels().iter().all(|p| p.alpha() == u8::MAX)
    }

    /// Finish the canvas and encode it as PNG
    pub fn encode_png(self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| RasterError::Encode(e.to_string()))
    }

    /// Paint a closed shape. With both fill and outline, the outline color
    /// covers the whole box and the fill covers the box inset by the outline
    /// width, so the ring always lies inside `bbox`.
    fn paint_framed<F>(&mut self, bbox: BBox, style: ShapeStyle, path_for: F) -> Result<()>
    where
        F: Fn(BBox) -> Result<Option<tiny_skia::Path>>,
    {
        let width = style.width.max(1);
        match (style.fill, style.outline) {
            (Some(fill), Some(outline)) => {
                self.fill(path_for(bbox)?, outline);
                if let Some(inner) = bbox.inset(width as i32) {
                    self.fill(path_for(inner)?, fill);
                }
            }
            (Some(fill), None) => self.fill(path_for(bbox)?, fill),
            (None, Some(outline)) => {
                let centerline = bbox.inset((width / 2) as i32).unwrap_or(bbox);
                self.stroke(path_for(centerline)?, outline, width, LineCap::Butt);
            }
            (None, None) => {}
        }
        Ok(())
    }

    fn fill(&mut self, path: Option<tiny_skia::Path>, color: Rgb) {
        if let Some(path) = path {
            self.pixmap
                .fill_path(&path, &solid(color), FillRule::Winding, Transform::identity(), None);
        }
    }

    fn stroke(&mut self, path: Option<tiny_skia::Path>, color: Rgb, width: u32, cap: LineCap) {
        if let Some(path) = path {
            self.pixmap
                .stroke_path(&path, &solid(color), &stroke(width, cap), Transform::identity(), None);
        }
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("fonts", &self.fonts)
            .finish()
    }
}

fn solid(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = false;
    paint
}

fn stroke(width: u32, line_cap: LineCap) -> Stroke {
    Stroke {
        width: width as f32,
        line_cap,
        line_join: LineJoin::Round,
        ..Stroke::default()
    }
}

fn pixel_center(x: i32, y: i32) -> (f32, f32) {
    (x as f32 + 0.5, y as f32 + 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKY: Rgb = Rgb::new(135, 206, 235);
    const RED: Rgb = Rgb::new(220, 20, 60);
    const BLUE: Rgb = Rgb::new(0, 0, 200);

    fn canvas() -> Canvas {
        Canvas::new(64, 48, SKY, FontBook::empty()).unwrap()
    }

    #[test]
    fn test_new_canvas_is_background() {
        let c = canvas();
        assert_eq!(c.width(), 64);
        assert_eq!(c.height(), 48);
        assert_eq!(c.pixel(0, 0), Some(SKY));
        assert_eq!(c.pixel(63, 47), Some(SKY));
        assert_eq!(c.pixel(64, 0), None);
        assert!(c.is_fully_opaque());
    }

    #[test]
    fn test_zero_size_canvas_fails() {
        let err = Canvas::new(0, 10, SKY, FontBook::empty()).unwrap_err();
        assert!(matches!(err, RasterError::Canvas { width: 0, height: 10 }));
    }

    #[test]
    fn test_transparent_canvas_is_not_opaque() {
        let c = Canvas::transparent(8, 8, FontBook::empty()).unwrap();
        assert!(!c.is_fully_opaque());
    }

    #[test]
    fn test_rectangle_is_inclusive() {
        let mut c = canvas();
        c.rectangle(BBox::new(10, 10, 20, 15), ShapeStyle::fill(RED)).unwrap();
        assert_eq!(c.pixel(10, 10), Some(RED));
        assert_eq!(c.pixel(20, 15), Some(RED));
        assert_eq!(c.pixel(21, 15), Some(SKY));
        assert_eq!(c.pixel(9, 10), Some(SKY));
    }

    #[test]
    fn test_later_shape_wins_overlap() {
        let mut c = canvas();
        c.rectangle(BBox::new(0, 0, 30, 30), ShapeStyle::fill(RED)).unwrap();
        c.ellipse(BBox::new(10, 10, 40, 40), ShapeStyle::fill(BLUE)).unwrap();
        assert_eq!(c.pixel(25, 25), Some(BLUE));
        assert_eq!(c.pixel(2, 2), Some(RED));
    }

    #[test]
    fn test_outlined_ellipse_keeps_fill_inside() {
        let mut c = canvas();
        let style = ShapeStyle::fill(Rgb::WHITE).outlined(Rgb::BLACK, 2);
        c.ellipse(BBox::new(0, 0, 40, 40), style).unwrap();
        assert_eq!(c.pixel(20, 20), Some(Rgb::WHITE));
        assert_eq!(c.pixel(20, 0), Some(Rgb::BLACK));
    }

    #[test]
    fn test_degenerate_rectangle_is_an_error() {
        let mut c = canvas();
        let err = c
            .rectangle(BBox::new(20, 0, 10, 10), ShapeStyle::fill(RED))
            .unwrap_err();
        assert!(matches!(err, RasterError::DegenerateShape { shape: "rectangle", .. }));
        // Nothing was painted.
        assert_eq!(c.pixel(15, 5), Some(SKY));
    }

    #[test]
    fn test_drawing_off_canvas_is_clipped() {
        let mut c = canvas();
        c.ellipse(BBox::new(-100, -100, -50, -50), ShapeStyle::fill(RED)).unwrap();
        c.rectangle(BBox::new(50, 40, 500, 500), ShapeStyle::fill(RED)).unwrap();
        assert_eq!(c.pixel(63, 47), Some(RED));
        assert_eq!(c.pixel(0, 0), Some(SKY));
    }

    #[test]
    fn test_polygon_needs_three_points() {
        let mut c = canvas();
        let err = c.polygon(&[(0, 0), (5, 5)], ShapeStyle::fill(RED)).unwrap_err();
        assert!(matches!(err, RasterError::TooFewPoints { min: 3, got: 2, .. }));
    }

    #[test]
    fn test_polygon_fills_interior() {
        let mut c = canvas();
        c.polygon(&[(0, 40), (30, 0), (60, 40)], ShapeStyle::fill(RED)).unwrap();
        assert_eq!(c.pixel(30, 30), Some(RED));
        assert_eq!(c.pixel(2, 2), Some(SKY));
    }

    #[test]
    fn test_line_paints_its_path() {
        let mut c = canvas();
        c.line((5, 20), (50, 20), BLUE, 3).unwrap();
        assert_eq!(c.pixel(30, 20), Some(BLUE));
        assert_eq!(c.pixel(30, 30), Some(SKY));
    }

    #[test]
    fn test_arc_lower_half_only() {
        let mut c = canvas();
        c.arc(BBox::new(10, 10, 50, 40), 0.0, 180.0, RED, 2).unwrap();
        // Bottom of the ellipse is on the arc, top is not.
        assert_eq!(c.pixel(30, 39), Some(RED));
        assert_eq!(c.pixel(30, 11), Some(SKY));
    }

    #[test]
    fn test_text_without_fonts_is_noop() {
        let mut c = canvas();
        c.text((2, 2), "...", Rgb::BLACK, 12.0).unwrap();
        assert_eq!(c.pixel(4, 8), Some(SKY));
    }

    #[test]
    fn test_encode_png_magic() {
        let png = canvas().encode_png().unwrap();
        assert!(png.len() > 8);
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
