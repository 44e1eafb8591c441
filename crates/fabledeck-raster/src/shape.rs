//! Regions and paint styles accepted by the canvas draw operations.

use crate::color::Rgb;
use crate::error::{RasterError, Result};

/// An inclusive pixel bounding box `[x0, y0, x1, y1]`.
///
/// Both corners are painted, so `BBox::new(0, 0, 0, 0)` covers one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of radius `r` around a center point
    pub const fn around(cx: i32, cy: i32, r: i32) -> Self {
        Self::new(cx - r, cy - r, cx + r, cy + r)
    }

    /// Shrink every edge by `by` pixels. `None` if nothing is left.
    pub fn inset(self, by: i32) -> Option<Self> {
        let inner = Self::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by);
        (inner.x1 >= inner.x0 && inner.y1 >= inner.y0).then_some(inner)
    }

    /// Convert to a half-open skia rect, rejecting inverted boxes.
    pub(crate) fn to_rect(self, shape: &'static str) -> Result<tiny_skia::Rect> {
        if self.x1 < self.x0 {
            return Err(RasterError::degenerate(
                shape,
                format!("x1 ({}) is left of x0 ({})", self.x1, self.x0),
            ));
        }
        if self.y1 < self.y0 {
            return Err(RasterError::degenerate(
                shape,
                format!("y1 ({}) is above y0 ({})", self.y1, self.y0),
            ));
        }

        tiny_skia::Rect::from_ltrb(
            self.x0 as f32,
            self.y0 as f32,
            (self.x1 + 1) as f32,
            (self.y1 + 1) as f32,
        )
        .ok_or_else(|| RasterError::degenerate(shape, format!("{:?} is not representable", self)))
    }

    /// Center and radii of the ellipse inscribed in this box
    pub(crate) fn ellipse_params(self) -> (f32, f32, f32, f32) {
        let cx = (self.x0 + self.x1 + 1) as f32 / 2.0;
        let cy = (self.y0 + self.y1 + 1) as f32 / 2.0;
        let rx = (self.x1 - self.x0 + 1) as f32 / 2.0;
        let ry = (self.y1 - self.y0 + 1) as f32 / 2.0;
        (cx, cy, rx, ry)
    }
}

/// Fill and outline for closed shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeStyle {
    /// Interior color, `None` for an unfilled outline
    pub fill: Option<Rgb>,
    /// Outline color
    pub outline: Option<Rgb>,
    /// Outline width in pixels
    pub width: u32,
}

impl ShapeStyle {
    /// Solid fill, no outline
    pub const fn fill(color: Rgb) -> Self {
        Self {
            fill: Some(color),
            outline: None,
            width: 0,
        }
    }

    /// Add an outline of the given width
    pub const fn outlined(mut self, color: Rgb, width: u32) -> Self {
        self.outline = Some(color);
        self.width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_around() {
        assert_eq!(BBox::around(10, 20, 5), BBox::new(5, 15, 15, 25));
    }

    #[test]
    fn test_inset() {
        let b = BBox::new(0, 0, 10, 10);
        assert_eq!(b.inset(2), Some(BBox::new(2, 2, 8, 8)));
        assert_eq!(b.inset(6), None);
    }

    #[test]
    fn test_inverted_box_is_degenerate() {
        let err = BBox::new(10, 0, 5, 5).to_rect("rectangle").unwrap_err();
        assert!(matches!(err, RasterError::DegenerateShape { shape: "rectangle", .. }));
        assert!(err.to_string().contains("x1"));
    }

    #[test]
    fn test_single_pixel_box_is_valid() {
        let rect = BBox::new(3, 3, 3, 3).to_rect("rectangle").unwrap();
        assert_eq!(rect.width(), 1.0);
        assert_eq!(rect.height(), 1.0);
    }

    #[test]
    fn test_style_builders() {
        let style = ShapeStyle::fill(Rgb::WHITE).outlined(Rgb::BLACK, 2);
        assert_eq!(style.fill, Some(Rgb::WHITE));
        assert_eq!(style.outline, Some(Rgb::BLACK));
        assert_eq!(style.width, 2);
    }
}
