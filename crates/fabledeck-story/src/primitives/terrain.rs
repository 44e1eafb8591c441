//! Hills, trees and fences.

use fabledeck_raster::{BBox, Canvas, Result, ShapeStyle};

use crate::palette::Theme;

/// Two overlapping hills resting on the horizon
pub fn mountains(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let base = theme.size.horizon();
    canvas.polygon(
        &[(0, base), (200, base - 160), (400, base)],
        ShapeStyle::fill(theme.palette.hill_near),
    )?;
    canvas.polygon(
        &[(300, base), (550, base - 180), (750, base)],
        ShapeStyle::fill(theme.palette.hill_far),
    )
}

/// Trunk standing at `(x, y)` with a round crown above it
pub fn tree(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    canvas.rectangle(
        BBox::new(x - 8, y, x + 8, y + 50),
        ShapeStyle::fill(theme.palette.brown),
    )?;
    canvas.ellipse(
        BBox::new(x - 35, y - 40, x + 35, y + 20),
        ShapeStyle::fill(theme.palette.dark_green),
    )
}

/// `count` posts 20px apart joined by two rails
pub fn fence(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32, count: i32) -> Result<()> {
    let wood = ShapeStyle::fill(theme.palette.brown).outlined(theme.palette.dark_brown, 1);

    for i in 0..count {
        let fx = x + i * 20;
        canvas.rectangle(BBox::new(fx, y - 30, fx + 5, y + 10), wood)?;
    }
    canvas.rectangle(BBox::new(x - 5, y - 20, x + count * 20, y - 15), wood)?;
    canvas.rectangle(BBox::new(x - 5, y - 5, x + count * 20, y), wood)
}
