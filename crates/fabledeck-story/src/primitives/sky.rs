//! Backgrounds and sky objects.

use fabledeck_raster::{BBox, Canvas, Result, Rgb, ShapeStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::palette::Theme;

/// Fixed seed; every night sky has the same stars
const STAR_SEED: u64 = 42;

/// Sky above the horizon, grass below. Covers the whole canvas.
pub fn sky_and_grass(canvas: &mut Canvas, theme: &Theme, sky: Rgb) -> Result<()> {
    let (w, h) = (theme.size.width as i32, theme.size.height as i32);
    let horizon = theme.size.horizon();

    canvas.rectangle(BBox::new(0, 0, w, horizon), ShapeStyle::fill(sky))?;
    canvas.rectangle(
        BBox::new(0, horizon, w, h),
        ShapeStyle::fill(theme.palette.grass_green),
    )
}

/// Sun of radius `r` with twelve rays
pub fn sun(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32, r: i32) -> Result<()> {
    let color = theme.palette.sun_yellow;
    canvas.ellipse(BBox::around(x, y, r), ShapeStyle::fill(color))?;

    for angle in (0..360).step_by(30) {
        let (sin, cos) = (angle as f64).to_radians().sin_cos();
        let ray_point = |len: i32| {
            (
                x + (len as f64 * cos) as i32,
                y + (len as f64 * sin) as i32,
            )
        };
        canvas.line(ray_point(r + 15), ray_point(r + 30), color, 3)?;
    }
    Ok(())
}

/// Four overlapping white puffs
pub fn cloud(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    for (dx, dy, r) in [(0, 0, 25), (20, -10, 20), (-20, -8, 18), (10, 5, 22)] {
        canvas.ellipse(
            BBox::around(x + dx, y + dy, r),
            ShapeStyle::fill(theme.palette.white),
        )?;
    }
    Ok(())
}

/// Crescent moon, cut out with the night sky color
pub fn moon(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    canvas.ellipse(
        BBox::around(x, y, 30),
        ShapeStyle::fill(theme.palette.light_yellow),
    )?;
    canvas.ellipse(
        BBox::new(x - 15, y - 35, x + 25, y + 25),
        ShapeStyle::fill(theme.palette.night_blue),
    )
}

/// `count` small stars scattered over the sky
pub fn stars(canvas: &mut Canvas, theme: &Theme, count: usize) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(STAR_SEED);
    let max_x = theme.size.width as i32 - 20;
    let max_y = theme.size.horizon() - 20;

    for _ in 0..count {
        let sx = rng.gen_range(20..=max_x);
        let sy = rng.gen_range(20..=max_y);
        canvas.ellipse(
            BBox::around(sx, sy, 2),
            ShapeStyle::fill(theme.palette.sun_yellow),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabledeck_raster::FontBook;

    fn canvas(theme: &Theme) -> Canvas {
        Canvas::new(
            theme.size.width,
            theme.size.height,
            Rgb::WHITE,
            FontBook::empty(),
        )
        .unwrap()
    }

    #[test]
    fn test_sky_and_grass_covers_canvas() {
        let theme = Theme::default();
        let mut c = Canvas::transparent(960, 540, FontBook::empty()).unwrap();
        sky_and_grass(&mut c, &theme, theme.palette.sky_blue).unwrap();

        assert!(c.is_fully_opaque());
        assert_eq!(c.pixel(10, 10), Some(theme.palette.sky_blue));
        assert_eq!(c.pixel(10, 359), Some(theme.palette.sky_blue));
        assert_eq!(c.pixel(10, 361), Some(theme.palette.grass_green));
        assert_eq!(c.pixel(959, 539), Some(theme.palette.grass_green));
    }

    #[test]
    fn test_sun_rays() {
        let theme = Theme::default();
        let mut c = canvas(&theme);
        sun(&mut c, &theme, 860, 60, 40).unwrap();

        assert_eq!(c.pixel(860, 60), Some(theme.palette.sun_yellow));
        // The ray at 0 degrees spans x = 915..930 on the center row
        assert_eq!(c.pixel(920, 60), Some(theme.palette.sun_yellow));
        // Gap between the disc and the ray
        assert_eq!(c.pixel(908, 60), Some(Rgb::WHITE));
    }

    #[test]
    fn test_moon_is_a_crescent() {
        let theme = Theme::default();
        let mut c = canvas(&theme);
        moon(&mut c, &theme, 100, 60).unwrap();

        assert_eq!(c.pixel(75, 60), Some(theme.palette.light_yellow));
        assert_eq!(c.pixel(105, 60), Some(theme.palette.night_blue));
    }

    #[test]
    fn test_stars_are_seeded() {
        let theme = Theme::default();
        let mut a = canvas(&theme);
        let mut b = canvas(&theme);
        stars(&mut a, &theme, 20).unwrap();
        stars(&mut b, &theme, 20).unwrap();
        assert_eq!(a.encode_png().unwrap(), b.encode_png().unwrap());
    }

    #[test]
    fn test_stars_stay_in_the_sky() {
        let theme = Theme::default();
        let mut c = canvas(&theme);
        stars(&mut c, &theme, 50).unwrap();

        for y in theme.size.horizon() as u32..theme.size.height {
            for x in 0..theme.size.width {
                assert_eq!(c.pixel(x, y), Some(Rgb::WHITE));
            }
        }
    }
}
