//! People and animals.
//!
//! Figures are anchored at the top of the torso (people) or the center of the
//! body (animals). Animal offsets are multiplied by `scale` and truncated.

use fabledeck_raster::{BBox, Canvas, Result, Rgb, ShapeStyle};

use super::{scaled, Mood, Pose};
use crate::palette::Theme;

/// The shepherd boy
pub fn boy(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32, pose: Pose) -> Result<()> {
    let p = &theme.palette;
    child_torso_and_head(canvas, theme, x, y)?;

    canvas.ellipse(BBox::new(x - 8, y - 20, x - 4, y - 14), ShapeStyle::fill(p.black))?;
    canvas.ellipse(BBox::new(x + 4, y - 20, x + 8, y - 14), ShapeStyle::fill(p.black))?;

    if pose.mouth_open {
        canvas.ellipse(BBox::new(x - 5, y - 10, x + 5, y - 2), ShapeStyle::fill(p.black))?;
    } else {
        canvas.arc(BBox::new(x - 5, y - 12, x + 5, y - 4), 0.0, 180.0, p.black, 2)?;
    }

    hair(canvas, theme, x, y)?;

    if pose.arms_up {
        canvas.line((x - 12, y + 5), (x - 30, y - 15), p.skin, 4)?;
        canvas.line((x + 12, y + 5), (x + 30, y - 15), p.skin, 4)?;
    } else {
        arms_down(canvas, theme, x, y)?;
    }

    child_legs(canvas, theme, x, y)
}

/// The boy crying, eyes shut and tears running
pub fn sad_boy(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    let p = &theme.palette;
    child_torso_and_head(canvas, theme, x, y)?;

    canvas.arc(BBox::new(x - 9, y - 20, x - 3, y - 14), 0.0, 180.0, p.black, 2)?;
    canvas.arc(BBox::new(x + 3, y - 20, x + 9, y - 14), 0.0, 180.0, p.black, 2)?;

    canvas.ellipse(BBox::new(x - 10, y - 13, x - 7, y - 8), ShapeStyle::fill(p.tear))?;
    canvas.ellipse(BBox::new(x + 7, y - 13, x + 10, y - 8), ShapeStyle::fill(p.tear))?;

    canvas.arc(BBox::new(x - 5, y - 8, x + 5, y - 2), 180.0, 360.0, p.black, 2)?;

    hair(canvas, theme, x, y)?;
    arms_down(canvas, theme, x, y)?;
    child_legs(canvas, theme, x, y)
}

/// A villager in `clothes`
pub fn villager(
    canvas: &mut Canvas,
    theme: &Theme,
    x: i32,
    y: i32,
    clothes: Rgb,
    mood: Mood,
) -> Result<()> {
    let p = &theme.palette;
    canvas.rectangle(BBox::new(x - 10, y, x + 10, y + 35), ShapeStyle::fill(clothes))?;
    canvas.ellipse(BBox::new(x - 12, y - 25, x + 12, y), ShapeStyle::fill(p.skin))?;

    match mood {
        Mood::Calm => {
            canvas.ellipse(BBox::new(x - 6, y - 17, x - 2, y - 12), ShapeStyle::fill(p.black))?;
            canvas.ellipse(BBox::new(x + 2, y - 17, x + 6, y - 12), ShapeStyle::fill(p.black))?;
            canvas.arc(BBox::new(x - 4, y - 10, x + 4, y - 4), 0.0, 180.0, p.black, 2)?;
        }
        Mood::Angry => {
            // Slanted brows
            canvas.line((x - 8, y - 20), (x - 2, y - 17), p.black, 2)?;
            canvas.line((x + 2, y - 17), (x + 8, y - 20), p.black, 2)?;
            canvas.ellipse(BBox::new(x - 7, y - 16, x - 3, y - 12), ShapeStyle::fill(p.black))?;
            canvas.ellipse(BBox::new(x + 3, y - 16, x + 7, y - 12), ShapeStyle::fill(p.black))?;
            canvas.arc(BBox::new(x - 4, y - 8, x + 4, y - 2), 180.0, 360.0, p.black, 2)?;
        }
    }

    canvas.line((x - 5, y + 35), (x - 8, y + 52), p.brown, 3)?;
    canvas.line((x + 5, y + 35), (x + 8, y + 52), p.brown, 3)
}

/// A sheep facing right
pub fn sheep(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32, scale: f64) -> Result<()> {
    let p = &theme.palette;
    let s = |v: i32| scaled(v, scale);
    let wool = ShapeStyle::fill(p.white).outlined(p.black, 2);

    canvas.ellipse(BBox::new(x - s(25), y - s(15), x + s(25), y + s(15)), wool)?;
    canvas.ellipse(BBox::new(x + s(20), y - s(20), x + s(38), y - s(2)), wool)?;
    canvas.ellipse(
        BBox::new(x + s(28), y - s(15), x + s(32), y - s(11)),
        ShapeStyle::fill(p.black),
    )?;

    for lx in [-15, -5, 5, 15] {
        canvas.line((x + s(lx), y + s(15)), (x + s(lx), y + s(30)), p.black, 2)?;
    }
    Ok(())
}

/// The big grey wolf, facing right with red eyes
pub fn wolf(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32, scale: f64) -> Result<()> {
    let p = &theme.palette;
    let s = |v: i32| scaled(v, scale);
    let fur = ShapeStyle::fill(p.wolf_gray).outlined(p.dark_gray, 2);
    let ear = ShapeStyle::fill(p.wolf_gray).outlined(p.dark_gray, 1);

    canvas.ellipse(BBox::new(x - s(35), y - s(18), x + s(35), y + s(18)), fur)?;
    canvas.ellipse(BBox::new(x + s(25), y - s(30), x + s(55), y - s(5)), fur)?;

    canvas.polygon(
        &[
            (x + s(32), y - s(30)),
            (x + s(28), y - s(45)),
            (x + s(38), y - s(30)),
        ],
        ear,
    )?;
    canvas.polygon(
        &[
            (x + s(42), y - s(30)),
            (x + s(45), y - s(48)),
            (x + s(50), y - s(30)),
        ],
        ear,
    )?;

    canvas.ellipse(
        BBox::new(x + s(35), y - s(24), x + s(42), y - s(17)),
        ShapeStyle::fill(p.red),
    )?;
    canvas.ellipse(
        BBox::new(x + s(38), y - s(22), x + s(40), y - s(19)),
        ShapeStyle::fill(p.black),
    )?;
    // Nose
    canvas.ellipse(
        BBox::new(x + s(50), y - s(20), x + s(55), y - s(15)),
        ShapeStyle::fill(p.black),
    )?;
    canvas.arc(
        BBox::new(x + s(40), y - s(15), x + s(55), y - s(5)),
        0.0,
        180.0,
        p.black,
        2,
    )?;

    // Tail
    canvas.arc(
        BBox::new(x - s(35), y - s(25), x - s(15), y + s(5)),
        180.0,
        320.0,
        p.wolf_gray,
        s(6).max(0) as u32,
    )?;

    let leg_width = s(3).max(0) as u32;
    for lx in [-20, -8, 8, 20] {
        canvas.line(
            (x + s(lx), y + s(18)),
            (x + s(lx), y + s(35)),
            p.dark_gray,
            leg_width,
        )?;
    }
    Ok(())
}

fn child_torso_and_head(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    canvas.rectangle(
        BBox::new(x - 12, y, x + 12, y + 40),
        ShapeStyle::fill(theme.palette.red),
    )?;
    canvas.ellipse(
        BBox::new(x - 15, y - 30, x + 15, y),
        ShapeStyle::fill(theme.palette.skin),
    )
}

fn hair(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    canvas.arc(
        BBox::new(x - 15, y - 35, x + 15, y - 10),
        180.0,
        360.0,
        theme.palette.dark_brown,
        4,
    )
}

fn arms_down(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    canvas.line((x - 12, y + 5), (x - 25, y + 25), theme.palette.skin, 4)?;
    canvas.line((x + 12, y + 5), (x + 25, y + 25), theme.palette.skin, 4)
}

fn child_legs(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    canvas.line((x - 6, y + 40), (x - 10, y + 60), theme.palette.brown, 4)?;
    canvas.line((x + 6, y + 40), (x + 10, y + 60), theme.palette.brown, 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabledeck_raster::FontBook;

    fn canvas() -> Canvas {
        Canvas::new(960, 540, Rgb::WHITE, FontBook::empty()).unwrap()
    }

    #[test]
    fn test_boy_parts() {
        let theme = Theme::default();
        let mut c = canvas();
        boy(&mut c, &theme, 300, 310, Pose::CALM).unwrap();

        assert_eq!(c.pixel(300, 330), Some(theme.palette.red));
        assert_eq!(c.pixel(300, 295), Some(theme.palette.skin));
        assert_eq!(c.pixel(294, 293), Some(theme.palette.black));
    }

    #[test]
    fn test_boy_pose_changes_mouth_and_arms() {
        let theme = Theme::default();
        let mut calm = canvas();
        let mut shouting = canvas();
        boy(&mut calm, &theme, 300, 310, Pose::CALM).unwrap();
        boy(&mut shouting, &theme, 300, 310, Pose::SHOUTING).unwrap();

        // Open mouth fills the center of the lower face
        assert_eq!(shouting.pixel(300, 304), Some(theme.palette.black));
        assert_eq!(calm.pixel(300, 304), Some(theme.palette.skin));

        // Raised arm reaches above the shoulders
        assert_eq!(shouting.pixel(279, 305), Some(theme.palette.skin));
        assert_eq!(calm.pixel(279, 305), Some(Rgb::WHITE));
    }

    #[test]
    fn test_sad_boy_has_tears() {
        let theme = Theme::default();
        let mut c = canvas();
        sad_boy(&mut c, &theme, 200, 310).unwrap();
        assert_eq!(c.pixel(191, 299), Some(theme.palette.tear));
        assert_eq!(c.pixel(208, 299), Some(theme.palette.tear));
    }

    #[test]
    fn test_villager_moods_differ() {
        let theme = Theme::default();
        let mut calm = canvas();
        let mut angry = canvas();
        villager(&mut calm, &theme, 600, 320, theme.palette.villager_blue, Mood::Calm).unwrap();
        villager(&mut angry, &theme, 600, 320, theme.palette.villager_blue, Mood::Angry).unwrap();

        assert_eq!(calm.pixel(600, 330), Some(theme.palette.villager_blue));
        assert_ne!(calm.encode_png().unwrap(), angry.encode_png().unwrap());
    }

    #[test]
    fn test_sheep_scale() {
        let theme = Theme::default();
        let mut small = canvas();
        let mut big = canvas();
        sheep(&mut small, &theme, 400, 350, 1.0).unwrap();
        sheep(&mut big, &theme, 400, 350, 2.0).unwrap();

        // Outline at the left edge of the unscaled body
        assert_eq!(small.pixel(375, 351), Some(theme.palette.black));
        assert_eq!(small.pixel(360, 351), Some(Rgb::WHITE));
        assert_eq!(big.pixel(360, 351), Some(theme.palette.white));
    }

    #[test]
    fn test_wolf_red_eye() {
        let theme = Theme::default();
        let mut c = canvas();
        wolf(&mut c, &theme, 700, 350, 1.2).unwrap();

        // Eye spans x+42..x+50, y-28..y-20 at this scale; this pixel misses the pupil
        assert_eq!(c.pixel(748, 324), Some(theme.palette.red));
        assert_eq!(c.pixel(700, 350), Some(theme.palette.wolf_gray));
    }
}
