//! Buildings, bubbles and small objects.

use fabledeck_raster::{BBox, Canvas, Result, Rgb, ShapeStyle};

use super::{Tool, SCENE_TEXT_SIZE};
use crate::palette::Theme;

/// Village house whose wall's top-left corner is `(x, y)`
pub fn cottage(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    let p = &theme.palette;
    canvas.rectangle(BBox::new(x, y, x + 80, y + 80), ShapeStyle::fill(p.orange))?;
    canvas.polygon(
        &[(x - 10, y), (x + 40, y - 40), (x + 90, y)],
        ShapeStyle::fill(p.red),
    )?;
    canvas.rectangle(BBox::new(x + 30, y + 40, x + 50, y + 80), ShapeStyle::fill(p.brown))
}

/// Smaller, doorless house seen from far away
pub fn distant_house(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    let p = &theme.palette;
    canvas.rectangle(BBox::new(x, y, x + 50, y + 60), ShapeStyle::fill(p.orange))?;
    canvas.polygon(
        &[(x - 5, y), (x + 25, y - 30), (x + 55, y)],
        ShapeStyle::fill(p.red),
    )
}

/// White oval bubble outlined in `ink`, with `text` in the same color
pub fn speech_bubble(
    canvas: &mut Canvas,
    theme: &Theme,
    bbox: BBox,
    ink: Rgb,
    width: u32,
    text: &str,
    text_at: (i32, i32),
) -> Result<()> {
    canvas.ellipse(bbox, ShapeStyle::fill(theme.palette.white).outlined(ink, width))?;
    canvas.text(text_at, text, ink, SCENE_TEXT_SIZE)
}

/// Thought bubble holding a light bulb; `(x, y)` is the bubble's top-left
pub fn thought_bulb(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    let p = &theme.palette;
    canvas.ellipse(
        BBox::new(x, y, x + 80, y + 50),
        ShapeStyle::fill(p.light_yellow).outlined(p.black, 2),
    )?;
    canvas.ellipse(
        BBox::new(x + 30, y + 10, x + 50, y + 35),
        ShapeStyle::fill(p.sun_yellow),
    )?;
    // Screw base
    canvas.line((x + 40, y + 35), (x + 40, y + 45), p.dark_gray, 2)
}

/// Four-point heart hanging from its top vertex
pub fn heart(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    canvas.polygon(
        &[(x - 10, y + 10), (x, y), (x + 10, y + 10), (x, y + 25)],
        ShapeStyle::fill(theme.palette.red),
    )
}

/// A lamb in the wolf's jaws, drawn as a single outlined oval
pub fn carried_sheep(canvas: &mut Canvas, theme: &Theme, x: i32, y: i32) -> Result<()> {
    canvas.ellipse(
        BBox::new(x, y, x + 40, y + 25),
        ShapeStyle::fill(theme.palette.white).outlined(theme.palette.black, 2),
    )
}

/// Handle held at `(x, y)`, leaning up and to the right
pub fn tool(canvas: &mut Canvas, theme: &Theme, kind: Tool, x: i32, y: i32) -> Result<()> {
    let color = match kind {
        Tool::Stick => theme.palette.brown,
        Tool::Hoe => theme.palette.gray,
    };
    canvas.line((x, y), (x + 20, y - 30), color, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabledeck_raster::FontBook;

    fn canvas() -> Canvas {
        Canvas::new(960, 540, Rgb::WHITE, FontBook::empty()).unwrap()
    }

    #[test]
    fn test_cottage_door_over_wall() {
        let theme = Theme::default();
        let mut c = canvas();
        cottage(&mut c, &theme, 150, 280).unwrap();

        assert_eq!(c.pixel(160, 300), Some(theme.palette.orange));
        assert_eq!(c.pixel(190, 340), Some(theme.palette.brown));
        assert_eq!(c.pixel(190, 260), Some(theme.palette.red));
    }

    #[test]
    fn test_distant_house_has_no_door() {
        let theme = Theme::default();
        let mut c = canvas();
        distant_house(&mut c, &theme, 700, 300).unwrap();

        assert_eq!(c.pixel(725, 350), Some(theme.palette.orange));
        assert_eq!(c.pixel(725, 285), Some(theme.palette.red));
    }

    #[test]
    fn test_speech_bubble_outline_color() {
        let theme = Theme::default();
        let mut c = canvas();
        let ink = theme.palette.red;
        speech_bubble(&mut c, &theme, BBox::new(330, 230, 500, 280), ink, 3, "!", (355, 245))
            .unwrap();

        assert_eq!(c.pixel(331, 255), Some(ink));
        assert_eq!(c.pixel(415, 255), Some(theme.palette.white));
    }

    #[test]
    fn test_speech_bubble_rejects_inverted_box() {
        let theme = Theme::default();
        let mut c = canvas();
        let err = speech_bubble(
            &mut c,
            &theme,
            BBox::new(500, 230, 330, 280),
            theme.palette.black,
            2,
            "...",
            (340, 260),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            fabledeck_raster::RasterError::DegenerateShape { shape: "ellipse", .. }
        ));
    }

    #[test]
    fn test_thought_bulb() {
        let theme = Theme::default();
        let mut c = canvas();
        thought_bulb(&mut c, &theme, 310, 240).unwrap();

        assert_eq!(c.pixel(350, 262), Some(theme.palette.sun_yellow));
        assert_eq!(c.pixel(320, 265), Some(theme.palette.light_yellow));
        assert_eq!(c.pixel(350, 281), Some(theme.palette.dark_gray));
    }

    #[test]
    fn test_tools_differ_by_kind() {
        let theme = Theme::default();
        let mut c = canvas();
        tool(&mut c, &theme, Tool::Stick, 615, 320).unwrap();
        tool(&mut c, &theme, Tool::Hoe, 695, 315).unwrap();

        assert_eq!(c.pixel(625, 305), Some(theme.palette.brown));
        assert_eq!(c.pixel(705, 300), Some(theme.palette.gray));
    }

    #[test]
    fn test_heart_and_carried_sheep() {
        let theme = Theme::default();
        let mut c = canvas();
        heart(&mut c, &theme, 460, 280).unwrap();
        carried_sheep(&mut c, &theme, 540, 310).unwrap();

        assert_eq!(c.pixel(460, 292), Some(theme.palette.red));
        assert_eq!(c.pixel(560, 322), Some(theme.palette.white));
        assert_eq!(c.pixel(540, 322), Some(theme.palette.black));
    }
}
