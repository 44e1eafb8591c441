//! Named colors and the fixed illustration size.
//!
//! A [`Theme`] is built once per run and passed by reference to every
//! primitive and scene, so nothing reads global drawing state.

use fabledeck_raster::Rgb;

/// Symbolic colors used by the story illustrations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub sky_blue: Rgb,
    pub grass_green: Rgb,
    pub light_green: Rgb,
    pub sun_yellow: Rgb,
    pub skin: Rgb,
    pub brown: Rgb,
    pub dark_brown: Rgb,
    pub white: Rgb,
    pub black: Rgb,
    pub red: Rgb,
    pub gray: Rgb,
    pub dark_gray: Rgb,
    pub orange: Rgb,
    pub night_blue: Rgb,
    pub dark_green: Rgb,
    pub pink: Rgb,
    pub light_yellow: Rgb,
    pub wolf_gray: Rgb,

    /// Near and far hills
    pub hill_near: Rgb,
    pub hill_far: Rgb,
    pub tear: Rgb,

    /// Villager clothing
    pub villager_blue: Rgb,
    pub villager_red: Rgb,
    pub villager_green: Rgb,

    /// Sky tints for the second half of the story
    pub danger_sky: Rgb,
    pub dusk_sky: Rgb,
    pub regret_sky: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky_blue: Rgb::new(135, 206, 235),
            grass_green: Rgb::new(34, 139, 34),
            light_green: Rgb::new(144, 238, 144),
            sun_yellow: Rgb::new(255, 223, 0),
            skin: Rgb::new(255, 224, 189),
            brown: Rgb::new(139, 69, 19),
            dark_brown: Rgb::new(101, 67, 33),
            white: Rgb::WHITE,
            black: Rgb::BLACK,
            red: Rgb::new(220, 20, 60),
            gray: Rgb::new(128, 128, 128),
            dark_gray: Rgb::new(80, 80, 80),
            orange: Rgb::new(255, 165, 0),
            night_blue: Rgb::new(25, 25, 112),
            dark_green: Rgb::new(0, 100, 0),
            pink: Rgb::new(255, 182, 193),
            light_yellow: Rgb::new(255, 255, 224),
            wolf_gray: Rgb::new(105, 105, 105),

            hill_near: Rgb::new(100, 160, 100),
            hill_far: Rgb::new(80, 140, 80),
            tear: Rgb::new(0, 150, 255),

            villager_blue: Rgb::new(0, 0, 200),
            villager_red: Rgb::new(200, 0, 0),
            villager_green: Rgb::new(0, 150, 0),

            danger_sky: Rgb::new(200, 150, 150),
            dusk_sky: Rgb::new(180, 140, 140),
            regret_sky: Rgb::new(170, 190, 220),
        }
    }
}

/// Pixel size of every illustration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// 16:9 illustration size
    pub const STORYBOOK: CanvasSize = CanvasSize {
        width: 960,
        height: 540,
    };

    /// Row where the sky meets the grass
    pub fn horizon(&self) -> i32 {
        (self.height * 2 / 3) as i32
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::STORYBOOK
    }
}

/// Everything a primitive needs besides its canvas and arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub size: CanvasSize,
}
