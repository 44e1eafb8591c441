//! Reusable drawing primitives.
//!
//! Each primitive paints one visual element anchored at `(x, y)` onto the
//! canvas it is given and touches nothing else. Parts are drawn in a fixed
//! order, so calling a primitive twice on equal canvases yields equal pixels.
//! Anything that falls outside the canvas is clipped.

mod figures;
mod props;
mod sky;
mod terrain;

pub use figures::{boy, sad_boy, sheep, villager, wolf};
pub use props::{carried_sheep, cottage, distant_house, heart, speech_bubble, thought_bulb, tool};
pub use sky::{cloud, moon, sky_and_grass, stars, sun};
pub use terrain::{fence, mountains, tree};

/// Pixel height of text drawn inside illustrations
pub const SCENE_TEXT_SIZE: f32 = 20.0;

/// Face and arm state of the boy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pose {
    pub mouth_open: bool,
    pub arms_up: bool,
}

impl Pose {
    /// Arms down, smiling
    pub const CALM: Pose = Pose {
        mouth_open: false,
        arms_up: false,
    };

    /// Arms down, mouth open
    pub const LAUGHING: Pose = Pose {
        mouth_open: true,
        arms_up: false,
    };

    /// Arms raised, mouth open
    pub const SHOUTING: Pose = Pose {
        mouth_open: true,
        arms_up: true,
    };
}

/// Villager expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Calm,
    Angry,
}

/// What a villager carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Stick,
    Hoe,
}

/// Scale an offset, truncating toward zero
pub(crate) fn scaled(offset: i32, scale: f64) -> i32 {
    (offset as f64 * scale) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_truncates_toward_zero() {
        assert_eq!(scaled(25, 0.9), 22);
        assert_eq!(scaled(-25, 0.9), -22);
        assert_eq!(scaled(35, 1.2), 42);
        assert_eq!(scaled(15, 1.3), 19);
        assert_eq!(scaled(6, 1.0), 6);
    }
}
