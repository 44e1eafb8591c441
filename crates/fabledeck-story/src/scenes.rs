//! Scene compositor.
//!
//! One function per story beat. Every scene paints an opaque full-bleed
//! background first, then calls primitives in a fixed order, so later
//! primitives cover earlier ones. All positions are literals laid out for a
//! 960×540 canvas.

use std::fmt;

use fabledeck_raster::{BBox, Canvas, FontBook, Result, Rgb};
use serde::{Deserialize, Serialize};

use crate::palette::Theme;
use crate::primitives::{
    boy, carried_sheep, cloud, cottage, distant_house, fence, heart, mountains, sad_boy, sheep,
    sky_and_grass, speech_bubble, sun, thought_bulb, tool, tree, villager, wolf, Mood, Pose, Tool,
    SCENE_TEXT_SIZE,
};

/// A story beat with its own illustration.
///
/// The snake_case name is the external identifier used in story tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    Cover,
    Village,
    BoyIntro,
    Bored,
    Idea,
    FirstCry,
    VillagersRun,
    NoWolf,
    VillagersLeave,
    SecondCry,
    VillagersRunAgain,
    NoWolfAgain,
    VillagersFurious,
    WolfComes,
    CriesForHelp,
    NobodyComes,
    WolfAttack,
    BoyRegrets,
    Lesson,
    Ending,
}

impl Scene {
    /// Every scene, in story order
    pub const ALL: [Scene; 20] = [
        Scene::Cover,
        Scene::Village,
        Scene::BoyIntro,
        Scene::Bored,
        Scene::Idea,
        Scene::FirstCry,
        Scene::VillagersRun,
        Scene::NoWolf,
        Scene::VillagersLeave,
        Scene::SecondCry,
        Scene::VillagersRunAgain,
        Scene::NoWolfAgain,
        Scene::VillagersFurious,
        Scene::WolfComes,
        Scene::CriesForHelp,
        Scene::NobodyComes,
        Scene::WolfAttack,
        Scene::BoyRegrets,
        Scene::Lesson,
        Scene::Ending,
    ];

    /// External name, as written in story tables
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Cover => "cover",
            Scene::Village => "village",
            Scene::BoyIntro => "boy_intro",
            Scene::Bored => "bored",
            Scene::Idea => "idea",
            Scene::FirstCry => "first_cry",
            Scene::VillagersRun => "villagers_run",
            Scene::NoWolf => "no_wolf",
            Scene::VillagersLeave => "villagers_leave",
            Scene::SecondCry => "second_cry",
            Scene::VillagersRunAgain => "villagers_run_again",
            Scene::NoWolfAgain => "no_wolf_again",
            Scene::VillagersFurious => "villagers_furious",
            Scene::WolfComes => "wolf_comes",
            Scene::CriesForHelp => "cries_for_help",
            Scene::NobodyComes => "nobody_comes",
            Scene::WolfAttack => "wolf_attack",
            Scene::BoyRegrets => "boy_regrets",
            Scene::Lesson => "lesson",
            Scene::Ending => "ending",
        }
    }

    /// Paint this scene onto `canvas`
    pub fn draw(&self, canvas: &mut Canvas, theme: &Theme) -> Result<()> {
        match self {
            Scene::Cover => cover(canvas, theme),
            Scene::Village => village(canvas, theme),
            Scene::BoyIntro => boy_intro(canvas, theme),
            Scene::Bored => bored(canvas, theme),
            Scene::Idea => idea(canvas, theme),
            Scene::FirstCry => first_cry(canvas, theme),
            Scene::VillagersRun => villagers_run(canvas, theme),
            Scene::NoWolf => no_wolf(canvas, theme),
            Scene::VillagersLeave => villagers_leave(canvas, theme),
            Scene::SecondCry => second_cry(canvas, theme),
            Scene::VillagersRunAgain => villagers_run_again(canvas, theme),
            Scene::NoWolfAgain => no_wolf_again(canvas, theme),
            Scene::VillagersFurious => villagers_furious(canvas, theme),
            Scene::WolfComes => wolf_comes(canvas, theme),
            Scene::CriesForHelp => cries_for_help(canvas, theme),
            Scene::NobodyComes => nobody_comes(canvas, theme),
            Scene::WolfAttack => wolf_attack(canvas, theme),
            Scene::BoyRegrets => boy_regrets(canvas, theme),
            Scene::Lesson => lesson(canvas, theme),
            Scene::Ending => ending(canvas, theme),
        }
    }

    /// Draw onto a fresh canvas and encode it as PNG
    pub fn render(&self, theme: &Theme, fonts: &FontBook) -> Result<Vec<u8>> {
        let mut canvas = Canvas::new(
            theme.size.width,
            theme.size.height,
            Rgb::WHITE,
            fonts.clone(),
        )?;
        self.draw(&mut canvas, theme)?;
        canvas.encode_png()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default sun in the top-right corner
fn morning_sun(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    sun(canvas, theme, 860, 60, 40)
}

fn clear_day(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    sky_and_grass(canvas, theme, theme.palette.sky_blue)?;
    morning_sun(canvas, theme)
}

fn label(canvas: &mut Canvas, at: (i32, i32), text: &str, color: Rgb) -> Result<()> {
    canvas.text(at, text, color, SCENE_TEXT_SIZE)
}

fn cover(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    clear_day(canvas, theme)?;
    cloud(canvas, theme, 150, 80)?;
    cloud(canvas, theme, 450, 50)?;
    mountains(canvas, theme)?;
    boy(canvas, theme, 350, 300, Pose::CALM)?;
    sheep(canvas, theme, 500, 340, 1.0)?;
    sheep(canvas, theme, 600, 350, 1.0)?;
    wolf(canvas, theme, 150, 380, 0.9)
}

fn village(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    clear_day(canvas, theme)?;
    cloud(canvas, theme, 200, 70)?;
    mountains(canvas, theme)?;
    for hx in [150, 400, 650] {
        cottage(canvas, theme, hx, 280)?;
    }
    tree(canvas, theme, 80, 300)?;
    tree(canvas, theme, 800, 310)
}

fn boy_intro(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    clear_day(canvas, theme)?;
    cloud(canvas, theme, 300, 60)?;
    boy(canvas, theme, 250, 310, Pose::CALM)?;
    sheep(canvas, theme, 400, 350, 1.0)?;
    sheep(canvas, theme, 500, 340, 1.0)?;
    sheep(canvas, theme, 600, 355, 1.0)?;
    fence(canvas, theme, 350, 400, 8)
}

fn bored(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let p = &theme.palette;
    clear_day(canvas, theme)?;
    cloud(canvas, theme, 500, 50)?;
    boy(canvas, theme, 300, 310, Pose::CALM)?;
    speech_bubble(canvas, theme, BBox::new(320, 250, 420, 290), p.black, 2, "...", (340, 260))?;
    sheep(canvas, theme, 550, 350, 1.0)?;
    sheep(canvas, theme, 650, 345, 1.0)?;
    sheep(canvas, theme, 480, 360, 1.0)
}

fn idea(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    clear_day(canvas, theme)?;
    boy(canvas, theme, 300, 310, Pose::CALM)?;
    thought_bulb(canvas, theme, 310, 240)?;
    sheep(canvas, theme, 550, 350, 1.0)?;
    sheep(canvas, theme, 650, 345, 1.0)
}

fn first_cry(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let p = &theme.palette;
    clear_day(canvas, theme)?;
    cloud(canvas, theme, 200, 60)?;
    boy(canvas, theme, 300, 310, Pose::SHOUTING)?;
    speech_bubble(canvas, theme, BBox::new(330, 230, 500, 280), p.red, 3, "狼来了!", (355, 245))?;
    sheep(canvas, theme, 550, 350, 1.0)?;
    sheep(canvas, theme, 650, 345, 1.0)
}

/// The three villagers climbing the hill, in blue, red and green
fn villager_crowd(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let p = &theme.palette;
    villager(canvas, theme, 600, 320, p.villager_blue, Mood::Calm)?;
    villager(canvas, theme, 680, 315, p.villager_red, Mood::Calm)?;
    villager(canvas, theme, 760, 325, p.villager_green, Mood::Calm)
}

fn villagers_run(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    clear_day(canvas, theme)?;
    villager_crowd(canvas, theme)?;
    tool(canvas, theme, Tool::Stick, 615, 320)?;
    tool(canvas, theme, Tool::Hoe, 695, 315)?;
    boy(canvas, theme, 300, 310, Pose::SHOUTING)?;
    sheep(canvas, theme, 450, 350, 1.0)
}

fn no_wolf(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let p = &theme.palette;
    clear_day(canvas, theme)?;
    cloud(canvas, theme, 400, 50)?;
    boy(canvas, theme, 300, 310, Pose::LAUGHING)?;
    label(canvas, (280, 260), "哈哈哈", p.red)?;
    villager(canvas, theme, 500, 320, p.villager_blue, Mood::Calm)?;
    villager(canvas, theme, 580, 315, p.villager_red, Mood::Calm)?;
    label(canvas, (505, 280), "?", p.black)?;
    label(canvas, (585, 275), "?", p.black)?;
    sheep(canvas, theme, 700, 350, 1.0)
}

fn villagers_leave(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let p = &theme.palette;
    clear_day(canvas, theme)?;
    villager(canvas, theme, 600, 320, p.villager_blue, Mood::Angry)?;
    villager(canvas, theme, 700, 315, p.villager_red, Mood::Angry)?;
    villager(canvas, theme, 800, 325, p.villager_green, Mood::Angry)?;
    boy(canvas, theme, 250, 310, Pose::LAUGHING)?;
    label(canvas, (230, 260), "哈哈", p.red)?;
    sheep(canvas, theme, 400, 350, 1.0)
}

fn second_cry(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let p = &theme.palette;
    sky_and_grass(canvas, theme, p.sky_blue)?;
    sun(canvas, theme, 860, 80, 40)?;
    cloud(canvas, theme, 700, 60)?;
    boy(canvas, theme, 300, 310, Pose::SHOUTING)?;
    speech_bubble(canvas, theme, BBox::new(330, 225, 520, 275), p.red, 3, "狼来了!!", (350, 238))?;
    sheep(canvas, theme, 550, 350, 1.0)?;
    sheep(canvas, theme, 650, 345, 1.0)
}

fn villagers_run_again(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    clear_day(canvas, theme)?;
    villager_crowd(canvas, theme)?;
    boy(canvas, theme, 300, 310, Pose::SHOUTING)?;
    sheep(canvas, theme, 450, 350, 1.0)?;
    cloud(canvas, theme, 200, 50)
}

fn no_wolf_again(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let p = &theme.palette;
    clear_day(canvas, theme)?;
    boy(canvas, theme, 300, 310, Pose::LAUGHING)?;
    label(canvas, (275, 260), "哈哈哈哈", p.red)?;
    villager(canvas, theme, 520, 320, p.villager_blue, Mood::Angry)?;
    villager(canvas, theme, 620, 315, p.villager_red, Mood::Angry)?;
    sheep(canvas, theme, 700, 350, 1.0)
}

fn villagers_furious(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let p = &theme.palette;
    clear_day(canvas, theme)?;
    villager(canvas, theme, 550, 320, p.villager_blue, Mood::Angry)?;
    villager(canvas, theme, 650, 315, p.villager_red, Mood::Angry)?;
    villager(canvas, theme, 750, 320, p.villager_green, Mood::Angry)?;
    // Anger marks
    label(canvas, (555, 280), "╬", p.red)?;
    label(canvas, (660, 275), "╬", p.red)?;
    boy(canvas, theme, 250, 310, Pose::CALM)?;
    sheep(canvas, theme, 400, 350, 1.0)
}

fn wolf_comes(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let p = &theme.palette;
    sky_and_grass(canvas, theme, p.danger_sky)?;
    cloud(canvas, theme, 300, 60)?;
    wolf(canvas, theme, 700, 350, 1.2)?;
    sheep(canvas, theme, 450, 350, 1.0)?;
    sheep(canvas, theme, 350, 360, 1.0)?;
    boy(canvas, theme, 200, 310, Pose::CALM)?;
    label(canvas, (170, 260), "!!!", p.red)
}

fn cries_for_help(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let p = &theme.palette;
    sky_and_grass(canvas, theme, p.danger_sky)?;
    boy(canvas, theme, 250, 310, Pose::SHOUTING)?;
    speech_bubble(canvas, theme, BBox::new(270, 225, 460, 275), p.red, 3, "救命啊!", (285, 237))?;
    wolf(canvas, theme, 650, 350, 1.2)?;
    sheep(canvas, theme, 450, 360, 1.0)
}

fn nobody_comes(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    sky_and_grass(canvas, theme, theme.palette.dusk_sky)?;
    sad_boy(canvas, theme, 200, 310)?;
    wolf(canvas, theme, 600, 340, 1.2)?;
    sheep(canvas, theme, 400, 360, 1.0)?;
    // The village stays shut
    for hx in [700, 800] {
        distant_house(canvas, theme, hx, 300)?;
    }
    Ok(())
}

fn wolf_attack(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    sky_and_grass(canvas, theme, theme.palette.dusk_sky)?;
    wolf(canvas, theme, 500, 340, 1.3)?;
    carried_sheep(canvas, theme, 540, 310)?;
    sad_boy(canvas, theme, 200, 310)
}

fn boy_regrets(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    sky_and_grass(canvas, theme, theme.palette.regret_sky)?;
    sad_boy(canvas, theme, 480, 310)?;
    // An empty pasture
    fence(canvas, theme, 200, 400, 8)?;
    tree(canvas, theme, 100, 300)?;
    cloud(canvas, theme, 600, 60)
}

fn lesson(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    let p = &theme.palette;
    sky_and_grass(canvas, theme, p.sky_blue)?;
    sun(canvas, theme, 480, 80, 50)?;
    cloud(canvas, theme, 150, 50)?;
    cloud(canvas, theme, 750, 70)?;
    boy(canvas, theme, 350, 320, Pose::CALM)?;
    villager(canvas, theme, 550, 320, p.villager_blue, Mood::Calm)?;
    villager(canvas, theme, 650, 315, p.villager_red, Mood::Calm)?;
    heart(canvas, theme, 460, 280)
}

fn ending(canvas: &mut Canvas, theme: &Theme) -> Result<()> {
    sky_and_grass(canvas, theme, theme.palette.sky_blue)?;
    sun(canvas, theme, 480, 100, 55)?;
    cloud(canvas, theme, 100, 60)?;
    cloud(canvas, theme, 800, 80)?;
    tree(canvas, theme, 100, 300)?;
    tree(canvas, theme, 850, 310)?;
    sheep(canvas, theme, 400, 370, 1.0)?;
    sheep(canvas, theme, 500, 375, 1.0)?;
    sheep(canvas, theme, 600, 365, 1.0)?;
    boy(canvas, theme, 300, 330, Pose::CALM)?;
    fence(canvas, theme, 350, 420, 10)
}
