//! The slide table: which scene, title and body text goes on each page.
//!
//! Tables are either built in code ([`StoryTable::wolf_story`]) or loaded
//! from TOML:
//!
//! ```toml
//! [[slides]]
//! scene = "cover"
//! title = "狼 来 了"
//! body = "——中国经典寓言故事——\n幼儿园绘本"
//! title_size = 44
//! body_size = 24
//! ```
//!
//! Scene names are resolved while deserializing, so a table that names an
//! unknown scene never loads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoryError};
use crate::scenes::Scene;

/// Largest accepted font size, in points
pub const MAX_FONT_SIZE: u32 = 400;

/// One page of the deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    /// Illustration filling the page
    pub scene: Scene,

    /// Heading above the illustration; empty for none
    #[serde(default)]
    pub title: String,

    /// Caption lines separated by `\n`; empty for none
    #[serde(default)]
    pub body: String,

    /// Title size in points
    #[serde(default = "default_title_size")]
    pub title_size: u32,

    /// Body size in points
    #[serde(default = "default_body_size")]
    pub body_size: u32,
}

fn default_title_size() -> u32 {
    36
}

fn default_body_size() -> u32 {
    22
}

impl SlideRecord {
    /// A page with a body caption and no title
    pub fn new(scene: Scene, body: impl Into<String>) -> Self {
        Self {
            scene,
            title: String::new(),
            body: body.into(),
            title_size: default_title_size(),
            body_size: default_body_size(),
        }
    }

    /// Set the title and its size
    pub fn with_title(mut self, title: impl Into<String>, size: u32) -> Self {
        self.title = title.into();
        self.title_size = size;
        self
    }

    /// Set the body size
    pub fn with_body_size(mut self, size: u32) -> Self {
        self.body_size = size;
        self
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Body split into paragraphs. Empty when there is no body.
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.has_body()
            .then(|| self.body.split('\n'))
            .into_iter()
            .flatten()
    }

    fn validate(&self, index: usize) -> Result<()> {
        for (field, size) in [("title_size", self.title_size), ("body_size", self.body_size)] {
            if size == 0 || size > MAX_FONT_SIZE {
                return Err(StoryError::config(format!(
                    "slide {} ({}): {} must be between 1 and {}, got {}",
                    index + 1,
                    self.scene,
                    field,
                    MAX_FONT_SIZE,
                    size
                )));
            }
        }
        Ok(())
    }
}

/// Ordered slide records; table order is page order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryTable {
    #[serde(default)]
    pub slides: Vec<SlideRecord>,
}

impl StoryTable {
    pub fn new(slides: Vec<SlideRecord>) -> Self {
        Self { slides }
    }

    /// Load a table from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse a table from a TOML string
    pub fn parse(toml_content: &str) -> Result<Self> {
        let table: StoryTable = toml::from_str(toml_content)?;
        Ok(table)
    }

    /// Reject tables that cannot produce a deck
    pub fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            return Err(StoryError::config("story table has no slides"));
        }
        for (index, record) in self.slides.iter().enumerate() {
            record.validate(index)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlideRecord> {
        self.slides.iter()
    }

    /// "The Boy Who Cried Wolf", twenty pages
    pub fn wolf_story() -> Self {
        let page = |scene, body: &str| SlideRecord::new(scene, body).with_body_size(26);

        Self::new(vec![
            SlideRecord::new(Scene::Cover, "——中国经典寓言故事——\n幼儿园绘本")
                .with_title("狼 来 了", 44)
                .with_body_size(24),
            page(
                Scene::Village,
                "从前，在一个美丽的小村庄旁边，\n有一座绿绿的大山。",
            ),
            page(
                Scene::BoyIntro,
                "村子里有一个小男孩，\n大家叫他\"放羊娃\"。\n他每天都要到山上去放羊。🐑",
            ),
            page(
                Scene::Bored,
                "山上只有他一个人，\n没有小朋友跟他玩，\n他觉得好无聊啊……",
            ),
            page(Scene::Idea, "忽然，他想到了一个\n\"好玩\"的主意……💡"),
            page(
                Scene::FirstCry,
                "他站起来大喊：\n\"狼来了！狼来了！\n快来救我呀！\"🗣️",
            ),
            page(
                Scene::VillagersRun,
                "山下的村民们听到了，\n赶紧拿起锄头和棍子，\n跑上山来帮他！",
            ),
            page(
                Scene::NoWolf,
                "可是，山上根本没有狼！\n放羊娃哈哈大笑：\n\"骗你们的！哈哈哈！\"",
            ),
            page(Scene::VillagersLeave, "村民们很生气，\n摇摇头就走了。😤"),
            page(
                Scene::SecondCry,
                "过了几天，放羊娃又觉得无聊了。\n他又大喊起来：\n\"狼来了！狼来了！！\"",
            ),
            page(
                Scene::VillagersRunAgain,
                "村民们又急急忙忙跑上了山。\n大家气喘吁吁的……",
            ),
            page(
                Scene::NoWolfAgain,
                "山上还是没有狼！\n放羊娃又笑了：\n\"又上当了！哈哈哈哈！\"",
            ),
            page(
                Scene::VillagersFurious,
                "这一次，村民们非常非常生气。\n他们说：\"我们再也不相信你了！\"",
            ),
            page(
                Scene::WolfComes,
                "又过了几天……\n这一次，一只大灰狼\n真的来了！！！🐺",
            ),
            page(
                Scene::CriesForHelp,
                "放羊娃吓坏了！\n他拼命喊：\n\"狼来了！狼真的来了！\n快来救我啊！\"",
            ),
            page(
                Scene::NobodyComes,
                "可是这一次……\n没有一个人来帮他。😢\n大家都以为他又在骗人。",
            ),
            page(
                Scene::WolfAttack,
                "大灰狼抓走了好几只小羊。\n放羊娃只能眼睁睁地看着，\n什么也做不了……",
            ),
            page(
                Scene::BoyRegrets,
                "放羊娃后悔极了。😢\n他再也不敢说谎了。\n可是羊已经回不来了……",
            ),
            page(
                Scene::Lesson,
                "🌟 说谎话是不对的！\n🌟 别人会不再相信你。\n🌟 做一个诚实的好孩子！❤️",
            )
            .with_title("小朋友们，记住哦！", 32),
            page(
                Scene::Ending,
                "谢谢小朋友们！\n你们要做诚实的好孩子哦！\n🌈✨👏",
            )
            .with_title("— 故事讲完啦 —", 36),
        ])
    }
}

impl<'a> IntoIterator for &'a StoryTable {
    type Item = &'a SlideRecord;
    type IntoIter = std::slice::Iter<'a, SlideRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
