//! Deck styling configuration.
//!
//! Every field has a default, so an empty TOML document is a valid style:
//!
//! ```toml
//! title = "狼来了"
//! locale = "zh-CN"
//! title_color = "B41E1E"
//! body_color = "323250"
//! body_fill = { solid = "FFFFFF" }
//! body_opacity = 75000
//! ```

use std::path::Path;

use fabledeck_pptx::constants::ALPHA_OPAQUE;
use fabledeck_pptx::{Fill, RgbColor};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoryError};

/// Colors, fill and metadata applied to every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStyle {
    /// Deck title written to the document properties
    #[serde(default = "default_deck_title")]
    pub title: String,

    /// Author written to the document properties
    #[serde(default = "default_author")]
    pub author: String,

    /// Language tag for every text run (e.g. "zh-CN")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Title text color
    #[serde(default = "default_title_color")]
    pub title_color: RgbColor,

    /// Body text color
    #[serde(default = "default_body_color")]
    pub body_color: RgbColor,

    /// Interior of the caption box
    #[serde(default = "default_body_fill")]
    pub body_fill: Fill,

    /// Opacity of the caption box fill, in hundred-thousandths
    #[serde(default = "default_body_opacity")]
    pub body_opacity: u32,

    /// Bold title and body text
    #[serde(default = "default_true")]
    pub bold: bool,

    /// Wrap text inside title and body boxes
    #[serde(default = "default_true")]
    pub word_wrap: bool,
}

fn default_deck_title() -> String {
    "狼来了".to_string()
}

fn default_author() -> String {
    "fabledeck".to_string()
}

fn default_locale() -> String {
    "zh-CN".to_string()
}

fn default_title_color() -> RgbColor {
    RgbColor::new(180, 30, 30)
}

fn default_body_color() -> RgbColor {
    RgbColor::new(50, 50, 80)
}

fn default_body_fill() -> Fill {
    Fill::Solid(RgbColor::WHITE)
}

fn default_body_opacity() -> u32 {
    75_000
}

fn default_true() -> bool {
    true
}

impl Default for DeckStyle {
    fn default() -> Self {
        Self {
            title: default_deck_title(),
            author: default_author(),
            locale: default_locale(),
            title_color: default_title_color(),
            body_color: default_body_color(),
            body_fill: default_body_fill(),
            body_opacity: default_body_opacity(),
            bold: default_true(),
            word_wrap: default_true(),
        }
    }
}

impl DeckStyle {
    /// Load a style from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse a style from a TOML string
    pub fn parse(toml_content: &str) -> Result<Self> {
        let style: DeckStyle = toml::from_str(toml_content)?;
        Ok(style)
    }

    /// Reject values the package writer cannot express
    pub fn validate(&self) -> Result<()> {
        if self.body_opacity > ALPHA_OPAQUE {
            return Err(StoryError::config(format!(
                "body_opacity must be at most {}, got {}",
                ALPHA_OPAQUE, self.body_opacity
            )));
        }
        if self.locale.trim().is_empty() {
            return Err(StoryError::config("locale must not be empty"));
        }
        Ok(())
    }

    /// Whether the caption box needs its fill patched
    pub fn is_translucent(&self) -> bool {
        self.body_opacity < ALPHA_OPAQUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = DeckStyle::default();
        assert_eq!(style.title_color.hex(), "B41E1E");
        assert_eq!(style.body_color.hex(), "323250");
        assert_eq!(style.body_fill, Fill::Solid(RgbColor::WHITE));
        assert_eq!(style.body_opacity, 75_000);
        assert_eq!(style.locale, "zh-CN");
        assert!(style.bold);
        assert!(style.word_wrap);
        assert!(style.is_translucent());
        style.validate().unwrap();
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(DeckStyle::parse("").unwrap(), DeckStyle::default());
    }

    #[test]
    fn test_parse_overrides() {
        let style = DeckStyle::parse(
            r##"
title = "The Boy Who Cried Wolf"
locale = "en-US"
title_color = "#102030"
body_fill = { scheme = "bg1" }
body_opacity = 100000
"##,
        )
        .unwrap();

        assert_eq!(style.title, "The Boy Who Cried Wolf");
        assert_eq!(style.locale, "en-US");
        assert_eq!(style.title_color, RgbColor::new(0x10, 0x20, 0x30));
        assert_eq!(style.body_fill, Fill::Scheme("bg1".to_string()));
        assert!(!style.is_translucent());
        // Untouched fields keep their defaults
        assert_eq!(style.body_color.hex(), "323250");
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let err = DeckStyle::parse(r#"body_color = "not-a-color""#).unwrap_err();
        assert!(matches!(err, StoryError::Toml(_)));
    }

    #[test]
    fn test_opacity_above_opaque_is_rejected() {
        let style = DeckStyle {
            body_opacity: 120_000,
            ..DeckStyle::default()
        };
        let err = style.validate().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("body_opacity"));
    }
}
