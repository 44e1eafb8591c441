//! Text frames, paragraphs and run formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::FONT_SIZE_UNITS_PER_POINT;
use crate::writer::escape_xml;

/// A 24-bit RGB color, written as `RRGGBB` in `srgbClr` elements.
///
/// Deserializes from `"#RRGGBB"` or `"RRGGBB"` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit hex color with an optional leading `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Self::new(r, g, b))
    }

    /// `val` attribute form, e.g. `B41E1E`
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid RGB color '{}'", value))
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        format!("#{}", color.hex())
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    fn as_attr(self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
            Alignment::Justify => "just",
        }
    }
}

/// Run-level font settings. Unset fields inherit from the master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Font {
    /// Size in whole points
    pub size: Option<u32>,
    pub bold: bool,
    pub color: Option<RgbColor>,
}

/// A single paragraph holding one text run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub text: String,
    pub alignment: Option<Alignment>,
    pub font: Font,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_size(&mut self, points: u32) -> &mut Self {
        self.font.size = Some(points);
        self
    }

    pub fn with_bold(&mut self, bold: bool) -> &mut Self {
        self.font.bold = bold;
        self
    }

    pub fn with_color(&mut self, color: RgbColor) -> &mut Self {
        self.font.color = Some(color);
        self
    }

    pub(crate) fn to_xml(&self, locale: &str) -> String {
        let ppr = match self.alignment {
            Some(alignment) => format!("<a:pPr algn=\"{}\"/>", alignment.as_attr()),
            None => String::new(),
        };

        let mut rpr_attrs = format!("lang=\"{}\"", escape_xml(locale));
        if let Some(size) = self.font.size {
            rpr_attrs.push_str(&format!(" sz=\"{}\"", size * FONT_SIZE_UNITS_PER_POINT));
        }
        if self.font.bold {
            rpr_attrs.push_str(" b=\"1\"");
        }
        rpr_attrs.push_str(" dirty=\"0\"");

        if self.text.is_empty() {
            return format!("<a:p>{}<a:endParaRPr {}/></a:p>", ppr, rpr_attrs);
        }

        let rpr = match self.font.color {
            Some(color) => format!(
                "<a:rPr {}><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill></a:rPr>",
                rpr_attrs,
                color.hex()
            ),
            None => format!("<a:rPr {}/>", rpr_attrs),
        };

        format!(
            "<a:p>{}<a:r>{}<a:t>{}</a:t></a:r></a:p>",
            ppr,
            rpr,
            escape_xml(&self.text)
        )
    }
}

/// The text body of a shape
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFrame {
    /// `Some(true)` wraps at the shape edge, `Some(false)` never wraps
    pub word_wrap: Option<bool>,
    paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Append a paragraph and return it for formatting
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        let index = self.paragraphs.len();
        self.paragraphs.push(Paragraph::new(text));
        &mut self.paragraphs[index]
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Plain text with paragraphs joined by newlines
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn wrap_attr(&self) -> &'static str {
        match self.word_wrap {
            Some(true) => " wrap=\"square\"",
            Some(false) => " wrap=\"none\"",
            None => "",
        }
    }

    pub(crate) fn paragraphs_xml(&self, locale: &str) -> String {
        if self.paragraphs.is_empty() {
            // txBody requires at least one paragraph
            return format!("<a:p><a:endParaRPr lang=\"{}\" dirty=\"0\"/></a:p>", escape_xml(locale));
        }
        self.paragraphs.iter().map(|p| p.to_xml(locale)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_parsing() {
        assert_eq!(RgbColor::from_hex("#B41E1E"), Some(RgbColor::new(180, 30, 30)));
        assert_eq!(RgbColor::from_hex("323250"), Some(RgbColor::new(50, 50, 80)));
        assert!(RgbColor::from_hex("#fff").is_none());
        assert!(RgbColor::from_hex("狼狼狼").is_none());
        assert_eq!(RgbColor::new(180, 30, 30).hex(), "B41E1E");
    }

    #[test]
    fn test_color_string_conversions() {
        let color = RgbColor::try_from("#FFFFFF".to_string()).unwrap();
        assert_eq!(color, RgbColor::WHITE);
        assert_eq!(String::from(RgbColor::new(50, 50, 80)), "#323250");

        let err = RgbColor::try_from("white".to_string()).unwrap_err();
        assert!(err.contains("white"));
    }

    #[test]
    fn test_paragraph_xml() {
        let mut p = Paragraph::new("狼 来 了");
        p.with_alignment(Alignment::Center)
            .with_size(44)
            .with_bold(true)
            .with_color(RgbColor::new(180, 30, 30));

        let xml = p.to_xml("zh-CN");
        assert!(xml.starts_with("<a:p><a:pPr algn=\"ctr\"/>"));
        assert!(xml.contains("sz=\"4400\""));
        assert!(xml.contains("b=\"1\""));
        assert!(xml.contains("<a:srgbClr val=\"B41E1E\"/>"));
        assert!(xml.contains("<a:t>狼 来 了</a:t>"));
    }

    #[test]
    fn test_empty_paragraph_uses_end_props() {
        let xml = Paragraph::new("").to_xml("en-US");
        assert!(xml.contains("<a:endParaRPr"));
        assert!(!xml.contains("<a:r>"));
    }

    #[test]
    fn test_text_frame() {
        let mut frame = TextFrame::default();
        assert!(frame.is_empty());
        assert!(frame.paragraphs_xml("en-US").contains("<a:p>"));

        frame.add_paragraph("first & second");
        frame.add_paragraph("third");
        assert_eq!(frame.paragraphs().len(), 2);
        assert_eq!(frame.text(), "first & second\nthird");
        assert!(frame.paragraphs_xml("en-US").contains("first &amp; second"));

        frame.word_wrap = Some(true);
        assert_eq!(frame.wrap_attr(), " wrap=\"square\"");
    }
}
