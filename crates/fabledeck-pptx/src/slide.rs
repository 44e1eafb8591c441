//! Slides and the shapes placed on them.
//!
//! Every slide uses the blank layout. Shapes are absolutely positioned in EMU
//! and written in the order they were added, so later shapes sit on top.

use serde::{Deserialize, Serialize};

use crate::error::{PptxError, Result};
use crate::text::{RgbColor, TextFrame};

/// PNG file signature
const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Position and size of a shape in EMU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }

    fn validate(&self) -> Result<()> {
        if self.cx <= 0 || self.cy <= 0 {
            return Err(PptxError::invalid_geometry(format!(
                "shape extent must be positive, got {}x{} EMU",
                self.cx, self.cy
            )));
        }
        Ok(())
    }

    pub(crate) fn xfrm_xml(&self) -> String {
        format!(
            "<a:xfrm><a:off x=\"{}\" y=\"{}\"/><a:ext cx=\"{}\" cy=\"{}\"/></a:xfrm>",
            self.x, self.y, self.cx, self.cy
        )
    }
}

/// Preset geometry of an auto shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rectangle,
    RoundedRectangle,
    Ellipse,
}

impl Geometry {
    fn preset(self) -> &'static str {
        match self {
            Geometry::Rectangle => "rect",
            Geometry::RoundedRectangle => "roundRect",
            Geometry::Ellipse => "ellipse",
        }
    }
}

/// Shape interior
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    /// Transparent interior
    #[default]
    None,
    /// Explicit RGB color (`a:srgbClr`)
    Solid(RgbColor),
    /// Theme color such as `bg1` or `accent1` (`a:schemeClr`)
    Scheme(String),
}

impl Fill {
    fn to_xml(&self) -> String {
        match self {
            Fill::None => "<a:noFill/>".to_string(),
            Fill::Solid(color) => format!(
                "<a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill>",
                color.hex()
            ),
            Fill::Scheme(name) => format!(
                "<a:solidFill><a:schemeClr val=\"{}\"/></a:solidFill>",
                crate::writer::escape_xml(name)
            ),
        }
    }
}

/// Shape outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Line {
    /// Use the master's default outline
    #[default]
    Inherit,
    /// No outline
    Hidden,
}

/// The kind of text-bearing shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextShapeKind {
    TextBox,
    AutoShape(Geometry),
}

/// A picture stretched over its frame
#[derive(Debug, Clone)]
pub struct Picture {
    id: u32,
    rect: Rect,
    png: Vec<u8>,
}

impl Picture {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Embedded PNG bytes
    pub fn png(&self) -> &[u8] {
        &self.png
    }
}

/// A text box or auto shape with a text frame.
///
/// The shape properties (`p:spPr`) are kept in serialized form so they can be
/// patched directly, see [`crate::styling`]. Typed setters regenerate them and
/// discard any earlier patch.
#[derive(Debug, Clone)]
pub struct TextShape {
    id: u32,
    name: String,
    kind: TextShapeKind,
    rect: Rect,
    fill: Fill,
    line: Line,
    properties: String,
    text_frame: TextFrame,
}

impl TextShape {
    fn new(id: u32, kind: TextShapeKind, rect: Rect) -> Self {
        let name = match kind {
            TextShapeKind::TextBox => format!("TextBox {}", id - 1),
            TextShapeKind::AutoShape(_) => format!("Rectangle {}", id - 1),
        };
        let mut shape = Self {
            id,
            name,
            kind,
            rect,
            fill: Fill::None,
            line: Line::Inherit,
            properties: String::new(),
            text_frame: TextFrame::default(),
        };
        shape.rebuild_properties();
        shape
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TextShapeKind {
        self.kind
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    pub fn set_fill(&mut self, fill: Fill) {
        self.fill = fill;
        self.rebuild_properties();
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn set_line(&mut self, line: Line) {
        self.line = line;
        self.rebuild_properties();
    }

    /// Serialized `p:spPr` element
    pub fn properties_xml(&self) -> &str {
        &self.properties
    }

    /// Replace the serialized `p:spPr` element, e.g. after a styling patch
    pub fn set_properties_xml(&mut self, xml: String) {
        self.properties = xml;
    }

    pub fn text_frame(&self) -> &TextFrame {
        &self.text_frame
    }

    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.text_frame
    }

    fn rebuild_properties(&mut self) {
        let geometry = match self.kind {
            TextShapeKind::TextBox => Geometry::Rectangle,
            TextShapeKind::AutoShape(geometry) => geometry,
        };
        let line = match self.line {
            Line::Inherit => "",
            Line::Hidden => "<a:ln><a:noFill/></a:ln>",
        };
        self.properties = format!(
            "<p:spPr>{}<a:prstGeom prst=\"{}\"><a:avLst/></a:prstGeom>{}{}</p:spPr>",
            self.rect.xfrm_xml(),
            geometry.preset(),
            self.fill.to_xml(),
            line
        );
    }
}

/// A borrowed view of one shape in z-order
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    Picture(&'a Picture),
    Text(&'a TextShape),
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Picture(usize),
    Text(usize),
}

/// A single blank-layout slide
#[derive(Debug, Clone)]
pub struct Slide {
    number: u32,
    pictures: Vec<Picture>,
    text_shapes: Vec<TextShape>,
    order: Vec<Slot>,
    /// Shape ids start at 2; id 1 is the group shape of the tree
    next_id: u32,
}

impl Slide {
    pub(crate) fn new(number: u32) -> Self {
        Self {
            number,
            pictures: Vec::new(),
            text_shapes: Vec::new(),
            order: Vec::new(),
            next_id: 2,
        }
    }

    /// Slide number (1-based)
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Embed a PNG stretched over `rect`
    pub fn add_picture(&mut self, png: Vec<u8>, rect: Rect) -> Result<&mut Picture> {
        rect.validate()?;
        if !png.starts_with(PNG_MAGIC) {
            return Err(PptxError::image_error(format!(
                "slide {}: picture data is not a PNG ({} bytes)",
                self.number,
                png.len()
            )));
        }

        let id = self.take_id();
        let index = self.pictures.len();
        self.pictures.push(Picture { id, rect, png });
        self.order.push(Slot::Picture(index));
        Ok(&mut self.pictures[index])
    }

    /// Add a borderless, unfilled text box
    pub fn add_textbox(&mut self, rect: Rect) -> Result<&mut TextShape> {
        rect.validate()?;
        let id = self.take_id();
        Ok(self.push_text(TextShape::new(id, TextShapeKind::TextBox, rect)))
    }

    /// Add a preset auto shape that can hold text
    pub fn add_shape(&mut self, geometry: Geometry, rect: Rect) -> Result<&mut TextShape> {
        rect.validate()?;
        let id = self.take_id();
        Ok(self.push_text(TextShape::new(
            id,
            TextShapeKind::AutoShape(geometry),
            rect,
        )))
    }

    /// All shapes, bottom to top
    pub fn shapes(&self) -> impl Iterator<Item = ShapeRef<'_>> + '_ {
        self.order.iter().map(move |slot| match *slot {
            Slot::Picture(i) => ShapeRef::Picture(&self.pictures[i]),
            Slot::Text(i) => ShapeRef::Text(&self.text_shapes[i]),
        })
    }

    pub fn pictures(&self) -> &[Picture] {
        &self.pictures
    }

    pub fn text_shapes(&self) -> &[TextShape] {
        &self.text_shapes
    }

    pub fn shape_count(&self) -> usize {
        self.order.len()
    }

    fn take_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push_text(&mut self, shape: TextShape) -> &mut TextShape {
        let index = self.text_shapes.len();
        self.text_shapes.push(shape);
        self.order.push(Slot::Text(index));
        &mut self.text_shapes[index]
    }
}
