//! Direct edits to serialized shape properties.
//!
//! DrawingML supports per-color transparency through an `<a:alpha>` child of
//! the fill color, which the typed shape API does not model. These helpers
//! stream a `p:spPr` fragment through `quick-xml`, rewrite the fill color and
//! copy every other event unchanged.

use std::io::Cursor;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::constants::ALPHA_OPAQUE;
use crate::error::{PptxError, Result};

/// Outcome of [`apply_fill_alpha`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPatch {
    /// The solid RGB fill now carries the requested alpha
    Applied,
    /// No `spPr/solidFill/srgbClr` node exists; the XML is unchanged
    NodeMissing,
}

/// Set the opacity of a shape's solid RGB fill.
///
/// `alpha` is in hundred-thousandths (75000 = 75% opaque) and is clamped to
/// 100000. Any existing `alpha` on the fill color is replaced. Line and text
/// fills are left alone.
pub fn apply_fill_alpha(properties: &str, alpha: u32) -> Result<(String, FillPatch)> {
    let alpha = alpha.min(ALPHA_OPAQUE).to_string();

    let mut reader = Reader::from_str(properties);
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    // Local names of the open elements
    let mut path: Vec<Vec<u8>> = Vec::new();
    // Depth of the fill color element while inside it
    let mut target: Option<usize> = None;
    // Depth of an old alpha element being dropped
    let mut skipping: Option<usize> = None;
    let mut patched = false;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) => {
                path.push(e.local_name().as_ref().to_vec());

                if skipping.is_some() {
                    continue;
                }
                if target == Some(path.len() - 1) && e.local_name().as_ref() == b"alpha" {
                    skipping = Some(path.len());
                    continue;
                }
                if !patched && is_fill_color(&path) {
                    target = Some(path.len());
                }
                writer.write_event(Event::Start(e))?;
            }
            Event::End(e) => {
                let depth = path.len();
                path.pop();

                if let Some(skip_depth) = skipping {
                    if depth == skip_depth {
                        skipping = None;
                    }
                    continue;
                }
                if target == Some(depth) {
                    writer.write_event(Event::Empty(alpha_element(e.name().into_inner(), &alpha)))?;
                    target = None;
                    patched = true;
                }
                writer.write_event(Event::End(e))?;
            }
            Event::Empty(e) => {
                if skipping.is_some() {
                    continue;
                }
                if target == Some(path.len()) && e.local_name().as_ref() == b"alpha" {
                    continue;
                }

                path.push(e.local_name().as_ref().to_vec());
                let is_target = !patched && is_fill_color(&path);
                path.pop();

                if is_target {
                    // <a:srgbClr val=".."/> becomes <a:srgbClr val=".."><a:alpha/></a:srgbClr>
                    let end = e.to_end().into_owned();
                    let child = alpha_element(e.name().into_inner(), &alpha);
                    writer.write_event(Event::Start(e))?;
                    writer.write_event(Event::Empty(child))?;
                    writer.write_event(Event::End(end))?;
                    patched = true;
                } else {
                    writer.write_event(Event::Empty(e))?;
                }
            }
            event => {
                if skipping.is_none() {
                    writer.write_event(event)?;
                }
            }
        }
    }

    if !patched {
        return Ok((properties.to_string(), FillPatch::NodeMissing));
    }

    let xml = String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| PptxError::invalid_xml(e.to_string()))?;
    Ok((xml, FillPatch::Applied))
}

/// `spPr > solidFill > srgbClr`, matched on local names
fn is_fill_color(path: &[Vec<u8>]) -> bool {
    matches!(
        path,
        [.., sp_pr, fill, color]
            if sp_pr.as_slice() == b"spPr"
                && fill.as_slice() == b"solidFill"
                && color.as_slice() == b"srgbClr"
    )
}

/// An `alpha` element with the same namespace prefix as the color element
fn alpha_element(color_name: &[u8], value: &str) -> BytesStart<'static> {
    let name = match color_name.iter().position(|&b| b == b':') {
        Some(colon) => format!("{}:alpha", String::from_utf8_lossy(&color_name[..colon])),
        None => "alpha".to_string(),
    };
    let mut element = BytesStart::new(name);
    element.push_attribute(("val", value));
    element
}
