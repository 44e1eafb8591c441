//! PPTX package generation.
//!
//! Writes the fixed package skeleton (content types, master, one blank layout,
//! theme) followed by one part per slide and one media part per picture.

use std::io::{Cursor, Seek, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::constants::*;
use crate::error::Result;
use crate::presentation::Presentation;
use crate::slide::{Picture, ShapeRef, Slide, TextShape, TextShapeKind};

/// Fixed package timestamp; identical decks produce identical bytes
const PACKAGE_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

/// Serializes a [`Presentation`] into a PPTX archive
pub struct PackageWriter<'a> {
    deck: &'a Presentation,
}

impl<'a> PackageWriter<'a> {
    pub fn new(deck: &'a Presentation) -> Self {
        Self { deck }
    }

    /// Generate the PPTX as bytes
    pub fn generate(&self) -> Result<Vec<u8>> {
        let cursor = Cursor::new(Vec::new());
        let mut zip = ZipWriter::new(cursor);

        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        self.write_content_types(&mut zip, options)?;
        self.write_root_rels(&mut zip, options)?;
        self.write_app_xml(&mut zip, options)?;
        self.write_core_xml(&mut zip, options)?;
        self.write_presentation_xml(&mut zip, options)?;
        self.write_presentation_rels(&mut zip, options)?;
        self.write_pres_props(&mut zip, options)?;
        self.write_table_styles(&mut zip, options)?;
        self.write_view_props(&mut zip, options)?;
        self.write_theme(&mut zip, options)?;
        self.write_slide_master(&mut zip, options)?;
        self.write_slide_layout(&mut zip, options)?;

        // Media parts are numbered across the whole deck
        let mut next_image = 1;
        for slide in self.deck.slides() {
            self.write_slide(&mut zip, options, slide, next_image)?;
            for picture in slide.pictures() {
                zip.start_file(format!("ppt/media/image{}.png", next_image), options)?;
                zip.write_all(picture.png())?;
                next_image += 1;
            }
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Write [Content_Types].xml
    fn write_content_types<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Default Extension="png" ContentType="image/png"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
  <Override PartName="/ppt/presProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"/>
  <Override PartName="/ppt/tableStyles.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"/>
  <Override PartName="/ppt/viewProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"/>
  <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
  <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
  <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
"#,
        );

        for slide in self.deck.slides() {
            content.push_str(&format!(
                "  <Override PartName=\"/ppt/slides/slide{}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>\n",
                slide.number()
            ));
        }

        content.push_str("</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write _rels/.rels
    fn write_root_rels<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("_rels/.rels", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#,
            NS_PACKAGE_RELATIONSHIPS
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write docProps/app.xml
    fn write_app_xml<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("docProps/app.xml", options)?;

        let paragraphs: usize = self
            .deck
            .slides()
            .iter()
            .flat_map(|s| s.text_shapes())
            .map(|t| t.text_frame().paragraphs().len())
            .sum();

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <TotalTime>0</TotalTime>
  <Application>fabledeck</Application>
  <PresentationFormat>Widescreen</PresentationFormat>
  <Paragraphs>{}</Paragraphs>
  <Slides>{}</Slides>
  <Notes>0</Notes>
  <HiddenSlides>0</HiddenSlides>
  <MMClips>0</MMClips>
  <ScaleCrop>false</ScaleCrop>
  <LinksUpToDate>false</LinksUpToDate>
  <SharedDoc>false</SharedDoc>
  <HyperlinksChanged>false</HyperlinksChanged>
  <AppVersion>1.0</AppVersion>
</Properties>"#,
            paragraphs,
            self.deck.slide_count()
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write docProps/core.xml
    fn write_core_xml<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("docProps/core.xml", options)?;

        let title = self.deck.title().unwrap_or("Presentation");
        let author = self.deck.author().unwrap_or("fabledeck");

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{title}</dc:title>
  <dc:creator>{author}</dc:creator>
  <cp:lastModifiedBy>{author}</cp:lastModifiedBy>
  <dc:language>{locale}</dc:language>
  <dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified>
</cp:coreProperties>"#,
            title = escape_xml(title),
            author = escape_xml(author),
            locale = escape_xml(self.deck.locale()),
            now = PACKAGE_TIMESTAMP,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/presentation.xml
    fn write_presentation_xml<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/presentation.xml", options)?;

        let mut slide_refs = String::new();
        for i in 1..=self.deck.slide_count() {
            slide_refs.push_str(&format!(
                "    <p:sldId id=\"{}\" r:id=\"rId{}\"/>\n",
                255 + i,
                i + 3 // rId1=slideMaster, rId2=presProps, rId3=theme, rId4+=slides
            ));
        }

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">
  <p:sldMasterIdLst>
    <p:sldMasterId id="2147483648" r:id="rId1"/>
  </p:sldMasterIdLst>
  <p:sldIdLst>
{}  </p:sldIdLst>
  <p:sldSz cx="{}" cy="{}"/>
  <p:notesSz cx="{}" cy="{}"/>
</p:presentation>"#,
            NS_DRAWING,
            NS_RELATIONSHIPS,
            NS_PRESENTATION,
            slide_refs,
            self.deck.width(),
            self.deck.height(),
            self.deck.height(), // Notes are rotated
            self.deck.width()
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/_rels/presentation.xml.rels
    fn write_presentation_rels<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/_rels/presentation.xml.rels", options)?;

        let mut rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="slideMasters/slideMaster1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps" Target="presProps.xml"/>
  <Relationship Id="rId3" Type="{}" Target="theme/theme1.xml"/>
"#,
            NS_PACKAGE_RELATIONSHIPS, REL_TYPE_SLIDE_MASTER, REL_TYPE_THEME
        );

        for slide in self.deck.slides() {
            rels.push_str(&format!(
                "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"slides/slide{}.xml\"/>\n",
                slide.number() + 3,
                REL_TYPE_SLIDE,
                slide.number()
            ));
        }

        rels.push_str("</Relationships>");

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Write ppt/presProps.xml
    fn write_pres_props<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/presProps.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentationPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"/>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/tableStyles.xml
    fn write_table_styles<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/tableStyles.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
            NS_DRAWING
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/viewProps.xml
    fn write_view_props<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/viewProps.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:viewPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:normalViewPr>
    <p:restoredLeft sz="15620"/>
    <p:restoredTop sz="94660"/>
  </p:normalViewPr>
  <p:slideViewPr>
    <p:cSldViewPr>
      <p:cViewPr>
        <p:scale>
          <a:sx n="100" d="100"/>
          <a:sy n="100" d="100"/>
        </p:scale>
        <p:origin x="0" y="0"/>
      </p:cViewPr>
    </p:cSldViewPr>
  </p:slideViewPr>
</p:viewPr>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/theme/theme1.xml
    fn write_theme<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/theme/theme1.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="{}" name="fabledeck">
  <a:themeElements>
    <a:clrScheme name="Office">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="44546A"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
      <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
      <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
      <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
      <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
      <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
      <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
      <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="Office">
      <a:majorFont>
        <a:latin typeface="Calibri Light"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:majorFont>
      <a:minorFont>
        <a:latin typeface="Calibri"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="Office">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#,
            NS_DRAWING
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/slideMasters/slideMaster1.xml
    fn write_slide_master<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/slideMasters/slideMaster1.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001">
        <a:schemeClr val="bg1"/>
      </p:bgRef>
    </p:bg>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
  </p:sldLayoutIdLst>
</p:sldMaster>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );

        zip.write_all(content.as_bytes())?;

        zip.start_file("ppt/slideMasters/_rels/slideMaster1.xml.rels", options)?;

        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="{}" Target="../theme/theme1.xml"/>
</Relationships>"#,
            NS_PACKAGE_RELATIONSHIPS, REL_TYPE_SLIDE_LAYOUT, REL_TYPE_THEME
        );

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Write ppt/slideLayouts/slideLayout1.xml, the only (blank) layout
    fn write_slide_layout<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="blank" preserve="1">
  <p:cSld name="Blank">
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
        );

        zip.write_all(content.as_bytes())?;

        zip.start_file("ppt/slideLayouts/_rels/slideLayout1.xml.rels", options)?;
        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#,
            NS_PACKAGE_RELATIONSHIPS, REL_TYPE_SLIDE_MASTER
        );
        zip.write_all(rels.as_bytes())?;

        Ok(())
    }

    /// Write a single slide and its relationships.
    ///
    /// `first_image` is the deck-wide number of this slide's first picture.
    fn write_slide<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        slide: &Slide,
        first_image: usize,
    ) -> Result<()> {
        zip.start_file(format!("ppt/slides/slide{}.xml", slide.number()), options)?;
        let content = self.generate_slide_xml(slide);
        zip.write_all(content.as_bytes())?;

        zip.start_file(
            format!("ppt/slides/_rels/slide{}.xml.rels", slide.number()),
            options,
        )?;

        let mut rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="{}">
  <Relationship Id="rId1" Type="{}" Target="../slideLayouts/slideLayout1.xml"/>
"#,
            NS_PACKAGE_RELATIONSHIPS, REL_TYPE_SLIDE_LAYOUT
        );

        // rId2.. point at the slide's pictures in z-order
        for offset in 0..slide.pictures().len() {
            rels.push_str(&format!(
                "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"../media/image{}.png\"/>\n",
                offset + 2,
                REL_TYPE_IMAGE,
                first_image + offset
            ));
        }

        rels.push_str("</Relationships>");

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Generate slide XML content
    fn generate_slide_xml(&self, slide: &Slide) -> String {
        let mut shapes = String::new();
        let mut picture_index = 0;

        for shape in slide.shapes() {
            match shape {
                ShapeRef::Picture(picture) => {
                    shapes.push_str(&self.generate_picture(picture, picture_index + 2));
                    picture_index += 1;
                }
                ShapeRef::Text(text) => shapes.push_str(&self.generate_text_shape(text)),
            }
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
{}    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION, shapes
        )
    }

    /// Generate picture XML referencing relationship `rId{rel}`
    fn generate_picture(&self, picture: &Picture, rel: usize) -> String {
        format!(
            r#"      <p:pic>
        <p:nvPicPr>
          <p:cNvPr id="{id}" name="Picture {n}"/>
          <p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>
          <p:nvPr/>
        </p:nvPicPr>
        <p:blipFill>
          <a:blip r:embed="rId{rel}"/>
          <a:stretch><a:fillRect/></a:stretch>
        </p:blipFill>
        <p:spPr>{xfrm}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>
      </p:pic>
"#,
            id = picture.id(),
            n = picture.id() - 1,
            rel = rel,
            xfrm = picture.rect().xfrm_xml(),
        )
    }

    /// Generate a text box or auto shape
    fn generate_text_shape(&self, shape: &TextShape) -> String {
        let frame = shape.text_frame();
        let (nv_sp_pr, anchor) = match shape.kind() {
            TextShapeKind::TextBox => ("<p:cNvSpPr txBox=\"1\"/>", ""),
            TextShapeKind::AutoShape(_) => ("<p:cNvSpPr/>", " anchor=\"ctr\""),
        };

        format!(
            r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{id}" name="{name}"/>
          {nv_sp_pr}
          <p:nvPr/>
        </p:nvSpPr>
        {sp_pr}
        <p:txBody>
          <a:bodyPr{wrap} rtlCol="0"{anchor}/>
          <a:lstStyle/>
          {paragraphs}
        </p:txBody>
      </p:sp>
"#,
            id = shape.id(),
            name = escape_xml(shape.name()),
            nv_sp_pr = nv_sp_pr,
            sp_pr = shape.properties_xml(),
            wrap = frame.wrap_attr(),
            anchor = anchor,
            paragraphs = frame.paragraphs_xml(self.deck.locale()),
        )
    }
}

/// Escape XML special characters
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::{Fill, Geometry, Rect};
    use crate::text::RgbColor;
    use std::io::Read;
    use zip::ZipArchive;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\0";

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_generate_empty_pptx() {
        let deck = Presentation::widescreen()
            .with_title("Test Presentation")
            .with_author("Test Author");

        let bytes = PackageWriter::new(&deck).generate().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        assert!(archive.by_name("ppt/presentation.xml").is_ok());
        assert!(archive.by_name("ppt/slideLayouts/slideLayout1.xml").is_ok());
        assert!(archive.by_name("ppt/slides/slide1.xml").is_err());

        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Test Presentation</dc:title>"));
        assert!(core.contains("<dc:creator>Test Author</dc:creator>"));
    }

    #[test]
    fn test_generate_with_slides_and_media() {
        let mut deck = Presentation::widescreen();
        for _ in 0..2 {
            let slide = deck.add_slide();
            slide
                .add_picture(PNG.to_vec(), Rect::new(0, 0, 12_192_000, 6_858_000))
                .unwrap();
            let body = slide
                .add_shape(Geometry::Rectangle, Rect::new(10, 10, 100, 100))
                .unwrap();
            body.set_fill(Fill::Solid(RgbColor::WHITE));
            body.text_frame_mut().add_paragraph("第一行");
        }

        let bytes = deck.to_bytes().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        assert!(archive.by_name("ppt/media/image1.png").is_ok());
        assert!(archive.by_name("ppt/media/image2.png").is_ok());

        let rels = read_part(&bytes, "ppt/slides/_rels/slide2.xml.rels");
        assert!(rels.contains("Target=\"../media/image2.png\""));
        assert!(rels.contains("slideLayout1.xml"));

        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains("r:embed=\"rId2\""));
        assert!(slide.contains("<a:off x=\"0\" y=\"0\"/><a:ext cx=\"12192000\" cy=\"6858000\"/>"));
        assert!(slide.contains("<a:t>第一行</a:t>"));
        // Picture is written below the text shape
        assert!(slide.find("<p:pic>").unwrap() < slide.find("<p:sp>").unwrap());

        let presentation = read_part(&bytes, "ppt/presentation.xml");
        assert!(presentation.contains("<p:sldId id=\"257\" r:id=\"rId5\"/>"));
        assert!(presentation.contains("<p:sldSz cx=\"12192000\" cy=\"6858000\"/>"));

        let types = read_part(&bytes, "[Content_Types].xml");
        assert!(types.contains("/ppt/slides/slide2.xml"));
    }

    #[test]
    fn test_patched_properties_are_written_verbatim() {
        let mut deck = Presentation::widescreen();
        let shape = deck
            .add_slide()
            .add_textbox(Rect::new(0, 0, 10, 10))
            .unwrap();
        shape.set_properties_xml("<p:spPr><a:custom/></p:spPr>".to_string());

        let bytes = deck.to_bytes().unwrap();
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains("<p:spPr><a:custom/></p:spPr>"));
        assert!(slide.contains("txBox=\"1\""));
    }

    #[test]
    fn test_identical_decks_produce_identical_bytes() {
        let build = || {
            let mut deck = Presentation::widescreen();
            deck.add_slide()
                .add_textbox(Rect::new(0, 0, 10, 10))
                .unwrap()
                .text_frame_mut()
                .add_paragraph("same");
            deck.to_bytes().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Hello & World"), "Hello &amp; World");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
    }
}
