//! Slide assembler.
//!
//! Walks a [`StoryTable`] in order and grows a [`Presentation`] by one page
//! per record:
//!
//! 1. render the record's scene to PNG in memory
//! 2. add a blank page with the PNG stretched over it
//! 3. add the title box, when the record has a title
//! 4. add the translucent caption box, when the record has a body
//!
//! The first failure aborts the run; no partial deck is returned.

use fabledeck_pptx::{
    apply_fill_alpha, inches, Alignment, FillPatch, Geometry, Line, Presentation, Rect, Slide,
};
use fabledeck_raster::FontBook;
use tracing::{debug, info, warn};

use crate::config::DeckStyle;
use crate::error::{AssemblyStage, Result, StageError, StoryError};
use crate::palette::Theme;
use crate::scenes::Scene;
use crate::story::{SlideRecord, StoryTable};

/// Outcome of a successful run
#[derive(Debug)]
pub struct Assembly {
    /// The finished deck, not yet written anywhere
    pub deck: Presentation,
    pub report: AssemblyReport,
}

/// Counters collected while assembling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Pages added
    pub slides: usize,
    /// 1-based numbers of pages whose caption box stayed opaque
    pub opacity_skipped: Vec<usize>,
}

/// Notification sent after each page is complete
#[derive(Debug, Clone, Copy)]
pub struct SlideProgress<'a> {
    /// 1-based page number
    pub number: usize,
    pub total: usize,
    pub record: &'a SlideRecord,
}

/// Builds decks from story tables
#[derive(Debug, Clone)]
pub struct DeckAssembler {
    theme: Theme,
    style: DeckStyle,
    fonts: FontBook,
}

impl DeckAssembler {
    pub fn new(style: DeckStyle, fonts: FontBook) -> Self {
        Self {
            theme: Theme::default(),
            style,
            fonts,
        }
    }

    /// Replace the palette and canvas size
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn style(&self) -> &DeckStyle {
        &self.style
    }

    /// Assemble `table`, drawing each record's scene
    pub fn assemble(&self, table: &StoryTable) -> Result<Assembly> {
        self.assemble_with(
            table,
            |record, theme, fonts| record.scene.render(theme, fonts),
            |_| {},
        )
    }

    /// Assemble `table` with a custom scene renderer and a progress callback.
    ///
    /// `render` must return PNG bytes for the record it is given.
    pub fn assemble_with<R, P>(
        &self,
        table: &StoryTable,
        mut render: R,
        mut progress: P,
    ) -> Result<Assembly>
    where
        R: FnMut(&SlideRecord, &Theme, &FontBook) -> fabledeck_raster::Result<Vec<u8>>,
        P: FnMut(SlideProgress<'_>),
    {
        self.style.validate()?;
        table.validate()?;

        let mut deck = Presentation::widescreen()
            .with_title(self.style.title.as_str())
            .with_author(self.style.author.as_str())
            .with_locale(self.style.locale.as_str());
        let (width, height) = (deck.width(), deck.height());
        let mut report = AssemblyReport::default();
        let total = table.len();

        for (index, record) in table.iter().enumerate() {
            let number = index + 1;
            let scene = record.scene;

            debug!(slide = number, %scene, "Rendering scene");
            let png = render(record, &self.theme, &self.fonts)
                .map_err(at_stage(number, scene, AssemblyStage::RenderScene))?;

            debug!(slide = number, bytes = png.len(), "Placing background");
            let slide = deck.add_slide();
            slide
                .add_picture(png, Rect::new(0, 0, width, height))
                .map_err(at_stage(number, scene, AssemblyStage::PlaceBackground))?;

            if record.has_title() {
                debug!(slide = number, "Placing title");
                self.place_title(slide, record, width)
                    .map_err(at_stage(number, scene, AssemblyStage::PlaceTitle))?;
            }

            if record.has_body() {
                debug!(slide = number, lines = record.body_lines().count(), "Placing body");
                let patch = self
                    .place_body(slide, record, width, height)
                    .map_err(at_stage(number, scene, AssemblyStage::PlaceBody))?;
                if patch == FillPatch::NodeMissing {
                    warn!(
                        slide = number,
                        %scene,
                        "Caption fill has no RGB color node, leaving it opaque"
                    );
                    report.opacity_skipped.push(number);
                }
            }

            report.slides += 1;
            info!(slide = number, total, %scene, "Slide complete");
            progress(SlideProgress {
                number,
                total,
                record,
            });
        }

        info!(
            slides = report.slides,
            opacity_skipped = report.opacity_skipped.len(),
            "Deck assembled"
        );
        Ok(Assembly { deck, report })
    }

    fn place_title(
        &self,
        slide: &mut Slide,
        record: &SlideRecord,
        width: i64,
    ) -> fabledeck_pptx::Result<()> {
        let rect = Rect::new(inches(0.5), inches(0.3), width - inches(1.0), inches(1.2));
        let shape = slide.add_textbox(rect)?;

        let frame = shape.text_frame_mut();
        frame.word_wrap = Some(self.style.word_wrap);
        frame
            .add_paragraph(record.title.as_str())
            .with_alignment(Alignment::Center)
            .with_size(record.title_size)
            .with_bold(self.style.bold)
            .with_color(self.style.title_color);
        Ok(())
    }

    fn place_body(
        &self,
        slide: &mut Slide,
        record: &SlideRecord,
        width: i64,
        height: i64,
    ) -> fabledeck_pptx::Result<FillPatch> {
        let rect = Rect::new(
            inches(0.3),
            height - inches(2.8),
            width - inches(0.6),
            inches(2.5),
        );
        let shape = slide.add_shape(Geometry::Rectangle, rect)?;
        shape.set_fill(self.style.body_fill.clone());
        shape.set_line(Line::Hidden);

        let mut patch = FillPatch::Applied;
        if self.style.is_translucent() {
            let (xml, outcome) = apply_fill_alpha(shape.properties_xml(), self.style.body_opacity)?;
            if outcome == FillPatch::Applied {
                shape.set_properties_xml(xml);
            }
            patch = outcome;
        }

        let frame = shape.text_frame_mut();
        frame.word_wrap = Some(self.style.word_wrap);
        for line in record.body_lines() {
            frame
                .add_paragraph(line)
                .with_alignment(Alignment::Center)
                .with_size(record.body_size)
                .with_bold(self.style.bold)
                .with_color(self.style.body_color);
        }
        Ok(patch)
    }
}

/// Error mapper that tags a stage failure with its page
fn at_stage<E: Into<StageError>>(
    slide: usize,
    scene: Scene,
    stage: AssemblyStage,
) -> impl FnOnce(E) -> StoryError {
    move |e| StoryError::assembly(slide, scene, stage, e)
}
