//! Whole-story assembly written to disk and read back as a package.

use std::io::{Cursor, Read};
use std::path::Path;

use fabledeck_pptx::Fill;
use fabledeck_raster::FontBook;
use fabledeck_story::{DeckAssembler, DeckStyle, Scene, SlideRecord, StoryError, StoryTable};
use tempfile::TempDir;
use zip::ZipArchive;

fn archive(path: &Path) -> ZipArchive<Cursor<Vec<u8>>> {
    let bytes = std::fs::read(path).unwrap();
    ZipArchive::new(Cursor::new(bytes)).unwrap()
}

fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

fn slide_part_count(archive: &ZipArchive<Cursor<Vec<u8>>>) -> usize {
    archive
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count()
}

fn assembler(style: DeckStyle) -> DeckAssembler {
    DeckAssembler::new(style, FontBook::empty())
}

#[test]
fn test_wolf_story_deck() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("狼来了.pptx");

    let table = StoryTable::wolf_story();
    let assembly = assembler(DeckStyle::default()).assemble(&table).unwrap();
    assert_eq!(assembly.report.slides, 20);
    assert!(assembly.report.opacity_skipped.is_empty());
    assembly.deck.save(&path).unwrap();

    let mut zip = archive(&path);
    assert_eq!(slide_part_count(&zip), 20);
    assert_eq!(
        zip.file_names()
            .filter(|n| n.starts_with("ppt/media/"))
            .count(),
        20
    );

    // Cover: title at 44pt, two subtitle paragraphs
    let cover = read_part(&mut zip, "ppt/slides/slide1.xml");
    assert!(cover.contains("<a:t>狼 来 了</a:t>"));
    assert!(cover.contains("sz=\"4400\""));
    assert_eq!(cover.matches("sz=\"2400\"").count(), 2);
    assert!(cover.contains("<a:t>——中国经典寓言故事——</a:t>"));
    assert!(cover.contains("<a:t>幼儿园绘本</a:t>"));
    assert!(cover.contains(r#"<a:alpha val="75000"/>"#));

    // Untitled page: no text box, only the caption rectangle
    let village = read_part(&mut zip, "ppt/slides/slide2.xml");
    assert!(!village.contains("txBox=\"1\""));
    assert_eq!(village.matches("<p:sp>").count(), 1);
    assert_eq!(village.matches("<a:pPr algn=\"ctr\"/>").count(), 2);

    // Four-line body
    let cries = read_part(&mut zip, "ppt/slides/slide15.xml");
    assert_eq!(cries.matches("sz=\"2600\"").count(), 4);

    let ending = read_part(&mut zip, "ppt/slides/slide20.xml");
    assert!(ending.contains("<a:t>— 故事讲完啦 —</a:t>"));

    let core = read_part(&mut zip, "docProps/core.xml");
    assert!(core.contains("狼来了"));
}

#[test]
fn test_page_order_follows_table() {
    let table = StoryTable::new(vec![
        SlideRecord::new(Scene::Ending, "last first"),
        SlideRecord::new(Scene::Cover, "first last"),
    ]);
    let assembly = assembler(DeckStyle::default()).assemble(&table).unwrap();
    let bytes = assembly.deck.to_bytes().unwrap();
    let mut zip = ZipArchive::new(Cursor::new(bytes)).unwrap();

    assert!(read_part(&mut zip, "ppt/slides/slide1.xml").contains("last first"));
    assert!(read_part(&mut zip, "ppt/slides/slide2.xml").contains("first last"));
}

#[test]
fn test_unknown_scene_fails_before_output_exists() {
    let dir = TempDir::new().unwrap();
    let story = dir.path().join("story.toml");
    let output = dir.path().join("out.pptx");
    std::fs::write(
        &story,
        "[[slides]]\nscene = \"cover\"\n\n[[slides]]\nscene = \"dragon_attack\"\n",
    )
    .unwrap();

    let err = StoryTable::from_file(&story).unwrap_err();
    assert!(matches!(err, StoryError::Toml(_)));
    assert!(!output.exists());
}

#[test]
fn test_scheme_fill_keeps_page_count() {
    let style = DeckStyle {
        body_fill: Fill::Scheme("bg1".to_string()),
        ..DeckStyle::default()
    };
    let table = StoryTable::wolf_story();
    let assembly = assembler(style).assemble(&table).unwrap();

    assert_eq!(assembly.deck.slide_count(), table.len());
    assert_eq!(assembly.report.opacity_skipped.len(), 20);

    let bytes = assembly.deck.to_bytes().unwrap();
    let mut zip = ZipArchive::new(Cursor::new(bytes)).unwrap();
    for n in 1..=20 {
        let slide = read_part(&mut zip, &format!("ppt/slides/slide{}.xml", n));
        assert!(!slide.contains("<a:alpha"));
        assert!(slide.contains(r#"<a:schemeClr val="bg1"/>"#));
    }
}

#[test]
fn test_degenerate_shape_aborts_assembly() {
    let table = StoryTable::wolf_story();
    let mut rendered = Vec::new();

    let err = assembler(DeckStyle::default())
        .assemble_with(
            &table,
            |record, theme, fonts| {
                rendered.push(record.scene);
                if record.scene == Scene::Idea {
                    let mut canvas = fabledeck_raster::Canvas::new(
                        theme.size.width,
                        theme.size.height,
                        fabledeck_raster::Rgb::WHITE,
                        fonts.clone(),
                    )?;
                    canvas.rectangle(
                        fabledeck_raster::BBox::new(400, 100, 300, 200),
                        fabledeck_raster::ShapeStyle::fill(theme.palette.red),
                    )?;
                    return canvas.encode_png();
                }
                record.scene.render(theme, fonts)
            },
            |_| {},
        )
        .unwrap_err();

    assert_eq!(
        rendered,
        vec![Scene::Cover, Scene::Village, Scene::BoyIntro, Scene::Bored, Scene::Idea]
    );
    let msg = err.to_string();
    assert!(msg.contains("Slide 5"));
    assert!(msg.contains("idea"));
    let source = std::error::Error::source(&err).unwrap().to_string();
    assert!(source.contains("Degenerate rectangle"));
}
