//! Integration tests for the fabledeck CLI
//!
//! These tests run the generate command end to end against a temporary
//! directory and inspect the written package.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use clap::Parser;
use fabledeck_cli::{generate_command, run, Cli, GenerateOptions};
use tempfile::TempDir;
use zip::ZipArchive;

fn options(dir: &TempDir) -> GenerateOptions {
    GenerateOptions {
        output: dir.path().join("deck.pptx"),
        story: None,
        config: None,
        scene_text: false,
    }
}

fn slide_xml(path: &Path, n: usize) -> String {
    let bytes = fs::read(path).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut content = String::new();
    archive
        .by_name(&format!("ppt/slides/slide{}.xml", n))
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[test]
fn test_builtin_story_generates_twenty_slides() {
    let dir = TempDir::new().unwrap();
    let opts = options(&dir);

    let summary = generate_command(&opts).unwrap();
    assert_eq!(summary.slides, 20);
    assert_eq!(summary.opaque_captions, 0);
    assert!(opts.output.exists());

    let bytes = fs::read(&opts.output).unwrap();
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let slides = archive
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    assert_eq!(slides, 20);
}

#[test]
fn test_custom_story_and_style() {
    let dir = TempDir::new().unwrap();
    let story = dir.path().join("story.toml");
    let style = dir.path().join("style.toml");
    fs::write(
        &story,
        r#"
[[slides]]
scene = "wolf_comes"
title = "The wolf is here"
title_size = 40
body = "It really came.\nNobody believed him."

[[slides]]
scene = "ending"
"#,
    )
    .unwrap();
    fs::write(
        &style,
        r#"
locale = "en-US"
body_fill = { scheme = "bg1" }
"#,
    )
    .unwrap();

    let opts = GenerateOptions {
        story: Some(story),
        config: Some(style),
        ..options(&dir)
    };
    let summary = generate_command(&opts).unwrap();
    assert_eq!(summary.slides, 2);
    assert_eq!(summary.opaque_captions, 1);

    let first = slide_xml(&opts.output, 1);
    assert!(first.contains("<a:t>The wolf is here</a:t>"));
    assert!(first.contains("lang=\"en-US\" sz=\"4000\""));
    assert!(first.contains("<a:t>Nobody believed him.</a:t>"));
    assert!(!first.contains("<a:alpha"));

    // No title and no body: only the picture
    let second = slide_xml(&opts.output, 2);
    assert!(second.contains("<p:pic>"));
    assert!(!second.contains("<p:sp>"));
}

#[test]
fn test_unknown_scene_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let story = dir.path().join("story.toml");
    fs::write(&story, "[[slides]]\nscene = \"dragon\"\n").unwrap();

    let opts = GenerateOptions {
        story: Some(story),
        ..options(&dir)
    };
    let err = generate_command(&opts).unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("Failed to load story table"));
    assert!(chain.contains("dragon"));
    assert!(!opts.output.exists());
}

#[test]
fn test_empty_story_is_rejected() {
    let dir = TempDir::new().unwrap();
    let story = dir.path().join("story.toml");
    fs::write(&story, "").unwrap();

    let opts = GenerateOptions {
        story: Some(story),
        ..options(&dir)
    };
    let err = generate_command(&opts).unwrap_err();
    assert!(format!("{:#}", err).contains("no slides"));
    assert!(!opts.output.exists());
}

#[test]
fn test_missing_output_directory_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let opts = GenerateOptions {
        output: dir.path().join("missing").join("deck.pptx"),
        ..options(&dir)
    };

    let err = generate_command(&opts).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to write deck"));
    assert!(!opts.output.exists());
    assert!(!dir.path().join("missing").exists());
}

#[test]
fn test_list_scenes_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("deck.pptx");
    let cli = Cli::try_parse_from([
        "fabledeck",
        "--list-scenes",
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();

    run(cli).unwrap();
    assert!(!output.exists());
}
