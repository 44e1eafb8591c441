//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use fabledeck_raster::FontBook;
use fabledeck_story::{DeckAssembler, DeckStyle, Scene, StoryTable};

/// Output file written when `--output` is not given
pub const DEFAULT_OUTPUT: &str = "狼来了.pptx";

#[derive(Parser, Debug)]
#[command(name = "fabledeck")]
#[command(author, version, about = "Render an illustrated story into a slide deck", long_about = None)]
pub struct Cli {
    /// Output PPTX file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// TOML slide table to use instead of the built-in story
    #[arg(short, long)]
    pub story: Option<PathBuf>,

    /// TOML deck style (colors, body fill, opacity, metadata)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the available scene names and exit
    #[arg(long)]
    pub list_scenes: bool,

    /// Skip loading system fonts; scene text is left out of the illustrations
    #[arg(long)]
    pub no_scene_text: bool,
}

/// Inputs of a generate run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output: PathBuf,
    pub story: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub scene_text: bool,
}

impl From<&Cli> for GenerateOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            output: cli.output.clone(),
            story: cli.story.clone(),
            config: cli.config.clone(),
            scene_text: !cli.no_scene_text,
        }
    }
}

/// What a generate run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub slides: usize,
    /// Pages whose caption box could not be made translucent
    pub opaque_captions: usize,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It installs logging, parses arguments and dispatches.
pub fn run_cli() -> Result<()> {
    init_logging();
    run(Cli::parse())
}

/// Dispatch parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.list_scenes {
        list_scenes_command();
        return Ok(());
    }

    generate_command(&GenerateOptions::from(&cli))?;
    Ok(())
}

/// Log to stderr at INFO unless `RUST_LOG` says otherwise
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print every scene name, one per line, in story order
pub fn list_scenes_command() {
    for scene in Scene::ALL {
        println!("{}", scene);
    }
}

/// Load inputs, assemble the deck and write it to `options.output`
pub fn generate_command(options: &GenerateOptions) -> Result<GenerateSummary> {
    let table = load_story(options.story.as_deref())?;
    let style = load_style(options.config.as_deref())?;

    let fonts = if options.scene_text {
        FontBook::system()
    } else {
        FontBook::empty()
    };
    info!(
        slides = table.len(),
        fonts = fonts.face_count(),
        output = %options.output.display(),
        "Generating deck"
    );

    let assembler = DeckAssembler::new(style, fonts);
    let assembly = assembler
        .assemble_with(
            &table,
            |record, theme, fonts| record.scene.render(theme, fonts),
            |progress| {
                println!(
                    "  [{}/{}] {}",
                    progress.number, progress.total, progress.record.scene
                )
            },
        )
        .context("Failed to assemble deck")?;

    assembly
        .deck
        .save(&options.output)
        .with_context(|| format!("Failed to write deck: {}", options.output.display()))?;

    let summary = GenerateSummary {
        output: options.output.clone(),
        slides: assembly.deck.slide_count(),
        opaque_captions: assembly.report.opacity_skipped.len(),
    };
    println!(
        "✅ PPT 已生成: {}  ({} 页)",
        summary.output.display(),
        summary.slides
    );
    Ok(summary)
}

fn load_story(path: Option<&Path>) -> Result<StoryTable> {
    let table = match path {
        Some(path) => StoryTable::from_file(path)
            .with_context(|| format!("Failed to load story table: {}", path.display()))?,
        None => StoryTable::wolf_story(),
    };
    table.validate().context("Invalid story table")?;
    Ok(table)
}

fn load_style(path: Option<&Path>) -> Result<DeckStyle> {
    let style = match path {
        Some(path) => DeckStyle::from_file(path)
            .with_context(|| format!("Failed to load deck style: {}", path.display()))?,
        None => DeckStyle::default(),
    };
    style.validate().context("Invalid deck style")?;
    Ok(style)
}
