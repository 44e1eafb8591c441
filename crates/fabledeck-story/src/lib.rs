//! # fabledeck-story
//!
//! Procedural illustrations and deck assembly for picture-book stories.
//!
//! - [`primitives`]: parameterized figures, terrain, sky objects and props
//! - [`scenes`]: one composition per story beat, selected by [`Scene`]
//! - [`story`]: the ordered slide table, built in or loaded from TOML
//! - [`assemble`]: turns a table into a [`fabledeck_pptx::Presentation`]
//!
//! ## Example
//!
//! ```no_run
//! use fabledeck_raster::FontBook;
//! use fabledeck_story::{DeckAssembler, DeckStyle, StoryTable};
//!
//! let assembler = DeckAssembler::new(DeckStyle::default(), FontBook::system());
//! let assembly = assembler.assemble(&StoryTable::wolf_story())?;
//! assembly.deck.save("狼来了.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemble;
pub mod config;
pub mod error;
pub mod palette;
pub mod primitives;
pub mod scenes;
pub mod story;

pub use assemble::{Assembly, AssemblyReport, DeckAssembler, SlideProgress};
pub use config::DeckStyle;
pub use error::{AssemblyStage, Result, StageError, StoryError};
pub use palette::{CanvasSize, Palette, Theme};
pub use scenes::Scene;
pub use story::{SlideRecord, StoryTable};
