//! fabledeck CLI - Command-line interface library
//!
//! Renders a story table into an illustrated PPTX deck.
//!
//! # Library Usage
//!
//! ```ignore
//! use fabledeck_cli::{generate_command, GenerateOptions};
//!
//! let summary = generate_command(&GenerateOptions {
//!     output: "story.pptx".into(),
//!     story: None,
//!     config: None,
//!     scene_text: true,
//! })?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Built-in story, written to ./狼来了.pptx
//! fabledeck
//!
//! # Custom slide table and style
//! fabledeck --story story.toml --config style.toml --output deck.pptx
//!
//! # Scene names usable in a slide table
//! fabledeck --list-scenes
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{generate_command, list_scenes_command, run, run_cli};
pub use app::{Cli, GenerateOptions, GenerateSummary, DEFAULT_OUTPUT};
