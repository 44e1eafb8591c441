//! # fabledeck-raster
//!
//! A small fixed-size RGB canvas for procedural illustrations.
//!
//! Shapes are painted with [tiny-skia](https://docs.rs/tiny-skia) without
//! anti-aliasing, so the last shape drawn over a pixel always owns it. Text is
//! shaped through `usvg` and rasterized with `resvg` using a shared
//! [`FontBook`].
//!
//! ## Example
//!
//! ```no_run
//! use fabledeck_raster::{BBox, Canvas, FontBook, Rgb, ShapeStyle};
//!
//! let mut canvas = Canvas::new(960, 540, Rgb::WHITE, FontBook::system())?;
//! canvas.rectangle(BBox::new(0, 0, 960, 360), ShapeStyle::fill(Rgb::new(135, 206, 235)))?;
//! canvas.ellipse(BBox::around(860, 60, 40), ShapeStyle::fill(Rgb::new(255, 223, 0)))?;
//! let png = canvas.encode_png()?;
//! # Ok::<(), fabledeck_raster::RasterError>(())
//! ```

pub mod canvas;
pub mod color;
pub mod error;
pub mod shape;
pub mod text;

pub use canvas::Canvas;
pub use color::Rgb;
pub use error::{RasterError, Result};
pub use shape::{BBox, ShapeStyle};
pub use text::FontBook;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
