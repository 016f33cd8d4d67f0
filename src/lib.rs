#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for reporting on the palette of indexed PNG images.
//!
//! Given the bytes of an 8-bit palette PNG, this crate produces a table with
//! one row per palette entry: the entry's index, its red, green, blue, and
//! alpha values, and how many pixels of the image use that entry.
//!
//! ```no_run
//! # #[cfg(feature = "miniz_oxide")]
//! # fn demo() -> Result<(), png_palette::PaletteError> {
//! let png: &[u8] = unimplemented!("data from somewhere");
//! let report = png_palette::palette_report(png)?;
//! print!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! If you'd rather decode the pixel data some other way, implement
//! [`IndexRaster`](png::IndexRaster) and call [`palette_report_with`].

extern crate alloc;
use alloc::string::String;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod pixel_formats;
pub use pixel_formats::*;

mod error;
pub use error::*;

mod parser_helpers;
pub(crate) use parser_helpers::*;

pub mod histogram;
pub use histogram::*;

pub mod png;

pub mod report;
pub use report::*;

/// Runs the whole palette report pipeline using the built-in zlib decoder.
///
/// See [`palette_report_with`] for the stages.
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
pub fn palette_report(bytes: &[u8]) -> Result<String, PaletteError> {
  palette_report_with(bytes, &mut png::ZlibIndexRaster::default())
}

/// Runs the whole palette report pipeline with a caller-supplied raster
/// decoder.
///
/// 1) The signature and chunk stream are scanned (see [`png::scan_chunks`]).
/// 2) The image must be 8-bit palette color and have a palette.
/// 3) The `raster` decodes the pixel indices, which are counted into a
///    [`Histogram`].
/// 4) Palette, transparency, and histogram are merged and rendered.
///
/// The first failure stops the pipeline, so you get either the full report or
/// exactly one error.
pub fn palette_report_with<R: png::IndexRaster + ?Sized>(
  bytes: &[u8], raster: &mut R,
) -> Result<String, PaletteError> {
  let scanned = png::scan_chunks(bytes)?;
  let (ihdr, plte) = scanned.indexed_palette()?;
  let indices = raster.decode_indices(&ihdr, bytes)?;
  let histogram = Histogram::from_indices(&indices);
  let rows = assemble_rows(plte, scanned.trns(), &histogram);
  Ok(render_report(&rows))
}
