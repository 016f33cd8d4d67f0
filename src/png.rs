#![forbid(unsafe_code)]

//! Module for working with PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Chunk Scanning
//!
//! A PNG is an 8 byte signature followed by a series of "chunks". Each chunk
//! is a big-endian `u32` length, a 4 byte type tag, that many bytes of
//! payload, and a 4 byte CRC.
//!
//! [`scan_chunks`] checks the signature and then walks every chunk up to the
//! end of the data. Only three chunk types matter for a palette report:
//! * **Header** ([`IHDR`]) - dimensions and pixel format. Required.
//! * **Palette** ([`PLTE`]) - the `RGB8` value of each index.
//! * **Transparency** ([`tRNS`]) - the alpha value of each index. Optional, and
//!   allowed to be shorter than the palette.
//!
//! The first decodable chunk of each of those types is kept. Everything else,
//! including later duplicates, is skipped.
//!
//! ## Parsing Errors
//!
//! The scanner is deliberately forgiving about things that don't affect the
//! report:
//! * Chunk ordering rules are ignored.
//! * Duplicate chunks are ignored (you get the first one).
//! * CRC values are read to keep the position correct, but never checked.
//!
//! It is strict about structure: a bad signature, a chunk that runs past the
//! end of the data, or a missing header are all errors.
//!
//! ## Pixel Data
//!
//! Counting how often each index is used requires the actual pixels. That's
//! done through the [`IndexRaster`] trait. With the `miniz_oxide` feature the
//! crate provides [`ZlibIndexRaster`], which inflates and unfilters the `IDAT`
//! data itself.

mod signature;
pub use signature::*;

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod plte;
pub use plte::*;

mod trns;
pub use trns::*;

mod scan;
pub use scan::*;

mod raster;
pub use raster::*;
