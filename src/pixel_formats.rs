//! Module for pixel formats.
//!
//! A PNG palette stores each entry as 8-bit red, green, and blue. The alpha
//! for an entry, if any, lives in a separate transparency chunk, so putting a
//! full color together means pairing an [`RGB8`] with an alpha byte.

use bytemuck::{Pod, Zeroable};

/// An 8-bits per channel RGB pixel.
///
/// This is exactly the layout of a PNG palette entry, so a palette's bytes can
/// be cast directly to `&[RGB8]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(C)]
#[allow(missing_docs)]
pub struct RGB8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}
impl RGB8 {
  /// Pairs this color with an alpha value.
  #[inline]
  #[must_use]
  pub const fn with_alpha(self, a: u8) -> RGBA8 {
    RGBA8 { r: self.r, g: self.g, b: self.b, a }
  }
}

/// An 8-bits per channel RGBA pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(C)]
#[allow(missing_docs)]
pub struct RGBA8 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}
