use core::fmt;

/// An error from the `png_palette` crate.
///
/// Every stage of the report pipeline returns this type, and the first error
/// stops the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteError {
  /// The first 8 bytes are not the PNG signature.
  NotAContainerFormat,

  /// The chunk stream ended without a usable image header.
  MissingIHDR,

  /// A chunk declared more bytes than the stream had left.
  TruncatedStream,

  /// The image isn't 8-bit palette color, or it has no palette.
  NotIndexedPalette,

  /// The pixel data couldn't be decoded into palette indices.
  RasterDecodeFailed(RasterError),
}
impl fmt::Display for PaletteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NotAContainerFormat => f.write_str("not a PNG file"),
      Self::MissingIHDR => f.write_str("PNG corrupted: IHDR chunk not found"),
      Self::TruncatedStream => f.write_str("PNG corrupted: chunk runs past the end of the file"),
      Self::NotIndexedPalette => f.write_str("not an 8-bit indexed PNG"),
      Self::RasterDecodeFailed(e) => write!(f, "couldn't decode the pixel data: {e}"),
    }
  }
}
impl From<RasterError> for PaletteError {
  #[inline]
  fn from(e: RasterError) -> Self {
    Self::RasterDecodeFailed(e)
  }
}

/// Why a raster decoder failed to produce palette indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterError {
  /// The declared width and/or height of the image is 0.
  WidthOrHeightZero,

  /// The image is larger than the decoder's
  /// [`RasterLimits`](crate::png::RasterLimits) allow.
  DimensionsTooLarge,

  /// The allocator couldn't give us enough space.
  Alloc,

  /// The compressed image data wasn't a valid zlib stream.
  Decompress,

  /// The decompressed data was too short or used an unknown filter.
  Unfilter,
}
impl fmt::Display for RasterError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::WidthOrHeightZero => "width or height is zero",
      Self::DimensionsTooLarge => "image dimensions are too large",
      Self::Alloc => "allocation failed",
      Self::Decompress => "invalid zlib data",
      Self::Unfilter => "invalid scanline data",
    })
  }
}
impl From<alloc::collections::TryReserveError> for RasterError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}
