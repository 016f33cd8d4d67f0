use alloc::vec::Vec;

use super::*;
use crate::RasterError;

/// Turns a PNG's pixel data into one palette index byte per pixel.
///
/// The output is `width * height` bytes, row-major, starting at the top left.
/// The header given has already been checked to be an 8-bit indexed image.
///
/// Any `FnMut(&IHDR, &[u8]) -> Result<Vec<u8>, RasterError>` closure is also a
/// raster decoder, which is handy when the pixels come from somewhere else.
pub trait IndexRaster {
  /// Decodes the pixel indices of the full PNG `png`.
  fn decode_indices(&mut self, ihdr: &IHDR, png: &[u8]) -> Result<Vec<u8>, RasterError>;
}
impl<F> IndexRaster for F
where
  F: FnMut(&IHDR, &[u8]) -> Result<Vec<u8>, RasterError>,
{
  #[inline]
  fn decode_indices(&mut self, ihdr: &IHDR, png: &[u8]) -> Result<Vec<u8>, RasterError> {
    self(ihdr, png)
  }
}

/// Bounds on the images a raster decoder will agree to allocate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RasterLimits {
  /// widest image accepted, in pixels
  pub max_width: u32,
  /// tallest image accepted, in pixels
  pub max_height: u32,
}
impl Default for RasterLimits {
  /// Limits the width and height to 17,000 or less each.
  #[inline]
  fn default() -> Self {
    Self { max_width: 17_000, max_height: 17_000 }
  }
}
impl RasterLimits {
  /// Checks an image header against the limits.
  pub fn check(&self, ihdr: &IHDR) -> Result<(), RasterError> {
    if ihdr.width == 0 || ihdr.height == 0 {
      Err(RasterError::WidthOrHeightZero)
    } else if ihdr.width > self.max_width || ihdr.height > self.max_height {
      Err(RasterError::DimensionsTooLarge)
    } else {
      Ok(())
    }
  }
}

/// Gets an iterator over all the `IDAT` payloads in the PNG bytes.
///
/// Stops quietly at a bad signature or the first truncated chunk.
pub fn png_get_idat(png: &[u8]) -> impl Iterator<Item = &[u8]> {
  RawChunkIter::new(check_signature(png).unwrap_or(&[]))
    .map_while(Result::ok)
    .filter(|raw| raw.header.tag == ChunkTag::IDAT)
    .map(|raw| raw.data)
}

/// One pass of a (possibly interlaced) image.
///
/// Pixel `(rx, ry)` of the pass's reduced image is at
/// `(x_offset + rx * x_step, y_offset + ry * y_step)` in the full image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pass {
  x_offset: u32,
  y_offset: u32,
  x_step: u32,
  y_step: u32,
}
impl Pass {
  const fn new(x_offset: u32, y_offset: u32, x_step: u32, y_step: u32) -> Self {
    Self { x_offset, y_offset, x_step, y_step }
  }

  #[inline]
  #[must_use]
  const fn reduced_dimensions(&self, full_width: u32, full_height: u32) -> (u32, u32) {
    const fn reduce(full: u32, offset: u32, step: u32) -> u32 {
      if full > offset {
        (full - offset + step - 1) / step
      } else {
        0
      }
    }
    (
      reduce(full_width, self.x_offset, self.x_step),
      reduce(full_height, self.y_offset, self.y_step),
    )
  }

  #[inline]
  #[must_use]
  const fn full_position(&self, reduced_x: u32, reduced_y: u32) -> (u32, u32) {
    (self.x_offset + reduced_x * self.x_step, self.y_offset + reduced_y * self.y_step)
  }
}

const NOT_INTERLACED: [Pass; 1] = [Pass::new(0, 0, 1, 1)];

// ```
// 1 6 4 6 2 6 4 6
// 7 7 7 7 7 7 7 7
// 5 6 5 6 5 6 5 6
// 7 7 7 7 7 7 7 7
// 3 6 4 6 3 6 4 6
// 7 7 7 7 7 7 7 7
// 5 6 5 6 5 6 5 6
// 7 7 7 7 7 7 7 7
// ```
const ADAM7: [Pass; 7] = [
  Pass::new(0, 0, 8, 8),
  Pass::new(4, 0, 8, 8),
  Pass::new(0, 4, 4, 8),
  Pass::new(2, 0, 4, 4),
  Pass::new(0, 2, 2, 4),
  Pass::new(1, 0, 2, 2),
  Pass::new(0, 1, 1, 2),
];

#[inline]
fn passes_of(ihdr: &IHDR) -> &'static [Pass] {
  if ihdr.is_interlaced() {
    &ADAM7
  } else {
    &NOT_INTERLACED
  }
}

/// Gets the buffer size required to perform Zlib decompression of an 8-bit
/// indexed image.
///
/// Each line of each pass is a filter byte plus one byte per pixel.
#[must_use]
pub fn zlib_decompression_requirement(ihdr: &IHDR) -> usize {
  passes_of(ihdr).iter().fold(0_usize, |total, pass| {
    let (w, h) = pass.reduced_dimensions(ihdr.width, ihdr.height);
    if w == 0 {
      return total;
    }
    let bytes_per_filterline = (w as usize).saturating_add(1);
    total.saturating_add(bytes_per_filterline.saturating_mul(h as usize))
  })
}

#[inline]
#[must_use]
const fn paeth_predict(a: u8, b: u8, c: u8) -> u8 {
  let a_ = a as i32;
  let b_ = b as i32;
  let c_ = c as i32;
  let p: i32 = a_ + b_ - c_;
  let pa = (p - a_).abs();
  let pb = (p - b_).abs();
  let pc = (p - c_).abs();
  // the order of these tests decides ties, don't reorder them.
  if pa <= pb && pa <= pc {
    a
  } else if pb <= pc {
    b
  } else {
    c
  }
}

/// Reverses the filter on one line of 1 byte per pixel data.
///
/// `prev` is the already unfiltered line above, or empty for a pass's first
/// line (which acts like a line of zeros).
fn unfilter_line(filter: u8, line: &mut [u8], prev: &[u8]) -> Result<(), RasterError> {
  let above = |i: usize| prev.get(i).copied().unwrap_or(0);
  match filter {
    0 => (),
    1 => {
      // Sub
      for i in 1..line.len() {
        line[i] = line[i].wrapping_add(line[i - 1]);
      }
    }
    2 => {
      // Up
      for (i, p) in line.iter_mut().enumerate() {
        *p = p.wrapping_add(above(i));
      }
    }
    3 => {
      // Average
      for i in 0..line.len() {
        let a = if i > 0 { line[i - 1] } else { 0 };
        line[i] = line[i].wrapping_add(((a as u16 + above(i) as u16) / 2) as u8);
      }
    }
    4 => {
      // Paeth
      for i in 0..line.len() {
        let (a, c) = if i > 0 { (line[i - 1], above(i - 1)) } else { (0, 0) };
        line[i] = line[i].wrapping_add(paeth_predict(a, above(i), c));
      }
    }
    _ => {
      log::warn!("unknown filter type {filter}");
      return Err(RasterError::Unfilter);
    }
  }
  Ok(())
}

/// Unfilters 8-bit indexed data from the zlib decompression buffer.
///
/// The `op(x, y, index)` closure is called once per pixel with the pixel's
/// position in the full image. Interlaced passes are placed for you.
pub fn unfilter_indices<F>(
  ihdr: &IHDR, decompressed: &mut [u8], mut op: F,
) -> Result<(), RasterError>
where
  F: FnMut(u32, u32, u8),
{
  let mut rest = decompressed;
  for pass in passes_of(ihdr) {
    let (reduced_width, reduced_height) = pass.reduced_dimensions(ihdr.width, ihdr.height);
    if reduced_width == 0 || reduced_height == 0 {
      // the full image is non-empty, but a reduced image can still be.
      continue;
    }
    let bytes_per_filterline = reduced_width as usize + 1;
    let bytes_used_this_pass = bytes_per_filterline.saturating_mul(reduced_height as usize);
    if rest.len() < bytes_used_this_pass {
      return Err(RasterError::Unfilter);
    }
    let (these_bytes, more_bytes) = core::mem::take(&mut rest).split_at_mut(bytes_used_this_pass);
    rest = more_bytes;

    let mut prev: &[u8] = &[];
    for (reduced_y, filterline) in these_bytes.chunks_exact_mut(bytes_per_filterline).enumerate() {
      let (f, pixels) = filterline.split_at_mut(1);
      unfilter_line(f[0], pixels, prev)?;
      for (reduced_x, index) in pixels.iter().copied().enumerate() {
        let (x, y) = pass.full_position(reduced_x as u32, reduced_y as u32);
        op(x, y, index);
      }
      prev = pixels;
    }
  }
  Ok(())
}

/// The built-in raster decoder: zlib via `miniz_oxide`, then unfiltering.
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ZlibIndexRaster {
  /// Images outside these limits are refused before any allocation.
  pub limits: RasterLimits,
}
#[cfg(feature = "miniz_oxide")]
impl ZlibIndexRaster {
  /// Makes a decoder with the given limits.
  #[inline]
  #[must_use]
  pub const fn new(limits: RasterLimits) -> Self {
    Self { limits }
  }
}
#[cfg(feature = "miniz_oxide")]
impl IndexRaster for ZlibIndexRaster {
  fn decode_indices(&mut self, ihdr: &IHDR, png: &[u8]) -> Result<Vec<u8>, RasterError> {
    self.limits.check(ihdr)?;
    let width = ihdr.width as usize;
    let pixel_count =
      width.checked_mul(ihdr.height as usize).ok_or(RasterError::DimensionsTooLarge)?;

    // IDAT payloads are one zlib stream that can be cut anywhere, even just
    // before the end-of-block code, so they're inflated as a single slice.
    let idat_len = png_get_idat(png).fold(0_usize, |total, idat| total.saturating_add(idat.len()));
    let mut zlib_stream: Vec<u8> = Vec::new();
    zlib_stream.try_reserve(idat_len)?;
    png_get_idat(png).for_each(|idat| zlib_stream.extend_from_slice(idat));

    let zlib_len = zlib_decompression_requirement(ihdr);
    let mut zlib_buffer: Vec<u8> = Vec::new();
    zlib_buffer.try_reserve(zlib_len)?;
    zlib_buffer.resize(zlib_len, 0);
    let decompression_count = miniz_oxide::inflate::decompress_slice_iter_to_slice(
      &mut zlib_buffer,
      core::iter::once(zlib_stream.as_slice()),
      true,
      true,
    )
    .map_err(|e| {
      log::warn!("zlib decompression failed: {e:?}");
      RasterError::Decompress
    })?;
    if decompression_count < zlib_len {
      log::warn!("expected {zlib_len} decompressed bytes, got {decompression_count}");
      return Err(RasterError::Unfilter);
    }

    let mut indices: Vec<u8> = Vec::new();
    indices.try_reserve(pixel_count)?;
    indices.resize(pixel_count, 0);
    unfilter_indices(ihdr, &mut zlib_buffer, |x, y, index| {
      if let Some(p) = indices.get_mut(y as usize * width + x as usize) {
        *p = index;
      }
    })?;
    Ok(indices)
  }
}
