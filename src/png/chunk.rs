use core::fmt::{Debug, Display, Write};

use crate::{ByteCursor, PaletteError};

/// The 4 byte type tag of a chunk.
///
/// Chunk tags are intended to be ascii, but nothing enforces that. The `Debug`
/// and `Display` impls just `as` cast each byte to a `char`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTag(pub [u8; 4]);
#[allow(nonstandard_style)]
impl ChunkTag {
  /// Image header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Palette
  pub const PLTE: Self = Self(*b"PLTE");
  /// Transparency
  pub const tRNS: Self = Self(*b"tRNS");
  /// Image data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image end
  pub const IEND: Self = Self(*b"IEND");
}
impl Debug for ChunkTag {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    Display::fmt(self, f)?;
    f.write_char('\"')
  }
}
impl Display for ChunkTag {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}

/// The length and type that start every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkHeader {
  /// Payload bytes only, the header and CRC aren't counted.
  pub length: u32,
  /// What kind of chunk this is.
  pub tag: ChunkTag,
}
impl ChunkHeader {
  /// The byte size of a chunk header.
  pub const SIZE: usize = 8;

  /// Reads a header, moving the cursor forward exactly 8 bytes.
  ///
  /// The length isn't range checked here, that's the caller's job.
  #[inline]
  pub(crate) fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, PaletteError> {
    let length = cursor.take_u32_be()?;
    let tag = ChunkTag(cursor.take_array()?);
    Ok(Self { length, tag })
  }
}

/// An unparsed chunk from a PNG.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawChunk<'b> {
  /// The chunk's header.
  pub header: ChunkHeader,
  /// Exactly `header.length` payload bytes.
  pub data: &'b [u8],
  /// The CRC the file claims, which is never verified.
  pub declared_crc: u32,
}
impl Debug for RawChunk<'_> {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawChunk")
      .field("tag", &self.header.tag)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}

/// An iterator that produces successive raw chunks from the bytes after a PNG
/// signature.
///
/// * Ends normally only when the data ends exactly on a chunk boundary.
/// * If a chunk would run past the end of the data you get a single
///   [`TruncatedStream`](PaletteError::TruncatedStream) error and then the
///   iterator is done.
#[derive(Debug, Clone)]
pub struct RawChunkIter<'b> {
  cursor: ByteCursor<'b>,
}
impl<'b> RawChunkIter<'b> {
  /// Pass the bytes *after* the signature (see
  /// [`check_signature`](super::check_signature)).
  #[inline]
  #[must_use]
  pub const fn new(chunk_bytes: &'b [u8]) -> Self {
    Self { cursor: ByteCursor::new(chunk_bytes) }
  }

  /// How far into the chunk bytes the iterator has read.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> usize {
    self.cursor.position()
  }

  fn read_chunk(&mut self) -> Result<RawChunk<'b>, PaletteError> {
    let header = ChunkHeader::read(&mut self.cursor)?;
    // payload + crc must both fit in what's left, checked before we touch them.
    let needed = (header.length as usize).checked_add(4).ok_or(PaletteError::TruncatedStream)?;
    if needed > self.cursor.remaining() {
      log::warn!(
        "chunk {} declares {} bytes but only {} remain",
        header.tag,
        header.length,
        self.cursor.remaining().saturating_sub(4)
      );
      return Err(PaletteError::TruncatedStream);
    }
    let data = self.cursor.take(header.length as usize)?;
    let declared_crc = self.cursor.take_u32_be()?;
    Ok(RawChunk { header, data, declared_crc })
  }
}
impl<'b> Iterator for RawChunkIter<'b> {
  type Item = Result<RawChunk<'b>, PaletteError>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if self.cursor.is_at_end() {
      return None;
    }
    let out = self.read_chunk();
    if out.is_err() {
      self.cursor.exhaust();
    }
    Some(out)
  }
}
impl core::iter::FusedIterator for RawChunkIter<'_> {}
