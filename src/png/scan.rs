use super::*;
use crate::PaletteError;

/// Where a typed chunk slot is in its one-shot lifecycle.
///
/// A slot starts `Pending`. The first chunk that decodes into it moves it to
/// `Decoded`, and from then on chunks with the same tag are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Claim<T> {
  /// No chunk of this type has been decoded yet.
  Pending,
  /// The first chunk of this type, decoded.
  Decoded(T),
}
impl<T> Default for Claim<T> {
  #[inline]
  fn default() -> Self {
    Self::Pending
  }
}
impl<T> Claim<T> {
  /// If this slot is still taking chunks.
  #[inline]
  #[must_use]
  pub const fn is_pending(&self) -> bool {
    matches!(self, Self::Pending)
  }

  /// The decoded value, if any.
  #[inline]
  #[must_use]
  pub const fn decoded(&self) -> Option<&T> {
    match self {
      Self::Decoded(t) => Some(t),
      Self::Pending => None,
    }
  }
}

/// What the dispatcher did with one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
  /// The chunk was decoded into its typed slot.
  Claimed(ChunkTag),
  /// The chunk was unknown, a duplicate, or undecodable, and was skipped.
  Discarded(ChunkTag),
}

/// The typed chunks collected by a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScannedChunks<'b> {
  ihdr: Claim<IHDR>,
  plte: Claim<PLTE<'b>>,
  trns: Claim<tRNS<'b>>,
}
impl<'b> ScannedChunks<'b> {
  /// Offers one chunk to the typed slots.
  ///
  /// Slots are checked in the order IHDR, PLTE, tRNS. The first one that's
  /// still pending and has the same tag gets the chunk. If none do then the
  /// chunk is discarded. The payload was already fully read by the time this
  /// is called, so either way the stream position is the same.
  pub fn dispatch(&mut self, raw: &RawChunk<'b>) -> Dispatch {
    let tag = raw.header.tag;
    if tag == ChunkTag::IHDR && self.ihdr.is_pending() {
      match IHDR::try_from(raw.data) {
        Ok(ihdr) => {
          self.ihdr = Claim::Decoded(ihdr);
          return Dispatch::Claimed(tag);
        }
        Err(()) => {
          log::warn!("IHDR payload is {} bytes, need {}", raw.data.len(), IHDR::PAYLOAD_SIZE);
        }
      }
    } else if tag == ChunkTag::PLTE && self.plte.is_pending() {
      if raw.data.len() % 3 != 0 {
        log::warn!("PLTE length {} isn't a multiple of 3", raw.data.len());
      }
      self.plte = Claim::Decoded(PLTE::from(raw.data));
      return Dispatch::Claimed(tag);
    } else if tag == ChunkTag::tRNS && self.trns.is_pending() {
      self.trns = Claim::Decoded(tRNS::from(raw.data));
      return Dispatch::Claimed(tag);
    }
    Dispatch::Discarded(tag)
  }

  /// The image header, if one was found.
  #[inline]
  #[must_use]
  pub fn ihdr(&self) -> Option<IHDR> {
    self.ihdr.decoded().copied()
  }

  /// The palette, if one was found.
  #[inline]
  #[must_use]
  pub fn plte(&self) -> Option<PLTE<'b>> {
    self.plte.decoded().copied()
  }

  /// The transparency data, if any was found.
  #[inline]
  #[must_use]
  pub fn trns(&self) -> Option<tRNS<'b>> {
    self.trns.decoded().copied()
  }

  /// Gets the header and palette of an 8-bit indexed image.
  ///
  /// ## Failure
  /// * [`MissingIHDR`](PaletteError::MissingIHDR) if there's no header.
  /// * [`NotIndexedPalette`](PaletteError::NotIndexedPalette) if the bit depth
  ///   isn't 8, the color type isn't indexed, or there's no palette.
  pub fn indexed_palette(&self) -> Result<(IHDR, PLTE<'b>), PaletteError> {
    let ihdr = self.ihdr().ok_or(PaletteError::MissingIHDR)?;
    if !ihdr.is_indexed_8bit() {
      log::info!("bit depth {} with color type {}", ihdr.bit_depth, ihdr.color_type);
      return Err(PaletteError::NotIndexedPalette);
    }
    let plte = self.plte().ok_or(PaletteError::NotIndexedPalette)?;
    Ok((ihdr, plte))
  }
}

/// Checks the signature and then walks every chunk of the PNG.
///
/// ## Failure
/// * [`NotAContainerFormat`](PaletteError::NotAContainerFormat) if the
///   signature is wrong. No chunks are read in this case.
/// * [`TruncatedStream`](PaletteError::TruncatedStream) if any chunk runs past
///   the end of the data.
/// * [`MissingIHDR`](PaletteError::MissingIHDR) if the data ends without a
///   decodable header chunk.
pub fn scan_chunks(bytes: &[u8]) -> Result<ScannedChunks<'_>, PaletteError> {
  let chunk_bytes = check_signature(bytes)?;
  let mut scanned = ScannedChunks::default();
  for raw in RawChunkIter::new(chunk_bytes) {
    match scanned.dispatch(&raw?) {
      Dispatch::Claimed(tag) => log::debug!("Filled chunk {tag}"),
      Dispatch::Discarded(tag) => log::debug!("Discarded chunk {tag}"),
    }
  }
  if scanned.ihdr.is_pending() {
    return Err(PaletteError::MissingIHDR);
  }
  Ok(scanned)
}
