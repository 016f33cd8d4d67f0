#![forbid(unsafe_code)]

//! A byte cursor and the big-endian shorthands the chunk parser uses.

use crate::PaletteError;

#[inline]
#[must_use]
pub(crate) const fn u32_be(bytes: [u8; 4]) -> u32 {
  u32::from_be_bytes(bytes)
}

/// Reads forward through a byte slice, never past its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ByteCursor<'b> {
  bytes: &'b [u8],
  position: usize,
}
impl<'b> ByteCursor<'b> {
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self { bytes, position: 0 }
  }

  /// How many bytes have been consumed so far.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> usize {
    self.position
  }

  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> usize {
    self.bytes.len() - self.position
  }

  #[inline]
  #[must_use]
  pub const fn is_at_end(&self) -> bool {
    self.remaining() == 0
  }

  /// Takes `count` bytes, or fails without moving if fewer remain.
  #[inline]
  pub fn take(&mut self, count: usize) -> Result<&'b [u8], PaletteError> {
    if count > self.remaining() {
      return Err(PaletteError::TruncatedStream);
    }
    let (head, _) = self.bytes[self.position..].split_at(count);
    self.position += count;
    Ok(head)
  }

  #[inline]
  pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], PaletteError> {
    let mut a = [0_u8; N];
    a.copy_from_slice(self.take(N)?);
    Ok(a)
  }

  #[inline]
  pub fn take_u32_be(&mut self) -> Result<u32, PaletteError> {
    self.take_array::<4>().map(u32_be)
  }

  /// Puts the cursor at the end, so nothing more can be read.
  #[inline]
  pub fn exhaust(&mut self) {
    self.position = self.bytes.len();
  }
}

#[test]
fn test_byte_cursor_never_reads_past_end() {
  let mut c = ByteCursor::new(&[0, 0, 1, 2, 9]);
  assert_eq!(c.take_u32_be(), Ok(258));
  assert_eq!(c.position(), 4);
  assert_eq!(c.take(2), Err(PaletteError::TruncatedStream));
  assert_eq!(c.position(), 4);
  assert_eq!(c.take(1), Ok(&[9_u8][..]));
  assert!(c.is_at_end());
  assert_eq!(c.take(0), Ok(&[][..]));
}
