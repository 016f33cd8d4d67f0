use core::fmt::Debug;

use crate::pixel_formats::RGB8;

/// Palette data
///
/// Palette entries are always RGB.
///
/// If you want to have a paletted image with transparency then the transparency
/// info goes in a separate transparency chunk.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PLTE<'b>(&'b [RGB8]);
impl<'b> From<&'b [RGB8]> for PLTE<'b> {
  #[inline]
  fn from(entries: &'b [RGB8]) -> Self {
    Self(entries)
  }
}
impl<'b> From<&'b [u8]> for PLTE<'b> {
  /// Every whole 3 byte group is one entry.
  ///
  /// A legal palette length is always a multiple of 3. If it isn't, the
  /// leftover 1 or 2 bytes are dropped.
  #[inline]
  fn from(data: &'b [u8]) -> Self {
    let whole = data.len() - (data.len() % 3);
    Self(bytemuck::cast_slice(&data[..whole]))
  }
}
impl Debug for PLTE<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // currently prints no more than 4 palette entries
    f.debug_tuple("PLTE").field(&&self.0[..self.0.len().min(4)]).field(&self.0.len()).finish()
  }
}
impl<'b> PLTE<'b> {
  /// Gets the entries as a slice.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &'b [RGB8] {
    self.0
  }
}

#[test]
fn test_plte_truncates_partial_entry() {
  let data = [255, 0, 0, 0, 255, 0, 9, 9];
  let plte = PLTE::from(&data[..]);
  assert_eq!(plte.entries(), &[RGB8 { r: 255, g: 0, b: 0 }, RGB8 { r: 0, g: 255, b: 0 }]);
  assert!(PLTE::from(&data[..2]).entries().is_empty());
}
