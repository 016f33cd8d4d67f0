use core::fmt::Debug;

/// Transparency data
///
/// For an indexed image this is one alpha byte per palette entry, in palette
/// order. There can be less alpha entries than palette entries, missing
/// entries are fully opaque (`0xFF`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
pub struct tRNS<'b>(&'b [u8]);
impl<'b> From<&'b [u8]> for tRNS<'b> {
  #[inline]
  fn from(data: &'b [u8]) -> Self {
    Self(data)
  }
}
impl Debug for tRNS<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("tRNS").field(&&self.0[..self.0.len().min(8)]).field(&self.0.len()).finish()
  }
}
impl<'b> tRNS<'b> {
  /// The alpha values, index aligned with the palette.
  #[inline]
  #[must_use]
  pub const fn to_alphas(&self) -> &'b [u8] {
    self.0
  }

  /// The alpha for a palette index, defaulting to opaque.
  #[inline]
  #[must_use]
  pub fn alpha_of(&self, index: usize) -> u8 {
    self.0.get(index).copied().unwrap_or(u8::MAX)
  }
}
