#![forbid(unsafe_code)]

//! Counts how many pixels use each palette index.

/// A count of pixels per palette index.
///
/// Every `u8` index has a slot, but an index only counts as *present* once at
/// least one pixel uses it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Histogram {
  counts: [u64; 256],
}
impl Default for Histogram {
  #[inline]
  fn default() -> Self {
    Self { counts: [0; 256] }
  }
}
impl core::fmt::Debug for Histogram {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}
impl Histogram {
  /// Counts every index in a decoded image.
  #[must_use]
  pub fn from_indices(indices: &[u8]) -> Self {
    let mut out = Self::default();
    for &index in indices {
      out.add(index, 1);
    }
    out
  }

  /// Adds `count` more pixels for an index.
  #[inline]
  pub fn add(&mut self, index: u8, count: u64) {
    let slot = &mut self.counts[usize::from(index)];
    *slot = slot.saturating_add(count);
  }

  /// The count for an index, or `None` if no pixel uses it.
  #[inline]
  #[must_use]
  pub fn get(&self, index: u8) -> Option<u64> {
    match self.counts[usize::from(index)] {
      0 => None,
      n => Some(n),
    }
  }

  /// The number of distinct indices used.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.counts.iter().filter(|&&n| n != 0).count()
  }

  /// If no index is used at all.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Iterates `(index, count)` for the used indices, lowest index first.
  #[inline]
  pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
    (0..=u8::MAX).zip(self.counts.iter().copied()).filter(|&(_, n)| n != 0)
  }
}
impl FromIterator<u8> for Histogram {
  #[inline]
  fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
    let mut out = Self::default();
    iter.into_iter().for_each(|index| out.add(index, 1));
    out
  }
}
impl Extend<(u8, u64)> for Histogram {
  #[inline]
  fn extend<I: IntoIterator<Item = (u8, u64)>>(&mut self, iter: I) {
    iter.into_iter().for_each(|(index, count)| self.add(index, count));
  }
}

#[test]
fn test_histogram_counts() {
  let h = Histogram::from_indices(&[3, 0, 3, 255, 3]);
  assert_eq!(h.get(3), Some(3));
  assert_eq!(h.get(0), Some(1));
  assert_eq!(h.get(255), Some(1));
  assert_eq!(h.get(1), None);
  assert_eq!(h.len(), 3);
  assert!(h.iter().eq([(0, 1), (3, 3), (255, 1)]));
  assert_eq!(h, [255_u8, 3, 3, 0, 3].into_iter().collect::<Histogram>());
  assert!(Histogram::default().is_empty());
}

#[test]
fn test_histogram_extend() {
  let mut h = Histogram::default();
  h.extend([(7, 10), (7, 5), (2, 0)]);
  assert_eq!(h.get(7), Some(15));
  assert_eq!(h.get(2), None);
}
