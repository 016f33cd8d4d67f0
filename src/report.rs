//! Merging a palette with its pixel counts, and printing the result.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use crate::{
  png::{tRNS, PLTE},
  Histogram,
};

/// The first line of every report.
pub const REPORT_HEADER: &str = "Color index, R value, G value, B value, A value, Frequency";

/// One palette entry's line of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct ReportRow {
  pub index: u8,
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
  /// How many pixels use this index.
  pub frequency: u64,
}
impl fmt::Display for ReportRow {
  /// The fields in order, joined by `", "`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Self { index, r, g, b, a, frequency } = self;
    write!(f, "{index}, {r}, {g}, {b}, {a}, {frequency}")
  }
}

/// Builds one row per palette entry, in index order.
///
/// * Alpha comes from the transparency chunk when it has an entry for the
///   index, and is 255 otherwise.
/// * Frequency is 0 for indices the histogram doesn't have.
/// * Histogram entries past the end of the palette are not reported.
///
/// Only the first 256 palette entries can be addressed by an 8-bit index, so
/// any beyond that are left out.
#[must_use]
pub fn assemble_rows(plte: PLTE<'_>, trns: Option<tRNS<'_>>, histogram: &Histogram) -> Vec<ReportRow> {
  let entries = plte.entries();
  if entries.len() > 256 {
    log::warn!("palette has {} entries, only the first 256 are reported", entries.len());
  }
  (0..=u8::MAX)
    .zip(entries)
    .map(|(index, color)| {
      let a = trns.map_or(u8::MAX, |t| t.alpha_of(usize::from(index)));
      let rgba = color.with_alpha(a);
      ReportRow {
        index,
        r: rgba.r,
        g: rgba.g,
        b: rgba.b,
        a: rgba.a,
        frequency: histogram.get(index).unwrap_or(0),
      }
    })
    .collect()
}

/// Renders rows as comma separated text, starting with [`REPORT_HEADER`].
///
/// Every line, including the last, ends with `\n`.
#[must_use]
pub fn render_report(rows: &[ReportRow]) -> String {
  let mut out = String::with_capacity((rows.len() + 1) * 32);
  out.push_str(REPORT_HEADER);
  out.push('\n');
  for row in rows {
    // writing to a String can't fail
    let _ = writeln!(out, "{row}");
  }
  out
}
