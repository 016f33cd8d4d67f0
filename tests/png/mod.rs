use png_palette::{
  palette_report, palette_report_with,
  png::{scan_chunks, IndexRaster, RasterLimits, ZlibIndexRaster, IHDR},
  PaletteError, RasterError,
};

use super::{build_png, ihdr_payload, rand_bytes};

const HEADER_LINE: &str = "Color index, R value, G value, B value, A value, Frequency\n";

fn zlib(filtered: &[u8]) -> Vec<u8> {
  miniz_oxide::deflate::compress_to_vec_zlib(filtered, 6)
}

/// A raster decoder that hands back fixed indices without looking at IDAT.
fn fixed_indices(indices: Vec<u8>) -> impl FnMut(&IHDR, &[u8]) -> Result<Vec<u8>, RasterError> {
  move |_, _| Ok(indices.clone())
}

#[test]
fn test_example_scenario() {
  let bytes = build_png(&[
    (b"IHDR", &ihdr_payload(2, 1, 8, 3, 0)),
    (b"PLTE", &[255, 0, 0, 0, 255, 0]),
    (b"tRNS", &[128]),
    (b"IDAT", &zlib(&[0, 0, 1])),
    (b"IEND", &[]),
  ]);
  let expected = format!("{HEADER_LINE}0, 255, 0, 0, 128, 1\n1, 0, 255, 0, 255, 1\n");
  assert_eq!(palette_report(&bytes).unwrap(), expected);
  // same answer when the histogram comes from elsewhere
  let mut raster = fixed_indices(vec![0, 1]);
  assert_eq!(palette_report_with(&bytes, &mut raster).unwrap(), expected);
}

#[test]
fn test_frequencies_with_filters_and_split_idat() {
  // 3x3, rows use Sub, Up, and Paeth filters. Unfiltered indices:
  // 0 1 1
  // 2 1 1
  // 2 2 0
  let filtered = [
    1, 0, 1, 0, //
    2, 2, 0, 0, //
    4, 0, 1, 254, //
  ];
  let compressed = zlib(&filtered);
  let (first, second) = compressed.split_at(compressed.len() / 2);
  let bytes = build_png(&[
    (b"IHDR", &ihdr_payload(3, 3, 8, 3, 0)),
    (b"PLTE", &[10, 10, 10, 20, 20, 20, 30, 30, 30, 40, 40, 40]),
    (b"tEXt", b"Comment\0made by hand"),
    (b"IDAT", first),
    (b"IDAT", second),
    (b"IEND", &[]),
  ]);
  let report = palette_report(&bytes).unwrap();
  let lines: Vec<&str> = report.lines().collect();
  assert_eq!(
    lines,
    [
      HEADER_LINE.trim_end(),
      "0, 10, 10, 10, 255, 2",
      "1, 20, 20, 20, 255, 4",
      "2, 30, 30, 30, 255, 3",
      "3, 40, 40, 40, 255, 0",
    ]
  );
}

#[test]
fn test_idat_split_at_every_offset() {
  // 4x1, filter None, indices 4 3 0 1. Cutting after byte 8 leaves the
  // end-of-block code and the adler32 for the second IDAT.
  let stream: &[u8] = &[0x78, 0x5E, 0x63, 0x60, 0x61, 0x66, 0x60, 0x04, 0x00, 0x00, 0x1F, 0x00, 0x09];
  let ihdr = ihdr_payload(4, 1, 8, 3, 0);
  let palette: &[u8] = &[0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4];
  let expected = format!(
    "{HEADER_LINE}0, 0, 0, 0, 255, 1\n1, 1, 1, 1, 255, 1\n2, 2, 2, 2, 255, 0\n3, 3, 3, 3, 255, 1\n4, 4, 4, 4, 255, 1\n"
  );

  let whole = build_png(&[(b"IHDR", &ihdr), (b"PLTE", palette), (b"IDAT", stream)]);
  assert_eq!(palette_report(&whole).unwrap(), expected);

  for cut in 0..=stream.len() {
    let (first, second) = stream.split_at(cut);
    let bytes = build_png(&[(b"IHDR", &ihdr), (b"PLTE", palette), (b"IDAT", first), (b"IDAT", second)]);
    assert_eq!(palette_report(&bytes), Ok(expected.clone()), "cut at {cut}");
  }

  // one IDAT per byte, so the last one holds only the end of the adler32
  let mut chunks: Vec<(&[u8; 4], &[u8])> = vec![(b"IHDR", &ihdr[..]), (b"PLTE", palette)];
  chunks.extend(stream.chunks(1).map(|byte| (b"IDAT", byte)));
  assert_eq!(palette_report(&build_png(&chunks)).unwrap(), expected);

  // Sub filtered 16x1: eleven pixels of 7, then five of 1
  let filtered = [1, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 250, 0, 0, 0, 0];
  let compressed = zlib(&filtered);
  let wide = ihdr_payload(16, 1, 8, 3, 0);
  let expected = format!(
    "{HEADER_LINE}0, 0, 0, 0, 255, 0\n1, 1, 1, 1, 255, 5\n2, 2, 2, 2, 255, 0\n3, 3, 3, 3, 255, 0\n4, 4, 4, 4, 255, 0\n"
  );
  for cut in 0..=compressed.len() {
    let (first, second) = compressed.split_at(cut);
    let bytes = build_png(&[(b"IHDR", &wide), (b"PLTE", palette), (b"IDAT", first), (b"IDAT", second)]);
    assert_eq!(palette_report(&bytes), Ok(expected.clone()), "cut at {cut}");
  }
}

#[test]
fn test_interlaced_image() {
  // 2x2 interlaced: pass 1 has (0,0), pass 6 has (1,0), pass 7 has row 1.
  let filtered = [
    0, 3, // pass 1
    0, 1, // pass 6
    0, 1, 2, // pass 7
  ];
  let bytes = build_png(&[
    (b"IHDR", &ihdr_payload(2, 2, 8, 3, 1)),
    (b"PLTE", &[0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3]),
    (b"IDAT", &zlib(&filtered)),
  ]);
  let report = palette_report(&bytes).unwrap();
  assert_eq!(
    report,
    format!("{HEADER_LINE}0, 0, 0, 0, 255, 0\n1, 1, 1, 1, 255, 2\n2, 2, 2, 2, 255, 1\n3, 3, 3, 3, 255, 1\n")
  );
}

#[test]
fn test_duplicate_plte_ignored() {
  let bytes = build_png(&[
    (b"IHDR", &ihdr_payload(1, 1, 8, 3, 0)),
    (b"PLTE", &[1, 2, 3]),
    (b"PLTE", &[9, 9, 9, 8, 8, 8]),
  ]);
  let report = palette_report_with(&bytes, &mut fixed_indices(vec![0])).unwrap();
  assert_eq!(report, format!("{HEADER_LINE}0, 1, 2, 3, 255, 1\n"));
}

#[test]
fn test_indices_past_palette_not_reported() {
  let bytes = build_png(&[(b"IHDR", &ihdr_payload(3, 1, 8, 3, 0)), (b"PLTE", &[5, 6, 7])]);
  let report = palette_report_with(&bytes, &mut fixed_indices(vec![0, 7, 7])).unwrap();
  assert_eq!(report, format!("{HEADER_LINE}0, 5, 6, 7, 255, 1\n"));
}

#[test]
fn test_error_kinds() {
  let mut raster = fixed_indices(vec![0]);
  assert_eq!(
    palette_report_with(b"GIF89a, definitely", &mut raster),
    Err(PaletteError::NotAContainerFormat)
  );
  let no_plte = build_png(&[(b"IHDR", &ihdr_payload(1, 1, 8, 3, 0))]);
  assert_eq!(palette_report_with(&no_plte, &mut raster), Err(PaletteError::NotIndexedPalette));
  let deep = build_png(&[(b"IHDR", &ihdr_payload(1, 1, 24, 3, 0)), (b"PLTE", &[1, 2, 3])]);
  assert_eq!(palette_report_with(&deep, &mut raster), Err(PaletteError::NotIndexedPalette));
  let no_ihdr = build_png(&[(b"PLTE", &[1, 2, 3])]);
  assert_eq!(palette_report_with(&no_ihdr, &mut raster), Err(PaletteError::MissingIHDR));

  let mut truncated = build_png(&[(b"IHDR", &ihdr_payload(1, 1, 8, 3, 0))]);
  truncated.extend_from_slice(&10_u32.to_be_bytes());
  truncated.extend_from_slice(b"PLTE");
  truncated.extend_from_slice(&[1, 2]);
  assert_eq!(palette_report_with(&truncated, &mut raster), Err(PaletteError::TruncatedStream));
}

#[test]
fn test_raster_errors() {
  let palette: &[u8] = &[1, 2, 3];
  let garbage_idat = build_png(&[
    (b"IHDR", &ihdr_payload(1, 1, 8, 3, 0)),
    (b"PLTE", palette),
    (b"IDAT", &[0xDE, 0xAD, 0xBE, 0xEF]),
  ]);
  assert_eq!(
    palette_report(&garbage_idat),
    Err(PaletteError::RasterDecodeFailed(RasterError::Decompress))
  );

  let short_idat = build_png(&[
    (b"IHDR", &ihdr_payload(4, 4, 8, 3, 0)),
    (b"PLTE", palette),
    (b"IDAT", &zlib(&[0, 0])),
  ]);
  assert!(matches!(palette_report(&short_idat), Err(PaletteError::RasterDecodeFailed(_))));

  let big = build_png(&[(b"IHDR", &ihdr_payload(20, 1, 8, 3, 0)), (b"PLTE", palette)]);
  let mut small_limits = ZlibIndexRaster::new(RasterLimits { max_width: 16, max_height: 16 });
  assert_eq!(
    palette_report_with(&big, &mut small_limits),
    Err(PaletteError::RasterDecodeFailed(RasterError::DimensionsTooLarge))
  );

  let empty = build_png(&[(b"IHDR", &ihdr_payload(0, 1, 8, 3, 0)), (b"PLTE", palette)]);
  assert_eq!(
    ZlibIndexRaster::default().decode_indices(&scan_chunks(&empty).unwrap().ihdr().unwrap(), &empty),
    Err(RasterError::WidthOrHeightZero)
  );
}

#[test]
fn test_scan_random_data_no_panics() {
  // totally random data after a good signature should never panic the scanner
  for _ in 0..10 {
    let mut v = png_palette::png::PNG_SIGNATURE.to_vec();
    v.extend(rand_bytes(1024));
    let _ = scan_chunks(&v);
    let _ = palette_report(&v);
  }
}
