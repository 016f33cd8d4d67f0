use crate::PaletteError;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Checks if the PNG's initial 8 bytes are correct.
///
/// * If this is the case, the rest of the bytes are very likely PNG data.
/// * If this is *not* the case, the rest of the bytes are very likely *not* PNG
///   data.
#[inline]
#[must_use]
pub const fn is_png_signature_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..])
}

/// Checks the signature and gives back the bytes that follow it.
pub fn check_signature(bytes: &[u8]) -> Result<&[u8], PaletteError> {
  match bytes {
    [a, b, c, d, e, f, g, h, rest @ ..] if [*a, *b, *c, *d, *e, *f, *g, *h] == PNG_SIGNATURE => {
      Ok(rest)
    }
    _ => Err(PaletteError::NotAContainerFormat),
  }
}

#[test]
fn test_check_signature() {
  let mut bytes = [0_u8; 12];
  bytes[..8].copy_from_slice(&PNG_SIGNATURE);
  assert_eq!(check_signature(&bytes).map(<[u8]>::len), Ok(4));
  assert!(is_png_signature_correct(&bytes));
  // too short
  assert_eq!(check_signature(&bytes[..7]), Err(PaletteError::NotAContainerFormat));
  // each byte matters
  for i in 0..8 {
    let mut bad = bytes;
    bad[i] ^= 0x20;
    assert_eq!(check_signature(&bad), Err(PaletteError::NotAContainerFormat), "byte {i}");
    assert!(!is_png_signature_correct(&bad));
  }
}
