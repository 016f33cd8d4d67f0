use crate::u32_be;

/// The types of color that PNG supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into a palette.
  ///
  /// The palette will have RGB8 data. There may optionally be a transparency
  /// chunk.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl TryFrom<u8> for PngColorType {
  type Error = ();
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      _ => return Err(()),
    })
  }
}

/// Image Header
///
/// Fields are kept exactly as stored in the file. Nothing here is checked for
/// being a legal combination, use [`is_indexed_8bit`](IHDR::is_indexed_8bit)
/// and friends for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type, see [`PngColorType`]
  pub color_type: u8,
  /// always 0 in a legal PNG
  pub compression_method: u8,
  /// always 0 in a legal PNG
  pub filter_method: u8,
  /// 0 for none, 1 for Adam7
  pub interlace_method: u8,
}
impl IHDR {
  /// Payload bytes the header fields take up.
  pub const PAYLOAD_SIZE: usize = 13;

  /// The color type, if it's one PNG defines.
  #[inline]
  #[must_use]
  pub fn png_color_type(&self) -> Option<PngColorType> {
    PngColorType::try_from(self.color_type).ok()
  }

  /// If this image stores one palette index byte per pixel.
  #[inline]
  #[must_use]
  pub fn is_indexed_8bit(&self) -> bool {
    self.bit_depth == 8 && self.png_color_type() == Some(PngColorType::Index)
  }

  /// if the image data is stored interlaced.
  ///
  /// please don't make new interlaced images, they're terrible.
  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    self.interlace_method == 1
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = ();
  /// Decodes the first 13 bytes of the payload. Extra bytes are ignored.
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match value {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression_method, filter_method, interlace_method, ..] => {
        Ok(Self {
          width: u32_be([*w0, *w1, *w2, *w3]),
          height: u32_be([*h0, *h1, *h2, *h3]),
          bit_depth: *bit_depth,
          color_type: *color_type,
          compression_method: *compression_method,
          filter_method: *filter_method,
          interlace_method: *interlace_method,
        })
      }
      _ => Err(()),
    }
  }
}

#[test]
fn test_ihdr_decode() {
  let data = [0, 0, 1, 0, 0, 0, 0, 2, 8, 3, 0, 0, 1];
  let ihdr = IHDR::try_from(&data[..]).unwrap();
  assert_eq!(ihdr.width, 256);
  assert_eq!(ihdr.height, 2);
  assert!(ihdr.is_indexed_8bit());
  assert!(ihdr.is_interlaced());
  // trailing bytes don't matter
  let mut long = [0xFF_u8; 20];
  long[..13].copy_from_slice(&data);
  assert_eq!(IHDR::try_from(&long[..]), Ok(ihdr));
  // too short
  assert_eq!(IHDR::try_from(&data[..12]), Err(()));
}

#[test]
fn test_ihdr_not_indexed() {
  let mut data = [0, 0, 0, 1, 0, 0, 0, 1, 24, 3, 0, 0, 0];
  assert!(!IHDR::try_from(&data[..]).unwrap().is_indexed_8bit());
  data[8] = 8;
  data[9] = 2;
  let ihdr = IHDR::try_from(&data[..]).unwrap();
  assert!(!ihdr.is_indexed_8bit());
  assert_eq!(ihdr.png_color_type(), Some(PngColorType::RGB));
}
