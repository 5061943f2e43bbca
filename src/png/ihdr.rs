use crate::FormatError;

/// Color type 6: red, green, blue, alpha.
pub const COLOR_TYPE_RGBA: u8 = 6;

/// Image Header
///
/// The fields are kept exactly as stored; use [`IHDR::validate`] to check that
/// they describe an image this crate can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: u8,
  /// always 0 (zlib) in a valid PNG
  pub compression_method: u8,
  /// always 0 (adaptive filtering) in a valid PNG
  pub filter_method: u8,
  /// 0 for no interlace, 1 for Adam7
  pub interlace_method: u8,
}
impl IHDR {
  /// Bytes per RGBA8 pixel, which is also the filter "left" distance.
  pub const BYTES_PER_PIXEL: usize = 4;

  /// Checks that this header is a non-interlaced RGBA8 image of at most
  /// `max_pixels` pixels.
  pub fn validate(&self, max_pixels: u64) -> Result<(), FormatError> {
    if self.width == 0 || self.height == 0 {
      return Err(FormatError::WidthOrHeightZero);
    }
    if self.color_type != COLOR_TYPE_RGBA {
      return Err(FormatError::UnsupportedColorType(self.color_type));
    }
    if self.bit_depth != 8 {
      return Err(FormatError::UnsupportedBitDepth(self.bit_depth));
    }
    if self.compression_method != 0 {
      return Err(FormatError::UnsupportedCompressionMethod(self.compression_method));
    }
    if self.filter_method != 0 {
      return Err(FormatError::UnsupportedFilterMethod(self.filter_method));
    }
    if self.interlace_method != 0 {
      return Err(FormatError::UnsupportedInterlaceMethod(self.interlace_method));
    }
    if self.pixel_count() > max_pixels
      || self.get_zlib_decompression_requirement().is_none()
      || self.rgba_len().is_none()
    {
      return Err(self.too_large());
    }
    Ok(())
  }

  #[inline]
  pub(crate) const fn too_large(&self) -> FormatError {
    FormatError::DimensionsTooLarge { width: self.width, height: self.height }
  }

  /// `width * height`, which can't overflow a `u64`.
  #[inline]
  #[must_use]
  pub const fn pixel_count(&self) -> u64 {
    self.width as u64 * self.height as u64
  }

  /// Bytes of pixel data in one scanline, not counting the filter byte.
  #[inline]
  #[must_use]
  pub const fn stride(&self) -> usize {
    (self.width as usize).saturating_mul(Self::BYTES_PER_PIXEL)
  }

  /// Bytes in one scanline, counting the filter byte.
  #[inline]
  #[must_use]
  pub const fn bytes_per_filterline(&self) -> usize {
    self.stride().saturating_add(1)
  }

  /// The exact size of the decompressed image data: `height * (1 + stride)`.
  ///
  /// `None` if that doesn't fit in a `usize`.
  #[inline]
  #[must_use]
  pub fn get_zlib_decompression_requirement(&self) -> Option<usize> {
    (self.width as usize)
      .checked_mul(Self::BYTES_PER_PIXEL)?
      .checked_add(1)?
      .checked_mul(self.height as usize)
  }

  /// The size of the final RGBA8 buffer: `width * height * 4`.
  #[inline]
  #[must_use]
  pub fn rgba_len(&self) -> Option<usize> {
    (self.width as usize).checked_mul(self.height as usize)?.checked_mul(Self::BYTES_PER_PIXEL)
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = FormatError;
  /// Unpacks the 13 byte payload of an `IHDR` chunk.
  fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
    match value {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, compression_method, filter_method, interlace_method] => {
        Ok(Self {
          width: u32::from_be_bytes([*w0, *w1, *w2, *w3]),
          height: u32::from_be_bytes([*h0, *h1, *h2, *h3]),
          bit_depth: *bit_depth,
          color_type: *color_type,
          compression_method: *compression_method,
          filter_method: *filter_method,
          interlace_method: *interlace_method,
        })
      }
      _ => Err(FormatError::IllegalIHDRLength { len: value.len() }),
    }
  }
}
