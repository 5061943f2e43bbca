/// Knobs for a decode call.
///
/// The defaults match what a tile client wants: trust the transport for data
/// integrity, but refuse images big enough to be an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
  /// Check every chunk's CRC-32 and fail with
  /// [`PngError::Integrity`](crate::PngError::Integrity) on a mismatch.
  pub verify_crc: bool,

  /// The largest `width * height` accepted.
  ///
  /// Only the pixel count matters, so long thin images are fine as long as
  /// they're small overall.
  pub max_pixels: u64,
}
impl DecodeOptions {
  /// The default pixel budget: a 17,000 by 17,000 image, a bit over a
  /// gigabyte of RGBA8.
  pub const DEFAULT_MAX_PIXELS: u64 = 17_000 * 17_000;

  /// Turns the per-chunk CRC check on or off.
  #[inline]
  #[must_use]
  pub const fn with_crc_check(self, verify_crc: bool) -> Self {
    Self { verify_crc, ..self }
  }

  /// Sets the largest `width * height` accepted.
  #[inline]
  #[must_use]
  pub const fn with_max_pixels(self, max_pixels: u64) -> Self {
    Self { max_pixels, ..self }
  }
}
impl Default for DecodeOptions {
  #[inline]
  fn default() -> Self {
    Self { verify_crc: false, max_pixels: Self::DEFAULT_MAX_PIXELS }
  }
}
