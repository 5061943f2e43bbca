//! Provides the decoded image type.

use alloc::vec::Vec;
use pixel_formats::r8g8b8a8_Srgb;

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// pixel index.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  (y as usize) * (width as usize) + (x as usize)
}

/// A decoded image: `width * height` pixels of RGBA8, row-major, top row
/// first.
///
/// The alpha channel is straight (not premultiplied), exactly as stored in the
/// PNG. Compositing is up to you.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedImage {
  width: u32,
  height: u32,
  rgba: Vec<u8>,
}
impl DecodedImage {
  /// Wraps an RGBA8 buffer.
  ///
  /// Returns `None` if either dimension is 0, or unless
  /// `rgba.len() == width * height * 4`.
  #[inline]
  #[must_use]
  pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
    if width == 0 || height == 0 {
      return None;
    }
    let expected = (width as usize).checked_mul(height as usize)?.checked_mul(4)?;
    if rgba.len() == expected {
      Some(Self { width, height, rgba })
    } else {
      None
    }
  }

  /// Width in pixels.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// Height in pixels.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// The raw RGBA8 bytes.
  #[inline]
  #[must_use]
  pub fn rgba(&self) -> &[u8] {
    &self.rgba
  }

  /// Unwraps the raw RGBA8 bytes.
  #[inline]
  #[must_use]
  pub fn into_rgba(self) -> Vec<u8> {
    self.rgba
  }

  /// The pixels as `[r, g, b, a]` arrays.
  #[inline]
  #[must_use]
  pub fn pixels(&self) -> &[[u8; 4]] {
    bytemuck::cast_slice(&self.rgba)
  }

  /// Iterates the image one row of `width * 4` bytes at a time.
  #[inline]
  pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
    self.rgba.chunks_exact(self.width as usize * 4)
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get(&self, x: u32, y: u32) -> Option<r8g8b8a8_Srgb> {
    if x < self.width && y < self.height {
      let [r, g, b, a] = *self.pixels().get(xy_width_to_index(x, y, self.width))?;
      Some(r8g8b8a8_Srgb { r, g, b, a })
    } else {
      None
    }
  }
}

#[test]
fn test_decoded_image_accessors() {
  let rgba: Vec<u8> = (1..=24).collect();
  let image = DecodedImage::new(3, 2, rgba).unwrap();
  assert_eq!(image.pixels().len(), 6);
  let p = image.get(1, 1).unwrap();
  assert_eq!([p.r, p.g, p.b, p.a], [17, 18, 19, 20]);
  assert!(image.get(3, 0).is_none());
  assert!(image.get(0, 2).is_none());
  assert_eq!(image.rows().count(), 2);
  assert_eq!(image.rows().nth(1).unwrap()[0], 13);
  assert!(DecodedImage::new(3, 2, alloc::vec![0; 23]).is_none());
  assert!(DecodedImage::new(0, 2, alloc::vec![]).is_none());
}
