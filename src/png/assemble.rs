use alloc::vec::Vec;

use super::IHDR;
use crate::{DecodedImage, FormatError, PngResult};

/// Turns fully unfiltered RGBA8 bytes into the final image.
///
/// The bytes are already in `[r, g, b, a]` order since RGBA is the only
/// supported color type, so this only checks the geometry and takes ownership.
/// Alpha is left straight.
pub fn assemble_rgba(header: &IHDR, unfiltered: Vec<u8>) -> PngResult<DecodedImage> {
  let expected = header.rgba_len().ok_or(header.too_large())?;
  let actual = unfiltered.len();
  DecodedImage::new(header.width, header.height, unfiltered)
    .ok_or_else(|| FormatError::PixelBufferLengthMismatch { expected, actual }.into())
}

#[test]
fn test_assemble_rgba() {
  let header = IHDR {
    width: 1,
    height: 2,
    bit_depth: 8,
    color_type: 6,
    compression_method: 0,
    filter_method: 0,
    interlace_method: 0,
  };
  let image = assemble_rgba(&header, alloc::vec![1, 2, 3, 4, 5, 6, 7, 0]).unwrap();
  assert_eq!((image.width(), image.height()), (1, 2));
  assert_eq!(image.pixels(), &[[1, 2, 3, 4], [5, 6, 7, 0]]);
  assert_eq!(
    assemble_rgba(&header, alloc::vec![0; 9]),
    Err(FormatError::PixelBufferLengthMismatch { expected: 8, actual: 9 }.into())
  );
}
