use alloc::vec::Vec;

use super::IHDR;
use crate::{FormatError, PngResult};

/// The five per-scanline filters of PNG filter method 0.
///
/// Each filter predicts a byte from up to three already known neighbors:
/// * `a`: the same channel of the pixel to the left
/// * `b`: the same channel of the pixel above
/// * `c`: the same channel of the pixel above and to the left
///
/// Neighbors that fall outside the image count as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FilterType {
  /// No prediction.
  None = 0,
  /// Predicts `a`.
  Sub = 1,
  /// Predicts `b`.
  Up = 2,
  /// Predicts `floor((a + b) / 2)`.
  Average = 3,
  /// Predicts whichever of `a`, `b`, `c` is closest to `a + b - c`.
  Paeth = 4,
}
impl TryFrom<u8> for FilterType {
  /// The byte, if it isn't a known filter.
  type Error = u8;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => Self::None,
      1 => Self::Sub,
      2 => Self::Up,
      3 => Self::Average,
      4 => Self::Paeth,
      other => return Err(other),
    })
  }
}
impl FilterType {
  /// The predicted value for a byte, given its neighbors.
  #[inline]
  #[must_use]
  pub const fn predict(self, a: u8, b: u8, c: u8) -> u8 {
    match self {
      Self::None => 0,
      Self::Sub => a,
      Self::Up => b,
      // the sum is done in 16 bits so it can't overflow before halving.
      Self::Average => ((a as u16 + b as u16) / 2) as u8,
      Self::Paeth => paeth_predict(a, b, c),
    }
  }
}

/// The Paeth predictor.
#[inline]
#[must_use]
pub const fn paeth_predict(a: u8, b: u8, c: u8) -> u8 {
  let a_ = a as i32;
  let b_ = b as i32;
  let c_ = c as i32;
  let p: i32 = a_ + b_ - c_;
  let pa = (p - a_).abs();
  let pb = (p - b_).abs();
  let pc = (p - c_).abs();
  // Note(Lokathor): The PNG spec is extremely specific that you shall not,
  // under any circumstances, alter the order of evaluation of this
  // expression's tests.
  if pa <= pb && pa <= pc {
    a
  } else if pb <= pc {
    b
  } else {
    c
  }
}

/// Reverses `filter` on one scanline, in place.
///
/// * `row` is the filtered pixel bytes of the line, without the filter byte.
/// * `prev` is the already unfiltered line above, or `None` for the top line.
/// * `bpp` is the bytes per pixel, the distance to the "left" neighbor.
///
/// ## Panics
/// * If `prev` is shorter than `row`.
pub fn unfilter_scanline(filter: FilterType, row: &mut [u8], prev: Option<&[u8]>, bpp: usize) {
  match (filter, prev) {
    (FilterType::None, _) | (FilterType::Up, None) => (),
    (FilterType::Up, Some(prev)) => {
      row.iter_mut().zip(prev.iter().copied()).for_each(|(p, b)| *p = p.wrapping_add(b));
    }
    (FilterType::Sub, _) => {
      for i in bpp..row.len() {
        row[i] = row[i].wrapping_add(row[i - bpp]);
      }
    }
    (filter, prev) => {
      for i in 0..row.len() {
        let a = if i >= bpp { row[i - bpp] } else { 0 };
        let (b, c) = match prev {
          Some(prev) => (prev[i], if i >= bpp { prev[i - bpp] } else { 0 }),
          None => (0, 0),
        };
        row[i] = row[i].wrapping_add(filter.predict(a, b, c));
      }
    }
  }
}

/// Applies `filter` to one scanline, the inverse of [`unfilter_scanline`].
///
/// `row` and `prev` are unfiltered bytes, the filtered bytes go into `out`.
///
/// ## Panics
/// * If `prev` or `out` is shorter than `row`.
pub fn filter_scanline(
  filter: FilterType, row: &[u8], prev: Option<&[u8]>, bpp: usize, out: &mut [u8],
) {
  for (i, (x, o)) in row.iter().copied().zip(out.iter_mut()).enumerate() {
    let a = if i >= bpp { row[i - bpp] } else { 0 };
    let (b, c) = match prev {
      Some(prev) => (prev[i], if i >= bpp { prev[i - bpp] } else { 0 }),
      None => (0, 0),
    };
    *o = x.wrapping_sub(filter.predict(a, b, c));
  }
}

/// Unfilters the whole decompressed image.
///
/// The `decompressed` buffer must be exactly `height` lines of one filter byte
/// plus `width * 4` pixel bytes. The lines are unfiltered in place, top to
/// bottom, each one using the line above as its "previous" line, and then the
/// filter bytes are squeezed out. What's returned is the same allocation
/// holding `width * height * 4` bytes of pixels.
pub fn unfilter_scanlines(header: &IHDR, mut decompressed: Vec<u8>) -> PngResult<Vec<u8>> {
  let expected = header.get_zlib_decompression_requirement().ok_or(header.too_large())?;
  if decompressed.len() != expected {
    return Err(FormatError::ScanlineLengthMismatch { expected, actual: decompressed.len() }.into());
  }
  let bytes_per_filterline = header.bytes_per_filterline();
  let stride = header.stride();

  let mut prev: Option<&[u8]> = None;
  for (y, line) in decompressed.chunks_exact_mut(bytes_per_filterline).enumerate() {
    let (f, pixels) = line.split_at_mut(1);
    let filter = FilterType::try_from(f[0])
      .map_err(|tag| FormatError::IllegalFilterType { row: y as u32, tag })?;
    unfilter_scanline(filter, pixels, prev, IHDR::BYTES_PER_PIXEL);
    f[0] = FilterType::None as u8;
    prev = Some(&*pixels);
  }

  // squeeze out the filter bytes, every line moves left by `y + 1`.
  for y in 0..(header.height as usize) {
    let src = y * bytes_per_filterline + 1;
    decompressed.copy_within(src..(src + stride), y * stride);
  }
  decompressed.truncate(stride * header.height as usize);
  log::debug!("unfiltered {} scanlines of {stride} bytes", header.height);
  Ok(decompressed)
}
