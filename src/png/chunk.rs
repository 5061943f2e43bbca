use core::fmt::{Debug, Display, Write};

use super::chunk_crc;
use crate::{
  util::{try_pull_byte_array, try_pull_u32_be},
  FormatError, PngError, PngResult,
};

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
///
/// * If this is the case, the rest of the bytes are very likely PNG data.
/// * If this is *not* the case, the rest of the bytes are very likely *not* PNG
///   data.
#[inline]
#[must_use]
pub const fn is_png_header_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// The four-letter tag of a chunk.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkType(pub [u8; 4]);
#[allow(nonstandard_style)]
impl PngChunkType {
  /// Image Header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Image Data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image End
  pub const IEND: Self = Self(*b"IEND");

  /// Ancillary chunks (lowercase first letter) can be skipped by a decoder
  /// without losing the image.
  #[inline]
  #[must_use]
  pub const fn is_ancillary(self) -> bool {
    (self.0[0] & 0x20) != 0
  }
}
impl Debug for PngChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Display::fmt(self, f)
  }
}
impl Display for PngChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    for b in self.0 {
      f.write_char(if b.is_ascii_graphic() { b as char } else { '?' })?;
    }
    Ok(())
  }
}

/// An unparsed chunk from a PNG.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawPngChunk<'b> {
  type_: PngChunkType,
  data: &'b [u8],
  declared_crc: u32,
  offset: usize,
}
impl Debug for RawPngChunk<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawPngChunk")
      .field("type_", &self.type_)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .field("offset", &self.offset)
      .finish()
  }
}
impl<'b> RawPngChunk<'b> {
  /// The chunk's type tag.
  #[inline]
  #[must_use]
  pub const fn type_(&self) -> PngChunkType {
    self.type_
  }

  /// The chunk's payload.
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'b [u8] {
    self.data
  }

  /// The CRC stored after the payload.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }

  /// Byte offset of the chunk's length field within the full PNG.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> usize {
    self.offset
  }

  /// Computes the CRC the chunk *should* have.
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    chunk_crc(self.type_, self.data)
  }

  /// Errors with [`PngError::Integrity`] if the stored CRC is wrong.
  pub fn verify_crc(&self) -> PngResult<()> {
    let actual = self.compute_actual_crc();
    if actual == self.declared_crc {
      Ok(())
    } else {
      Err(PngError::Integrity {
        chunk: self.type_,
        offset: self.offset,
        declared: self.declared_crc,
        actual,
      })
    }
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// A chunk that runs past the end of the data produces one
/// [`FormatError::UnexpectedEndOfInput`] and then the iterator is done. No
/// input, however hostile, makes it panic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawPngChunkIter<'b> {
  spare: &'b [u8],
  offset: usize,
}
impl<'b> RawPngChunkIter<'b> {
  /// Pass the full PNG bytes, the signature is checked and removed.
  #[inline]
  pub fn new(bytes: &'b [u8]) -> PngResult<Self> {
    match bytes.strip_prefix(&PNG_SIGNATURE[..]) {
      Some(spare) => Ok(Self { spare, offset: PNG_SIGNATURE.len() }),
      None => Err(FormatError::BadSignature.into()),
    }
  }

  /// The bytes not yet walked.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> &'b [u8] {
    self.spare
  }

  /// Byte offset of the next chunk within the full PNG.
  #[inline]
  #[must_use]
  pub const fn offset(&self) -> usize {
    self.offset
  }

  fn pull_chunk(&self) -> Option<(RawPngChunk<'b>, &'b [u8])> {
    let (chunk_len, rest) = try_pull_u32_be(self.spare)?;
    let (type_bytes, rest) = try_pull_byte_array::<4>(rest)?;
    let data_len = usize::try_from(chunk_len).ok()?;
    if rest.len() < data_len {
      return None;
    }
    let (data, rest) = rest.split_at(data_len);
    let (declared_crc, rest) = try_pull_u32_be(rest)?;
    let chunk = RawPngChunk { type_: PngChunkType(type_bytes), data, declared_crc, offset: self.offset };
    Some((chunk, rest))
  }
}
impl<'b> Iterator for RawPngChunkIter<'b> {
  type Item = PngResult<RawPngChunk<'b>>;
  fn next(&mut self) -> Option<Self::Item> {
    if self.spare.is_empty() {
      return None;
    }
    match self.pull_chunk() {
      Some((chunk, rest)) => {
        self.offset += self.spare.len() - rest.len();
        self.spare = rest;
        Some(Ok(chunk))
      }
      None => {
        let offset = self.offset;
        self.offset += self.spare.len();
        self.spare = &[];
        Some(Err(FormatError::UnexpectedEndOfInput { offset }.into()))
      }
    }
  }
}
impl core::iter::FusedIterator for RawPngChunkIter<'_> {}
