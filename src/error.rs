use core::fmt;

use crate::png::PngChunkType;

/// The PNG data was shaped wrong, or asked for a feature this decoder doesn't
/// support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FormatError {
  /// The first eight bytes are not the PNG signature.
  BadSignature,

  /// The data ended in the middle of a chunk, or before `IEND`.
  UnexpectedEndOfInput {
    /// Byte offset where more data was needed.
    offset: usize,
  },

  /// The first chunk of the stream wasn't an `IHDR`.
  FirstChunkNotIHDR {
    /// The type of the chunk that was found first.
    found: PngChunkType,
  },

  /// A second `IHDR` appeared.
  DuplicateIHDR {
    /// Byte offset of the second header chunk.
    offset: usize,
  },

  /// The `IHDR` payload must be exactly 13 bytes.
  IllegalIHDRLength {
    /// The declared payload length.
    len: usize,
  },

  /// The declared width and/or height of this image is 0.
  WidthOrHeightZero,

  /// The image has more pixels than the configured maximum, or is too big to
  /// address at all.
  DimensionsTooLarge {
    #[allow(missing_docs)]
    width: u32,
    #[allow(missing_docs)]
    height: u32,
  },

  /// Only color type 6 (RGBA) is supported.
  UnsupportedColorType(u8),

  /// Only 8 bits per channel is supported.
  UnsupportedBitDepth(u8),

  /// Only non-interlaced images are supported.
  UnsupportedInterlaceMethod(u8),

  /// Only compression method 0 (zlib) exists.
  UnsupportedCompressionMethod(u8),

  /// Only filter method 0 (adaptive, five filter types) exists.
  UnsupportedFilterMethod(u8),

  /// `IEND` was reached without any `IDAT` chunk.
  NoImageData,

  /// A scanline started with a filter tag other than 0 through 4.
  IllegalFilterType {
    /// Scanline index, counting from the top.
    row: u32,
    /// The tag byte found.
    tag: u8,
  },

  /// The decompressed data isn't exactly `height * (1 + width * 4)` bytes.
  ScanlineLengthMismatch {
    #[allow(missing_docs)]
    expected: usize,
    #[allow(missing_docs)]
    actual: usize,
  },

  /// The unfiltered pixel data isn't exactly `width * height * 4` bytes.
  PixelBufferLengthMismatch {
    #[allow(missing_docs)]
    expected: usize,
    #[allow(missing_docs)]
    actual: usize,
  },
}
impl fmt::Display for FormatError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::BadSignature => write!(f, "missing PNG signature"),
      Self::UnexpectedEndOfInput { offset } => {
        write!(f, "unexpected end of input at byte {offset}")
      }
      Self::FirstChunkNotIHDR { found } => write!(f, "first chunk is {found}, expected IHDR"),
      Self::DuplicateIHDR { offset } => write!(f, "duplicate IHDR at byte {offset}"),
      Self::IllegalIHDRLength { len } => write!(f, "IHDR payload is {len} bytes, expected 13"),
      Self::WidthOrHeightZero => write!(f, "image width or height is zero"),
      Self::DimensionsTooLarge { width, height } => {
        write!(f, "image dimensions {width}x{height} are too large")
      }
      Self::UnsupportedColorType(c) => write!(f, "unsupported color type {c}"),
      Self::UnsupportedBitDepth(d) => write!(f, "unsupported bit depth {d}"),
      Self::UnsupportedInterlaceMethod(i) => write!(f, "unsupported interlace method {i}"),
      Self::UnsupportedCompressionMethod(c) => write!(f, "unsupported compression method {c}"),
      Self::UnsupportedFilterMethod(m) => write!(f, "unsupported filter method {m}"),
      Self::NoImageData => write!(f, "no IDAT chunk before IEND"),
      Self::IllegalFilterType { row, tag } => write!(f, "illegal filter type {tag} on row {row}"),
      Self::ScanlineLengthMismatch { expected, actual } => {
        write!(f, "decompressed {actual} bytes of scanlines, expected {expected}")
      }
      Self::PixelBufferLengthMismatch { expected, actual } => {
        write!(f, "pixel buffer is {actual} bytes, expected {expected}")
      }
    }
  }
}

/// Why the zlib decompressor rejected the image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InflateError {
  /// The compressed stream is malformed.
  CorruptStream,
  /// The compressed stream stopped before its final block.
  UnexpectedEndOfInput,
  /// The Adler-32 trailer didn't match the output.
  ChecksumMismatch,
  /// The allocator couldn't give us an output buffer.
  OutOfMemory,
}
impl fmt::Display for InflateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::CorruptStream => "corrupt zlib stream",
      Self::UnexpectedEndOfInput => "zlib stream ended early",
      Self::ChecksumMismatch => "zlib checksum mismatch",
      Self::OutOfMemory => "no memory for the zlib output",
    })
  }
}

/// An error from decoding a PNG.
///
/// Every error is final for the decode call that produced it: no partial image
/// is ever handed back alongside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PngError {
  /// See [`FormatError`].
  Format(FormatError),

  /// A chunk's stored CRC didn't match its contents.
  ///
  /// Only checked when [`DecodeOptions::verify_crc`](crate::DecodeOptions) is
  /// enabled.
  Integrity {
    /// Type of the damaged chunk.
    chunk: PngChunkType,
    /// Byte offset of the damaged chunk.
    offset: usize,
    /// The CRC stored in the stream.
    declared: u32,
    /// The CRC computed over the chunk type and data.
    actual: u32,
  },

  /// See [`InflateError`].
  Decompression(InflateError),

  /// The allocator couldn't give us enough space.
  Alloc,
}
impl From<FormatError> for PngError {
  #[inline]
  fn from(e: FormatError) -> Self {
    Self::Format(e)
  }
}
impl From<InflateError> for PngError {
  #[inline]
  fn from(e: InflateError) -> Self {
    Self::Decompression(e)
  }
}
impl From<alloc::collections::TryReserveError> for PngError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}
impl fmt::Display for PngError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Format(e) => write!(f, "malformed PNG: {e}"),
      Self::Integrity { chunk, offset, declared, actual } => write!(
        f,
        "CRC mismatch in {chunk} chunk at byte {offset}: declared {declared:#010X}, actual {actual:#010X}"
      ),
      Self::Decompression(e) => write!(f, "decompression failed: {e}"),
      Self::Alloc => write!(f, "allocation failed"),
    }
  }
}
impl core::error::Error for FormatError {}
impl core::error::Error for InflateError {}
impl core::error::Error for PngError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::Format(e) => Some(e),
      Self::Decompression(e) => Some(e),
      _ => None,
    }
  }
}

/// Shorthand for results in this crate.
pub type PngResult<T> = Result<T, PngError>;
