use alloc::vec::Vec;

use crate::{InflateError, PngResult};

/// A zlib decompressor.
///
/// The decoder doesn't care which one you use. [`ZlibInflater`] is provided
/// with the `miniz_oxide` feature, and any
/// `FnMut(&[u8], usize) -> Result<Vec<u8>, InflateError>` works too.
pub trait Inflate {
  /// Decompresses a complete zlib stream.
  ///
  /// `expected_len` is the exact size a well formed image decompresses to.
  /// Implementations may use it to size buffers or to stop early, but the
  /// caller checks the returned length either way.
  fn decompress(&mut self, compressed: &[u8], expected_len: usize) -> Result<Vec<u8>, InflateError>;
}
impl<F> Inflate for F
where
  F: FnMut(&[u8], usize) -> Result<Vec<u8>, InflateError>,
{
  #[inline]
  fn decompress(&mut self, compressed: &[u8], expected_len: usize) -> Result<Vec<u8>, InflateError> {
    self(compressed, expected_len)
  }
}

/// The [`Inflate`] implementation backed by `miniz_oxide`.
///
/// Output is capped at `expected_len + 1` bytes, so an over-long stream comes
/// back cut off there and fails the scanline length check. The output buffer
/// grows as data actually decompresses, so a header that promises a huge
/// image doesn't cost anything until the compressed data backs it up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
pub struct ZlibInflater;
#[cfg(feature = "miniz_oxide")]
impl Inflate for ZlibInflater {
  fn decompress(&mut self, compressed: &[u8], expected_len: usize) -> Result<Vec<u8>, InflateError> {
    use miniz_oxide::inflate::{decompress_to_vec_zlib_with_limit, DecompressError, TINFLStatus};
    let limit = expected_len.saturating_add(1);
    match decompress_to_vec_zlib_with_limit(compressed, limit) {
      Ok(out) => Ok(out),
      Err(DecompressError { status: TINFLStatus::HasMoreOutput, output }) => Ok(output),
      Err(DecompressError { status, .. }) => Err(match status {
        TINFLStatus::NeedsMoreInput | TINFLStatus::FailedCannotMakeProgress => {
          InflateError::UnexpectedEndOfInput
        }
        TINFLStatus::Adler32Mismatch => InflateError::ChecksumMismatch,
        _ => InflateError::CorruptStream,
      }),
    }
  }
}

/// Runs the decompressor over the concatenated `IDAT` payload.
pub(crate) fn inflate_payload<I: Inflate + ?Sized>(
  inflater: &mut I, compressed: &[u8], expected_len: usize,
) -> PngResult<Vec<u8>> {
  let out = inflater.decompress(compressed, expected_len)?;
  log::debug!("inflated {} bytes into {} (expected {expected_len})", compressed.len(), out.len());
  Ok(out)
}
