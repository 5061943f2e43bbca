use alloc::vec::Vec;

use super::{PngChunkType, RawPngChunk, RawPngChunkIter, IHDR};
use crate::{DecodeOptions, FormatError, PngResult};

/// Walks the chunks of a PNG, giving back the validated header and every
/// `IDAT` payload concatenated in stream order.
///
/// * The first chunk must be the only `IHDR`, and it's validated before any
///   other chunk is looked at.
/// * Unknown chunks are skipped.
/// * Walking stops at `IEND`; whatever follows is ignored.
pub fn parse_chunk_stream(bytes: &[u8], options: &DecodeOptions) -> PngResult<(IHDR, Vec<u8>)> {
  let mut it = RawPngChunkIter::new(bytes)?;
  let header = parse_header_chunk(&mut it, options)?;

  let mut idat: Vec<u8> = Vec::new();
  let mut idat_count = 0_usize;
  while let Some(chunk) = it.next() {
    let chunk = chunk?;
    check_crc(&chunk, options)?;
    match chunk.type_() {
      PngChunkType::IDAT => {
        idat.try_reserve(chunk.data().len())?;
        idat.extend_from_slice(chunk.data());
        idat_count += 1;
      }
      PngChunkType::IEND => {
        if idat_count == 0 {
          return Err(FormatError::NoImageData.into());
        }
        let trailing = it.remaining().len();
        if trailing > 0 {
          log::warn!("ignoring {trailing} bytes after IEND");
        }
        log::debug!("collected {} compressed bytes from {idat_count} IDAT chunks", idat.len());
        return Ok((header, idat));
      }
      PngChunkType::IHDR => {
        return Err(FormatError::DuplicateIHDR { offset: chunk.offset() }.into());
      }
      other => {
        log::trace!(
          "skipping {} chunk {other} ({} bytes) at byte {}",
          if other.is_ancillary() { "ancillary" } else { "unknown critical" },
          chunk.data().len(),
          chunk.offset()
        );
      }
    }
  }
  Err(FormatError::UnexpectedEndOfInput { offset: bytes.len() }.into())
}

/// Reads and validates the header, which must be the very first chunk.
pub(crate) fn parse_header_chunk(
  it: &mut RawPngChunkIter<'_>, options: &DecodeOptions,
) -> PngResult<IHDR> {
  let first = it.next().ok_or(FormatError::UnexpectedEndOfInput { offset: it.offset() })??;
  check_crc(&first, options)?;
  if first.type_() != PngChunkType::IHDR {
    return Err(FormatError::FirstChunkNotIHDR { found: first.type_() }.into());
  }
  let header = IHDR::try_from(first.data())?;
  log::debug!("{header:?}");
  header.validate(options.max_pixels)?;
  Ok(header)
}

#[inline]
fn check_crc(chunk: &RawPngChunk<'_>, options: &DecodeOptions) -> PngResult<()> {
  log::trace!("{chunk:?}");
  if options.verify_crc {
    chunk.verify_crc()
  } else {
    Ok(())
  }
}
