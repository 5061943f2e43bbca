#![forbid(unsafe_code)]

//! Module for decoding PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! ## Automatic Decoding
//!
//! Just call [`decode_png`] (needs the `miniz_oxide` feature) or
//! [`decode_png_with`] if you want to bring your own zlib decompressor.
//!
//! ## What's Inside
//!
//! The general format of a PNG is that the information is stored in "chunks",
//! after an 8 byte signature. Decoding is four steps, and each step is also
//! available on its own:
//!
//! 1) [`parse_chunk_stream`] checks the signature, reads the [`IHDR`] (which
//!    must be the first chunk) and glues all the `IDAT` chunks together. The
//!    header is checked before any image data is looked at, so unsupported
//!    images are turned away early.
//! 2) An [`Inflate`] implementation decompresses the glued data. This gives
//!    you *filtered* data, one filter byte in front of each line of pixels.
//! 3) [`unfilter_scanlines`] undoes the filtering line by line. Each line's
//!    filter can refer to the line above, so the lines go top to bottom.
//! 4) [`assemble_rgba`] checks the final size and hands back a
//!    [`DecodedImage`].
//!
//! ## Parsing Errors
//!
//! Unlike a general purpose decoder, this module is strict about the parts of
//! the format it relies on: the signature, the header being first and unique,
//! the chunk lengths, `IEND` being present, and the exact amount of
//! decompressed data. It's relaxed about everything else:
//!
//! * Ancillary (and unknown) chunks are skipped without being looked at.
//! * Anything after `IEND` is ignored.
//! * Chunk CRCs are only checked if you ask for it with
//!   [`DecodeOptions::verify_crc`].

use alloc::vec::Vec;

use crate::{DecodeOptions, DecodedImage, PngResult};

mod assemble;
pub use assemble::*;

mod chunk;
pub use chunk::*;

mod crc32;
pub use crc32::*;

mod ihdr;
pub use ihdr::*;

mod inflate;
pub use inflate::*;

mod parse;
pub use parse::*;

mod unfilter;
pub use unfilter::*;

/// Gets the validated [`IHDR`] out of the PNG bytes without decoding any
/// image data.
pub fn png_get_header(bytes: &[u8]) -> PngResult<IHDR> {
  RawPngChunkIter::new(bytes)
    .and_then(|mut it| parse::parse_header_chunk(&mut it, &DecodeOptions::default()))
    .inspect_err(|e| log::warn!("rejected PNG header: {e}"))
}

/// Decodes PNG bytes using the given options and zlib decompressor.
///
/// On any error there's no image at all, never a partial one.
pub fn decode_png_with<I: Inflate + ?Sized>(
  bytes: &[u8], options: &DecodeOptions, inflater: &mut I,
) -> PngResult<DecodedImage> {
  decode_steps(bytes, options, inflater).inspect_err(|e| log::warn!("rejected PNG: {e}"))
}

fn decode_steps<I: Inflate + ?Sized>(
  bytes: &[u8], options: &DecodeOptions, inflater: &mut I,
) -> PngResult<DecodedImage> {
  let (header, compressed): (IHDR, Vec<u8>) = parse_chunk_stream(bytes, options)?;
  let expected = header.get_zlib_decompression_requirement().ok_or(header.too_large())?;
  let decompressed = inflate::inflate_payload(inflater, &compressed, expected)?;
  drop(compressed);
  let unfiltered = unfilter_scanlines(&header, decompressed)?;
  assemble_rgba(&header, unfiltered)
}

/// Decodes PNG bytes with the default options and [`ZlibInflater`].
#[cfg(feature = "miniz_oxide")]
#[cfg_attr(docs_rs, doc(cfg(feature = "miniz_oxide")))]
#[inline]
pub fn decode_png(bytes: &[u8]) -> PngResult<DecodedImage> {
  decode_png_with(bytes, &DecodeOptions::default(), &mut ZlibInflater)
}
