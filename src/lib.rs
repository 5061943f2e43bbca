#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for decoding PNG map tiles into RGBA8 pixels.
//!
//! Only the one PNG flavor that tile servers actually hand out is supported:
//! non-interlaced, 8 bits per channel, red-green-blue-alpha. Anything else is
//! rejected with a [`PngError`] instead of being half-decoded.
//!
//! ```no_run
//! let tile: &[u8] = unimplemented!("bytes from the tile cache");
//! let image = tile_png::decode_png(tile)?;
//! assert_eq!(image.rgba().len(), image.width() as usize * image.height() as usize * 4);
//! # Ok::<(), tile_png::PngError>(())
//! ```

extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

mod options;
pub use options::*;

mod util;

pub mod image;
pub use image::DecodedImage;

pub mod png;
pub use png::{decode_png_with, png_get_header, Inflate};

#[cfg(feature = "miniz_oxide")]
pub use png::{decode_png, ZlibInflater};
