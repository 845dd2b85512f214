//! # imgconv
//!
//! Convert raster images between BMP, PPM and JPEG, choosing the codec by
//! file extension.
//!
//! The BMP codec is bit-exact: 14-byte file header, 40-byte info header,
//! then bottom-up BGR rows padded to a multiple of four bytes. Headers are
//! written and parsed field by field in little-endian order.
//!
//! ## Supported Formats
//!
//! - **BMP** — uncompressed 24-bit, bottom-up (decode and encode)
//! - **PPM** — binary P6, maxval ≤ 255 (decode and encode)
//! - **JPEG** — baseline via the `image` crate (`jpeg` feature)
//!
//! ## Non-Goals
//!
//! - Compressed, palette, 16/32-bit or top-down BMP
//! - Alpha channels, color management
//! - Animated formats
//!
//! ## Usage
//!
//! ```no_run
//! use imgconv::{Color, Image, ImageFormat, Unstoppable};
//!
//! let mut image = Image::new(2, 1, Color::new(0, 0, 0));
//! image.row_mut(0)[0] = Color::new(255, 0, 0);
//!
//! let bmp = imgconv::encode_bmp(&image, Unstoppable)?;
//! assert_eq!(bmp.len(), 54 + 8);
//! assert_eq!(imgconv::decode_bmp(&bmp, Unstoppable)?, image);
//!
//! // Path-based conversion
//! let loaded = imgconv::file::load("photo.jpg")?;
//! imgconv::file::save("photo.bmp", &loaded)?;
//! assert_eq!(ImageFormat::from_magic(&bmp), ImageFormat::Bmp);
//! # Ok::<(), imgconv::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod format;
mod info;
mod limits;
mod pixel;

mod bmp;
mod pnm;

#[cfg(feature = "jpeg")]
mod jpeg;

mod decode;
mod encode;

#[cfg(feature = "std")]
pub mod file;

// Re-exports
pub use bmp::{BmpPermissiveness, bmp_stride};
pub use decode::DecodeRequest;
pub use encode::{DEFAULT_JPEG_QUALITY, EncodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use format::{Codec, ImageFormat};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{BLACK, Color, Image};

use alloc::vec::Vec;

/// Decode any supported format, detected from magic bytes.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    DecodeRequest::new(data).decode_auto(stop)
}

/// Decode a 24-bit BMP with default settings.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    DecodeRequest::new(data).decode_bmp(stop)
}

/// Decode a binary PPM.
pub fn decode_ppm(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    DecodeRequest::new(data).decode_ppm(stop)
}

/// Decode a JPEG to RGB8.
#[cfg(feature = "jpeg")]
pub fn decode_jpeg(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    DecodeRequest::new(data).decode_jpeg(stop)
}

/// Encode as 24-bit bottom-up BMP.
pub fn encode_bmp(image: &Image, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::bmp().encode(image, stop)
}

/// Encode as binary PPM (P6, maxval 255).
pub fn encode_ppm(image: &Image, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::ppm().encode(image, stop)
}

/// Encode as baseline JPEG at [`DEFAULT_JPEG_QUALITY`].
#[cfg(feature = "jpeg")]
pub fn encode_jpeg(image: &Image, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::jpeg().encode(image, stop)
}
