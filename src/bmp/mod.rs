//! 24-bit Windows Bitmap codec (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`], etc.

mod decode;
mod encode;
mod header;

pub use header::bmp_stride;

use crate::error::BitmapError;
use crate::format::ImageFormat;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::pixel::Image;
use alloc::vec::Vec;
use enough::Stop;

/// Controls how strictly the BMP decoder validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmpPermissiveness {
    /// Also require every constant header field (header size 40, one plane,
    /// 24 bits, no compression, data offset 54) and both size fields
    /// (zero or exact) to match.
    Strict,

    /// Default behavior. Validate the signature and dimensions only; size
    /// fields that disagree with the dimensions are logged and ignored.
    #[default]
    Standard,
}

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, BitmapError> {
    let header = decode::parse_bmp_header(data, BmpPermissiveness::Standard)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        format: ImageFormat::Bmp,
    })
}

/// Decode BMP data (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    permissiveness: BmpPermissiveness,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    decode::decode_bmp(data, limits, permissiveness, stop)
}

/// Encode to BMP (called from EncodeRequest).
pub(crate) fn encode(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp(image, stop)
}
