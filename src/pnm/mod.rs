//! Binary PPM (P6), 8-bit RGB.
//!
//! Other PNM variants (P1–P5, P7, PFM) and 16-bit samples are recognized
//! and rejected as unsupported.

mod decode;
mod encode;

use crate::error::BitmapError;
use crate::format::ImageFormat;
use crate::info::ImageInfo;
use crate::limits::{self, Limits};
use crate::pixel::Image;
use alloc::vec::Vec;
use enough::Stop;

/// Parsed PPM header (internal).
pub(crate) struct PnmHeader {
    pub width: u32,
    pub height: u32,
    pub maxval: u32,
    pub data_offset: usize,
}

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, BitmapError> {
    let header = decode::parse_header(data)?;
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        format: ImageFormat::Ppm,
    })
}

/// Decode PPM data (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let header = decode::parse_header(data)?;
    limits::check_rgb8(limits, header.width, header.height)?;
    stop.check()?;

    let pixel_data = data
        .get(header.data_offset..)
        .ok_or(BitmapError::UnexpectedEof)?;
    decode::decode_pixels(pixel_data, &header, stop)
}

/// Encode to PPM (called from EncodeRequest).
pub(crate) fn encode(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    encode::encode_ppm(image, stop)
}
