//! JPEG encode/decode through the `image` crate's baseline codec.

use alloc::vec::Vec;
use enough::Stop;
use image::ImageDecoder;
use image::codecs::jpeg;
use rgb::{ComponentBytes, FromSlice};

use crate::error::BitmapError;
use crate::format::ImageFormat;
use crate::info::ImageInfo;
use crate::limits::{self, Limits};
use crate::pixel::Image;

/// Largest width or height a baseline JPEG frame header can carry.
const MAX_DIMENSION: u32 = u16::MAX as u32;

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, BitmapError> {
    let decoder = jpeg::JpegDecoder::new(std::io::Cursor::new(data))?;
    let (width, height) = decoder.dimensions();
    Ok(ImageInfo {
        width,
        height,
        format: ImageFormat::Jpeg,
    })
}

/// Decode any JPEG color type to RGB8 (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let decoder = jpeg::JpegDecoder::new(std::io::Cursor::new(data))?;
    let (width, height) = decoder.dimensions();
    if width == 0 || height == 0 {
        return Err(BitmapError::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        });
    }
    limits::check_rgb8(limits, width, height)?;
    stop.check()?;

    let rgb = image::DynamicImage::from_decoder(decoder)?.into_rgb8();
    stop.check()?;
    let pixels = rgb.as_raw().as_rgb().to_vec();
    log::debug!("decoded {width}x{height} JPEG");
    Image::from_pixels(pixels, width, height)
}

/// Encode as baseline JPEG at `quality` (1..=100) (called from EncodeRequest).
pub(crate) fn encode(image: &Image, quality: u8, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let (width, height) = (image.width(), image.height());
    if image.is_empty() {
        return Err(BitmapError::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(BitmapError::DimensionsTooLarge { width, height });
    }
    stop.check()?;

    let quality = quality.clamp(1, 100);
    let mut out = Vec::new();
    jpeg::JpegEncoder::new_with_quality(&mut out, quality).encode(
        image.pixels().as_bytes(),
        width,
        height,
        image::ColorType::Rgb8,
    )?;
    log::debug!(
        "encoded {width}x{height} JPEG at quality {quality}: {} bytes",
        out.len()
    );
    Ok(out)
}
