use alloc::vec::Vec;
use enough::Stop;

use crate::error::BitmapError;
use crate::format::ImageFormat;
use crate::pixel::Image;

/// Quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encode configuration: target format plus format-specific settings.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    format: ImageFormat,
    #[cfg_attr(not(feature = "jpeg"), allow(dead_code))]
    jpeg_quality: u8,
}

impl EncodeRequest {
    pub fn new(format: ImageFormat) -> Self {
        Self {
            format,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    pub fn bmp() -> Self {
        Self::new(ImageFormat::Bmp)
    }

    pub fn ppm() -> Self {
        Self::new(ImageFormat::Ppm)
    }

    #[cfg(feature = "jpeg")]
    pub fn jpeg() -> Self {
        Self::new(ImageFormat::Jpeg)
    }

    /// JPEG quality, clamped to 1..=100. Ignored by other formats.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Encode `image`. Empty images fail with
    /// [`BitmapError::InvalidDimensions`] before any output is produced.
    pub fn encode(&self, image: &Image, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
        match self.format {
            ImageFormat::Bmp => crate::bmp::encode(image, &stop),
            ImageFormat::Ppm => crate::pnm::encode(image, &stop),
            #[cfg(feature = "jpeg")]
            ImageFormat::Jpeg => crate::jpeg::encode(image, self.jpeg_quality, &stop),
            #[cfg(not(feature = "jpeg"))]
            ImageFormat::Jpeg => Err(BitmapError::UnsupportedVariant(
                "JPEG support not compiled in".into(),
            )),
            ImageFormat::Unknown => Err(BitmapError::UnknownFormat(
                "no encoder for unknown format".into(),
            )),
        }
    }
}
