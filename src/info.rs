use crate::error::BitmapError;
use crate::format::ImageFormat;

/// Image metadata from header parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl ImageInfo {
    /// Probe image header without decoding pixels.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        match ImageFormat::from_magic(data) {
            ImageFormat::Bmp => crate::bmp::probe_header(data),
            ImageFormat::Ppm => crate::pnm::probe_header(data),
            #[cfg(feature = "jpeg")]
            ImageFormat::Jpeg => crate::jpeg::probe_header(data),
            _ => Err(BitmapError::UnrecognizedFormat),
        }
    }
}
