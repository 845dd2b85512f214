use enough::Stop;

use crate::bmp::BmpPermissiveness;
use crate::error::BitmapError;
use crate::format::ImageFormat;
use crate::limits::Limits;
use crate::pixel::Image;

/// Decode configuration: resource limits and BMP strictness.
///
/// ```
/// use imgconv::{BmpPermissiveness, DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = b"P6\n1 1\n255\n\x01\x02\x03";
/// let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
/// let image = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .with_permissiveness(BmpPermissiveness::Strict)
///     .decode_auto(Unstoppable)?;
/// assert_eq!((image.width(), image.height()), (1, 1));
/// # Ok::<(), imgconv::BitmapError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    permissiveness: BmpPermissiveness,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            permissiveness: BmpPermissiveness::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Only affects BMP input.
    pub fn with_permissiveness(mut self, permissiveness: BmpPermissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    /// Decode as `format`.
    pub fn decode(self, format: ImageFormat, stop: impl Stop) -> Result<Image, BitmapError> {
        match format {
            ImageFormat::Bmp => self.decode_bmp(stop),
            ImageFormat::Ppm => self.decode_ppm(stop),
            #[cfg(feature = "jpeg")]
            ImageFormat::Jpeg => self.decode_jpeg(stop),
            #[cfg(not(feature = "jpeg"))]
            ImageFormat::Jpeg => Err(BitmapError::UnsupportedVariant(
                "JPEG support not compiled in".into(),
            )),
            ImageFormat::Unknown => Err(BitmapError::UnrecognizedFormat),
        }
    }

    /// Decode with the format detected from magic bytes.
    pub fn decode_auto(self, stop: impl Stop) -> Result<Image, BitmapError> {
        self.decode(ImageFormat::from_magic(self.data), stop)
    }

    pub fn decode_bmp(self, stop: impl Stop) -> Result<Image, BitmapError> {
        crate::bmp::decode(self.data, self.limits, self.permissiveness, &stop)
    }

    pub fn decode_ppm(self, stop: impl Stop) -> Result<Image, BitmapError> {
        crate::pnm::decode(self.data, self.limits, &stop)
    }

    #[cfg(feature = "jpeg")]
    pub fn decode_jpeg(self, stop: impl Stop) -> Result<Image, BitmapError> {
        crate::jpeg::decode(self.data, self.limits, &stop)
    }
}
