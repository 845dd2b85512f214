use alloc::vec::Vec;
use enough::Unstoppable;

use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::BitmapError;
use crate::pixel::Image;

/// Image file format, chosen by extension or magic bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Windows bitmap, 24-bit uncompressed.
    Bmp,
    /// Baseline JPEG.
    Jpeg,
    /// Binary PPM (P6).
    Ppm,
    /// Anything else.
    Unknown,
}

/// Encode/decode function pair for one format, with default settings.
#[derive(Clone, Copy, Debug)]
pub struct Codec {
    pub encode: fn(&Image) -> Result<Vec<u8>, BitmapError>,
    pub decode: fn(&[u8]) -> Result<Image, BitmapError>,
}

impl ImageFormat {
    /// Match a file extension (without the dot), ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Self {
        if ext.eq_ignore_ascii_case("bmp") {
            Self::Bmp
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Self::Jpeg
        } else if ext.eq_ignore_ascii_case("ppm") {
            Self::Ppm
        } else {
            Self::Unknown
        }
    }

    /// Format from the extension of `path`. No extension means `Unknown`.
    #[cfg(feature = "std")]
    pub fn from_path(path: &std::path::Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(Self::Unknown, Self::from_extension)
    }

    /// Detect format from magic bytes.
    pub fn from_magic(data: &[u8]) -> Self {
        match data {
            [b'B', b'M', ..] => Self::Bmp,
            [b'P', b'6', ..] => Self::Ppm,
            [0xFF, 0xD8, 0xFF, ..] => Self::Jpeg,
            _ => Self::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bmp => "BMP",
            Self::Jpeg => "JPEG",
            Self::Ppm => "PPM",
            Self::Unknown => "unknown",
        }
    }

    /// The codec for this format, or `None` for `Unknown` and for formats
    /// compiled out of this build.
    pub fn codec(self) -> Option<Codec> {
        match self {
            Self::Bmp => Some(Codec {
                encode: |image| EncodeRequest::new(ImageFormat::Bmp).encode(image, Unstoppable),
                decode: |data| DecodeRequest::new(data).decode_bmp(Unstoppable),
            }),
            Self::Ppm => Some(Codec {
                encode: |image| EncodeRequest::new(ImageFormat::Ppm).encode(image, Unstoppable),
                decode: |data| DecodeRequest::new(data).decode_ppm(Unstoppable),
            }),
            #[cfg(feature = "jpeg")]
            Self::Jpeg => Some(Codec {
                encode: |image| EncodeRequest::new(ImageFormat::Jpeg).encode(image, Unstoppable),
                decode: |data| DecodeRequest::new(data).decode_jpeg(Unstoppable),
            }),
            #[cfg(not(feature = "jpeg"))]
            Self::Jpeg => None,
            Self::Unknown => None,
        }
    }
}

impl core::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
