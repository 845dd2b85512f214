use alloc::string::String;
use enough::StopReason;

/// Errors from BMP/PPM/JPEG decoding, encoding and file conversion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("unknown image format: {0}")]
    UnknownFormat(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("buffer size mismatch: need {needed} pixels, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "jpeg")]
    #[error("jpeg codec error: {0}")]
    Jpeg(String),
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}

#[cfg(feature = "jpeg")]
impl From<image::ImageError> for BitmapError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => BitmapError::Io(io),
            other => BitmapError::Jpeg(alloc::format!("{other}")),
        }
    }
}
