//! BMP decoder for uncompressed 24-bit bottom-up files.
//!
//! Reads the two fixed headers, then `height` rows of `stride` bytes starting
//! at offset 54. Truncated input is always an error; nothing is zero-filled.

use enough::Stop;

use super::BmpPermissiveness;
use super::header::{
    BITS_PER_PIXEL, COMPRESSION_NONE, FILE_HEADER_SIZE, FileHeader, INFO_HEADER_SIZE, InfoHeader,
    PIXEL_DATA_OFFSET, PLANES, SIGNATURE, bmp_stride,
};
use crate::error::BitmapError;
use crate::limits::{self, Limits};
use crate::pixel::{BLACK, Color, Image};

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let bytes = self.read_slice(N)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        Ok(buf)
    }

    fn read_slice(&mut self, n: usize) -> Result<&'a [u8], BitmapError> {
        let end = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        let bytes = self
            .data
            .get(self.pos..end)
            .ok_or(BitmapError::UnexpectedEof)?;
        self.pos = end;
        Ok(bytes)
    }

    fn get_u16_le_err(&mut self) -> Result<u16, BitmapError> {
        Ok(u16::from_le_bytes(self.read_fixed_bytes()?))
    }

    fn get_u32_le_err(&mut self) -> Result<u32, BitmapError> {
        Ok(u32::from_le_bytes(self.read_fixed_bytes()?))
    }

    fn get_i32_le_err(&mut self) -> Result<i32, BitmapError> {
        Ok(i32::from_le_bytes(self.read_fixed_bytes()?))
    }
}

// ── Header parsing ──────────────────────────────────────────────────

impl FileHeader {
    /// Reads the signature first and stops there if it is not `BM`.
    fn read(cursor: &mut Cursor<'_>) -> Result<Self, BitmapError> {
        let signature = cursor.read_fixed_bytes::<2>()?;
        if signature != SIGNATURE {
            return Err(BitmapError::UnrecognizedFormat);
        }
        Ok(Self {
            signature,
            file_size: cursor.get_u32_le_err()?,
            reserved: cursor.read_fixed_bytes()?,
            pixel_data_offset: cursor.get_u32_le_err()?,
        })
    }
}

impl InfoHeader {
    fn read(cursor: &mut Cursor<'_>) -> Result<Self, BitmapError> {
        Ok(Self {
            header_size: cursor.get_u32_le_err()?,
            width: cursor.get_i32_le_err()?,
            height: cursor.get_i32_le_err()?,
            planes: cursor.get_u16_le_err()?,
            bits_per_pixel: cursor.get_u16_le_err()?,
            compression: cursor.get_u32_le_err()?,
            bytes_in_data: cursor.get_u32_le_err()?,
            horizontal_resolution: cursor.get_i32_le_err()?,
            vertical_resolution: cursor.get_i32_le_err()?,
            used_colors: cursor.get_i32_le_err()?,
            significant_colors: cursor.get_i32_le_err()?,
        })
    }
}

// ── Parsed BMP header info ──────────────────────────────────────────

pub(crate) struct BmpHeader {
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

/// Parse both headers and derive the row layout.
///
/// Width and height must be positive. Under [`BmpPermissiveness::Strict`] the
/// constant fields and the size fields must also agree with what this
/// encoder writes.
pub(crate) fn parse_bmp_header(
    data: &[u8],
    permissiveness: BmpPermissiveness,
) -> Result<BmpHeader, BitmapError> {
    let mut cursor = Cursor::new(data);
    let file_header = FileHeader::read(&mut cursor)?;
    let info_header = InfoHeader::read(&mut cursor)?;
    log::trace!("BMP headers: {file_header:?} {info_header:?}");

    if info_header.width <= 0 || info_header.height <= 0 {
        return Err(BitmapError::InvalidDimensions {
            width: info_header.width.into(),
            height: info_header.height.into(),
        });
    }
    let width = info_header.width.unsigned_abs();
    let height = info_header.height.unsigned_abs();
    let stride = bmp_stride(width).ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let data_size = stride
        .checked_mul(height as usize)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    match permissiveness {
        BmpPermissiveness::Strict => {
            check_strict(&file_header, &info_header, data_size)?;
        }
        BmpPermissiveness::Standard => {
            if info_header.bytes_in_data != 0 && info_header.bytes_in_data as usize != data_size {
                log::warn!(
                    "BMP bytes_in_data is {}, rows need {data_size}; ignoring",
                    info_header.bytes_in_data
                );
            }
            if file_header.pixel_data_offset != PIXEL_DATA_OFFSET {
                log::warn!(
                    "BMP pixel data offset is {}, reading rows from {PIXEL_DATA_OFFSET}",
                    file_header.pixel_data_offset
                );
            }
        }
    }

    Ok(BmpHeader {
        width,
        height,
        stride,
    })
}

fn check_strict(
    file_header: &FileHeader,
    info_header: &InfoHeader,
    data_size: usize,
) -> Result<(), BitmapError> {
    if info_header.header_size as usize != INFO_HEADER_SIZE {
        return Err(BitmapError::UnsupportedVariant(alloc::format!(
            "BMP info header size {} (only 40 supported)",
            info_header.header_size
        )));
    }
    if info_header.planes != PLANES {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP planes field is {}, expected 1",
            info_header.planes
        )));
    }
    if info_header.bits_per_pixel != BITS_PER_PIXEL {
        return Err(BitmapError::UnsupportedVariant(alloc::format!(
            "BMP bit depth {} unsupported",
            info_header.bits_per_pixel
        )));
    }
    if info_header.compression != COMPRESSION_NONE {
        return Err(BitmapError::UnsupportedVariant(alloc::format!(
            "BMP compression {} unsupported",
            info_header.compression
        )));
    }
    if file_header.pixel_data_offset != PIXEL_DATA_OFFSET {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP pixel data offset is {}, expected {PIXEL_DATA_OFFSET}",
            file_header.pixel_data_offset
        )));
    }
    // zero is legal for BI_RGB in both size fields
    if info_header.bytes_in_data != 0 && info_header.bytes_in_data as usize != data_size {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP image data size field ({}) doesn't match expected ({data_size})",
            info_header.bytes_in_data
        )));
    }
    let expected_file_size = data_size + FILE_HEADER_SIZE + INFO_HEADER_SIZE;
    if file_header.file_size != 0 && file_header.file_size as usize != expected_file_size {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP file size field ({}) doesn't match expected ({expected_file_size})",
            file_header.file_size
        )));
    }
    Ok(())
}

// ── Full decode ─────────────────────────────────────────────────────

/// Decode a 24-bit BMP into an RGB image.
pub(crate) fn decode_bmp(
    data: &[u8],
    limits: Option<&Limits>,
    permissiveness: BmpPermissiveness,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let header = parse_bmp_header(data, permissiveness)?;
    limits::check_rgb8(limits, header.width, header.height)?;

    let w = header.width as usize;
    let h = header.height as usize;
    let pixel_data = data
        .get(PIXEL_DATA_OFFSET as usize..)
        .ok_or(BitmapError::UnexpectedEof)?;
    // header.stride * h cannot overflow; parse_bmp_header checked it
    if pixel_data.len() < header.stride * h {
        return Err(BitmapError::UnexpectedEof);
    }

    stop.check()?;

    let mut image = Image::new(header.width, header.height, BLACK);
    let mut cursor = Cursor::new(pixel_data);
    for (row_idx, y) in (0..header.height).rev().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let src = cursor.read_slice(header.stride)?;
        for (dst, bgr) in image.row_mut(y).iter_mut().zip(src[..w * 3].chunks_exact(3)) {
            *dst = Color::new(bgr[2], bgr[1], bgr[0]);
        }
    }

    log::debug!(
        "decoded {}x{} BMP: stride {}",
        header.width,
        header.height,
        header.stride
    );
    Ok(image)
}
