//! BITMAPFILEHEADER + BITMAPINFOHEADER for uncompressed 24-bit BMP.
//!
//! Both headers are serialized field by field in little-endian order; the
//! in-memory struct layout never touches the wire.

use alloc::vec::Vec;

pub(crate) const SIGNATURE: [u8; 2] = *b"BM";
pub(crate) const FILE_HEADER_SIZE: usize = 14;
pub(crate) const INFO_HEADER_SIZE: usize = 40;
/// Offset of the first pixel row: both headers, no palette.
pub(crate) const PIXEL_DATA_OFFSET: u32 = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u32;
pub(crate) const PLANES: u16 = 1;
pub(crate) const BITS_PER_PIXEL: u16 = 24;
/// BI_RGB
pub(crate) const COMPRESSION_NONE: u32 = 0;
/// Pixels per metre, about 300 DPI.
pub(crate) const RESOLUTION: i32 = 11811;
pub(crate) const USED_COLORS: i32 = 0;
pub(crate) const SIGNIFICANT_COLORS: i32 = 0x0100_0000;

/// Row stride in bytes for a 24-bit BMP: `3 * width` rounded up to a multiple of 4.
///
/// `None` if the stride does not fit in `usize`.
pub fn bmp_stride(width: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved: [u8; 4],
    pub pixel_data_offset: u32,
}

impl FileHeader {
    /// Header for a file carrying `pixel_data_size` bytes of rows.
    /// `None` if the total size overflows `u32`.
    pub fn for_pixel_data(pixel_data_size: u32) -> Option<Self> {
        Some(Self {
            signature: SIGNATURE,
            file_size: PIXEL_DATA_OFFSET.checked_add(pixel_data_size)?,
            reserved: [0; 4],
            pixel_data_offset: PIXEL_DATA_OFFSET,
        })
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved);
        out.extend_from_slice(&self.pixel_data_offset.to_le_bytes());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub bytes_in_data: u32,
    pub horizontal_resolution: i32,
    pub vertical_resolution: i32,
    pub used_colors: i32,
    pub significant_colors: i32,
}

impl InfoHeader {
    pub fn new(width: i32, height: i32, bytes_in_data: u32) -> Self {
        Self {
            header_size: INFO_HEADER_SIZE as u32,
            width,
            // positive = bottom-up
            height,
            planes: PLANES,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            bytes_in_data,
            horizontal_resolution: RESOLUTION,
            vertical_resolution: RESOLUTION,
            used_colors: USED_COLORS,
            significant_colors: SIGNIFICANT_COLORS,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.bytes_in_data.to_le_bytes());
        out.extend_from_slice(&self.horizontal_resolution.to_le_bytes());
        out.extend_from_slice(&self.vertical_resolution.to_le_bytes());
        out.extend_from_slice(&self.used_colors.to_le_bytes());
        out.extend_from_slice(&self.significant_colors.to_le_bytes());
    }
}
