//! BMP encoder: uncompressed 24-bit, bottom-up, BGR.

use alloc::vec::Vec;
use enough::Stop;

use super::header::{FileHeader, InfoHeader, bmp_stride};
use crate::error::BitmapError;
use crate::pixel::Image;

/// Encode an image to BMP bytes.
///
/// Every size check runs before the first byte is produced, so a failure
/// never yields a partial file.
pub(crate) fn encode_bmp(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(BitmapError::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        });
    }

    let too_large = || BitmapError::DimensionsTooLarge { width, height };
    let bmp_width = i32::try_from(width).map_err(|_| too_large())?;
    let bmp_height = i32::try_from(height).map_err(|_| too_large())?;
    let row_stride = bmp_stride(width).ok_or_else(too_large)?;
    let pixel_data_size = row_stride
        .checked_mul(height as usize)
        .and_then(|size| u32::try_from(size).ok())
        .ok_or_else(too_large)?;
    let file_header = FileHeader::for_pixel_data(pixel_data_size).ok_or_else(too_large)?;
    let info_header = InfoHeader::new(bmp_width, bmp_height, pixel_data_size);

    stop.check()?;

    let mut out = Vec::with_capacity(file_header.file_size as usize);
    file_header.write_to(&mut out);
    info_header.write_to(&mut out);

    let pad_bytes = row_stride - width as usize * 3;
    for (row_idx, row) in image.rows().rev().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.push(px.b);
            out.push(px.g);
            out.push(px.r);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    debug_assert_eq!(out.len(), file_header.file_size as usize);
    log::debug!(
        "encoded {width}x{height} BMP: stride {row_stride}, {} bytes",
        out.len()
    );
    Ok(out)
}
