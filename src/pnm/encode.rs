//! PPM encoder: P6, maxval 255.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;
use rgb::ComponentBytes;

use crate::error::BitmapError;
use crate::pixel::Image;

/// Encode an image as binary PPM, rows top to bottom.
pub(crate) fn encode_ppm(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let (width, height) = (image.width(), image.height());
    if image.is_empty() {
        return Err(BitmapError::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        });
    }
    let pixel_bytes = image
        .pixels()
        .len()
        .checked_mul(3)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    let header = format!("P6\n{width} {height}\n255\n");
    let mut out = Vec::with_capacity(header.len().saturating_add(pixel_bytes));
    out.extend_from_slice(header.as_bytes());

    // RGB8 is already the P6 sample order
    for (row_idx, row) in image.rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row.as_bytes());
    }

    log::debug!("encoded {width}x{height} PPM: {} bytes", out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{BLACK, Color};
    use enough::Unstoppable;

    #[test]
    fn header_and_samples() {
        let mut img = Image::new(2, 1, BLACK);
        img.row_mut(0)[0] = Color::new(255, 0, 128);
        img.row_mut(0)[1] = Color::new(1, 2, 3);
        let out = encode_ppm(&img, &Unstoppable).unwrap();
        assert_eq!(&out[..11], b"P6\n2 1\n255\n");
        assert_eq!(&out[11..], &[255, 0, 128, 1, 2, 3]);
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            encode_ppm(&Image::new(0, 3, BLACK), &Unstoppable),
            Err(BitmapError::InvalidDimensions { .. })
        ));
    }
}
