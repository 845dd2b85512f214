//! PPM decoder: header tokenizer and P6 sample unpacking.

use alloc::vec::Vec;
use enough::Stop;
use rgb::FromSlice;

use super::PnmHeader;
use crate::error::BitmapError;
use crate::pixel::{Color, Image};

/// Parse a P6 header: magic, width, height, maxval, then one whitespace byte.
///
/// `#` comments may appear anywhere whitespace is allowed before maxval.
pub(crate) fn parse_header(data: &[u8]) -> Result<PnmHeader, BitmapError> {
    let magic = data.get(..2).ok_or(BitmapError::UnexpectedEof)?;
    match magic {
        b"P6" => {}
        [b'P', b'1'..=b'7'] | b"Pf" | b"PF" => {
            return Err(BitmapError::UnsupportedVariant(alloc::format!(
                "PNM variant {} (only binary PPM P6 supported)",
                core::str::from_utf8(magic).unwrap_or("P?")
            )));
        }
        _ => return Err(BitmapError::UnrecognizedFormat),
    }

    let mut pos = 2;
    match data.get(pos) {
        Some(c) if c.is_ascii_whitespace() || *c == b'#' => {}
        Some(_) => {
            return Err(BitmapError::InvalidHeader(
                "PPM magic must be followed by whitespace".into(),
            ));
        }
        None => return Err(BitmapError::UnexpectedEof),
    }

    let width = read_header_uint(data, &mut pos, "width")?;
    let height = read_header_uint(data, &mut pos, "height")?;
    let maxval = read_header_uint(data, &mut pos, "maxval")?;

    // exactly one whitespace byte separates maxval from the samples
    match data.get(pos) {
        Some(c) if c.is_ascii_whitespace() => pos += 1,
        Some(_) => {
            return Err(BitmapError::InvalidHeader(
                "PPM maxval must be followed by whitespace".into(),
            ));
        }
        None => return Err(BitmapError::UnexpectedEof),
    }

    if width == 0 || height == 0 {
        return Err(BitmapError::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        });
    }
    if maxval == 0 || maxval > 65535 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "PPM maxval {maxval} out of range"
        )));
    }
    if maxval > 255 {
        return Err(BitmapError::UnsupportedVariant(alloc::format!(
            "16-bit PPM (maxval {maxval})"
        )));
    }

    log::trace!("PPM header: {width}x{height} maxval {maxval}, data at {pos}");
    Ok(PnmHeader {
        width,
        height,
        maxval,
        data_offset: pos,
    })
}

fn read_header_uint(data: &[u8], pos: &mut usize, what: &str) -> Result<u32, BitmapError> {
    // skip whitespace and comments
    loop {
        match data.get(*pos) {
            None => return Err(BitmapError::UnexpectedEof),
            Some(b'#') => {
                let rest = &data[*pos..];
                let line_end = rest
                    .iter()
                    .position(|&c| c == b'\n')
                    .ok_or(BitmapError::UnexpectedEof)?;
                *pos += line_end + 1;
            }
            Some(c) if c.is_ascii_whitespace() => *pos += 1,
            Some(_) => break,
        }
    }

    let start = *pos;
    let mut value: u32 = 0;
    while let Some(&c) = data.get(*pos) {
        if !c.is_ascii_digit() {
            break;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(c - b'0')))
            .ok_or_else(|| BitmapError::InvalidHeader(alloc::format!("PPM {what} overflows")))?;
        *pos += 1;
    }
    if *pos == start {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "PPM {what} is not a number"
        )));
    }
    Ok(value)
}

/// Unpack `width * height` RGB samples, rescaling when maxval < 255.
pub(crate) fn decode_pixels(
    pixel_data: &[u8],
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let (width, height) = (header.width, header.height);
    let row_bytes = (width as usize)
        .checked_mul(3)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let expected = row_bytes
        .checked_mul(height as usize)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let samples = pixel_data
        .get(..expected)
        .ok_or(BitmapError::UnexpectedEof)?;

    let mut pixels: Vec<Color> = Vec::with_capacity(expected / 3);
    if header.maxval == 255 {
        for (row_idx, row) in samples.chunks_exact(row_bytes).enumerate() {
            if row_idx % 16 == 0 {
                stop.check()?;
            }
            pixels.extend_from_slice(row.as_rgb());
        }
    } else {
        let maxval = header.maxval;
        let scale = |v: u8| -> Result<u8, BitmapError> {
            let v = u32::from(v);
            if v > maxval {
                return Err(BitmapError::InvalidData(alloc::format!(
                    "PPM sample {v} exceeds maxval {maxval}"
                )));
            }
            Ok(((v * 255 + maxval / 2) / maxval) as u8)
        };
        for (row_idx, row) in samples.chunks_exact(row_bytes).enumerate() {
            if row_idx % 16 == 0 {
                stop.check()?;
            }
            for rgb in row.chunks_exact(3) {
                pixels.push(Color::new(scale(rgb[0])?, scale(rgb[1])?, scale(rgb[2])?));
            }
        }
    }

    log::debug!("decoded {width}x{height} PPM (maxval {})", header.maxval);
    Image::from_pixels(pixels, width, height)
}
