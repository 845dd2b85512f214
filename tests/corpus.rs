//! Test corpus: roundtrip tests with various patterns, sizes, and malformed inputs.

use enough::Unstoppable;
use imgconv::*;

fn checkerboard(w: u32, h: u32) -> Image {
    let mut img = Image::new(w, h, BLACK);
    for y in 0..h {
        for (x, px) in img.row_mut(y).iter_mut().enumerate() {
            *px = if (x as u32 + y) % 2 == 0 {
                Color::new(200, 220, 240)
            } else {
                Color::new(10, 40, 70)
            };
        }
    }
    img
}

fn noise_pattern(w: u32, h: u32) -> Image {
    let mut img = Image::new(w, h, BLACK);
    let mut state: u32 = 0xDEAD_BEEF;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as u8
    };
    for y in 0..h {
        for px in img.row_mut(y) {
            *px = Color::new(next(), next(), next());
        }
    }
    img
}

// ── BMP layout ───────────────────────────────────────────────────────

#[test]
fn bmp_every_padding_remainder() {
    for w in 1..=9 {
        for h in [1, 2, 3, 7] {
            let img = noise_pattern(w, h);
            let encoded = encode_bmp(&img, Unstoppable).unwrap();
            let stride = bmp_stride(w).unwrap();
            assert_eq!(stride % 4, 0);
            assert_eq!(encoded.len(), 54 + stride * h as usize, "{w}x{h}");

            // padding bytes are zero
            let row_bytes = w as usize * 3;
            for row in encoded[54..].chunks_exact(stride) {
                assert!(row[row_bytes..].iter().all(|&b| b == 0), "{w}x{h}");
            }

            let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
            assert_eq!(decoded, img, "{w}x{h}");
        }
    }
}

#[test]
fn bmp_rows_are_stored_bottom_up() {
    let mut img = Image::new(1, 3, BLACK);
    img.row_mut(0)[0] = Color::new(1, 2, 3);
    img.row_mut(2)[0] = Color::new(7, 8, 9);
    let encoded = encode_bmp(&img, Unstoppable).unwrap();
    // first stored row is the bottom one, in BGR order
    assert_eq!(&encoded[54..58], &[9, 8, 7, 0]);
    assert_eq!(&encoded[62..66], &[3, 2, 1, 0]);
}

#[test]
fn bmp_checkerboard_large() {
    let img = checkerboard(101, 37);
    let encoded = encode_bmp(&img, Unstoppable).unwrap();
    assert_eq!(decode(&encoded, Unstoppable).unwrap(), img);
}

// ── BMP malformed input ─────────────────────────────────────────────

#[test]
fn bmp_wrong_signature() {
    let mut encoded = encode_bmp(&checkerboard(2, 2), Unstoppable).unwrap();
    encoded[0] = b'X';
    encoded[1] = b'Y';
    assert!(matches!(
        decode_bmp(&encoded, Unstoppable),
        Err(BitmapError::UnrecognizedFormat)
    ));
}

#[test]
fn bmp_truncated_header() {
    let encoded = encode_bmp(&checkerboard(2, 2), Unstoppable).unwrap();
    for len in [0, 2, 13, 14, 30, 53] {
        let err = decode_bmp(&encoded[..len], Unstoppable).unwrap_err();
        assert!(
            matches!(
                err,
                BitmapError::UnexpectedEof | BitmapError::UnrecognizedFormat
            ),
            "len {len}: {err}"
        );
    }
}

#[test]
fn bmp_truncated_pixels() {
    let encoded = encode_bmp(&noise_pattern(5, 4), Unstoppable).unwrap();
    let short = &encoded[..encoded.len() - 1];
    assert!(matches!(
        decode_bmp(short, Unstoppable),
        Err(BitmapError::UnexpectedEof)
    ));
}

#[test]
fn bmp_trailing_bytes_are_ignored() {
    let img = noise_pattern(3, 3);
    let mut encoded = encode_bmp(&img, Unstoppable).unwrap();
    encoded.extend_from_slice(&[0xAA; 17]);
    assert_eq!(decode_bmp(&encoded, Unstoppable).unwrap(), img);
}

#[test]
fn bmp_nonpositive_dimensions() {
    let mut encoded = encode_bmp(&checkerboard(2, 2), Unstoppable).unwrap();
    encoded[22..26].copy_from_slice(&(-2i32).to_le_bytes());
    assert!(matches!(
        decode_bmp(&encoded, Unstoppable),
        Err(BitmapError::InvalidDimensions { height: -2, .. })
    ));
    encoded[18..22].copy_from_slice(&0i32.to_le_bytes());
    assert!(matches!(
        decode_bmp(&encoded, Unstoppable),
        Err(BitmapError::InvalidDimensions { .. })
    ));
}

#[test]
fn bmp_size_fields_standard_vs_strict() {
    let img = noise_pattern(3, 2);
    let mut encoded = encode_bmp(&img, Unstoppable).unwrap();
    // bogus bytes_in_data
    encoded[34..38].copy_from_slice(&12345u32.to_le_bytes());

    assert_eq!(decode_bmp(&encoded, Unstoppable).unwrap(), img);
    let strict = DecodeRequest::new(&encoded)
        .with_permissiveness(BmpPermissiveness::Strict)
        .decode_bmp(Unstoppable);
    assert!(matches!(strict, Err(BitmapError::InvalidHeader(_))));

    // zero is always accepted for the size fields
    encoded[2..6].copy_from_slice(&0u32.to_le_bytes());
    encoded[34..38].copy_from_slice(&0u32.to_le_bytes());
    let strict = DecodeRequest::new(&encoded)
        .with_permissiveness(BmpPermissiveness::Strict)
        .decode_bmp(Unstoppable)
        .unwrap();
    assert_eq!(strict, img);
}

#[test]
fn bmp_strict_rejects_other_bit_depths() {
    let mut encoded = encode_bmp(&checkerboard(4, 4), Unstoppable).unwrap();
    encoded[28..30].copy_from_slice(&32u16.to_le_bytes());
    let strict = DecodeRequest::new(&encoded)
        .with_permissiveness(BmpPermissiveness::Strict)
        .decode_bmp(Unstoppable);
    assert!(strict.is_err());
}

// ── PPM ──────────────────────────────────────────────────────────────

#[test]
fn ppm_noise_roundtrip() {
    let img = noise_pattern(13, 11);
    let encoded = encode_ppm(&img, Unstoppable).unwrap();
    assert_eq!(decode(&encoded, Unstoppable).unwrap(), img);
}

#[test]
fn ppm_header_comments_and_whitespace() {
    let data = b"P6 # made by hand\n2\t1\r\n# maxval next\n255\n\x01\x02\x03\x04\x05\x06";
    let img = decode_ppm(data, Unstoppable).unwrap();
    assert_eq!((img.width(), img.height()), (2, 1));
    assert_eq!(img.pixels(), &[Color::new(1, 2, 3), Color::new(4, 5, 6)]);
}

#[test]
fn ppm_small_maxval_is_rescaled() {
    let data = b"P6\n2 1\n15\n\x00\x0f\x07\x0f\x0f\x0f";
    let img = decode_ppm(data, Unstoppable).unwrap();
    assert_eq!(img.pixels()[0], Color::new(0, 255, 119));
    assert_eq!(img.pixels()[1], Color::new(255, 255, 255));
}

#[test]
fn ppm_rejects_other_variants() {
    assert!(matches!(
        decode_ppm(b"P5\n1 1\n255\n\x00", Unstoppable),
        Err(BitmapError::UnsupportedVariant(_) | BitmapError::UnrecognizedFormat)
    ));
    assert!(matches!(
        decode_ppm(b"P6\n1 1\n65535\n\x00\x00\x00\x00\x00\x00", Unstoppable),
        Err(BitmapError::UnsupportedVariant(_))
    ));
}

#[test]
fn ppm_truncated_pixels() {
    let encoded = encode_ppm(&checkerboard(4, 4), Unstoppable).unwrap();
    assert!(matches!(
        decode_ppm(&encoded[..encoded.len() - 2], Unstoppable),
        Err(BitmapError::UnexpectedEof)
    ));
}

// ── Cross-format ─────────────────────────────────────────────────────

#[test]
fn bmp_and_ppm_carry_identical_pixels() {
    let img = noise_pattern(10, 6);
    let bmp = decode(&encode_bmp(&img, Unstoppable).unwrap(), Unstoppable).unwrap();
    let ppm = decode(&encode_ppm(&img, Unstoppable).unwrap(), Unstoppable).unwrap();
    assert_eq!(bmp, ppm);
}

#[test]
fn imgref_interop() {
    let img = checkerboard(4, 3);
    let view = img.as_imgref().unwrap();
    assert_eq!((view.width(), view.height()), (4, 3));
    let owned = imgref::ImgVec::new(img.pixels().to_vec(), 4, 3);
    assert_eq!(Image::try_from(owned).unwrap(), img);
}
