#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, pixels: &[u8]) -> Vec<u8> {
    let stride = ((width as usize * 3) + 3) & !3;
    let data_size = (stride * height.unsigned_abs() as usize) as u32;
    let mut out = Vec::with_capacity(54 + pixels.len());
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(54 + data_size).to_le_bytes()); // file size
    out.extend_from_slice(&0u32.to_le_bytes()); // reserved
    out.extend_from_slice(&54u32.to_le_bytes()); // data offset
    out.extend_from_slice(&40u32.to_le_bytes()); // info header size
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bpp
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&data_size.to_le_bytes());
    out.extend_from_slice(&11811i32.to_le_bytes()); // horizontal resolution
    out.extend_from_slice(&11811i32.to_le_bytes()); // vertical resolution
    out.extend_from_slice(&0i32.to_le_bytes()); // used colors
    out.extend_from_slice(&0x0100_0000i32.to_le_bytes()); // significant colors
    out.extend_from_slice(pixels);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PPM 2x2
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

    // PPM with a comment and small maxval
    let ppm15 = b"P6\n# seed\n1 1\n15\n\x0f\x07\x00";
    fs::write(format!("{dir}/ppm_maxval15.ppm"), ppm15).unwrap();

    // BMP 1x1: one BGR pixel plus one padding byte
    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, &[0x00, 0x00, 0xff, 0x00])).unwrap();

    // BMP 2x1 (red, blue) with two padding bytes
    fs::write(
        format!("{dir}/bmp_2x1.bmp"),
        bmp(2, 1, &[0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00]),
    )
    .unwrap();

    // BMP 4x2, no padding
    fs::write(format!("{dir}/bmp_4x2.bmp"), bmp(4, 2, &[0x40; 24])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/bmp_negative_height.bmp"), bmp(1, -1, &[0; 4])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
