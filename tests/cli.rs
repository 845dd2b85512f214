#![cfg(feature = "cli")]

use std::path::Path;
use std::process::{Command, Output};

use enough::Unstoppable;
use imgconv::*;

fn imgconv(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imgconv"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn sample() -> Image {
    let mut img = Image::new(6, 4, BLACK);
    for y in 0..4 {
        for (x, px) in img.row_mut(y).iter_mut().enumerate() {
            *px = Color::new(x as u8 * 40, y as u8 * 60, 99);
        }
    }
    img
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn bmp_to_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.ppm");
    std::fs::write(&input, encode_bmp(&sample(), Unstoppable).unwrap()).unwrap();

    let out = imgconv(&[&input, &output]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        "Successfully converted"
    );
    assert_eq!(file::load(&output).unwrap(), sample());
}

#[test]
fn ppm_to_bmp_uppercase_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("OUT.BMP");
    std::fs::write(&input, encode_ppm(&sample(), Unstoppable).unwrap()).unwrap();

    let out = imgconv(&[&input, &output]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(bytes.len(), 54 + 20 * 4);
    assert_eq!(decode_bmp(&bytes, Unstoppable).unwrap(), sample());
}

#[test]
fn wrong_argument_count() {
    let dir = tempfile::tempdir().unwrap();
    let only = dir.path().join("in.bmp");
    assert_eq!(imgconv(&[&only]).status.code(), Some(1));
    assert_eq!(imgconv(&[]).status.code(), Some(1));
}

#[test]
fn unknown_input_format() {
    let dir = tempfile::tempdir().unwrap();
    let out = imgconv(&[&dir.path().join("in.gif"), &dir.path().join("out.bmp")]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("Unknown format of the input file"));
}

#[test]
fn unknown_output_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    std::fs::write(&input, encode_bmp(&sample(), Unstoppable).unwrap()).unwrap();
    let out = imgconv(&[&input, &dir.path().join("out")]);
    assert_eq!(out.status.code(), Some(3));
    assert!(stderr(&out).contains("Unknown format of the output file"));
}

#[test]
fn load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.bmp");
    let output = dir.path().join("out.ppm");
    let out = imgconv(&[&missing, &output]);
    assert_eq!(out.status.code(), Some(4));
    assert!(stderr(&out).starts_with("Loading failed:"));
    assert!(!output.exists());

    let garbage = dir.path().join("garbage.bmp");
    std::fs::write(&garbage, b"XY not a bitmap at all").unwrap();
    assert_eq!(imgconv(&[&garbage, &output]).status.code(), Some(4));
}

#[test]
fn save_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    std::fs::write(&input, encode_bmp(&sample(), Unstoppable).unwrap()).unwrap();
    let output = dir.path().join("no_such_dir").join("out.bmp");
    let out = imgconv(&[&input, &output]);
    assert_eq!(out.status.code(), Some(5));
    assert!(stderr(&out).starts_with("Saving failed:"));
}

#[test]
fn strict_flag_rejects_inconsistent_header() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.ppm");
    let mut bytes = encode_bmp(&sample(), Unstoppable).unwrap();
    bytes[34..38].copy_from_slice(&1u32.to_le_bytes());
    std::fs::write(&input, bytes).unwrap();

    assert_eq!(imgconv(&[&input, &output]).status.code(), Some(0));
    let status = Command::new(env!("CARGO_BIN_EXE_imgconv"))
        .arg("--strict")
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(4));
}

#[test]
fn help_exits_zero() {
    let out = Command::new(env!("CARGO_BIN_EXE_imgconv"))
        .arg("--help")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage"));
}

#[cfg(feature = "jpeg")]
#[test]
fn bmp_to_jpeg_with_quality() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.jpg");
    std::fs::write(&input, encode_bmp(&sample(), Unstoppable).unwrap()).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_imgconv"))
        .args(["--quality", "75"])
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(0));
    let info = ImageInfo::from_bytes(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!((info.width, info.height, info.format), (6, 4, ImageFormat::Jpeg));

    let status = Command::new(env!("CARGO_BIN_EXE_imgconv"))
        .args(["--quality", "0"])
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
}
