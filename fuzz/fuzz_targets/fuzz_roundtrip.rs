#![no_main]
use imgconv::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let format = ImageFormat::from_magic(data);
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(format, enough::Unstoppable)
    else {
        return;
    };

    // Re-encode in the same format; BMP and PPM are lossless
    let Ok(reencoded) = EncodeRequest::new(format).encode(&decoded, enough::Unstoppable) else {
        panic!("decoded {format} image failed to re-encode");
    };
    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");

    // The encoder output is canonical: a second pass is byte-identical
    let again = EncodeRequest::new(format)
        .encode(&decoded2, enough::Unstoppable)
        .unwrap();
    assert_eq!(reencoded, again);
});
