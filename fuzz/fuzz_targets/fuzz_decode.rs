#![no_main]
use imgconv::{BmpPermissiveness, DecodeRequest, ImageInfo, Limits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };

    // Auto-detect (BMP, PPM) and probe must never panic
    let _ = ImageInfo::from_bytes(data);
    let _ = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode_auto(enough::Unstoppable);

    // Each format explicitly, both BMP modes
    for permissiveness in [BmpPermissiveness::Standard, BmpPermissiveness::Strict] {
        let _ = DecodeRequest::new(data)
            .with_limits(&limits)
            .with_permissiveness(permissiveness)
            .decode_bmp(enough::Unstoppable);
    }
    let _ = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode_ppm(enough::Unstoppable);
});
