use crate::error::BitmapError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Dimension overflow is always
/// rejected regardless of limits.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded RGB8 buffer (3 per pixel).
    pub max_memory_bytes: Option<u64>,
}

fn within(what: &str, value: u64, max: Option<u64>) -> Result<(), BitmapError> {
    match max {
        Some(max) if value > max => Err(BitmapError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

/// Reject a `width` x `height` RGB8 image whose buffer size overflows, then
/// any configured limit it breaks. Runs before a decoder allocates.
pub(crate) fn check_rgb8(
    limits: Option<&Limits>,
    width: u32,
    height: u32,
) -> Result<(), BitmapError> {
    let pixels = u64::from(width) * u64::from(height);
    let out_bytes = usize::try_from(pixels)
        .ok()
        .and_then(|px| px.checked_mul(3))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    let Some(limits) = limits else {
        return Ok(());
    };
    within("width", width.into(), limits.max_width)?;
    within("height", height.into(), limits.max_height)?;
    within("pixel count", pixels, limits.max_pixels)?;
    within("buffer bytes", out_bytes as u64, limits.max_memory_bytes)
}
