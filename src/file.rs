//! Path-based load/save, dispatched on file extension.
//!
//! Encoding always completes in memory before the destination is touched,
//! and the bytes land in a sibling temporary file that is renamed over the
//! destination only once fully written. A failed save leaves whatever was at
//! the destination unchanged.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::BitmapError;
use crate::format::{Codec, ImageFormat};
use crate::pixel::Image;

fn codec_for(path: &Path) -> Result<(ImageFormat, Codec), BitmapError> {
    let format = ImageFormat::from_path(path);
    let codec = format
        .codec()
        .ok_or_else(|| BitmapError::UnknownFormat(path.display().to_string()))?;
    Ok((format, codec))
}

/// Load an image, choosing the decoder from the extension of `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Image, BitmapError> {
    let path = path.as_ref();
    let (format, codec) = codec_for(path)?;
    log::debug!("loading {} as {format}", path.display());
    (codec.decode)(&fs::read(path)?)
}

/// Save an image, choosing the encoder from the extension of `path`.
pub fn save(path: impl AsRef<Path>, image: &Image) -> Result<(), BitmapError> {
    let path = path.as_ref();
    let (format, codec) = codec_for(path)?;
    log::debug!("saving {} as {format}", path.display());
    write_encoded(path, &(codec.encode)(image)?)
}

pub fn load_bmp(path: impl AsRef<Path>) -> Result<Image, BitmapError> {
    crate::decode_bmp(&fs::read(path)?, enough::Unstoppable)
}

pub fn save_bmp(path: impl AsRef<Path>, image: &Image) -> Result<(), BitmapError> {
    write_encoded(path.as_ref(), &crate::encode_bmp(image, enough::Unstoppable)?)
}

pub fn load_ppm(path: impl AsRef<Path>) -> Result<Image, BitmapError> {
    crate::decode_ppm(&fs::read(path)?, enough::Unstoppable)
}

pub fn save_ppm(path: impl AsRef<Path>, image: &Image) -> Result<(), BitmapError> {
    write_encoded(path.as_ref(), &crate::encode_ppm(image, enough::Unstoppable)?)
}

#[cfg(feature = "jpeg")]
pub fn load_jpeg(path: impl AsRef<Path>) -> Result<Image, BitmapError> {
    crate::decode_jpeg(&fs::read(path)?, enough::Unstoppable)
}

#[cfg(feature = "jpeg")]
pub fn save_jpeg(path: impl AsRef<Path>, image: &Image) -> Result<(), BitmapError> {
    write_encoded(path.as_ref(), &crate::encode_jpeg(image, enough::Unstoppable)?)
}

/// Write fully encoded bytes to `path`, replacing it atomically.
///
/// The temporary file is removed on any failure; an existing destination is
/// only ever replaced by a complete file.
pub fn write_encoded(path: &Path, bytes: &[u8]) -> Result<(), BitmapError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    if let Some(perms) = destination_permissions(path) {
        fs::set_permissions(tmp.path(), perms)?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Mode for the replacement file: that of the file being replaced, else the
/// usual 0644 rather than the temporary file's owner-only mode.
fn destination_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        #[cfg(unix)]
        _ => {
            use std::os::unix::fs::PermissionsExt;
            Some(fs::Permissions::from_mode(0o644))
        }
        #[cfg(not(unix))]
        _ => None,
    }
}
