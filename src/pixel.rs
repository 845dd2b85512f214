use alloc::vec;
use alloc::vec::Vec;

use crate::error::BitmapError;

/// One RGB pixel, 8 bits per channel, no alpha.
pub type Color = rgb::RGB8;

/// Fill color for freshly allocated images.
pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

/// Owned, row-major RGB8 image.
///
/// Row 0 is the top row. An image with a zero dimension is *empty*: it holds
/// no pixels and every encoder rejects it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Image {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Image {
    /// Allocate a `width` x `height` image with every pixel set to `fill`.
    ///
    /// Panics with "capacity overflow" if `width * height` pixels do not fit
    /// in memory, like any oversized `Vec`. Decoders run their limit and
    /// overflow checks before calling this.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let len = (width as usize).saturating_mul(height as usize);
        Self {
            pixels: vec![fill; len],
            width,
            height,
        }
    }

    /// Wrap an existing pixel vector. `pixels.len()` must equal `width * height`.
    pub fn from_pixels(pixels: Vec<Color>, width: u32, height: u32) -> Result<Self, BitmapError> {
        let needed = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        if pixels.len() != needed {
            return Err(BitmapError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixels of row `y` (0 = top). Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[Color] {
        assert!(y < self.height, "row {y} out of range");
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Mutable pixels of row `y` (0 = top). Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [Color] {
        assert!(y < self.height, "row {y} out of range");
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.pixels[start..start + w]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Color]> + ExactSizeIterator {
        // chunks_exact(0) panics; a zero-width image has no pixels anyway
        self.pixels.chunks_exact((self.width as usize).max(1))
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    /// Borrow as an [`imgref::ImgRef`]. `None` for empty images.
    pub fn as_imgref(&self) -> Option<imgref::ImgRef<'_, Color>> {
        if self.is_empty() {
            return None;
        }
        Some(imgref::ImgRef::new(
            &self.pixels[..],
            self.width as usize,
            self.height as usize,
        ))
    }
}

impl TryFrom<imgref::ImgVec<Color>> for Image {
    type Error = BitmapError;

    /// Copies out the visible pixels, dropping any stride padding.
    fn try_from(img: imgref::ImgVec<Color>) -> Result<Self, BitmapError> {
        let (Ok(width), Ok(height)) = (u32::try_from(img.width()), u32::try_from(img.height()))
        else {
            return Err(BitmapError::DimensionsTooLarge {
                width: u32::MAX,
                height: u32::MAX,
            });
        };
        let mut pixels = Vec::with_capacity(img.width() * img.height());
        for row in img.rows() {
            pixels.extend_from_slice(row);
        }
        Self::from_pixels(pixels, width, height)
    }
}
