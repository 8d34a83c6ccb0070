use crate::{FrameError, PixelSample};

/// One captured frame as `width * height` RGB samples in row-major order.
///
/// The length invariant is checked on construction, so a `FrameBuffer` always
/// holds exactly `width * height` pixels. Zero-sized frames are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<PixelSample>,
}

fn pixel_count(width: usize, height: usize) -> Result<usize, FrameError> {
    width.checked_mul(height).ok_or(FrameError::ShapeOverflow)
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize, pixels: Vec<PixelSample>) -> Result<Self, FrameError> {
        let expected = pixel_count(width, height)?;
        if expected != pixels.len() {
            return Err(FrameError::ShapeMismatch {
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A frame filled with a single colour.
    pub fn filled(width: usize, height: usize, pixel: PixelSample) -> Result<Self, FrameError> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![pixel; count],
        })
    }

    /// Build from packed `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb(width: usize, height: usize, data: &[u8]) -> Result<Self, FrameError> {
        Self::from_packed(width, height, data, 3)
    }

    /// Build from packed `[R, G, B, A, ...]` bytes, as read back from a canvas.
    /// Alpha is dropped.
    pub fn from_rgba(width: usize, height: usize, data: &[u8]) -> Result<Self, FrameError> {
        Self::from_packed(width, height, data, 4)
    }

    fn from_packed(
        width: usize,
        height: usize,
        data: &[u8],
        stride: usize,
    ) -> Result<Self, FrameError> {
        let expected = pixel_count(width, height)?
            .checked_mul(stride)
            .ok_or(FrameError::ShapeOverflow)?;
        if expected != data.len() {
            return Err(FrameError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        let pixels = data
            .chunks_exact(stride)
            .map(|px| PixelSample::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[PixelSample] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<PixelSample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }
}
