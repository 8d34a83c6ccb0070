use crate::{FrameBuffer, FrameError};

/// Decode an encoded image (JPEG, PNG, GIF, BMP, TIFF or WebP) into a frame.
///
/// The format is detected from the data. Whatever the source layout
/// (greyscale, alpha, 16-bit, float), the result is 8-bit RGB.
///
/// # Errors
///
/// Returns `FrameError::Decode` if the data is not a supported image.
pub fn decode_frame(data: &[u8]) -> Result<FrameBuffer, FrameError> {
    let img = image::load_from_memory(data)?;
    to_frame(img)
}

fn to_frame(img: image::DynamicImage) -> Result<FrameBuffer, FrameError> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    FrameBuffer::from_rgb(width as usize, height as usize, rgb.as_raw())
}
