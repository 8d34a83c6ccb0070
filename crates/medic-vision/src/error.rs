use std::fmt;

#[derive(Debug, PartialEq)]
pub enum FrameError {
    /// `width * height` (or the byte count derived from it) overflows `usize`.
    ShapeOverflow,
    ShapeMismatch { expected: usize, got: usize },
    Decode(String),
    Empty,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::ShapeOverflow => write!(f, "frame dimensions overflow when multiplied"),
            FrameError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} elements, got {got}")
            }
            FrameError::Decode(msg) => write!(f, "decode error: {msg}"),
            FrameError::Empty => write!(f, "frame has no pixels"),
        }
    }
}

impl std::error::Error for FrameError {}

impl From<image::ImageError> for FrameError {
    fn from(err: image::ImageError) -> Self {
        FrameError::Decode(err.to_string())
    }
}

#[derive(Debug)]
pub enum CameraError {
    Device(String),
    Stream(String),
    Decode(FrameError),
    Channel(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Decode(err) => write!(f, "decode error: {err}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}

impl From<FrameError> for CameraError {
    fn from(err: FrameError) -> Self {
        CameraError::Decode(err)
    }
}
