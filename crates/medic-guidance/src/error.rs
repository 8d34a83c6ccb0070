use medic_vision::CameraError;
use std::fmt;

#[derive(Debug)]
pub enum GuidanceError {
    Camera(CameraError),
    /// A `MonitorConfig` value the monitor cannot run with.
    Config(String),
    Channel(String),
}

impl fmt::Display for GuidanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuidanceError::Camera(err) => write!(f, "camera error: {err}"),
            GuidanceError::Config(msg) => write!(f, "invalid config: {msg}"),
            GuidanceError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for GuidanceError {}

impl From<CameraError> for GuidanceError {
    fn from(err: CameraError) -> Self {
        GuidanceError::Camera(err)
    }
}
