//! AR guidance: watch the camera while recording and flag what the frame
//! colours suggest.
//!
//! [`RecordingState`] models the camera controls as pure transitions, and
//! [`GuidanceMonitor`] is the timer that samples a
//! [`FrameSource`](medic_vision::FrameSource) while recording, classifies each
//! frame and reads detections aloud.

pub mod config;
pub mod error;
pub mod monitor;
pub mod recording;

pub use config::MonitorConfig;
pub use error::GuidanceError;
pub use monitor::GuidanceMonitor;
pub use recording::{CAMERA_ERROR_MESSAGE, RecordingEvent, RecordingState};
