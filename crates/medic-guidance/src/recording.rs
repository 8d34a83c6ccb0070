/// Shown when the camera cannot be opened.
pub const CAMERA_ERROR_MESSAGE: &str =
    "Unable to access camera. Please check permissions and try again.";

/// Camera control state of the guidance view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingEvent {
    Start,
    TogglePause,
    Stop,
    /// Stop and start again.
    Reset,
    CameraFailed,
}

impl RecordingState {
    pub fn apply(self, event: RecordingEvent) -> Self {
        match (self, event) {
            (_, RecordingEvent::Start | RecordingEvent::Reset) => RecordingState::Recording,
            (RecordingState::Recording, RecordingEvent::TogglePause) => RecordingState::Paused,
            (RecordingState::Paused, RecordingEvent::TogglePause) => RecordingState::Recording,
            (RecordingState::Idle, RecordingEvent::TogglePause) => RecordingState::Idle,
            (_, RecordingEvent::Stop | RecordingEvent::CameraFailed) => RecordingState::Idle,
        }
    }

    /// Frames are analyzed only while actively recording.
    pub fn is_analyzing(self) -> bool {
        self == RecordingState::Recording
    }

    /// Camera stream is open (recording or paused).
    pub fn is_active(self) -> bool {
        self != RecordingState::Idle
    }
}
