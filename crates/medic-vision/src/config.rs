/// Which camera to prefer on devices that have more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    /// Front camera. Frames are mirrored, as in a selfie preview.
    User,
    /// Back camera, pointed at the patient.
    #[default]
    Environment,
}

/// Requested capture settings. Sources treat width and height as ideals and
/// may deliver something else.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    width: u32,
    height: u32,
    facing: FacingMode,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            facing: FacingMode::Environment,
        }
    }
}

impl CameraConfig {
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_facing(mut self, facing: FacingMode) -> Self {
        self.facing = facing;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn facing(&self) -> FacingMode {
        self.facing
    }
}
