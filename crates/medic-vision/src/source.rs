use crate::{CameraConfig, CameraError, FacingMode, FrameBuffer, FrameError};
use image::imageops::FilterType;
use medic_base::log;
use std::path::{Path, PathBuf};

/// Async frame capture.
///
/// Implementations hand out one frame per `recv` call. Callers that poll on a
/// timer should await each `recv` before issuing the next one, so a source
/// never has more than one capture in flight.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    /// Receive the next frame.
    async fn recv(&mut self) -> Result<FrameBuffer, CameraError>;
}

/// Replays still images from a directory as if they were camera frames.
///
/// Files are visited in name order and the sequence wraps around. Images
/// larger than the configured capture size are scaled down to fit, keeping
/// their aspect ratio. With `FacingMode::User` frames are mirrored
/// horizontally.
#[derive(Debug)]
pub struct ReplaySource {
    files: Vec<PathBuf>,
    next: usize,
    max_width: u32,
    max_height: u32,
    facing: FacingMode,
}

const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"];

impl ReplaySource {
    /// Collect the image files in `dir`.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if the directory cannot be read or holds
    /// no images.
    pub fn open(dir: impl AsRef<Path>, config: &CameraConfig) -> Result<Self, CameraError> {
        let dir = dir.as_ref();
        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_image(path))
            .collect();
        if files.is_empty() {
            return Err(CameraError::Device(format!("no images in {}", dir.display())));
        }
        files.sort();
        log::info!("replaying {} images from {}", files.len(), dir.display());

        Ok(Self {
            files,
            next: 0,
            max_width: config.width(),
            max_height: config.height(),
            facing: config.facing(),
        })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

impl FrameSource for ReplaySource {
    async fn recv(&mut self) -> Result<FrameBuffer, CameraError> {
        let path = &self.files[self.next % self.files.len()];
        self.next = (self.next + 1) % self.files.len();

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| CameraError::Stream(format!("{}: {}", path.display(), e)))?;
        let mut img = image::load_from_memory(&data).map_err(FrameError::from)?;
        if img.width() > self.max_width || img.height() > self.max_height {
            img = img.resize(self.max_width, self.max_height, FilterType::Triangle);
        }
        if self.facing == FacingMode::User {
            img = img.fliph();
        }
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        log::debug!("replayed {} as {}x{}", path.display(), width, height);
        Ok(FrameBuffer::from_rgb(width as usize, height as usize, rgb.as_raw())?)
    }
}
