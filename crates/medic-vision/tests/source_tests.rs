use image::{ImageBuffer, Rgb};
use medic_vision::{
    CameraConfig, CameraError, FacingMode, FrameBuffer, FrameSource, PixelSample, ReplaySource,
};
use std::fs;
use std::path::PathBuf;

// Mock implementation for testing
struct MockSource {
    frame_count: usize,
}

impl FrameSource for MockSource {
    async fn recv(&mut self) -> Result<FrameBuffer, CameraError> {
        self.frame_count += 1;
        Ok(FrameBuffer::filled(2, 2, PixelSample::new(0, 0, 0))?)
    }
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("medic-replay-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(dir: &PathBuf, name: &str, width: u32, height: u32, color: [u8; 3]) {
    ImageBuffer::from_pixel(width, height, Rgb(color))
        .save(dir.join(name))
        .unwrap();
}

#[tokio::test]
async fn test_frame_source_polymorphism() {
    async fn capture(source: &mut impl FrameSource, count: usize) -> Result<Vec<FrameBuffer>, CameraError> {
        let mut frames = Vec::new();
        for _ in 0..count {
            frames.push(source.recv().await?);
        }
        Ok(frames)
    }

    let mut source = MockSource { frame_count: 0 };
    let frames = capture(&mut source, 3).await.unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(source.frame_count, 3);
}

#[tokio::test]
async fn test_replay_source_cycles_in_name_order() {
    let dir = temp_dir("cycle");
    write_png(&dir, "b.png", 4, 4, [0, 0, 200]);
    write_png(&dir, "a.png", 4, 4, [200, 0, 0]);
    fs::write(dir.join("notes.txt"), "not an image").unwrap();

    let mut source = ReplaySource::open(&dir, &CameraConfig::default()).unwrap();
    assert_eq!(source.len(), 2);

    let first = source.recv().await.unwrap();
    let second = source.recv().await.unwrap();
    let third = source.recv().await.unwrap();
    assert_eq!(first.get(0, 0), Some(PixelSample::new(200, 0, 0)));
    assert_eq!(second.get(0, 0), Some(PixelSample::new(0, 0, 200)));
    assert_eq!(third, first);

    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_replay_source_scales_down_to_config() {
    let dir = temp_dir("scale");
    write_png(&dir, "wide.png", 40, 20, [50, 150, 50]);

    let config = CameraConfig::default().with_width(10).with_height(10);
    let mut source = ReplaySource::open(&dir, &config).unwrap();
    let frame = source.recv().await.unwrap();
    assert_eq!(frame.width(), 10);
    assert_eq!(frame.height(), 5);

    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_replay_source_mirrors_front_camera() {
    let dir = temp_dir("mirror");
    ImageBuffer::from_fn(2, 1, |x, _| if x == 0 { Rgb([200u8, 0, 0]) } else { Rgb([0u8, 0, 200]) })
        .save(dir.join("pair.png"))
        .unwrap();

    let mut back = ReplaySource::open(&dir, &CameraConfig::default()).unwrap();
    let frame = back.recv().await.unwrap();
    assert_eq!(frame.get(0, 0), Some(PixelSample::new(200, 0, 0)));
    assert_eq!(frame.get(1, 0), Some(PixelSample::new(0, 0, 200)));

    let config = CameraConfig::default().with_facing(FacingMode::User);
    let mut front = ReplaySource::open(&dir, &config).unwrap();
    let frame = front.recv().await.unwrap();
    assert_eq!(frame.get(0, 0), Some(PixelSample::new(0, 0, 200)));
    assert_eq!(frame.get(1, 0), Some(PixelSample::new(200, 0, 0)));

    fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_replay_source_rejects_empty_directory() {
    let dir = temp_dir("empty");
    match ReplaySource::open(&dir, &CameraConfig::default()) {
        Err(CameraError::Device(msg)) => assert!(msg.contains("no images")),
        other => panic!("expected device error, got {:?}", other),
    }
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_replay_source_missing_directory_is_device_error() {
    let dir = std::env::temp_dir().join("medic-replay-does-not-exist");
    assert!(matches!(
        ReplaySource::open(&dir, &CameraConfig::default()),
        Err(CameraError::Device(_))
    ));
}

#[test]
fn test_camera_config_defaults_and_builders() {
    let config = CameraConfig::default();
    assert_eq!(config.width(), 1280);
    assert_eq!(config.height(), 720);
    assert_eq!(config.facing(), FacingMode::Environment);

    let config = config
        .with_facing(FacingMode::User)
        .with_width(640)
        .with_height(480);
    assert_eq!(config.facing(), FacingMode::User);
    assert_eq!((config.width(), config.height()), (640, 480));
}

#[test]
fn test_camera_error_display() {
    assert!(CameraError::Device("busy".into()).to_string().contains("device error: busy"));
    assert!(CameraError::Stream("eof".into()).to_string().contains("stream error"));
    assert!(CameraError::Channel("closed".into()).to_string().contains("closed"));

    let err: CameraError = medic_vision::FrameError::Empty.into();
    assert!(matches!(err, CameraError::Decode(_)));
}
