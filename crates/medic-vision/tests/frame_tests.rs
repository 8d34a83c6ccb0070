use medic_vision::{FrameBuffer, FrameError, PixelSample};

#[test]
fn test_new_validates_length() {
    let err = FrameBuffer::new(2, 2, vec![PixelSample::default(); 3]).unwrap_err();
    assert_eq!(err, FrameError::ShapeMismatch { expected: 4, got: 3 });
}

#[test]
fn test_new_detects_overflow() {
    let err = FrameBuffer::new(usize::MAX, 2, Vec::new()).unwrap_err();
    assert_eq!(err, FrameError::ShapeOverflow);
}

#[test]
fn test_zero_sized_frame_is_allowed() {
    let frame = FrameBuffer::new(0, 480, Vec::new()).unwrap();
    assert!(frame.is_empty());
    assert_eq!(frame.len(), 0);
    assert_eq!(frame.height(), 480);
}

#[test]
fn test_from_rgb_row_major() {
    let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    let frame = FrameBuffer::from_rgb(2, 2, &data).unwrap();
    assert_eq!(frame.get(0, 0), Some(PixelSample::new(1, 2, 3)));
    assert_eq!(frame.get(1, 0), Some(PixelSample::new(4, 5, 6)));
    assert_eq!(frame.get(0, 1), Some(PixelSample::new(7, 8, 9)));
    assert_eq!(frame.get(2, 0), None);
    assert_eq!(frame.get(0, 2), None);
}

#[test]
fn test_from_rgba_drops_alpha() {
    let data = [200, 100, 100, 255, 10, 20, 30, 0];
    let frame = FrameBuffer::from_rgba(2, 1, &data).unwrap();
    assert_eq!(
        frame.pixels(),
        &[PixelSample::new(200, 100, 100), PixelSample::new(10, 20, 30)]
    );
}

#[test]
fn test_from_rgba_rejects_rgb_length() {
    let err = FrameBuffer::from_rgba(2, 1, &[0u8; 6]).unwrap_err();
    assert_eq!(err, FrameError::ShapeMismatch { expected: 8, got: 6 });
}

#[test]
fn test_filled() {
    let frame = FrameBuffer::filled(3, 2, PixelSample::from([9, 8, 7])).unwrap();
    assert_eq!(frame.len(), 6);
    assert!(frame.pixels().iter().all(|&p| p == PixelSample::new(9, 8, 7)));
}

#[test]
fn test_frame_error_display() {
    assert_eq!(
        FrameError::ShapeMismatch { expected: 4, got: 3 }.to_string(),
        "shape mismatch: expected 4 elements, got 3"
    );
    assert_eq!(FrameError::Empty.to_string(), "frame has no pixels");
    assert!(FrameError::Decode("bad".into()).to_string().contains("decode error"));
}
