//! Frame colour analysis for the medic guidance tools.
//!
//! The heart of this crate is [`FrameColorClassifier`], a pure function over
//! one captured frame that flags at most one colour-signature condition. The
//! rest is what callers need around it: [`FrameBuffer`] construction and
//! decoding, the [`FrameSource`] capture capability with its
//! [`CameraConfig`], and the canned [`MockDiagnostics`] used by the image
//! upload screen.

pub mod classifier;
pub mod config;
pub mod decode;
pub mod diagnostics;
pub mod error;
pub mod frame;
pub mod pixel;
pub mod rule;
pub mod source;

pub use classifier::{ClassificationResult, Condition, FrameColorClassifier, RuleCoverage};
pub use config::{CameraConfig, FacingMode};
pub use decode::decode_frame;
pub use diagnostics::{
    DiagnosticReport, DiagnosticsConfig, MockDiagnostics, Severity, Specialization,
};
pub use error::{CameraError, FrameError};
pub use frame::FrameBuffer;
pub use pixel::PixelSample;
pub use rule::{ColorRule, RuleSet};
pub use source::{FrameSource, ReplaySource};
