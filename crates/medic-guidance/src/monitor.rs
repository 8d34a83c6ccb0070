use crate::{GuidanceError, MonitorConfig, RecordingState};
use medic_base::log;
use medic_speech::{SpeechSpeaker, Utterance};
use medic_vision::{CameraError, ClassificationResult, FrameColorClassifier, FrameSource};
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};

/// Samples a frame source on a fixed interval while recording and reports
/// what the classifier sees.
///
/// Each tick runs capture, classification and speech to completion before
/// the next tick is considered, and late ticks are skipped rather than
/// queued, so there is never more than one analysis in flight.
pub struct GuidanceMonitor<F, S> {
    source: F,
    speaker: S,
    classifier: FrameColorClassifier,
    config: MonitorConfig,
}

impl<F: FrameSource, S: SpeechSpeaker> GuidanceMonitor<F, S> {
    /// # Errors
    ///
    /// Returns `GuidanceError::Config` if `config.interval` is zero.
    pub fn new(source: F, speaker: S, config: MonitorConfig) -> Result<Self, GuidanceError> {
        if config.interval.is_zero() {
            return Err(GuidanceError::Config(
                "analysis interval must be non-zero".to_string(),
            ));
        }
        Ok(Self {
            source,
            speaker,
            classifier: FrameColorClassifier::new(config.rule_set),
            config,
        })
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn into_parts(self) -> (F, S) {
        (self.source, self.speaker)
    }

    /// Capture one frame, classify it and speak the advisory of a detection.
    ///
    /// # Errors
    ///
    /// Returns `GuidanceError::Camera` if no frame could be captured. Speech
    /// failures are logged, not returned.
    pub async fn analyze_once(&mut self) -> Result<ClassificationResult, GuidanceError> {
        let frame = self.source.recv().await?;
        let result = self.classifier.classify(&frame);

        match result.condition() {
            Some(condition) => {
                log::info!("detected {}", condition.label);
                if self.config.speak_detections {
                    let utterance = Utterance::new(condition.advisory);
                    if let Err(error) = self.speaker.speak(&utterance).await {
                        log::warn!("could not speak advisory: {}", error);
                    }
                }
            }
            None => log::debug!(
                "no condition in {}x{} frame",
                frame.width(),
                frame.height()
            ),
        }
        Ok(result)
    }

    /// Analyze every `interval` while `state` reads `Recording`, publishing
    /// each result on `results`.
    ///
    /// Returns `Ok(())` when the state sender or the results receiver is
    /// dropped. Frames that fail to stream or decode are skipped.
    ///
    /// # Errors
    ///
    /// Returns `GuidanceError::Camera` for device or channel failures of the
    /// frame source.
    pub async fn run(
        &mut self,
        mut state: watch::Receiver<RecordingState>,
        results: mpsc::Sender<ClassificationResult>,
    ) -> Result<(), GuidanceError> {
        let period = self.config.interval;
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        log::info!("guidance monitor started, analyzing every {:?}", period);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if !state.borrow().is_analyzing() {
                        continue;
                    }
                    let result = match self.analyze_once().await {
                        Ok(result) => result,
                        Err(GuidanceError::Camera(CameraError::Stream(msg))) => {
                            log::warn!("skipping frame: {}", msg);
                            continue;
                        }
                        Err(GuidanceError::Camera(CameraError::Decode(err))) => {
                            log::warn!("skipping undecodable frame: {}", err);
                            continue;
                        }
                        Err(error) => return Err(error),
                    };
                    if results.send(result).await.is_err() {
                        log::info!("result receiver closed, stopping monitor");
                        return Ok(());
                    }
                }
                changed = state.changed() => {
                    if changed.is_err() {
                        log::info!("recording controls closed, stopping monitor");
                        return Ok(());
                    }
                    let current = *state.borrow_and_update();
                    log::info!("recording state is now {:?}", current);
                    match current {
                        RecordingState::Recording => ticker.reset(),
                        RecordingState::Idle => self.speaker.cancel(),
                        RecordingState::Paused => {}
                    }
                }
            }
        }
    }
}
