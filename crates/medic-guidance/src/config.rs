use medic_vision::RuleSet;
use std::time::Duration;

/// Monitor settings.
///
/// # Examples
///
/// ```
/// use medic_guidance::MonitorConfig;
/// use std::time::Duration;
///
/// let config = MonitorConfig {
///     interval: Duration::from_secs(5),
///     ..Default::default()
/// };
/// assert!(config.speak_detections);
/// ```
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Time between analyses while recording.
    pub interval: Duration,
    pub rule_set: RuleSet,
    /// Read the advisory of each detection aloud.
    pub speak_detections: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            rule_set: RuleSet::Extended,
            speak_detections: true,
        }
    }
}
