use crate::{ColorRule, FrameBuffer, RuleSet};
use medic_base::log;
use serde::Serialize;

/// The condition reported for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub label: &'static str,
    pub advisory: &'static str,
}

/// Outcome of classifying one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClassificationResult {
    NoCondition,
    Detected(Condition),
}

impl ClassificationResult {
    pub fn condition(&self) -> Option<&Condition> {
        match self {
            ClassificationResult::NoCondition => None,
            ClassificationResult::Detected(condition) => Some(condition),
        }
    }

    pub fn is_detected(&self) -> bool {
        self.condition().is_some()
    }
}

/// Share of a frame matched by one rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleCoverage {
    pub rule: &'static str,
    pub percent: f64,
    pub threshold: f64,
}

impl RuleCoverage {
    pub fn exceeded(&self) -> bool {
        self.percent > self.threshold
    }
}

/// Flags colour-signature conditions in a frame.
///
/// Rules are checked in priority order and the first one whose share of the
/// frame is strictly above its threshold wins, even if a later rule covers
/// more of the frame. The classifier holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameColorClassifier {
    rule_set: RuleSet,
}

impl FrameColorClassifier {
    pub fn new(rule_set: RuleSet) -> Self {
        Self { rule_set }
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    pub fn rules(&self) -> &'static [ColorRule] {
        self.rule_set.rules()
    }

    /// Classify a frame. An empty frame never matches.
    pub fn classify(&self, frame: &FrameBuffer) -> ClassificationResult {
        let winner = self
            .coverage(frame)
            .into_iter()
            .zip(self.rules())
            .find(|(coverage, _)| coverage.exceeded());

        match winner {
            Some((coverage, rule)) => {
                log::debug!(
                    "{} covers {:.1}% of {}x{} frame (threshold {}%)",
                    rule.name,
                    coverage.percent,
                    frame.width(),
                    frame.height(),
                    rule.threshold
                );
                ClassificationResult::Detected(Condition {
                    label: rule.label,
                    advisory: rule.advisory,
                })
            }
            None => ClassificationResult::NoCondition,
        }
    }

    /// Percentage of the frame matched by each rule, in priority order.
    /// All percentages are zero for an empty frame.
    pub fn coverage(&self, frame: &FrameBuffer) -> Vec<RuleCoverage> {
        let rules = self.rules();
        let mut counts = vec![0usize; rules.len()];
        for &pixel in frame.pixels() {
            for (count, rule) in counts.iter_mut().zip(rules) {
                if rule.matches(pixel) {
                    *count += 1;
                }
            }
        }

        let total = frame.len();
        rules
            .iter()
            .zip(counts)
            .map(|(rule, count)| RuleCoverage {
                rule: rule.name,
                percent: if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                },
                threshold: rule.threshold,
            })
            .collect()
    }
}
