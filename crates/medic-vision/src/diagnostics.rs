//! Canned image "diagnostics" for the upload screen.
//!
//! There is no model behind this: each specialization maps to a fixed report,
//! returned after a short artificial delay so the UI can show its progress
//! state.

use crate::{FrameBuffer, FrameError};
use medic_base::log;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialization {
    #[default]
    General,
    Dermatology,
    Radiology,
    Wounds,
    Ophthalmology,
}

impl Specialization {
    pub const ALL: [Specialization; 5] = [
        Specialization::General,
        Specialization::Dermatology,
        Specialization::Radiology,
        Specialization::Wounds,
        Specialization::Ophthalmology,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Specialization::General => "General Medicine",
            Specialization::Dermatology => "Dermatology",
            Specialization::Radiology => "Radiology",
            Specialization::Wounds => "Wound Care",
            Specialization::Ophthalmology => "Ophthalmology",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub condition: &'static str,
    /// Percent, 0-100.
    pub confidence: u8,
    pub severity: Severity,
    pub recommendations: &'static [&'static str],
    pub referral: bool,
}

static GENERAL: DiagnosticReport = DiagnosticReport {
    condition: "Possible Cellulitis",
    confidence: 78,
    severity: Severity::High,
    recommendations: &[
        "Start empirical antibiotic therapy",
        "Monitor for systemic symptoms",
        "Elevate affected limb",
        "Consider hospitalization if severe",
    ],
    referral: true,
};

static DERMATOLOGY: DiagnosticReport = DiagnosticReport {
    condition: "Probable Contact Dermatitis",
    confidence: 87,
    severity: Severity::Medium,
    recommendations: &[
        "Apply topical corticosteroid (mild potency)",
        "Avoid known allergens and irritants",
        "Keep area clean and dry",
        "Monitor for signs of infection",
    ],
    referral: false,
};

static RADIOLOGY: DiagnosticReport = DiagnosticReport {
    condition: "Normal Chest X-ray",
    confidence: 92,
    severity: Severity::Low,
    recommendations: &[
        "No acute pathology detected",
        "Continue routine monitoring",
        "Maintain healthy lifestyle",
        "Follow up if symptoms persist",
    ],
    referral: false,
};

static WOUNDS: DiagnosticReport = DiagnosticReport {
    condition: "Stage 2 Pressure Ulcer",
    confidence: 89,
    severity: Severity::High,
    recommendations: &[
        "Immediate pressure relief",
        "Wound cleaning with saline",
        "Apply appropriate dressing",
        "Nutritional support required",
    ],
    referral: true,
};

/// The canned report for a specialization. Specializations without their own
/// report get the general one.
pub fn canned_report(specialization: Specialization) -> &'static DiagnosticReport {
    match specialization {
        Specialization::Dermatology => &DERMATOLOGY,
        Specialization::Radiology => &RADIOLOGY,
        Specialization::Wounds => &WOUNDS,
        Specialization::General | Specialization::Ophthalmology => &GENERAL,
    }
}

#[derive(Debug, Clone)]
pub struct DiagnosticsConfig {
    /// Artificial analysis time.
    pub delay: Duration,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(3),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockDiagnostics {
    config: DiagnosticsConfig,
}

impl MockDiagnostics {
    pub fn new(config: DiagnosticsConfig) -> Self {
        Self { config }
    }

    /// "Analyze" an uploaded image.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::Empty` when no image data was supplied.
    pub async fn analyze(
        &self,
        image: &FrameBuffer,
        specialization: Specialization,
    ) -> Result<DiagnosticReport, FrameError> {
        if image.is_empty() {
            return Err(FrameError::Empty);
        }
        log::info!(
            "analyzing {}x{} image for {}",
            image.width(),
            image.height(),
            specialization.display_name()
        );
        tokio::time::sleep(self.config.delay).await;
        Ok(canned_report(specialization).clone())
    }
}
