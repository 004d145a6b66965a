use serde::{Deserialize, Serialize};

use crate::domain::product::{BodyType, SkinTone};

/// Simulated body measurements in centimeters. Values are synthesized from
/// per-build baselines plus bounded jitter; no image data is ever inspected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    pub shoulders: f64,
    pub chest: f64,
    pub waist: f64,
    pub hips: f64,
    pub height: f64,
}

/// Output of the simulated analysis step attached to every style report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub measurements: BodyMeasurements,
    pub body_type: BodyType,
    pub skin_tone: SkinTone,
    pub detected_gender: String,
    pub estimated_age: u8,
    pub confidence: f64,
}
