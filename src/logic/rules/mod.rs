pub mod engine;
pub mod root_freeze;
pub mod soil_moisture;
pub mod temperature;
pub mod wind;

pub use engine::{RiskEvaluation, RiskScorer};

use crate::models::{CropThermalProfile, RiskContext, RiskRuleResult};

/// Lethal minimum applied when no crop threshold is supplied.
pub const DEFAULT_LETHAL_MIN_C: f64 = -4.0;

/// Crop thresholds consulted by the rules. Unset fields fall back to the
/// scorer defaults (lethal -4°C, heat stress 35°C).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RiskThresholds {
    pub lethal_min: Option<f64>,
    pub stress_temp: Option<f64>,
}

impl RiskThresholds {
    pub fn lethal_min(&self) -> f64 {
        self.lethal_min.unwrap_or(DEFAULT_LETHAL_MIN_C)
    }

    pub fn stress_temp(&self) -> f64 {
        self.stress_temp
            .unwrap_or(crate::models::DEFAULT_STRESS_TEMP_C)
    }
}

impl From<&CropThermalProfile> for RiskThresholds {
    fn from(profile: &CropThermalProfile) -> Self {
        Self {
            lethal_min: Some(profile.lethal_min),
            stress_temp: profile.stress_temp,
        }
    }
}

/// Trait for weighted risk rules
pub trait RiskRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return the triggered result if conditions are met
    fn evaluate(&self, ctx: &RiskContext, thresholds: &RiskThresholds) -> Option<RiskRuleResult>;
}
