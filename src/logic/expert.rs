use super::actions;
use super::phenology;
use super::rules::{RiskScorer, RiskThresholds};
use crate::error::{AdvisorError, Result};
use crate::models::{
    Alert, AnalysisDetails, AnalysisInput, AnalysisResult, Crop, GrowthState, ProfileOverrides,
    RiskContext, RiskLevel, RiskRuleResult,
};

/// Combines phenology and risk scoring into one advisory payload.
///
/// Holds only immutable rule tables, so a single engine can serve concurrent
/// callers.
pub struct ExpertEngine {
    scorer: RiskScorer,
}

impl ExpertEngine {
    pub fn new() -> Self {
        Self {
            scorer: RiskScorer::new(),
        }
    }

    pub fn analyze(
        &self,
        input: &AnalysisInput,
        overrides: &ProfileOverrides,
    ) -> Result<AnalysisResult> {
        let (weather, temp) = input.validate()?;
        if let Some(field) = overrides.first_non_finite() {
            return Err(AdvisorError::Validation(format!(
                "crop override {} must be a finite number",
                field
            )));
        }

        let crop_name = input.crop.as_deref().unwrap_or("Generic");
        let crop = Crop::resolve(crop_name);
        if crop == Crop::Generic && !crop_name.eq_ignore_ascii_case("generic") {
            tracing::debug!(crop = crop_name, "unknown crop, using Generic profile");
        }
        if !overrides.is_empty() {
            tracing::debug!(crop = %crop, "applying per-farm threshold overrides");
        }
        let profile = phenology::crop_config(crop).merged(overrides);

        let t_min = input.forecast.min_temp.unwrap_or(temp);
        let gdd = match overrides.base_temp {
            Some(base_temp) => phenology::gdd_with_base(temp, t_min, base_temp),
            None => phenology::calculate_gdd(temp, t_min, crop),
        };
        let growth_state = phenology::growth_status(gdd);

        let ctx = RiskContext {
            temp: Some(temp),
            min_temp_forecast: input.forecast.min_temp,
            soil_temp: input.soil.temp,
            soil_moisture: input.soil.moisture,
            wind: weather.wind,
            rain: weather.rain,
        };
        let evaluation = self.scorer.evaluate(&ctx, &RiskThresholds::from(&profile));
        let risk_level = evaluation.level();

        let alerts = evaluation.reasons.iter().map(Alert::from_reason).collect();

        let mut actions = actions::actions_for(&evaluation.reasons);
        if let Some(advice) = actions::fertilization_advice(risk_level, growth_state) {
            actions.push(advice.to_string());
        }

        let summary = compose_summary(
            gdd,
            growth_state,
            evaluation.score,
            risk_level,
            &evaluation.reasons,
        );

        tracing::debug!(
            crop = %crop,
            gdd,
            score = evaluation.score,
            level = %risk_level,
            "analysis complete"
        );

        Ok(AnalysisResult {
            summary,
            risk_level,
            risk_score: evaluation.score,
            alerts,
            actions,
            details: AnalysisDetails {
                gdd,
                growth_state,
                breakdown: evaluation.reasons,
                chilling_hours: phenology::calculate_chilling_hours(&input.forecast.hourly_temps),
            },
        })
    }
}

impl Default for ExpertEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn compose_summary(
    gdd: f64,
    growth: GrowthState,
    score: u32,
    level: RiskLevel,
    reasons: &[RiskRuleResult],
) -> String {
    let growth_clause = format!("Growth is {} (GDD {:.1}).", growth, gdd);

    if level.is_elevated() {
        let causes: Vec<&str> = reasons.iter().map(|r| r.lead_clause()).collect();
        format!(
            "{} Risk score {} ({}): {}.",
            growth_clause,
            score,
            level,
            causes.join(", ")
        )
    } else {
        format!(
            "{} Risk score {} ({}), conditions stable.",
            growth_clause, score, level
        )
    }
}
