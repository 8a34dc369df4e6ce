use super::{RiskRule, RiskThresholds};
use crate::models::{RiskCode, RiskContext, RiskRuleResult};

const DAMAGING_WIND_KMH: f64 = 50.0;

/// Wind rule - fires above 50 km/h (+20)
pub struct WindRule;

impl RiskRule for WindRule {
    fn id(&self) -> &'static str {
        "wind"
    }

    fn name(&self) -> &'static str {
        "Damaging Wind"
    }

    fn evaluate(&self, ctx: &RiskContext, _thresholds: &RiskThresholds) -> Option<RiskRuleResult> {
        let wind = ctx.wind?;
        if wind <= DAMAGING_WIND_KMH {
            return None;
        }

        Some(RiskRuleResult::new(
            RiskCode::Wind,
            format!("Damaging wind ({:.0} km/h above 50 km/h)", wind),
        ))
    }
}
