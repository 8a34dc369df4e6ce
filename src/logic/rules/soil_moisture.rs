use super::{RiskRule, RiskThresholds};
use crate::models::{RiskCode, RiskContext, RiskRuleResult};

const DROUGHT_BELOW: f64 = 20.0;
const WATERLOGGED_ABOVE: f64 = 85.0;

/// Soil moisture rule - drought or waterlogging
///
/// - DROUGHT: moisture below 20% (+30)
/// - ROOT_ROT: moisture above 85% (+20)
pub struct SoilMoistureRule;

impl RiskRule for SoilMoistureRule {
    fn id(&self) -> &'static str {
        "soil_moisture"
    }

    fn name(&self) -> &'static str {
        "Drought / Root Rot"
    }

    fn evaluate(&self, ctx: &RiskContext, _thresholds: &RiskThresholds) -> Option<RiskRuleResult> {
        let moisture = ctx.soil_moisture?;

        if moisture < DROUGHT_BELOW {
            Some(RiskRuleResult::new(
                RiskCode::Drought,
                format!("Drought stress (soil moisture {:.0}% below 20%)", moisture),
            ))
        } else if moisture > WATERLOGGED_ABOVE {
            Some(RiskRuleResult::new(
                RiskCode::RootRot,
                format!(
                    "Waterlogging and root rot risk (soil moisture {:.0}% above 85%)",
                    moisture
                ),
            ))
        } else {
            None
        }
    }
}
