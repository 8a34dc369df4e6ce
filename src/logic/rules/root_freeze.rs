use super::{RiskRule, RiskThresholds};
use crate::models::{RiskCode, RiskContext, RiskRuleResult};

/// Root freeze cross-check - frozen soil holding a lot of water
///
/// Fires when soil temp <= 0°C and soil moisture > 60% (+30). Independent of
/// the air temperature and moisture-band outcomes.
pub struct RootFreezeRule;

impl RiskRule for RootFreezeRule {
    fn id(&self) -> &'static str {
        "root_freeze"
    }

    fn name(&self) -> &'static str {
        "Root Zone Freeze"
    }

    fn evaluate(&self, ctx: &RiskContext, _thresholds: &RiskThresholds) -> Option<RiskRuleResult> {
        let soil_temp = ctx.soil_temp?;
        let moisture = ctx.soil_moisture?;

        if soil_temp <= 0.0 && moisture > 60.0 {
            Some(RiskRuleResult::new(
                RiskCode::RootFreeze,
                format!(
                    "Root zone freezing (soil {:.1}°C with moisture {:.0}%)",
                    soil_temp, moisture
                ),
            ))
        } else {
            None
        }
    }
}
