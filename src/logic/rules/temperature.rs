use super::{RiskRule, RiskThresholds};
use crate::models::{RiskCode, RiskContext, RiskRuleResult};

/// Air temperature rule - lethal cold, frost or heat stress
///
/// At most one outcome fires, checked in this order:
/// - FORCE_MAJEURE: cold-check temp at or below the crop's lethal minimum (+40)
/// - FROST: cold-check temp at or below 0°C (+25)
/// - HEAT: current temp above the crop's stress temperature (+15)
///
/// The cold checks use the forecast minimum when available, otherwise the
/// current temperature. Heat only looks at the current temperature.
pub struct TemperatureRule;

impl RiskRule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn name(&self) -> &'static str {
        "Lethal Cold / Frost / Heat"
    }

    fn evaluate(&self, ctx: &RiskContext, thresholds: &RiskThresholds) -> Option<RiskRuleResult> {
        let lethal_min = thresholds.lethal_min();

        if let Some(t) = ctx.cold_check_temp() {
            if t <= lethal_min {
                return Some(RiskRuleResult::new(
                    RiskCode::ForceMajeure,
                    format!(
                        "Lethal cold for the crop ({:.1}°C at or below lethal minimum {:.1}°C)",
                        t, lethal_min
                    ),
                ));
            }

            if t <= 0.0 {
                return Some(RiskRuleResult::new(
                    RiskCode::Frost,
                    format!("Frost risk ({:.1}°C at or below 0°C)", t),
                ));
            }
        }

        let temp = ctx.temp?;
        let stress_temp = thresholds.stress_temp();
        if temp > stress_temp {
            return Some(RiskRuleResult::new(
                RiskCode::Heat,
                format!("Heat stress ({:.1}°C above {:.1}°C)", temp, stress_temp),
            ));
        }

        None
    }
}
