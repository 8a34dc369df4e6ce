use crate::models::{GrowthState, RiskCode, RiskLevel, RiskRuleResult};

pub const IRRIGATE: &str = "Irrigate: soil moisture is critically low";
pub const FROST_PROTECTION: &str =
    "Prepare frost protection: covers, anti-frost irrigation or orchard heaters";
pub const STOP_IRRIGATION: &str = "Stop irrigation and check field drainage";
pub const FERTILIZE: &str = "Good window for fertilization: the crop is actively growing";
pub const HOLD_FERTILIZER: &str = "Hold off on fertilization: growth is stalled";

/// Recommended action per risk code. Codes without an entry contribute nothing.
const ACTIONS: &[(RiskCode, &str)] = &[
    (RiskCode::Drought, IRRIGATE),
    (RiskCode::Frost, FROST_PROTECTION),
    (RiskCode::ForceMajeure, FROST_PROTECTION),
    (RiskCode::RootRot, STOP_IRRIGATION),
];

pub fn action_for(code: RiskCode) -> Option<&'static str> {
    ACTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, action)| *action)
}

/// Maps reasons to actions, keeping the first occurrence of each action.
pub fn actions_for(reasons: &[RiskRuleResult]) -> Vec<String> {
    let mut actions: Vec<String> = Vec::new();
    for action in reasons.iter().filter_map(|r| action_for(r.code)) {
        if !actions.iter().any(|a| a == action) {
            actions.push(action.to_string());
        }
    }
    actions
}

/// Feeding advice, only given while overall risk is low or medium.
pub fn fertilization_advice(level: RiskLevel, growth: GrowthState) -> Option<&'static str> {
    if level.is_elevated() {
        return None;
    }

    match growth {
        GrowthState::Normal | GrowthState::Fast => Some(FERTILIZE),
        GrowthState::Stalled => Some(HOLD_FERTILIZER),
        GrowthState::Slow => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(code: RiskCode) -> RiskRuleResult {
        RiskRuleResult::new(code, code.as_str())
    }

    #[test]
    fn mapped_codes() {
        assert_eq!(action_for(RiskCode::Drought), Some(IRRIGATE));
        assert_eq!(action_for(RiskCode::Frost), Some(FROST_PROTECTION));
        assert_eq!(action_for(RiskCode::ForceMajeure), Some(FROST_PROTECTION));
        assert_eq!(action_for(RiskCode::RootRot), Some(STOP_IRRIGATION));
    }

    #[test]
    fn unmapped_codes_add_nothing() {
        assert_eq!(action_for(RiskCode::Wind), None);
        assert_eq!(action_for(RiskCode::Heat), None);
        assert_eq!(action_for(RiskCode::RootFreeze), None);
        assert!(actions_for(&[reason(RiskCode::Wind), reason(RiskCode::RootFreeze)]).is_empty());
    }

    #[test]
    fn identical_actions_collapse() {
        let actions = actions_for(&[
            reason(RiskCode::Frost),
            reason(RiskCode::ForceMajeure),
            reason(RiskCode::Drought),
        ]);
        assert_eq!(actions, vec![FROST_PROTECTION.to_string(), IRRIGATE.to_string()]);
    }

    #[test]
    fn fertilization_follows_growth_when_risk_is_calm() {
        assert_eq!(
            fertilization_advice(RiskLevel::Low, GrowthState::Normal),
            Some(FERTILIZE)
        );
        assert_eq!(
            fertilization_advice(RiskLevel::Medium, GrowthState::Fast),
            Some(FERTILIZE)
        );
        assert_eq!(
            fertilization_advice(RiskLevel::Low, GrowthState::Stalled),
            Some(HOLD_FERTILIZER)
        );
        assert_eq!(fertilization_advice(RiskLevel::Low, GrowthState::Slow), None);
    }

    #[test]
    fn no_fertilization_advice_under_elevated_risk() {
        for growth in [
            GrowthState::Stalled,
            GrowthState::Slow,
            GrowthState::Normal,
            GrowthState::Fast,
        ] {
            assert_eq!(fertilization_advice(RiskLevel::High, growth), None);
            assert_eq!(fertilization_advice(RiskLevel::Critical, growth), None);
        }
    }
}
