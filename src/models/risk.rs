use serde::{Deserialize, Serialize};

/// Normalized signals evaluated by the risk rules. Every field is optional and
/// an absent field never triggers its rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskContext {
    pub temp: Option<f64>,
    /// Preferred over `temp` for the cold checks when present.
    pub min_temp_forecast: Option<f64>,
    pub soil_temp: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub wind: Option<f64>,
    pub rain: Option<f64>,
}

impl RiskContext {
    /// Temperature used by the lethal/frost checks.
    pub fn cold_check_temp(&self) -> Option<f64> {
        self.min_temp_forecast.or(self.temp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCode {
    ForceMajeure,
    Frost,
    Heat,
    Drought,
    RootRot,
    RootFreeze,
    Wind,
}

impl RiskCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCode::ForceMajeure => "FORCE_MAJEURE",
            RiskCode::Frost => "FROST",
            RiskCode::Heat => "HEAT",
            RiskCode::Drought => "DROUGHT",
            RiskCode::RootRot => "ROOT_ROT",
            RiskCode::RootFreeze => "ROOT_FREEZE",
            RiskCode::Wind => "WIND",
        }
    }

    /// Score contribution when the rule fires.
    pub fn points(&self) -> u32 {
        match self {
            RiskCode::ForceMajeure => 40,
            RiskCode::Frost => 25,
            RiskCode::Heat => 15,
            RiskCode::Drought => 30,
            RiskCode::RootRot => 20,
            RiskCode::RootFreeze => 30,
            RiskCode::Wind => 20,
        }
    }
}

impl std::fmt::Display for RiskCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRuleResult {
    pub code: RiskCode,
    pub message: String,
    pub points: u32,
}

impl RiskRuleResult {
    pub fn new(code: RiskCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            points: code.points(),
        }
    }

    /// Message text before any parenthetical detail.
    pub fn lead_clause(&self) -> &str {
        self.message
            .split('(')
            .next()
            .unwrap_or(self.message.as_str())
            .trim_end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Lower bounds are inclusive: 20 medium, 40 high, 70 critical.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 70 => RiskLevel::Critical,
            s if s >= 40 => RiskLevel::High,
            s if s >= 20 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries_are_inclusive_low() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(19), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(20), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(39), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(40), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(u32::MAX), RiskLevel::Critical);
    }

    #[test]
    fn level_is_monotonic() {
        let mut previous = RiskLevel::from_score(0);
        for score in 1..=200 {
            let level = RiskLevel::from_score(score);
            assert!(level >= previous, "level dropped at score {}", score);
            previous = level;
        }
    }

    #[test]
    fn cold_check_prefers_forecast_minimum() {
        let ctx = RiskContext {
            temp: Some(6.0),
            min_temp_forecast: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(ctx.cold_check_temp(), Some(-1.0));

        let ctx = RiskContext {
            temp: Some(6.0),
            ..Default::default()
        };
        assert_eq!(ctx.cold_check_temp(), Some(6.0));
        assert_eq!(RiskContext::default().cold_check_temp(), None);
    }

    #[test]
    fn lead_clause_strips_parenthetical() {
        let reason = RiskRuleResult::new(RiskCode::Frost, "Frost risk (-1.0°C at or below 0°C)");
        assert_eq!(reason.lead_clause(), "Frost risk");

        let reason = RiskRuleResult::new(RiskCode::Wind, "Damaging wind");
        assert_eq!(reason.lead_clause(), "Damaging wind");
    }

    #[test]
    fn code_serializes_as_symbol() {
        let json = serde_json::to_string(&RiskCode::ForceMajeure).unwrap();
        assert_eq!(json, "\"FORCE_MAJEURE\"");
        for code in [RiskCode::RootFreeze, RiskCode::RootRot, RiskCode::Drought] {
            assert_eq!(
                serde_json::to_string(&code).unwrap(),
                format!("\"{}\"", code.as_str())
            );
        }
    }
}
