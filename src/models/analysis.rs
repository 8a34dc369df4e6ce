use super::risk::{RiskLevel, RiskRuleResult};
use serde::{Deserialize, Serialize};

/// Growth pace derived from the day's growing-degree-days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthState {
    Stalled,
    Slow,
    Normal,
    Fast,
}

impl GrowthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthState::Stalled => "stalled",
            GrowthState::Slow => "slow",
            GrowthState::Normal => "normal",
            GrowthState::Fast => "fast",
        }
    }
}

impl std::fmt::Display for GrowthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl AlertSeverity {
    pub fn from_points(points: u32) -> Self {
        if points >= 30 {
            AlertSeverity::Critical
        } else {
            AlertSeverity::Warning
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AlertSeverity::Warning => "⚠",
            AlertSeverity::Critical => "!",
        }
    }
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    pub fn from_reason(reason: &RiskRuleResult) -> Self {
        Self {
            severity: AlertSeverity::from_points(reason.points),
            message: format!("{} (impact: +{})", reason.message, reason.points),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub gdd: f64,
    pub growth_state: GrowthState,
    pub breakdown: Vec<RiskRuleResult>,
    /// Hours below 7.2°C in the supplied hourly forecast.
    pub chilling_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub alerts: Vec<Alert>,
    pub actions: Vec<String>,
    pub details: AnalysisDetails,
}

impl AnalysisResult {
    pub fn has_critical_alert(&self) -> bool {
        self.alerts
            .iter()
            .any(|a| a.severity == AlertSeverity::Critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskCode;

    #[test]
    fn severity_threshold_at_30_points() {
        assert_eq!(AlertSeverity::from_points(15), AlertSeverity::Warning);
        assert_eq!(AlertSeverity::from_points(29), AlertSeverity::Warning);
        assert_eq!(AlertSeverity::from_points(30), AlertSeverity::Critical);
        assert_eq!(AlertSeverity::from_points(40), AlertSeverity::Critical);
    }

    #[test]
    fn alert_message_carries_impact() {
        let reason = RiskRuleResult::new(RiskCode::Wind, "Damaging wind (62 km/h above 50 km/h)");
        let alert = Alert::from_reason(&reason);
        assert_eq!(alert.severity, AlertSeverity::Warning);
        assert_eq!(
            alert.message,
            "Damaging wind (62 km/h above 50 km/h) (impact: +20)"
        );
    }

    #[test]
    fn growth_state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&GrowthState::Stalled).unwrap(),
            "\"stalled\""
        );
        assert_eq!(GrowthState::Fast.to_string(), "fast");
    }
}
