use super::{
    root_freeze::RootFreezeRule, soil_moisture::SoilMoistureRule, temperature::TemperatureRule,
    wind::WindRule, RiskRule, RiskThresholds,
};
use crate::models::{RiskContext, RiskLevel, RiskRuleResult};

/// Outcome of one scoring pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskEvaluation {
    pub score: u32,
    pub reasons: Vec<RiskRuleResult>,
}

impl RiskEvaluation {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.score)
    }
}

pub struct RiskScorer {
    rules: Vec<Box<dyn RiskRule>>,
}

impl RiskScorer {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn RiskRule>> = vec![
            Box::new(TemperatureRule),
            Box::new(SoilMoistureRule),
            Box::new(RootFreezeRule),
            Box::new(WindRule),
        ];

        Self { rules }
    }

    /// Runs every rule in order; the score is the sum of the fired rules' points.
    pub fn evaluate(&self, ctx: &RiskContext, thresholds: &RiskThresholds) -> RiskEvaluation {
        let reasons: Vec<RiskRuleResult> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let result = rule.evaluate(ctx, thresholds);
                if let Some(r) = &result {
                    tracing::debug!(rule = rule.id(), code = %r.code, points = r.points, "risk rule fired");
                }
                result
            })
            .collect();

        let score = reasons.iter().map(|r| r.points).sum();

        RiskEvaluation { score, reasons }
    }

    pub fn evaluate_rule(
        &self,
        rule_id: &str,
        ctx: &RiskContext,
        thresholds: &RiskThresholds,
    ) -> Option<RiskRuleResult> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(ctx, thresholds))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new()
    }
}
