pub mod actions;
pub mod aggregation;
pub mod expert;
pub mod phenology;
pub mod rules;
pub mod weather_risk;

pub use aggregation::TelemetryAggregator;
pub use expert::ExpertEngine;
pub use rules::RiskScorer;
