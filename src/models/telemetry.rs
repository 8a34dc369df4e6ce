use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a sensor channel measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    AirTemp,
    Humidity,
    SoilTemp,
    SoilMoisture,
    Wind,
    Rain,
}

impl SensorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::AirTemp => "Air Temperature",
            SensorKind::Humidity => "Humidity",
            SensorKind::SoilTemp => "Soil Temperature",
            SensorKind::SoilMoisture => "Soil Moisture",
            SensorKind::Wind => "Wind",
            SensorKind::Rain => "Rain",
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub device_id: String,
    pub kind: SensorKind,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

impl SensorReading {
    pub fn new(
        device_id: impl Into<String>,
        kind: SensorKind,
        value: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            kind,
            value,
            timestamp,
        }
    }
}

/// Latest telemetry for one farm plus the forecast, as handed over by the
/// collection layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmSnapshot {
    #[serde(default)]
    pub farm: Option<String>,
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub readings: Vec<SensorReading>,
    #[serde(default)]
    pub forecast: super::ForecastInput,
    /// Instant the snapshot was taken; reading age is measured against it.
    pub as_of: Option<DateTime<Utc>>,
}

impl FarmSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snapshot() {
        let json = r#"{
            "farm": "North Orchard",
            "as_of": "2025-04-12T06:00:00Z",
            "readings": [
                {"device_id": "node-3", "kind": "soil_moisture", "value": 72.0,
                 "timestamp": "2025-04-12T05:45:00Z"}
            ],
            "forecast": {"min_temp": -1.5}
        }"#;
        let snapshot = FarmSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.readings.len(), 1);
        assert_eq!(snapshot.readings[0].kind, SensorKind::SoilMoisture);
        assert_eq!(snapshot.forecast.min_temp, Some(-1.5));
        assert!(snapshot.crop.is_none());
        assert!(snapshot.as_of.is_some());
    }

    #[test]
    fn unknown_sensor_kind_is_rejected() {
        let json = r#"{"readings": [{"device_id": "x", "kind": "lux", "value": 1.0,
            "timestamp": "2025-04-12T05:45:00Z"}]}"#;
        assert!(FarmSnapshot::from_json(json).is_err());
    }
}
