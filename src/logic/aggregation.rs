use crate::config::AggregationConfig;
use crate::models::{
    AnalysisInput, FarmSnapshot, ForecastInput, SensorKind, SensorReading, SoilInput, WeatherInput,
};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Per-kind averages of the latest reading from each selected sensor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetryAverages {
    values: BTreeMap<SensorKind, f64>,
    sensor_counts: BTreeMap<SensorKind, usize>,
}

impl TelemetryAverages {
    pub fn get(&self, kind: SensorKind) -> Option<f64> {
        self.values.get(&kind).copied()
    }

    pub fn sensor_count(&self, kind: SensorKind) -> usize {
        self.sensor_counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Turns raw farm telemetry into the engine's input record.
pub struct TelemetryAggregator {
    config: AggregationConfig,
}

impl TelemetryAggregator {
    pub fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    fn is_selected(&self, reading: &SensorReading, as_of: Option<DateTime<Utc>>) -> bool {
        if !reading.value.is_finite() {
            tracing::warn!(
                device = %reading.device_id,
                kind = %reading.kind,
                "discarding non-finite sensor value"
            );
            return false;
        }

        if !self.config.devices.is_empty()
            && !self.config.devices.iter().any(|d| d == &reading.device_id)
        {
            return false;
        }

        match (self.config.max_age_minutes, as_of) {
            // An age too large to represent cannot exclude anything
            (Some(max_age), Some(as_of)) => match Duration::try_minutes(max_age) {
                Some(limit) => as_of.signed_duration_since(reading.timestamp) <= limit,
                None => true,
            },
            _ => true,
        }
    }

    /// Keeps the latest reading per (device, kind) after filtering, then
    /// averages across devices for each kind.
    pub fn aggregate(
        &self,
        readings: &[SensorReading],
        as_of: Option<DateTime<Utc>>,
    ) -> TelemetryAverages {
        let mut latest: BTreeMap<(&str, SensorKind), &SensorReading> = BTreeMap::new();

        for reading in readings.iter().filter(|r| self.is_selected(r, as_of)) {
            latest
                .entry((reading.device_id.as_str(), reading.kind))
                .and_modify(|current| {
                    if reading.timestamp > current.timestamp {
                        *current = reading;
                    }
                })
                .or_insert(reading);
        }

        let mut sums: BTreeMap<SensorKind, (f64, usize)> = BTreeMap::new();
        for reading in latest.values() {
            let entry = sums.entry(reading.kind).or_insert((0.0, 0));
            entry.0 += reading.value;
            entry.1 += 1;
        }

        TelemetryAverages {
            values: sums
                .iter()
                .map(|(kind, (sum, count))| (*kind, sum / *count as f64))
                .collect(),
            sensor_counts: sums
                .iter()
                .map(|(kind, (_, count))| (*kind, *count))
                .collect(),
        }
    }

    /// Builds an analysis input, substituting the configured fallback air
    /// temperature when no air sensor reported.
    pub fn build_input(
        &self,
        crop: Option<String>,
        averages: &TelemetryAverages,
        forecast: ForecastInput,
    ) -> AnalysisInput {
        let temp = averages.get(SensorKind::AirTemp).or_else(|| {
            tracing::warn!(
                fallback = self.config.fallback_temp,
                "no air temperature telemetry, using fallback"
            );
            Some(self.config.fallback_temp)
        });

        AnalysisInput {
            crop,
            weather: Some(WeatherInput {
                temp,
                hum: averages.get(SensorKind::Humidity),
                wind: averages.get(SensorKind::Wind),
                rain: averages.get(SensorKind::Rain),
            }),
            forecast,
            soil: SoilInput {
                temp: averages.get(SensorKind::SoilTemp),
                moisture: averages.get(SensorKind::SoilMoisture),
            },
        }
    }

    pub fn from_snapshot(&self, snapshot: &FarmSnapshot, default_crop: Option<&str>) -> AnalysisInput {
        let averages = self.aggregate(&snapshot.readings, snapshot.as_of);
        tracing::debug!(
            farm = snapshot.farm.as_deref().unwrap_or("unknown"),
            readings = snapshot.readings.len(),
            kinds = averages.values.len(),
            air_sensors = averages.sensor_count(SensorKind::AirTemp),
            "telemetry aggregated"
        );

        let crop = snapshot
            .crop
            .clone()
            .or_else(|| default_crop.map(str::to_string));

        self.build_input(crop, &averages, snapshot.forecast.clone())
    }
}
