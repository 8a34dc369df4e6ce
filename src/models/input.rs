use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

/// Current conditions at the farm, averaged across the selected sensors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherInput {
    /// Air temperature (°C)
    pub temp: Option<f64>,
    /// Relative humidity (%)
    #[serde(default)]
    pub hum: Option<f64>,
    /// Wind speed (km/h)
    #[serde(default)]
    pub wind: Option<f64>,
    /// Accumulated rain (mm)
    #[serde(default)]
    pub rain: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastInput {
    #[serde(default, alias = "minTemp")]
    pub min_temp: Option<f64>,
    #[serde(default, alias = "maxTemp")]
    pub max_temp: Option<f64>,
    /// Hourly air temperatures for the coming period (°C), used for chilling hours.
    #[serde(default, alias = "hourlyTemps", skip_serializing_if = "Vec::is_empty")]
    pub hourly_temps: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilInput {
    /// Soil temperature (°C)
    #[serde(default)]
    pub temp: Option<f64>,
    /// Volumetric soil moisture (0-100 %)
    #[serde(default)]
    pub moisture: Option<f64>,
}

/// Everything the engine needs for one analysis.
///
/// `weather` is structurally required: an absent record is a caller contract
/// violation, not a data gap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub weather: Option<WeatherInput>,
    #[serde(default)]
    pub forecast: ForecastInput,
    #[serde(default)]
    pub soil: SoilInput,
}

impl AnalysisInput {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the structurally required fields and rejects non-finite numbers.
    /// Returns the weather record and its air temperature on success.
    pub fn validate(&self) -> Result<(&WeatherInput, f64)> {
        let weather = self
            .weather
            .as_ref()
            .ok_or_else(|| AdvisorError::Validation("weather record is required".into()))?;

        let temp = weather
            .temp
            .ok_or_else(|| AdvisorError::Validation("weather.temp is required".into()))?;

        let fields = [
            ("weather.temp", weather.temp),
            ("weather.hum", weather.hum),
            ("weather.wind", weather.wind),
            ("weather.rain", weather.rain),
            ("forecast.min_temp", self.forecast.min_temp),
            ("forecast.max_temp", self.forecast.max_temp),
            ("soil.temp", self.soil.temp),
            ("soil.moisture", self.soil.moisture),
        ];

        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(AdvisorError::Validation(format!(
                        "{} must be a finite number, got {}",
                        name, v
                    )));
                }
            }
        }

        if let Some(v) = self.forecast.hourly_temps.iter().find(|v| !v.is_finite()) {
            return Err(AdvisorError::Validation(format!(
                "forecast.hourly_temps must be finite, got {}",
                v
            )));
        }

        Ok((weather, temp))
    }
}
