use crate::models::WeatherInput;
use serde::{Deserialize, Serialize};

/// Quick weather flags shown next to the analysis. Never feeds the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherOutlook {
    pub frost_warning: bool,
    pub heat_warning: bool,
    /// Conditions acceptable for pesticide application
    pub spraying_suitable: bool,
}

const FROST_WARNING_C: f64 = 2.0;
const HEAT_WARNING_C: f64 = 35.0;
const MAX_SPRAY_WIND_KMH: f64 = 15.0;
const MAX_SPRAY_HUMIDITY: f64 = 90.0;
const SPRAY_TEMP_RANGE_C: (f64, f64) = (5.0, 30.0);

pub fn assess_weather(weather: &WeatherInput) -> WeatherOutlook {
    let frost_warning = weather.temp.is_some_and(|t| t <= FROST_WARNING_C);
    let heat_warning = weather.temp.is_some_and(|t| t >= HEAT_WARNING_C);

    // Drift: unknown wind or temperature means we can't call it safe
    let calm = weather.wind.is_some_and(|w| w < MAX_SPRAY_WIND_KMH);
    let dry = weather.rain.is_none_or(|r| r <= 0.0);
    let not_saturated = weather.hum.is_none_or(|h| h < MAX_SPRAY_HUMIDITY);
    let mild = weather
        .temp
        .is_some_and(|t| (SPRAY_TEMP_RANGE_C.0..=SPRAY_TEMP_RANGE_C.1).contains(&t));

    WeatherOutlook {
        frost_warning,
        heat_warning,
        spraying_suitable: calm && dry && not_saturated && mild,
    }
}
