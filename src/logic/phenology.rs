use crate::models::{Crop, CropThermalProfile, GrowthState};

/// Temperature (°C) below which an hour counts toward chilling requirements.
pub const CHILLING_THRESHOLD_C: f64 = 7.2;

/// Calculate Growing Degree Days (GDD) for one day
///
/// Uses the simple averaging method: `max((t_max + t_min) / 2 - base, 0)`.
/// When only an instantaneous reading is available the caller passes it as both
/// arguments, which is a proxy and not a true daily range.
pub fn calculate_gdd(t_max: f64, t_min: f64, crop: Crop) -> f64 {
    gdd_with_base(t_max, t_min, crop_config(crop).base_temp)
}

/// Same as [`calculate_gdd`] with an explicit base temperature. The engine
/// uses it when a farm overrides the crop's base temperature.
pub fn gdd_with_base(t_max: f64, t_min: f64, base_temp: f64) -> f64 {
    let avg = (t_max + t_min) / 2.0;
    (avg - base_temp).max(0.0)
}

pub fn growth_status(gdd_today: f64) -> GrowthState {
    if gdd_today <= 0.0 {
        GrowthState::Stalled
    } else if gdd_today < 5.0 {
        GrowthState::Slow
    } else if gdd_today < 15.0 {
        GrowthState::Normal
    } else {
        GrowthState::Fast
    }
}

/// Count hourly samples strictly below 7.2°C
pub fn calculate_chilling_hours(hourly_temps: &[f64]) -> u32 {
    hourly_temps
        .iter()
        .filter(|t| **t < CHILLING_THRESHOLD_C)
        .count() as u32
}

pub fn crop_config(crop: Crop) -> CropThermalProfile {
    crop.profile()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gdd_generic_known_values() {
        assert!((calculate_gdd(10.0, 10.0, Crop::Generic) - 5.0).abs() < 0.001);
        assert!((calculate_gdd(3.0, 3.0, Crop::Generic) - 0.0).abs() < 0.001);
        assert!((calculate_gdd(24.0, 12.0, Crop::Generic) - 13.0).abs() < 0.001);
    }

    #[test]
    fn gdd_uses_crop_base() {
        // Corn base is 10°C
        assert!((calculate_gdd(30.0, 14.0, Crop::Corn) - 12.0).abs() < 0.001);
        // Wheat base is 0°C
        assert!((calculate_gdd(4.0, 2.0, Crop::Wheat) - 3.0).abs() < 0.001);
    }

    #[test]
    fn gdd_never_negative() {
        for crop in Crop::ALL {
            for t in [-40.0, -10.0, -0.5, 0.0, 3.0, 8.0, 25.0, 45.0] {
                assert!(calculate_gdd(t, t - 6.0, crop) >= 0.0);
                assert!(calculate_gdd(t, t, crop) >= 0.0);
            }
        }
    }

    #[test]
    fn gdd_with_overridden_base() {
        assert!((gdd_with_base(20.0, 10.0, 8.0) - 7.0).abs() < 0.001);
        assert!((gdd_with_base(2.0, 0.0, 8.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn growth_bands() {
        assert_eq!(growth_status(-3.0), GrowthState::Stalled);
        assert_eq!(growth_status(0.0), GrowthState::Stalled);
        assert_eq!(growth_status(0.01), GrowthState::Slow);
        assert_eq!(growth_status(4.99), GrowthState::Slow);
        assert_eq!(growth_status(5.0), GrowthState::Normal);
        assert_eq!(growth_status(14.99), GrowthState::Normal);
        assert_eq!(growth_status(15.0), GrowthState::Fast);
        assert_eq!(growth_status(80.0), GrowthState::Fast);
    }

    #[test]
    fn growth_bands_are_ordered() {
        let mut previous = growth_status(-1.0);
        let mut gdd = -1.0;
        while gdd < 30.0 {
            let state = growth_status(gdd);
            assert!(state >= previous);
            previous = state;
            gdd += 0.25;
        }
    }

    #[test]
    fn chilling_hours_counts_strictly_below_threshold() {
        assert_eq!(calculate_chilling_hours(&[]), 0);
        assert_eq!(calculate_chilling_hours(&[7.2, 7.3, 10.0]), 0);
        assert_eq!(calculate_chilling_hours(&[7.19, 0.0, -3.0, 12.0]), 3);
    }

    #[test]
    fn crop_config_falls_back_to_generic() {
        let generic = crop_config(Crop::resolve("unknown crop"));
        assert!((generic.base_temp - 5.0).abs() < 0.001);
        assert!((generic.lethal_min - 0.0).abs() < 0.001);
    }
}
