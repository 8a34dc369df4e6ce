use serde::{Deserialize, Serialize};

/// Heat-stress threshold applied when a profile does not name its own.
pub const DEFAULT_STRESS_TEMP_C: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crop {
    Wheat,
    Corn,
    Soybean,
    Sunflower,
    Rapeseed,
    Potato,
    Tomato,
    Grape,
    Apple,
    Generic,
}

impl Crop {
    pub const ALL: [Crop; 10] = [
        Crop::Wheat,
        Crop::Corn,
        Crop::Soybean,
        Crop::Sunflower,
        Crop::Rapeseed,
        Crop::Potato,
        Crop::Tomato,
        Crop::Grape,
        Crop::Apple,
        Crop::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Corn => "Corn",
            Crop::Soybean => "Soybean",
            Crop::Sunflower => "Sunflower",
            Crop::Rapeseed => "Rapeseed",
            Crop::Potato => "Potato",
            Crop::Tomato => "Tomato",
            Crop::Grape => "Grape",
            Crop::Apple => "Apple",
            Crop::Generic => "Generic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wheat" | "winter wheat" => Some(Crop::Wheat),
            "corn" | "maize" => Some(Crop::Corn),
            "soybean" | "soy" | "soya" => Some(Crop::Soybean),
            "sunflower" => Some(Crop::Sunflower),
            "rapeseed" | "canola" => Some(Crop::Rapeseed),
            "potato" => Some(Crop::Potato),
            "tomato" => Some(Crop::Tomato),
            "grape" | "vine" | "grapevine" => Some(Crop::Grape),
            "apple" => Some(Crop::Apple),
            "generic" => Some(Crop::Generic),
            _ => None,
        }
    }

    /// Resolves a crop name, falling back to `Generic` for anything unrecognized.
    pub fn resolve(name: &str) -> Self {
        Self::from_str(name).unwrap_or(Crop::Generic)
    }

    /// Built-in thermal constants (°C).
    pub fn profile(&self) -> CropThermalProfile {
        let (base_temp, lethal_min, stress_temp) = match self {
            Crop::Wheat => (0.0, -12.0, Some(32.0)),
            Crop::Corn => (10.0, -2.0, Some(35.0)),
            Crop::Soybean => (10.0, -2.0, Some(35.0)),
            Crop::Sunflower => (6.0, -5.0, Some(35.0)),
            Crop::Rapeseed => (5.0, -15.0, Some(30.0)),
            Crop::Potato => (7.0, -2.0, Some(29.0)),
            Crop::Tomato => (10.0, 0.0, Some(32.0)),
            Crop::Grape => (10.0, -2.5, Some(35.0)),
            Crop::Apple => (4.5, -2.2, Some(35.0)),
            Crop::Generic => (5.0, 0.0, None),
        };

        CropThermalProfile {
            base_temp,
            lethal_min,
            stress_temp,
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropThermalProfile {
    /// No growth accrues below this temperature.
    pub base_temp: f64,
    /// Critical tissue damage at or below this temperature.
    pub lethal_min: f64,
    pub stress_temp: Option<f64>,
}

impl CropThermalProfile {
    pub fn stress_temp_or_default(&self) -> f64 {
        self.stress_temp.unwrap_or(DEFAULT_STRESS_TEMP_C)
    }

    /// Field-by-field merge: set override fields win, unset ones keep the current value.
    pub fn merged(&self, overrides: &ProfileOverrides) -> Self {
        Self {
            base_temp: overrides.base_temp.unwrap_or(self.base_temp),
            lethal_min: overrides.lethal_min.unwrap_or(self.lethal_min),
            stress_temp: overrides.stress_temp.or(self.stress_temp),
        }
    }
}

/// Partial profile persisted per farm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_temp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lethal_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_temp: Option<f64>,
}

impl ProfileOverrides {
    pub fn is_empty(&self) -> bool {
        self.base_temp.is_none() && self.lethal_min.is_none() && self.stress_temp.is_none()
    }

    /// Returns the name of the first field holding a non-finite value.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        [
            ("base_temp", self.base_temp),
            ("lethal_min", self.lethal_min),
            ("stress_temp", self.stress_temp),
        ]
        .into_iter()
        .find(|(_, v)| v.is_some_and(|v| !v.is_finite()))
        .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_from_str_valid() {
        assert_eq!(Crop::from_str("Wheat"), Some(Crop::Wheat));
        assert_eq!(Crop::from_str("maize"), Some(Crop::Corn));
        assert_eq!(Crop::from_str("  CANOLA "), Some(Crop::Rapeseed));
        assert_eq!(Crop::from_str("grapevine"), Some(Crop::Grape));
        assert_eq!(Crop::from_str("generic"), Some(Crop::Generic));
    }

    #[test]
    fn crop_from_str_invalid() {
        assert_eq!(Crop::from_str("dragonfruit"), None);
        assert_eq!(Crop::from_str(""), None);
    }

    #[test]
    fn unknown_crop_resolves_to_generic() {
        assert_eq!(Crop::resolve("dragonfruit"), Crop::Generic);
        let profile = Crop::resolve("dragonfruit").profile();
        assert!((profile.base_temp - 5.0).abs() < 0.001);
        assert!((profile.lethal_min - 0.0).abs() < 0.001);
        assert!(profile.stress_temp.is_none());
    }

    #[test]
    fn crop_round_trip() {
        for crop in Crop::ALL {
            assert_eq!(
                Crop::from_str(crop.as_str()),
                Some(crop),
                "Round-trip failed for {:?}",
                crop
            );
        }
    }

    #[test]
    fn stress_temp_defaults_to_35() {
        assert!((Crop::Generic.profile().stress_temp_or_default() - 35.0).abs() < 0.001);
        assert!((Crop::Potato.profile().stress_temp_or_default() - 29.0).abs() < 0.001);
    }

    #[test]
    fn merge_keeps_fields_missing_from_overrides() {
        let base = Crop::Corn.profile();
        let overrides = ProfileOverrides {
            lethal_min: Some(-6.0),
            ..Default::default()
        };

        let merged = base.merged(&overrides);
        assert!((merged.lethal_min - (-6.0)).abs() < 0.001);
        assert!((merged.base_temp - base.base_temp).abs() < 0.001);
        assert_eq!(merged.stress_temp, base.stress_temp);
    }

    #[test]
    fn merge_with_empty_overrides_is_identity() {
        let base = Crop::Tomato.profile();
        assert!(ProfileOverrides::default().is_empty());
        assert_eq!(base.merged(&ProfileOverrides::default()), base);
    }

    #[test]
    fn overrides_deserialize_partially() {
        let overrides: ProfileOverrides = serde_json::from_str(r#"{"stress_temp": 30.5}"#).unwrap();
        assert_eq!(overrides.stress_temp, Some(30.5));
        assert!(overrides.base_temp.is_none());
        assert!(overrides.lethal_min.is_none());
    }

    #[test]
    fn non_finite_override_is_reported() {
        let overrides = ProfileOverrides {
            lethal_min: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(overrides.first_non_finite(), Some("lethal_min"));
        assert_eq!(ProfileOverrides::default().first_non_finite(), None);
    }
}
