//! Named constants and tunables for path building and flight metrics.

use crate::error::GeoError;
use serde::{Deserialize, Serialize};

/// Mean Earth radius used for every distance on the sphere.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Sideways displacement of interior samples on a rerouted path.
pub const LATERAL_OFFSET_KM: f64 = 50.0;
/// Distance penalty applied to rerouted routes.
pub const DETOUR_DISTANCE_MULTIPLIER: f64 = 1.07;
/// Fixed delay added to rerouted routes (about 20 minutes).
pub const DETOUR_DELAY_HOURS: f64 = 0.33;
pub const CRUISE_SPEED_KMH: f64 = 900.0;
/// Segments per path; a path holds one more point than this.
pub const DEFAULT_SAMPLES: usize = 32;

/// Configuration for path sampling and metric estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineRules {
    /// Sphere radius in kilometers
    pub earth_radius_km: f64,
    /// Lateral offset of rerouted interior samples in kilometers
    pub lateral_offset_km: f64,
    /// Multiplier applied to rerouted distances
    pub detour_distance_multiplier: f64,
    /// Hours added to rerouted durations
    pub detour_delay_hours: f64,
    /// Average cruise speed in km/h
    pub cruise_speed_kmh: f64,
    /// Number of segments per sampled path
    pub samples: usize,
}

impl Default for EngineRules {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            lateral_offset_km: LATERAL_OFFSET_KM,
            detour_distance_multiplier: DETOUR_DISTANCE_MULTIPLIER,
            detour_delay_hours: DETOUR_DELAY_HOURS,
            cruise_speed_kmh: CRUISE_SPEED_KMH,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl EngineRules {
    /// Reject values that would make metrics negative, infinite or NaN.
    pub fn validate(&self) -> Result<(), GeoError> {
        fn positive(name: &str, value: f64) -> Result<(), GeoError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(GeoError::InvalidRules(format!(
                    "{name} must be finite and positive, got {value}"
                )))
            }
        }

        fn non_negative(name: &str, value: f64) -> Result<(), GeoError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(GeoError::InvalidRules(format!(
                    "{name} must be finite and non-negative, got {value}"
                )))
            }
        }

        positive("earth_radius_km", self.earth_radius_km)?;
        positive("cruise_speed_kmh", self.cruise_speed_kmh)?;
        non_negative("lateral_offset_km", self.lateral_offset_km)?;
        non_negative("detour_distance_multiplier", self.detour_distance_multiplier)?;
        non_negative("detour_delay_hours", self.detour_delay_hours)?;
        if self.samples == 0 {
            return Err(GeoError::InvalidRules("samples must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_constants() {
        let rules = EngineRules::default();
        assert_eq!(rules.earth_radius_km, 6371.0);
        assert_eq!(rules.lateral_offset_km, 50.0);
        assert_eq!(rules.detour_distance_multiplier, 1.07);
        assert_eq!(rules.detour_delay_hours, 0.33);
        assert_eq!(rules.cruise_speed_kmh, 900.0);
        assert_eq!(rules.samples, 32);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_speed_and_samples() {
        let rules = EngineRules {
            cruise_speed_kmh: 0.0,
            ..EngineRules::default()
        };
        assert!(matches!(rules.validate(), Err(GeoError::InvalidRules(_))));

        let rules = EngineRules {
            samples: 0,
            ..EngineRules::default()
        };
        assert!(rules.validate().is_err());

        let rules = EngineRules {
            lateral_offset_km: f64::NAN,
            ..EngineRules::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let rules: EngineRules = serde_json::from_str(r#"{"cruise_speed_kmh": 800.0}"#).unwrap();
        assert_eq!(rules.cruise_speed_kmh, 800.0);
        assert_eq!(rules.samples, DEFAULT_SAMPLES);
    }
}
