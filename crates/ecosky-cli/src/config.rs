//! CLI configuration from environment.

use ecosky_core::EngineRules;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub cruise_speed_kmh: f64,
    pub samples: usize,
    pub lateral_offset_km: f64,
}

impl Default for Config {
    fn default() -> Self {
        let rules = EngineRules::default();
        Self {
            cruise_speed_kmh: rules.cruise_speed_kmh,
            samples: rules.samples,
            lateral_offset_km: rules.lateral_offset_km,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            cruise_speed_kmh: lookup("ECOSKY_CRUISE_SPEED_KMH")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.cruise_speed_kmh),
            samples: lookup("ECOSKY_SAMPLES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.samples),
            lateral_offset_km: lookup("ECOSKY_OFFSET_KM")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.lateral_offset_km),
        }
    }

    /// Engine rules with this config applied on top of the defaults.
    pub fn rules(&self) -> EngineRules {
        EngineRules {
            cruise_speed_kmh: self.cruise_speed_kmh,
            samples: self.samples,
            lateral_offset_km: self.lateral_offset_km,
            ..EngineRules::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn overrides_apply_and_garbage_is_ignored() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("ECOSKY_CRUISE_SPEED_KMH", "780"),
            ("ECOSKY_SAMPLES", "not-a-number"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.cruise_speed_kmh, 780.0);
        assert_eq!(config.samples, 32);
        assert_eq!(config.lateral_offset_km, 50.0);
        assert_eq!(config.rules().cruise_speed_kmh, 780.0);
    }
}
