//! Error type for the path engine.

use thiserror::Error;

/// Errors surfaced at the boundaries of the engine.
///
/// The geometry itself never fails for valid points; everything here is a
/// caller-supplied value rejected at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90] or not finite")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180] or not finite")]
    InvalidLongitude(f64),

    #[error("invalid engine rules: {0}")]
    InvalidRules(String),

    #[error("no planned route with id {0}")]
    UnknownRoute(u64),
}
