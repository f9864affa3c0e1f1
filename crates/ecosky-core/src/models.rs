//! Core data models for the path engine.

use crate::error::GeoError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the globe in decimal degrees.
///
/// Construction validates the ranges, so every `GeoPoint` in the system is
/// known to be finite with latitude in [-90, 90] and longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

/// Wire form of a point before validation.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawGeoPoint {
    #[serde(alias = "latitude")]
    lat: f64,
    #[serde(alias = "longitude", alias = "lng")]
    lon: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.lat, raw.lon)
    }
}

impl GeoPoint {
    /// Create a validated point. Out-of-range values are rejected, never clamped.
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::InvalidLatitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(GeoError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Build a point from the output of the spherical math.
    ///
    /// Inputs are already in range up to rounding; latitude drift past the poles
    /// is pinned and longitude is wrapped into [-180, 180].
    pub(crate) fn from_computed(lat: f64, lon: f64) -> Self {
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lon: crate::spatial::normalize_longitude(lon),
        }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// `[lat, lon]` pair, the shape globe renderers take.
    pub fn to_lat_lon(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// Whether a route is flown as planned or diverted around weather.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Planned great-circle route
    #[default]
    #[serde(alias = "desired")]
    Nominal,
    /// Weather detour, drawn laterally offset and penalised in distance/time
    #[serde(alias = "undesired")]
    Rerouted,
}

impl Classification {
    pub fn is_rerouted(self) -> bool {
        matches!(self, Classification::Rerouted)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Nominal => write!(f, "nominal"),
            Classification::Rerouted => write!(f, "rerouted"),
        }
    }
}

/// A start/end pair plus its classification.
///
/// Routes are values: reclassifying produces a new route and leaves the
/// endpoints untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub start: GeoPoint,
    pub end: GeoPoint,
    #[serde(default, alias = "type")]
    pub classification: Classification,
}

impl Route {
    pub fn new(start: GeoPoint, end: GeoPoint, classification: Classification) -> Self {
        Self {
            start,
            end,
            classification,
        }
    }

    pub fn nominal(start: GeoPoint, end: GeoPoint) -> Self {
        Self::new(start, end, Classification::Nominal)
    }

    pub fn rerouted(start: GeoPoint, end: GeoPoint) -> Self {
        Self::new(start, end, Classification::Rerouted)
    }

    /// Same endpoints, different classification.
    pub fn with_classification(self, classification: Classification) -> Self {
        Self {
            classification,
            ..self
        }
    }
}

/// A sampled polyline ready for rendering.
///
/// Holds `samples + 1` points; the first and last are the route endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    classification: Classification,
    points: Vec<GeoPoint>,
}

impl Path {
    pub(crate) fn new(classification: Classification, points: Vec<GeoPoint>) -> Self {
        Self {
            classification,
            points,
        }
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of sampled segments (one less than the point count).
    pub fn samples(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    pub fn lat_lon_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(GeoPoint::to_lat_lon).collect()
    }
}

/// Distance and duration figures for a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    pub distance_km: f64,
    pub duration_hours: f64,
}

impl RouteMetrics {
    pub fn flight_time(&self) -> FlightTime {
        FlightTime::from_hours(self.duration_hours)
    }
}

/// Whole hours plus remaining minutes, for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightTime {
    pub hours: u32,
    pub minutes: u32,
}

impl FlightTime {
    /// Split fractional hours into hours and rounded minutes.
    ///
    /// Rounding can land on 60 minutes (e.g. 1.9999h); that rolls into the next hour.
    pub fn from_hours(duration_hours: f64) -> Self {
        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Self::default();
        }

        let whole = duration_hours.floor();
        let mut hours = whole as u32;
        let mut minutes = ((duration_hours - whole) * 60.0).round() as u32;
        if minutes >= 60 {
            hours += minutes / 60;
            minutes %= 60;
        }
        Self { hours, minutes }
    }
}

impl fmt::Display for FlightTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}
