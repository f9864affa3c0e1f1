//! Parsing of command-line coordinates and route files.

use anyhow::{anyhow, Context, Result};
use ecosky_core::{GeoPoint, Place, RouteSet};
use serde::Deserialize;
use std::path::Path;

/// Parse `"LAT,LON"` in decimal degrees.
pub fn parse_point(s: &str) -> Result<GeoPoint> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected LAT,LON, got '{s}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("invalid latitude in '{s}'"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .with_context(|| format!("invalid longitude in '{s}'"))?;
    Ok(GeoPoint::new(lat, lon)?)
}

#[derive(Debug, Deserialize)]
struct RouteEntry {
    origin: Place,
    destination: Place,
}

/// Build a route set from a JSON array of `{origin, destination}` entries.
pub fn parse_route_set(json: &str) -> Result<RouteSet> {
    let entries: Vec<RouteEntry> =
        serde_json::from_str(json).context("route file is not a valid route list")?;
    let mut set = RouteSet::new();
    for entry in entries {
        set.add(entry.origin, entry.destination);
    }
    Ok(set)
}

pub fn load_route_set(path: &Path) -> Result<RouteSet> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_route_set(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_point_with_spaces() {
        let p = parse_point(" 40.0 , -73.0 ").unwrap();
        assert_eq!(p.lat(), 40.0);
        assert_eq!(p.lon(), -73.0);
    }

    #[test]
    fn rejects_bad_points() {
        assert!(parse_point("40.0").is_err());
        assert!(parse_point("north,-73").is_err());
        assert!(parse_point("95.0,0.0").is_err());
    }

    #[test]
    fn parses_route_file() {
        let json = r#"[
            {"origin": {"name": "Paris", "lat": 48.85, "lon": 2.35},
             "destination": {"name": "Rome", "lat": 41.9, "lon": 12.5}}
        ]"#;
        let set = parse_route_set(json).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.planned()[0].destination.name, "Rome");
    }

    #[test]
    fn route_file_with_invalid_coordinate_fails() {
        let json = r#"[
            {"origin": {"name": "Nowhere", "lat": 123.0, "lon": 0.0},
             "destination": {"name": "Rome", "lat": 41.9, "lon": 12.5}}
        ]"#;
        assert!(parse_route_set(json).is_err());
    }
}
