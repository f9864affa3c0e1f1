//! Per-route flight details for display.

use crate::models::{Classification, FlightTime, GeoPoint, Route, RouteMetrics};
use crate::path_builder::PathBuilder;
use crate::spatial::SphericalGeometry;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub label: String,
    pub classification: Classification,
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub metrics: RouteMetrics,
    pub flight_time: FlightTime,
}

impl RouteReport {
    pub fn new<G: SphericalGeometry>(builder: &PathBuilder<G>, route: &Route) -> Self {
        let metrics = builder.route_metrics(route);
        Self {
            label: label_for(route.classification).to_string(),
            classification: route.classification,
            start: route.start,
            end: route.end,
            metrics,
            flight_time: metrics.flight_time(),
        }
    }
}

fn label_for(classification: Classification) -> &'static str {
    match classification {
        Classification::Nominal => "Nominal Path",
        Classification::Rerouted => "Rerouted Path",
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(f, "Start: {}", self.start)?;
        writeln!(f, "End: {}", self.end)?;
        writeln!(f, "Distance: {:.2} km", self.metrics.distance_km)?;
        write!(f, "Flight Time: {}", self.flight_time)
    }
}

/// Details for a list of routes, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlightDetails {
    pub routes: Vec<RouteReport>,
}

impl FlightDetails {
    pub fn build<G: SphericalGeometry>(builder: &PathBuilder<G>, routes: &[Route]) -> Self {
        Self {
            routes: routes
                .iter()
                .map(|route| RouteReport::new(builder, route))
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for FlightDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.routes.is_empty() {
            return write!(f, "No flight paths to display.");
        }
        for (i, report) in self.routes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{report}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(classification: Classification) -> Route {
        Route::new(
            GeoPoint::new(40.0, -73.0).unwrap(),
            GeoPoint::new(51.5, -0.1).unwrap(),
            classification,
        )
    }

    #[test]
    fn report_formats_card() {
        let builder: PathBuilder = PathBuilder::default();
        let report = RouteReport::new(&builder, &route(Classification::Nominal));
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Nominal Path");
        assert_eq!(lines[1], "Start: (40.0000, -73.0000)");
        assert_eq!(lines[2], "End: (51.5000, -0.1000)");
        assert!(lines[3].starts_with("Distance: ") && lines[3].ends_with(" km"));
        assert_eq!(
            lines[4],
            format!("Flight Time: {}h {}m", report.flight_time.hours, report.flight_time.minutes)
        );
    }

    #[test]
    fn rerouted_report_takes_longer() {
        let builder: PathBuilder = PathBuilder::default();
        let details = FlightDetails::build(
            &builder,
            &[route(Classification::Nominal), route(Classification::Rerouted)],
        );

        assert_eq!(details.routes[1].label, "Rerouted Path");
        assert!(details.routes[1].metrics.duration_hours > details.routes[0].metrics.duration_hours);
        assert!(details.to_string().contains("\n\nRerouted Path\n"));
    }

    #[test]
    fn empty_details() {
        let details = FlightDetails::default();
        assert_eq!(details.to_string(), "No flight paths to display.");
    }

    #[test]
    fn json_carries_metrics() {
        let builder: PathBuilder = PathBuilder::default();
        let details = FlightDetails::build(&builder, &[route(Classification::Rerouted)]);
        let value: serde_json::Value = serde_json::from_str(&details.to_json().unwrap()).unwrap();
        assert_eq!(value["routes"][0]["classification"], "rerouted");
        assert!(value["routes"][0]["metrics"]["distance_km"].as_f64().unwrap() > 5500.0);
    }
}
