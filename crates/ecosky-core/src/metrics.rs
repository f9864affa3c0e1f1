//! Distance and flight-time estimation.

use crate::models::{Route, RouteMetrics};
use crate::rules::EngineRules;
use crate::spatial::{SphericalEarth, SphericalGeometry};

/// Metrics for a route under the default rules.
pub fn route_metrics(route: &Route) -> RouteMetrics {
    estimate_metrics(&SphericalEarth::default(), &EngineRules::default(), route)
}

/// Distance and duration for `route`.
///
/// Rerouted routes pay the detour multiplier on distance and the fixed delay on
/// duration. A non-positive cruise speed yields zero duration rather than infinity.
pub fn estimate_metrics<G: SphericalGeometry + ?Sized>(
    geometry: &G,
    rules: &EngineRules,
    route: &Route,
) -> RouteMetrics {
    let base_distance_km = geometry.angular_distance(&route.start, &route.end) * geometry.radius_km();

    let rerouted = route.classification.is_rerouted();
    let distance_km = if rerouted {
        base_distance_km * rules.detour_distance_multiplier
    } else {
        base_distance_km
    };

    let mut duration_hours = if rules.cruise_speed_kmh > 0.0 {
        distance_km / rules.cruise_speed_kmh
    } else {
        0.0
    };
    if rerouted {
        duration_hours += rules.detour_delay_hours;
    }

    RouteMetrics {
        distance_km,
        duration_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlightTime, GeoPoint};

    fn new_york_london() -> Route {
        Route::nominal(
            GeoPoint::new(40.0, -73.0).unwrap(),
            GeoPoint::new(51.5, -0.1).unwrap(),
        )
    }

    #[test]
    fn nominal_new_york_london() {
        let metrics = route_metrics(&new_york_london());
        assert!(
            (5500.0..=5600.0).contains(&metrics.distance_km),
            "distance {}",
            metrics.distance_km
        );
        assert!((metrics.duration_hours - metrics.distance_km / 900.0).abs() < 1e-12);
    }

    #[test]
    fn rerouted_pays_detour_penalty() {
        let nominal = route_metrics(&new_york_london());
        let detour = route_metrics(&new_york_london().with_classification(
            crate::models::Classification::Rerouted,
        ));

        assert_eq!(detour.distance_km, nominal.distance_km * 1.07);
        let expected = nominal.distance_km * 1.07 / 900.0 + 0.33;
        assert!((detour.duration_hours - expected).abs() < 1e-12);
    }

    #[test]
    fn same_point_has_zero_distance() {
        let a = GeoPoint::new(-12.0, 44.0).unwrap();
        let metrics = route_metrics(&Route::nominal(a, a));
        assert_eq!(metrics.distance_km, 0.0);
        assert_eq!(metrics.duration_hours, 0.0);
        assert_eq!(metrics.flight_time(), FlightTime::default());
    }

    #[test]
    fn custom_speed_changes_duration_only() {
        let rules = EngineRules {
            cruise_speed_kmh: 450.0,
            ..EngineRules::default()
        };
        let fast = route_metrics(&new_york_london());
        let slow = estimate_metrics(&SphericalEarth::default(), &rules, &new_york_london());
        assert_eq!(fast.distance_km, slow.distance_km);
        assert!((slow.duration_hours - 2.0 * fast.duration_hours).abs() < 1e-12);
    }
}
