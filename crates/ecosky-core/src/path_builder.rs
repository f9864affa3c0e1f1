//! Sampled great-circle paths and their rerouted (laterally offset) variants.
//!
//! A nominal path follows the great circle between the endpoints. A rerouted
//! path shares the endpoints but every interior sample is pushed a fixed
//! distance sideways, perpendicular to the route's overall initial bearing.
//! The offset direction is computed once per route, so the detour reads as a
//! clean parallel track rather than a true spherical parallel curve.

use crate::error::GeoError;
use crate::metrics::estimate_metrics;
use crate::models::{Classification, Path, Route, RouteMetrics};
use crate::rules::EngineRules;
use crate::spatial::{SphericalEarth, SphericalGeometry, INTERPOLATION_EPSILON_RAD};
use rayon::prelude::*;

/// Build a path with the default rules and `samples` segments.
pub fn build_path(route: &Route, samples: usize) -> Path {
    PathBuilder::<SphericalEarth>::default().build_path_with_samples(route, samples)
}

/// Path construction and metric estimation over a geometry provider.
#[derive(Debug, Clone)]
pub struct PathBuilder<G = SphericalEarth> {
    geometry: G,
    rules: EngineRules,
}

impl Default for PathBuilder<SphericalEarth> {
    fn default() -> Self {
        Self {
            geometry: SphericalEarth::default(),
            rules: EngineRules::default(),
        }
    }
}

impl PathBuilder<SphericalEarth> {
    /// Builder on a sphere of `rules.earth_radius_km`.
    pub fn new(rules: EngineRules) -> Result<Self, GeoError> {
        rules.validate()?;
        Ok(Self {
            geometry: SphericalEarth::new(rules.earth_radius_km),
            rules,
        })
    }
}

impl<G: SphericalGeometry> PathBuilder<G> {
    /// Builder over a custom provider. Its radius must match `rules.earth_radius_km`.
    pub fn with_geometry(geometry: G, rules: EngineRules) -> Result<Self, GeoError> {
        rules.validate()?;
        if geometry.radius_km() != rules.earth_radius_km {
            return Err(GeoError::InvalidRules(format!(
                "geometry radius {} km does not match earth_radius_km {}",
                geometry.radius_km(),
                rules.earth_radius_km
            )));
        }
        Ok(Self { geometry, rules })
    }

    pub fn rules(&self) -> &EngineRules {
        &self.rules
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Path sampled at the configured resolution.
    pub fn build_path(&self, route: &Route) -> Path {
        self.build_path_with_samples(route, self.rules.samples)
    }

    /// Path with `samples` segments (`samples + 1` points). Zero is treated as one.
    pub fn build_path_with_samples(&self, route: &Route, samples: usize) -> Path {
        let samples = samples.max(1);
        let geometry = &self.geometry;

        let bearing = geometry.initial_bearing(&route.start, &route.end);
        let offset_bearing = (bearing + 90.0) % 360.0;

        // Coincident endpoints have no direction of travel to be perpendicular to.
        let offset_interior = route.classification == Classification::Rerouted
            && geometry.angular_distance(&route.start, &route.end) >= INTERPOLATION_EPSILON_RAD;
        if route.classification.is_rerouted() && !offset_interior {
            tracing::trace!(start = %route.start, "degenerate rerouted route, skipping lateral offset");
        }

        let mut points = Vec::with_capacity(samples + 1);
        points.push(route.start);
        for i in 1..samples {
            let t = i as f64 / samples as f64;
            let sample = geometry.slerp(&route.start, &route.end, t);
            if offset_interior {
                points.push(geometry.destination_point(
                    &sample,
                    self.rules.lateral_offset_km,
                    offset_bearing,
                ));
            } else {
                points.push(sample);
            }
        }
        points.push(route.end);

        Path::new(route.classification, points)
    }

    pub fn route_metrics(&self, route: &Route) -> RouteMetrics {
        estimate_metrics(&self.geometry, &self.rules, route)
    }

    /// Paths for many routes, computed in parallel and returned in input order.
    pub fn build_paths(&self, routes: &[Route]) -> Vec<Path> {
        tracing::debug!(routes = routes.len(), samples = self.rules.samples, "building paths");
        routes.par_iter().map(|route| self.build_path(route)).collect()
    }

    /// Metrics for many routes, computed in parallel and returned in input order.
    pub fn metrics_for(&self, routes: &[Route]) -> Vec<RouteMetrics> {
        routes
            .par_iter()
            .map(|route| self.route_metrics(route))
            .collect()
    }
}
