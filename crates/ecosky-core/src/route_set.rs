//! Planned routes and the global weather-mode toggle.
//!
//! A [`RouteSet`] holds what the user asked for: named origin/destination
//! pairs. The routes handed to the path builder are derived from it on demand.
//! With weather mode on, every planned route also yields a rerouted twin, so
//! toggling never mutates a route in place.

use crate::error::GeoError;
use crate::models::{Classification, GeoPoint, Route};
use serde::{Deserialize, Serialize};

/// A named location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(flatten)]
    pub point: GeoPoint,
}

impl Place {
    pub fn new(name: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            name: name.into(),
            point,
        }
    }
}

/// A route the user added, identified by a stable id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoute {
    pub id: u64,
    pub origin: Place,
    pub destination: Place,
}

impl PlannedRoute {
    pub fn route(&self) -> Route {
        Route::nominal(self.origin.point, self.destination.point)
    }
}

/// Reclassify every route, producing new values.
pub fn reclassify_all(routes: &[Route], classification: Classification) -> Vec<Route> {
    routes
        .iter()
        .map(|route| route.with_classification(classification))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteSet {
    planned: Vec<PlannedRoute>,
    weather_mode: bool,
    next_id: u64,
}

impl RouteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a planned route and return its id. Ids are never reused.
    pub fn add(&mut self, origin: Place, destination: Place) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(id, origin = %origin.name, destination = %destination.name, "planned route added");
        self.planned.push(PlannedRoute {
            id,
            origin,
            destination,
        });
        id
    }

    /// Remove a planned route. Its rerouted twin goes with it.
    pub fn remove(&mut self, id: u64) -> Result<PlannedRoute, GeoError> {
        let index = self
            .planned
            .iter()
            .position(|planned| planned.id == id)
            .ok_or(GeoError::UnknownRoute(id))?;
        Ok(self.planned.remove(index))
    }

    pub fn get(&self, id: u64) -> Option<&PlannedRoute> {
        self.planned.iter().find(|planned| planned.id == id)
    }

    pub fn planned(&self) -> &[PlannedRoute] {
        &self.planned
    }

    pub fn len(&self) -> usize {
        self.planned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planned.is_empty()
    }

    pub fn weather_mode(&self) -> bool {
        self.weather_mode
    }

    /// Copy of this set with weather mode switched on or off.
    pub fn with_weather_mode(&self, active: bool) -> Self {
        if active != self.weather_mode {
            tracing::debug!(active, routes = self.planned.len(), "weather mode toggled");
        }
        Self {
            weather_mode: active,
            ..self.clone()
        }
    }

    /// Nominal routes in insertion order, followed by their rerouted twins
    /// when weather mode is on.
    pub fn routes(&self) -> Vec<Route> {
        let nominal: Vec<Route> = self.planned.iter().map(PlannedRoute::route).collect();
        if !self.weather_mode {
            return nominal;
        }

        let rerouted = reclassify_all(&nominal, Classification::Rerouted);
        nominal.into_iter().chain(rerouted).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, lat: f64, lon: f64) -> Place {
        Place::new(name, GeoPoint::new(lat, lon).unwrap())
    }

    fn sample_set() -> RouteSet {
        let mut set = RouteSet::new();
        set.add(place("New York", 40.71, -74.01), place("London", 51.51, -0.13));
        set.add(place("Tokyo", 35.68, 139.69), place("Sydney", -33.87, 151.21));
        set
    }

    #[test]
    fn routes_without_weather_are_nominal() {
        let routes = sample_set().routes();
        assert_eq!(routes.len(), 2);
        assert!(routes
            .iter()
            .all(|r| r.classification == Classification::Nominal));
    }

    #[test]
    fn weather_mode_adds_rerouted_twins() {
        let set = sample_set();
        let stormy = set.with_weather_mode(true);

        assert!(!set.weather_mode());
        assert_eq!(set.routes().len(), 2);

        let routes = stormy.routes();
        assert_eq!(routes.len(), 4);
        assert_eq!(routes[2].start, routes[0].start);
        assert_eq!(routes[2].end, routes[0].end);
        assert_eq!(routes[2].classification, Classification::Rerouted);
        assert_eq!(routes[3].classification, Classification::Rerouted);

        let calm = stormy.with_weather_mode(false);
        assert_eq!(calm.routes(), set.routes());
    }

    #[test]
    fn remove_drops_twin_and_keeps_ids_unique() {
        let mut set = sample_set().with_weather_mode(true);
        let removed = set.remove(0).unwrap();
        assert_eq!(removed.origin.name, "New York");
        assert_eq!(set.routes().len(), 2);

        let id = set.add(place("Paris", 48.85, 2.35), place("Rome", 41.9, 12.5));
        assert_eq!(id, 2);
        assert!(set.get(0).is_none());
        assert!(set.get(2).is_some());
    }

    #[test]
    fn remove_unknown_id_fails() {
        let mut set = sample_set();
        assert_eq!(set.remove(42), Err(GeoError::UnknownRoute(42)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn reclassify_all_leaves_input_untouched() {
        let routes = sample_set().routes();
        let rerouted = reclassify_all(&routes, Classification::Rerouted);
        assert!(routes.iter().all(|r| !r.classification.is_rerouted()));
        assert!(rerouted.iter().all(|r| r.classification.is_rerouted()));
    }

    #[test]
    fn place_json_is_flat() {
        let p: Place = serde_json::from_str(r#"{"name": "Oslo", "lat": 59.91, "lon": 10.75}"#).unwrap();
        assert_eq!(p.name, "Oslo");
        assert_eq!(p.point.lat(), 59.91);
    }
}
