pub mod error;
pub mod metrics;
pub mod models;
pub mod path_builder;
pub mod report;
pub mod route_set;
pub mod rules;
pub mod spatial;

pub use error::GeoError;
pub use metrics::{estimate_metrics, route_metrics};
pub use models::{Classification, FlightTime, GeoPoint, Path, Route, RouteMetrics};
pub use path_builder::{build_path, PathBuilder};
pub use report::{FlightDetails, RouteReport};
pub use route_set::{reclassify_all, Place, PlannedRoute, RouteSet};
pub use rules::{
    EngineRules, CRUISE_SPEED_KMH, DEFAULT_SAMPLES, DETOUR_DELAY_HOURS,
    DETOUR_DISTANCE_MULTIPLIER, EARTH_RADIUS_KM, LATERAL_OFFSET_KM,
};
pub use spatial::{
    angular_distance, destination_point, initial_bearing, slerp, SphericalEarth,
    SphericalGeometry,
};
