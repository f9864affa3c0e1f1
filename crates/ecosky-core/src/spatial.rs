//! Spherical math for great-circle paths, bearings and destination points.
//!
//! All public functions take and return degrees; radians only appear inside.
//! Every function is total over valid [`GeoPoint`]s: identical points, antipodes
//! and the poles go through explicit branches instead of producing NaN.

use crate::models::GeoPoint;
use crate::rules::EARTH_RADIUS_KM;
use std::f64::consts::PI;

/// Below this central angle (radians) two points are treated as the same place.
pub const INTERPOLATION_EPSILON_RAD: f64 = 1e-8;

/// Below this, `sin(central angle)` is too small to divide by (near-antipodal pair).
const ANTIPODAL_SIN_EPSILON: f64 = 1e-6;

// ==== Angle helpers ====

/// Wrap a longitude into [-180, 180]. Values already in range are returned untouched.
pub fn normalize_longitude(lon_deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon_deg) {
        return lon_deg;
    }
    (lon_deg + 180.0).rem_euclid(360.0) - 180.0
}

// ==== Distance and bearing ====

/// Central angle between two points in radians (haversine formula).
///
/// Symmetric, zero for identical points, at most π for antipodes.
pub fn angular_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.lat().to_radians();
    let phi2 = b.lat().to_radians();
    let dphi = (b.lat() - a.lat()).to_radians();
    let dlambda = (b.lon() - a.lon()).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1], which would make the sqrt NaN.
    let h = h.clamp(0.0, 1.0);
    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle distance in kilometers on the mean-radius Earth.
pub fn great_circle_distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    angular_distance(a, b) * EARTH_RADIUS_KM
}

/// Initial bearing (forward azimuth) from `a` to `b` in degrees, [0, 360).
///
/// Returns 0 when the points coincide; the value carries no meaning there.
pub fn initial_bearing(a: &GeoPoint, b: &GeoPoint) -> f64 {
    if angular_distance(a, b) < INTERPOLATION_EPSILON_RAD {
        return 0.0;
    }

    let deg = bearing_rad(a, b).to_degrees().rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

fn bearing_rad(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.lat().to_radians();
    let phi2 = b.lat().to_radians();
    let delta_lambda = (b.lon() - a.lon()).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    y.atan2(x)
}

// ==== Direct problem ====

/// Destination reached from `origin` after `distance_km` along `bearing_deg`
/// on the mean-radius Earth (direct geodesic problem on a sphere).
pub fn destination_point(origin: &GeoPoint, distance_km: f64, bearing_deg: f64) -> GeoPoint {
    destination_point_on_sphere(origin, distance_km, bearing_deg, EARTH_RADIUS_KM)
}

/// [`destination_point`] for an arbitrary sphere radius.
pub fn destination_point_on_sphere(
    origin: &GeoPoint,
    distance_km: f64,
    bearing_deg: f64,
    radius_km: f64,
) -> GeoPoint {
    if !distance_km.is_finite() || !bearing_deg.is_finite() || radius_km <= 0.0 {
        return *origin;
    }
    project(origin, distance_km / radius_km, bearing_deg.to_radians())
}

/// Move `angular_distance` radians from `origin` along `bearing` radians.
fn project(origin: &GeoPoint, angular_distance: f64, bearing: f64) -> GeoPoint {
    if angular_distance.abs() <= f64::EPSILON {
        return *origin;
    }

    let lat1 = origin.lat().to_radians();
    let lon1 = origin.lon().to_radians();

    let sin_lat1 = lat1.sin();
    let cos_lat1 = lat1.cos();
    let sin_ad = angular_distance.sin();
    let cos_ad = angular_distance.cos();

    let sin_lat2 = sin_lat1 * cos_ad + cos_lat1 * sin_ad * bearing.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

    let y = bearing.sin() * sin_ad * cos_lat1;
    let x = cos_ad - sin_lat1 * lat2.sin();
    let mut lon2 = lon1 + y.atan2(x);
    lon2 = (lon2 + PI).rem_euclid(2.0 * PI) - PI;

    GeoPoint::from_computed(lat2.to_degrees(), lon2.to_degrees())
}

// ==== Great-circle interpolation ====

/// Unit vector of a point on the sphere.
fn unit_vector(p: &GeoPoint) -> [f64; 3] {
    let phi = p.lat().to_radians();
    let lambda = p.lon().to_radians();
    [phi.cos() * lambda.cos(), phi.cos() * lambda.sin(), phi.sin()]
}

/// Point at fraction `t` of the great-circle arc from `a` to `b`.
///
/// `t` is clamped to [0, 1]; the ends return `a` and `b` exactly. Points closer
/// than [`INTERPOLATION_EPSILON_RAD`] return `a`. For (near-)antipodal pairs the
/// great circle is not unique, so the arc follows the initial bearing.
pub fn slerp(a: &GeoPoint, b: &GeoPoint, t: f64) -> GeoPoint {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t == 0.0 {
        return *a;
    }
    if t == 1.0 {
        return *b;
    }

    let va = unit_vector(a);
    let vb = unit_vector(b);

    // atan2(|a x b|, a . b) keeps full precision near 0 and near pi, where the
    // haversine angle is only good to about 1e-8 rad.
    let cross = [
        va[1] * vb[2] - va[2] * vb[1],
        va[2] * vb[0] - va[0] * vb[2],
        va[0] * vb[1] - va[1] * vb[0],
    ];
    let sin_delta = (cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]).sqrt();
    let cos_delta = va[0] * vb[0] + va[1] * vb[1] + va[2] * vb[2];
    let delta = sin_delta.atan2(cos_delta);
    if delta < INTERPOLATION_EPSILON_RAD {
        return *a;
    }

    if sin_delta < ANTIPODAL_SIN_EPSILON {
        return project(a, delta * t, bearing_rad(a, b));
    }

    let theta = delta * t;
    let weight_a = (delta - theta).sin() / sin_delta;
    let weight_b = theta.sin() / sin_delta;

    let x = weight_a * va[0] + weight_b * vb[0];
    let y = weight_a * va[1] + weight_b * vb[1];
    let z = weight_a * va[2] + weight_b * vb[2];

    let phi = z.atan2((x * x + y * y).sqrt());
    let lambda = y.atan2(x);

    GeoPoint::from_computed(phi.to_degrees(), lambda.to_degrees())
}

// ==== Geometry provider ====

/// A source of spherical geometry.
///
/// Path building goes through this trait so that every caller shares one
/// implementation of bearings and interpolation.
pub trait SphericalGeometry: Send + Sync {
    /// Sphere radius in kilometers.
    fn radius_km(&self) -> f64;

    fn angular_distance(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        angular_distance(a, b)
    }

    fn initial_bearing(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        initial_bearing(a, b)
    }

    fn destination_point(&self, origin: &GeoPoint, distance_km: f64, bearing_deg: f64) -> GeoPoint {
        destination_point_on_sphere(origin, distance_km, bearing_deg, self.radius_km())
    }

    fn slerp(&self, a: &GeoPoint, b: &GeoPoint, t: f64) -> GeoPoint {
        slerp(a, b, t)
    }

    /// Surface distance in kilometers.
    fn distance_km(&self, a: &GeoPoint, b: &GeoPoint) -> f64 {
        self.angular_distance(a, b) * self.radius_km()
    }
}

/// Spherical Earth of a fixed radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalEarth {
    pub radius_km: f64,
}

impl SphericalEarth {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }
}

impl Default for SphericalEarth {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_KM)
    }
}

impl SphericalGeometry for SphericalEarth {
    fn radius_km(&self) -> f64 {
        self.radius_km
    }
}
