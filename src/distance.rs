//! Great-circle distances on a spherical earth.

use crate::codec::decode_score;
use crate::constants::{D_R, EARTH_RADIUS_IN_METERS};
use crate::error::Result;

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(angle: f64) -> f64 {
    angle * D_R
}

/// Radians to degrees.
#[inline]
pub fn rad_to_deg(angle: f64) -> f64 {
    angle / D_R
}

/// Haversine distance in meters between two `(longitude, latitude)` points given in degrees.
///
/// ```
/// use geo_score::distance::distance;
///
/// let meters = distance(100.0, 50.0, 100.0, 51.0);
/// assert!((meters - 111226.3).abs() < 1e-3);
/// ```
pub fn distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let lat1r = deg_to_rad(lat1);
    let lon1r = deg_to_rad(lon1);
    let lat2r = deg_to_rad(lat2);
    let lon2r = deg_to_rad(lon2);
    let u = ((lat2r - lat1r) / 2.0).sin();
    let v = ((lon2r - lon1r) / 2.0).sin();
    2.0 * EARTH_RADIUS_IN_METERS * (u * u + lat1r.cos() * lat2r.cos() * v * v).sqrt().asin()
}

/// Distance in meters from a point to the center of the cell a stored score belongs to.
///
/// A score range only bounds candidates to a set of cells. Use this to drop the candidates whose
/// cells lie outside the search radius.
pub fn distance_by_score(longitude: f64, latitude: f64, score: u64) -> Result<f64> {
    let (lon, lat) = decode_score(score)?.center();
    Ok(distance(longitude, latitude, lon, lat))
}
