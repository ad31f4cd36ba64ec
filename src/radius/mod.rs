//! Planning of radius searches over an index of scores.
//!
//! A search picks a precision at which a 3×3 block of cells around the query point covers the
//! search circle, drops the rows and columns of that block that lie outside the circle's bounding
//! box, and emits one score range per remaining cell. Candidates read from those ranges are a
//! superset of the answer and must still be filtered with
//! [`distance_by_score`](crate::distance::distance_by_score).

use log::{debug, trace};
use tinyvec::ArrayVec;

use crate::codec::{check_latitude, check_longitude, BoundingBox, GeoCode, ScoreRange};
use crate::constants::{EARTH_RADIUS_IN_METERS, MERCATOR_MAX, STEP_MAX, STEP_MIN};
use crate::distance::{deg_to_rad, distance, rad_to_deg};
use crate::error::{GeoScoreError, Result};
use crate::neighbors::{neighbors, NeighborSet};

/// The center cell plus up to eight neighbors: at most nine ranges.
pub type ScoreRanges = ArrayVec<[ScoreRange; 9]>;

/// The cells a radius search has to scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusQueryResult {
    /// The cell containing the query point.
    pub center: GeoCode,
    /// The rectangle covered by `center`.
    pub area: BoundingBox,
    /// Neighbors of `center` that intersect the search box.
    pub neighbors: NeighborSet,
    /// The spherical bounding box of the search circle.
    pub bounds: BoundingBox,
}

impl RadiusQueryResult {
    /// The center followed by every surviving neighbor, in emission order.
    pub fn cells(&self) -> impl Iterator<Item = GeoCode> {
        std::iter::once(self.center).chain(self.neighbors.iter())
    }

    /// One score range per cell, in the order of [`RadiusQueryResult::cells`].
    pub fn ranges(&self) -> ScoreRanges {
        self.cells().map(|cell| cell.score_range()).collect()
    }
}

/// Pick the precision whose cells are about as wide as the radius.
///
/// A zero radius asks for the finest step. Cells are narrower in meters near the poles, so one
/// step is given up above 60° and another above 80°. The result is clamped to `[1, 26]`.
///
/// Fails if the radius is negative or not finite.
pub fn estimate_steps_by_radius(radius_meters: f64, latitude: f64) -> Result<u8> {
    check_radius(radius_meters)?;
    if radius_meters == 0.0 {
        return Ok(STEP_MAX);
    }

    let mut radius = radius_meters;
    let mut step: i32 = 1;
    while radius < MERCATOR_MAX {
        radius *= 2.0;
        step += 1;
    }
    step -= 2;

    if latitude.abs() > 60.0 {
        step -= 1;
        if latitude.abs() > 80.0 {
            step -= 1;
        }
    }

    Ok(step.clamp(STEP_MIN as i32, STEP_MAX as i32) as u8)
}

/// The box enclosing a circle of `radius_meters` around a point, on a sphere.
///
/// The longitude half-width grows with `1 / cos(latitude)` as meridians converge. The box is not
/// clipped to the coordinate domain.
pub fn bounding_box(longitude: f64, latitude: f64, radius_meters: f64) -> BoundingBox {
    let lon_delta = rad_to_deg(radius_meters / EARTH_RADIUS_IN_METERS / deg_to_rad(latitude).cos());
    let lat_delta = rad_to_deg(radius_meters / EARTH_RADIUS_IN_METERS);
    BoundingBox {
        lon_min: longitude - lon_delta,
        lon_max: longitude + lon_delta,
        lat_min: latitude - lat_delta,
        lat_max: latitude + lat_delta,
    }
}

/// Plan the cells covering a circle of `radius_meters` around a point.
///
/// The precision from [`estimate_steps_by_radius`] is lowered by one if the circle reaches past
/// the far edge of any direct neighbor. This happens at most once. Then, from step 2 on, each
/// row or column of neighbors lying beyond the search box is dropped.
pub fn areas_by_radius(
    longitude: f64,
    latitude: f64,
    radius_meters: f64,
) -> Result<RadiusQueryResult> {
    check_longitude(longitude)?;
    check_latitude(latitude)?;
    let mut step = estimate_steps_by_radius(radius_meters, latitude)?;

    let bounds = bounding_box(longitude, latitude, radius_meters);
    trace!("radius {radius_meters}m at ({longitude}, {latitude}): estimated step {step}");

    let mut center = GeoCode::encode(longitude, latitude, step)?;
    let mut around = neighbors(center);
    let mut area = center.decode();

    if step > STEP_MIN && circle_leaves_grid(longitude, latitude, radius_meters, &around) {
        step -= 1;
        debug!("radius {radius_meters}m reaches past the 3x3 grid, lowering step to {step}");
        center = GeoCode::encode(longitude, latitude, step)?;
        around = neighbors(center);
        area = center.decode();
    }

    if step >= 2 {
        if area.lat_min < bounds.lat_min {
            trace!("pruning southern row");
            around.prune_south();
        }
        if area.lat_max > bounds.lat_max {
            trace!("pruning northern row");
            around.prune_north();
        }
        if area.lon_min < bounds.lon_min {
            trace!("pruning western column");
            around.prune_west();
        }
        if area.lon_max > bounds.lon_max {
            trace!("pruning eastern column");
            around.prune_east();
        }
    }

    Ok(RadiusQueryResult {
        center,
        area,
        neighbors: around,
        bounds,
    })
}

/// Score ranges to scan for a circle of `radius_meters` around a point.
///
/// Ranges come in the order center, north, east, west, south, north-east, south-east,
/// north-west, south-west, with pruned cells left out.
///
/// ```
/// use geo_score::{encode_score, neighbor_ranges};
///
/// let ranges = neighbor_ranges(119.322741, 26.085920, 5000.0).unwrap();
/// let nearby = encode_score(119.33, 26.09).unwrap();
/// assert!(ranges.iter().any(|range| range.contains(nearby)));
/// ```
pub fn neighbor_ranges(longitude: f64, latitude: f64, radius_meters: f64) -> Result<ScoreRanges> {
    Ok(areas_by_radius(longitude, latitude, radius_meters)?.ranges())
}

/// Whether the circle reaches past the far edge of one of the four direct neighbors.
fn circle_leaves_grid(
    longitude: f64,
    latitude: f64,
    radius_meters: f64,
    around: &NeighborSet,
) -> bool {
    let far_edges = [
        around.north.map(|cell| (longitude, cell.decode().lat_max)),
        around.south.map(|cell| (longitude, cell.decode().lat_min)),
        around.east.map(|cell| (cell.decode().lon_max, latitude)),
        around.west.map(|cell| (cell.decode().lon_min, latitude)),
    ];
    far_edges
        .into_iter()
        .flatten()
        .any(|(lon, lat)| distance(longitude, latitude, lon, lat) < radius_meters)
}

fn check_radius(radius_meters: f64) -> Result<()> {
    if radius_meters.is_finite() && radius_meters >= 0.0 {
        Ok(())
    } else {
        Err(GeoScoreError::InvalidRadius(radius_meters))
    }
}
