//! Constants shared by every index built on this geocode scheme.
//!
//! These values are part of the score format. An index populated with scores from one set of
//! constants can only be queried with ranges computed from the same set.

use std::f64::consts::PI;

/// Western edge of the longitude domain.
pub const LONG_MIN: f64 = -180.0;

/// Eastern edge of the longitude domain.
pub const LONG_MAX: f64 = 180.0;

/// Southern edge of the latitude domain (the limit of EPSG:900913 / EPSG:3785).
pub const LAT_MIN: f64 = -85.05112878;

/// Northern edge of the latitude domain.
pub const LAT_MAX: f64 = 85.05112878;

/// Coarsest precision, in bits per axis.
pub const STEP_MIN: u8 = 1;

/// Finest precision, in bits per axis. Scores stored in an index use this step.
pub const STEP_MAX: u8 = 26;

/// Width of the score space every code is aligned to.
pub const SCORE_BITS: u32 = 52;

/// Spherical earth radius used by the distance calculations, in meters.
pub const EARTH_RADIUS_IN_METERS: f64 = 6372797.560856;

/// Half the circumference of the Mercator projection, in meters.
pub const MERCATOR_MAX: f64 = 20037726.37;

/// Degrees to radians.
pub(crate) const D_R: f64 = PI / 180.0;
