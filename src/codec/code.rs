use geo_traits::CoordTrait;

use crate::codec::area::BoundingBox;
use crate::codec::interleave::{deinterleave64, interleave64};
use crate::codec::score::ScoreRange;
use crate::constants::{LAT_MAX, LAT_MIN, LONG_MAX, LONG_MIN, SCORE_BITS, STEP_MAX, STEP_MIN};
use crate::error::{GeoScoreError, Result};

/// An interleaved geocode at a fixed precision.
///
/// `step` is the number of bits of resolution per axis. Only the low `2 * step` bits of `bits`
/// are significant: latitude bits sit on even positions and longitude bits on odd positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeoCode {
    bits: u64,
    step: u8,
}

impl GeoCode {
    /// Create a code from raw interleaved bits.
    ///
    /// Fails if `step` is outside `[1, 26]` or `bits` does not fit in `2 * step` bits.
    pub fn new(bits: u64, step: u8) -> Result<Self> {
        check_step(step)?;
        if bits >> (2 * step as u32) != 0 {
            return Err(GeoScoreError::CodeOutOfRange { bits, step });
        }
        Ok(Self { bits, step })
    }

    /// Construct without validation. Callers guarantee the step/bits invariants.
    #[inline]
    pub(crate) const fn new_unchecked(bits: u64, step: u8) -> Self {
        Self { bits, step }
    }

    /// Encode a point at the given precision.
    ///
    /// ```
    /// use geo_score::GeoCode;
    ///
    /// let code = GeoCode::encode(100.0, 50.0, 26).unwrap();
    /// assert_eq!(code.bits(), 4229754648981807);
    /// assert!(code.decode().contains(100.0, 50.0));
    /// ```
    pub fn encode(longitude: f64, latitude: f64, step: u8) -> Result<Self> {
        check_step(step)?;
        check_longitude(longitude)?;
        check_latitude(latitude)?;

        let lat_offset = axis_offset(latitude, LAT_MIN, LAT_MAX, step);
        let lon_offset = axis_offset(longitude, LONG_MIN, LONG_MAX, step);

        Ok(Self::new_unchecked(interleave64(lat_offset, lon_offset), step))
    }

    /// Encode a [`CoordTrait`] whose `x` is longitude and `y` is latitude.
    pub fn encode_coord(coord: &impl CoordTrait<T = f64>, step: u8) -> Result<Self> {
        Self::encode(coord.x(), coord.y(), step)
    }

    /// Encode a [`geo_0_31::Point`] at the given precision.
    #[cfg(feature = "use-geo_0_31")]
    pub fn encode_point(point: &geo_0_31::Point<f64>, step: u8) -> Result<Self> {
        Self::encode(point.x(), point.y(), step)
    }

    /// The interleaved bits.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// The precision in bits per axis.
    pub fn step(&self) -> u8 {
        self.step
    }

    /// The rectangle this code covers.
    pub fn decode(&self) -> BoundingBox {
        let separated = deinterleave64(self.bits);
        let lat_cell = separated as u32;
        let lon_cell = (separated >> 32) as u32;

        let (lat_min, lat_max) = axis_bounds(lat_cell, LAT_MIN, LAT_MAX, self.step);
        let (lon_min, lon_max) = axis_bounds(lon_cell, LONG_MIN, LONG_MAX, self.step);

        BoundingBox {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        }
    }

    /// The code aligned onto the 52-bit score axis.
    ///
    /// For a code at [`STEP_MAX`] this is the value an index stores for the point.
    pub fn score(&self) -> u64 {
        align_52_bits(self.bits, self.step)
    }

    /// The half-open range of scores covered by this cell.
    ///
    /// Codes of any step map to ranges on the same axis, so an index of maximum-precision scores
    /// can be scanned with ranges from coarser cells.
    pub fn score_range(&self) -> ScoreRange {
        ScoreRange {
            min: self.score(),
            max: align_52_bits(self.bits + 1, self.step),
        }
    }
}

/// The score an index stores for a point: its code at [`STEP_MAX`].
pub fn encode_score(longitude: f64, latitude: f64) -> Result<u64> {
    Ok(GeoCode::encode(longitude, latitude, STEP_MAX)?.score())
}

/// The maximum-precision cell of a stored score.
pub fn decode_score(score: u64) -> Result<BoundingBox> {
    if score >> SCORE_BITS != 0 {
        return Err(GeoScoreError::ScoreOutOfRange(score));
    }
    Ok(GeoCode::new_unchecked(score, STEP_MAX).decode())
}

/// Scores for many `(longitude, latitude)` points.
///
/// Fails if any point is out of domain.
pub fn encode_scores(points: &[(f64, f64)]) -> Result<Vec<u64>> {
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        points
            .par_iter()
            .map(|&(lon, lat)| encode_score(lon, lat))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        points
            .iter()
            .map(|&(lon, lat)| encode_score(lon, lat))
            .collect()
    }
}

#[inline]
fn align_52_bits(bits: u64, step: u8) -> u64 {
    bits << (SCORE_BITS - 2 * step as u32)
}

/// Map a coordinate onto `[0, 2^step)`.
///
/// The upper domain edge itself would land on `2^step`, which belongs to no cell, so it is folded
/// into the last one.
#[inline]
fn axis_offset(value: f64, min: f64, max: f64, step: u8) -> u32 {
    let cells = (1u64 << step) as f64;
    let offset = ((value - min) / (max - min)) * cells;
    (offset as u32).min((1u32 << step) - 1)
}

#[inline]
fn axis_bounds(cell: u32, min: f64, max: f64, step: u8) -> (f64, f64) {
    let cells = (1u64 << step) as f64;
    let scale = max - min;
    let lo = min + (cell as f64 / cells) * scale;
    let hi = min + ((cell as u64 + 1) as f64 / cells) * scale;
    (lo, hi)
}

pub(crate) fn check_step(step: u8) -> Result<()> {
    if (STEP_MIN..=STEP_MAX).contains(&step) {
        Ok(())
    } else {
        Err(GeoScoreError::InvalidStep(step))
    }
}

pub(crate) fn check_longitude(longitude: f64) -> Result<()> {
    if (LONG_MIN..=LONG_MAX).contains(&longitude) {
        Ok(())
    } else {
        Err(GeoScoreError::InvalidLongitude(longitude))
    }
}

pub(crate) fn check_latitude(latitude: f64) -> Result<()> {
    if (LAT_MIN..=LAT_MAX).contains(&latitude) {
        Ok(())
    } else {
        Err(GeoScoreError::InvalidLatitude(latitude))
    }
}
