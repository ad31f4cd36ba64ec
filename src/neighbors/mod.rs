//! The eight grid cells adjacent to a geocode.
//!
//! Moving along an axis is plain integer arithmetic on that axis's bits of the interleaved code.
//! The arithmetic is confined to the `2 * step` low bits, so stepping off one edge of the grid
//! wraps around to the opposite edge. Near the antimeridian and the poles a "neighbor" can
//! therefore be on the far side of the map rather than adjacent on the globe.

use crate::codec::interleave::{EVEN_BITS, ODD_BITS};
use crate::codec::GeoCode;

/// One of the two interleaved coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Even bit positions. Moving up is north.
    Latitude,
    /// Odd bit positions. Moving up is east.
    Longitude,
}

impl Axis {
    #[inline]
    fn mask(self) -> u64 {
        match self {
            Axis::Latitude => EVEN_BITS,
            Axis::Longitude => ODD_BITS,
        }
    }

    #[inline]
    fn other(self) -> Axis {
        match self {
            Axis::Latitude => Axis::Longitude,
            Axis::Longitude => Axis::Latitude,
        }
    }
}

/// Move `code` one cell along `axis`.
///
/// Only the sign of `delta` matters: positive moves north/east, negative moves south/west, zero
/// returns the code unchanged. The returned code has the same step as the input.
pub fn move_axis(code: GeoCode, axis: Axis, delta: i8) -> GeoCode {
    if delta == 0 {
        return code;
    }

    let width = 64 - 2 * code.step() as u32;
    let moving = code.bits() & axis.mask();
    let fixed = code.bits() & axis.other().mask();

    // Filling the other axis's positions with ones lets a carry (or borrow) ripple straight
    // through them to the next bit of the moving axis.
    let filler = axis.other().mask() >> width;
    let moved = if delta > 0 {
        moving.wrapping_add(filler + 1)
    } else {
        (moving | filler).wrapping_sub(filler + 1)
    };

    GeoCode::new_unchecked((moved & (axis.mask() >> width)) | fixed, code.step())
}

/// The eight cells around a code. `None` marks a cell that has been pruned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborSet {
    pub north: Option<GeoCode>,
    pub south: Option<GeoCode>,
    pub east: Option<GeoCode>,
    pub west: Option<GeoCode>,
    pub north_east: Option<GeoCode>,
    pub north_west: Option<GeoCode>,
    pub south_east: Option<GeoCode>,
    pub south_west: Option<GeoCode>,
}

impl NeighborSet {
    /// The present neighbors in emission order: north, east, west, south, north-east, south-east,
    /// north-west, south-west.
    pub fn iter(&self) -> impl Iterator<Item = GeoCode> {
        [
            self.north,
            self.east,
            self.west,
            self.south,
            self.north_east,
            self.south_east,
            self.north_west,
            self.south_west,
        ]
        .into_iter()
        .flatten()
    }

    /// Number of neighbors that have not been pruned.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether every neighbor has been pruned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the southern row.
    pub(crate) fn prune_south(&mut self) {
        self.south = None;
        self.south_east = None;
        self.south_west = None;
    }

    /// Drop the northern row.
    pub(crate) fn prune_north(&mut self) {
        self.north = None;
        self.north_east = None;
        self.north_west = None;
    }

    /// Drop the eastern column.
    pub(crate) fn prune_east(&mut self) {
        self.east = None;
        self.north_east = None;
        self.south_east = None;
    }

    /// Drop the western column.
    pub(crate) fn prune_west(&mut self) {
        self.west = None;
        self.north_west = None;
        self.south_west = None;
    }
}

/// All eight neighbors of `code`, at the same step.
///
/// ```
/// use geo_score::GeoCode;
/// use geo_score::neighbors::neighbors;
///
/// let code = GeoCode::new(6, 2).unwrap();
/// let around = neighbors(code);
/// assert_eq!(around.north.map(|c| c.bits()), Some(7));
/// assert_eq!(around.east.map(|c| c.bits()), Some(12));
/// ```
pub fn neighbors(code: GeoCode) -> NeighborSet {
    let shift = |lon: i8, lat: i8| {
        let moved = move_axis(code, Axis::Longitude, lon);
        Some(move_axis(moved, Axis::Latitude, lat))
    };

    NeighborSet {
        north: shift(0, 1),
        south: shift(0, -1),
        east: shift(1, 0),
        west: shift(-1, 0),
        north_east: shift(1, 1),
        north_west: shift(-1, 1),
        south_east: shift(1, -1),
        south_west: shift(-1, -1),
    }
}

#[cfg(test)]
mod test;
