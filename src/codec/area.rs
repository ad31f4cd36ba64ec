/// A longitude/latitude rectangle.
///
/// This is both the cell covered by a [`GeoCode`](crate::GeoCode) and the spherical search box a
/// radius query is pruned against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl BoundingBox {
    /// Create a new box from its four edges.
    pub fn new(lon_min: f64, lon_max: f64, lat_min: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lon_max,
            lat_min,
            lat_max,
        }
    }

    /// Whether the point lies inside the box. Edges are inclusive.
    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        longitude >= self.lon_min
            && longitude <= self.lon_max
            && latitude >= self.lat_min
            && latitude <= self.lat_max
    }

    /// The centroid of the box as `(longitude, latitude)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.lon_min + self.lon_max) / 2.0,
            (self.lat_min + self.lat_max) / 2.0,
        )
    }

    /// Extent along the longitude axis, in degrees.
    pub fn width(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Extent along the latitude axis, in degrees.
    pub fn height(&self) -> f64 {
        self.lat_max - self.lat_min
    }
}

#[cfg(feature = "use-geo_0_31")]
mod geo_interop {
    use geo_0_31::{coord, Point, Rect};

    use super::BoundingBox;

    impl From<BoundingBox> for Rect<f64> {
        fn from(value: BoundingBox) -> Self {
            Rect::new(
                coord! { x: value.lon_min, y: value.lat_min },
                coord! { x: value.lon_max, y: value.lat_max },
            )
        }
    }

    impl BoundingBox {
        /// The centroid of the box as a [`Point`].
        pub fn center_point(&self) -> Point<f64> {
            let (x, y) = self.center();
            Point::new(x, y)
        }
    }
}
