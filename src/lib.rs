#![doc = include_str!("../README.md")]

pub mod codec;
pub mod constants;
pub mod distance;
mod error;
pub mod neighbors;
pub mod radius;

pub use codec::{decode_score, encode_score, encode_scores, BoundingBox, GeoCode, ScoreRange};
pub use distance::{distance, distance_by_score};
pub use error::{GeoScoreError, Result};
pub use neighbors::{neighbors, NeighborSet};
pub use radius::{areas_by_radius, neighbor_ranges, RadiusQueryResult, ScoreRanges};
