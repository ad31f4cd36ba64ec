//! Encoding of longitude/latitude pairs into interleaved geocodes and back.

mod area;
mod code;
pub mod interleave;
mod score;

pub use area::BoundingBox;
pub use code::{decode_score, encode_score, encode_scores, GeoCode};
pub(crate) use code::{check_latitude, check_longitude};
pub use score::ScoreRange;
