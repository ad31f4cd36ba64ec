use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoScoreError {
    /// The step (bits of precision per axis) is outside `[1, 26]`.
    #[error("Invalid step {0}, expected a value in [1, 26]")]
    InvalidStep(u8),

    /// The longitude is not finite or is outside `[-180, 180]`.
    #[error("Invalid longitude {0}, expected a finite value in [-180, 180]")]
    InvalidLongitude(f64),

    /// The latitude is not finite or is outside the Mercator band.
    #[error("Invalid latitude {0}, expected a finite value in [-85.05112878, 85.05112878]")]
    InvalidLatitude(f64),

    /// The radius is negative or not finite.
    #[error("Invalid radius {0}, expected a finite, non-negative number of meters")]
    InvalidRadius(f64),

    /// The code has bits set above `2 * step`.
    #[error("Code bits {bits:#x} do not fit in step {step}")]
    CodeOutOfRange { bits: u64, step: u8 },

    /// The score does not fit in the 52-bit score space.
    #[error("Score {0} does not fit in 52 bits")]
    ScoreOutOfRange(u64),
}

pub type Result<T> = std::result::Result<T, GeoScoreError>;
