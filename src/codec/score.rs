use std::ops::Range;

/// A half-open range `[min, max)` of 52-bit scores.
///
/// Ranges produced from codes of different steps live on the same axis and compare uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ScoreRange {
    pub min: u64,
    pub max: u64,
}

impl ScoreRange {
    /// Whether a stored score falls inside this range.
    #[inline]
    pub fn contains(&self, score: u64) -> bool {
        score >= self.min && score < self.max
    }

    /// This range as a [`Range`], e.g. for `BTreeMap::range`.
    #[inline]
    pub fn as_range(&self) -> Range<u64> {
        self.min..self.max
    }
}

impl From<ScoreRange> for (u64, u64) {
    fn from(value: ScoreRange) -> Self {
        (value.min, value.max)
    }
}
