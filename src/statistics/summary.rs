//! Summary statistics value object

use core::fmt;
use core::hash::{Hash, Hasher};

/// Immutable `{mean, std_dev, min, max}` summary of a series
///
/// Equality and hashing work on a canonical bit pattern of each field:
/// `-0.0` and `0.0` compare equal, and all NaNs compare equal to each other.
/// That makes the type usable as a map key. Use [`approx_eq`](Self::approx_eq)
/// to compare computed results against expected values.
///
/// # Example
///
/// ```
/// use tempseries::statistics::SummaryStatistics;
///
/// let summary = SummaryStatistics::new(-2.25, 4.437059837324712, -8.0, 3.0);
/// let expected = SummaryStatistics::new(-2.25, 4.4370598373, -8.0, 3.0);
///
/// assert_ne!(summary, expected);
/// assert!(summary.approx_eq(&expected, 1e-9));
/// assert_eq!(summary.range(), 11.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SummaryStatistics {
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
}

impl SummaryStatistics {
    /// Create a summary from its four components
    pub fn new(mean: f64, std_dev: f64, min: f64, max: f64) -> Self {
        Self {
            mean,
            std_dev,
            min,
            max,
        }
    }

    /// Arithmetic mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Smallest reading
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest reading
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Spread between the largest and smallest reading
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Compare field by field within an absolute tolerance
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        let close = |a: f64, b: f64| a == b || crate::math::abs(a - b) <= tolerance;

        close(self.mean, other.mean)
            && close(self.std_dev, other.std_dev)
            && close(self.min, other.min)
            && close(self.max, other.max)
    }

    fn key(&self) -> [u64; 4] {
        [
            canonical_bits(self.mean),
            canonical_bits(self.std_dev),
            canonical_bits(self.min),
            canonical_bits(self.max),
        ]
    }
}

fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl PartialEq for SummaryStatistics {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SummaryStatistics {}

impl Hash for SummaryStatistics {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean={} std_dev={} min={} max={}",
            self.mean, self.std_dev, self.min, self.max
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SummaryStatistics {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SummaryStatistics", 4)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("std_dev", &self.std_dev)?;
        state.serialize_field("min", &self.min)?;
        state.serialize_field("max", &self.max)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SummaryStatistics {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct SummaryData {
            mean: f64,
            std_dev: f64,
            min: f64,
            max: f64,
        }

        let data = SummaryData::deserialize(deserializer)?;
        Ok(SummaryStatistics::new(
            data.mean,
            data.std_dev,
            data.min,
            data.max,
        ))
    }
}
