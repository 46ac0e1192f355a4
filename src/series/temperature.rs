//! Temperature series
//!
//! A growable, append-only sequence of validated readings with statistics
//! and threshold queries over the occupied prefix.

use crate::config::SeriesConfig;
use crate::error::{Result, SeriesError};
use crate::statistics;
use crate::storage::GrowableBuffer;
use crate::traits::{TemperatureStatistics, ThresholdFilter};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Append-only series of temperature readings
///
/// Every stored reading is at or above the configured floor
/// ([`MIN_TEMP`](crate::config::MIN_TEMP) by default). Storage doubles
/// lazily as readings arrive; see [`GrowableBuffer`] for the exact policy.
///
/// # Example
///
/// ```
/// use tempseries::prelude::*;
///
/// let mut series = TemperatureSeries::from_values(&[3.0, -5.0, 1.0]).unwrap();
/// assert_eq!(series.append(&[-8.0]).unwrap(), 4);
///
/// assert_eq!(series.average().unwrap(), -2.25);
/// assert_eq!(series.min().unwrap(), -8.0);
/// assert_eq!(series.find_temp_closest_to_zero().unwrap(), 1.0);
/// assert_eq!(series.find_temps_less_than(0.0).unwrap(), vec![-5.0, -8.0]);
///
/// let err = series.push(-300.0).unwrap_err();
/// assert!(err.is_invalid_temperature());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TemperatureSeries {
    /// Readings in append order
    readings: GrowableBuffer<f64>,
    /// Validation floor and tie tolerance
    config: SeriesConfig,
}

impl TemperatureSeries {
    /// Create an empty series with the default configuration
    pub fn new() -> Self {
        Self::with_config(SeriesConfig::default())
    }

    /// Create an empty series with a custom configuration
    pub fn with_config(config: SeriesConfig) -> Self {
        Self {
            readings: GrowableBuffer::new(),
            config,
        }
    }

    /// Create a series holding a copy of `values`
    ///
    /// Fails with [`SeriesError::InvalidTemperature`] if any value is below
    /// [`MIN_TEMP`](crate::config::MIN_TEMP). Nothing is kept on failure.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        Self::from_values_with_config(values, SeriesConfig::default())
    }

    /// Create a series holding a copy of `values` under a custom configuration
    ///
    /// All values are validated before any storage is allocated. Capacity
    /// equals `values.len()`.
    pub fn from_values_with_config(values: &[f64], config: SeriesConfig) -> Result<Self> {
        for &value in values {
            validate(&config, value)?;
        }

        Ok(Self {
            readings: GrowableBuffer::from_slice(values),
            config,
        })
    }

    /// Append readings in order, returning the new reading count
    ///
    /// Each value is validated and committed before the next is looked at.
    /// On the first invalid value the call fails with
    /// [`SeriesError::InvalidTemperature`]; readings committed earlier in the
    /// same call stay in the series.
    pub fn append(&mut self, values: &[f64]) -> Result<usize> {
        for &value in values {
            self.push(value)?;
        }
        Ok(self.readings.len())
    }

    /// Append a single reading, returning the new reading count
    pub fn push(&mut self, value: f64) -> Result<usize> {
        validate(&self.config, value)?;
        Ok(self.readings.push(value))
    }

    /// Number of readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Check if the series holds no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Number of allocated reading slots
    pub fn capacity(&self) -> usize {
        self.readings.capacity()
    }

    /// Readings in append order
    pub fn readings(&self) -> &[f64] {
        self.readings.as_slice()
    }

    /// Iterate over readings in append order
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.readings.iter()
    }

    /// Configuration this series validates against
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    fn non_empty(&self) -> Result<&[f64]> {
        if self.readings.is_empty() {
            Err(SeriesError::EmptySeries)
        } else {
            Ok(self.readings.as_slice())
        }
    }
}

fn validate(config: &SeriesConfig, value: f64) -> Result<()> {
    if config.accepts(value) {
        Ok(())
    } else {
        tracing::debug!(value, min = config.min_temp(), "rejected temperature reading");
        Err(SeriesError::InvalidTemperature {
            value,
            min: config.min_temp(),
        })
    }
}

impl TemperatureStatistics for TemperatureSeries {
    fn average(&self) -> Result<f64> {
        statistics::mean(self.non_empty()?).ok_or(SeriesError::EmptySeries)
    }

    fn deviation(&self) -> Result<f64> {
        statistics::population_std_dev(self.non_empty()?).ok_or(SeriesError::EmptySeries)
    }

    fn min(&self) -> Result<f64> {
        statistics::min_max(self.non_empty()?)
            .map(|(min, _)| min)
            .ok_or(SeriesError::EmptySeries)
    }

    fn max(&self) -> Result<f64> {
        statistics::min_max(self.non_empty()?)
            .map(|(_, max)| max)
            .ok_or(SeriesError::EmptySeries)
    }

    fn find_temp_closest_to_value(&self, target: f64) -> Result<f64> {
        statistics::closest_to(self.non_empty()?, target, self.config.tie_epsilon())
            .ok_or(SeriesError::EmptySeries)
    }
}

impl ThresholdFilter for TemperatureSeries {
    fn partition_at(&self, threshold: f64) -> Result<(Vec<f64>, Vec<f64>)> {
        Ok(statistics::partition(self.non_empty()?, threshold))
    }
}

impl TryFrom<&[f64]> for TemperatureSeries {
    type Error = SeriesError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_values(values)
    }
}

impl TryFrom<Vec<f64>> for TemperatureSeries {
    type Error = SeriesError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_values(&values)
    }
}

impl<'a> IntoIterator for &'a TemperatureSeries {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TemperatureSeries {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("TemperatureSeries", 3)?;
        state.serialize_field("min_temp", &self.config.min_temp())?;
        state.serialize_field("tie_epsilon", &self.config.tie_epsilon())?;
        state.serialize_field("readings", self.readings())?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TemperatureSeries {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct SeriesData {
            min_temp: f64,
            tie_epsilon: f64,
            readings: Vec<f64>,
        }

        let data = SeriesData::deserialize(deserializer)?;
        if data.min_temp.is_nan() {
            return Err(D::Error::custom("min_temp must not be NaN"));
        }
        if !(data.tie_epsilon.is_finite() && data.tie_epsilon >= 0.0) {
            return Err(D::Error::custom(
                "tie epsilon must be finite and non-negative",
            ));
        }

        let config = SeriesConfig::new(data.min_temp).with_tie_epsilon(data.tie_epsilon);
        TemperatureSeries::from_values_with_config(&data.readings, config).map_err(D::Error::custom)
    }
}
