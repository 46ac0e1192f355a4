//! Query traits for temperature series
//!
//! [`TemperatureStatistics`] covers the aggregate queries and
//! [`ThresholdFilter`] the partitioning ones. Composite queries have default
//! implementations built from the required methods.

use crate::error::Result;
use crate::statistics::SummaryStatistics;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Aggregate statistics over a series of readings
///
/// Every method fails with [`SeriesError::EmptySeries`](crate::error::SeriesError::EmptySeries)
/// when there are no readings.
pub trait TemperatureStatistics {
    /// Arithmetic mean of all readings
    fn average(&self) -> Result<f64>;

    /// Population standard deviation of all readings
    fn deviation(&self) -> Result<f64>;

    /// Smallest reading
    fn min(&self) -> Result<f64>;

    /// Largest reading
    fn max(&self) -> Result<f64>;

    /// Reading closest to `target`
    ///
    /// When readings tie on distance the later one wins, unless the tie is an
    /// exact match (distance zero) meeting an earlier exact match.
    fn find_temp_closest_to_value(&self, target: f64) -> Result<f64>;

    /// Reading closest to zero
    fn find_temp_closest_to_zero(&self) -> Result<f64> {
        self.find_temp_closest_to_value(0.0)
    }

    /// Mean, deviation, min and max, each computed independently
    fn summary_statistics(&self) -> Result<SummaryStatistics> {
        Ok(SummaryStatistics::new(
            self.average()?,
            self.deviation()?,
            self.min()?,
            self.max()?,
        ))
    }
}

/// Threshold partitioning of a series
///
/// Readings strictly below the threshold fall on the "less" side, everything
/// else on the "greater" side. Results are owned copies in reading order.
pub trait ThresholdFilter {
    /// Both sides at once: `(less, greater_or_equal)`
    fn partition_at(&self, threshold: f64) -> Result<(Vec<f64>, Vec<f64>)>;

    /// Readings strictly below `threshold`
    fn find_temps_less_than(&self, threshold: f64) -> Result<Vec<f64>> {
        self.partition_at(threshold).map(|(less, _)| less)
    }

    /// Readings at or above `threshold`
    fn find_temps_greater_than(&self, threshold: f64) -> Result<Vec<f64>> {
        self.partition_at(threshold).map(|(_, greater)| greater)
    }
}
