//! Descriptive statistics for temperature readings
//!
//! This module provides the slice algorithms behind every series query and
//! the [`SummaryStatistics`] value they are bundled into.
//!
//! # Example
//!
//! ```
//! use tempseries::statistics::{self, SummaryStatistics};
//!
//! let readings = [3.0, -5.0, 1.0, -8.0];
//!
//! let mean = statistics::mean(&readings).unwrap();
//! let std_dev = statistics::population_std_dev(&readings).unwrap();
//! let (min, max) = statistics::min_max(&readings).unwrap();
//!
//! let summary = SummaryStatistics::new(mean, std_dev, min, max);
//! assert_eq!(summary.mean(), -2.25);
//! assert_eq!(summary.range(), 11.0);
//! ```

mod descriptive;
mod summary;

pub use descriptive::{closest_to, mean, min_max, partition, population_std_dev};
pub use summary::SummaryStatistics;
