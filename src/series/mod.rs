//! Temperature series container
//!
//! This module provides [`TemperatureSeries`], an append-only sequence of
//! validated readings answering statistics and threshold queries.
//!
//! # Example
//!
//! ```
//! use tempseries::prelude::*;
//!
//! let mut series = TemperatureSeries::new();
//!
//! // Stream in readings as they arrive
//! for reading in [21.5, 22.0, 19.5, 23.0] {
//!     series.push(reading).unwrap();
//! }
//!
//! let summary = series.summary_statistics().unwrap();
//! assert_eq!(summary.mean(), 21.5);
//! assert_eq!(summary.min(), 19.5);
//! assert_eq!(summary.max(), 23.0);
//!
//! // Queries on an empty series are errors, not defaults
//! assert!(TemperatureSeries::new().average().is_err());
//! ```

mod temperature;

pub use temperature::TemperatureSeries;
