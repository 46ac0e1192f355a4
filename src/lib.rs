//! # Tempseries
//!
//! In-memory temperature series with descriptive statistics and threshold
//! filtering.
//!
//! Tempseries keeps an append-only sequence of validated readings in
//! explicitly managed, lazily doubling storage and answers queries over it.
//!
//! ## Features
//!
//! - **Validated ingestion**: readings below absolute zero (-273.0) are rejected
//! - **Amortized growth**: capacity doubles only when the next slot is missing
//! - **Descriptive statistics**: mean, population standard deviation, min, max
//! - **Nearest value**: reading closest to a target, with a stable tie-break
//! - **Threshold filtering**: order-preserving split below / at-or-above a value
//!
//! ## Quick Start
//!
//! ```rust
//! use tempseries::prelude::*;
//!
//! let series = TemperatureSeries::from_values(&[3.0, -5.0, 1.0, -8.0]).unwrap();
//!
//! let summary = series.summary_statistics().unwrap();
//! println!("{}", summary);
//!
//! assert_eq!(summary.mean(), -2.25);
//! assert_eq!(series.find_temps_greater_than(12.0).unwrap(), Vec::<f64>::new());
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns [`Result`](error::Result) with one of two
//! [`SeriesError`] kinds:
//!
//! ```rust
//! use tempseries::prelude::*;
//!
//! let err = TemperatureSeries::from_values(&[-3.0, 2.0, -284.0]).unwrap_err();
//! assert!(err.is_invalid_temperature());
//!
//! let err = TemperatureSeries::new().deviation().unwrap_err();
//! assert!(err.is_empty_series());
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it the crate is
//!   `no_std` + `alloc` and uses `libm` for math
//! - `serde`: Enable serialization of series and summaries
//!
//! ## Logging
//!
//! Storage growth and rejected readings are reported as `tracing` events at
//! `TRACE` and `DEBUG` level. No subscriber is installed by this crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod config;
pub mod error;
mod math;
pub mod series;
pub mod statistics;
pub mod storage;
pub mod traits;

pub mod prelude {
    pub use crate::config::{SeriesConfig, CLOSEST_EPSILON, MIN_TEMP};
    pub use crate::error::SeriesError;
    pub use crate::series::TemperatureSeries;
    pub use crate::statistics::SummaryStatistics;
    pub use crate::traits::*;
}

pub use error::SeriesError;
pub use series::TemperatureSeries;
pub use statistics::SummaryStatistics;
