//! Error types for temperature series operations

use thiserror::Error;

/// Result type alias for series operations
pub type Result<T> = core::result::Result<T, SeriesError>;

/// Errors reported by [`TemperatureSeries`](crate::series::TemperatureSeries)
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SeriesError {
    /// A reading fell below the series floor (or was NaN)
    #[error("invalid temperature {value}: below minimum {min}")]
    InvalidTemperature { value: f64, min: f64 },

    /// A statistic or query was requested on a series with no readings
    #[error("series is empty")]
    EmptySeries,
}

impl SeriesError {
    /// Whether this is an [`SeriesError::InvalidTemperature`]
    pub fn is_invalid_temperature(&self) -> bool {
        matches!(self, SeriesError::InvalidTemperature { .. })
    }

    /// Whether this is an [`SeriesError::EmptySeries`]
    pub fn is_empty_series(&self) -> bool {
        matches!(self, SeriesError::EmptySeries)
    }
}
