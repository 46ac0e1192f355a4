//! Series configuration
//!
//! The defaults reproduce the classic behaviour: readings may not drop below
//! absolute zero in Celsius (rounded to -273.0), and nearest-value ties are
//! judged within 1e-6.

/// Lowest accepted reading by default (absolute zero, Celsius)
pub const MIN_TEMP: f64 = -273.0;

/// Distance tolerance under which two candidates count as tied
pub const CLOSEST_EPSILON: f64 = 1e-6;

/// Validation floor and tie tolerance for a [`TemperatureSeries`](crate::series::TemperatureSeries)
///
/// # Example
///
/// ```
/// use tempseries::config::SeriesConfig;
///
/// // Kelvin readings: nothing below zero
/// let config = SeriesConfig::new(0.0).with_tie_epsilon(1e-9);
/// assert_eq!(config.min_temp(), 0.0);
/// assert_eq!(config.tie_epsilon(), 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesConfig {
    min_temp: f64,
    tie_epsilon: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            min_temp: MIN_TEMP,
            tie_epsilon: CLOSEST_EPSILON,
        }
    }
}

impl SeriesConfig {
    /// Create a configuration with a custom floor and the default tie epsilon
    ///
    /// # Panics
    ///
    /// Panics if `min_temp` is NaN
    pub fn new(min_temp: f64) -> Self {
        assert!(!min_temp.is_nan(), "min_temp must not be NaN");

        Self {
            min_temp,
            ..Self::default()
        }
    }

    /// Replace the tie tolerance used by nearest-value search
    ///
    /// # Panics
    ///
    /// Panics if `epsilon` is negative or not finite
    pub fn with_tie_epsilon(mut self, epsilon: f64) -> Self {
        assert!(
            epsilon.is_finite() && epsilon >= 0.0,
            "tie epsilon must be finite and non-negative"
        );
        self.tie_epsilon = epsilon;
        self
    }

    /// Lowest accepted reading
    pub fn min_temp(&self) -> f64 {
        self.min_temp
    }

    /// Tie tolerance for nearest-value search
    pub fn tie_epsilon(&self) -> f64 {
        self.tie_epsilon
    }

    /// Check whether a reading is acceptable under this floor
    ///
    /// NaN is never accepted.
    #[inline]
    pub fn accepts(&self, value: f64) -> bool {
        value >= self.min_temp
    }
}
