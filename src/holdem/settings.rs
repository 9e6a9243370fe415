use super::errors::ValidationError;

/// The smallest number of iterations accepted by the default settings.
pub const MIN_ITERATIONS: usize = 5_000;
/// Upper bound for the standard settings.
pub const STANDARD_MAX_ITERATIONS: usize = 100_000;
/// Upper bound for the high precision settings.
pub const HIGH_PRECISION_MAX_ITERATIONS: usize = 200_000;
/// A reasonable iteration count when the caller has no preference.
pub const DEFAULT_ITERATIONS: usize = 20_000;
/// Iteration count for a quick, rougher answer.
pub const FAST_MODE_ITERATIONS: usize = 8_000;
/// Iterations between cancellation checks and progress reports.
pub const DEFAULT_BATCH_SIZE: usize = 1_000;
/// Throughput assumed by `estimated_duration`.
pub const ESTIMATED_ITERATIONS_PER_SECOND: f64 = 50_000.0;

/// Configuration for running Monte Carlo simulations.
///
/// None of these values are read from globals; every engine is built from
/// an explicit settings value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    /// Smallest accepted iteration count, inclusive.
    pub min_iterations: usize,
    /// Largest accepted iteration count, inclusive.
    pub max_iterations: usize,
    /// Iterations per batch.
    pub batch_size: usize,
    /// Number of independent chunks each batch is split into. Every chunk
    /// gets its own random generator, and with the `rayon` feature the
    /// chunks run in parallel.
    pub parallelism: usize,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self::standard()
    }
}

impl SimulationSettings {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// 5,000 to 100,000 iterations in batches of 1,000.
    pub const fn standard() -> Self {
        Self {
            min_iterations: MIN_ITERATIONS,
            max_iterations: STANDARD_MAX_ITERATIONS,
            batch_size: DEFAULT_BATCH_SIZE,
            parallelism: 1,
        }
    }

    /// Same as `standard` but allows up to 200,000 iterations.
    pub const fn high_precision() -> Self {
        Self {
            max_iterations: HIGH_PRECISION_MAX_ITERATIONS,
            ..Self::standard()
        }
    }

    /// Use `parallelism` chunks per batch.
    pub const fn with_parallelism(self, parallelism: usize) -> Self {
        Self {
            parallelism,
            ..self
        }
    }

    /// Validate the settings themselves, independent of any request.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_iterations > self.max_iterations {
            return Err(ValidationError::InvalidSettings(format!(
                "min_iterations ({}) cannot exceed max_iterations ({})",
                self.min_iterations, self.max_iterations
            )));
        }

        if self.batch_size == 0 {
            return Err(ValidationError::InvalidSettings(
                "batch_size must be greater than 0".to_string(),
            ));
        }

        if self.parallelism == 0 {
            return Err(ValidationError::InvalidSettings(
                "parallelism must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Check that an iteration count is within bounds.
    pub fn check_iterations(&self, iterations: usize) -> Result<(), ValidationError> {
        if iterations < self.min_iterations {
            return Err(ValidationError::IterationsBelowMinimum {
                iterations,
                min: self.min_iterations,
            });
        }
        if iterations > self.max_iterations {
            return Err(ValidationError::IterationsAboveMaximum {
                iterations,
                max: self.max_iterations,
            });
        }
        Ok(())
    }

    /// Pull a requested iteration count into bounds.
    pub fn clamp_iterations(&self, iterations: usize) -> usize {
        iterations.clamp(self.min_iterations, self.max_iterations.max(self.min_iterations))
    }

    /// Number of batches needed for `iterations`, counting a final partial one.
    pub fn num_batches(&self, iterations: usize) -> usize {
        iterations.div_ceil(self.batch_size.max(1))
    }
}
