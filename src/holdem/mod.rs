//! Heads-up Texas Hold'em equity by Monte Carlo simulation.

/// Errors for rejected requests and failed runs.
mod errors;
/// Export `ValidationError` and `SimulationError`
pub use self::errors::{Result, SimulationError, ValidationError};

/// Iteration bounds, batch size and parallelism.
mod settings;
/// Export `SimulationSettings` and its constants
pub use self::settings::{
    DEFAULT_BATCH_SIZE, DEFAULT_ITERATIONS, ESTIMATED_ITERATIONS_PER_SECOND, FAST_MODE_ITERATIONS,
    HIGH_PRECISION_MAX_ITERATIONS, MIN_ITERATIONS, STANDARD_MAX_ITERATIONS, SimulationSettings,
};

/// Shared flag used to stop a running simulation.
mod cancellation;
/// Export `CancellationToken`
pub use self::cancellation::CancellationToken;

/// Tallies, outcomes, and the run lifecycle.
mod result;
/// Export `SimulationResult`, `SimulationOutcome`, and `SimulationState`
pub use self::result::{SimulationOutcome, SimulationResult, SimulationState};

/// Module for `MonteCarloEngine` that deals out random opponents and boards.
mod monte_carlo;
/// Export `MonteCarloEngine`
pub use self::monte_carlo::{MonteCarloEngine, estimated_duration, validate_configuration};
