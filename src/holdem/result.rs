use std::time::Duration;

use super::errors::SimulationError;

/// Final tally of a completed simulation run.
///
/// `wins + ties + losses == total_simulations` always holds. Percentages
/// are derived on demand and are 0 for an empty result.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationResult {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
    pub total_simulations: u64,
    /// Wall clock time spent sampling, not counting validation.
    pub elapsed_time: Duration,
}

impl SimulationResult {
    fn percentage(&self, count: u64) -> f64 {
        if self.total_simulations == 0 {
            return 0.0;
        }
        (count as f64 / self.total_simulations as f64) * 100.0
    }

    /// Calculate win percentage (0.0 - 100.0)
    pub fn win_percentage(&self) -> f64 {
        self.percentage(self.wins)
    }

    /// Calculate tie percentage (0.0 - 100.0)
    pub fn tie_percentage(&self) -> f64 {
        self.percentage(self.ties)
    }

    /// Calculate loss percentage (0.0 - 100.0)
    pub fn loss_percentage(&self) -> f64 {
        self.percentage(self.losses)
    }

    /// Share of the pot won on average: wins plus half of the ties.
    pub fn equity(&self) -> f64 {
        self.win_percentage() + self.tie_percentage() / 2.0
    }
}

/// What a simulation that passed validation ended with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationOutcome {
    Completed(SimulationResult),
    /// The token fired at a batch boundary. Nothing from the finished
    /// batches is reported.
    Cancelled,
}

impl SimulationOutcome {
    /// The result, if the run completed.
    pub fn result(self) -> Option<SimulationResult> {
        match self {
            SimulationOutcome::Completed(result) => Some(result),
            SimulationOutcome::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SimulationOutcome::Cancelled)
    }
}

/// The lifecycle of a simulation as seen by whoever drives it.
///
/// ```text
/// Idle -> Running -> Completed | Cancelled | Error
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SimulationState {
    #[default]
    Idle,
    Running,
    Completed(SimulationResult),
    Cancelled,
    Error(String),
}

impl SimulationState {
    /// Move into `Running`. Any previous result is dropped.
    pub fn start(&mut self) {
        *self = SimulationState::Running;
    }

    /// Record how a run ended.
    pub fn finish(&mut self, outcome: std::result::Result<SimulationOutcome, SimulationError>) {
        *self = match outcome {
            Ok(SimulationOutcome::Completed(result)) => SimulationState::Completed(result),
            Ok(SimulationOutcome::Cancelled) => SimulationState::Cancelled,
            Err(e) => SimulationState::Error(e.to_string()),
        };
    }

    /// Go back to `Idle`, for example after the inputs changed.
    pub fn reset(&mut self) {
        *self = SimulationState::Idle;
    }

    pub fn is_running(&self) -> bool {
        matches!(self, SimulationState::Running)
    }

    pub fn result(&self) -> Option<&SimulationResult> {
        match self {
            SimulationState::Completed(result) => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::holdem::ValidationError;

    fn result(wins: u64, ties: u64, losses: u64) -> SimulationResult {
        SimulationResult {
            wins,
            ties,
            losses,
            total_simulations: wins + ties + losses,
            elapsed_time: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_percentages() {
        let r = result(600, 100, 300);
        assert_abs_diff_eq!(60.0, r.win_percentage(), epsilon = 1e-9);
        assert_abs_diff_eq!(10.0, r.tie_percentage(), epsilon = 1e-9);
        assert_abs_diff_eq!(30.0, r.loss_percentage(), epsilon = 1e-9);
        assert_abs_diff_eq!(65.0, r.equity(), epsilon = 1e-9);
    }

    #[test]
    fn test_empty_result_is_zero() {
        let r = SimulationResult::default();
        assert_eq!(0.0, r.win_percentage());
        assert_eq!(0.0, r.tie_percentage());
        assert_eq!(0.0, r.loss_percentage());
        assert_eq!(0.0, r.equity());
    }

    #[test]
    fn test_outcome_result() {
        let r = result(1, 0, 0);
        assert_eq!(Some(r), SimulationOutcome::Completed(r).result());
        assert_eq!(None, SimulationOutcome::Cancelled.result());
        assert!(SimulationOutcome::Cancelled.is_cancelled());
    }

    #[test]
    fn test_state_transitions() {
        let mut state = SimulationState::default();
        assert_eq!(SimulationState::Idle, state);

        state.start();
        assert!(state.is_running());

        let r = result(3, 1, 2);
        state.finish(Ok(SimulationOutcome::Completed(r)));
        assert_eq!(Some(&r), state.result());

        state.start();
        state.finish(Ok(SimulationOutcome::Cancelled));
        assert_eq!(SimulationState::Cancelled, state);
        assert_eq!(None, state.result());

        state.start();
        state.finish(Err(ValidationError::TooManyCommunityCards(6).into()));
        assert!(matches!(state, SimulationState::Error(ref msg) if msg.contains("6")));

        state.reset();
        assert_eq!(SimulationState::Idle, state);
    }
}
