use std::cmp::Ordering;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng, rngs::StdRng};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::{debug, event, instrument, trace};

use crate::core::{Card, CardBitSet, Deck, evaluate_hand};

use super::cancellation::CancellationToken;
use super::errors::{Result, SimulationError, ValidationError};
use super::result::{SimulationOutcome, SimulationResult};
use super::settings::{ESTIMATED_ITERATIONS_PER_SECOND, SimulationSettings};

/// Hole cards a player holds.
const HOLE_CARDS: usize = 2;
/// Cards on a complete board.
const BOARD_CARDS: usize = 5;

/// Check a request without running it.
///
/// The checks run in order and the first failure is returned: the player
/// must hold exactly two cards, there can be at most five community cards,
/// `iterations` must be within `min_iterations..=max_iterations`, and no
/// card may appear twice across the player and community cards.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::Card;
/// use holdem_odds::holdem::{ValidationError, validate_configuration};
///
/// let player = Card::parse_many("AsAh").unwrap();
/// let board = Card::parse_many("As7d2c").unwrap();
/// let err = validate_configuration(&player, &board, 10_000, 5_000, 100_000);
/// assert_eq!(Err(ValidationError::DuplicateCard("As".parse().unwrap())), err);
/// ```
pub fn validate_configuration(
    player_cards: &[Card],
    community_cards: &[Card],
    iterations: usize,
    min_iterations: usize,
    max_iterations: usize,
) -> std::result::Result<(), ValidationError> {
    if player_cards.len() != HOLE_CARDS {
        return Err(ValidationError::InvalidPlayerCardCount(player_cards.len()));
    }

    if community_cards.len() > BOARD_CARDS {
        return Err(ValidationError::TooManyCommunityCards(
            community_cards.len(),
        ));
    }

    SimulationSettings {
        min_iterations,
        max_iterations,
        ..SimulationSettings::default()
    }
    .check_iterations(iterations)?;

    let mut seen = CardBitSet::new();
    for card in player_cards.iter().chain(community_cards) {
        if !seen.insert(*card) {
            return Err(ValidationError::DuplicateCard(*card));
        }
    }

    Ok(())
}

/// Rough time a run of `iterations` will take. Only meant for display;
/// it assumes a fixed throughput and grows linearly.
pub fn estimated_duration(iterations: usize) -> Duration {
    Duration::from_secs_f64(iterations as f64 / ESTIMATED_ITERATIONS_PER_SECOND)
}

/// Running win/tie/loss counts. Partial tallies from different batches or
/// chunks are merged by adding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    wins: u64,
    ties: u64,
    losses: u64,
}

impl Tally {
    fn record(&mut self, outcome: Ordering) {
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.losses += 1,
        }
    }

    fn merge(self, other: Tally) -> Tally {
        Tally {
            wins: self.wins + other.wins,
            ties: self.ties + other.ties,
            losses: self.losses + other.losses,
        }
    }

    fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }
}

/// Deal out one showdown against a random opponent.
///
/// `known` already has the player and community cards marked as used and
/// is never changed; every hand is dealt from a copy. Returns how the
/// player's best hand compares to the opponent's.
fn play_hand<R: Rng>(
    known: &Deck,
    player_cards: &[Card],
    community_cards: &[Card],
    rng: &mut R,
) -> Result<Ordering> {
    let mut deck = known.copy();
    let opponent = deck.draw_random_cards(HOLE_CARDS, rng);
    let needed = BOARD_CARDS - community_cards.len();
    let runout = deck.draw_random_cards(needed, rng);

    if opponent.len() != HOLE_CARDS || runout.len() != needed {
        return Err(SimulationError::DeckExhausted {
            requested: HOLE_CARDS + needed,
            drawn: opponent.len() + runout.len(),
        });
    }

    let mut hand = [player_cards[0]; HOLE_CARDS + BOARD_CARDS];
    hand[HOLE_CARDS..HOLE_CARDS + community_cards.len()].copy_from_slice(community_cards);
    hand[HOLE_CARDS + community_cards.len()..].copy_from_slice(&runout);

    hand[..HOLE_CARDS].copy_from_slice(player_cards);
    let player_best = evaluate_hand(&hand);

    hand[..HOLE_CARDS].copy_from_slice(&opponent);
    let opponent_best = evaluate_hand(&hand);

    Ok(player_best.cmp(&opponent_best))
}

/// Play `iterations` hands with a generator seeded from `seed`.
fn run_chunk(
    known: &Deck,
    player_cards: &[Card],
    community_cards: &[Card],
    iterations: usize,
    seed: u64,
) -> Result<Tally> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tally = Tally::default();
    for _ in 0..iterations {
        tally.record(play_hand(known, player_cards, community_cards, &mut rng)?);
    }
    Ok(tally)
}

/// Split `iterations` into one chunk per seed, as evenly as possible.
fn chunk_sizes(iterations: usize, seeds: &[u64]) -> Vec<(usize, u64)> {
    let base = iterations / seeds.len();
    let extra = iterations % seeds.len();
    seeds
        .iter()
        .enumerate()
        .map(|(i, seed)| (base + usize::from(i < extra), *seed))
        .collect()
}

/// Estimates heads-up equity of a two card hand by dealing out random
/// opponents and boards.
///
/// The engine holds nothing but its settings. Each call to `simulate`
/// works on its own deck copies and counters.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::Card;
/// use holdem_odds::holdem::{CancellationToken, MonteCarloEngine, SimulationSettings};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let engine = MonteCarloEngine::new(SimulationSettings::default()).unwrap();
/// let player = Card::parse_many("AsAh").unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let outcome = engine
///     .simulate(&player, &[], 5_000, &CancellationToken::new(), |_| {}, &mut rng)
///     .unwrap();
/// let result = outcome.result().unwrap();
/// assert_eq!(5_000, result.total_simulations);
/// assert!(result.win_percentage() > 70.0);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloEngine {
    settings: SimulationSettings,
}

impl MonteCarloEngine {
    /// Create an engine. Fails if the settings are inconsistent.
    pub fn new(settings: SimulationSettings) -> std::result::Result<Self, ValidationError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// `validate_configuration` using this engine's iteration bounds.
    pub fn validate_configuration(
        &self,
        player_cards: &[Card],
        community_cards: &[Card],
        iterations: usize,
    ) -> std::result::Result<(), ValidationError> {
        validate_configuration(
            player_cards,
            community_cards,
            iterations,
            self.settings.min_iterations,
            self.settings.max_iterations,
        )
    }

    pub fn estimated_duration(&self, iterations: usize) -> Duration {
        estimated_duration(iterations)
    }

    /// Run the simulation.
    ///
    /// The request is validated first and nothing is sampled if that fails.
    /// Then iterations are played in batches of `batch_size`. Before every
    /// batch `token` is checked; when it has been cancelled the run stops
    /// and `SimulationOutcome::Cancelled` is returned, with no partial
    /// counts. After every batch `on_progress` gets the fraction of batches
    /// done. It never decreases and is 1.0 only once everything finished.
    ///
    /// All randomness comes from `rng`, so a seeded generator gives
    /// reproducible results for the same settings.
    #[instrument(
        level = "debug",
        skip_all,
        fields(iterations = iterations, community = community_cards.len())
    )]
    pub fn simulate<R, F>(
        &self,
        player_cards: &[Card],
        community_cards: &[Card],
        iterations: usize,
        token: &CancellationToken,
        mut on_progress: F,
        rng: &mut R,
    ) -> Result<SimulationOutcome>
    where
        R: Rng,
        F: FnMut(f64),
    {
        if let Err(e) = self.validate_configuration(player_cards, community_cards, iterations) {
            debug!(error = %e, "Rejecting simulation request");
            return Err(e.into());
        }

        let start = Instant::now();

        let mut known = Deck::new();
        known.mark_used_all(player_cards);
        known.mark_used_all(community_cards);

        let batch_size = self.settings.batch_size;
        let total_batches = self.settings.num_batches(iterations);

        event!(
            tracing::Level::INFO,
            iterations,
            total_batches,
            batch_size,
            parallelism = self.settings.parallelism,
            "Starting Monte Carlo simulation"
        );

        let mut tally = Tally::default();
        for batch_idx in 0..total_batches {
            if token.is_cancelled() {
                debug!(batch_idx, total_batches, "Simulation cancelled");
                return Ok(SimulationOutcome::Cancelled);
            }

            let this_batch = batch_size.min(iterations - batch_idx * batch_size);
            let batch =
                self.run_batch(&known, player_cards, community_cards, this_batch, &mut *rng)?;
            tally = tally.merge(batch);

            let progress = (batch_idx + 1) as f64 / total_batches as f64;
            trace!(batch_idx, progress, wins = tally.wins, "Finished batch");
            on_progress(progress);
        }

        if total_batches == 0 {
            on_progress(1.0);
        }

        let result = SimulationResult {
            wins: tally.wins,
            ties: tally.ties,
            losses: tally.losses,
            total_simulations: tally.total(),
            elapsed_time: start.elapsed(),
        };

        debug!(
            wins = result.wins,
            ties = result.ties,
            losses = result.losses,
            elapsed_ms = result.elapsed_time.as_millis() as u64,
            "Simulation complete"
        );

        Ok(SimulationOutcome::Completed(result))
    }

    /// Run with a fresh token, no progress reporting, and the thread local
    /// generator.
    pub fn simulate_default(
        &self,
        player_cards: &[Card],
        community_cards: &[Card],
        iterations: usize,
    ) -> Result<SimulationOutcome> {
        self.simulate(
            player_cards,
            community_cards,
            iterations,
            &CancellationToken::new(),
            |_| {},
            &mut rand::rng(),
        )
    }

    /// Play one batch split into up to `parallelism` chunks.
    ///
    /// Seeds are drawn from `rng` in chunk order before anything runs, so
    /// the tally doesn't depend on whether the chunks run in parallel.
    fn run_batch<R: Rng>(
        &self,
        known: &Deck,
        player_cards: &[Card],
        community_cards: &[Card],
        iterations: usize,
        rng: &mut R,
    ) -> Result<Tally> {
        let num_chunks = self.settings.parallelism.min(iterations).max(1);
        let seeds: Vec<u64> = (0..num_chunks).map(|_| rng.random()).collect();
        let chunks = chunk_sizes(iterations, &seeds);

        #[cfg(feature = "rayon")]
        let partials = chunks
            .par_iter()
            .map(|&(n, seed)| run_chunk(known, player_cards, community_cards, n, seed))
            .collect::<Result<Vec<Tally>>>()?;

        #[cfg(not(feature = "rayon"))]
        let partials = chunks
            .iter()
            .map(|&(n, seed)| run_chunk(known, player_cards, community_cards, n, seed))
            .collect::<Result<Vec<Tally>>>()?;

        Ok(partials.into_iter().fold(Tally::default(), Tally::merge))
    }
}
