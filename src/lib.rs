//! # Holdem Odds
//!
//! `holdem_odds` estimates how often a two card Texas Hold'em hand beats a
//! single unknown opponent, given zero to five community cards.
//!
//! The crate is split into two parts:
//!
//! * `core` has cards, a deck that tracks used cards, and the hand
//!   evaluator that picks the best five card hand out of five to seven
//!   cards.
//! * `holdem` has the Monte Carlo engine. It deals random opponents and
//!   boards in batches, reports progress, and can be cancelled between
//!   batches.
//!
//! ## Evaluating hands
//!
//! ```
//! use holdem_odds::core::{Card, HandRank, evaluate_hand};
//!
//! let cards = Card::parse_many("2h2d8d8sKd6sTh").unwrap();
//! let best = evaluate_hand(&cards);
//! assert_eq!(HandRank::TwoPair, best.rank());
//! assert_eq!(8, best.primary_value());
//! assert_eq!(2, best.secondary_value());
//! ```
//!
//! ## Running a simulation
//!
//! ```
//! use holdem_odds::core::Card;
//! use holdem_odds::holdem::{CancellationToken, MonteCarloEngine, SimulationSettings};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let engine = MonteCarloEngine::new(SimulationSettings::default()).unwrap();
//! let player = Card::parse_many("JhJd").unwrap();
//! let board = Card::parse_many("Js7c2h").unwrap();
//! let token = CancellationToken::new();
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let outcome = engine
//!     .simulate(&player, &board, 10_000, &token, |progress| {
//!         assert!(progress <= 1.0);
//!     }, &mut rng)
//!     .unwrap();
//! let result = outcome.result().unwrap();
//! assert!(result.win_percentage() > 80.0);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// The holdem specific code. This contains the
/// Monte Carlo equity engine and its settings.
pub mod holdem;
