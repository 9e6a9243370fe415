mod common;

use std::io::Write;

use clap::Parser;
use holdem_odds::core::Card;
use holdem_odds::holdem::{
    CancellationToken, DEFAULT_ITERATIONS, FAST_MODE_ITERATIONS, MonteCarloEngine,
    SimulationSettings, SimulationState,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Estimate heads-up equity of a Texas Hold'em hand",
    long_about = "Run a Monte Carlo simulation of a two card hand against one random \
                  opponent.\nCards are written like 'As', 'Td' or '10h'."
)]
struct Args {
    #[command(flatten)]
    tracing: common::TracingArgs,

    /// The player's hole cards (e.g., "AsKs")
    hand: String,

    /// Community cards already dealt (e.g., "Jh7c2d")
    #[arg(short, long, default_value = "")]
    board: String,

    /// Number of iterations to run
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Use the smaller fast-mode iteration count when -n isn't given
    #[arg(long)]
    fast: bool,

    /// Allow up to 200,000 iterations
    #[arg(long)]
    high_precision: bool,

    /// Number of chunks each batch is split across
    #[arg(short = 'j', long, default_value_t = 1)]
    parallelism: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.tracing.init_tracing();

    let player = Card::parse_many(&args.hand)?;
    let board = Card::parse_many(&args.board)?;

    let base = if args.high_precision {
        SimulationSettings::high_precision()
    } else {
        SimulationSettings::standard()
    };
    let settings = base.with_parallelism(args.parallelism);
    let engine = MonteCarloEngine::new(settings)?;

    let requested = args.iterations.unwrap_or(if args.fast {
        FAST_MODE_ITERATIONS
    } else {
        DEFAULT_ITERATIONS
    });
    let iterations = settings.clamp_iterations(requested);
    if iterations != requested {
        info!(requested, iterations, "Clamped iteration count");
    }

    // Pre-flight so bad input is reported before anything starts.
    engine.validate_configuration(&player, &board, iterations)?;
    println!(
        "Simulating {} iterations (about {:.1}s)...",
        iterations,
        engine.estimated_duration(iterations).as_secs_f64()
    );

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let token = CancellationToken::new();

    let mut state = SimulationState::default();
    state.start();
    let outcome = engine.simulate(
        &player,
        &board,
        iterations,
        &token,
        |progress| {
            print!("\rProgress: {:>5.1}%", progress * 100.0);
            let _ = std::io::stdout().flush();
        },
        &mut rng,
    );
    println!();
    state.finish(outcome);

    match &state {
        SimulationState::Completed(result) => {
            println!("Seed:   {seed}");
            println!("Wins:   {} ({:.2}%)", result.wins, result.win_percentage());
            println!("Ties:   {} ({:.2}%)", result.ties, result.tie_percentage());
            println!("Losses: {} ({:.2}%)", result.losses, result.loss_percentage());
            println!("Equity: {:.2}%", result.equity());
            println!("Time:   {:.3}s", result.elapsed_time.as_secs_f64());
        }
        SimulationState::Cancelled => println!("Cancelled"),
        SimulationState::Error(msg) => return Err(msg.clone().into()),
        SimulationState::Idle | SimulationState::Running => {}
    }

    Ok(())
}
