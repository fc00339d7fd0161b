//! tictactoe_td - self-play training and human play
//!
//! Trains a roster of learning agents against each other, then either plays
//! the first agent against a human at the terminal or reports how it fares
//! against an untrained opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, TrainingArgs};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use tictactoe_td::{
    Controller, HumanPlayer, LearningAgent, MatchError, Participant, TracingObserver,
    TrainingConfig, evaluate, self_play,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            training,
            show_values,
        } => run_play(&training, show_values),
        Command::Train {
            training,
            eval_games,
        } => run_train(&training, eval_games),
    }
}

/// Loads the config file (or defaults) and applies command-line overrides.
#[instrument(skip_all)]
fn load_config(args: &TrainingArgs) -> Result<TrainingConfig> {
    let mut config = match &args.config {
        Some(path) => TrainingConfig::from_file(path)?,
        None => {
            info!("No config file given, using defaults");
            TrainingConfig::default()
        }
    };
    if let Some(games) = args.games {
        config = config.with_self_play_games(games);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}

fn master_rng(config: &TrainingConfig) -> StdRng {
    match *config.seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Builds the roster and runs the configured number of self-play games.
#[instrument(skip_all, fields(games = config.self_play_games()))]
fn train(config: &TrainingConfig, rng: &mut StdRng) -> Result<Vec<LearningAgent>> {
    let mut roster = config.build_agents();
    info!(agents = roster.len(), "Starting self-play");

    let tally = self_play(&mut roster, *config.self_play_games(), rng)?;
    for (i, agent) in roster.iter().enumerate() {
        info!(
            agent = agent.name(),
            wins = tally.wins(i),
            losses = tally.losses(i),
            states = agent.values().len(),
            "Agent trained"
        );
    }
    info!(draws = tally.draws(), "Self-play finished");
    Ok(roster)
}

/// Trains, then plays the first agent against the terminal until input closes.
fn run_play(args: &TrainingArgs, show_values: bool) -> Result<()> {
    let config = load_config(args)?;
    let mut rng = master_rng(&config);
    let mut roster = train(&config, &mut rng)?;
    let mut agent = roster.swap_remove(0);
    if show_values {
        agent.set_observer(Some(Box::new(TracingObserver)));
    }

    let mut human = HumanPlayer::stdio("human");
    let mut controller = Controller::new(&mut agent, &mut human, &mut rng);
    loop {
        match controller.run_match() {
            Ok(outcome) => info!(?outcome, "Match finished"),
            Err(MatchError::NoMove { .. }) => {
                info!("Human left, goodbye");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Trains, then evaluates the first agent greedily against an untrained one.
fn run_train(args: &TrainingArgs, eval_games: Option<usize>) -> Result<()> {
    let mut config = load_config(args)?;
    if let Some(games) = eval_games {
        config = config.with_evaluation_games(games);
    }
    let mut rng = master_rng(&config);
    let mut roster = train(&config, &mut rng)?;

    let mut candidate = roster.swap_remove(0).with_exploration(0.0);
    let mut opponent = LearningAgent::seeded("untrained", 0.5, rng.random::<u64>())
        .with_exploration(0.0);
    let games = *config.evaluation_games();
    let tally = evaluate(&mut candidate, &mut opponent, games, &mut rng)?;

    println!(
        "{} vs {} over {} games: {} won, {} drawn, {} lost ({:.1}% not lost)",
        candidate.name(),
        opponent.name(),
        tally.games(),
        tally.wins(0),
        tally.draws(),
        tally.losses(0),
        tally.non_loss_rate(0) * 100.0
    );
    Ok(())
}

