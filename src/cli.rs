//! Command-line interface for tictactoe_td.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against an agent that teaches itself by self-play
#[derive(Parser, Debug)]
#[command(name = "tictactoe_td")]
#[command(about = "Train a tic-tac-toe agent by self-play, then play it", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every command
#[derive(Args, Debug, Clone)]
pub struct TrainingArgs {
    /// Path to a training config file (defaults are used when absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the number of self-play games
    #[arg(short, long)]
    pub games: Option<usize>,

    /// Override the master seed
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Train by self-play, then play against the first agent at the terminal
    Play {
        #[command(flatten)]
        training: TrainingArgs,

        /// Log the agent's candidate values and updates while playing
        #[arg(long)]
        show_values: bool,
    },

    /// Train by self-play, then report how the first agent fares against a fresh one
    Train {
        #[command(flatten)]
        training: TrainingArgs,

        /// Override the number of evaluation games
        #[arg(long)]
        eval_games: Option<usize>,
    },
}
