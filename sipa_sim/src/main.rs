//! Headless Sipa match runner: drives the simulation with two autopilots
//! and prints a summary.
//!
//! Usage:
//!   cargo run -p sipa_sim -- --mode versus --seed 7
//!   RUST_LOG=sipa_core=debug cargo run -p sipa_sim -- --mode practice --frames 3600

mod autopilot;
mod runner;
mod settings;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use sipa_core::{CharacterSelection, Difficulty, GameMode};

use crate::runner::{run, MatchSetup, RunSummary};

#[derive(Parser, Debug)]
#[command(name = "sipa-sim")]
#[command(about = "Simulate a Sipa/Takyan match headlessly")]
struct Args {
    /// practice or versus
    #[arg(long, default_value = "versus")]
    mode: String,

    /// easy, medium or hard (practice only)
    #[arg(long, default_value = "medium")]
    difficulty: String,

    #[arg(long, default_value_t = 1)]
    p1_character: u8,

    #[arg(long, default_value_t = 1)]
    p2_character: u8,

    /// Stop after this many frames if nobody has won
    #[arg(long, default_value_t = 36_000)]
    frames: u32,

    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// JSON file overriding GameConfig fields
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    ball_speed: Option<f32>,

    #[arg(long)]
    gravity: Option<f32>,

    #[arg(long)]
    player_speed: Option<f32>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    if args.fps.is_nan() || args.fps <= 0.0 {
        bail!("fps must be > 0, got {}", args.fps);
    }

    let config = settings::load_config(args.config.as_deref())?;
    let setup = MatchSetup {
        config,
        mode: GameMode::from_label(&args.mode),
        difficulty: Difficulty::from_label(&args.difficulty),
        characters: CharacterSelection {
            player1: args.p1_character,
            player2: args.p2_character,
        },
        custom: settings::custom_multipliers(args.ball_speed, args.gravity, args.player_speed),
        seed: args.seed,
    };

    tracing::info!(
        "starting match: mode={:?} difficulty={} seed={} max_frames={}",
        setup.mode,
        setup.difficulty.label(),
        setup.seed,
        args.frames
    );
    let summary = run(setup, args.frames, args.fps);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!("=== MATCH SUMMARY ===");
    println!("  Mode:       {:?} ({})", summary.mode, summary.difficulty.label());
    println!("  Seed:       {}", summary.seed);
    println!(
        "  Frames:     {} ({:.1}s)",
        summary.frames, summary.elapsed_secs
    );
    println!(
        "  Score:      {} - {}",
        summary.player1_score, summary.player2_score
    );
    match summary.winner {
        Some(winner) => println!("  Winner:     {winner:?}"),
        None => println!("  Winner:     none"),
    }
    println!("  Kicks:      {}", summary.kicks);
    println!("  Max rally:  {}", summary.max_rally);
    println!("  Drops:      {}", summary.drops);
    if let Some(best) = summary.best_streak {
        println!("  Best streak: {best}");
    }
}
