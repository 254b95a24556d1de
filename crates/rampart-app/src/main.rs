use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use rampart_app::game_loop::spawn_game_loop;
use rampart_app::logging;
use rampart_app::state::LoopOptions;
use rampart_core::commands::PlayerCommand;
use rampart_core::enums::{ScenarioId, SplashPolicy};
use rampart_sim::engine::{SimConfig, SimulationEngine};
use rampart_sim::scenario::Scenario;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Builtin {
    Skirmish,
    Siege,
}

impl From<Builtin> for ScenarioId {
    fn from(builtin: Builtin) -> Self {
        match builtin {
            Builtin::Skirmish => ScenarioId::Skirmish,
            Builtin::Siege => ScenarioId::Siege,
        }
    }
}

/// Headless tower-defense simulation runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario JSON file to load
    #[arg(short, long, conflicts_with = "builtin")]
    scenario: Option<PathBuf>,

    /// Built-in scenario to run when no file is given
    #[arg(short, long, value_enum, default_value_t = Builtin::Skirmish)]
    builtin: Builtin,

    /// Maximum number of frames to simulate
    #[arg(short, long, default_value_t = 3600)]
    frames: u64,

    /// Pace the simulation at the nominal frame rate
    #[arg(long)]
    realtime: bool,

    /// Apply splash damage to every enemy inside a projectile's splash radius
    #[arg(long)]
    area_damage: bool,

    /// Print the final snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => Scenario::builtin(args.builtin.into())
            .with_context(|| format!("invalid built-in scenario {:?}", args.builtin))?,
    };

    let mut config = SimConfig::new(scenario);
    if args.area_damage {
        config.splash_policy = Some(SplashPolicy::AreaDamage);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = load_config(&args)?;
    info!(
        "running '{}' for up to {} frames{}",
        config.scenario.name,
        args.frames,
        if args.realtime { " in real time" } else { "" }
    );

    let mut engine = SimulationEngine::new(config);
    // Queued before the first tick, so frame 0 is already active.
    engine.queue_command(PlayerCommand::StartMission);

    let options = LoopOptions {
        max_ticks: args.frames,
        realtime: args.realtime,
    };
    let handle =
        spawn_game_loop(engine, options, None).context("failed to spawn game loop thread")?;

    // The loop stops on disconnect, so the sender stays alive until join.
    let commands = handle.commands;
    let summary = handle
        .thread
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    drop(commands);

    if args.json {
        let json = serde_json::to_string_pretty(&summary.final_snapshot)
            .context("failed to serialize final snapshot")?;
        println!("{json}");
    } else {
        println!("phase:     {:?}", summary.phase);
        println!("frames:    {}", summary.frame);
        println!("gold:      {}", summary.gold);
        println!(
            "enemies:   {} killed / {} spawned / {} scheduled",
            summary.score.enemies_killed,
            summary.score.enemies_spawned,
            summary.score.enemies_total
        );
        println!("gold won:  {}", summary.score.gold_earned);
        println!("shots:     {}", summary.score.projectiles_fired);
    }

    Ok(())
}
