//! Game loop thread: runs the simulation engine and streams snapshots.
//!
//! The engine is moved into this thread so it has a single owner. Commands
//! arrive over an `mpsc` channel; snapshots leave over another.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use rampart_core::constants::TICK_RATE;
use rampart_core::state::GameStateSnapshot;
use rampart_sim::engine::SimulationEngine;

use crate::state::{GameLoopCommand, LoopOptions, RunSummary};

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Handles to a running game loop.
pub struct GameLoopHandle {
    pub commands: mpsc::Sender<GameLoopCommand>,
    pub thread: JoinHandle<RunSummary>,
}

/// Spawns the game loop in a new thread.
///
/// Every snapshot is sent to `snapshot_tx` when given; a dropped receiver is
/// ignored.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    options: LoopOptions,
    snapshot_tx: Option<mpsc::Sender<GameStateSnapshot>>,
) -> io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("rampart-game-loop".into())
        .spawn(move || run_game_loop(engine, &cmd_rx, options, snapshot_tx.as_ref()))?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until game over, the tick limit, a Shutdown command,
/// or channel disconnect.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    options: LoopOptions,
    snapshot_tx: Option<&mpsc::Sender<GameStateSnapshot>>,
) -> RunSummary {
    let mut next_tick_time = Instant::now();
    let mut ticks = 0;
    let mut last = engine.snapshot();

    while ticks < options.max_ticks {
        // 1. Drain all pending commands
        let mut shutdown = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    shutdown = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }
        if shutdown {
            debug!("game loop shutting down after {ticks} ticks");
            break;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        ticks += 1;

        if ticks % u64::from(TICK_RATE * 10) == 0 {
            info!(
                "frame {}: {} enemies, {} gold, {}/{} killed",
                snapshot.clock.frame,
                snapshot.enemies.len(),
                snapshot.gold,
                snapshot.score.enemies_killed,
                snapshot.score.enemies_total
            );
        }

        // 3. Stream the snapshot
        if let Some(tx) = snapshot_tx {
            let _ = tx.send(snapshot.clone());
        }

        let over = snapshot.phase.is_over();
        last = snapshot;
        if over {
            break;
        }

        // 4. Sleep until the next tick
        if options.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind: reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }

    RunSummary::from_snapshot(ticks, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::commands::PlayerCommand;
    use rampart_core::enums::{GamePhase, ScenarioId};
    use rampart_sim::engine::SimConfig;

    fn skirmish() -> SimulationEngine {
        SimulationEngine::new(SimConfig::builtin(ScenarioId::Skirmish).unwrap())
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartMission))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartMission)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_stops_at_tick_limit() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartMission))
            .unwrap();
        let options = LoopOptions {
            max_ticks: 120,
            realtime: false,
        };

        let summary = run_game_loop(skirmish(), &rx, options, None);
        assert_eq!(summary.ticks, 120);
        assert_eq!(summary.frame, 120);
        assert_eq!(summary.phase, GamePhase::Active);
        assert!(summary.score.enemies_spawned >= 2);
    }

    #[test]
    fn test_loop_streams_every_snapshot() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (snap_tx, snap_rx) = mpsc::channel();
        cmd_tx
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartMission))
            .unwrap();
        let options = LoopOptions {
            max_ticks: 30,
            realtime: false,
        };

        run_game_loop(skirmish(), &cmd_rx, options, Some(&snap_tx));
        let frames: Vec<u64> = snap_rx.try_iter().map(|s| s.clock.frame).collect();
        assert_eq!(frames, (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        let summary = run_game_loop(skirmish(), &rx, LoopOptions::default(), None);
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.phase, GamePhase::Setup);
    }

    #[test]
    fn test_spawned_loop_joins_with_summary() {
        let handle = spawn_game_loop(
            skirmish(),
            LoopOptions {
                max_ticks: 10,
                realtime: false,
            },
            None,
        )
        .unwrap();
        // The loop may already have finished; a closed channel is fine here.
        let _ = handle
            .commands
            .send(GameLoopCommand::PlayerCommand(PlayerCommand::StartMission));
        let summary = handle.thread.join().unwrap();
        assert_eq!(summary.ticks, 10);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = skirmish();
        engine.queue_command(PlayerCommand::StartMission);

        for _ in 0..300 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
