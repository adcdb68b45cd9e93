//! Scripted self-play for the pong core.
//!
//! Drives the player paddle with a simple strategy against the computer and
//! reports the result:
//! - headless (default): runs the reducer as fast as possible
//! - `--realtime`: runs a real game loop and steers it through its channels
//!
//! Usage: cargo run --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --strategy S     track | idle (default: track)
//!   --max-ticks N    Give up after N ticks (default: 200000)
//!   --config PATH    JSON game config (default: built-in)
//!   --realtime       Use the timed game loop instead of the bare reducer

use pong_server::config::ServerConfig;
use pong_server::game_loop::GameLoop;
use pong_server::reducer::{reduce, Command, Event};
use pong_server::state::GameState;
use pong_shared::GameConfig;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Strategy {
    /// Follow the ball like the computer does
    Track,
    /// Never move
    Idle,
}

impl Strategy {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "track" => Some(Strategy::Track),
            "idle" => Some(Strategy::Idle),
            _ => None,
        }
    }

    /// Desired paddle speed for this state.
    fn speed(self, state: &GameState, config: &GameConfig) -> f64 {
        match self {
            Strategy::Idle => 0.0,
            Strategy::Track => {
                let y = state.ball.pos.y;
                if state.player.top() > y {
                    -config.player_move_speed
                } else if state.player.bottom() < y {
                    config.player_move_speed
                } else {
                    0.0
                }
            }
        }
    }
}

/// Only emits a command when the desired speed changes, like a key press.
struct Driver {
    strategy: Strategy,
    current: f64,
}

impl Driver {
    fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            current: 0.0,
        }
    }

    fn next_command(&mut self, state: &GameState, config: &GameConfig) -> Option<Command> {
        let speed = self.strategy.speed(state, config);
        if speed == self.current {
            return None;
        }
        self.current = speed;
        Some(Command::Move(speed))
    }
}

struct Summary {
    ticks: u64,
    goals: u64,
    commands: u64,
    state: GameState,
}

fn run_headless(config: &GameConfig, strategy: Strategy, max_ticks: u64) -> Summary {
    let mut state = GameState::initial(config);
    let mut driver = Driver::new(strategy);
    let mut summary_goals = 0;
    let mut commands = 0;
    let mut ticks = 0;

    while ticks < max_ticks && !state.game_over {
        if let Some(cmd) = driver.next_command(&state, config) {
            state = reduce(&state, &Event::Command(cmd), config);
            commands += 1;
        }
        let next = reduce(&state, &Event::Tick, config);
        if next.player_score + next.computer_score != state.player_score + state.computer_score {
            summary_goals += 1;
        }
        state = next;
        ticks += 1;
    }

    Summary {
        ticks,
        goals: summary_goals,
        commands,
        state,
    }
}

async fn run_realtime(config: GameConfig, strategy: Strategy, max_ticks: u64) -> Summary {
    let server_config = ServerConfig::default();
    let game = GameLoop::start(config, server_config);
    let cmd_tx = game.commands();
    let mut frames = game.subscribe();
    let mut driver = Driver::new(strategy);
    let mut snapshots = 0;
    let mut goals = 0;
    let mut commands = 0;
    let mut last_total = 0;

    while snapshots < max_ticks {
        let state = match frames.recv().await {
            Ok(state) => state,
            Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                eprintln!("Lagged, skipped {} snapshots", n);
                continue;
            }
            Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
        };
        snapshots += 1;
        let total = state.player_score + state.computer_score;
        if total != last_total {
            goals += 1;
            last_total = total;
        }
        if state.game_over {
            break;
        }
        if let Some(cmd) = driver.next_command(&state, &config) {
            if cmd_tx.send(cmd).await.is_err() {
                break;
            }
            commands += 1;
        }
    }

    let state = match game.stop().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Game loop failed: {}", e);
            std::process::exit(1);
        }
    };

    Summary {
        ticks: snapshots,
        goals,
        commands,
        state,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut strategy = Strategy::Track;
    let mut max_ticks: u64 = 200_000;
    let mut config_path: Option<String> = None;
    let mut realtime = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--strategy" => {
                i += 1;
                strategy = args
                    .get(i)
                    .and_then(|s| Strategy::parse(s))
                    .unwrap_or(Strategy::Track);
            }
            "--max-ticks" => {
                i += 1;
                max_ticks = args.get(i).and_then(|s| s.parse().ok()).unwrap_or(200_000);
            }
            "--config" => {
                i += 1;
                config_path = args.get(i).cloned();
            }
            "--realtime" => realtime = true,
            _ => {}
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read {}: {}", path, e))
            .and_then(|json| GameConfig::from_json(&json)),
        None => GameConfig::default().validate().map(|_| GameConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid game configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Pong Self-Play ===");
    println!("Strategy: {:?}", strategy);
    println!("Max ticks: {}", max_ticks);
    println!("Mode: {}", if realtime { "realtime" } else { "headless" });
    println!();

    let started = Instant::now();
    let summary = if realtime {
        run_realtime(config, strategy, max_ticks).await
    } else {
        run_headless(&config, strategy, max_ticks)
    };
    let elapsed = started.elapsed();

    let winner = match summary.state.winner(&config) {
        Some(side) => format!("{:?}", side),
        None => "none".to_string(),
    };

    println!("Ticks: {}", summary.ticks);
    println!("Goals: {}", summary.goals);
    println!("Commands: {}", summary.commands);
    println!(
        "Score: {}-{}",
        summary.state.player_score, summary.state.computer_score
    );
    println!("Winner: {}", winner);
    println!("Elapsed: {:.2?}", elapsed);
}
