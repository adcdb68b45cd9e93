use crate::config::ServerConfig;
use crate::reducer::{reduce, Command, Event};
use crate::state::GameState;
use pong_shared::GameConfig;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;

/// Snapshot published after every processed event
pub type Frame = Arc<GameState>;

/// Run the main game loop. Owns the game state and returns it on exit.
///
/// Ends when `shutdown_rx` fires or every command sender is dropped.
pub async fn run_game_loop(
    mut cmd_rx: mpsc::Receiver<Command>,
    frame_tx: broadcast::Sender<Frame>,
    mut shutdown_rx: oneshot::Receiver<()>,
    game_config: GameConfig,
    server_config: ServerConfig,
) -> GameState {
    let mut state = GameState::initial(&game_config);
    let mut tick_count: u64 = 0;

    let mut tick_interval = tokio::time::interval(server_config.tick_period());
    tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    tracing::info!(
        "Game loop started ({} ms ticks, first to {})",
        server_config.tick_period_ms,
        game_config.rounds_to_win
    );
    let _ = frame_tx.send(Arc::new(state.clone()));

    loop {
        tokio::select! {
            _ = &mut shutdown_rx => break,

            _ = tick_interval.tick() => {
                let next = reduce(&state, &Event::Tick, &game_config);
                tick_count += 1;
                log_transition(&state, &next, tick_count);
                state = next;
                let _ = frame_tx.send(Arc::new(state.clone()));
            }

            cmd = cmd_rx.recv() => {
                let Some(cmd) = cmd else { break };
                tracing::debug!("Command {:?} at tick {}", cmd, tick_count);
                if cmd == Command::Restart {
                    tracing::info!(
                        "Restart at {}-{}",
                        state.player_score,
                        state.computer_score
                    );
                }
                state = reduce(&state, &Event::Command(cmd), &game_config);
                let _ = frame_tx.send(Arc::new(state.clone()));
            }
        }
    }

    tracing::info!("Game loop ended after {} ticks", tick_count);
    state
}

fn log_transition(prev: &GameState, next: &GameState, tick: u64) {
    if prev.game_over {
        return;
    }
    if next.player_score != prev.player_score || next.computer_score != prev.computer_score {
        tracing::info!(
            "Goal at tick {}: {}-{}",
            tick,
            next.player_score,
            next.computer_score
        );
    }
    if next.game_over {
        tracing::info!(
            "Game over at tick {}: {}-{}",
            tick,
            next.player_score,
            next.computer_score
        );
    }
}

/// Handle to a running game loop.
pub struct GameLoop {
    cmd_tx: mpsc::Sender<Command>,
    frame_tx: broadcast::Sender<Frame>,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<GameState>,
}

impl GameLoop {
    /// Spawn the loop on the current tokio runtime.
    pub fn start(game_config: GameConfig, server_config: ServerConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(server_config.command_buffer);
        let (frame_tx, _) = broadcast::channel::<Frame>(server_config.frame_buffer);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let loop_tx = frame_tx.clone();
        let task = tokio::spawn(async move {
            run_game_loop(cmd_rx, loop_tx, shutdown_rx, game_config, server_config).await
        });

        Self {
            cmd_tx,
            frame_tx,
            shutdown_tx,
            task,
        }
    }

    /// Sender for player commands. Clone freely.
    pub fn commands(&self) -> mpsc::Sender<Command> {
        self.cmd_tx.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Frame> {
        self.frame_tx.subscribe()
    }

    /// Stop the loop and return the final state.
    pub async fn stop(self) -> Result<GameState, tokio::task::JoinError> {
        let _ = self.shutdown_tx.send(());
        self.task.await
    }
}
