use pong_server::config::ServerConfig;
use pong_server::game_loop::{Frame, GameLoop};
use pong_server::input::{command_for, parse_key_line};
use pong_server::protocol::{frame_from_state, CommandMsg};
use pong_server::reducer::Command;
use pong_shared::GameConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, mpsc};

fn load_game_config() -> Result<GameConfig, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .map_err(|e| format!("cannot read {}: {}", path, e))?;
            GameConfig::from_json(&json)
        }
        None => {
            let config = GameConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

/// Translate one stdin line into commands: JSON command messages or key words.
fn commands_from_line(line: &str, config: &GameConfig) -> Result<Vec<Command>, String> {
    let line = line.trim();
    if line.starts_with('{') {
        let msg: CommandMsg =
            serde_json::from_str(line).map_err(|e| format!("bad command: {}", e))?;
        return Ok(vec![msg.into()]);
    }
    Ok(parse_key_line(line)?
        .iter()
        .filter_map(|event| command_for(event, config))
        .collect())
}

/// Print every n-th snapshot to stdout as a JSON frame.
async fn render_frames(
    mut frames: broadcast::Receiver<Frame>,
    game_config: GameConfig,
    every_n: u64,
) {
    let mut seq: u64 = 0;
    loop {
        match frames.recv().await {
            Ok(state) => {
                if seq % every_n == 0 {
                    let frame = frame_from_state(&state, seq, &game_config);
                    match serde_json::to_string(&frame) {
                        Ok(json) => println!("{}", json),
                        Err(e) => tracing::warn!("Failed to encode frame: {}", e),
                    }
                }
                seq += 1;
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!("Renderer lagged, skipped {} frames", n);
                seq += n;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

async fn read_commands(cmd_tx: mpsc::Sender<Command>, game_config: GameConfig) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("stdin read failed: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match commands_from_line(&line, &game_config) {
            Ok(commands) => {
                for cmd in commands {
                    if cmd_tx.send(cmd).await.is_err() {
                        return;
                    }
                }
            }
            Err(e) => tracing::warn!("Ignoring input: {}", e),
        }
    }
    tracing::info!("Input closed");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let game_config = match load_game_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid game configuration: {}", e);
            std::process::exit(1);
        }
    };

    let server_config = ServerConfig::default();
    if let Err(e) = server_config.validate() {
        eprintln!("Invalid server configuration: {}", e);
        std::process::exit(1);
    }

    let every_n = server_config.frame_every_n_ticks;
    let game = GameLoop::start(game_config, server_config);

    let renderer = tokio::spawn(render_frames(game.subscribe(), game_config, every_n));

    tokio::select! {
        _ = read_commands(game.commands(), game_config) => {}
        _ = tokio::signal::ctrl_c() => tracing::info!("Interrupted"),
    }

    match game.stop().await {
        Ok(state) => tracing::info!(
            "Final score {}-{}{}",
            state.player_score,
            state.computer_score,
            if state.game_over { " (game over)" } else { "" }
        ),
        Err(e) => tracing::error!("Game loop failed: {}", e),
    }
    let _ = renderer.await;
}
