use crate::state::{GameState, Side};
pub use pong_shared::protocol::{Banner, CommandMsg, FrameMsg, PROTOCOL_VERSION};
use pong_shared::GameConfig;

/// End-of-game indicator: the win banner only when the player reached the
/// threshold, the lose banner for any other finished game.
pub fn banner_for(state: &GameState, config: &GameConfig) -> Banner {
    match state.winner(config) {
        None => Banner::Hidden,
        Some(Side::Player) => Banner::Win,
        Some(Side::Computer) => Banner::Lose,
    }
}

/// Convert a state snapshot into the renderer-facing frame.
pub fn frame_from_state(state: &GameState, tick: u64, config: &GameConfig) -> FrameMsg {
    FrameMsg {
        protocol_version: PROTOCOL_VERSION,
        tick,
        player: state.player.pos.to_array(),
        computer: state.computer.pos.to_array(),
        ball: state.ball.pos.to_array(),
        player_score: state.player_score,
        computer_score: state.computer_score,
        game_over: state.game_over,
        banner: banner_for(state, config),
    }
}
