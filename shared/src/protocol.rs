use serde::{Deserialize, Serialize};

/// Protocol version - increment when making breaking changes.
/// Renderers should check this and refuse incompatible frames.
pub const PROTOCOL_VERSION: u32 = 1;

// === Core -> Renderer ===

/// Which end-of-game indicator the renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Banner {
    Hidden,
    Win,
    Lose,
}

/// One rendered frame: absolute positions, scores and the banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FrameMsg {
    pub protocol_version: u32,
    pub tick: u64,
    pub player: [f64; 2],
    pub computer: [f64; 2],
    pub ball: [f64; 2],
    pub player_score: u32,
    pub computer_score: u32,
    pub game_over: bool,
    pub banner: Banner,
}

// === Input -> Core ===

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(tag = "type")]
pub enum CommandMsg {
    /// Signed paddle speed: negative = up, positive = down, zero = stop
    #[serde(rename = "move")]
    Move { distance: f64 },
    #[serde(rename = "restart")]
    Restart,
}
