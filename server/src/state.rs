use crate::body::{Body, BodyKind, Orientation};
use pong_shared::{GameConfig, Vec2};

/// One of the two competitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Player,
    Computer,
}

/// Complete game state. Owned by the game loop; each tick replaces it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player: Body,
    pub computer: Body,
    pub ball: Body,
    pub top_bound: Body,
    pub bot_bound: Body,
    pub player_goal: Body,
    pub computer_goal: Body,
    pub player_score: u32,
    pub computer_score: u32,
    pub game_over: bool,
}

impl GameState {
    /// Canonical starting layout: paddles at the left/right eighths, ball
    /// at the centre with the configured serve velocity, scores at zero.
    pub fn initial(config: &GameConfig) -> Self {
        let w = config.canvas_width;
        let h = config.canvas_height;
        Self {
            player: Body::paddle(
                "player",
                BodyKind::PlayerPaddle,
                Vec2::new(w / 8.0, h / 2.0),
                config,
            ),
            computer: Body::paddle(
                "computer",
                BodyKind::ComputerPaddle,
                Vec2::new(7.0 * w / 8.0, h / 2.0),
                config,
            ),
            ball: Body::ball(config.center(), config.ball_start_velocity, 1.0, config),
            top_bound: Body::line(
                "topBound",
                BodyKind::TopWall,
                Vec2::new(w / 2.0, 0.0),
                w / 2.0,
                Orientation::Horizontal,
            ),
            bot_bound: Body::line(
                "botBound",
                BodyKind::BottomWall,
                Vec2::new(w / 2.0, h),
                w / 2.0,
                Orientation::Horizontal,
            ),
            player_goal: Body::line(
                "playerGoal",
                BodyKind::PlayerGoal,
                Vec2::new(0.0, h / 2.0),
                h / 2.0,
                Orientation::Vertical,
            ),
            computer_goal: Body::line(
                "computerGoal",
                BodyKind::ComputerGoal,
                Vec2::new(w, h / 2.0),
                h / 2.0,
                Orientation::Vertical,
            ),
            player_score: 0,
            computer_score: 0,
            game_over: false,
        }
    }

    /// Whether either score has reached the threshold.
    pub fn has_winning_score(&self, config: &GameConfig) -> bool {
        self.player_score == config.rounds_to_win || self.computer_score == config.rounds_to_win
    }

    /// The winner, once the game is over.
    pub fn winner(&self, config: &GameConfig) -> Option<Side> {
        if !self.game_over {
            return None;
        }
        if self.player_score == config.rounds_to_win {
            Some(Side::Player)
        } else {
            Some(Side::Computer)
        }
    }

    /// All bodies in a stable order (paddles, ball, walls, goals).
    pub fn bodies(&self) -> [&Body; 7] {
        [
            &self.player,
            &self.computer,
            &self.ball,
            &self.top_bound,
            &self.bot_bound,
            &self.player_goal,
            &self.computer_goal,
        ]
    }
}
