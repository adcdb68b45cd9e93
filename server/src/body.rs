use pong_shared::{GameConfig, Vec2};

/// What a body is. Collision dispatch matches on this exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyKind {
    PlayerPaddle,
    ComputerPaddle,
    Ball,
    TopWall,
    BottomWall,
    PlayerGoal,
    ComputerGoal,
}

impl BodyKind {
    pub fn is_paddle(self) -> bool {
        matches!(self, BodyKind::PlayerPaddle | BodyKind::ComputerPaddle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Any positioned game object: paddle, ball, boundary line or goal.
///
/// Bodies are values. Every transition builds a new `Body` with struct
/// update syntax; nothing is changed in place.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    pub id: String,
    pub kind: BodyKind,
    /// Top edge for paddles, centre for the ball, anchor point for lines.
    pub pos: Vec2,
    /// Canvas units per tick
    pub vel: Vec2,
    /// Multiplier applied to `vel.y` on every advance
    pub acc: f64,
    pub radius: f64,
    pub orientation: Orientation,
}

impl Body {
    /// Stationary vertical paddle with its top edge at `pos`.
    pub fn paddle(id: &str, kind: BodyKind, pos: Vec2, config: &GameConfig) -> Self {
        Self {
            id: id.to_string(),
            kind,
            pos,
            vel: Vec2::ZERO,
            acc: 1.0,
            radius: config.paddle_radius,
            orientation: Orientation::Vertical,
        }
    }

    /// Fixed boundary or goal line.
    pub fn line(
        id: &str,
        kind: BodyKind,
        pos: Vec2,
        radius: f64,
        orientation: Orientation,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            pos,
            vel: Vec2::ZERO,
            acc: 1.0,
            radius,
            orientation,
        }
    }

    pub fn ball(pos: Vec2, vel: Vec2, acc: f64, config: &GameConfig) -> Self {
        Self {
            id: "ball".to_string(),
            kind: BodyKind::Ball,
            pos,
            vel,
            acc,
            radius: config.ball_radius,
            orientation: Orientation::Vertical,
        }
    }

    /// Paddle top edge
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    /// Paddle bottom edge (top + full length)
    pub fn bottom(&self) -> f64 {
        self.pos.y + 2.0 * self.radius
    }

    pub fn with_vel(&self, vel: Vec2) -> Self {
        Self {
            vel,
            ..self.clone()
        }
    }
}
