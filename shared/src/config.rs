use crate::vec2::Vec2;

/// Gameplay configuration, fixed at process start.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize, ts_rs::TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Drawn paddle width. The contact band is a quarter of this.
    pub paddle_width: f64,
    /// Half the paddle length
    pub paddle_radius: f64,
    pub ball_radius: f64,
    pub rounds_to_win: u32,
    /// Serve velocity (canvas units per tick)
    pub ball_start_velocity: Vec2,
    pub player_move_speed: f64,
    pub computer_move_speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600.0,
            canvas_height: 600.0,
            paddle_width: 10.0,
            paddle_radius: 25.0,
            ball_radius: 5.0,
            rounds_to_win: 7,
            ball_start_velocity: Vec2::new(-2.0, 1.0),
            player_move_speed: 4.0,
            computer_move_speed: 4.0,
        }
    }
}

impl GameConfig {
    /// Horizontal extent of the paddle contact band.
    pub fn paddle_band(&self) -> f64 {
        self.paddle_width / 4.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid game config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.canvas_width.is_finite() || self.canvas_width <= 0.0 {
            return Err("canvas_width must be finite and > 0".to_string());
        }
        if !self.canvas_height.is_finite() || self.canvas_height <= 0.0 {
            return Err("canvas_height must be finite and > 0".to_string());
        }
        if !self.paddle_width.is_finite() || self.paddle_width <= 0.0 {
            return Err("paddle_width must be finite and > 0".to_string());
        }
        if !self.paddle_radius.is_finite() || self.paddle_radius <= 0.0 {
            return Err("paddle_radius must be finite and > 0".to_string());
        }
        if 2.0 * self.paddle_radius > self.canvas_height {
            return Err("paddle must fit inside the canvas".to_string());
        }
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err("ball_radius must be finite and > 0".to_string());
        }
        if self.rounds_to_win == 0 {
            return Err("rounds_to_win must be >= 1".to_string());
        }
        if !self.ball_start_velocity.x.is_finite() || !self.ball_start_velocity.y.is_finite() {
            return Err("ball_start_velocity must be finite".to_string());
        }
        if self.ball_start_velocity.x == 0.0 {
            return Err("ball_start_velocity must have a horizontal component".to_string());
        }
        if !self.player_move_speed.is_finite() || self.player_move_speed < 0.0 {
            return Err("player_move_speed must be finite and >= 0".to_string());
        }
        if !self.computer_move_speed.is_finite() || self.computer_move_speed < 0.0 {
            return Err("computer_move_speed must be finite and >= 0".to_string());
        }
        Ok(())
    }
}
