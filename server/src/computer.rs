//! Computer-controlled paddle.
//!
//! A reactive tracker: it looks at where the ball is now, not where it is
//! heading, so it overshoots a little when the ball turns.

use crate::body::Body;
use crate::state::GameState;
use pong_shared::{GameConfig, Vec2};

/// Velocity for the computer paddle this tick.
///
/// Returns exactly one of: up at `computer_move_speed`, down at the same
/// speed, or zero.
pub fn computer_velocity(state: &GameState, paddle: &Body, config: &GameConfig) -> Vec2 {
    let ball_y = state.ball.pos.y;
    if paddle.top() > ball_y {
        Vec2::new(0.0, -config.computer_move_speed)
    } else if paddle.bottom() < ball_y {
        Vec2::new(0.0, config.computer_move_speed)
    } else {
        Vec2::ZERO
    }
}
