//! Contact detection and round rules.
//!
//! Runs once per tick on the post-physics state. Resolution order:
//! 1. game already over: freeze to the initial layout, keep scores
//! 2. ball entered a goal: reset the field, credit the scorer, re-serve
//! 3. otherwise: rebound off paddles or walls and recompute `game_over`

use crate::body::{Body, BodyKind, Orientation};
use crate::state::{GameState, Side};
use pong_shared::{GameConfig, Vec2};

/// Speed-up factor for hits on the outer quarters of a paddle
pub const EDGE_HIT_FACTOR: f64 = 3.0;
/// Slow-down factor for hits on the paddle's centre band
pub const CENTER_HIT_FACTOR: f64 = 0.5;

/// Whether `ball` touches `body` this tick.
///
/// Paddles are solid strips a quarter of the paddle width thick. Goals are
/// triggers at their own canvas edge. Walls fire once the ball reaches or
/// passes their edge.
pub fn collided(body: &Body, ball: &Body, config: &GameConfig) -> bool {
    let p = ball.pos;
    match body.orientation {
        Orientation::Vertical => match body.kind {
            BodyKind::PlayerPaddle | BodyKind::ComputerPaddle => {
                body.top() < p.y
                    && p.y < body.bottom()
                    && body.pos.x < p.x
                    && p.x < body.pos.x + config.paddle_band()
            }
            BodyKind::PlayerGoal => p.x < 0.0,
            BodyKind::ComputerGoal => p.x > config.canvas_width,
            BodyKind::Ball | BodyKind::TopWall | BodyKind::BottomWall => false,
        },
        Orientation::Horizontal => match body.kind {
            BodyKind::TopWall => p.y <= 0.0,
            BodyKind::BottomWall => p.y >= config.canvas_height,
            BodyKind::Ball
            | BodyKind::PlayerPaddle
            | BodyKind::ComputerPaddle
            | BodyKind::PlayerGoal
            | BodyKind::ComputerGoal => false,
        },
    }
}

/// Vertical speed multiplier for a confirmed paddle hit.
///
/// Outer quarters return `EDGE_HIT_FACTOR`, the band between 7/8 and 9/8 of
/// a radius below the top edge returns `CENTER_HIT_FACTOR`, anything else 1.
pub fn acceleration_factor(paddle: &Body, ball: &Body) -> f64 {
    let top = paddle.top();
    let r = paddle.radius;
    let y = ball.pos.y;
    if y < top + r / 2.0 || y > top + 3.0 * r / 2.0 {
        EDGE_HIT_FACTOR
    } else if y > top + 7.0 * r / 8.0 && y < top + 9.0 * r / 8.0 {
        CENTER_HIT_FACTOR
    } else {
        1.0
    }
}

/// Everything the ball touched this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub player: bool,
    pub computer: bool,
    pub top_wall: bool,
    pub bottom_wall: bool,
    pub player_goal: bool,
    pub computer_goal: bool,
}

impl Contacts {
    pub fn detect(state: &GameState, config: &GameConfig) -> Self {
        let ball = &state.ball;
        Self {
            player: collided(&state.player, ball, config),
            computer: collided(&state.computer, ball, config),
            top_wall: collided(&state.top_bound, ball, config),
            bottom_wall: collided(&state.bot_bound, ball, config),
            player_goal: collided(&state.player_goal, ball, config),
            computer_goal: collided(&state.computer_goal, ball, config),
        }
    }

    pub fn paddle(&self) -> bool {
        self.player || self.computer
    }

    pub fn wall(&self) -> bool {
        self.top_wall || self.bottom_wall
    }

    /// Who earns a point: entering the player's goal scores for the computer.
    pub fn scorer(&self) -> Option<Side> {
        if self.player_goal {
            Some(Side::Computer)
        } else if self.computer_goal {
            Some(Side::Player)
        } else {
            None
        }
    }
}

/// Serve velocity after a point, aimed at the side that conceded: the
/// configured serve after a computer point, reversed after a player point.
pub fn serve_velocity(scorer: Side, config: &GameConfig) -> Vec2 {
    match scorer {
        Side::Computer => config.ball_start_velocity,
        Side::Player => config.ball_start_velocity.rotate(180.0),
    }
}

/// Fresh ball at the current position with the rebound applied.
///
/// Paddle contact wins over wall contact; the factor is attached whichever
/// branch fires.
pub fn rebound(ball: &Body, contacts: &Contacts, acc: f64, config: &GameConfig) -> Body {
    let v = ball.vel;
    let vel = if contacts.paddle() {
        Vec2::new(-v.x, v.y)
    } else if contacts.wall() {
        Vec2::new(v.x, -v.y)
    } else {
        v
    };
    Body::ball(ball.pos, vel, acc, config)
}

/// Apply the round rules to a post-physics state.
pub fn resolve(state: &GameState, config: &GameConfig) -> GameState {
    if state.game_over {
        return GameState {
            player_score: state.player_score,
            computer_score: state.computer_score,
            game_over: true,
            ..GameState::initial(config)
        };
    }

    let contacts = Contacts::detect(state, config);

    if let Some(scorer) = contacts.scorer() {
        let (player_score, computer_score) = match scorer {
            Side::Player => (state.player_score + 1, state.computer_score),
            Side::Computer => (state.player_score, state.computer_score + 1),
        };
        let next = GameState {
            ball: Body::ball(config.center(), serve_velocity(scorer, config), 1.0, config),
            player_score,
            computer_score,
            ..GameState::initial(config)
        };
        return GameState {
            game_over: next.has_winning_score(config),
            ..next
        };
    }

    let acc = if contacts.player {
        acceleration_factor(&state.player, &state.ball)
    } else if contacts.computer {
        acceleration_factor(&state.computer, &state.ball)
    } else {
        1.0
    };

    GameState {
        ball: rebound(&state.ball, &contacts, acc, config),
        game_over: state.has_winning_score(config),
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pong_shared::vec2;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {} to be close to {}",
            actual,
            expected
        );
    }

    fn ball_at(x: f64, y: f64, vel: Vec2, config: &GameConfig) -> Body {
        Body::ball(vec2(x, y), vel, 1.0, config)
    }

    fn state_with_ball(x: f64, y: f64, vel: Vec2, config: &GameConfig) -> GameState {
        GameState {
            ball: ball_at(x, y, vel, config),
            ..GameState::initial(config)
        }
    }

    fn paddle_at(top: f64, config: &GameConfig) -> Body {
        Body::paddle("player", BodyKind::PlayerPaddle, vec2(75.0, top), config)
    }

    // --- contact test ---

    #[test]
    fn paddle_contact_inside_band() {
        let config = GameConfig::default();
        let s = GameState::initial(&config);
        let ball = ball_at(76.0, 320.0, vec2(-2.0, 1.0), &config);
        assert!(collided(&s.player, &ball, &config));
    }

    #[test]
    fn paddle_band_is_quarter_width() {
        let config = GameConfig::default();
        let s = GameState::initial(&config);
        // band is (75, 77.5)
        assert!(!collided(&s.player, &ball_at(75.0, 320.0, Vec2::ZERO, &config), &config));
        assert!(collided(&s.player, &ball_at(77.4, 320.0, Vec2::ZERO, &config), &config));
        assert!(!collided(&s.player, &ball_at(77.5, 320.0, Vec2::ZERO, &config), &config));
    }

    #[test]
    fn paddle_span_excludes_ends() {
        let config = GameConfig::default();
        let s = GameState::initial(&config);
        // paddle spans (300, 350)
        assert!(!collided(&s.player, &ball_at(76.0, 300.0, Vec2::ZERO, &config), &config));
        assert!(collided(&s.player, &ball_at(76.0, 300.1, Vec2::ZERO, &config), &config));
        assert!(!collided(&s.player, &ball_at(76.0, 350.0, Vec2::ZERO, &config), &config));
        assert!(!collided(&s.player, &ball_at(76.0, 280.0, Vec2::ZERO, &config), &config));
    }

    #[test]
    fn computer_paddle_uses_same_band() {
        let config = GameConfig::default();
        let s = GameState::initial(&config);
        assert!(collided(&s.computer, &ball_at(526.0, 310.0, Vec2::ZERO, &config), &config));
        assert!(!collided(&s.computer, &ball_at(524.0, 310.0, Vec2::ZERO, &config), &config));
    }

    #[test]
    fn goals_fire_only_on_their_own_edge() {
        let config = GameConfig::default();
        let s = GameState::initial(&config);
        let left = ball_at(-0.5, 300.0, Vec2::ZERO, &config);
        let right = ball_at(600.5, 300.0, Vec2::ZERO, &config);
        assert!(collided(&s.player_goal, &left, &config));
        assert!(!collided(&s.player_goal, &right, &config));
        assert!(collided(&s.computer_goal, &right, &config));
        assert!(!collided(&s.computer_goal, &left, &config));
    }

    #[test]
    fn goal_is_not_a_paddle_near_its_line() {
        let config = GameConfig::default();
        let s = GameState::initial(&config);
        // just inside the left edge, where a paddle-style test on the goal would fire
        let ball = ball_at(1.0, 300.0, Vec2::ZERO, &config);
        assert!(!collided(&s.player_goal, &ball, &config));
    }

    #[test]
    fn walls_fire_at_or_past_edge() {
        let config = GameConfig::default();
        let s = GameState::initial(&config);
        assert!(collided(&s.top_bound, &ball_at(300.0, 0.0, Vec2::ZERO, &config), &config));
        assert!(collided(&s.top_bound, &ball_at(300.0, -3.0, Vec2::ZERO, &config), &config));
        assert!(!collided(&s.top_bound, &ball_at(300.0, 0.1, Vec2::ZERO, &config), &config));
        assert!(collided(&s.bot_bound, &ball_at(300.0, 600.0, Vec2::ZERO, &config), &config));
        assert!(!collided(&s.bot_bound, &ball_at(300.0, 599.9, Vec2::ZERO, &config), &config));
    }

    #[test]
    fn ball_never_collides_with_itself() {
        let config = GameConfig::default();
        let ball = ball_at(-10.0, -10.0, Vec2::ZERO, &config);
        assert!(!collided(&ball, &ball, &config));
    }

    // --- acceleration policy ---

    #[test]
    fn top_quarter_hit_speeds_up() {
        let config = GameConfig::default();
        let paddle = paddle_at(280.0, &config);
        let ball = ball_at(76.0, 282.0, Vec2::ZERO, &config);
        assert_eq!(acceleration_factor(&paddle, &ball), EDGE_HIT_FACTOR);
    }

    #[test]
    fn bottom_quarter_hit_speeds_up() {
        let config = GameConfig::default();
        let paddle = paddle_at(280.0, &config);
        // bottom quarter starts above 280 + 37.5
        let ball = ball_at(76.0, 318.0, Vec2::ZERO, &config);
        assert_eq!(acceleration_factor(&paddle, &ball), EDGE_HIT_FACTOR);
    }

    #[test]
    fn centre_band_hit_slows_down() {
        let config = GameConfig::default();
        let paddle = paddle_at(280.0, &config);
        // centre band is (301.875, 308.125)
        for y in [302.0, 305.0, 308.0] {
            let ball = ball_at(76.0, y, Vec2::ZERO, &config);
            assert_eq!(acceleration_factor(&paddle, &ball), CENTER_HIT_FACTOR, "y={}", y);
        }
    }

    #[test]
    fn other_hits_keep_speed() {
        let config = GameConfig::default();
        let paddle = paddle_at(280.0, &config);
        for y in [292.5, 300.0, 301.875, 308.125, 317.5] {
            let ball = ball_at(76.0, y, Vec2::ZERO, &config);
            assert_eq!(acceleration_factor(&paddle, &ball), 1.0, "y={}", y);
        }
    }

    // --- rebound ---

    #[test]
    fn paddle_hit_negates_horizontal_velocity() {
        let config = GameConfig::default();
        // paddle spans (300, 350); 320 is in neither outer quarter nor centre band
        let s = state_with_ball(76.0, 320.0, vec2(-2.0, 1.5), &config);
        let next = resolve(&s, &config);
        assert_eq!(next.ball.vel, vec2(2.0, 1.5));
        assert_eq!(next.ball.pos, s.ball.pos);
        assert_eq!(next.ball.acc, 1.0);
    }

    #[test]
    fn paddle_hit_attaches_acceleration_factor() {
        let config = GameConfig::default();
        let s = state_with_ball(76.0, 302.0, vec2(-2.0, 1.0), &config);
        let next = resolve(&s, &config);
        assert_eq!(next.ball.vel, vec2(2.0, 1.0));
        assert_eq!(next.ball.acc, EDGE_HIT_FACTOR);
    }

    #[test]
    fn computer_paddle_hit_bounces_back() {
        let config = GameConfig::default();
        let s = state_with_ball(526.0, 326.0, vec2(2.0, -1.0), &config);
        let next = resolve(&s, &config);
        assert_eq!(next.ball.vel, vec2(-2.0, -1.0));
        assert_eq!(next.ball.acc, CENTER_HIT_FACTOR);
    }

    #[test]
    fn bottom_wall_at_exact_height_negates_vertical_only() {
        let config = GameConfig::default();
        let s = state_with_ball(200.0, 600.0, vec2(-2.0, 3.0), &config);
        let next = resolve(&s, &config);
        assert_eq!(next.ball.vel, vec2(-2.0, -3.0));
    }

    #[test]
    fn top_wall_negates_vertical_only() {
        let config = GameConfig::default();
        let s = state_with_ball(200.0, -1.0, vec2(2.0, -3.0), &config);
        let next = resolve(&s, &config);
        assert_eq!(next.ball.vel, vec2(2.0, 3.0));
    }

    #[test]
    fn paddle_contact_beats_wall_contact() {
        let config = GameConfig::default();
        let initial = GameState::initial(&config);
        let s = GameState {
            player: paddle_at(-20.0, &config),
            ball: ball_at(76.0, 0.0, vec2(-2.0, -1.0), &config),
            ..initial
        };
        let contacts = Contacts::detect(&s, &config);
        assert!(contacts.player && contacts.top_wall);
        let next = resolve(&s, &config);
        assert_eq!(next.ball.vel, vec2(2.0, -1.0));
    }

    #[test]
    fn free_flight_resets_factor_to_one() {
        let config = GameConfig::default();
        let s = GameState {
            ball: Body::ball(vec2(300.0, 300.0), vec2(2.0, 3.0), EDGE_HIT_FACTOR, &config),
            ..GameState::initial(&config)
        };
        let next = resolve(&s, &config);
        assert_eq!(next.ball.vel, vec2(2.0, 3.0));
        assert_eq!(next.ball.acc, 1.0);
    }

    // --- goals ---

    #[test]
    fn left_exit_scores_for_computer_and_serves_toward_player() {
        let config = GameConfig::default();
        let s = GameState {
            player: paddle_at(120.0, &config).with_vel(vec2(0.0, 4.0)),
            player_score: 2,
            computer_score: 3,
            ..state_with_ball(-1.0, 250.0, vec2(-2.0, 1.0), &config)
        };
        let next = resolve(&s, &config);
        assert_eq!(next.computer_score, 4);
        assert_eq!(next.player_score, 2);
        assert_eq!(next.ball.pos, vec2(300.0, 300.0));
        assert_eq!(next.ball.vel, vec2(-2.0, 1.0));
        assert!(next.ball.vel.x < 0.0, "serve heads toward the player");
        assert_eq!(next.player, GameState::initial(&config).player);
        assert!(!next.game_over);
    }

    #[test]
    fn right_exit_scores_for_player_and_serves_toward_computer() {
        let config = GameConfig::default();
        let s = state_with_ball(601.0, 250.0, vec2(2.0, 1.0), &config);
        let next = resolve(&s, &config);
        assert_eq!(next.player_score, 1);
        assert_eq!(next.computer_score, 0);
        assert_eq!(next.ball.pos, vec2(300.0, 300.0));
        assert_close(next.ball.vel.x, 2.0);
        assert_close(next.ball.vel.y, -1.0);
    }

    #[test]
    fn goal_beats_wall_in_same_tick() {
        let config = GameConfig::default();
        let s = state_with_ball(-1.0, 601.0, vec2(-2.0, 3.0), &config);
        let next = resolve(&s, &config);
        assert_eq!(next.computer_score, 1);
        assert_eq!(next.ball.vel, config.ball_start_velocity);
    }

    // --- game over ---

    #[test]
    fn winning_goal_sets_game_over() {
        let config = GameConfig::default();
        let s = GameState {
            player_score: 6,
            ..state_with_ball(601.0, 300.0, vec2(2.0, 0.0), &config)
        };
        let next = resolve(&s, &config);
        assert_eq!(next.player_score, 7);
        assert!(next.game_over);
    }

    #[test]
    fn game_over_freezes_layout_and_keeps_scores() {
        let config = GameConfig::default();
        let s = GameState {
            player_score: 3,
            computer_score: 7,
            game_over: true,
            ..state_with_ball(100.0, 100.0, vec2(5.0, 5.0), &config)
        };
        let next = resolve(&s, &config);
        let expected = GameState {
            player_score: 3,
            computer_score: 7,
            game_over: true,
            ..GameState::initial(&config)
        };
        assert_eq!(next, expected);
    }

    #[test]
    fn game_over_ignores_goal_entry() {
        let config = GameConfig::default();
        let s = GameState {
            computer_score: 7,
            game_over: true,
            ..state_with_ball(-5.0, 300.0, vec2(-2.0, 0.0), &config)
        };
        let next = resolve(&s, &config);
        assert_eq!(next.computer_score, 7);
        assert_eq!(next.player_score, 0);
    }

    #[test]
    fn winning_score_without_flag_is_recomputed() {
        let config = GameConfig::default();
        let s = GameState {
            player_score: 7,
            ..GameState::initial(&config)
        };
        assert!(resolve(&s, &config).game_over);
    }
}
