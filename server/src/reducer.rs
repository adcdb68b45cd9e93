//! Pure state transitions. The game loop feeds every event through `reduce`.

use crate::collision;
use crate::computer::computer_velocity;
use crate::physics::advance;
use crate::state::GameState;
use pong_shared::protocol::CommandMsg;
use pong_shared::GameConfig;

/// Player intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Signed vertical paddle speed: negative = up, positive = down, zero = stop
    Move(f64),
    Restart,
}

impl From<CommandMsg> for Command {
    fn from(msg: CommandMsg) -> Self {
        match msg {
            CommandMsg::Move { distance } => Command::Move(distance),
            CommandMsg::Restart => Command::Restart,
        }
    }
}

/// Everything that can change the state: a player command or a clock tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Command(Command),
    Tick,
}

pub fn reduce(state: &GameState, event: &Event, config: &GameConfig) -> GameState {
    match event {
        Event::Command(Command::Move(distance)) => GameState {
            player: state.player.with_vel(state.player.vel.with_y(*distance)),
            ..state.clone()
        },
        Event::Command(Command::Restart) => GameState::initial(config),
        Event::Tick => tick(state, config),
    }
}

/// One simulation step.
///
/// The computer decides from the state before anything moves, then all three
/// moving bodies advance and the rules engine resolves contacts.
pub fn tick(state: &GameState, config: &GameConfig) -> GameState {
    let computer_vel = computer_velocity(state, &state.computer, config);
    let moved = GameState {
        player: advance(&state.player),
        computer: advance(&state.computer.with_vel(computer_vel)),
        ball: advance(&state.ball),
        ..state.clone()
    };
    collision::resolve(&moved, config)
}
