//! Types shared between the game core and its adapters.

pub mod config;
pub mod protocol;
pub mod vec2;

pub use config::GameConfig;
pub use vec2::{vec2, Vec2};
