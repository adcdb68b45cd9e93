//! Pong server library.
//!
//! Game core (bodies, physics, computer paddle, rules, reducer) plus the run
//! loop and input/frame adapters used by the binaries and tests.

pub mod body;
pub mod collision;
pub mod computer;
pub mod config;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod protocol;
pub mod reducer;
pub mod state;
