#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod ui;

pub use crate::engine::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{ai::random_open_position, Controller, CpuController};
#[cfg(feature = "std")]
pub use player::CliController;
pub use ui::*;
