#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod ai;
mod attack;
mod autoplay;
mod bitboard;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod placement;
pub mod prelude;
mod ship;
mod sunk;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use attack::*;
pub use autoplay::*;
pub use bitboard::{BitBoard, OutOfBounds};
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use placement::*;
pub use ship::*;
pub use sunk::*;
#[cfg(feature = "std")]
pub use cli::{CliPlayer, PlayOptions};
#[cfg(feature = "std")]
pub use logging::init_logging;
