#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
pub mod ai;
mod common;
mod config;
mod game;
pub mod letters;
mod player;
mod player_ai;
pub mod prelude;
mod roster;
mod session;
pub mod view;
mod words;
#[cfg(feature = "std")]
pub mod loader;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod ui;

pub use common::*;
pub use config::*;
pub use game::*;
pub use letters::LetterSet;
pub use player::*;
pub use player_ai::*;
pub use roster::*;
pub use session::*;
pub use view::{Chip, Key, KeyState, LetterSlot, StatusBanner};
pub use words::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
#[cfg(feature = "std")]
pub use player_cli::*;
