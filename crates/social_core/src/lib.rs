//! Core types for social chess tournaments
//!
//! This crate holds everything that does not depend on how a tournament is
//! laid out:
//! - Player identity and the five skill levels
//! - Games, their colors and results, stored in a [`GameArena`]
//! - Per-player draws and their raw, weighted and loss-point tallies
//! - The scoring policy that rewards upsets

pub mod arena;
pub mod draw;
pub mod error;
pub mod game;
pub mod player;
pub mod scoring;
pub mod types;

pub use arena::*;
pub use draw::*;
pub use error::*;
pub use game::*;
pub use player::*;
pub use scoring::*;
pub use types::*;
