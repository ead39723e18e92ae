//! Tournament engine for social chess nights
//!
//! This crate provides:
//! - Tier classification and the split into two alternating brackets
//! - Round-by-round pairing with byes and lopsided brackets
//! - Weighted leaderboards and the playoff tiebreak cascade
//! - JSON records of schedules and standings for storage or display
//!
//! # Usage
//!
//! ```bash
//! # Pair a roster and write the schedule
//! cargo run -p tournament -- schedule players.json --seed 7 --out schedule.json
//!
//! # Pair, simulate likely results and resolve the playoff
//! cargo run -p tournament -- simulate players.json --config night.toml
//! ```

mod boards;
mod config;
mod error;
mod results;
mod schedule;
mod slot;
mod tiebreak;
mod tournament;

pub use boards::*;
pub use config::*;
pub use error::*;
pub use results::*;
pub use schedule::*;
pub use slot::*;
pub use tiebreak::*;
pub use tournament::*;
