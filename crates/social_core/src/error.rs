//! Error types for players and games

use thiserror::Error;

use crate::types::{GameId, PlayerId};

/// Rejected player construction. No partial player is ever created.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("level value must be 1 to 5, got {0}")]
    InvalidLevel(u8),
    #[error("player names must not be blank")]
    InvalidName,
    #[error("player id {0} is reserved for the bye player")]
    ReservedId(PlayerId),
}

/// A game was queried or mutated in a state that does not allow it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("colors have not been selected for this game")]
    ColorsNotSet,
    #[error("the game has no result yet")]
    NoResult,
    #[error("the game was drawn, check for a draw before seeking a winner")]
    DrawnGame,
    #[error("no game with id {0}")]
    UnknownGame(GameId),
    #[error("player {player} already has a full draw of {rounds} games")]
    DrawFull { player: PlayerId, rounds: usize },
}
