//! Errors raised while building schedules and resolving standings

use social_core::{GameError, PlayerError, PlayerId};
use thiserror::Error;

/// Schedule generation failed; nothing partial is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("there are no players to schedule")]
    EmptyRoster,
    #[error("the number of rounds must be at least one")]
    InvalidRounds,
    #[error("player id {0} appears more than once in the roster")]
    DuplicatePlayer(PlayerId),
    #[error("{players} players cannot fill {needed} seats for distinct pairings")]
    TooFewPlayers { players: usize, needed: usize },
    #[error("you must have no more than half be advanced players to schedule ({count} > {limit})")]
    TooManyAdvanced { count: usize, limit: usize },
    #[error("you must have no more than half be beginner players to schedule ({count} > {limit})")]
    TooManyBeginners { count: usize, limit: usize },
    #[error("{count} on-time advanced players do not fit the {slots} seats of group A")]
    BracketOverflow { count: usize, slots: usize },
    #[error("group A needs {needed} intermediate players but only {available} are available")]
    NotEnoughIntermediates { needed: usize, available: usize },
    #[error("player {player} was scheduled for {games} games instead of {rounds}")]
    IncompleteDraw {
        player: PlayerId,
        games: usize,
        rounds: usize,
    },
    #[error("player {player} was paired with {opponent} more than once")]
    RepeatedOpponent { player: PlayerId, opponent: PlayerId },
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TournamentError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("player {0} is not part of this tournament")]
    UnknownPlayer(PlayerId),
    #[error("a playoff needs exactly two finalists, found {}", .finalists.len())]
    UnresolvedPlayoff { finalists: Vec<PlayerId> },
    #[error("no playoff game has been scheduled")]
    NoPlayoff,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to access file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to (de)serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid roster entry: {0}")]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Tournament(#[from] TournamentError),
}
