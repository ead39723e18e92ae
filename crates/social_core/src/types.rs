use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PlayerError;

/// Identifier of a player, as handed out by the roster owner.
pub type PlayerId = u32;

/// Reserved id of the sentinel player that stands in for an absent opponent.
pub const BYE_ID: PlayerId = 0;

/// Display name of the sentinel bye player.
pub const BYE_NAME: &str = "Bye";

/// Handle of a game stored in a [`GameArena`](crate::GameArena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub usize);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Skill level of a player, 1 (beginner) through 5 (king).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    Beginner = 1,
    Improving = 2,
    Adept = 3,
    Knight = 4,
    King = 5,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Beginner,
        Level::Improving,
        Level::Adept,
        Level::Knight,
        Level::King,
    ];

    /// Numeric level in `1..=5`
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Zero-based position, for indexing level tables
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn tier(self) -> Tier {
        match self {
            Level::Beginner | Level::Improving => Tier::Beginner,
            Level::Adept => Tier::Intermediate,
            Level::Knight | Level::King => Tier::Advanced,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = PlayerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::Beginner),
            2 => Ok(Level::Improving),
            3 => Ok(Level::Adept),
            4 => Ok(Level::Knight),
            5 => Ok(Level::King),
            other => Err(PlayerError::InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.value()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner => write!(f, "Beginner"),
            Level::Improving => write!(f, "Improving"),
            Level::Adept => write!(f, "Adept"),
            Level::Knight => write!(f, "Knight"),
            Level::King => write!(f, "King"),
        }
    }
}

/// Scheduling tier: levels 1-2, level 3, levels 4-5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

/// Which side of a game is white.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorCode {
    #[default]
    Unset,
    PlayerOneWhite,
    PlayerOneBlack,
}

impl ColorCode {
    /// Color code for a game where player one has `color`
    pub fn player_one(color: Color) -> Self {
        match color {
            Color::White => ColorCode::PlayerOneWhite,
            Color::Black => ColorCode::PlayerOneBlack,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    #[default]
    NoResult,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    pub fn is_decided(self) -> bool {
        self != GameResult::NoResult
    }
}
