use std::fmt;

use crate::error::PlayerError;
use crate::types::{Level, PlayerId, Tier, BYE_ID, BYE_NAME};

/// A tournament participant.
///
/// Identity is fixed once constructed; only the late flag may change, and
/// only before the player is handed to a schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    level: Level,
    late: bool,
    vip: bool,
}

impl Player {
    /// Validate and build a player. Fails on a blank name, a level outside
    /// `1..=5`, or the reserved bye id.
    pub fn new(
        id: PlayerId,
        name: &str,
        level: u8,
        late: bool,
        vip: bool,
    ) -> Result<Self, PlayerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlayerError::InvalidName);
        }
        if id == BYE_ID {
            return Err(PlayerError::ReservedId(id));
        }
        let level = Level::try_from(level)?;

        Ok(Self {
            id,
            name: name.to_string(),
            level,
            late,
            vip,
        })
    }

    /// The sentinel opponent of a bye game
    pub fn bye() -> Self {
        Self {
            id: BYE_ID,
            name: BYE_NAME.to_string(),
            level: Level::Beginner,
            late: false,
            vip: false,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn tier(&self) -> Tier {
        self.level.tier()
    }

    pub fn is_late(&self) -> bool {
        self.late
    }

    pub fn is_vip(&self) -> bool {
        self.vip
    }

    pub fn is_bye(&self) -> bool {
        self.id == BYE_ID
    }

    pub fn make_late(&mut self) {
        self.late = true;
    }

    pub fn make_on_time(&mut self) {
        self.late = false;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.level.value())
    }
}
