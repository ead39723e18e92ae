//! A single pairing between two players.
//!
//! Games are created without a result. Colors may be chosen at creation time
//! or later; anything that depends on colors or on the result fails with a
//! [`GameError`] until they are set.

use rand::Rng;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::GameError;
use crate::player::Player;
use crate::types::{Color, ColorCode, GameResult, PlayerId, BYE_NAME};

/// Default length of a scheduled game
pub const STANDARD_GAME_TIME: Duration = Duration::from_secs(10 * 60);

#[derive(Clone, Debug)]
pub struct Game {
    player_one: Arc<Player>,
    player_two: Arc<Player>,
    color: ColorCode,
    result: GameResult,
    bye: bool,
    duration: Duration,
}

impl Game {
    pub fn new(player_one: Arc<Player>, player_two: Arc<Player>, color: ColorCode) -> Self {
        Self {
            player_one,
            player_two,
            color,
            result: GameResult::NoResult,
            bye: false,
            duration: STANDARD_GAME_TIME,
        }
    }

    /// A bye for `player`. `bye_player` is expected to be the sentinel from
    /// [`Player::bye`].
    pub fn bye(player: Arc<Player>, bye_player: Arc<Player>, color: ColorCode) -> Self {
        Self {
            bye: true,
            ..Self::new(player, bye_player, color)
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn player_one(&self) -> &Player {
        &self.player_one
    }

    pub fn player_two(&self) -> &Player {
        &self.player_two
    }

    pub fn color_code(&self) -> ColorCode {
        self.color
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_bye(&self) -> bool {
        self.bye
    }

    pub fn is_over(&self) -> bool {
        self.result.is_decided()
    }

    pub fn was_drawn(&self) -> bool {
        self.result == GameResult::Draw
    }

    pub fn are_colors_set(&self) -> bool {
        self.color != ColorCode::Unset
    }

    pub fn set_result(&mut self, result: GameResult) {
        self.result = result;
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn make_player_one_white(&mut self) {
        self.color = ColorCode::PlayerOneWhite;
    }

    pub fn make_player_two_white(&mut self) {
        self.color = ColorCode::PlayerOneBlack;
    }

    pub fn flip_colors(&mut self) -> Result<(), GameError> {
        self.color = match self.color {
            ColorCode::Unset => return Err(GameError::ColorsNotSet),
            ColorCode::PlayerOneWhite => ColorCode::PlayerOneBlack,
            ColorCode::PlayerOneBlack => ColorCode::PlayerOneWhite,
        };
        Ok(())
    }

    pub fn contains_player(&self, id: PlayerId) -> bool {
        self.player_one.id() == id || self.player_two.id() == id
    }

    /// The other side of the board from `id`. Any id that is not player one
    /// is treated as player two.
    pub fn opponent_of(&self, id: PlayerId) -> &Player {
        if self.player_one.id() == id {
            &self.player_two
        } else {
            &self.player_one
        }
    }

    /// Sum of both players' levels
    pub fn game_points(&self) -> u32 {
        u32::from(self.player_one.level().value()) + u32::from(self.player_two.level().value())
    }

    pub fn white_player(&self) -> Result<&Player, GameError> {
        match self.color {
            ColorCode::Unset => Err(GameError::ColorsNotSet),
            ColorCode::PlayerOneWhite => Ok(&self.player_one),
            ColorCode::PlayerOneBlack => Ok(&self.player_two),
        }
    }

    pub fn black_player(&self) -> Result<&Player, GameError> {
        match self.color {
            ColorCode::Unset => Err(GameError::ColorsNotSet),
            ColorCode::PlayerOneWhite => Ok(&self.player_two),
            ColorCode::PlayerOneBlack => Ok(&self.player_one),
        }
    }

    /// Color played by `id` in this game
    pub fn color_of(&self, id: PlayerId) -> Result<Color, GameError> {
        let white = self.white_player()?;
        Ok(if white.id() == id {
            Color::White
        } else {
            Color::Black
        })
    }

    /// Winner and loser, in that order.
    ///
    /// A bye is always won by the real player. A drawn game is an error:
    /// callers must check [`Game::was_drawn`] first.
    pub fn winner_and_loser(&self) -> Result<(&Player, &Player), GameError> {
        if self.result == GameResult::Draw {
            return Err(GameError::DrawnGame);
        }
        if self.bye {
            return Ok((&self.player_one, &self.player_two));
        }
        let white = self.white_player()?;
        let black = self.black_player()?;
        match self.result {
            GameResult::WhiteWins => Ok((white, black)),
            GameResult::BlackWins => Ok((black, white)),
            GameResult::NoResult => Err(GameError::NoResult),
            GameResult::Draw => Err(GameError::DrawnGame),
        }
    }

    pub fn did_player_win(&self, id: PlayerId) -> Result<bool, GameError> {
        let (winner, _) = self.winner_and_loser()?;
        Ok(winner.id() == id)
    }

    pub fn set_random_colors<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.color = if rng.gen_bool(0.5) {
            ColorCode::PlayerOneWhite
        } else {
            ColorCode::PlayerOneBlack
        };
    }

    /// Uniform-ish result: 1 in 11 draws, black wins 4 in 11, white 6 in 11
    pub fn set_random_result<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let roll = rng.gen_range(1..=11);
        self.result = if roll == 1 {
            GameResult::Draw
        } else if roll < 6 {
            GameResult::BlackWins
        } else {
            GameResult::WhiteWins
        };
    }

    /// Result that favors the stronger player.
    ///
    /// Draws are rare (1 in 90). Otherwise the higher-level player wins 7
    /// times in 10 and equal levels are a coin flip. Colors are picked at
    /// random first if they were never set.
    pub fn set_likely_random_result<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let one_is_white = match self.color {
            ColorCode::PlayerOneWhite => true,
            ColorCode::PlayerOneBlack => false,
            ColorCode::Unset => {
                self.set_random_colors(rng);
                self.color == ColorCode::PlayerOneWhite
            }
        };
        if rng.gen_range(1..=90) == 1 {
            self.result = GameResult::Draw;
            return;
        }

        let one = &self.player_one;
        let two = &self.player_two;
        let favourite_wins = rng.gen_range(1..=10) > 3;
        let one_wins = match one.level().cmp(&two.level()) {
            std::cmp::Ordering::Greater => favourite_wins,
            std::cmp::Ordering::Less => !favourite_wins,
            std::cmp::Ordering::Equal => rng.gen_bool(0.5),
        };
        self.result = if one_wins == one_is_white {
            GameResult::WhiteWins
        } else {
            GameResult::BlackWins
        };
    }

    /// White and black names for the leaderboard; a bye shows as the player
    /// against "Bye".
    pub fn white_first_names(&self) -> Result<(String, String), GameError> {
        if self.bye {
            return Ok((self.player_one.name().to_string(), BYE_NAME.to_string()));
        }
        Ok((
            self.white_player()?.name().to_string(),
            self.black_player()?.name().to_string(),
        ))
    }

    /// One-line description of the outcome, e.g. `Ann(4) won as white vs. Bob(2)`
    pub fn result_summary(&self) -> Result<String, GameError> {
        if self.was_drawn() {
            let white = self.white_player()?;
            let black = self.black_player()?;
            return Ok(format!("{white} draw as white vs. {black}"));
        }
        let (winner, loser) = self.winner_and_loser()?;
        let color = match self.result {
            GameResult::BlackWins => "black",
            _ => "white",
        };
        Ok(format!("{winner} won as {color} vs. {loser}"))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bye {
            return write!(f, "{} has a bye", self.player_one.name());
        }
        match self.color {
            ColorCode::Unset => write!(f, "{}[N] vs. {}[N]", self.player_one, self.player_two),
            ColorCode::PlayerOneWhite => {
                write!(f, "{}[W] vs. {}[B]", self.player_one, self.player_two)
            }
            ColorCode::PlayerOneBlack => {
                write!(f, "{}[W] vs. {}[B]", self.player_two, self.player_one)
            }
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
