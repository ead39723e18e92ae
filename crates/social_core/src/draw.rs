//! A player's lineup of games for one tournament.
//!
//! The draw only keeps [`GameId`]s; the games themselves live in the
//! schedule's [`GameArena`], which every query here takes as an argument.

use std::sync::Arc;
use tracing::debug;

use crate::arena::GameArena;
use crate::error::GameError;
use crate::game::Game;
use crate::player::Player;
use crate::scoring::ScoringPolicy;
use crate::types::{Color, GameId, PlayerId};

#[derive(Clone, Debug)]
pub struct Draw {
    player: Arc<Player>,
    number_of_rounds: usize,
    games: Vec<GameId>,
}

impl Draw {
    pub fn new(player: Arc<Player>, number_of_rounds: usize) -> Self {
        Self {
            player,
            number_of_rounds,
            games: Vec::with_capacity(number_of_rounds),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn games(&self) -> &[GameId] {
        &self.games
    }

    pub fn number_of_rounds(&self) -> usize {
        self.number_of_rounds
    }

    pub fn games_scheduled(&self) -> usize {
        self.games.len()
    }

    pub fn rounds_left(&self) -> usize {
        self.number_of_rounds.saturating_sub(self.games.len())
    }

    pub fn has_full_draw(&self) -> bool {
        self.games.len() >= self.number_of_rounds
    }

    /// Append a game. A full draw accepts nothing more.
    pub fn add_game(&mut self, game: GameId) -> Result<(), GameError> {
        if self.has_full_draw() {
            return Err(GameError::DrawFull {
                player: self.player.id(),
                rounds: self.number_of_rounds,
            });
        }
        self.games.push(game);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.games.clear();
    }

    fn resolved<'a>(
        &'a self,
        arena: &'a GameArena,
    ) -> impl Iterator<Item = Result<&'a Game, GameError>> + 'a {
        self.games.iter().map(move |&id| arena.get(id))
    }

    /// Games that have a result or are byes
    pub fn rounds_completed(&self, arena: &GameArena) -> Result<usize, GameError> {
        let mut completed = 0;
        for game in self.resolved(arena) {
            let game = game?;
            if game.is_over() || game.is_bye() {
                completed += 1;
            }
        }
        Ok(completed)
    }

    pub fn game_against(
        &self,
        opponent: PlayerId,
        arena: &GameArena,
    ) -> Result<Option<GameId>, GameError> {
        let me = self.player.id();
        for &id in &self.games {
            if arena.get(id)?.opponent_of(me).id() == opponent {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    pub fn has_played(&self, opponent: PlayerId, arena: &GameArena) -> Result<bool, GameError> {
        Ok(self.game_against(opponent, arena)?.is_some())
    }

    /// One point per win, half per draw. Byes and unplayed games score nothing.
    pub fn raw_points(&self, arena: &GameArena) -> Result<f64, GameError> {
        let me = self.player.id();
        let mut points = 0.0;
        for game in self.resolved(arena) {
            let game = game?;
            if game.is_bye() || !game.is_over() {
                continue;
            }
            if game.was_drawn() {
                points += 0.5;
            } else if game.did_player_win(me)? {
                points += 1.0;
            }
        }
        Ok(points)
    }

    /// Level-weighted score of every decided, non-bye game
    pub fn weighted_score(
        &self,
        arena: &GameArena,
        policy: &ScoringPolicy,
    ) -> Result<f64, GameError> {
        let me = self.player.id();
        let mut points = 0.0;
        for game in self.resolved(arena) {
            let game = game?;
            if game.is_bye() || !game.is_over() {
                continue;
            }
            if game.was_drawn() {
                points += policy.draw;
                continue;
            }
            let (winner, loser) = game.winner_and_loser()?;
            if winner.id() == me {
                let earned = policy.win_points(winner.level(), loser.level());
                debug!(
                    "{} beat {} for {} weighted points",
                    winner, loser, earned
                );
                points += earned;
            }
        }
        Ok(points)
    }

    /// Sum of the opponents' levels over every decided loss
    pub fn loss_points(&self, arena: &GameArena) -> Result<u32, GameError> {
        let me = self.player.id();
        let mut points = 0;
        for game in self.resolved(arena) {
            let game = game?;
            if game.is_bye() || !game.is_over() || game.was_drawn() {
                continue;
            }
            let (winner, _) = game.winner_and_loser()?;
            if winner.id() != me {
                points += u32::from(winner.level().value());
            }
        }
        debug!("{} has {} loss points", self.player, points);
        Ok(points)
    }

    /// True when a full draw has the player on the same color every game
    pub fn is_all_one_color(&self, arena: &GameArena) -> Result<bool, GameError> {
        if !self.has_full_draw() {
            return Ok(false);
        }
        let me = self.player.id();
        let mut whites = 0;
        let mut blacks = 0;
        for game in self.resolved(arena) {
            match game?.color_of(me)? {
                Color::White => whites += 1,
                Color::Black => blacks += 1,
            }
        }
        Ok(whites == 0 || blacks == 0)
    }

    /// Swap colors in the first two games, the usual fix for a one-color draw
    pub fn flip_first_two_colors(&self, arena: &mut GameArena) -> Result<(), GameError> {
        for &id in self.games.iter().take(2) {
            arena.get_mut(id)?.flip_colors()?;
        }
        Ok(())
    }

    /// Round-by-round win/loss lines
    pub fn win_loss_record(&self, arena: &GameArena) -> Result<String, GameError> {
        let me = self.player.id();
        let mut record = String::new();
        for (round, game) in self.resolved(arena).enumerate() {
            let game = game?;
            let opponent = game.opponent_of(me);
            let round = round + 1;
            let line = if game.is_bye() {
                format!("Round {round} was a bye\n")
            } else if !game.is_over() {
                format!("Round {round} has no result against {opponent}\n")
            } else if game.was_drawn() {
                format!("Round {round} was a draw against {opponent}\n")
            } else if game.did_player_win(me)? {
                format!("Round {round} was a win against {opponent}\n")
            } else {
                format!("Round {round} was a loss against {opponent}\n")
            };
            record.push_str(&line);
        }
        Ok(record)
    }

    /// `Name(3)'s Draw--- W vs. Other(4) | B vs. ...`
    pub fn describe(&self, arena: &GameArena) -> Result<String, GameError> {
        let me = self.player.id();
        let mut line = format!("{}'s Draw--- ", self.player);
        for game in self.resolved(arena) {
            let game = game?;
            let color = if game.are_colors_set() {
                match game.color_of(me)? {
                    Color::White => "W",
                    Color::Black => "B",
                }
            } else {
                "NC"
            };
            line.push_str(&format!("{color} vs. {} | ", game.opponent_of(me)));
        }
        Ok(line)
    }
}

#[cfg(test)]
#[path = "draw_tests.rs"]
mod draw_tests;
