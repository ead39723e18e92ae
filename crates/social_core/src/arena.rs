//! Storage for every game of a schedule.
//!
//! Draws refer to games by [`GameId`]; the arena is the single owner, so a
//! result set here is seen by both players' draws.

use crate::error::GameError;
use crate::game::Game;
use crate::types::{GameId, GameResult};

#[derive(Clone, Debug, Default)]
pub struct GameArena {
    games: Vec<Game>,
}

impl GameArena {
    pub fn new() -> Self {
        Self { games: Vec::new() }
    }

    pub fn insert(&mut self, game: Game) -> GameId {
        self.games.push(game);
        GameId(self.games.len() - 1)
    }

    pub fn get(&self, id: GameId) -> Result<&Game, GameError> {
        self.games.get(id.0).ok_or(GameError::UnknownGame(id))
    }

    pub fn get_mut(&mut self, id: GameId) -> Result<&mut Game, GameError> {
        self.games.get_mut(id.0).ok_or(GameError::UnknownGame(id))
    }

    pub fn set_result(&mut self, id: GameId, result: GameResult) -> Result<(), GameError> {
        self.get_mut(id)?.set_result(result);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (GameId, &Game)> {
        self.games.iter().enumerate().map(|(i, game)| (GameId(i), game))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (GameId, &mut Game)> {
        self.games
            .iter_mut()
            .enumerate()
            .map(|(i, game)| (GameId(i), game))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
