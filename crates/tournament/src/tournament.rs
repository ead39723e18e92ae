//! A tournament in progress: results go in, standings come out.
//!
//! [`Tournament`] owns the [`Schedule`] and is the only place results are
//! recorded, so every leaderboard it builds reflects the latest results.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use social_core::{ColorCode, Draw, Game, GameError, GameId, GameResult, PlayerId, ScoringPolicy};
use tracing::{debug, info};

use crate::config::TournamentConfig;
use crate::error::TournamentError;
use crate::schedule::Schedule;
use crate::slot::{sort_standings, Slot};
use crate::tiebreak::{extract_using_losses, get_one_playoff_contender_from_all_tied, get_tied_list};

/// Wins, byes, losses and draws counted over every player's draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTally {
    pub wins: usize,
    pub byes: usize,
    pub losses: usize,
    pub draws: usize,
}

/// Who goes to the playoff, and whether a tiebreak was needed to decide it.
///
/// Normally two finalists. A tie that no tiebreak can separate leaves more,
/// and callers have to deal with that list explicitly.
#[derive(Debug, Clone)]
pub struct PlayoffOutcome {
    pub tiebreak_used: bool,
    pub finalists: Vec<Slot>,
}

impl PlayoffOutcome {
    pub fn finalist_ids(&self) -> Vec<PlayerId> {
        self.finalists.iter().map(|slot| slot.player().id()).collect()
    }

    pub fn is_resolved(&self) -> bool {
        self.finalists.len() == 2
    }
}

#[derive(Debug, Clone)]
pub struct Tournament {
    name: String,
    event_date: NaiveDate,
    schedule: Schedule,
    policy: ScoringPolicy,
    precision: u32,
    playoff: Option<Game>,
    winner: Option<PlayerId>,
}

impl Tournament {
    /// Wrap a generated schedule. The event date defaults to today.
    pub fn new(schedule: Schedule, config: &TournamentConfig) -> Self {
        Self {
            name: config.title.clone(),
            event_date: chrono::Local::now().date_naive(),
            schedule,
            policy: config.scoring.clone(),
            precision: config.weighted_precision,
            playoff: None,
            winner: None,
        }
    }

    pub fn with_date(mut self, event_date: NaiveDate) -> Self {
        self.event_date = event_date;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn event_date(&self) -> NaiveDate {
        self.event_date
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn draw(&self, player: PlayerId) -> Result<&Draw, TournamentError> {
        self.schedule
            .draw(player)
            .ok_or(TournamentError::UnknownPlayer(player))
    }

    pub fn total_number_of_games(&self) -> usize {
        self.schedule.total_number_of_games()
    }

    pub fn playoff(&self) -> Option<&Game> {
        self.playoff.as_ref()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Record the result of a scheduled game
    pub fn set_result(&mut self, game: GameId, result: GameResult) -> Result<(), TournamentError> {
        self.schedule.games_mut().set_result(game, result)?;
        debug!("Game {} result set to {:?}", game, result);
        Ok(())
    }

    /// Fill every unplayed game with a likely result. Byes and games that
    /// already have a result are left alone. Returns how many were filled.
    pub fn simulate_results<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut simulated = 0;
        for (_, game) in self.schedule.games_mut().iter_mut() {
            if game.is_bye() || game.is_over() {
                continue;
            }
            game.set_likely_random_result(rng);
            simulated += 1;
        }
        info!("Simulated {} game results", simulated);
        simulated
    }

    /// Every draw counts its own games, so each decided game shows up as
    /// one win and one loss, and each drawn game twice.
    pub fn result_numbers(&self) -> Result<ResultTally, TournamentError> {
        let games = self.schedule.games();
        let mut tally = ResultTally::default();
        for (&player, draw) in self.schedule.draws() {
            for &id in draw.games() {
                let game = games.get(id)?;
                if game.is_bye() {
                    tally.byes += 1;
                } else if !game.is_over() {
                    continue;
                } else if game.was_drawn() {
                    tally.draws += 1;
                } else if game.did_player_win(player)? {
                    tally.wins += 1;
                } else {
                    tally.losses += 1;
                }
            }
        }
        Ok(tally)
    }

    /// One slot per player, best first, optionally cut to the top `max`
    pub fn leaderboard(&self, max: Option<usize>) -> Result<Vec<Slot>, TournamentError> {
        let games = self.schedule.games();
        let mut slots = Vec::with_capacity(self.schedule.draws().len());
        for (&id, draw) in self.schedule.draws() {
            let player = self
                .schedule
                .player(id)
                .ok_or(TournamentError::UnknownPlayer(id))?;
            slots.push(Slot::new(
                player.clone(),
                draw.rounds_completed(games)?,
                draw.raw_points(games)?,
                draw.weighted_score(games, &self.policy)?,
                self.precision,
            ));
        }
        sort_standings(&mut slots);
        if let Some(max) = max {
            slots.truncate(max);
        }
        Ok(slots)
    }

    pub fn playoff_candidates(&self) -> Result<PlayoffOutcome, TournamentError> {
        let slots = self.leaderboard(None)?;
        resolve_playoff(&self.schedule, &slots)
    }

    /// Pair the two finalists, the leader taking white.
    ///
    /// Fails with [`TournamentError::UnresolvedPlayoff`] unless exactly two
    /// finalists come out of [`Tournament::playoff_candidates`].
    pub fn schedule_playoff(&mut self) -> Result<&Game, TournamentError> {
        let outcome = self.playoff_candidates()?;
        let [first, second] = outcome.finalists.as_slice() else {
            return Err(TournamentError::UnresolvedPlayoff {
                finalists: outcome.finalist_ids(),
            });
        };

        let game = Game::new(
            first.player().clone(),
            second.player().clone(),
            ColorCode::PlayerOneWhite,
        )
        .with_duration(self.schedule.game_time());
        info!("Playoff scheduled: {}", game);

        self.winner = None;
        Ok(self.playoff.insert(game))
    }

    /// Record the playoff result and return the champion. A playoff must
    /// have a winner, so draws and empty results are rejected.
    pub fn record_playoff_result(&mut self, result: GameResult) -> Result<PlayerId, TournamentError> {
        let game = self.playoff.as_mut().ok_or(TournamentError::NoPlayoff)?;
        match result {
            GameResult::Draw => return Err(GameError::DrawnGame.into()),
            GameResult::NoResult => return Err(GameError::NoResult.into()),
            GameResult::WhiteWins | GameResult::BlackWins => {}
        }

        game.set_result(result);
        let winner = game.winner_and_loser()?.0;
        info!("{} won the playoff", winner);

        let winner = winner.id();
        self.winner = Some(winner);
        Ok(winner)
    }

    /// Play out the scheduled playoff with a likely result; drawn games are
    /// replayed until someone wins.
    pub fn simulate_playoff<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PlayerId, TournamentError> {
        let mut game = self.playoff.clone().ok_or(TournamentError::NoPlayoff)?;
        loop {
            game.set_likely_random_result(rng);
            if !game.was_drawn() {
                break;
            }
            debug!("Playoff game drawn, replaying");
        }
        self.record_playoff_result(game.result())
    }
}

/// Pick the playoff finalists from a sorted leaderboard.
///
/// With a lone leader the runner-up spot is fought out among everyone tied
/// for second; with a tie for first the tied group is cut to two by loss
/// points. Fewer than three slots need no tiebreak at all.
pub fn resolve_playoff(schedule: &Schedule, slots: &[Slot]) -> Result<PlayoffOutcome, TournamentError> {
    let [first, second, third, ..] = slots else {
        return Ok(PlayoffOutcome {
            tiebreak_used: false,
            finalists: slots.to_vec(),
        });
    };

    if first.weighted_score() > second.weighted_score() {
        if second.weighted_score() > third.weighted_score() {
            return Ok(PlayoffOutcome {
                tiebreak_used: false,
                finalists: vec![first.clone(), second.clone()],
            });
        }

        let tied = get_tied_list(&slots[1..]);
        info!("{} players tied for second place", tied.len());
        let mut contenders = get_one_playoff_contender_from_all_tied(schedule, &tied)?;
        if contenders.len() > 1 {
            contenders = extract_using_losses(schedule, 1, &contenders)?;
        }

        let mut finalists = vec![first.clone()];
        finalists.extend(contenders);
        return Ok(PlayoffOutcome {
            tiebreak_used: true,
            finalists,
        });
    }

    if second.weighted_score() > third.weighted_score() {
        return Ok(PlayoffOutcome {
            tiebreak_used: false,
            finalists: vec![first.clone(), second.clone()],
        });
    }

    let tied = get_tied_list(slots);
    info!("{} players tied for first place", tied.len());
    Ok(PlayoffOutcome {
        tiebreak_used: true,
        finalists: extract_using_losses(schedule, 2, &tied)?,
    })
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
