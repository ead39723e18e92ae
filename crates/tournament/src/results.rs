//! Roster input, and schedule and standings records for storage or display

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use social_core::{ColorCode, Game, GameId, GameResult, Player, PlayerId};
use std::path::Path;

use crate::error::{ExportError, TournamentError};
use crate::schedule::Schedule;
use crate::slot::Slot;
use crate::tournament::{PlayoffOutcome, ResultTally, Tournament};

/// One roster line as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub vip: bool,
    #[serde(default)]
    pub late: bool,
}

impl RosterEntry {
    pub fn into_player(self) -> Result<Player, ExportError> {
        Ok(Player::new(self.id, &self.name, self.level, self.late, self.vip)?)
    }
}

impl From<&Player> for RosterEntry {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            level: player.level().value(),
            vip: player.is_vip(),
            late: player.is_late(),
        }
    }
}

/// Parse a JSON roster: an array of [`RosterEntry`]
pub fn parse_roster(json: &str) -> Result<Vec<Player>, ExportError> {
    let entries: Vec<RosterEntry> = serde_json::from_str(json)?;
    entries.into_iter().map(RosterEntry::into_player).collect()
}

/// Load a JSON roster file
pub fn load_roster(path: &Path) -> Result<Vec<Player>, ExportError> {
    let contents = std::fs::read_to_string(path)?;
    parse_roster(&contents)
}

/// A scheduled game. Byes have no second player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: GameId,
    pub player_one_id: PlayerId,
    pub player_two_id: Option<PlayerId>,
    pub color_code: ColorCode,
    pub bye: bool,
    pub result: GameResult,
}

impl GameRecord {
    fn new(game_id: GameId, game: &Game) -> Self {
        Self {
            game_id,
            player_one_id: game.player_one().id(),
            player_two_id: (!game.is_bye()).then(|| game.player_two().id()),
            color_code: game.color_code(),
            bye: game.is_bye(),
            result: game.result(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub games: Vec<GameRecord>,
}

/// Every round-set of a schedule in playing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub title: String,
    pub number_of_rounds: usize,
    pub rounds: Vec<RoundRecord>,
}

impl ScheduleRecord {
    pub fn from_schedule(
        title: &str,
        schedule: &Schedule,
        round_times: &[String],
    ) -> Result<Self, ExportError> {
        let mut rounds = Vec::with_capacity(schedule.rounds().len());
        for (i, set) in schedule.rounds().iter().enumerate() {
            let mut games = Vec::with_capacity(set.len());
            for &id in set {
                let game = schedule.game(id).map_err(TournamentError::from)?;
                games.push(GameRecord::new(id, game));
            }
            rounds.push(RoundRecord {
                round: i + 1,
                time: round_times.get(i).cloned(),
                games,
            });
        }
        Ok(Self {
            title: title.to_string(),
            number_of_rounds: schedule.number_of_rounds(),
            rounds,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub rounds_completed: usize,
    pub raw_points: f64,
    pub weighted_points: f64,
}

impl From<&Slot> for LeaderboardEntry {
    fn from(slot: &Slot) -> Self {
        let (name, rounds_completed, raw_points, weighted_points) = slot.line();
        Self {
            player_id: slot.player().id(),
            name: name.to_string(),
            rounds_completed,
            raw_points,
            weighted_points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayoffRecord {
    pub tiebreak_used: bool,
    pub finalist_player_ids: Vec<PlayerId>,
}

impl From<&PlayoffOutcome> for PlayoffRecord {
    fn from(outcome: &PlayoffOutcome) -> Self {
        Self {
            tiebreak_used: outcome.tiebreak_used,
            finalist_player_ids: outcome.finalist_ids(),
        }
    }
}

/// Standings of a tournament at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub name: String,
    pub event_date: NaiveDate,
    pub results: ResultTally,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub playoff: PlayoffRecord,
    #[serde(default)]
    pub winner: Option<PlayerId>,
}

impl TournamentReport {
    pub fn from_tournament(tournament: &Tournament) -> Result<Self, ExportError> {
        let leaderboard = tournament.leaderboard(None)?;
        let playoff = tournament.playoff_candidates()?;
        Ok(Self {
            name: tournament.name().to_string(),
            event_date: tournament.event_date(),
            results: tournament.result_numbers()?,
            leaderboard: leaderboard.iter().map(LeaderboardEntry::from).collect(),
            playoff: PlayoffRecord::from(&playoff),
            winner: tournament.winner(),
        })
    }

    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn player_name(&self, id: PlayerId) -> &str {
        self.leaderboard
            .iter()
            .find(|entry| entry.player_id == id)
            .map(|entry| entry.name.as_str())
            .unwrap_or("?")
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ({}) ===\n\n", self.name, self.event_date));
        report.push_str(&format!(
            "Results: {} wins, {} losses, {} draws, {} byes\n\n",
            self.results.wins, self.results.losses, self.results.draws, self.results.byes
        ));

        report.push_str("Leaderboard:\n");
        report.push_str(&format!(
            "{:<4} {:<24} {:>6} {:>6} {:>8}\n",
            "#", "Player", "Rd", "Rp", "Wp"
        ));
        report.push_str(&"-".repeat(52));
        report.push('\n');

        for (rank, entry) in self.leaderboard.iter().enumerate() {
            report.push_str(&format!(
                "{:<4} {:<24} {:>6} {:>6.1} {:>8.2}\n",
                rank + 1,
                entry.name,
                entry.rounds_completed,
                entry.raw_points,
                entry.weighted_points
            ));
        }

        let finalists: Vec<&str> = self
            .playoff
            .finalist_player_ids
            .iter()
            .map(|&id| self.player_name(id))
            .collect();
        report.push_str(&format!("\nFinalists: {}", finalists.join(", ")));
        if self.playoff.tiebreak_used {
            report.push_str(" (after tiebreak)");
        }
        report.push('\n');

        if let Some(winner) = self.winner {
            report.push_str(&format!("Champion: {}\n", self.player_name(winner)));
        }
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
