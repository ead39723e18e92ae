//! Tournament configuration, loadable from TOML

use serde::{Deserialize, Serialize};
use social_core::ScoringPolicy;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Everything about an evening that is policy rather than roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub title: String,
    /// Games per player, and round-sets per bracket
    pub number_of_rounds: usize,
    pub game_minutes: u64,
    /// Decimal places kept for weighted points on the leaderboard
    pub weighted_precision: u32,
    /// Optional clock labels for each round-set, e.g. "7:15"
    pub round_times: Vec<String>,
    pub scoring: ScoringPolicy,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            title: "Social Chess".to_string(),
            number_of_rounds: 4,
            game_minutes: 10,
            weighted_precision: 2,
            round_times: Vec::new(),
            scoring: ScoringPolicy::default(),
        }
    }
}

impl TournamentConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn game_time(&self) -> Duration {
        Duration::from_secs(self.game_minutes * 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = TournamentConfig::from_toml_str("").unwrap();
        assert_eq!(config, TournamentConfig::default());
        assert_eq!(config.game_time(), Duration::from_secs(600));
    }

    #[test]
    fn test_partial_overrides() {
        let config = TournamentConfig::from_toml_str(
            r#"
            title = "Thursday Blitz"
            number_of_rounds = 3
            round_times = ["6:30", "6:45"]

            [scoring]
            draw = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Thursday Blitz");
        assert_eq!(config.number_of_rounds, 3);
        assert_eq!(config.round_times.len(), 2);
        assert_eq!(config.scoring.draw, 0.25);
        assert_eq!(
            config.scoring.standard_win,
            ScoringPolicy::default().standard_win
        );
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(TournamentConfig::from_toml_str("number_of_rounds = \"four\"").is_err());
    }
}
