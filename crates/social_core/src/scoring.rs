//! Weighted scoring policy
//!
//! A win is worth more the stronger the opponent, and a win over a
//! higher-level opponent (an upset) is paid from a separate, richer table.
//! The numbers are tournament policy, so they live in a value that can be
//! loaded from configuration rather than in constants.

use serde::{Deserialize, Serialize};

use crate::types::Level;

/// Points table used by [`Draw::weighted_score`](crate::Draw::weighted_score)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Points for a drawn game
    pub draw: f64,
    /// Points for an expected win, indexed by the loser's level (1..=5)
    pub standard_win: [f64; 5],
    /// Points for an upset win, indexed by the loser's level (2..=5)
    pub upset_win: [f64; 4],
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            draw: 0.5,
            standard_win: [1.0, 2.0, 3.0, 4.0, 5.0],
            upset_win: [3.0, 4.5, 6.0, 7.5],
        }
    }
}

impl ScoringPolicy {
    /// A king can never be upset-winner; everyone else scores an upset by
    /// beating anyone rated above them.
    pub fn is_upset(winner: Level, loser: Level) -> bool {
        loser > winner
    }

    pub fn standard_points(&self, loser: Level) -> f64 {
        self.standard_win[loser.index()]
    }

    pub fn upset_points(&self, loser: Level) -> f64 {
        self.upset_win[loser.index().saturating_sub(1)]
    }

    /// Weighted value of `winner` beating `loser`
    pub fn win_points(&self, winner: Level, loser: Level) -> f64 {
        if Self::is_upset(winner, loser) {
            self.upset_points(loser)
        } else {
            self.standard_points(loser)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upset_thresholds() {
        assert!(!ScoringPolicy::is_upset(Level::King, Level::King));
        assert!(ScoringPolicy::is_upset(Level::Knight, Level::King));
        assert!(!ScoringPolicy::is_upset(Level::Knight, Level::Knight));
        assert!(ScoringPolicy::is_upset(Level::Adept, Level::Knight));
        assert!(ScoringPolicy::is_upset(Level::Improving, Level::Adept));
        assert!(ScoringPolicy::is_upset(Level::Beginner, Level::Improving));
        assert!(!ScoringPolicy::is_upset(Level::Beginner, Level::Beginner));
    }

    #[test]
    fn test_default_table() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.win_points(Level::King, Level::Beginner), 1.0);
        assert_eq!(policy.win_points(Level::King, Level::Knight), 4.0);
        assert_eq!(policy.win_points(Level::Knight, Level::King), 7.5);
        assert_eq!(policy.win_points(Level::Beginner, Level::Improving), 3.0);
        assert_eq!(policy.win_points(Level::Adept, Level::Adept), 3.0);
    }

    #[test]
    fn test_upset_pays_more_than_standard() {
        let policy = ScoringPolicy::default();
        for loser in Level::ALL.into_iter().skip(1) {
            assert!(policy.upset_points(loser) > policy.standard_points(loser));
        }
    }
}
