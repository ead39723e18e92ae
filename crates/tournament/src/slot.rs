//! A place on the leaderboard

use social_core::Player;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Snapshot of one player's standing. Ordering looks only at weighted
/// points; anything finer is the tiebreak cascade's job.
#[derive(Debug, Clone)]
pub struct Slot {
    player: Arc<Player>,
    rounds_completed: usize,
    raw_points: f64,
    weighted_points: f64,
}

impl Slot {
    /// Weighted points are rounded to `precision` decimal places
    pub fn new(
        player: Arc<Player>,
        rounds_completed: usize,
        raw_points: f64,
        weighted_points: f64,
        precision: u32,
    ) -> Self {
        Self {
            player,
            rounds_completed,
            raw_points,
            weighted_points: round_to(weighted_points, precision),
        }
    }

    pub fn player(&self) -> &Arc<Player> {
        &self.player
    }

    pub fn rounds_completed(&self) -> usize {
        self.rounds_completed
    }

    pub fn raw_points(&self) -> f64 {
        self.raw_points
    }

    pub fn weighted_score(&self) -> f64 {
        self.weighted_points
    }

    /// `(name, rounds, raw points, weighted points)`
    pub fn line(&self) -> (&str, usize, f64, f64) {
        (
            self.player.name(),
            self.rounds_completed,
            self.raw_points,
            self.weighted_points,
        )
    }

    /// Higher weighted score first
    pub fn by_standing(a: &Slot, b: &Slot) -> Ordering {
        b.weighted_points.total_cmp(&a.weighted_points)
    }

    pub fn ties_with(&self, other: &Slot) -> bool {
        self.weighted_points == other.weighted_points
    }
}

/// Stable sort into leaderboard order; equal scores keep their input order
pub fn sort_standings(slots: &mut [Slot]) {
    slots.sort_by(Slot::by_standing);
}

/// Decimal places an f64 can still round to
const MAX_PRECISION: u32 = 15;

fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(precision.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Rd:{} | Rp:{} | Wp:{}",
            self.player.name(),
            self.rounds_completed,
            self.raw_points,
            self.weighted_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: u32, weighted: f64) -> Slot {
        let player = Arc::new(Player::new(id, &format!("P{id}"), 3, false, false).unwrap());
        Slot::new(player, 4, 2.0, weighted, 2)
    }

    #[test]
    fn test_weighted_points_are_rounded() {
        assert_eq!(slot(1, 3.14159).weighted_score(), 3.14);
        assert_eq!(slot(1, 2.005_1).weighted_score(), 2.01);
    }

    #[test]
    fn test_huge_precision_is_clamped() {
        let player = Arc::new(Player::new(1, "P1", 3, false, false).unwrap());
        for precision in [16, 400, u32::MAX] {
            let zero = Slot::new(player.clone(), 0, 0.0, 0.0, precision);
            assert_eq!(zero.weighted_score(), 0.0);

            let score = Slot::new(player.clone(), 4, 2.0, 7.5, precision);
            assert_eq!(score.weighted_score(), 7.5);
        }
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let mut slots = vec![slot(1, 4.0), slot(2, 9.5), slot(3, 4.0), slot(4, 12.0)];
        sort_standings(&mut slots);

        let order: Vec<_> = slots.iter().map(|s| s.player().id()).collect();
        assert_eq!(order, vec![4, 2, 1, 3]);
        assert!(slots[2].ties_with(&slots[3]));
    }

    #[test]
    fn test_display() {
        assert_eq!(slot(7, 5.5).to_string(), "P7 | Rd:4 | Rp:2 | Wp:5.5");
    }
}
