//! Board counts for the two alternating brackets.
//!
//! Everyone sits out every other round-set, so a quarter of the players is
//! the number of boards in use at a time. The remainder mod 4 decides the
//! adjustments, and bracket B always absorbs them.

use serde::{Deserialize, Serialize};

/// `(boards, lopsided, has_bye)` for `players` players.
///
/// | players mod 4 | boards | lopsided | bye |
/// |---|---|---|---|
/// | 0 | n/4 | no | no |
/// | 1 | n/4 | no | yes |
/// | 2 | n/4 + 1 | yes | no |
/// | 3 | n/4 + 1 | yes | yes |
pub fn get_number_of_boards_and_tweaks(players: usize) -> (usize, bool, bool) {
    let minimum_boards = players / 4;
    match players % 4 {
        0 => (minimum_boards, false, false),
        1 => (minimum_boards, false, true),
        2 => (minimum_boards + 1, true, false),
        _ => (minimum_boards + 1, true, true),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub players: usize,
    pub boards: usize,
    pub lopsided: bool,
    pub bye: bool,
}

impl BoardLayout {
    pub fn for_players(players: usize) -> Self {
        let (boards, lopsided, bye) = get_number_of_boards_and_tweaks(players);
        Self {
            players,
            boards,
            lopsided,
            bye,
        }
    }

    /// Boards used by each group A round-set
    pub fn a_boards(&self) -> usize {
        self.players / 4
    }

    /// Players group A must hold
    pub fn a_slots(&self) -> usize {
        self.a_boards() * 2
    }

    /// Length of the first half of group B; the lopsided seat lands here
    pub fn b_first_half(&self) -> usize {
        self.a_boards() + usize::from(self.lopsided)
    }

    /// Games in each group B round-set, counting the bye as a board
    pub fn b_boards(&self) -> usize {
        self.b_first_half() + usize::from(self.bye)
    }

    /// Every game of the schedule, byes included
    pub fn total_games(&self, rounds_per_group: usize) -> usize {
        rounds_per_group * (self.a_boards() + self.b_boards())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boards_and_tweaks_table() {
        assert_eq!(get_number_of_boards_and_tweaks(20), (5, false, false));
        assert_eq!(get_number_of_boards_and_tweaks(21), (5, false, true));
        assert_eq!(get_number_of_boards_and_tweaks(22), (6, true, false));
        assert_eq!(get_number_of_boards_and_tweaks(23), (6, true, true));
    }

    #[test]
    fn test_boards_and_tweaks_every_residue() {
        for players in 4..200 {
            let (boards, lopsided, bye) = get_number_of_boards_and_tweaks(players);
            let base = players / 4;
            match players % 4 {
                0 => assert_eq!((boards, lopsided, bye), (base, false, false)),
                1 => assert_eq!((boards, lopsided, bye), (base, false, true)),
                2 => assert_eq!((boards, lopsided, bye), (base + 1, true, false)),
                _ => assert_eq!((boards, lopsided, bye), (base + 1, true, true)),
            }
        }
    }

    #[test]
    fn test_layout_seats_cover_everyone() {
        for players in 16..120 {
            let layout = BoardLayout::for_players(players);
            let b_players = players - layout.a_slots();
            // second half of B is the first half plus the bye seat
            assert_eq!(b_players, 2 * layout.b_first_half() + usize::from(layout.bye));
        }
    }

    #[test]
    fn test_total_games() {
        assert_eq!(BoardLayout::for_players(20).total_games(4), 40);
        assert_eq!(BoardLayout::for_players(21).total_games(4), 44);
        assert_eq!(BoardLayout::for_players(22).total_games(4), 44);
        assert_eq!(BoardLayout::for_players(23).total_games(4), 48);
    }
}
