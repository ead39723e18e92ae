//! End-to-end checks on generated schedules and their scoring

use rand::rngs::StdRng;
use rand::SeedableRng;
use social_core::{Player, ScoringPolicy};
use std::collections::HashSet;
use tournament::{
    get_number_of_boards_and_tweaks, Schedule, SchedulingError, Tournament, TournamentConfig,
};

fn roster(advanced: usize, intermediate: usize, beginner: usize) -> Vec<Player> {
    let mut players = Vec::new();
    let mut id = 1;
    for (count, levels) in [(advanced, [5, 4]), (intermediate, [3, 3]), (beginner, [2, 1])] {
        for i in 0..count {
            players.push(Player::new(id, &format!("Player {id}"), levels[i % 2], false, false).unwrap());
            id += 1;
        }
    }
    players
}

fn generate(players: Vec<Player>, seed: u64) -> Result<Schedule, SchedulingError> {
    Schedule::generate(
        players,
        &TournamentConfig::default(),
        &mut StdRng::seed_from_u64(seed),
    )
}

#[test]
fn twenty_players_with_twelve_beginners_is_rejected() {
    let error = generate(roster(2, 6, 12), 1).unwrap_err();
    assert_eq!(
        error,
        SchedulingError::TooManyBeginners {
            count: 12,
            limit: 10
        }
    );
}

#[test]
fn twenty_players_with_eight_beginners_succeeds() {
    let schedule = generate(roster(2, 10, 8), 1).unwrap();
    let (boards, lopsided, bye) = get_number_of_boards_and_tweaks(20);
    assert_eq!((boards, lopsided, bye), (5, false, false));

    assert_eq!(schedule.rounds().len(), 8);
    for set in schedule.rounds() {
        assert_eq!(set.len(), boards);
    }
    for draw in schedule.draws().values() {
        assert_eq!(draw.games_scheduled(), 4);
    }
}

#[test]
fn no_opponent_is_met_twice() {
    for (seed, players) in [(1, roster(4, 10, 6)), (2, roster(6, 9, 8)), (3, roster(3, 14, 6))] {
        let schedule = generate(players, seed).unwrap();
        for (&id, draw) in schedule.draws() {
            let opponents: HashSet<_> = draw
                .games()
                .iter()
                .map(|&game| schedule.game(game).unwrap().opponent_of(id).id())
                .collect();
            assert_eq!(opponents.len(), schedule.number_of_rounds());
        }
    }
}

#[test]
fn unplayed_schedule_scores_nothing() {
    let schedule = generate(roster(4, 10, 7), 4).unwrap();
    let policy = ScoringPolicy::default();
    for draw in schedule.draws().values() {
        assert_eq!(draw.weighted_score(schedule.games(), &policy).unwrap(), 0.0);
        assert_eq!(draw.raw_points(schedule.games()).unwrap(), 0.0);
        assert_eq!(draw.loss_points(schedule.games()).unwrap(), 0);
    }
}

#[test]
fn raw_points_stay_within_rounds() {
    for seed in 0..5 {
        let schedule = generate(roster(5, 12, 8), seed).unwrap();
        let mut tournament = Tournament::new(schedule, &TournamentConfig::default());
        tournament.simulate_results(&mut StdRng::seed_from_u64(seed));

        let board = tournament.leaderboard(None).unwrap();
        assert_eq!(board.len(), 25);
        for slot in &board {
            assert!(slot.raw_points() >= 0.0);
            assert!(slot.raw_points() <= 4.0);
            assert_eq!(slot.rounds_completed(), 4);
            assert!(slot.weighted_score() >= 0.0);
        }
        for pair in board.windows(2) {
            assert!(pair[0].weighted_score() >= pair[1].weighted_score());
        }
    }
}

#[test]
fn custom_scoring_flows_into_leaderboard() {
    let config = TournamentConfig {
        scoring: ScoringPolicy {
            draw: 0.0,
            standard_win: [1.0; 5],
            upset_win: [1.0; 4],
        },
        ..Default::default()
    };
    let schedule = Schedule::generate(roster(4, 8, 4), &config, &mut StdRng::seed_from_u64(8)).unwrap();
    let mut tournament = Tournament::new(schedule, &config);
    tournament.simulate_results(&mut StdRng::seed_from_u64(8));

    // every win is worth one point and draws nothing, so weighted
    // points count wins exactly
    for slot in tournament.leaderboard(None).unwrap() {
        let draw = tournament.draw(slot.player().id()).unwrap();
        let games = tournament.schedule().games();
        let wins = draw
            .games()
            .iter()
            .map(|&id| games.get(id).unwrap())
            .filter(|game| game.is_over() && !game.was_drawn())
            .filter(|game| game.did_player_win(slot.player().id()).unwrap())
            .count();
        assert_eq!(slot.weighted_score(), wins as f64);
    }
}
