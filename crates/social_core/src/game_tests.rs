use super::*;
use crate::types::Level;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn player(id: PlayerId, level: u8) -> Arc<Player> {
    Arc::new(Player::new(id, &format!("P{id}"), level, false, false).unwrap())
}

#[test]
fn test_unset_colors_are_errors() {
    let game = Game::new(player(1, 3), player(2, 4), ColorCode::Unset);

    assert_eq!(game.white_player().unwrap_err(), GameError::ColorsNotSet);
    assert_eq!(game.black_player().unwrap_err(), GameError::ColorsNotSet);

    let mut game = game;
    game.set_result(GameResult::WhiteWins);
    assert_eq!(game.winner_and_loser().unwrap_err(), GameError::ColorsNotSet);
}

#[test]
fn test_winner_needs_result() {
    let game = Game::new(player(1, 3), player(2, 4), ColorCode::PlayerOneWhite);
    assert_eq!(game.winner_and_loser().unwrap_err(), GameError::NoResult);
}

#[test]
fn test_winner_on_draw_is_error() {
    let mut game = Game::new(player(1, 3), player(2, 4), ColorCode::PlayerOneWhite);
    game.set_result(GameResult::Draw);
    assert!(game.was_drawn());
    assert_eq!(game.winner_and_loser().unwrap_err(), GameError::DrawnGame);
}

#[test]
fn test_black_win_with_player_one_black() {
    let mut game = Game::new(player(1, 3), player(2, 4), ColorCode::PlayerOneBlack);
    game.set_result(GameResult::BlackWins);

    let (winner, loser) = game.winner_and_loser().unwrap();
    assert_eq!(winner.id(), 1);
    assert_eq!(loser.id(), 2);
    assert!(game.did_player_win(1).unwrap());
    assert!(!game.did_player_win(2).unwrap());
}

#[test]
fn test_flip_colors() {
    let mut game = Game::new(player(1, 3), player(2, 4), ColorCode::Unset);
    assert_eq!(game.flip_colors(), Err(GameError::ColorsNotSet));

    game.make_player_one_white();
    game.flip_colors().unwrap();
    assert_eq!(game.white_player().unwrap().id(), 2);
    assert_eq!(game.color_of(1).unwrap(), Color::Black);
}

#[test]
fn test_bye_game() {
    let game = Game::bye(player(5, 2), Arc::new(Player::bye()), ColorCode::PlayerOneWhite);

    assert!(game.is_bye());
    assert_eq!(game.to_string(), "P5 has a bye");
    assert_eq!(
        game.white_first_names().unwrap(),
        ("P5".to_string(), BYE_NAME.to_string())
    );
    let (winner, loser) = game.winner_and_loser().unwrap();
    assert_eq!(winner.id(), 5);
    assert!(loser.is_bye());
}

#[test]
fn test_display_and_summary() {
    let mut game = Game::new(player(1, 3), player(2, 4), ColorCode::PlayerOneBlack);
    assert_eq!(game.to_string(), "P2(4)[W] vs. P1(3)[B]");

    game.set_result(GameResult::WhiteWins);
    assert_eq!(game.result_summary().unwrap(), "P2(4) won as white vs. P1(3)");
    assert_eq!(game.game_points(), 7);
    assert_eq!(game.opponent_of(2).level(), Level::Adept);
}

#[test]
fn test_likely_random_result_is_reproducible() {
    let mut first = Game::new(player(1, 1), player(2, 5), ColorCode::Unset);
    let mut second = first.clone();

    first.set_likely_random_result(&mut StdRng::seed_from_u64(42));
    second.set_likely_random_result(&mut StdRng::seed_from_u64(42));

    assert!(first.is_over());
    assert!(first.are_colors_set());
    assert_eq!(first.result(), second.result());
    assert_eq!(first.color_code(), second.color_code());
}

#[test]
fn test_likely_random_result_favours_stronger_player() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut king_wins = 0;
    for _ in 0..500 {
        let mut game = Game::new(player(1, 1), player(2, 5), ColorCode::PlayerOneWhite);
        game.set_likely_random_result(&mut rng);
        if !game.was_drawn() && game.did_player_win(2).unwrap() {
            king_wins += 1;
        }
    }
    assert!(king_wins > 300, "king won only {king_wins} of 500");
}

#[test]
fn test_likely_random_result_credits_the_winners_color() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut black_wins = 0;
    for _ in 0..500 {
        // the king is player one and plays black
        let mut game = Game::new(player(1, 5), player(2, 1), ColorCode::PlayerOneBlack);
        game.set_likely_random_result(&mut rng);
        assert_eq!(game.color_code(), ColorCode::PlayerOneBlack);
        if game.result() == GameResult::BlackWins {
            assert!(game.did_player_win(1).unwrap());
            black_wins += 1;
        }
    }
    assert!(black_wins > 300, "black won only {black_wins} of 500");
}

#[test]
fn test_likely_random_result_picks_colors_when_unset() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let mut game = Game::new(player(1, 3), player(2, 3), ColorCode::Unset);
        game.set_likely_random_result(&mut rng);
        assert!(game.are_colors_set());
        assert!(game.is_over());
        if !game.was_drawn() {
            let (winner, _) = game.winner_and_loser().unwrap();
            let expected = match game.color_of(winner.id()).unwrap() {
                Color::White => GameResult::WhiteWins,
                Color::Black => GameResult::BlackWins,
            };
            assert_eq!(game.result(), expected);
        }
    }
}

#[test]
fn test_random_result_always_decides() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let mut game = Game::new(player(1, 2), player(2, 2), ColorCode::PlayerOneWhite);
        game.set_random_result(&mut rng);
        assert!(game.is_over());
    }
}
