//! Breaking ties for the playoff slots.
//!
//! Two tied players are separated by their own game if it was decisive, and
//! otherwise by a performance bonus for the lower-rated player. Larger ties
//! fall through to accumulated loss points: losing to strong players costs
//! more than losing to weak ones, so the fewest loss points goes through.

use social_core::{Game, PlayerId};
use tracing::{info, warn};

use crate::error::TournamentError;
use crate::schedule::Schedule;
use crate::slot::Slot;

/// Leading slots that share the first slot's weighted score
pub fn get_tied_list(candidates: &[Slot]) -> Vec<Slot> {
    match candidates.first() {
        Some(leader) => candidates
            .iter()
            .take_while(|slot| slot.ties_with(leader))
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// The game two players played against each other, if any
pub fn get_common_game<'a>(
    schedule: &'a Schedule,
    first: PlayerId,
    second: PlayerId,
) -> Result<Option<&'a Game>, TournamentError> {
    let draw = schedule
        .draw(first)
        .ok_or(TournamentError::UnknownPlayer(first))?;
    match draw.game_against(second, schedule.games())? {
        Some(id) => Ok(Some(schedule.game(id)?)),
        None => Ok(None),
    }
}

/// Narrow a tie for one playoff place.
///
/// Exactly two candidates are settled by head-to-head, then by performance
/// bonus. When neither applies both are returned. Three or more candidates
/// are returned untouched for [`extract_using_losses`].
pub fn get_one_playoff_contender_from_all_tied(
    schedule: &Schedule,
    candidates: &[Slot],
) -> Result<Vec<Slot>, TournamentError> {
    let [first, second] = candidates else {
        return Ok(candidates.to_vec());
    };
    let first_player = first.player();
    let second_player = second.player();

    if let Some(game) = get_common_game(schedule, first_player.id(), second_player.id())? {
        if game.is_over() && !game.was_drawn() {
            let winner = if game.did_player_win(first_player.id())? {
                first
            } else {
                second
            };
            info!(
                "{} won the head-to-head game, breaking the tie",
                winner.player().name()
            );
            return Ok(vec![winner.clone()]);
        }
    }

    // Drawn or never played: the underdog earns a performance bonus
    match first_player.level().cmp(&second_player.level()) {
        std::cmp::Ordering::Less => {
            info!(
                "{} is lower rated than {}, performance bonus",
                first_player.name(),
                second_player.name()
            );
            Ok(vec![first.clone()])
        }
        std::cmp::Ordering::Greater => {
            info!(
                "{} is lower rated than {}, performance bonus",
                second_player.name(),
                first_player.name()
            );
            Ok(vec![second.clone()])
        }
        std::cmp::Ordering::Equal => {
            warn!(
                "{} and {} are the same level, no performance bonus",
                first_player.name(),
                second_player.name()
            );
            Ok(candidates.to_vec())
        }
    }
}

/// Keep the `needed` candidates with the fewest loss points.
///
/// Anyone tied on loss points with the last candidate kept is kept as well,
/// so the result may be longer than `needed` when the tie is genuine.
pub fn extract_using_losses(
    schedule: &Schedule,
    needed: usize,
    candidates: &[Slot],
) -> Result<Vec<Slot>, TournamentError> {
    let mut scored = Vec::with_capacity(candidates.len());
    for slot in candidates {
        let id = slot.player().id();
        let draw = schedule.draw(id).ok_or(TournamentError::UnknownPlayer(id))?;
        let losses = draw.loss_points(schedule.games())?;
        info!("Player: {}, Loss points: {}", slot.player().name(), losses);
        scored.push((losses, slot));
    }
    scored.sort_by_key(|(losses, _)| *losses);

    let Some(&(cutoff, _)) = scored.get(needed.saturating_sub(1)) else {
        return Ok(candidates.to_vec());
    };
    let kept: Vec<Slot> = scored
        .iter()
        .enumerate()
        .take_while(|(i, (losses, _))| *i < needed || *losses == cutoff)
        .map(|(_, (_, slot))| (*slot).clone())
        .collect();

    if kept.len() > needed {
        warn!(
            "Loss points could not separate {} candidates for {} places",
            kept.len(),
            needed
        );
    }
    Ok(kept)
}

#[cfg(test)]
#[path = "tiebreak_tests.rs"]
mod tiebreak_tests;
