//! Building the pairings for an evening.
//!
//! Players are sorted into three tiers and split into two groups. Group A
//! (the advanced players topped up with intermediates) and group B (the
//! beginners, latecomers and remaining intermediates) each run their own
//! rotation and take turns on the boards: A1, B1, A2, B2, ...
//!
//! Each group is cut into a first and a second half. In round-set `k` the
//! i-th player of the first half meets the second-half player `k` seats to
//! the left, so nobody meets the same opponent twice while there are at least
//! as many seats as rounds.

use rand::seq::SliceRandom;
use rand::Rng;
use social_core::{
    ColorCode, Draw, Game, GameArena, GameError, GameId, Player, PlayerError, PlayerId, Tier,
    BYE_ID,
};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::boards::BoardLayout;
use crate::config::TournamentConfig;
use crate::error::SchedulingError;

/// A finished set of pairings. Only [`Schedule::generate`] builds one, so
/// every schedule in circulation satisfies the draw invariants.
#[derive(Debug, Clone)]
pub struct Schedule {
    players: Vec<Arc<Player>>,
    number_of_rounds: usize,
    layout: BoardLayout,
    game_time: Duration,
    bye_player: Arc<Player>,

    beginner_players: Vec<Arc<Player>>,
    intermediate_players: Vec<Arc<Player>>,
    advanced_players: Vec<Arc<Player>>,

    a_group: Vec<Arc<Player>>,
    b_group: Vec<Arc<Player>>,

    rounds: Vec<Vec<GameId>>,
    games: GameArena,
    draws: BTreeMap<PlayerId, Draw>,
}

impl Schedule {
    /// Sort, shuffle, divide, pair and verify `roster`.
    ///
    /// Fails with a [`SchedulingError`] if the roster cannot be split into
    /// two valid brackets or the pairings would leave anyone over- or
    /// under-scheduled.
    pub fn generate<R: Rng + ?Sized>(
        roster: Vec<Player>,
        config: &TournamentConfig,
        rng: &mut R,
    ) -> Result<Self, SchedulingError> {
        let mut schedule = Self::new(roster, config.number_of_rounds, config.game_time())?;
        schedule.sort_players();
        schedule.initialize_draws();
        schedule.shuffle_players(rng);
        schedule.divide_players()?;
        schedule.schedule_players()?;
        schedule.verify_draws()?;

        info!(
            "Scheduled {} players into {} round-sets ({} games)",
            schedule.players.len(),
            schedule.rounds.len(),
            schedule.games.len()
        );
        Ok(schedule)
    }

    fn new(
        roster: Vec<Player>,
        number_of_rounds: usize,
        game_time: Duration,
    ) -> Result<Self, SchedulingError> {
        if roster.is_empty() {
            return Err(SchedulingError::EmptyRoster);
        }
        if number_of_rounds == 0 {
            return Err(SchedulingError::InvalidRounds);
        }

        let mut seen = HashSet::new();
        for player in &roster {
            if player.is_bye() {
                return Err(PlayerError::ReservedId(BYE_ID).into());
            }
            if !seen.insert(player.id()) {
                return Err(SchedulingError::DuplicatePlayer(player.id()));
            }
        }

        let layout = BoardLayout::for_players(roster.len());
        if layout.a_boards() < number_of_rounds {
            return Err(SchedulingError::TooFewPlayers {
                players: roster.len(),
                needed: number_of_rounds * 4,
            });
        }

        Ok(Self {
            players: roster.into_iter().map(Arc::new).collect(),
            number_of_rounds,
            layout,
            game_time,
            bye_player: Arc::new(Player::bye()),
            beginner_players: Vec::new(),
            intermediate_players: Vec::new(),
            advanced_players: Vec::new(),
            a_group: Vec::new(),
            b_group: Vec::new(),
            rounds: Vec::new(),
            games: GameArena::new(),
            draws: BTreeMap::new(),
        })
    }

    /// Partition the roster by tier, keeping roster order within each tier
    fn sort_players(&mut self) {
        debug!("About to sort players");
        for player in &self.players {
            let tier = match player.tier() {
                Tier::Beginner => &mut self.beginner_players,
                Tier::Intermediate => &mut self.intermediate_players,
                Tier::Advanced => &mut self.advanced_players,
            };
            tier.push(player.clone());
        }
    }

    fn initialize_draws(&mut self) {
        self.draws = self
            .players
            .iter()
            .map(|player| (player.id(), Draw::new(player.clone(), self.number_of_rounds)))
            .collect();
    }

    /// Randomize order within each tier so every evening pairs differently
    fn shuffle_players<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.beginner_players.shuffle(rng);
        self.intermediate_players.shuffle(rng);
        self.advanced_players.shuffle(rng);
    }

    /// Fill group A with on-time advanced players, then intermediates;
    /// everyone else goes to group B.
    fn divide_players(&mut self) -> Result<(), SchedulingError> {
        let limit = self.players.len() / 2;

        if self.advanced_players.len() > limit {
            return Err(SchedulingError::TooManyAdvanced {
                count: self.advanced_players.len(),
                limit,
            });
        }
        if self.beginner_players.len() > limit {
            return Err(SchedulingError::TooManyBeginners {
                count: self.beginner_players.len(),
                limit,
            });
        }

        let (late, on_time): (Vec<_>, Vec<_>) = self
            .advanced_players
            .iter()
            .cloned()
            .partition(|player| player.is_late());

        let mut a_group = on_time;
        let mut b_group = late;
        b_group.extend(self.beginner_players.iter().cloned());

        let needed_a_slots = self.layout.a_slots();
        debug!("Needed a slots was: {}", needed_a_slots);

        if a_group.len() > needed_a_slots {
            return Err(SchedulingError::BracketOverflow {
                count: a_group.len(),
                slots: needed_a_slots,
            });
        }
        let needed = needed_a_slots - a_group.len();
        if needed > self.intermediate_players.len() {
            return Err(SchedulingError::NotEnoughIntermediates {
                needed,
                available: self.intermediate_players.len(),
            });
        }

        let (to_a, to_b) = self.intermediate_players.split_at(needed);
        a_group.extend(to_a.iter().cloned());
        b_group.extend(to_b.iter().cloned());

        self.a_group = a_group;
        self.b_group = b_group;
        Ok(())
    }

    /// Generate both rotations, interleave them and wire every game into
    /// its players' draws.
    fn schedule_players(&mut self) -> Result<(), SchedulingError> {
        let (a_first, a_second) = self.a_group.split_at(self.layout.a_boards());
        let (b_first, b_second) = self.b_group.split_at(self.layout.b_first_half());

        debug!("Group A first half is: {:?}", names(a_first));
        debug!("Group A second half is: {:?}", names(a_second));
        debug!("Group B first half is: {:?}", names(b_first));
        debug!("Group B second half is: {:?}", names(b_second));

        let a_sets = pair_group(
            &mut self.games,
            a_first,
            a_second,
            None,
            self.number_of_rounds,
            self.game_time,
        );
        let bye = self.layout.bye.then_some(&self.bye_player);
        let b_sets = pair_group(
            &mut self.games,
            b_first,
            b_second,
            bye,
            self.number_of_rounds,
            self.game_time,
        );

        // The groups are separate tournaments taking turns on the boards
        self.rounds = a_sets
            .into_iter()
            .zip(b_sets)
            .flat_map(|(a, b)| [a, b])
            .collect();

        self.assign_games_to_draws()
    }

    fn assign_games_to_draws(&mut self) -> Result<(), SchedulingError> {
        for set in &self.rounds {
            for &id in set {
                let game = self.games.get(id)?;
                let mut seated = vec![game.player_one().id()];
                if !game.is_bye() {
                    seated.push(game.player_two().id());
                }
                for player in seated {
                    let draw =
                        self.draws
                            .get_mut(&player)
                            .ok_or(SchedulingError::IncompleteDraw {
                                player,
                                games: 0,
                                rounds: self.number_of_rounds,
                            })?;
                    draw.add_game(id)?;
                }
            }
        }
        Ok(())
    }

    /// Every player holds exactly `number_of_rounds` games, all against
    /// different opponents.
    fn verify_draws(&self) -> Result<(), SchedulingError> {
        for (&player, draw) in &self.draws {
            if draw.games_scheduled() != self.number_of_rounds {
                return Err(SchedulingError::IncompleteDraw {
                    player,
                    games: draw.games_scheduled(),
                    rounds: self.number_of_rounds,
                });
            }
            let mut opponents = HashSet::new();
            for &id in draw.games() {
                let opponent = self.games.get(id)?.opponent_of(player).id();
                if !opponents.insert(opponent) {
                    return Err(SchedulingError::RepeatedOpponent { player, opponent });
                }
            }
        }
        Ok(())
    }

    pub fn players(&self) -> &[Arc<Player>] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Arc<Player>> {
        self.players.iter().find(|player| player.id() == id)
    }

    pub fn number_of_rounds(&self) -> usize {
        self.number_of_rounds
    }

    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    pub fn game_time(&self) -> Duration {
        self.game_time
    }

    pub fn beginner_players(&self) -> &[Arc<Player>] {
        &self.beginner_players
    }

    pub fn intermediate_players(&self) -> &[Arc<Player>] {
        &self.intermediate_players
    }

    pub fn advanced_players(&self) -> &[Arc<Player>] {
        &self.advanced_players
    }

    pub fn a_players(&self) -> &[Arc<Player>] {
        &self.a_group
    }

    pub fn b_players(&self) -> &[Arc<Player>] {
        &self.b_group
    }

    /// Round-sets in playing order: A1, B1, A2, B2, ...
    pub fn rounds(&self) -> &[Vec<GameId>] {
        &self.rounds
    }

    pub fn games(&self) -> &GameArena {
        &self.games
    }

    pub(crate) fn games_mut(&mut self) -> &mut GameArena {
        &mut self.games
    }

    pub fn game(&self, id: GameId) -> Result<&Game, GameError> {
        self.games.get(id)
    }

    pub fn draws(&self) -> &BTreeMap<PlayerId, Draw> {
        &self.draws
    }

    pub fn draw(&self, id: PlayerId) -> Option<&Draw> {
        self.draws.get(&id)
    }

    pub fn total_number_of_games(&self) -> usize {
        self.layout.total_games(self.number_of_rounds)
    }

    /// Round-by-round board listing, labelled with `round_times` where given
    pub fn describe_rounds(&self, round_times: &[String]) -> Result<String, GameError> {
        let mut out = String::from("Schedule of all games\n");
        for (i, set) in self.rounds.iter().enumerate() {
            out.push_str("***************\n");
            match round_times.get(i) {
                Some(time) => out.push_str(&format!("Round {} ({}):\n", i + 1, time)),
                None => out.push_str(&format!("Round {}:\n", i + 1)),
            }
            out.push_str("***************\n");
            for (board, &id) in set.iter().enumerate() {
                out.push_str(&format!("Board {}: {}\n", board + 1, self.games.get(id)?));
            }
        }
        Ok(out)
    }

    /// Every draw, grouped by tier
    pub fn describe_draws(&self) -> Result<String, GameError> {
        let tiers = [
            ("beginner players (levels 1-2)", &self.beginner_players),
            ("intermediate players (level 3)", &self.intermediate_players),
            ("advanced players (levels 4-5)", &self.advanced_players),
        ];
        let mut out = String::new();
        for (label, players) in tiers {
            out.push_str(&format!("*** {label} ***\n"));
            for player in players {
                if let Some(draw) = self.draws.get(&player.id()) {
                    out.push_str(&draw.describe(&self.games)?);
                    out.push('\n');
                }
            }
        }
        Ok(out)
    }
}

fn names(players: &[Arc<Player>]) -> Vec<&str> {
    players.iter().map(|player| player.name()).collect()
}

/// Round-sets for one group. White alternates between the halves, and when
/// `bye` is given the one unpaired second-half seat gets a bye game.
fn pair_group(
    arena: &mut GameArena,
    first: &[Arc<Player>],
    second: &[Arc<Player>],
    bye: Option<&Arc<Player>>,
    rounds: usize,
    game_time: Duration,
) -> Vec<Vec<GameId>> {
    let seats = second.len();
    (0..rounds)
        .map(|k| {
            let color = if k % 2 == 0 {
                ColorCode::PlayerOneWhite
            } else {
                ColorCode::PlayerOneBlack
            };
            let shift = k % seats;
            let mut set = Vec::with_capacity(first.len() + 1);

            for (i, player) in first.iter().enumerate() {
                let opponent = &second[(i + seats - shift) % seats];
                let game = Game::new(player.clone(), opponent.clone(), color);
                set.push(arena.insert(game.with_duration(game_time)));
            }
            if let Some(bye_player) = bye {
                let idle = &second[(first.len() + seats - shift) % seats];
                let game = Game::bye(idle.clone(), bye_player.clone(), color);
                set.push(arena.insert(game.with_duration(game_time)));
            }
            set
        })
        .collect()
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
