//! Scout game implementation.

use std::ops::Range;

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::active_set::ActiveSet;
use super::snapshot::{GameSnapshot, PlayerSnapshot, PlayerSummary};
use crate::cards::{Card, Deck, SetStrength};
use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameId, GameRng, Player, PlayerId, PlayerMap,
    RulesViolation, ScoutMove, ShowMove,
};
use crate::rules::{GameResult, RulesEngine};

/// A Scout game: roster, table, turn pointer and round counters.
///
/// All mutation goes through [`RulesEngine::apply_action`]. A rejected
/// action leaves the game exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoutGame {
    id: GameId,
    config: GameConfig,
    /// Unshuffled composition; each round deals a shuffled copy.
    deck: Deck,
    rng: GameRng,
    players: PlayerMap<Player>,
    active_player: PlayerId,
    active_set: ActiveSet,
    consecutive_scouts: usize,
    round: u32,
    complete: bool,
    history: Vec<ActionRecord>,
}

impl ScoutGame {
    /// Create a game and deal the first round.
    ///
    /// ```
    /// use scout_engine::core::{GameConfig, PlayerId};
    /// use scout_engine::games::scout::ScoutGame;
    ///
    /// let game = ScoutGame::new(GameConfig::new(4).with_seed(42)).unwrap();
    /// assert_eq!(game.round(), 1);
    /// assert_eq!(game.player(PlayerId::new(0)).unwrap().hand.len(), 11);
    /// ```
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let mut game = Self::undealt(config)?;
        game.deal_round();
        Ok(game)
    }

    /// Create a game whose first round uses the given hands.
    ///
    /// Later rounds are dealt from the shuffled deck as usual.
    pub fn with_hands(config: GameConfig, hands: Vec<Vec<Card>>) -> Result<Self, ConfigError> {
        let mut game = Self::undealt(config)?;
        if hands.len() != game.player_count() {
            return Err(ConfigError::HandCount {
                expected: game.player_count(),
                got: hands.len(),
            });
        }
        for ((_, player), hand) in game.players.iter_mut().zip(hands) {
            player.start_round(hand);
        }
        Ok(game)
    }

    fn undealt(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let deck = Deck::for_players(config.player_count)?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let players = PlayerMap::new(config.player_count, |id| {
            Player::new(id, config.player_name(id))
        });

        Ok(Self {
            id: GameId::generate(),
            config,
            deck,
            rng,
            players,
            active_player: PlayerId::new(0),
            active_set: ActiveSet::default(),
            consecutive_scouts: 0,
            round: 1,
            complete: false,
            history: Vec::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> &GameId {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed of the game's RNG, for replay.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    #[must_use]
    pub fn active_set(&self) -> &ActiveSet {
        &self.active_set
    }

    #[must_use]
    pub fn consecutive_scouts(&self) -> usize {
        self.consecutive_scouts
    }

    /// Current round, 1-based.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// A game lasts one round per player.
    #[must_use]
    pub fn total_rounds(&self) -> u32 {
        self.player_count() as u32
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Every successful action, in order.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Scores in seat order.
    #[must_use]
    pub fn scores(&self) -> Vec<i32> {
        self.players.values().map(|p| p.score).collect()
    }

    /// Public state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_id: self.id.clone(),
            players: self.players.values().map(PlayerSummary::from).collect(),
            active_set: self.active_set.cards().to_vec(),
            active_set_owner: self.active_set.owner(),
            active_player: self.active_player,
            consecutive_scouts: self.consecutive_scouts,
            round: self.round,
            total_rounds: self.total_rounds(),
            complete: self.complete,
        }
    }

    /// One seat's state including the hand.
    #[must_use]
    pub fn player_snapshot(&self, player: PlayerId) -> Option<PlayerSnapshot> {
        self.players.get(player).map(PlayerSnapshot::from)
    }

    /// Final standings, once the game is complete.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.complete {
            return None;
        }
        let best = self.players.values().map(|p| p.score).max()?;
        let mut winners: Vec<_> = self
            .players
            .iter()
            .filter(|(_, p)| p.score == best)
            .map(|(id, _)| id)
            .collect();

        if winners.len() == 1 {
            winners.pop().map(GameResult::Winner)
        } else {
            Some(GameResult::Winners(winners))
        }
    }

    // === Validation ===

    /// Check a scout against the table and a hand of `hand_len` cards.
    ///
    /// Returns the card as it would enter the hand.
    fn check_scout(&self, hand_len: usize, scout: ScoutMove) -> Result<Card, RulesViolation> {
        if self.active_set.is_empty() {
            return Err(RulesViolation::EmptyActiveSet);
        }
        if !self.active_set.is_end(scout.take) {
            return Err(RulesViolation::ScoutFromMiddle {
                take: scout.take,
                len: self.active_set.len(),
            });
        }
        if scout.put > hand_len {
            return Err(RulesViolation::PutOutOfRange {
                put: scout.put,
                hand_len,
            });
        }

        let card = self.active_set.cards()[scout.take];
        Ok(if scout.reverse { card.reversed() } else { card })
    }

    fn check_show(&self, hand: &[Card], show: ShowMove) -> Result<(), RulesViolation> {
        let range = show_range(show, hand.len())?;
        let candidate = SetStrength::of(&hand[range])?;
        if !candidate.beats(self.active_set.strength()?.as_ref()) {
            return Err(RulesViolation::DoesNotBeat);
        }
        Ok(())
    }

    /// Check the show half against the hand and table as they would be
    /// after the scout half, without building either.
    fn check_scout_and_show(
        &self,
        hand: &[Card],
        scout: ScoutMove,
        show: ShowMove,
    ) -> Result<(), RulesViolation> {
        let scouted = self.check_scout(hand.len(), scout)?;
        let range = show_range(show, hand.len() + 1)?;

        let faces = range.map(|i| post_scout_card(hand, scout.put, scouted, i).face());
        let candidate = SetStrength::from_faces(faces)?;
        let remaining = self.active_set.strength_without(scout.take)?;
        if !candidate.beats(remaining.as_ref()) {
            return Err(RulesViolation::DoesNotBeat);
        }
        Ok(())
    }

    // === Mutation ===

    fn apply_scout(&mut self, player: PlayerId, scout: ScoutMove) {
        let mut card = self.active_set.take(scout.take);
        if scout.reverse {
            card.reverse();
        }
        self.players[player].hand.insert(scout.put, card);

        if let Some(owner) = self.active_set.owner() {
            self.players[owner].score += 1;
        }
        self.consecutive_scouts += 1;
    }

    fn apply_show(&mut self, player: PlayerId, show: ShowMove) {
        let beaten = self.active_set.len() as i32;
        let seat = &mut self.players[player];
        let cards: SmallVec<[Card; 12]> = seat.hand.drain(show.start..show.end()).collect();
        seat.score += beaten;

        self.active_set.replace(cards, player);
        self.consecutive_scouts = 0;
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push(ActionRecord {
            player,
            action,
            round: self.round,
            sequence,
        });
    }

    /// Round ends after `n - 1` unbroken scouts, or when the actor has
    /// emptied their hand.
    fn round_over(&self, actor: PlayerId) -> bool {
        self.consecutive_scouts + 1 == self.player_count()
            || self.players[actor].hand.is_empty()
    }

    fn finish_round(&mut self) {
        let owner = self.active_set.owner();
        for (id, player) in self.players.iter_mut() {
            if Some(id) != owner {
                player.score -= player.hand.len() as i32;
            }
        }
        debug!(
            game_id = %self.id,
            round = self.round,
            scores = ?self.scores(),
            "round complete"
        );

        if self.round >= self.total_rounds() {
            self.complete = true;
            info!(game_id = %self.id, scores = ?self.scores(), "game complete");
            return;
        }

        self.round += 1;
        self.active_set.clear();
        self.consecutive_scouts = 0;
        self.active_player = PlayerId::new((self.round - 1) as u8);
        self.deal_round();
    }

    fn deal_round(&mut self) {
        let mut deck = self.deck.clone();
        deck.shuffle(&mut self.rng);
        let hands = deck.deal(self.player_count());
        for ((_, player), hand) in self.players.iter_mut().zip(hands) {
            player.start_round(hand);
        }
    }
}

impl RulesEngine for ScoutGame {
    fn player_count(&self) -> usize {
        self.players.player_count()
    }

    fn active_player(&self) -> PlayerId {
        self.active_player
    }

    fn check_action(&self, player: PlayerId, action: &Action) -> Result<(), RulesViolation> {
        if self.complete {
            return Err(RulesViolation::GameComplete);
        }
        let seat = self
            .players
            .get(player)
            .ok_or(RulesViolation::UnknownPlayer { player })?;
        if player != self.active_player {
            return Err(RulesViolation::NotYourTurn {
                player,
                active: self.active_player,
            });
        }

        match *action {
            Action::Scout(scout) => self.check_scout(seat.hand.len(), scout).map(|_| ()),
            Action::Show(show) => self.check_show(&seat.hand, show),
            Action::ScoutAndShow(scout, show) => {
                if !seat.may_scout_and_show {
                    return Err(RulesViolation::ScoutAndShowUsed);
                }
                self.check_scout_and_show(&seat.hand, scout, show)
            }
            Action::ReverseHand => {
                if seat.may_reverse_hand {
                    Ok(())
                } else {
                    Err(RulesViolation::ReverseHandUnavailable)
                }
            }
        }
    }

    fn apply_action(&mut self, player: PlayerId, action: &Action) -> Result<(), RulesViolation> {
        self.check_action(player, action)?;

        match *action {
            Action::Scout(scout) => self.apply_scout(player, scout),
            Action::Show(show) => self.apply_show(player, show),
            Action::ScoutAndShow(scout, show) => {
                self.apply_scout(player, scout);
                self.apply_show(player, show);
                self.players[player].may_scout_and_show = false;
            }
            Action::ReverseHand => self.players[player].reverse_hand(),
        }
        trace!(game_id = %self.id, %player, %action, "applied action");

        self.players[player].may_reverse_hand = false;
        self.record(player, *action);
        self.active_player = player.next(self.player_count());

        if self.round_over(player) {
            self.finish_round();
        }
        Ok(())
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result()
    }
}

/// Hand indices covered by `show`, if it fits a hand of `hand_len`.
fn show_range(show: ShowMove, hand_len: usize) -> Result<Range<usize>, RulesViolation> {
    match show.start.checked_add(show.length) {
        Some(end) if show.length > 0 && end <= hand_len => Ok(show.start..end),
        _ => Err(RulesViolation::ShowOutOfRange {
            start: show.start,
            end: show.start.saturating_add(show.length),
            hand_len,
        }),
    }
}

/// Card at `index` of `hand` after inserting `scouted` at `put`.
fn post_scout_card(hand: &[Card], put: usize, scouted: Card, index: usize) -> Card {
    match index.cmp(&put) {
        std::cmp::Ordering::Less => hand[index],
        std::cmp::Ordering::Equal => scouted,
        std::cmp::Ordering::Greater => hand[index - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::SetError;

    fn cards(values: &[(u8, u8)]) -> Vec<Card> {
        values.iter().map(|&(f, b)| Card::pair(f, b)).collect()
    }

    /// Faces: p0 = 1 5 5 5 9, p1 = 2 3 4 7 8, p2 = 6 6 7 8 2.
    fn three_player_game() -> ScoutGame {
        let hands = vec![
            cards(&[(1, 2), (5, 6), (5, 7), (5, 8), (9, 1)]),
            cards(&[(2, 3), (3, 4), (4, 5), (7, 2), (8, 3)]),
            cards(&[(6, 1), (6, 2), (7, 3), (8, 4), (2, 9)]),
        ];
        ScoutGame::with_hands(GameConfig::new(3).with_seed(42), hands).unwrap()
    }

    fn faces(game: &ScoutGame, player: u8) -> Vec<u8> {
        game.player(PlayerId::new(player))
            .unwrap()
            .hand
            .iter()
            .map(Card::face)
            .collect()
    }

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    #[test]
    fn test_game_creation() {
        for (count, hand_size) in [(2, 22), (3, 12), (4, 11), (5, 9)] {
            let game = ScoutGame::new(GameConfig::new(count).with_seed(1)).unwrap();

            assert_eq!(game.player_count(), count);
            assert_eq!(game.round(), 1);
            assert_eq!(game.total_rounds(), count as u32);
            assert_eq!(game.active_player(), P0);
            assert!(game.active_set().is_empty());
            for player in game.players() {
                assert_eq!(player.hand.len(), hand_size);
                assert!(player.may_reverse_hand);
                assert!(player.may_scout_and_show);
                assert_eq!(player.score, 0);
            }
        }
    }

    #[test]
    fn test_bad_configuration() {
        assert_eq!(
            ScoutGame::new(GameConfig::new(6)).unwrap_err(),
            ConfigError::PlayerCount(6)
        );
        assert_eq!(
            ScoutGame::with_hands(GameConfig::new(2), vec![vec![]]).unwrap_err(),
            ConfigError::HandCount { expected: 2, got: 1 }
        );
    }

    #[test]
    fn test_show_on_empty_table() {
        let mut game = three_player_game();

        game.apply_action(P0, &Action::show(0, 1)).unwrap();

        assert_eq!(game.active_set().cards(), &cards(&[(1, 2)])[..]);
        assert_eq!(game.active_set().owner(), Some(P0));
        assert_eq!(game.scores(), vec![0, 0, 0]);
        assert_eq!(faces(&game, 0), vec![5, 5, 5, 9]);
        assert_eq!(game.active_player(), P1);
    }

    #[test]
    fn test_show_scores_outgoing_set_size() {
        let mut game = three_player_game();

        game.apply_action(P0, &Action::show(1, 2)).unwrap();
        game.apply_action(P1, &Action::show(0, 3)).unwrap();

        // P1 replaced a two-card set with a three-card set.
        assert_eq!(game.scores(), vec![0, 2, 0]);
        assert_eq!(game.active_set().owner(), Some(P1));
        assert_eq!(game.active_set().len(), 3);
    }

    #[test]
    fn test_higher_run_does_not_beat_lower_run() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(1, 2)).unwrap();
        game.apply_action(P1, &Action::show(0, 3)).unwrap();

        // P2's 6-7-8 against 2-3-4: same length and shape, higher minimum.
        assert_eq!(
            game.check_action(P2, &Action::show(1, 3)),
            Err(RulesViolation::DoesNotBeat)
        );
    }

    #[test]
    fn test_show_rejections() {
        let mut game = three_player_game();

        assert_eq!(
            game.check_action(P0, &Action::show(0, 2)),
            Err(RulesViolation::InvalidSet(SetError::Broken))
        );
        assert_eq!(
            game.check_action(P0, &Action::show(4, 2)),
            Err(RulesViolation::ShowOutOfRange {
                start: 4,
                end: 6,
                hand_len: 5
            })
        );
        assert!(matches!(
            game.check_action(P0, &Action::show(0, 0)),
            Err(RulesViolation::ShowOutOfRange { .. })
        ));
        assert!(matches!(
            game.check_action(P0, &Action::show(usize::MAX, 2)),
            Err(RulesViolation::ShowOutOfRange { .. })
        ));

        game.apply_action(P0, &Action::show(1, 3)).unwrap();
        assert_eq!(
            game.check_action(P1, &Action::show(0, 2)),
            Err(RulesViolation::DoesNotBeat)
        );
    }

    #[test]
    fn test_scout_only_from_ends() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(1, 3)).unwrap();

        assert!(game.is_legal(P1, &Action::scout(0, 0)));
        assert!(game.is_legal(P1, &Action::scout(2, 0)));
        assert_eq!(
            game.check_action(P1, &Action::scout(1, 0)),
            Err(RulesViolation::ScoutFromMiddle { take: 1, len: 3 })
        );
        assert_eq!(
            game.check_action(P1, &Action::scout(3, 0)),
            Err(RulesViolation::ScoutFromMiddle { take: 3, len: 3 })
        );
        assert!(game.is_legal(P1, &Action::scout(0, 5)));
        assert_eq!(
            game.check_action(P1, &Action::scout(0, 6)),
            Err(RulesViolation::PutOutOfRange { put: 6, hand_len: 5 })
        );
    }

    #[test]
    fn test_scout_from_empty_table() {
        let game = three_player_game();
        assert_eq!(
            game.check_action(P0, &Action::scout(0, 0)),
            Err(RulesViolation::EmptyActiveSet)
        );
    }

    #[test]
    fn test_scout_moves_card_and_awards_owner() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(1, 3)).unwrap();

        game.apply_action(P1, &Action::scout(2, 3)).unwrap();

        assert_eq!(faces(&game, 1), vec![2, 3, 4, 5, 7, 8]);
        assert_eq!(game.player(P1).unwrap().hand[3], Card::pair(5, 8));
        assert_eq!(game.active_set().len(), 2);
        assert_eq!(game.scores(), vec![1, 0, 0]);
        assert_eq!(game.consecutive_scouts(), 1);
    }

    #[test]
    fn test_scout_reverse_flips_card() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(1, 3)).unwrap();

        game.apply_action(P1, &Action::Scout(ScoutMove::reversed(0, 0)))
            .unwrap();

        assert_eq!(game.player(P1).unwrap().hand[0], Card::pair(6, 5));
    }

    #[test]
    fn test_show_resets_consecutive_scouts() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(0, 1)).unwrap();
        game.apply_action(P1, &Action::scout(0, 0)).unwrap();
        assert_eq!(game.consecutive_scouts(), 1);

        game.apply_action(P2, &Action::show(0, 2)).unwrap();
        assert_eq!(game.consecutive_scouts(), 0);
    }

    #[test]
    fn test_scout_and_show() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(1, 2)).unwrap();

        // Take the 5 into 2-3-4 and show 2-3-4-5.
        let action = Action::ScoutAndShow(ScoutMove::new(0, 3), ShowMove::new(0, 4));
        game.apply_action(P1, &action).unwrap();

        let p1 = game.player(P1).unwrap();
        assert!(!p1.may_scout_and_show);
        assert_eq!(faces(&game, 1), vec![7, 8]);
        // Owner gets 1 for the scout; P1 beat a set of one remaining card.
        assert_eq!(game.scores(), vec![1, 1, 0]);
        assert_eq!(game.active_set().owner(), Some(P1));
        assert_eq!(game.active_set().len(), 4);
        assert_eq!(game.consecutive_scouts(), 0);
    }

    #[test]
    fn test_scout_and_show_reverse() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(1, 2)).unwrap();

        // Table is 5/6 5/7; take 5/7 reversed and pair it with P1's 7.
        let action = Action::ScoutAndShow(ScoutMove::reversed(1, 3), ShowMove::new(3, 2));
        game.apply_action(P1, &action).unwrap();

        assert_eq!(game.active_set().cards(), &cards(&[(7, 5), (7, 2)])[..]);
        assert_eq!(faces(&game, 1), vec![2, 3, 4, 8]);
    }

    #[test]
    fn test_scout_and_show_is_atomic() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(1, 2)).unwrap();
        let before = game.clone();

        // Scouted 5 lands in front: 5-2-3-4 is not a set.
        let action = Action::ScoutAndShow(ScoutMove::new(0, 0), ShowMove::new(0, 4));
        assert_eq!(
            game.apply_action(P1, &action),
            Err(RulesViolation::InvalidSet(SetError::Broken))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_scout_and_show_once_per_round() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(1, 2)).unwrap();
        game.apply_action(
            P1,
            &Action::ScoutAndShow(ScoutMove::new(0, 3), ShowMove::new(0, 4)),
        )
        .unwrap();
        game.apply_action(P2, &Action::scout(0, 0)).unwrap();
        game.apply_action(P0, &Action::scout(0, 0)).unwrap();

        // Two scouts in a row end the three-player round.
        assert_eq!(game.round(), 2);
        assert!(game.player(P1).unwrap().may_scout_and_show);
    }

    #[test]
    fn test_scout_and_show_flag_blocks_second_use() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(0, 1)).unwrap();
        game.apply_action(
            P1,
            &Action::ScoutAndShow(ScoutMove::new(0, 0), ShowMove::new(0, 2)),
        )
        .unwrap();
        game.apply_action(P2, &Action::show(0, 2)).unwrap();
        game.apply_action(P0, &Action::scout(0, 0)).unwrap();

        assert_eq!(game.active_player(), P1);
        assert_eq!(
            game.check_action(
                P1,
                &Action::ScoutAndShow(ScoutMove::new(0, 0), ShowMove::new(0, 1))
            ),
            Err(RulesViolation::ScoutAndShowUsed)
        );
    }

    #[test]
    fn test_reverse_hand() {
        let mut game = three_player_game();

        game.apply_action(P0, &Action::ReverseHand).unwrap();

        assert_eq!(faces(&game, 0), vec![2, 6, 7, 8, 1]);
        assert!(!game.player(P0).unwrap().may_reverse_hand);
        assert_eq!(game.active_player(), P1);
        assert_eq!(game.consecutive_scouts(), 0);
    }

    #[test]
    fn test_reverse_hand_only_before_first_action() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(0, 1)).unwrap();
        game.apply_action(P1, &Action::ReverseHand).unwrap();
        game.apply_action(P2, &Action::scout(0, 0)).unwrap();

        assert_eq!(
            game.check_action(P0, &Action::ReverseHand),
            Err(RulesViolation::ReverseHandUnavailable)
        );
    }

    #[test]
    fn test_wrong_turn_leaves_state_unchanged() {
        let mut game = three_player_game();
        let before = game.clone();

        assert_eq!(
            game.apply_action(P1, &Action::show(0, 1)),
            Err(RulesViolation::NotYourTurn {
                player: P1,
                active: P0
            })
        );
        assert_eq!(
            game.apply_action(PlayerId::new(7), &Action::show(0, 1)),
            Err(RulesViolation::UnknownPlayer {
                player: PlayerId::new(7)
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_round_ends_after_consecutive_scouts() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(1, 2)).unwrap();
        game.apply_action(P1, &Action::scout(0, 0)).unwrap();
        game.apply_action(P2, &Action::scout(0, 0)).unwrap();

        // P0 owns the table: +2 from scouts, no penalty.
        // P1 and P2 hold six cards each.
        assert_eq!(game.scores(), vec![2, -6, -6]);
        assert_eq!(game.round(), 2);
        assert_eq!(game.active_player(), P1);
        assert!(game.active_set().is_empty());
        assert_eq!(game.active_set().owner(), None);
        assert_eq!(game.consecutive_scouts(), 0);
        for player in game.players() {
            assert_eq!(player.hand.len(), 12);
            assert!(player.may_reverse_hand);
        }
    }

    #[test]
    fn test_round_ends_on_empty_hand() {
        let hands = vec![cards(&[(3, 1)]), cards(&[(4, 1), (5, 1)])];
        let mut game = ScoutGame::with_hands(GameConfig::new(2).with_seed(3), hands).unwrap();

        game.apply_action(P0, &Action::show(0, 1)).unwrap();

        assert_eq!(game.scores(), vec![0, -2]);
        assert_eq!(game.round(), 2);
        assert_eq!(game.active_player(), P1);
    }

    #[test]
    fn test_game_completes_after_one_round_per_player() {
        let mut game = ScoutGame::new(GameConfig::new(2).with_seed(11)).unwrap();

        let mut turns = 0;
        while !game.is_complete() && turns < 100 {
            let player = game.active_player();
            let action = if game.active_set().is_empty() {
                Action::show(0, 1)
            } else {
                Action::scout(0, 0)
            };
            game.apply_action(player, &action).unwrap();
            turns += 1;
        }

        assert!(game.is_complete());
        assert_eq!(turns, 4);
        assert_eq!(game.round(), 2);
        assert!(game.result().is_some());
        assert_eq!(
            game.check_action(game.active_player(), &Action::show(0, 1)),
            Err(RulesViolation::GameComplete)
        );
    }

    #[test]
    fn test_result_picks_best_score() {
        let mut game = three_player_game();
        assert_eq!(game.result(), None);

        game.complete = true;
        game.players[P1].score = 4;
        assert_eq!(game.result(), Some(GameResult::Winner(P1)));

        game.players[P2].score = 4;
        assert_eq!(game.result(), Some(GameResult::Winners(vec![P1, P2])));
    }

    #[test]
    fn test_history_records_successes_only() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(0, 1)).unwrap();
        let _ = game.apply_action(P0, &Action::show(0, 1));
        game.apply_action(P1, &Action::scout(0, 0)).unwrap();

        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].player, P1);
        assert_eq!(history[1].action, Action::scout(0, 0));
        assert_eq!(history[1].sequence, 1);
        assert_eq!(history[1].round, 1);
    }

    #[test]
    fn test_snapshots() {
        let mut game = three_player_game();
        game.apply_action(P0, &Action::show(1, 3)).unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.game_id, *game.id());
        assert_eq!(snapshot.active_set_owner, Some(P0));
        assert_eq!(snapshot.active_set.len(), 3);
        assert_eq!(snapshot.players[0].hand_size, 2);
        assert!(!snapshot.players[0].may_reverse_hand);
        assert_eq!(snapshot.active_player, P1);

        let own = game.player_snapshot(P1).unwrap();
        assert_eq!(own.hand.len(), 5);
        assert_eq!(own.summary.index, P1);
        assert!(game.player_snapshot(PlayerId::new(3)).is_none());
    }

    #[test]
    fn test_seeded_games_match() {
        let a = ScoutGame::new(GameConfig::new(4).with_seed(99)).unwrap();
        let b = ScoutGame::new(GameConfig::new(4).with_seed(99)).unwrap();

        for (pa, pb) in a.players().zip(b.players()) {
            assert_eq!(pa.hand, pb.hand);
        }
        assert_eq!(a.seed(), 99);
    }

    /// Every scout-and-show for `player`, judged twice: by the combined
    /// check, and by scouting for real and then checking the show.
    fn compare_scout_and_show(game: &ScoutGame, player: PlayerId) -> usize {
        let hand_len = game.players[player].hand.len();
        let mut compared = 0;

        for take in 0..game.active_set.len() {
            for put in 0..=hand_len {
                for reverse in [false, true] {
                    let scout = ScoutMove { take, put, reverse };
                    let mut scouted = game.clone();
                    let scout_ok = scouted.check_scout(hand_len, scout).is_ok();
                    if scout_ok {
                        scouted.apply_scout(player, scout);
                    }

                    for start in 0..=hand_len {
                        for length in 1..=hand_len + 1 - start {
                            let show = ShowMove::new(start, length);
                            let combined =
                                game.is_legal(player, &Action::ScoutAndShow(scout, show));
                            let sequential = scout_ok
                                && scouted
                                    .check_show(&scouted.players[player].hand, show)
                                    .is_ok();
                            assert_eq!(
                                combined, sequential,
                                "{}+{} on {:?}",
                                scout, show, game.active_set
                            );
                            compared += 1;
                        }
                    }
                }
            }
        }
        compared
    }

    #[test]
    fn test_scout_and_show_check_matches_sequential_apply() {
        use crate::actions::{legal_action_ids, ActionCatalog};
        use crate::core::ActionSpaceBounds;

        let catalog = ActionCatalog::new(ActionSpaceBounds::new(14, 6).unwrap());
        let mut compared = 0;

        for player_count in 2..=5 {
            for seed in 0..2 {
                let config = GameConfig::new(player_count).with_seed(seed);
                let mut game = ScoutGame::new(config).unwrap();
                let mut policy = GameRng::new(seed + 100);

                for _ in 0..30 {
                    if game.is_complete() {
                        break;
                    }
                    let player = game.active_player();
                    if game.players[player].may_scout_and_show {
                        compared += compare_scout_and_show(&game, player);
                    }

                    let ids = legal_action_ids(&game, &catalog, player);
                    let id = ids[policy.gen_range_usize(0..ids.len())];
                    let action = catalog.get(id).unwrap().action;
                    game.apply_action(player, &action).unwrap();
                }
            }
        }
        assert!(compared > 0);
    }
}
