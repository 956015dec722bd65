//! The game phase machine.
//!
//! `GameState` owns the deck, both players, and the table, and is the
//! only thing that mutates them. It is driven from outside by two
//! inputs:
//!
//! - [`GameState::advance`], called once per rendered frame. A no-op
//!   when no phase work is pending.
//! - [`GameState::put_card_on_table`], the human play action, followed
//!   by an advance tick.
//!
//! Phases: `Initialize -> Main <-> Playing -> Main -> ... -> Finished`.
//! `Main` with a full table is the one state that does not self-drive;
//! it waits for an explicit [`GameState::resolve_round`] call.
//!
//! Transitions that should be observed within the same call (the
//! opening deal falling into `Main`, a CPU move bouncing back through
//! `Main`) run as an explicit bounded loop inside `advance`, not as
//! recursive self-calls.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Suit};
use crate::core::error::GameError;
use crate::core::rng::GameRng;
use crate::core::seat::{Seat, SeatMap};
use crate::game::deck::Deck;
use crate::game::player::{Player, MAX_HAND_SIZE};
use crate::game::trick::{self, Table, TrickRecord};

/// Game phase. `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pre-deal: the next advance shuffles, reveals the trump, and deals.
    Initialize,
    /// Waiting for the active seat to play, or for trick resolution.
    Main,
    /// A play is being carried out; resolves back to `Main`.
    Playing,
    /// Deck and hands are empty. No further transitions.
    Finished,
}

/// Upper bound on phase transitions observed within one `advance` call.
/// The longest legitimate chain is Initialize -> Main -> Playing -> Main,
/// so hitting the bound means a transition cycle bug.
const MAX_TRANSITIONS: usize = 8;

/// Complete state of one game. Created per game, discarded on restart.
#[derive(Clone, Debug)]
pub struct GameState {
    phase: Phase,
    deck: Deck,
    players: SeatMap<Player>,
    active_seat: Seat,
    table: Table,
    briscola: Suit,
    history: Vector<TrickRecord>,
    rng: GameRng,
}

impl GameState {
    /// Create a game in `Initialize` with a full, unshuffled deck.
    ///
    /// Both players must be freshly constructed (empty hands). The
    /// trump suit is unknown until the first advance performs the
    /// opening deal.
    #[must_use]
    pub fn new(players: SeatMap<Player>, rng: GameRng) -> Self {
        Self {
            phase: Phase::Initialize,
            deck: Deck::standard(),
            players,
            active_seat: Seat::new(0),
            table: Table::new(),
            briscola: Suit::Gold,
            history: Vector::new(),
            rng,
        }
    }

    // === Read-only queries for the presentation layer ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The trump suit, fixed by the opening reveal.
    #[must_use]
    pub fn briscola(&self) -> Suit {
        self.briscola
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.active_seat
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.active_seat]
    }

    /// The player at `seat`.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    /// Cards played to the current trick.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Cards played to the current trick, in play order.
    #[must_use]
    pub fn played_cards(&self) -> Vec<Card> {
        self.table.in_play_order().into_iter().map(|(_, c)| c).collect()
    }

    /// Whether every seat has played to the current trick.
    #[must_use]
    pub fn all_players_have_played(&self) -> bool {
        self.table.is_full()
    }

    /// Whether the game is over: deck empty and every hand empty.
    #[must_use]
    pub fn is_game_finished(&self) -> bool {
        self.deck.is_empty() && self.players.iter().all(|(_, p)| p.hand().is_empty())
    }

    /// Cards remaining in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Every resolved trick so far, oldest first.
    #[must_use]
    pub fn trick_history(&self) -> &Vector<TrickRecord> {
        &self.history
    }

    /// Points taken so far, per seat.
    #[must_use]
    pub fn scores(&self) -> SeatMap<u32> {
        SeatMap::new(|seat| self.players[seat].points_taken())
    }

    // === External drivers ===

    /// Run pending phase work. Safe to call every frame; returns
    /// immediately when nothing is pending.
    pub fn advance(&mut self) {
        for _ in 0..MAX_TRANSITIONS {
            match self.phase {
                Phase::Initialize => {
                    self.deal_opening();
                    self.phase = Phase::Main;
                }

                Phase::Main => {
                    if self.all_players_have_played() {
                        // Waits for an explicit resolve_round call.
                        return;
                    }
                    if self.current_player().is_cpu() {
                        self.phase = Phase::Playing;
                    } else {
                        // Waits for the human play action.
                        return;
                    }
                }

                Phase::Playing => {
                    if self.current_player().is_cpu() {
                        self.cpu_play();
                    }
                    self.active_seat = self.active_seat.other();
                    self.phase = Phase::Main;
                }

                Phase::Finished => return,
            }
        }

        panic!("phase machine did not settle within {MAX_TRANSITIONS} transitions");
    }

    /// The human play action: take `card` out of `seat`'s hand and put
    /// it on the table, then hand the turn over via the `Playing` phase.
    ///
    /// Rejected, with no state change, if the seat already played this
    /// trick or does not hold the card. Follow with an advance tick.
    pub fn put_card_on_table(&mut self, seat: Seat, card: CardId) -> Result<(), GameError> {
        if self.table.get(seat).is_some() {
            return Err(GameError::AlreadyPlayed { seat });
        }

        let played = self.players[seat].play_card(card)?;
        self.table
            .place(seat, played)
            .expect("seat was checked to have no table entry");

        debug!("[game] {} put {} on the table", self.players[seat].name(), played);

        self.phase = Phase::Playing;
        Ok(())
    }

    /// Settle a completed trick. No-op unless every seat has played.
    ///
    /// Moves the table cards to the winner, records the trick, refills
    /// hands from the deck (short draws near game end are fine), and
    /// either finishes the game or re-enters `Main`.
    pub fn resolve_round(&mut self) {
        let Some(winner) = trick::resolve_winner(&self.table, self.briscola) else {
            return;
        };

        let record = TrickRecord {
            winner,
            cards: SeatMap::new(|seat| {
                self.table.get(seat).expect("table is full when resolving")
            }),
        };

        debug!(
            "[game] trick {} won by {} with {}",
            self.history.len() + 1,
            self.players[winner].name(),
            record.cards[winner]
        );

        self.active_seat = winner;
        let won = self.table.in_play_order().into_iter().map(|(_, c)| c);
        self.players[winner].collect_trick(won);
        self.table.clear();
        self.history.push_back(record);

        if self.is_game_finished() {
            self.phase = Phase::Finished;
            self.advance();
            return;
        }

        for seat in Seat::all() {
            if self.players[seat].drawable_cards() > 0 {
                let drawn = self.deck.draw_cards(1);
                self.players[seat].reintegrate_hand(drawn);
            }
        }

        self.phase = Phase::Main;
        self.advance();
    }

    // === Phase handlers ===

    /// Shuffle, reveal the trump card, return it to the bottom of the
    /// deck, and deal three cards to each seat.
    fn deal_opening(&mut self) {
        self.deck.shuffle(&mut self.rng);

        let reveal = self
            .deck
            .draw_card()
            .expect("a fresh deck is never empty");
        self.briscola = reveal.suit;
        self.deck.place_bottom(reveal);

        for seat in Seat::all() {
            let dealt = self.deck.draw_cards(MAX_HAND_SIZE);
            self.players[seat].reintegrate_hand(dealt);
        }

        debug!(
            "[game] briscola is {}, {} cards in the deck",
            self.briscola,
            self.deck.len()
        );
    }

    /// Placeholder CPU policy: play the first card in hand.
    fn cpu_play(&mut self) {
        let seat = self.active_seat;
        let choice = self.players[seat]
            .hand()
            .first()
            .copied()
            .expect("a cpu seat in the playing phase holds at least one card");

        let played = self.players[seat]
            .play_card(choice.id)
            .expect("card was just read from this hand");
        self.table
            .place(seat, played)
            .expect("main never enters playing once this seat has played");

        debug!("[game] {} (cpu) played {}", self.players[seat].name(), played);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::TOTAL_POINTS;

    fn new_game(seed: u64) -> GameState {
        let players = SeatMap::new(|seat| {
            if seat.index() == 0 {
                Player::new(seat, "Human", false)
            } else {
                Player::new(seat, "Cpu", true)
            }
        });
        GameState::new(players, GameRng::new(seed))
    }

    #[test]
    fn test_starts_in_initialize() {
        let game = new_game(42);
        assert_eq!(game.phase(), Phase::Initialize);
        assert_eq!(game.deck_len(), 40);
        assert!(game.current_player().hand().is_empty());
    }

    #[test]
    fn test_opening_deal() {
        let mut game = new_game(42);
        game.advance();

        assert_eq!(game.phase(), Phase::Main);
        for seat in Seat::all() {
            assert_eq!(game.player(seat).hand().len(), 3);
        }
        // 40 cards, 6 dealt; the reveal goes back to the bottom.
        assert_eq!(game.deck_len(), 34);
        // The briscola equals the suit of the reserved bottom card.
        let bottom = *game.deck().cards().last().unwrap();
        assert_eq!(game.briscola(), bottom.suit);
    }

    #[test]
    fn test_advance_is_idempotent_when_waiting_on_the_human() {
        let mut game = new_game(42);
        game.advance();

        let before = game.clone_observable();
        game.advance();
        game.advance();
        assert_eq!(before, game.clone_observable());
    }

    #[test]
    fn test_human_play_drives_the_cpu_response() {
        let mut game = new_game(42);
        game.advance();

        let human = Seat::new(0);
        let card = game.player(human).hand()[0];
        game.put_card_on_table(human, card.id).unwrap();
        game.advance();

        assert!(game.all_players_have_played());
        assert_eq!(game.phase(), Phase::Main);
        assert_eq!(game.player(human).hand().len(), 2);
        assert_eq!(game.player(human.other()).hand().len(), 2);

        // The human led, so their card comes first in play order.
        let played = game.played_cards();
        assert_eq!(played.len(), 2);
        assert_eq!(played[0], card);
    }

    #[test]
    fn test_put_card_rejects_card_not_in_hand() {
        let mut game = new_game(42);
        game.advance();

        let human = Seat::new(0);
        let not_held = game.deck().cards()[10].id;
        assert!(!game.player(human).hand().iter().any(|c| c.id == not_held));

        let err = game.put_card_on_table(human, not_held).unwrap_err();
        assert!(matches!(err, GameError::NotInHand { .. }));
        assert_eq!(game.player(human).hand().len(), 3);
        assert_eq!(game.table().played_count(), 0);
    }

    #[test]
    fn test_put_card_rejects_double_play() {
        let mut game = new_game(42);
        game.advance();

        let human = Seat::new(0);
        let first = game.player(human).hand()[0].id;
        let second = game.player(human).hand()[1].id;
        game.put_card_on_table(human, first).unwrap();

        let err = game.put_card_on_table(human, second).unwrap_err();
        assert_eq!(err, GameError::AlreadyPlayed { seat: human });
        assert_eq!(game.player(human).hand().len(), 2);
    }

    #[test]
    fn test_resolve_round_is_a_noop_until_both_played() {
        let mut game = new_game(42);
        game.advance();

        game.resolve_round();
        assert!(game.trick_history().is_empty());
        assert_eq!(game.player(Seat::new(0)).hand().len(), 3);
    }

    #[test]
    fn test_resolve_round_settles_and_refills() {
        let mut game = new_game(42);
        game.advance();

        let human = Seat::new(0);
        let card = game.player(human).hand()[0];
        game.put_card_on_table(human, card.id).unwrap();
        game.advance();
        game.resolve_round();

        assert_eq!(game.phase(), Phase::Main);
        assert_eq!(game.trick_history().len(), 1);
        assert!(!game.all_players_have_played());

        // Both hands refilled to 3; the two trick cards are with the winner.
        for seat in Seat::all() {
            assert_eq!(game.player(seat).hand().len(), 3);
        }
        let record = &game.trick_history()[0];
        assert_eq!(game.active_seat(), record.winner);
        assert_eq!(game.player(record.winner).cards_taken().len(), 2);
        assert_eq!(game.deck_len(), 32);
    }

    #[test]
    fn test_full_game_reaches_finished_with_all_points_taken() {
        let mut game = new_game(7);
        game.advance();

        let human = Seat::new(0);
        let mut tricks = 0;
        while game.phase() != Phase::Finished {
            assert!(tricks <= 20, "game did not finish in 20 tricks");

            if !game.all_players_have_played() && game.active_seat() == human {
                let card = game.player(human).hand()[0];
                game.put_card_on_table(human, card.id).unwrap();
                game.advance();
            }

            assert!(game.all_players_have_played());
            game.resolve_round();
            tricks += 1;
        }

        assert_eq!(tricks, 20);
        assert!(game.is_game_finished());
        assert_eq!(game.trick_history().len(), 20);

        let scores = game.scores();
        let total: u32 = Seat::all().map(|s| scores[s]).sum();
        assert_eq!(total, TOTAL_POINTS);

        let taken: usize = Seat::all()
            .map(|s| game.player(s).cards_taken().len())
            .sum();
        assert_eq!(taken, 40);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let mut a = new_game(99);
        let mut b = new_game(99);
        a.advance();
        b.advance();

        assert_eq!(a.briscola(), b.briscola());
        for seat in Seat::all() {
            assert_eq!(a.player(seat).hand(), b.player(seat).hand());
        }
    }

    // Test-only accessors used above.
    impl GameState {
        fn deck(&self) -> &Deck {
            &self.deck
        }

        fn clone_observable(&self) -> (Phase, Seat, usize, usize) {
            (
                self.phase,
                self.active_seat,
                self.deck.len(),
                self.table.played_count(),
            )
        }
    }
}
