//! Per-participant state: the hand and the pile of cards won.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId};
use crate::core::error::GameError;
use crate::core::seat::Seat;

/// Maximum number of cards a player holds at once.
pub const MAX_HAND_SIZE: usize = 3;

/// A participant: seat, display name, CPU flag, hand, and trick pile.
///
/// The hand never exceeds [`MAX_HAND_SIZE`] during normal play;
/// `cards_taken` only ever grows. [`Player::play_card`] is the sole way
/// a card leaves the hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    seat: Seat,
    name: String,
    is_cpu: bool,
    hand: SmallVec<[Card; MAX_HAND_SIZE]>,
    cards_taken: Vec<Card>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(seat: Seat, name: impl Into<String>, is_cpu: bool) -> Self {
        Self {
            seat,
            name: name.into(),
            is_cpu,
            hand: SmallVec::new(),
            cards_taken: Vec::new(),
        }
    }

    /// The seat this player occupies.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this seat is CPU-controlled. Fixed at creation.
    #[must_use]
    pub fn is_cpu(&self) -> bool {
        self.is_cpu
    }

    /// Cards currently held, in hand order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// All cards won in resolved tricks so far.
    #[must_use]
    pub fn cards_taken(&self) -> &[Card] {
        &self.cards_taken
    }

    /// How many cards this player may draw to refill the hand.
    #[must_use]
    pub fn drawable_cards(&self) -> usize {
        MAX_HAND_SIZE.saturating_sub(self.hand.len())
    }

    /// Append drawn cards to the hand, preserving order.
    pub fn reintegrate_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
        debug_assert!(
            self.hand.len() <= MAX_HAND_SIZE,
            "{} holds {} cards",
            self.name,
            self.hand.len()
        );

        debug!("[{}] hand is now {} card(s)", self.name, self.hand.len());
    }

    /// Remove a card from the hand by id.
    ///
    /// Fails with [`GameError::NotInHand`] before any mutation if the
    /// card is absent.
    pub fn play_card(&mut self, id: CardId) -> Result<Card, GameError> {
        let position = self
            .hand
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| GameError::NotInHand {
                player: self.name.clone(),
                card: id,
            })?;

        let card = self.hand.remove(position);
        debug!("[{}] played {}, {} left in hand", self.name, card, self.hand.len());
        Ok(card)
    }

    /// Move cards won in a resolved trick into the trick pile.
    pub fn collect_trick(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards_taken.extend(cards);
    }

    /// Total point value of all cards taken.
    #[must_use]
    pub fn points_taken(&self) -> u32 {
        self.cards_taken.iter().map(|c| c.value as u32).sum()
    }
}
