//! The draw pile: an ordered sequence of cards, mutated in place.
//!
//! Index 0 is the top. Drawing takes from the top; the trump reveal is
//! returned to the bottom during the opening deal, so it is always the
//! last card drawn.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CATALOG};
use crate::core::rng::GameRng;

/// Ordered pile of the cards not yet dealt or drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full 40-card deck in catalog order.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: CATALOG.to_vec(),
        }
    }

    /// A deck from an explicit card sequence (index 0 on top).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        debug!("[deck] shuffled {} cards", self.cards.len());
    }

    /// Remove the card with the given id, if present.
    ///
    /// A missing id is a no-op. Returns the remaining sequence.
    pub fn remove_card(&mut self, id: CardId) -> &[Card] {
        self.cards.retain(|c| c.id != id);
        &self.cards
    }

    /// Remove every card matching one of `cards` by id.
    ///
    /// Missing ids are a no-op. Returns the remaining sequence.
    pub fn remove_cards(&mut self, cards: &[Card]) -> &[Card] {
        self.cards
            .retain(|c| !cards.iter().any(|removed| removed.id == c.id));
        &self.cards
    }

    /// Draw the top card, or `None` if the deck is empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.draw_cards(1).pop()
    }

    /// Draw up to `count` cards from the top, in order.
    ///
    /// A short draw (fewer cards remain than requested) silently
    /// returns everything left. This is only reachable near game end,
    /// once the pile is exhausted, and callers treat the short result
    /// as "nothing more to draw".
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.cards.len());
        let drawn: Vec<Card> = self.cards.drain(..take).collect();

        debug!(
            "[deck] drew {} of {} requested, {} remaining",
            drawn.len(),
            count,
            self.cards.len()
        );

        drawn
    }

    /// Put a card on the bottom of the deck.
    pub fn place_bottom(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
