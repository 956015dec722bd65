//! The 40-card catalog: the full rank x suit cross product.
//!
//! Built once at compile time and shared by reference across all game
//! instances; a [`Deck`](crate::game::Deck) starts as a copy of it.

use super::card::{Card, CardId, Rank, Suit};

/// Number of cards in the catalog.
pub const CATALOG_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();

/// Sum of all point values in the catalog.
pub const TOTAL_POINTS: u32 = total_points();

/// Every card in the game, indexed by [`CardId::index`].
pub const CATALOG: [Card; CATALOG_SIZE] = build_catalog();

const fn build_catalog() -> [Card; CATALOG_SIZE] {
    let mut cards = [Card::new(Rank::Ace, Suit::Gold); CATALOG_SIZE];
    let mut s = 0;
    while s < Suit::ALL.len() {
        let mut r = 0;
        while r < Rank::ALL.len() {
            cards[s * Rank::ALL.len() + r] = Card::new(Rank::ALL[r], Suit::ALL[s]);
            r += 1;
        }
        s += 1;
    }
    cards
}

const fn total_points() -> u32 {
    let mut sum = 0;
    let mut i = 0;
    while i < CATALOG_SIZE {
        sum += CATALOG[i].value as u32;
        i += 1;
    }
    sum
}

/// Look up the catalog card for a (rank, suit) pair.
///
/// ```
/// use briscola_engine::cards::{catalog, Rank, Suit};
///
/// let card = catalog::card(Rank::Ace, Suit::Swords);
/// assert_eq!(card.value, 11);
/// ```
#[must_use]
pub const fn card(rank: Rank, suit: Suit) -> Card {
    CATALOG[CardId::new(rank, suit).index()]
}

/// Look up a catalog card by id.
#[must_use]
pub fn get(id: CardId) -> Option<Card> {
    CATALOG.get(id.index()).copied()
}
