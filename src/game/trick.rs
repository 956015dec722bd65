//! The table and trick resolution.
//!
//! [`Table`] holds the card each seat has played this trick, plus the
//! seat that led, so play order survives the seat-indexed layout.
//! [`winning_card_index`] is the pure comparison at the heart of the
//! rules; everything else adapts it to the table.
//!
//! Trick ranking in Briscola: trump beats non-trump. Among point-bearing
//! cards of the same class, raw point value decides; among zero-point
//! cards, the value-independent `priority` rank decides (lower is
//! stronger). Non-trump cards only compete when they follow the leading
//! suit; an off-suit card never beats the current best.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Suit};
use crate::core::error::GameError;
use crate::core::seat::{Seat, SeatMap, SEAT_COUNT};

/// Cards played to the current trick, one slot per seat.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    plays: SeatMap<Option<Card>>,
    leader: Option<Seat>,
}

impl Table {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `seat` playing `card`. The first placement marks the
    /// trick leader. Fails if the seat has already played.
    pub fn place(&mut self, seat: Seat, card: Card) -> Result<(), GameError> {
        if self.plays[seat].is_some() {
            return Err(GameError::AlreadyPlayed { seat });
        }

        if self.leader.is_none() {
            self.leader = Some(seat);
        }
        self.plays[seat] = Some(card);
        Ok(())
    }

    /// The card played by `seat` this trick, if any.
    #[must_use]
    pub fn get(&self, seat: Seat) -> Option<Card> {
        self.plays[seat]
    }

    /// The seat that played first this trick, if any card is down.
    #[must_use]
    pub fn leader(&self) -> Option<Seat> {
        self.leader
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn played_count(&self) -> usize {
        self.plays.iter().filter(|(_, c)| c.is_some()).count()
    }

    /// Whether every seat has played.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.played_count() == SEAT_COUNT
    }

    /// Clear the table for the next trick.
    pub fn clear(&mut self) {
        self.plays = SeatMap::with_default();
        self.leader = None;
    }

    /// (seat, card) pairs in the order they were played.
    #[must_use]
    pub fn in_play_order(&self) -> SmallVec<[(Seat, Card); SEAT_COUNT]> {
        let mut plays = SmallVec::new();
        if let Some(lead) = self.leader {
            for seat in [lead, lead.other()] {
                if let Some(card) = self.plays[seat] {
                    plays.push((seat, card));
                }
            }
        }
        plays
    }
}

/// A resolved trick: who won it and what each seat played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRecord {
    /// Seat that won the trick.
    pub winner: Seat,
    /// Card played by each seat.
    pub cards: SeatMap<Card>,
}

/// The suit the trick is judged against.
///
/// If any trump was played, the leading suit is the trump suit,
/// regardless of who led physically. Otherwise it is the suit of the
/// first card played.
#[must_use]
pub fn leading_suit(played: &[Card], trump: Suit) -> Suit {
    if played.iter().any(|c| c.suit == trump) {
        trump
    } else {
        played[0].suit
    }
}

/// Index of the winning card among `played` (in play order).
///
/// Pure and deterministic: identical inputs always pick the same index.
/// Panics if `played` is empty.
#[must_use]
pub fn winning_card_index(played: &[Card], trump: Suit) -> usize {
    assert!(!played.is_empty(), "cannot resolve an empty trick");

    let lead = leading_suit(played, trump);
    let mut best = 0;
    for (i, card) in played.iter().enumerate().skip(1) {
        if beats(card, &played[best], lead, trump) {
            best = i;
        }
    }
    best
}

/// Whether `candidate` takes the trick from the current `best`.
///
/// Ties keep `best` (first-seen precedence).
fn beats(candidate: &Card, best: &Card, lead: Suit, trump: Suit) -> bool {
    let both_trump = candidate.suit == trump && best.suit == trump;
    let both_zero = candidate.value == 0 && best.value == 0;

    if both_trump && both_zero {
        return candidate.priority < best.priority;
    }

    if both_trump {
        return candidate.value > best.value;
    }

    if !both_zero {
        if candidate.suit == lead && best.suit != lead {
            return true;
        }
        if best.suit == lead && candidate.suit != lead {
            return false;
        }
        if candidate.suit == lead && best.suit == lead {
            return candidate.value > best.value;
        }
        return false;
    }

    // Neither trump, both worthless: leading suit wins, then priority.
    if candidate.suit == lead && best.suit != lead {
        return true;
    }
    if best.suit == lead && candidate.suit != lead {
        return false;
    }
    if candidate.suit == lead && best.suit == lead {
        return candidate.priority < best.priority;
    }
    false
}

/// The seat that wins a completed trick, or `None` if the table is not
/// yet full.
#[must_use]
pub fn resolve_winner(table: &Table, trump: Suit) -> Option<Seat> {
    if !table.is_full() {
        return None;
    }

    let plays = table.in_play_order();
    let cards: SmallVec<[Card; SEAT_COUNT]> = plays.iter().map(|(_, c)| *c).collect();
    let index = winning_card_index(&cards, trump);
    Some(plays[index].0)
}
