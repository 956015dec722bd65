//! Error taxonomy for the rules engine.
//!
//! Only externally-triggered failures get an error type; internal
//! invariant violations are programming errors and panic instead.
//! Short draws from an empty deck are not errors at all - see
//! [`Deck::draw_cards`](crate::game::Deck::draw_cards).

use thiserror::Error;

use crate::cards::CardId;
use crate::core::seat::Seat;

/// A rejected play. The failing operation performs no mutation, so the
/// caller can report the error and retry with a different card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The acting player does not hold the card.
    #[error("{player} attempted to play {card}, which is not in hand")]
    NotInHand { player: String, card: CardId },

    /// The seat already has a card on the table this trick.
    #[error("{seat} has already played a card this trick")]
    AlreadyPlayed { seat: Seat },
}
