//! The rules engine proper: deck, players, trick resolution, phases.

pub mod deck;
pub mod player;
pub mod state;
pub mod trick;

pub use deck::Deck;
pub use player::{Player, MAX_HAND_SIZE};
pub use state::{GameState, Phase};
pub use trick::{leading_suit, resolve_winner, winning_card_index, Table, TrickRecord};
