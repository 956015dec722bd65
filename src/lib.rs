//! # briscola-engine
//!
//! A two-player Briscola rules engine. The crate owns the card and deck
//! model, player hand management, trick resolution, and the game phase
//! machine; rendering and input live elsewhere and drive the engine
//! through its in-process API.
//!
//! ## Design
//!
//! - **Presentation-agnostic**: the engine exposes read-only queries
//!   for rendering and accepts two external inputs - a per-frame
//!   [`advance`](game::GameState::advance) tick and the human
//!   [`put_card_on_table`](game::GameState::put_card_on_table) action.
//!
//! - **Single owner, no locking**: one `GameState` owns the deck, both
//!   players, and the table, and mutates them only through documented
//!   operations. Everything is synchronous.
//!
//! - **Deterministic**: the only randomness is the opening shuffle,
//!   behind a seedable [`GameRng`](core::GameRng); a game replays
//!   exactly from its seed.
//!
//! ## Modules
//!
//! - `cards`: ranks, suits, the immutable `Card`, and the static
//!   40-card catalog
//! - `core`: seats, RNG, errors
//! - `game`: deck, players, trick resolution, and the phase machine
//!
//! ## Example
//!
//! ```
//! use briscola_engine::core::{GameRng, Seat, SeatMap};
//! use briscola_engine::game::{GameState, Phase, Player};
//!
//! let players = SeatMap::new(|seat| {
//!     if seat.index() == 0 {
//!         Player::new(seat, "You", false)
//!     } else {
//!         Player::new(seat, "Computer", true)
//!     }
//! });
//!
//! let mut game = GameState::new(players, GameRng::new(42));
//! game.advance(); // opening deal
//!
//! assert_eq!(game.phase(), Phase::Main);
//! assert_eq!(game.current_player().hand().len(), 3);
//!
//! // Human plays, the CPU answers, the trick settles.
//! let card = game.current_player().hand()[0];
//! game.put_card_on_table(Seat::new(0), card.id).unwrap();
//! game.advance();
//! assert!(game.all_players_have_played());
//! game.resolve_round();
//! ```

pub mod cards;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, Rank, Suit, CATALOG};
pub use crate::core::{GameError, GameRng, Seat, SeatMap};
pub use crate::game::{Deck, GameState, Phase, Player, Table, TrickRecord, MAX_HAND_SIZE};
