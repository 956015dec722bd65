//! Core types shared across the engine: seats, RNG, errors.

pub mod error;
pub mod rng;
pub mod seat;

pub use error::GameError;
pub use rng::GameRng;
pub use seat::{Seat, SeatMap, SEAT_COUNT};
