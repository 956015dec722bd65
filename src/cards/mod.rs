//! Card data: ranks, suits, the `Card` value, and the static catalog.

pub mod card;
pub mod catalog;

pub use card::{Card, CardId, Rank, Suit};
pub use catalog::{CATALOG, CATALOG_SIZE, TOTAL_POINTS};
