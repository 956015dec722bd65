//! Seat identification and per-seat storage.
//!
//! The game is fixed at two seats, so per-seat data lives in a
//! fixed-size array rather than a keyed map. `Seat` is the index type,
//! `SeatMap` the storage.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 2;

/// A seat at the table (0 or 1).
///
/// ```
/// use briscola_engine::core::Seat;
///
/// let seat = Seat::new(0);
/// assert_eq!(seat.other(), Seat::new(1));
/// assert_eq!(seat.other().other(), seat);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// Create a seat. Panics if `index` is not 0 or 1.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < SEAT_COUNT, "seat index out of range");
        Self(index)
    }

    /// The raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposite seat.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both seats in index order.
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..SEAT_COUNT as u8).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data with O(1) access, backed by a fixed two-element array.
///
/// ```
/// use briscola_engine::core::{Seat, SeatMap};
///
/// let mut taken: SeatMap<u32> = SeatMap::with_value(0);
/// taken[Seat::new(1)] += 11;
/// assert_eq!(taken[Seat::new(0)], 0);
/// assert_eq!(taken[Seat::new(1)], 11);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat(0)), factory(Seat(1))],
        }
    }

    /// Create a map from an array in seat order.
    #[must_use]
    pub fn from_array(data: [T; SEAT_COUNT]) -> Self {
        Self { data }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's entry.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's entry.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over (Seat, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }
}

impl<T: Default> Default for SeatMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
