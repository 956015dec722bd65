//! Card values: ranks, suits, and the immutable `Card` itself.
//!
//! A Briscola card carries two independent strength measures:
//!
//! - `value`: the points the card is worth when taken in a trick
//!   (Ace 11, Three 10, Ten 4, Nine 3, Eight 2, everything else 0).
//! - `priority`: the tie-break rank among zero-point cards
//!   (1 = strongest .. 10 = weakest). Not derived from `value`.
//!
//! Both are functions of the rank alone, so `Card::new` computes them.

use serde::{Deserialize, Serialize};

/// The ten Briscola ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
}

impl Rank {
    /// All ranks, in catalog order.
    pub const ALL: [Rank; 10] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
    ];

    /// Trick point value of this rank.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Three => 10,
            Rank::Ten => 4,
            Rank::Nine => 3,
            Rank::Eight => 2,
            Rank::Two | Rank::Four | Rank::Five | Rank::Six | Rank::Seven => 0,
        }
    }

    /// Tie-break rank: 1 is strongest, 10 is weakest.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Three => 2,
            Rank::Ten => 3,
            Rank::Nine => 4,
            Rank::Eight => 5,
            Rank::Seven => 6,
            Rank::Six => 7,
            Rank::Five => 8,
            Rank::Four => 9,
            Rank::Two => 10,
        }
    }

    /// Position within [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Uppercase rank name, as used in card ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::Two => "TWO",
            Rank::Three => "THREE",
            Rank::Four => "FOUR",
            Rank::Five => "FIVE",
            Rank::Six => "SIX",
            Rank::Seven => "SEVEN",
            Rank::Eight => "EIGHT",
            Rank::Nine => "NINE",
            Rank::Ten => "TEN",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four Briscola suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Gold,
    Cups,
    Swords,
    Clubs,
}

impl Suit {
    /// All suits, in catalog order.
    pub const ALL: [Suit; 4] = [Suit::Gold, Suit::Cups, Suit::Swords, Suit::Clubs];

    /// Position within [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Uppercase suit name, as used in card ids.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Gold => "GOLD",
            Suit::Cups => "CUPS",
            Suit::Swords => "SWORDS",
            Suit::Clubs => "CLUBS",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unique card identifier, derived from (rank, suit).
///
/// The raw value doubles as the card's index into
/// [`CATALOG`](crate::cards::CATALOG).
///
/// ```
/// use briscola_engine::cards::{CardId, Rank, Suit};
///
/// let id = CardId::new(Rank::Ace, Suit::Swords);
/// assert_eq!(id.rank(), Rank::Ace);
/// assert_eq!(id.suit(), Suit::Swords);
/// assert_eq!(format!("{}", id), "ACE-SWORDS");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(u8);

impl CardId {
    /// Derive the id for a (rank, suit) pair.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self((suit.index() * Rank::ALL.len() + rank.index()) as u8)
    }

    /// Index into the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank encoded in this id.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ALL[self.0 as usize % Rank::ALL.len()]
    }

    /// Suit encoded in this id.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[self.0 as usize / Rank::ALL.len()]
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.rank().name(), self.suit().name())
    }
}

/// An immutable playing card.
///
/// All fields are derivable from `rank` and `suit`; they are stored flat
/// so trick comparison never goes back through lookup tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier, derived from rank and suit.
    pub id: CardId,
    /// Rank (Ace..Ten).
    pub rank: Rank,
    /// Suit.
    pub suit: Suit,
    /// Trick point value (0-11).
    pub value: u8,
    /// Tie-break rank, 1 = strongest.
    pub priority: u8,
}

impl Card {
    /// Create the card for a (rank, suit) pair.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: CardId::new(rank, suit),
            rank,
            suit,
            value: rank.points(),
            priority: rank.priority(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
