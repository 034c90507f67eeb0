//! The card value model.
//!
//! A `Card` is an immutable (rank, suit) pair. Rank runs from 1 (Ace)
//! through 13 (King); the suit carries the card's color. Cards are `Copy`
//! and compare by value, so they can be moved freely between piles without
//! identity bookkeeping.

use serde::{Deserialize, Serialize};

/// One of the four suits, in canonical deck order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Whether cards of this suit are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    /// The conventional one-character symbol for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single playing card.
///
/// Equality and hashing use the (rank, suit) pair only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// The lowest rank (Ace).
    pub const MIN_RANK: u8 = 1;

    /// The highest rank (King).
    pub const MAX_RANK: u8 = 13;

    /// Create a card with the given rank and suit.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is outside `1..=13`. The deck generator is the only
    /// producer in normal play and never violates this.
    #[must_use]
    pub fn new(rank: u8, suit: Suit) -> Self {
        assert!(
            (Self::MIN_RANK..=Self::MAX_RANK).contains(&rank),
            "card rank {rank} is outside {}..={}",
            Self::MIN_RANK,
            Self::MAX_RANK,
        );
        Self { rank, suit }
    }

    /// The rank, in `1..=13`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// The suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Whether this card is red (diamonds or hearts).
    #[must_use]
    pub const fn is_red(self) -> bool {
        self.suit.is_red()
    }

    /// The conventional symbol for this card's rank.
    #[must_use]
    pub fn rank_symbol(self) -> &'static str {
        const SYMBOLS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        SYMBOLS[(self.rank - 1) as usize]
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit)
    }
}
