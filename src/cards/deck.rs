//! Deck generation and shuffling.
//!
//! The canonical deck enumerates every (rank, suit) pair exactly once,
//! suits in declaration order and ranks ascending within each suit. The
//! shuffle is a Fisher–Yates compaction driven by a `DrawSource`: the same
//! draw stream always yields the same permutation.

use crate::cards::card::{Card, Suit};
use crate::rng::DrawSource;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// The full 52-card deck in canonical order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Card::MIN_RANK..=Card::MAX_RANK {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Shuffle a fresh deck into stock order.
///
/// For each index `i` from the last down to 0, one card is drawn uniformly
/// from the first `i + 1` remaining cards and the range is compacted. The
/// returned order is the stock from bottom to top: index 0 is the bottom
/// card, the last element is the top of the stock.
#[must_use]
pub fn shuffled_stock(draws: &mut dyn DrawSource) -> Vec<Card> {
    let mut deck = standard_deck();
    let mut stock = Vec::with_capacity(deck.len());
    for i in (0..deck.len()).rev() {
        let j = draws.next_below(i + 1);
        stock.push(deck[j]);
        deck[j] = deck[i];
    }
    stock
}
