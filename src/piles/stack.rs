//! LIFO card pile.
//!
//! Backs the stock, the discard pile, the four foundation piles, and the
//! face-down run of each tableau column. Pure data: legality of what lands
//! on a pile is the game controller's business.

use crate::cards::Card;

/// A last-in-first-out pile of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStack {
    cards: Vec<Card>,
}

impl CardStack {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card, or `None` if the pile is empty.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The top card without removing it, or `None` if the pile is empty.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// The cards from top to bottom.
    pub fn top_down(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().rev().copied()
    }

    /// The cards from bottom to top, as dealt or pushed.
    #[must_use]
    pub fn bottom_up(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for CardStack {
    /// Builds a pile from bottom to top: the last element becomes the top.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
