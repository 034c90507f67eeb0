//! FIFO card queue with O(1) peeks at both ends.
//!
//! Represents a tableau column's face-up run. The front is the oldest card,
//! the one sitting against the face-down pile; the back is the most
//! recently added card, the visible attachment point for new cards.
//!
//! The controller reaches an interior suffix of the run by rotation: after
//! `rotate_left(len - n)`, the last `n` cards sit at the front in their
//! original relative order, and rotating by `n` again restores the queue
//! exactly. Peeking or dequeuing an empty queue is a programming error and
//! panics; callers check `len` first.

use std::collections::VecDeque;

use crate::cards::Card;

/// A queue of cards that can be inspected at both ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardQueue {
    cards: VecDeque<Card>,
}

impl CardQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to the back of the queue.
    pub fn enqueue(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the card at the front of the queue.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn dequeue(&mut self) -> Card {
        match self.cards.pop_front() {
            Some(card) => card,
            None => panic!("dequeue from an empty card queue"),
        }
    }

    /// The card at the front of the queue, without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[must_use]
    pub fn peek_front(&self) -> Card {
        match self.cards.front() {
            Some(&card) => card,
            None => panic!("peek_front on an empty card queue"),
        }
    }

    /// The card at the back of the queue, without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[must_use]
    pub fn peek_back(&self) -> Card {
        match self.cards.back() {
            Some(&card) => card,
            None => panic!("peek_back on an empty card queue"),
        }
    }

    /// Number of cards in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Rotate the queue `n` places to the left.
    ///
    /// The first `n` cards move to the back, preserving relative order.
    /// Rotating by `len()` leaves the queue unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `n` is greater than `len()`.
    pub fn rotate_left(&mut self, n: usize) {
        self.cards.rotate_left(n);
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// The cards from front to back.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Snapshot of the cards from front to back.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}
