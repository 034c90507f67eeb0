//! Card value model and deck generation.
//!
//! ## Key Types
//!
//! - `Suit`: the four suits, with color derived from the suit
//! - `Card`: immutable (rank, suit) value
//! - `standard_deck` / `shuffled_stock`: canonical 52-card deck and its
//!   draw-source-driven shuffle

pub mod card;
pub mod deck;

pub use card::{Card, Suit};
pub use deck::{shuffled_stock, standard_deck, DECK_SIZE};
