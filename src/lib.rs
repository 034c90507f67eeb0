//! # klondike-rules
//!
//! A rule engine for three-card-draw Klondike solitaire.
//!
//! The crate carries no UI: it models the piles, deals a shuffled game,
//! and exposes a small command surface a front end drives with clicks.
//! Moves are validated internally; an illegal move leaves the game
//! untouched rather than returning an error, so a front end never has to
//! pre-check legality.
//!
//! ## Design Principles
//!
//! 1. **Select, then target**: A move is two commands. The first marks a
//!    source (discard top, or a run of face-up tableau cards); the second
//!    names a destination and either completes the move or silently
//!    rejects it.
//!
//! 2. **Deterministic dealing**: Shuffling consumes an injected
//!    [`DrawSource`]. A seeded [`GameRng`] reproduces a layout exactly;
//!    [`ScriptedDraws`] pins down a hand-picked layout in tests.
//!
//! 3. **Counters over scans**: Win detection reads two maintained
//!    counters (face-down cards left, cards in stock plus discard)
//!    instead of walking the piles.
//!
//! ## Modules
//!
//! - `cards`: Card and suit types, the canonical deck, the shuffle
//! - `piles`: Pile data structures (stack, queue, tableau column)
//! - `game`: The game controller and move legality rules
//! - `rng`: The `DrawSource` capability and its implementations

pub mod cards;
pub mod game;
pub mod piles;
pub mod rng;

// Re-export commonly used types
pub use crate::cards::{shuffled_stock, standard_deck, Card, Suit, DECK_SIZE};

pub use crate::game::{
    can_go_on_foundation, can_go_on_tableau, Game, Selection, FOUNDATION_COUNT, TABLEAU_WIDTH,
};

pub use crate::piles::{CardQueue, CardStack, ColumnView, TableauColumn};

pub use crate::rng::{DrawSource, GameRng, ScriptedDraws};
