//! Pile data structures.
//!
//! These types hold cards and preserve order; none of them knows the rules
//! of the game. The controller in `crate::game` decides what may move
//! where.
//!
//! ## Key Types
//!
//! - `CardStack`: LIFO pile (stock, discard, foundations, face-down runs)
//! - `CardQueue`: FIFO with O(1) peeks at both ends (face-up runs)
//! - `TableauColumn`: face-down stack + face-up queue + highlight count

pub mod column;
pub mod queue;
pub mod stack;

pub use column::{ColumnView, TableauColumn};
pub use queue::CardQueue;
pub use stack::CardStack;
