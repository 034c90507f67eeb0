//! A tableau column: hidden run, visible run, and selection highlight.

use serde::{Deserialize, Serialize};

use crate::piles::queue::CardQueue;
use crate::piles::stack::CardStack;

/// One column of the tableau.
///
/// Holds a face-down pile, the face-up run stacked on top of it, and the
/// number of face-up cards currently highlighted as a pending move source.
/// The selected count is display state; the game controller keeps it in
/// sync with its own selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableauColumn {
    face_down: CardStack,
    face_up: CardQueue,
    selected: usize,
}

/// Snapshot of a column's visible state, front (bottom) to back (top).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnView {
    /// Number of face-down cards.
    pub hidden: usize,
    /// Face-up cards, oldest first.
    pub face_up: Vec<crate::cards::Card>,
    /// Number of face-up cards highlighted.
    pub selected: usize,
}

impl TableauColumn {
    /// Create an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The face-down pile.
    #[must_use]
    pub fn face_down(&self) -> &CardStack {
        &self.face_down
    }

    /// The face-up run.
    #[must_use]
    pub fn face_up(&self) -> &CardQueue {
        &self.face_up
    }

    pub(crate) fn face_down_mut(&mut self) -> &mut CardStack {
        &mut self.face_down
    }

    pub(crate) fn face_up_mut(&mut self) -> &mut CardQueue {
        &mut self.face_up
    }

    /// Number of face-up cards currently highlighted.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set the number of highlighted face-up cards.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the number of face-up cards.
    pub fn set_selected(&mut self, n: usize) {
        assert!(
            n <= self.face_up.len(),
            "selected count {n} exceeds {} face-up cards",
            self.face_up.len(),
        );
        self.selected = n;
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> ColumnView {
        ColumnView {
            hidden: self.face_down.len(),
            face_up: self.face_up.to_vec(),
            selected: self.selected,
        }
    }
}
