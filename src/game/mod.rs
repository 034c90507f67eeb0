//! The game controller.
//!
//! `Game` owns every pile — stock, discard, four foundations, seven tableau
//! columns — and is driven by four commands from the UI layer:
//!
//! - `draw_from_stock`
//! - `select_discard`
//! - `select_tableau`
//! - `select_foundation`
//!
//! A command either records a pending move source (the selection) or tries
//! to complete a move into the clicked pile. Illegal moves are not errors:
//! the piles stay untouched and the selection is cleared, so the player can
//! simply try again. The two select commands that can complete a move
//! report whether the game is now won.
//!
//! ## Selection
//!
//! At most one move source is pending at a time, modeled as a tagged union
//! so the exclusivity cannot be violated by construction. Each tableau
//! column also carries a display-only highlight count that the controller
//! keeps in sync with its own selection.
//!
//! ## Moving a run
//!
//! A tableau move may carry several face-up cards at once. The face-up run
//! is a FIFO, so the controller reaches the selected suffix by rotating the
//! queue left until the suffix sits at the front, then either transfers it
//! card by card (order preserved) or, when the move is illegal, rotates the
//! suffix back to the rear, restoring the original order exactly.

use serde::{Deserialize, Serialize};

use crate::cards::{shuffled_stock, Card};
use crate::piles::{CardQueue, CardStack, TableauColumn};
use crate::rng::{DrawSource, GameRng};

/// Number of tableau columns.
pub const TABLEAU_WIDTH: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Face-down tableau cards in a fresh deal.
const INITIAL_HIDDEN: usize = 21;

/// Cards left in the stock after a fresh deal.
const INITIAL_STOCK: usize = 24;

/// Cards moved from stock to discard per draw.
const DRAW_SIZE: usize = 3;

/// The pending move source, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing selected.
    Idle,
    /// The top card of the discard pile is selected.
    Discard,
    /// The topmost `count` face-up cards of a tableau column are selected.
    Tableau {
        /// Index of the selected column.
        column: usize,
        /// Number of cards selected, at least 1.
        count: usize,
    },
}

/// Whether `card` may be placed on the given face-up run.
///
/// An empty run accepts only a King. Otherwise the card must be one rank
/// below the run's back card and of the opposite color.
#[must_use]
pub fn can_go_on_tableau(card: Card, run: &CardQueue) -> bool {
    if run.is_empty() {
        card.rank() == Card::MAX_RANK
    } else {
        let top = run.peek_back();
        top.rank() - 1 == card.rank() && top.is_red() != card.is_red()
    }
}

/// Whether `card` may be placed on the given foundation pile.
///
/// An empty pile accepts only an Ace. Otherwise the card must be one rank
/// above the pile's top card and of the same suit. No pile is bound to a
/// suit up front; this rule alone keeps each pile single-suit.
#[must_use]
pub fn can_go_on_foundation(card: Card, pile: &CardStack) -> bool {
    match pile.peek() {
        None => card.rank() == Card::MIN_RANK,
        Some(top) => card.rank() == top.rank() + 1 && card.suit() == top.suit(),
    }
}

/// A single-player Klondike game.
#[derive(Clone, Debug)]
pub struct Game {
    stock: CardStack,
    discard: CardStack,
    foundations: [CardStack; FOUNDATION_COUNT],
    tableau: [TableauColumn; TABLEAU_WIDTH],
    selection: Selection,
    /// Face-down tableau cards remaining. Only ever decremented.
    hidden_count: usize,
    /// Cards in stock and discard combined. Decremented when a card leaves
    /// the pair for a foundation or the tableau; cycling draws don't touch it.
    stock_discard_count: usize,
}

impl Game {
    /// Shuffle and deal a new game.
    ///
    /// A seed gives a fully deterministic layout; `None` seeds the shuffle
    /// from OS entropy.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let mut draws = match seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_draw_source(&mut draws)
    }

    /// Shuffle and deal a new game from an explicit draw source.
    ///
    /// Column `i` receives one face-up card, then every later column
    /// receives one face-down card, per round of the deal — the classic
    /// triangular layout where column `i` ends with `i` hidden cards under
    /// a single visible one.
    #[must_use]
    pub fn with_draw_source(draws: &mut dyn DrawSource) -> Self {
        let mut cards = shuffled_stock(draws);
        let mut tableau: [TableauColumn; TABLEAU_WIDTH] = Default::default();
        for i in 0..TABLEAU_WIDTH {
            if let Some(card) = cards.pop() {
                tableau[i].face_up_mut().enqueue(card);
            }
            for column in tableau.iter_mut().skip(i + 1) {
                if let Some(card) = cards.pop() {
                    column.face_down_mut().push(card);
                }
            }
        }
        Self {
            stock: CardStack::from(cards),
            discard: CardStack::new(),
            foundations: Default::default(),
            tableau,
            selection: Selection::Idle,
            hidden_count: INITIAL_HIDDEN,
            stock_discard_count: INITIAL_STOCK,
        }
    }

    // === Commands ===

    /// Draw the next cards from the stock, or return the discard pile to
    /// the stock when the stock is empty.
    ///
    /// Any pending selection is cancelled. Drawing moves up to three cards,
    /// one at a time, so the last card drawn ends up on top of the discard.
    /// Returning the discard reverses it card by card, which reconstructs
    /// the stock order that existed before any of those cards were drawn.
    pub fn draw_from_stock(&mut self) {
        self.clear_selection();
        if self.stock.is_empty() {
            while let Some(card) = self.discard.pop() {
                self.stock.push(card);
            }
        } else {
            for _ in 0..self.stock.len().min(DRAW_SIZE) {
                if let Some(card) = self.stock.pop() {
                    self.discard.push(card);
                }
            }
        }
    }

    /// Select the top card of the discard pile, or clear an existing
    /// selection.
    ///
    /// Selecting succeeds only when nothing is selected and the discard is
    /// nonempty; in every other case this acts as a deselect.
    pub fn select_discard(&mut self) {
        if self.selection == Selection::Idle && !self.discard.is_empty() {
            self.selection = Selection::Discard;
        } else {
            self.clear_selection();
        }
    }

    /// Select `count` cards on a tableau column, or try to move the current
    /// selection onto it.
    ///
    /// With a selection pending and `count <= 1`, this attempts to complete
    /// the move onto `column`; whatever the outcome, the selection is
    /// cleared. With `count > 1` while a selection is pending, the pending
    /// selection is simply dropped. With nothing selected, `count > 0`
    /// marks the topmost `count` face-up cards of `column` as the pending
    /// source, and `count == 0` does nothing.
    ///
    /// Returns whether the game is now won.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range, or when starting a selection
    /// with `count` greater than the column's face-up cards.
    pub fn select_tableau(&mut self, column: usize, count: usize) -> bool {
        match self.selection {
            Selection::Discard => {
                if count <= 1 {
                    self.discard_to_tableau(column);
                }
                self.clear_selection();
            }
            Selection::Tableau {
                column: source,
                count: selected,
            } => {
                if count <= 1 {
                    self.move_selected_run(source, selected, column);
                }
                self.clear_selection();
            }
            Selection::Idle if count > 0 => {
                self.tableau[column].set_selected(count);
                self.selection = Selection::Tableau { column, count };
            }
            Selection::Idle => {}
        }
        self.is_won()
    }

    /// Try to move the selected card onto a foundation pile.
    ///
    /// From a discard selection the discard's top card moves. From a
    /// tableau selection only the single topmost face-up card of the
    /// selected column moves, regardless of how many cards were selected;
    /// the rest of the selection is dropped silently. With nothing selected
    /// this does nothing.
    ///
    /// Returns whether the game is now won.
    ///
    /// # Panics
    ///
    /// Panics if `pile` is out of range.
    pub fn select_foundation(&mut self, pile: usize) -> bool {
        match self.selection {
            Selection::Discard => {
                self.discard_to_foundation(pile);
                self.clear_selection();
            }
            Selection::Tableau { column, .. } => {
                self.tableau_to_foundation(column, pile);
                self.clear_selection();
            }
            Selection::Idle => {}
        }
        self.is_won()
    }

    // === Queries ===

    /// Whether the game is won: every face-down tableau card has been
    /// flipped and at most one card remains in stock and discard combined.
    /// Foundation completeness is not required.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.stock_discard_count <= 1 && self.hidden_count == 0
    }

    /// The stock.
    #[must_use]
    pub fn stock(&self) -> &CardStack {
        &self.stock
    }

    /// The discard pile.
    #[must_use]
    pub fn discard(&self) -> &CardStack {
        &self.discard
    }

    /// A foundation pile.
    ///
    /// # Panics
    ///
    /// Panics if `pile` is out of range.
    #[must_use]
    pub fn foundation(&self, pile: usize) -> &CardStack {
        &self.foundations[pile]
    }

    /// All four foundation piles.
    #[must_use]
    pub fn foundations(&self) -> &[CardStack; FOUNDATION_COUNT] {
        &self.foundations
    }

    /// A tableau column.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    #[must_use]
    pub fn tableau(&self, column: usize) -> &TableauColumn {
        &self.tableau[column]
    }

    /// All seven tableau columns.
    #[must_use]
    pub fn columns(&self) -> &[TableauColumn; TABLEAU_WIDTH] {
        &self.tableau
    }

    /// The pending move source.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Face-down tableau cards remaining.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hidden_count
    }

    /// Cards in stock and discard combined.
    #[must_use]
    pub fn stock_discard_count(&self) -> usize {
        self.stock_discard_count
    }

    // === Internals ===

    fn clear_selection(&mut self) {
        if let Selection::Tableau { column, .. } = self.selection {
            self.tableau[column].set_selected(0);
        }
        self.selection = Selection::Idle;
    }

    fn discard_to_tableau(&mut self, column: usize) {
        if let Some(card) = self.discard.peek() {
            if can_go_on_tableau(card, self.tableau[column].face_up()) {
                self.discard.pop();
                self.tableau[column].face_up_mut().enqueue(card);
                self.stock_discard_count -= 1;
            }
        }
    }

    fn discard_to_foundation(&mut self, pile: usize) {
        if let Some(card) = self.discard.peek() {
            if can_go_on_foundation(card, &self.foundations[pile]) {
                self.discard.pop();
                self.foundations[pile].push(card);
                self.stock_discard_count -= 1;
            }
        }
    }

    /// Move the selected run of `count` cards from one column onto another.
    fn move_selected_run(&mut self, source: usize, count: usize, dest: usize) {
        let behind = self.tableau[source].face_up().len() - count;
        self.tableau[source].face_up_mut().rotate_left(behind);
        let lead = self.tableau[source].face_up().peek_front();
        if can_go_on_tableau(lead, self.tableau[dest].face_up()) {
            if source == dest {
                // The run lands exactly where it started.
                self.tableau[source].face_up_mut().rotate_left(count);
            } else {
                let (from, to) = two_columns(&mut self.tableau, source, dest);
                for _ in 0..count {
                    let card = from.face_up_mut().dequeue();
                    to.face_up_mut().enqueue(card);
                }
            }
            self.flip_exposed(source);
        } else {
            // Rotate the run back to the rear, restoring the original order.
            self.tableau[source].face_up_mut().rotate_left(count);
        }
    }

    /// Move the topmost face-up card of `column` onto a foundation pile.
    fn tableau_to_foundation(&mut self, column: usize, pile: usize) {
        let card = self.tableau[column].face_up().peek_back();
        if can_go_on_foundation(card, &self.foundations[pile]) {
            let face_up = self.tableau[column].face_up_mut();
            face_up.rotate_left(face_up.len() - 1);
            let card = face_up.dequeue();
            self.foundations[pile].push(card);
            self.flip_exposed(column);
        }
    }

    /// Flip the top face-down card of `column` if its face-up run is empty.
    fn flip_exposed(&mut self, column: usize) {
        let column = &mut self.tableau[column];
        if column.face_up().is_empty() {
            if let Some(card) = column.face_down_mut().pop() {
                column.face_up_mut().enqueue(card);
                self.hidden_count -= 1;
            }
        }
    }
}

/// Borrow two distinct tableau columns mutably.
fn two_columns(
    tableau: &mut [TableauColumn; TABLEAU_WIDTH],
    a: usize,
    b: usize,
) -> (&mut TableauColumn, &mut TableauColumn) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = tableau.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = tableau.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
