//! Integration tests driving `Game` through its public command surface.
//!
//! Most tests run on the "transparent" deal: a scripted draw source that
//! makes the shuffle emit the canonical deck in order, so every pile's
//! contents can be written out by hand and checked exactly.

use std::collections::HashSet;

use klondike_rules::{Card, Game, ScriptedDraws, Selection, Suit, DECK_SIZE};

fn c(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Deal a game whose stock pops the canonical deck in order: A♣ first,
/// then 2♣ through K♣, diamonds, hearts, spades.
fn transparent_deal() -> Game {
    let script: Vec<usize> = (0..DECK_SIZE).rev().collect();
    let mut draws = ScriptedDraws::new(script);
    Game::with_draw_source(&mut draws)
}

fn face_down(game: &Game, column: usize) -> Vec<Card> {
    game.tableau(column).face_down().bottom_up().to_vec()
}

fn face_up(game: &Game, column: usize) -> Vec<Card> {
    game.tableau(column).face_up().to_vec()
}

#[test]
fn test_fresh_deal_layout() {
    let game = transparent_deal();

    // Column i holds i face-down cards under one face-up card. The deal is
    // round-robin: one face-up card to column i, then one face-down card to
    // each later column, per round.
    assert_eq!(face_down(&game, 0), vec![]);
    assert_eq!(face_up(&game, 0), vec![c(1, Suit::Clubs)]);

    assert_eq!(face_down(&game, 1), vec![c(2, Suit::Clubs)]);
    assert_eq!(face_up(&game, 1), vec![c(8, Suit::Clubs)]);

    assert_eq!(face_down(&game, 2), vec![c(3, Suit::Clubs), c(9, Suit::Clubs)]);
    assert_eq!(face_up(&game, 2), vec![c(1, Suit::Diamonds)]);

    assert_eq!(
        face_down(&game, 3),
        vec![c(4, Suit::Clubs), c(10, Suit::Clubs), c(2, Suit::Diamonds)],
    );
    assert_eq!(face_up(&game, 3), vec![c(6, Suit::Diamonds)]);

    assert_eq!(
        face_down(&game, 4),
        vec![
            c(5, Suit::Clubs),
            c(11, Suit::Clubs),
            c(3, Suit::Diamonds),
            c(7, Suit::Diamonds),
        ],
    );
    assert_eq!(face_up(&game, 4), vec![c(10, Suit::Diamonds)]);

    assert_eq!(
        face_down(&game, 5),
        vec![
            c(6, Suit::Clubs),
            c(12, Suit::Clubs),
            c(4, Suit::Diamonds),
            c(8, Suit::Diamonds),
            c(11, Suit::Diamonds),
        ],
    );
    assert_eq!(face_up(&game, 5), vec![c(13, Suit::Diamonds)]);

    assert_eq!(
        face_down(&game, 6),
        vec![
            c(7, Suit::Clubs),
            c(13, Suit::Clubs),
            c(5, Suit::Diamonds),
            c(9, Suit::Diamonds),
            c(12, Suit::Diamonds),
            c(1, Suit::Hearts),
        ],
    );
    assert_eq!(face_up(&game, 6), vec![c(2, Suit::Hearts)]);

    // The 24 undealt cards form the stock, all hearts above 2 then spades.
    assert_eq!(game.stock().len(), 24);
    assert_eq!(game.stock().peek(), Some(c(3, Suit::Hearts)));
    assert!(game.discard().is_empty());
    for pile in 0..4 {
        assert!(game.foundation(pile).is_empty());
    }

    assert_eq!(game.selection(), Selection::Idle);
    assert_eq!(game.hidden_count(), 21);
    assert_eq!(game.stock_discard_count(), 24);
    assert!(!game.is_won());
}

#[test]
fn test_fresh_deal_uses_every_card_once() {
    let game = transparent_deal();
    let mut seen: HashSet<Card> = game.stock().top_down().collect();
    for column in 0..7 {
        seen.extend(game.tableau(column).face_down().top_down());
        seen.extend(game.tableau(column).face_up().iter());
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn test_seeded_deals_reproduce() {
    let a = Game::new(Some(20_260_826));
    let b = Game::new(Some(20_260_826));
    assert_eq!(a.stock(), b.stock());
    assert_eq!(a.columns(), b.columns());
}

#[test]
fn test_different_seeds_deal_differently() {
    let a = Game::new(Some(1));
    let b = Game::new(Some(2));
    assert_ne!(a.stock().bottom_up(), b.stock().bottom_up());
}

#[test]
fn test_unseeded_deals_differ() {
    let a = Game::new(None);
    let b = Game::new(None);
    assert_ne!(a.stock().bottom_up(), b.stock().bottom_up());
}

#[test]
fn test_drawing_through_the_stock_and_recycling() {
    let mut game = transparent_deal();
    let original: Vec<Card> = game.stock().top_down().collect();

    // First draw moves three cards one at a time, so the last card drawn
    // ends up on top of the discard.
    game.draw_from_stock();
    let discard: Vec<Card> = game.discard().top_down().collect();
    assert_eq!(
        discard[..3],
        [c(5, Suit::Hearts), c(4, Suit::Hearts), c(3, Suit::Hearts)],
    );
    assert_eq!(game.stock().len(), 21);
    assert_eq!(game.stock_discard_count(), 24);

    // Seven more draws exhaust the stock.
    for _ in 0..7 {
        game.draw_from_stock();
    }
    assert!(game.stock().is_empty());
    assert_eq!(game.discard().len(), 24);
    assert_eq!(game.discard().peek(), Some(c(13, Suit::Spades)));

    // Drawing on an empty stock returns the discard, restoring the exact
    // stock order from before the first draw.
    game.draw_from_stock();
    assert!(game.discard().is_empty());
    let recycled: Vec<Card> = game.stock().top_down().collect();
    assert_eq!(recycled, original);
    assert_eq!(game.stock_discard_count(), 24);
}

#[test]
fn test_opening_play_sequence() {
    let mut game = transparent_deal();

    // Send both exposed aces to foundations. Column 0 has nothing left to
    // flip; column 2 flips its 9♣.
    assert!(!game.select_tableau(0, 1));
    assert_eq!(game.selection(), Selection::Tableau { column: 0, count: 1 });
    assert_eq!(game.tableau(0).selected(), 1);
    assert!(!game.select_foundation(0));
    assert_eq!(game.foundation(0).peek(), Some(c(1, Suit::Clubs)));
    assert!(game.tableau(0).face_up().is_empty());
    assert_eq!(game.hidden_count(), 21);

    assert!(!game.select_tableau(2, 1));
    assert!(!game.select_foundation(1));
    assert_eq!(game.foundation(1).peek(), Some(c(1, Suit::Diamonds)));
    assert_eq!(face_up(&game, 2), vec![c(9, Suit::Clubs)]);
    assert_eq!(face_down(&game, 2), vec![c(3, Suit::Clubs)]);
    assert_eq!(game.hidden_count(), 20);

    // K♦ claims the emptied column 0; column 5 flips J♦.
    assert!(!game.select_tableau(5, 1));
    assert!(!game.select_tableau(0, 0));
    assert_eq!(face_up(&game, 0), vec![c(13, Suit::Diamonds)]);
    assert_eq!(face_up(&game, 5), vec![c(11, Suit::Diamonds)]);
    assert_eq!(game.hidden_count(), 19);

    // 9♣ onto the red 10♦; column 2 flips its last hidden card.
    assert!(!game.select_tableau(2, 1));
    assert!(!game.select_tableau(4, 1));
    assert_eq!(face_up(&game, 4), vec![c(10, Suit::Diamonds), c(9, Suit::Clubs)]);
    assert_eq!(face_up(&game, 2), vec![c(3, Suit::Clubs)]);
    assert!(game.tableau(2).face_down().is_empty());
    assert_eq!(game.hidden_count(), 18);

    // 2♥ onto the black 3♣; column 6 flips A♥, which then goes up.
    assert!(!game.select_tableau(6, 1));
    assert!(!game.select_tableau(2, 1));
    assert_eq!(face_up(&game, 2), vec![c(3, Suit::Clubs), c(2, Suit::Hearts)]);
    assert_eq!(face_up(&game, 6), vec![c(1, Suit::Hearts)]);
    assert_eq!(game.hidden_count(), 17);

    assert!(!game.select_tableau(6, 1));
    assert!(!game.select_foundation(2));
    assert_eq!(game.foundation(2).peek(), Some(c(1, Suit::Hearts)));
    assert_eq!(face_up(&game, 6), vec![c(12, Suit::Diamonds)]);
    assert_eq!(game.hidden_count(), 16);

    // The two-card run 3♣ 2♥ cannot land on 9♣: both columns keep their
    // order and the selection is dropped.
    assert!(!game.select_tableau(2, 2));
    assert_eq!(game.tableau(2).selected(), 2);
    assert!(!game.select_tableau(4, 1));
    assert_eq!(face_up(&game, 2), vec![c(3, Suit::Clubs), c(2, Suit::Hearts)]);
    assert_eq!(face_up(&game, 4), vec![c(10, Suit::Diamonds), c(9, Suit::Clubs)]);
    assert_eq!(game.selection(), Selection::Idle);
    assert_eq!(game.tableau(2).selected(), 0);

    // Q♦ onto K♦ is same-color and rejected.
    assert!(!game.select_tableau(6, 1));
    assert!(!game.select_tableau(0, 1));
    assert_eq!(face_up(&game, 6), vec![c(12, Suit::Diamonds)]);
    assert_eq!(face_up(&game, 0), vec![c(13, Suit::Diamonds)]);

    // Draw 3♥ 4♥ 5♥; the 5♥ on top cannot go on the red 6♦ nor on A♥.
    game.draw_from_stock();
    assert_eq!(game.discard().peek(), Some(c(5, Suit::Hearts)));
    game.select_discard();
    assert!(!game.select_tableau(3, 1));
    assert_eq!(face_up(&game, 3), vec![c(6, Suit::Diamonds)]);
    assert_eq!(game.discard().peek(), Some(c(5, Suit::Hearts)));

    game.select_discard();
    assert!(!game.select_foundation(2));
    assert_eq!(game.foundation(2).peek(), Some(c(1, Suit::Hearts)));
    assert_eq!(game.stock_discard_count(), 24);

    // 2♥ follows its ace up; column 2 keeps its 3♣ and nothing flips.
    assert!(!game.select_tableau(2, 1));
    assert!(!game.select_foundation(2));
    assert_eq!(game.foundation(2).peek(), Some(c(2, Suit::Hearts)));
    assert_eq!(face_up(&game, 2), vec![c(3, Suit::Clubs)]);
    assert_eq!(game.hidden_count(), 16);

    // Run out the stock and cycle it once; nothing was played from the
    // discard, so the original stock order comes back intact.
    for _ in 0..7 {
        game.draw_from_stock();
    }
    assert!(game.stock().is_empty());
    assert_eq!(game.discard().peek(), Some(c(13, Suit::Spades)));
    game.draw_from_stock();
    assert!(game.discard().is_empty());
    assert_eq!(game.stock().peek(), Some(c(3, Suit::Hearts)));
    assert_eq!(game.stock_discard_count(), 24);
    assert!(!game.is_won());
}
