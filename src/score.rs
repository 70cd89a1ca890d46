//! Blackjack hand scoring.
//!
//! Everything here is pure: the score depends only on the ranks of the cards
//! passed in.

use crate::card::Card;

/// Value of a single rank, with aces counted high.
#[must_use]
pub const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Returns the best score and whether it is soft (an ace still counts 11).
#[must_use]
pub fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut value: u32 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.rank == 1 {
            aces += 1;
        }
        value += u32::from(card_value(card.rank));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Returns the best blackjack score for the cards, or 0 when there are none.
///
/// ```
/// use bjcount::{Card, score};
///
/// let hand: Vec<Card> = ["A-H", "A-S", "9-C"]
///     .iter()
///     .map(|id| id.parse().unwrap())
///     .collect();
/// assert_eq!(score(&hand), 21);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate(cards).0
}

/// Returns whether the cards are a natural: exactly two cards totalling 21.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == 21
}
