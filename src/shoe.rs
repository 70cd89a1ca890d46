//! Single-deck shoe with Hi-Lo counting.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ShoeError;

#[cfg(feature = "std")]
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_tenths(value: f64) -> f64 {
    libm::round(value * 10.0) / 10.0
}

/// Counting statistics for the current shoe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoeCount {
    /// Hi-Lo running count since the last shuffle.
    pub running: i32,
    /// Running count per remaining deck, rounded to one decimal place.
    pub true_count: f64,
    /// Cards dealt since the last shuffle.
    pub cards_dealt: usize,
    /// Cards left in the live pile.
    pub remaining_cards: usize,
}

/// The card source for a session.
///
/// Holds every one of the 52 cards at all times, split between the undealt
/// `live` pile (drawn from the end), the cards still `in_play` on the table
/// and the `discard` pile of settled cards.
#[derive(Debug, Clone)]
pub struct Shoe {
    live: Vec<Card>,
    in_play: Vec<Card>,
    discard: Vec<Card>,
    running_count: i32,
    dealt_since_shuffle: usize,
    needs_shuffle: bool,
    threshold: f64,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds a full deck and shuffles it.
    ///
    /// `threshold` is the fraction of the deck that may be dealt before a
    /// reshuffle becomes due; 0.8 reshuffles once 20% of the deck remains.
    #[must_use]
    pub fn new(threshold: f64, seed: u64) -> Self {
        let mut shoe = Self {
            live: Vec::with_capacity(DECK_SIZE),
            in_play: Vec::new(),
            discard: Vec::with_capacity(DECK_SIZE),
            running_count: 0,
            dealt_since_shuffle: 0,
            needs_shuffle: false,
            threshold,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.initialize();
        shoe
    }

    /// Rebuilds the 52 cards in the live pile, shuffles them and resets the count.
    pub fn initialize(&mut self) {
        self.live.clear();
        self.in_play.clear();
        self.discard.clear();

        for suit in Suit::ALL {
            for rank in 1..=13 {
                self.live.push(Card::new(suit, rank));
            }
        }

        self.live.shuffle(&mut self.rng);
        self.needs_shuffle = false;
        self.reset_count();
    }

    /// Draws the next card onto the table and updates the count.
    ///
    /// An empty live pile is folded back from the discard pile before drawing.
    /// Cards still in play are never folded back.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the live and discard piles are both
    /// empty.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        if self.live.is_empty() {
            if self.discard.is_empty() {
                return Err(ShoeError::Exhausted);
            }
            warn!(
                discard = self.discard.len(),
                "live pile empty, forcing reshuffle"
            );
            self.reshuffle();
        }

        let card = self.live.pop().ok_or(ShoeError::Exhausted)?;
        self.in_play.push(card);
        self.dealt_since_shuffle += 1;
        self.running_count += card.count_value();

        if self.at_threshold() {
            self.needs_shuffle = true;
        }

        debug!(%card, running = self.running_count, remaining = self.live.len(), "drew card");
        Ok(card)
    }

    /// Moves every card on the table to the discard pile.
    ///
    /// Called once a round is settled.
    pub fn discard_in_play(&mut self) {
        self.discard.append(&mut self.in_play);
    }

    /// Reshuffles if the threshold was reached since the last shuffle.
    ///
    /// Must only be called between rounds; any cards left in play are
    /// discarded first. Returns `true` if a reshuffle was performed.
    pub fn reshuffle_if_needed(&mut self) -> bool {
        if !self.needs_shuffle {
            return false;
        }

        self.discard_in_play();
        self.reshuffle();
        info!(remaining = self.live.len(), "shoe reshuffled");
        true
    }

    fn reshuffle(&mut self) {
        self.live.append(&mut self.discard);
        self.live.shuffle(&mut self.rng);
        self.needs_shuffle = false;
        self.reset_count();
    }

    const fn reset_count(&mut self) {
        self.running_count = 0;
        self.dealt_since_shuffle = 0;
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    fn at_threshold(&self) -> bool {
        self.live.len() as f64 <= DECK_SIZE as f64 * (1.0 - self.threshold)
    }

    /// Returns the current counting statistics.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn count(&self) -> ShoeCount {
        let remaining = self.live.len();
        let true_count = if remaining == 0 {
            0.0
        } else {
            let decks_remaining = remaining as f64 / DECK_SIZE as f64;
            round_tenths(f64::from(self.running_count) / decks_remaining)
        };

        ShoeCount {
            running: self.running_count,
            true_count,
            cards_dealt: self.dealt_since_shuffle,
            remaining_cards: remaining,
        }
    }

    /// Moves the given live cards to the draw end so they come out in order.
    ///
    /// The shoe still holds the same 52 cards afterwards; only the draw order
    /// changes. Useful for replaying a known deal.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::CardNotInShoe`] without changing the order if a
    /// card is not in the live pile or is named twice.
    pub fn arrange_next(&mut self, draws: &[Card]) -> Result<(), ShoeError> {
        let mut rest = self.live.clone();
        for card in draws {
            let index = rest
                .iter()
                .position(|live| live == card)
                .ok_or(ShoeError::CardNotInShoe)?;
            rest.remove(index);
        }

        rest.extend(draws.iter().rev());
        self.live = rest;
        Ok(())
    }

    /// Returns the undealt cards; the last one is drawn next.
    #[must_use]
    pub fn live(&self) -> &[Card] {
        &self.live
    }

    /// Returns the cards dealt in the current round.
    #[must_use]
    pub fn in_play(&self) -> &[Card] {
        &self.in_play
    }

    /// Returns the settled cards not yet folded back.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the number of cards remaining in the live pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.live.len()
    }

    /// Returns the number of cards dealt since the last shuffle.
    #[must_use]
    pub const fn cards_dealt(&self) -> usize {
        self.dealt_since_shuffle
    }

    /// Returns the Hi-Lo running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Returns whether a reshuffle is due before the next round.
    #[must_use]
    pub const fn needs_reshuffle(&self) -> bool {
        self.needs_shuffle
    }

    /// Returns the configured reshuffle threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }
}
