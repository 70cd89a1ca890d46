//! Game configuration options.

use crate::card::DECK_SIZE;

/// Chips a new session starts with.
pub const STARTING_CHIPS: usize = 100_000;
/// Smallest wager accepted for a round.
pub const MIN_BET: usize = 1_000;
/// Wager a betting UI should preselect.
pub const DEFAULT_BET: usize = 5_000;
/// Fraction of the deck dealt before a reshuffle becomes due.
pub const DECK_SHUFFLE_THRESHOLD: f64 = 0.8;

/// When the wager for the second split hand is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplitWager {
    /// The original wager is charged again at split time and both hands are
    /// dealt their second card immediately.
    #[default]
    Immediate,
    /// The round waits in [`Phase::SplittingWager`](crate::Phase::SplittingWager)
    /// until the caller commits a wager for the second hand.
    Deferred,
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcount::{GameOptions, SplitWager};
///
/// let options = GameOptions::default()
///     .with_starting_chips(50_000)
///     .with_min_bet(500)
///     .with_split_wager(SplitWager::Deferred);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Chips the player starts the session with.
    pub starting_chips: usize,
    /// Minimum wager for a round or a deferred split wager.
    pub min_bet: usize,
    /// Suggested wager for betting UIs.
    pub default_bet: usize,
    /// Fraction of the deck dealt before a reshuffle becomes due.
    pub reshuffle_threshold: f64,
    /// How the second split wager is committed.
    pub split_wager: SplitWager,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            min_bet: MIN_BET,
            default_bet: DEFAULT_BET,
            reshuffle_threshold: DECK_SHUFFLE_THRESHOLD,
            split_wager: SplitWager::Immediate,
        }
    }
}

impl GameOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(2_500);
    /// assert_eq!(options.starting_chips, 2_500);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the minimum wager.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the suggested wager.
    #[must_use]
    pub const fn with_default_bet(mut self, default_bet: usize) -> Self {
        self.default_bet = default_bet;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// The shoe reshuffles before the next round once the live pile is at or
    /// below `52 * (1 - threshold)` cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(0.5);
    /// assert_eq!(options.reshuffle_cards(), 26.0);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: f64) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets how the second split wager is committed.
    #[must_use]
    pub const fn with_split_wager(mut self, split_wager: SplitWager) -> Self {
        self.split_wager = split_wager;
        self
    }

    /// Live-pile size at or below which a reshuffle becomes due.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn reshuffle_cards(&self) -> f64 {
        DECK_SIZE as f64 * (1.0 - self.reshuffle_threshold)
    }
}
