//! The state that outlives a single round.

use crate::options::GameOptions;
use crate::shoe::{Shoe, ShoeCount};

/// One player's game session: the shoe, the chip balance and the table rules.
///
/// A session is created once and passed by `&mut` to every [`Round`] command;
/// chips are the only round-to-round state it carries besides the shoe.
///
/// [`Round`]: crate::Round
#[derive(Debug, Clone)]
pub struct Session {
    options: GameOptions,
    shoe: Shoe,
    chips: usize,
}

impl Session {
    /// Creates a session with a freshly shuffled shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcount::{GameOptions, Session};
    ///
    /// let session = Session::new(GameOptions::default(), 42);
    /// assert_eq!(session.chips(), 100_000);
    /// assert_eq!(session.shoe_count().remaining_cards, 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.reshuffle_threshold, seed);
        let chips = options.starting_chips;
        Self {
            options,
            shoe,
            chips,
        }
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to arrange a known deal.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the shoe's counting statistics.
    #[must_use]
    pub fn shoe_count(&self) -> ShoeCount {
        self.shoe.count()
    }

    pub(crate) const fn can_afford(&self, amount: usize) -> bool {
        self.chips >= amount
    }

    /// Removes a committed wager from the balance. Callers check
    /// [`Self::can_afford`] first.
    pub(crate) const fn debit(&mut self, amount: usize) {
        self.chips -= amount;
    }

    pub(crate) const fn credit(&mut self, amount: usize) {
        self.chips += amount;
    }
}
