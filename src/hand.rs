//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;
use crate::score::{card_value, evaluate, is_natural};

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Hand has finished acting without busting.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural 21 on its first two cards.
    Blackjack,
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
    /// Wager riding on this hand.
    wager: usize,
    /// Whether the wager was doubled.
    doubled: bool,
    /// Whether this hand is from a split.
    from_split: bool,
}

impl Hand {
    /// Creates a new empty hand with the given wager.
    #[must_use]
    pub const fn new(wager: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            wager,
            doubled: false,
            from_split: false,
        }
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card, wager: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            wager,
            doubled: false,
            from_split: true,
        }
    }

    /// Adds a card to the hand.
    ///
    /// A hand that reaches 21 or more stops acting: a two-card 21 becomes a
    /// blackjack, anything above 21 is a bust.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let value = self.value();
        if value > 21 {
            self.status = HandStatus::Bust;
        } else if is_natural(&self.cards) {
            self.status = HandStatus::Blackjack;
        } else if value == 21 {
            self.status = HandStatus::Stand;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns whether the hand has finished acting.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status != HandStatus::Active
    }

    /// Marks an active hand as finished without drawing.
    pub fn resolve(&mut self) {
        if self.status == HandStatus::Active {
            self.status = HandStatus::Stand;
        }
    }

    /// Returns the wager for this hand.
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    pub(crate) const fn set_wager(&mut self, wager: usize) {
        self.wager = wager;
    }

    /// Doubles the wager and flags the hand as doubled.
    pub const fn double_wager(&mut self) {
        self.wager *= 2;
        self.doubled = true;
    }

    /// Returns whether the wager was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.status == HandStatus::Bust
    }

    /// Returns whether the hand is a natural 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.status == HandStatus::Blackjack
    }

    /// Returns whether the hand holds a pair that could be split.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].same_rank(&self.cards[1])
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card of a pair (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.is_pair() {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Value of the up card alone, for display while the hole card is hidden.
    #[must_use]
    pub fn up_card_value(&self) -> u8 {
        self.cards.first().map_or(0, |c| card_value(c.rank))
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is a natural 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        is_natural(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
