//! Round phase and event types.

use crate::card::Card;

/// Round phase.
///
/// Phases only move forward; settlement returns the round to
/// [`Phase::Betting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for a wager.
    #[default]
    Betting,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// A split is waiting for the second hand's wager.
    SplittingWager,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Wagers are being paid out.
    Settlement,
}

/// Who received a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player hand at this index.
    Player(usize),
    /// The dealer.
    Dealer,
}

/// Something that happened during a round, in order.
///
/// Commands apply their whole outcome at once; the events let a display
/// replay that outcome at its own pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// The shoe was reshuffled before dealing.
    Reshuffled,
    /// A card was dealt.
    Dealt {
        /// Receiving seat.
        seat: Seat,
        /// The card.
        card: Card,
    },
    /// A player hand finished acting.
    HandResolved {
        /// Index of the hand.
        hand_index: usize,
    },
    /// The pair was split into two hands.
    Split,
    /// The deferred wager for the second split hand was committed.
    SplitWagerCommitted {
        /// The committed wager.
        wager: usize,
    },
    /// All player hands are resolved and the dealer plays.
    DealerTurn,
    /// The round was settled.
    Settled {
        /// Net chip change for the round.
        net: isize,
    },
}
