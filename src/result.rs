//! Settlement result types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::{DealerHand, Hand};

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
    /// Player wins with a natural.
    Blackjack,
}

/// Result for a single hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The wager on this hand, including any double.
    pub wager: usize,
    /// Chips returned to the player for this hand.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
    /// Narrative line for this hand, e.g. `You Win! (20 vs 18)`.
    pub message: String,
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player hand.
    pub hands: Vec<HandResult>,
    /// The player hands as they stood at settlement.
    pub player_hands: Vec<Hand>,
    /// The dealer hand as it stood at settlement.
    pub dealer_hand: DealerHand,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural.
    pub dealer_natural: bool,
    /// Chips committed over the round (wagers, doubles and split wagers).
    pub committed: usize,
    /// Chips returned by settlement.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// Composed settlement message.
    pub message: String,
}
