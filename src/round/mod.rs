//! Round engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::{DealerHand, Hand};
use crate::result::RoundResult;
use crate::session::Session;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Phase, RoundEvent, Seat};

/// A blackjack round: the hands, wagers and turn order for one deal.
///
/// Every command borrows the [`Session`] that owns the shoe and the chips.
/// A rejected command returns an error and leaves both untouched.
///
/// # Example
///
/// ```
/// use bjcount::{Card, GameOptions, Phase, Round, Session};
///
/// let mut session = Session::new(GameOptions::default(), 7);
/// let deal: [Card; 4] = ["9-H", "6-C", "7-D", "10-S"].map(|id| id.parse().unwrap());
/// session.shoe_mut().arrange_next(&deal).unwrap();
///
/// let mut round = Round::new();
/// round.start(&mut session, 1_000).unwrap();
/// assert_eq!(session.chips(), 99_000);
/// assert_eq!(round.phase(), Phase::PlayerTurn);
/// assert_eq!(round.player_hands()[0].value(), 16);
///
/// round.stand(&mut session, None).unwrap();
/// assert_eq!(round.phase(), Phase::Betting);
/// assert!(!round.result_message().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Round {
    /// Current phase.
    phase: Phase,
    /// Wager placed when the round started.
    wager: usize,
    /// Chips taken from the session so far this round.
    committed: usize,
    /// Player hands (two after a split).
    player_hands: Vec<Hand>,
    /// Dealer's hand.
    dealer_hand: DealerHand,
    /// Hand currently acting.
    active_hand_index: usize,
    /// Settlement narrative of the last round.
    result_message: String,
    /// Full result of the last settled round.
    last_result: Option<RoundResult>,
    /// Events not yet drained by the caller.
    events: Vec<RoundEvent>,
}

impl Round {
    /// Creates a round waiting for a wager.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Betting,
            wager: 0,
            committed: 0,
            player_hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            active_hand_index: 0,
            result_message: String::new(),
            last_result: None,
            events: Vec::new(),
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the wager placed at the start of the round (before any split).
    #[must_use]
    pub const fn wager(&self) -> usize {
        self.wager
    }

    /// Returns the chips committed so far this round.
    #[must_use]
    pub const fn committed(&self) -> usize {
        self.committed
    }

    /// Returns the player hands.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    /// Returns the hand currently acting, if any.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        self.player_hands.get(self.active_hand_index)
    }

    /// Returns the index of the hand currently acting.
    #[must_use]
    pub const fn active_hand_index(&self) -> usize {
        self.active_hand_index
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the settlement message of the last round, or an empty string.
    #[must_use]
    pub fn result_message(&self) -> &str {
        &self.result_message
    }

    /// Returns the result of the last settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the events not yet drained.
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Takes the pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        core::mem::take(&mut self.events)
    }

    /// Draws a card into the player hand at `index`.
    fn deal_to_player(&mut self, session: &mut Session, index: usize) -> Result<Card, ShoeError> {
        let card = session.shoe_mut().draw()?;
        let hand = &mut self.player_hands[index];
        let was_resolved = hand.is_resolved();
        hand.add_card(card);
        let resolved = hand.is_resolved();

        self.events.push(RoundEvent::Dealt {
            seat: Seat::Player(index),
            card,
        });
        if resolved && !was_resolved {
            self.events.push(RoundEvent::HandResolved { hand_index: index });
        }
        Ok(card)
    }

    /// Draws a card into the dealer's hand.
    fn deal_to_dealer(&mut self, session: &mut Session) -> Result<Card, ShoeError> {
        let card = session.shoe_mut().draw()?;
        self.dealer_hand.add_card(card);
        self.events.push(RoundEvent::Dealt {
            seat: Seat::Dealer,
            card,
        });
        Ok(card)
    }

    /// Resolves the hand at `index` if it is still acting.
    fn resolve_hand(&mut self, index: usize) {
        let hand = &mut self.player_hands[index];
        if !hand.is_resolved() {
            hand.resolve();
            self.events.push(RoundEvent::HandResolved { hand_index: index });
        }
    }

    /// Clears all hands and wagers, keeping the last result and message.
    fn clear_round(&mut self) {
        self.player_hands.clear();
        self.dealer_hand.clear();
        self.wager = 0;
        self.committed = 0;
        self.active_hand_index = 0;
        self.phase = Phase::Betting;
    }
}
