use tracing::info;

use crate::error::WagerError;
use crate::hand::Hand;
use crate::session::Session;

use super::{Phase, Round, RoundEvent};

fn validate_wager(session: &Session, wager: usize) -> Result<(), WagerError> {
    if wager < session.options().min_bet {
        return Err(WagerError::BelowMinimum);
    }
    if !session.can_afford(wager) {
        return Err(WagerError::InsufficientChips);
    }
    Ok(())
}

impl Round {
    /// Commits a wager and deals the opening cards.
    ///
    /// Reshuffles the shoe first if a reshuffle is due, then deals player,
    /// dealer, player, dealer. A natural on the player's first two cards
    /// settles the round immediately without a dealer turn, returning it to
    /// [`Phase::Betting`];
    /// otherwise the round waits in [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in betting phase, the wager is
    /// below the table minimum, or it exceeds the session's chips.
    pub fn start(&mut self, session: &mut Session, wager: usize) -> Result<(), WagerError> {
        if self.phase != Phase::Betting {
            return Err(WagerError::InvalidState);
        }
        validate_wager(session, wager)?;

        session.debit(wager);
        self.wager = wager;
        self.committed = wager;
        self.player_hands = alloc::vec![Hand::new(wager)];
        self.dealer_hand.clear();
        self.active_hand_index = 0;
        self.result_message.clear();
        self.last_result = None;
        self.phase = Phase::Dealing;

        if session.shoe_mut().reshuffle_if_needed() {
            self.events.push(RoundEvent::Reshuffled);
        }

        info!(wager, chips = session.chips(), "round started");

        self.deal_to_player(session, 0)?;
        self.deal_to_dealer(session)?;
        self.deal_to_player(session, 0)?;
        self.deal_to_dealer(session)?;

        if self.player_hands[0].is_natural() {
            self.settle_natural(session);
        } else {
            self.phase = Phase::PlayerTurn;
        }

        Ok(())
    }

    /// Commits the wager for the second split hand and deals both split hands
    /// their second card.
    ///
    /// Only used when the session's options select
    /// [`SplitWager::Deferred`](crate::SplitWager::Deferred).
    ///
    /// # Errors
    ///
    /// Returns an error if no split is waiting for a wager, the wager is below
    /// the table minimum, or it exceeds the session's chips.
    pub fn commit_split_wager(
        &mut self,
        session: &mut Session,
        wager: usize,
    ) -> Result<(), WagerError> {
        if self.phase != Phase::SplittingWager {
            return Err(WagerError::InvalidState);
        }
        validate_wager(session, wager)?;

        session.debit(wager);
        self.committed += wager;
        self.player_hands[1].set_wager(wager);
        self.events.push(RoundEvent::SplitWagerCommitted { wager });

        self.deal_split_cards(session)?;
        Ok(())
    }
}
