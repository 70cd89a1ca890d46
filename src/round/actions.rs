use tracing::debug;

use crate::card::Card;
use crate::error::{ActionError, ShoeError};
use crate::hand::Hand;
use crate::options::SplitWager;
use crate::session::Session;

use super::{Phase, Round, RoundEvent};

impl Round {
    /// Validates that the addressed hand may act and returns its index.
    ///
    /// `None` addresses the active hand.
    fn acting_hand(&self, hand_index: Option<usize>) -> Result<usize, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let index = hand_index.unwrap_or(self.active_hand_index);
        let hand = self
            .player_hands
            .get(index)
            .ok_or(ActionError::HandNotFound)?;

        if hand.is_resolved() {
            return Err(ActionError::HandResolved);
        }
        if index != self.active_hand_index {
            return Err(ActionError::NotActiveHand);
        }

        Ok(index)
    }

    /// Moves the turn to the first unresolved hand, or to the dealer once
    /// every hand is resolved.
    fn advance(&mut self, session: &mut Session) -> Result<(), ShoeError> {
        match self.player_hands.iter().position(|hand| !hand.is_resolved()) {
            Some(index) => {
                self.active_hand_index = index;
                Ok(())
            }
            None => self.finish_player_turns(session),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hand that reaches 21 or busts is resolved and the turn advances.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn, the hand does not
    /// exist, is already resolved, or is not the active hand.
    pub fn hit(
        &mut self,
        session: &mut Session,
        hand_index: Option<usize>,
    ) -> Result<Card, ActionError> {
        let index = self.acting_hand(hand_index)?;

        let card = self.deal_to_player(session, index)?;
        debug!(%card, hand = index, value = self.player_hands[index].value(), "hit");

        if self.player_hands[index].is_resolved() {
            self.advance(session)?;
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn, the hand does not
    /// exist, is already resolved, or is not the active hand.
    pub fn stand(
        &mut self,
        session: &mut Session,
        hand_index: Option<usize>,
    ) -> Result<(), ActionError> {
        let index = self.acting_hand(hand_index)?;

        self.resolve_hand(index);
        self.advance(session)?;

        Ok(())
    }

    /// Player action: Double down (double wager, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn, the hand cannot
    /// act, it does not hold exactly two cards, or the session cannot match
    /// its wager.
    pub fn double(
        &mut self,
        session: &mut Session,
        hand_index: Option<usize>,
    ) -> Result<Card, ActionError> {
        let index = self.acting_hand(hand_index)?;

        let hand = &self.player_hands[index];
        if hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        let wager = hand.wager();
        if !session.can_afford(wager) {
            return Err(ActionError::InsufficientChips);
        }

        session.debit(wager);
        self.committed += wager;
        self.player_hands[index].double_wager();

        let card = self.deal_to_player(session, index)?;
        debug!(%card, hand = index, wager = wager * 2, "doubled");

        self.resolve_hand(index);
        self.advance(session)?;

        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// With [`SplitWager::Immediate`] the original wager is charged again and
    /// both hands receive their second card right away. With
    /// [`SplitWager::Deferred`] the round waits in
    /// [`Phase::SplittingWager`] for [`Round::commit_split_wager`].
    ///
    /// Split hands cannot be split again.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn, the round already
    /// holds split hands, the hand is not a pair, or the session cannot match
    /// the wager.
    pub fn split(&mut self, session: &mut Session) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        if self.player_hands.len() != 1 {
            return Err(ActionError::CannotSplit);
        }

        let hand = &self.player_hands[0];
        if hand.is_resolved() {
            return Err(ActionError::HandResolved);
        }
        if !hand.is_pair() {
            return Err(ActionError::CannotSplit);
        }
        let wager = hand.wager();
        if !session.can_afford(wager) {
            return Err(ActionError::InsufficientChips);
        }

        let hand = &mut self.player_hands[0];
        let Some(second) = hand.take_split_card() else {
            return Err(ActionError::CannotSplit);
        };
        let first = hand.cards()[0];

        let deferred = session.options().split_wager == SplitWager::Deferred;
        let second_wager = if deferred {
            0
        } else {
            session.debit(wager);
            self.committed += wager;
            wager
        };

        self.player_hands = alloc::vec![
            Hand::from_split(first, wager),
            Hand::from_split(second, second_wager),
        ];
        self.active_hand_index = 0;
        self.events.push(RoundEvent::Split);
        debug!(%first, %second, deferred, "split");

        if deferred {
            self.phase = Phase::SplittingWager;
        } else {
            self.deal_split_cards(session)?;
        }

        Ok(())
    }

    /// Deals the second card to each split hand and resumes player turn.
    pub(super) fn deal_split_cards(&mut self, session: &mut Session) -> Result<(), ShoeError> {
        self.deal_to_player(session, 0)?;
        self.deal_to_player(session, 1)?;
        self.phase = Phase::PlayerTurn;
        self.advance(session)
    }

    /// Returns whether the active hand may double down.
    ///
    /// Requires player turn, exactly two cards in the active hand, and chips
    /// to match its wager.
    #[must_use]
    pub fn can_double(&self, session: &Session) -> bool {
        self.phase == Phase::PlayerTurn
            && self.active_hand().is_some_and(|hand| {
                !hand.is_resolved() && hand.len() == 2 && session.can_afford(hand.wager())
            })
    }

    /// Returns whether the hand may be split.
    ///
    /// Requires player turn, a single unsplit hand holding a pair, and chips
    /// to match the wager.
    #[must_use]
    pub fn can_split(&self, session: &Session) -> bool {
        self.phase == Phase::PlayerTurn
            && self.player_hands.len() == 1
            && !self.player_hands[0].is_resolved()
            && self.player_hands[0].is_pair()
            && session.can_afford(self.player_hands[0].wager())
    }
}
