use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use tracing::{debug, info};

use crate::error::ShoeError;
use crate::hand::Hand;
use crate::result::{HandOutcome, HandResult, RoundResult};
use crate::session::Session;

use super::{Phase, Round, RoundEvent};

/// The dealer draws below this value, soft or hard.
const DEALER_STANDS_ON: u8 = 17;

/// Formats a chip amount with thousands separators.
fn format_chips(amount: usize) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compares one resolved hand against the dealer.
///
/// A player natural pays 3:2 unless the dealer also holds one; otherwise the
/// higher score wins and equal scores push.
fn judge(hand: &Hand, dealer_value: u8, dealer_natural: bool) -> (HandOutcome, usize, String) {
    let wager = hand.wager();
    let player_value = hand.value();

    if hand.is_bust() {
        (HandOutcome::Lose, 0, "Dealer Wins - Player Bust!".to_string())
    } else if hand.is_natural() && dealer_natural {
        (HandOutcome::Push, wager, "Push - It's a Tie!".to_string())
    } else if hand.is_natural() {
        (
            HandOutcome::Blackjack,
            wager * 5 / 2,
            "Blackjack! You Win!".to_string(),
        )
    } else if dealer_value > 21 {
        (
            HandOutcome::Win,
            wager * 2,
            format!("You Win! Dealer Busts! ({dealer_value})"),
        )
    } else if dealer_value > player_value {
        (
            HandOutcome::Lose,
            0,
            format!("Dealer Wins ({dealer_value} vs {player_value})"),
        )
    } else if player_value > dealer_value {
        (
            HandOutcome::Win,
            wager * 2,
            format!("You Win! ({player_value} vs {dealer_value})"),
        )
    } else {
        (HandOutcome::Push, wager, "Push - It's a Tie!".to_string())
    }
}

impl Round {
    /// Runs the dealer's turn and settles the round.
    pub(super) fn finish_player_turns(&mut self, session: &mut Session) -> Result<(), ShoeError> {
        self.phase = Phase::DealerTurn;
        self.events.push(RoundEvent::DealerTurn);

        self.dealer_play(session)?;
        self.settle(session);

        Ok(())
    }

    /// Settles an opening natural without a dealer turn.
    pub(super) fn settle_natural(&mut self, session: &mut Session) {
        debug!(dealer = self.dealer_hand.value(), "player natural, no dealer draw");
        self.settle(session);
    }

    /// Dealer draws until reaching 17 or more.
    ///
    /// No cards are drawn when every player hand is bust.
    fn dealer_play(&mut self, session: &mut Session) -> Result<(), ShoeError> {
        if self.player_hands.iter().all(Hand::is_bust) {
            debug!(dealer = self.dealer_hand.value(), "all hands bust, dealer stands pat");
            return Ok(());
        }

        while self.dealer_hand.value() < DEALER_STANDS_ON {
            let card = self.deal_to_dealer(session)?;
            debug!(%card, dealer = self.dealer_hand.value(), "dealer draws");
        }

        Ok(())
    }

    /// Pays out every hand, records the result and resets for the next round.
    fn settle(&mut self, session: &mut Session) {
        self.phase = Phase::Settlement;

        let dealer_value = self.dealer_hand.value();
        let dealer_bust = self.dealer_hand.is_bust();
        let dealer_natural = self.dealer_hand.is_natural();
        let split = self.player_hands.len() > 1;

        let mut hands = Vec::with_capacity(self.player_hands.len());
        let mut lines = Vec::with_capacity(self.player_hands.len() + 1);
        let mut total_payout: usize = 0;

        for (hand_index, hand) in self.player_hands.iter().enumerate() {
            let (outcome, payout, message) = judge(hand, dealer_value, dealer_natural);
            total_payout += payout;

            lines.push(if split {
                format!("Hand {}: {message}", hand_index + 1)
            } else {
                message.clone()
            });

            hands.push(HandResult {
                hand_index,
                outcome,
                wager: hand.wager(),
                payout,
                player_value: hand.value(),
                dealer_value,
                message,
            });
        }

        session.credit(total_payout);
        session.shoe_mut().discard_in_play();

        #[expect(clippy::cast_possible_wrap, reason = "chip totals fit in isize")]
        let net = total_payout as isize - self.committed as isize;

        lines.push(match net {
            n if n > 0 => format!("Won {} chips", format_chips(n.unsigned_abs())),
            n if n < 0 => format!("Lost {} chips", format_chips(n.unsigned_abs())),
            _ => "Chips returned".to_string(),
        });
        let message = lines.join("\n");

        info!(
            committed = self.committed,
            total_payout,
            net,
            chips = session.chips(),
            "round settled"
        );

        self.events.push(RoundEvent::Settled { net });
        self.result_message.clone_from(&message);
        self.last_result = Some(RoundResult {
            hands,
            player_hands: core::mem::take(&mut self.player_hands),
            dealer_hand: core::mem::take(&mut self.dealer_hand),
            dealer_value,
            dealer_bust,
            dealer_natural,
            committed: self.committed,
            total_payout,
            net,
            message,
        });

        self.clear_round();
    }
}
