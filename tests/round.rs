//! Round integration tests.

use bjcount::{
    ActionError, Card, DECK_SIZE, GameOptions, HandOutcome, Phase, Round, RoundEvent, Seat,
    Session, SplitWager, Suit, WagerError,
};

fn cards(ids: &[&str]) -> Vec<Card> {
    ids.iter().map(|id| id.parse().unwrap()).collect()
}

fn session_with_draws(options: GameOptions, draws: &[&str]) -> Session {
    let mut session = Session::new(options, 1);
    session.shoe_mut().arrange_next(&cards(draws)).unwrap();
    session
}

#[test]
fn start_rejects_invalid_wagers() {
    let mut session = Session::new(GameOptions::default(), 3);
    let mut round = Round::new();

    assert_eq!(
        round.start(&mut session, 999).unwrap_err(),
        WagerError::BelowMinimum
    );
    assert_eq!(
        round.start(&mut session, 100_001).unwrap_err(),
        WagerError::InsufficientChips
    );
    assert_eq!(session.chips(), 100_000);
    assert_eq!(session.shoe_count().cards_dealt, 0);
    assert_eq!(round.phase(), Phase::Betting);
    assert!(round.player_hands().is_empty());
}

#[test]
fn opening_deal_alternates_player_and_dealer() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &[
            "9-H",  // player
            "6-C",  // dealer up
            "7-D",  // player
            "10-S", // dealer hole
        ],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();

    assert_eq!(session.chips(), 99_000);
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.wager(), 1_000);
    assert_eq!(round.player_hands().len(), 1);
    assert_eq!(round.player_hands()[0].cards(), cards(&["9-H", "7-D"]));
    assert_eq!(round.dealer_hand().cards(), cards(&["6-C", "10-S"]));
    assert_eq!(round.active_hand_index(), 0);

    let seats: Vec<Seat> = round
        .drain_events()
        .into_iter()
        .filter_map(|event| match event {
            RoundEvent::Dealt { seat, .. } => Some(seat),
            _ => None,
        })
        .collect();
    assert_eq!(
        seats,
        [Seat::Player(0), Seat::Dealer, Seat::Player(0), Seat::Dealer]
    );
    assert!(round.events().is_empty());

    assert_eq!(
        round.start(&mut session, 1_000).unwrap_err(),
        WagerError::InvalidState
    );
    assert_eq!(session.chips(), 99_000);
}

#[test]
fn natural_settles_immediately_and_pays_three_to_two() {
    let mut session = session_with_draws(GameOptions::default(), &["A-H", "5-C", "Q-S", "9-D"]);
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();

    assert_eq!(round.phase(), Phase::Betting);
    assert_eq!(session.chips(), 101_500);
    assert!(round.player_hands().is_empty());
    assert_eq!(round.wager(), 0);
    assert_eq!(
        round.result_message(),
        "Blackjack! You Win!\nWon 1,500 chips"
    );

    let result = round.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 2_500);
    assert_eq!(result.dealer_hand.len(), 2);
    assert_eq!(result.net, 1_500);

    let events = round.drain_events();
    assert_eq!(events.last(), Some(&RoundEvent::Settled { net: 1_500 }));
    assert!(events.contains(&RoundEvent::HandResolved { hand_index: 0 }));
    assert!(!events.contains(&RoundEvent::DealerTurn));
}

#[test]
fn natural_against_dealer_natural_pushes() {
    let mut session = session_with_draws(GameOptions::default(), &["A-H", "A-S", "K-H", "Q-D"]);
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();

    assert_eq!(session.chips(), 100_000);
    assert_eq!(round.result_message(), "Push - It's a Tie!\nChips returned");
    assert_eq!(
        round.last_result().unwrap().hands[0].outcome,
        HandOutcome::Push
    );
}

#[test]
fn drawn_21_ties_dealer_natural() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &["5-H", "A-S", "6-C", "K-D", "10-H"],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    assert_eq!(round.phase(), Phase::PlayerTurn);
    round.hit(&mut session, None).unwrap();

    let result = round.last_result().unwrap();
    assert!(result.dealer_natural);
    assert_eq!(result.dealer_hand.len(), 2);
    assert_eq!(result.hands[0].outcome, HandOutcome::Push);
    assert_eq!(session.chips(), 100_000);
}

#[test]
fn dealer_stands_on_seventeen() {
    let mut session = session_with_draws(GameOptions::default(), &["10-H", "9-H", "8-C", "8-S"]);
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    round.stand(&mut session, None).unwrap();

    let result = round.last_result().unwrap();
    assert_eq!(result.dealer_hand.len(), 2);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.hands[0].outcome, HandOutcome::Win);
    assert_eq!(result.hands[0].message, "You Win! (18 vs 17)");
    assert_eq!(session.chips(), 101_000);
    assert_eq!(round.phase(), Phase::Betting);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &[
            "10-H", // player
            "A-S",  // dealer up
            "9-C",  // player
            "6-D",  // dealer hole: soft 17
        ],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    round.stand(&mut session, None).unwrap();

    let result = round.last_result().unwrap();
    assert_eq!(result.dealer_hand.len(), 2);
    assert_eq!(result.hands[0].message, "You Win! (19 vs 17)");
    assert_eq!(session.chips(), 101_000);
}

#[test]
fn dealer_draws_below_seventeen_until_bust() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &[
            "10-H", // player
            "2-C",  // dealer up
            "9-C",  // player
            "3-D",  // dealer hole: 5
            "4-H",  // 9
            "5-S",  // 14
            "K-D",  // 24
        ],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    round.stand(&mut session, None).unwrap();

    let result = round.last_result().unwrap();
    assert_eq!(result.dealer_hand.len(), 5);
    assert!(result.dealer_bust);
    assert_eq!(result.hands[0].message, "You Win! Dealer Busts! (24)");
    assert_eq!(session.chips(), 101_000);
}

#[test]
fn dealer_draw_can_beat_the_player() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &["10-H", "10-C", "9-C", "6-D", "5-H"],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    round.stand(&mut session, None).unwrap();

    let result = round.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(
        result.message,
        "Dealer Wins (21 vs 19)\nLost 1,000 chips"
    );
    assert_eq!(session.chips(), 99_000);
}

#[test]
fn bust_loses_without_dealer_draw() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &["10-H", "6-C", "6-S", "10-D", "K-S"],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    let card = round.hit(&mut session, None).unwrap();
    assert_eq!(card.to_string(), "K-S");

    assert_eq!(round.phase(), Phase::Betting);
    let result = round.last_result().unwrap();
    assert_eq!(result.dealer_hand.len(), 2);
    assert_eq!(result.hands[0].outcome, HandOutcome::Lose);
    assert_eq!(
        round.result_message(),
        "Dealer Wins - Player Bust!\nLost 1,000 chips"
    );
    assert_eq!(session.chips(), 99_000);
}

#[test]
fn hitting_to_21_ends_the_turn() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &["5-H", "10-C", "6-S", "7-D", "K-H"],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    round.hit(&mut session, None).unwrap();

    let result = round.last_result().unwrap();
    assert_eq!(result.hands[0].message, "You Win! (21 vs 17)");
    assert_eq!(result.player_hands[0].len(), 3);
    assert_eq!(session.chips(), 101_000);
}

#[test]
fn double_charges_wager_and_draws_one_card() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &["5-H", "10-C", "6-S", "7-D", "9-D"],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    assert!(round.can_double(&session));

    let card = round.double(&mut session, None).unwrap();
    assert_eq!(card.to_string(), "9-D");

    let result = round.last_result().unwrap();
    assert_eq!(result.committed, 2_000);
    assert_eq!(result.hands[0].wager, 2_000);
    assert_eq!(result.hands[0].payout, 4_000);
    assert!(result.player_hands[0].is_doubled());
    assert_eq!(result.player_hands[0].len(), 3);
    assert_eq!(session.chips(), 102_000);
}

#[test]
fn double_rejected_after_hit() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &["2-H", "10-C", "3-S", "7-D", "4-D"],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    round.hit(&mut session, None).unwrap();

    assert!(!round.can_double(&session));
    assert_eq!(
        round.double(&mut session, None).unwrap_err(),
        ActionError::CannotDouble
    );
    assert_eq!(session.chips(), 99_000);
    assert_eq!(round.player_hands()[0].wager(), 1_000);
    assert_eq!(round.player_hands()[0].len(), 3);
}

#[test]
fn double_rejected_without_chips() {
    let options = GameOptions::default().with_starting_chips(1_500);
    let mut session = session_with_draws(options, &["5-H", "10-C", "6-S", "7-D"]);
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();

    assert!(!round.can_double(&session));
    assert_eq!(
        round.double(&mut session, None).unwrap_err(),
        ActionError::InsufficientChips
    );
    assert_eq!(session.chips(), 500);
    assert_eq!(session.shoe_count().cards_dealt, 4);
}

#[test]
fn actions_rejected_outside_player_turn() {
    let mut session = Session::new(GameOptions::default(), 9);
    let mut round = Round::new();

    assert_eq!(
        round.hit(&mut session, None).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(
        round.stand(&mut session, None).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(
        round.double(&mut session, None).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(
        round.split(&mut session).unwrap_err(),
        ActionError::InvalidState
    );
    assert!(!round.can_double(&session));
    assert!(!round.can_split(&session));
    assert_eq!(session.shoe_count().cards_dealt, 0);
}

#[test]
fn split_plays_two_hands_in_order() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &[
            "8-H",  // player
            "10-C", // dealer up
            "8-S",  // player
            "7-D",  // dealer hole
            "10-H", // first split hand: 18
            "2-C",  // second split hand: 10
            "9-C",  // second split hand hit: 19
        ],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    assert!(round.can_split(&session));
    round.split(&mut session).unwrap();

    assert_eq!(session.chips(), 98_000);
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player_hands().len(), 2);
    assert_eq!(round.player_hands()[0].cards(), cards(&["8-H", "10-H"]));
    assert_eq!(round.player_hands()[1].cards(), cards(&["8-S", "2-C"]));
    assert!(round.player_hands().iter().all(|hand| hand.wager() == 1_000));
    assert_eq!(round.active_hand_index(), 0);

    assert_eq!(
        round.split(&mut session).unwrap_err(),
        ActionError::CannotSplit
    );
    assert_eq!(
        round.hit(&mut session, Some(1)).unwrap_err(),
        ActionError::NotActiveHand
    );

    round.stand(&mut session, None).unwrap();
    assert_eq!(round.active_hand_index(), 1);
    assert_eq!(
        round.stand(&mut session, Some(0)).unwrap_err(),
        ActionError::HandResolved
    );

    round.hit(&mut session, Some(1)).unwrap();
    round.stand(&mut session, Some(1)).unwrap();

    let result = round.last_result().unwrap();
    assert_eq!(result.hands.len(), 2);
    assert_eq!(result.total_payout, 4_000);
    assert_eq!(
        result.message,
        "Hand 1: You Win! (18 vs 17)\nHand 2: You Win! (19 vs 17)\nWon 2,000 chips"
    );
    assert_eq!(session.chips(), 102_000);
}

#[test]
fn split_rejected_without_pair() {
    let mut session = session_with_draws(GameOptions::default(), &["10-H", "6-C", "K-S", "7-D"]);
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();

    assert!(!round.can_split(&session));
    assert_eq!(
        round.split(&mut session).unwrap_err(),
        ActionError::CannotSplit
    );
    assert_eq!(round.player_hands().len(), 1);
    assert_eq!(round.player_hands()[0].cards(), cards(&["10-H", "K-S"]));
    assert_eq!(session.chips(), 99_000);
}

#[test]
fn split_natural_earns_bonus() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &[
            "A-H", // player
            "9-C", // dealer up
            "A-S", // player
            "8-D", // dealer hole
            "K-H", // first split hand: natural
            "5-C", // second split hand: soft 16
        ],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    round.split(&mut session).unwrap();

    assert!(round.player_hands()[0].is_natural());
    assert_eq!(round.active_hand_index(), 1);

    round.stand(&mut session, None).unwrap();

    let result = round.last_result().unwrap();
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[0].payout, 2_500);
    assert_eq!(result.hands[1].outcome, HandOutcome::Lose);
    assert_eq!(session.chips(), 100_500);
}

#[test]
fn dealer_draws_when_a_split_hand_is_natural_and_the_other_busts() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &[
            "A-H",  // player
            "10-C", // dealer up
            "A-S",  // player
            "5-D",  // dealer hole: 15
            "K-H",  // first split hand: natural
            "5-C",  // second split hand: soft 16
            "10-H", // hard 16
            "K-D",  // 26
            "3-H",  // dealer: 18
        ],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    round.split(&mut session).unwrap();
    assert!(round.player_hands()[0].is_natural());

    round.hit(&mut session, None).unwrap();
    round.hit(&mut session, None).unwrap();

    let result = round.last_result().unwrap();
    assert!(result.player_hands[1].is_bust());
    assert_eq!(result.dealer_hand.cards(), cards(&["10-C", "5-D", "3-H"]));
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.hands[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.hands[1].outcome, HandOutcome::Lose);
    assert_eq!(session.chips(), 100_500);
    assert_eq!(session.shoe_count().cards_dealt, 9);
}

#[test]
fn dealer_skips_draw_when_both_split_hands_bust() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &[
            "8-H",  // player
            "10-C", // dealer up
            "8-S",  // player
            "6-D",  // dealer hole: 16
            "K-H",  // first split hand: 18
            "Q-H",  // second split hand: 18
            "5-S",  // first hand busts
            "7-C",  // second hand busts
        ],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    round.split(&mut session).unwrap();
    round.hit(&mut session, None).unwrap();
    assert_eq!(round.active_hand_index(), 1);
    round.hit(&mut session, None).unwrap();

    let result = round.last_result().unwrap();
    assert_eq!(result.dealer_hand.len(), 2);
    assert_eq!(result.dealer_value, 16);
    assert_eq!(
        result.message,
        "Hand 1: Dealer Wins - Player Bust!\nHand 2: Dealer Wins - Player Bust!\nLost 2,000 chips"
    );
    assert_eq!(session.chips(), 98_000);
    assert_eq!(session.shoe_count().cards_dealt, 8);
}

#[test]
fn double_on_a_split_hand_pays_that_hand_double() {
    let mut session = session_with_draws(
        GameOptions::default(),
        &[
            "9-H",  // player
            "10-C", // dealer up
            "9-S",  // player
            "7-D",  // dealer hole: 17
            "2-H",  // first split hand: 11
            "10-H", // second split hand: 19
            "10-S", // double: 21
        ],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    round.split(&mut session).unwrap();
    assert!(round.can_double(&session));

    let card = round.double(&mut session, None).unwrap();
    assert_eq!(card.to_string(), "10-S");
    assert_eq!(session.chips(), 97_000);
    assert_eq!(round.active_hand_index(), 1);
    assert!(round.player_hands()[0].is_doubled());
    assert_eq!(round.player_hands()[0].wager(), 2_000);

    round.stand(&mut session, None).unwrap();

    let result = round.last_result().unwrap();
    assert_eq!(result.committed, 3_000);
    assert_eq!(result.hands[0].wager, 2_000);
    assert_eq!(result.hands[0].payout, 4_000);
    assert_eq!(result.hands[1].payout, 2_000);
    assert_eq!(
        result.message,
        "Hand 1: You Win! (21 vs 17)\nHand 2: You Win! (19 vs 17)\nWon 3,000 chips"
    );
    assert_eq!(session.chips(), 103_000);
}

#[test]
fn split_rejected_without_chips() {
    let options = GameOptions::default().with_starting_chips(1_500);
    let mut session = session_with_draws(options, &["8-H", "10-C", "8-S", "7-D"]);
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    assert_eq!(session.chips(), 500);
    assert!(round.player_hands()[0].is_pair());
    assert!(!round.can_split(&session));

    let hands = round.player_hands().to_vec();
    assert_eq!(
        round.split(&mut session).unwrap_err(),
        ActionError::InsufficientChips
    );
    assert_eq!(round.player_hands(), hands.as_slice());
    assert_eq!(session.chips(), 500);
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(session.shoe_count().cards_dealt, 4);
}

#[test]
fn forced_reshuffle_never_redeals_cards_on_the_table() {
    let round_cards = cards(&[
        "2-H", // player
        "10-C", // dealer up
        "2-C", // player
        "7-D", // dealer hole: 17
        "3-H", // first split hand: 5
        "3-C", // second split hand: 5
        "4-H", "4-C", "4-D", "4-S", // first hand to 21
        "2-D", // second hand: 7, live pile now empty
    ]);
    let mut order: Vec<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| (1..=13).map(move |rank| Card::new(suit, rank)))
        .filter(|card| !round_cards.contains(card))
        .collect();
    let fillers = order.len();
    order.extend(&round_cards);

    let mut session = Session::new(GameOptions::default(), 5);
    session.shoe_mut().arrange_next(&order).unwrap();
    for _ in 0..fillers {
        session.shoe_mut().draw().unwrap();
    }
    session.shoe_mut().discard_in_play();
    assert_eq!(session.shoe().cards_remaining(), round_cards.len());
    assert!(!session.shoe().needs_reshuffle());

    let mut round = Round::new();
    round.start(&mut session, 1_000).unwrap();
    round.split(&mut session).unwrap();
    for _ in 0..4 {
        round.hit(&mut session, None).unwrap();
    }
    assert_eq!(round.active_hand_index(), 1);
    round.hit(&mut session, None).unwrap();
    assert_eq!(session.shoe().cards_remaining(), 0);

    let drawn = round.hit(&mut session, None).unwrap();
    assert!(!round_cards.contains(&drawn));
    assert_eq!(round.phase(), Phase::PlayerTurn);

    let table: Vec<Card> = round
        .player_hands()
        .iter()
        .flat_map(|hand| hand.cards().iter().copied())
        .chain(round.dealer_hand().cards().iter().copied())
        .collect();
    let distinct: std::collections::HashSet<Card> = table.iter().copied().collect();
    assert_eq!(distinct.len(), table.len());
    assert!(table.iter().all(|card| !session.shoe().live().contains(card)));
    assert_eq!(session.shoe().in_play().len(), table.len());

    round.stand(&mut session, None).unwrap();
    let shoe = session.shoe();
    assert!(shoe.in_play().is_empty());
    assert_eq!(shoe.live().len() + shoe.discard().len(), DECK_SIZE);
}

#[test]
fn deferred_split_waits_for_second_wager() {
    let options = GameOptions::default().with_split_wager(SplitWager::Deferred);
    let mut session = session_with_draws(
        options,
        &["8-H", "10-C", "8-S", "7-D", "3-H", "2-C"],
    );
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();
    round.split(&mut session).unwrap();

    assert_eq!(round.phase(), Phase::SplittingWager);
    assert_eq!(session.chips(), 99_000);
    assert_eq!(round.player_hands()[1].wager(), 0);
    assert_eq!(
        round.hit(&mut session, None).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(
        round.commit_split_wager(&mut session, 500).unwrap_err(),
        WagerError::BelowMinimum
    );

    round.commit_split_wager(&mut session, 2_000).unwrap();

    assert_eq!(session.chips(), 97_000);
    assert_eq!(round.committed(), 3_000);
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player_hands()[0].cards(), cards(&["8-H", "3-H"]));
    assert_eq!(round.player_hands()[1].cards(), cards(&["8-S", "2-C"]));
    assert_eq!(round.player_hands()[1].wager(), 2_000);
    assert_eq!(
        round.commit_split_wager(&mut session, 2_000).unwrap_err(),
        WagerError::InvalidState
    );
}

#[test]
fn due_reshuffle_happens_before_the_deal() {
    let mut session = Session::new(GameOptions::default(), 21);
    while !session.shoe().needs_reshuffle() {
        session.shoe_mut().draw().unwrap();
    }
    let mut round = Round::new();

    round.start(&mut session, 1_000).unwrap();

    assert_eq!(round.events().first(), Some(&RoundEvent::Reshuffled));
    let count = session.shoe_count();
    assert_eq!(count.cards_dealt, 4);
    assert_eq!(count.remaining_cards, DECK_SIZE - 4);
}

#[test]
fn chips_and_cards_are_conserved_over_many_rounds() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let mut session = Session::new(GameOptions::default(), 2024);
    let mut round = Round::new();

    for _ in 0..300 {
        let before = session.chips();
        if before < session.options().min_bet {
            break;
        }

        round.start(&mut session, 1_000).unwrap();
        while round.phase() == Phase::PlayerTurn {
            let value = round.active_hand().unwrap().value();
            if round.can_split(&session) {
                round.split(&mut session).unwrap();
            } else if value == 11 && round.can_double(&session) {
                round.double(&mut session, None).unwrap();
            } else if value < 17 {
                round.hit(&mut session, None).unwrap();
            } else {
                round.stand(&mut session, None).unwrap();
            }
        }

        assert_eq!(round.phase(), Phase::Betting);
        let result = round.last_result().unwrap();
        assert_eq!(
            session.chips(),
            before - result.committed + result.total_payout
        );

        let shoe = session.shoe();
        assert!(shoe.in_play().is_empty());
        assert_eq!(shoe.live().len() + shoe.discard().len(), DECK_SIZE);
        round.drain_events();
    }
}
