//! CLI blackjack example with a live Hi-Lo count.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcount::{
    Card, DealerHand, GameOptions, Hand, Phase, Round, RoundEvent, Seat, Session, SplitWager, Suit,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let split_wager = match std::env::args().nth(1).as_deref() {
        Some("--deferred-split") => SplitWager::Deferred,
        _ => SplitWager::Immediate,
    };
    let options = GameOptions::default().with_split_wager(split_wager);
    let mut session = Session::new(options, seed);
    let mut round = Round::new();

    loop {
        let chips = session.chips();
        let min_bet = session.options().min_bet;
        if chips < min_bet {
            println!("You cannot cover the minimum bet. Game over.");
            break;
        }

        print_count(&session);

        let default_bet = session.options().default_bet.min(chips);
        let Some(wager) = prompt_wager(
            &format!("Chips: {chips}. Bet ({min_bet}-{chips}, enter for {default_bet}): "),
            default_bet,
        ) else {
            println!("Goodbye.");
            break;
        };

        if let Err(err) = round.start(&mut session, wager) {
            println!("Bet error: {err}");
            continue;
        }
        print_events(&mut round);

        while matches!(round.phase(), Phase::PlayerTurn | Phase::SplittingWager) {
            print_table(&round);

            if round.phase() == Phase::SplittingWager {
                let hand_wager = round.player_hands()[0].wager();
                let Some(split_bet) = prompt_wager(
                    &format!("Wager for the second hand (enter for {hand_wager}): "),
                    hand_wager,
                ) else {
                    return;
                };
                if let Err(err) = round.commit_split_wager(&mut session, split_bet) {
                    println!("Split wager error: {err}");
                }
                print_events(&mut round);
                continue;
            }

            println!("{}", format_actions(&round, &session));
            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => round.hit(&mut session, None).map(|_| ()),
                "s" | "stand" => round.stand(&mut session, None),
                "d" | "double" => round.double(&mut session, None).map(|_| ()),
                "p" | "split" => round.split(&mut session),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
            print_events(&mut round);
        }

        if let Some(result) = round.last_result() {
            println!();
            println!(
                "Dealer: {} (value {})",
                format_dealer(&result.dealer_hand, false),
                result.dealer_value
            );
            for (index, hand) in result.player_hands.iter().enumerate() {
                println!("Hand {}: {}", index + 1, format_hand(hand));
            }
        }
        println!("\n{}\n", round.result_message());
    }
}

fn print_count(session: &Session) {
    let count = session.shoe_count();
    println!(
        "Count: running {} | true {:.1} | dealt {} | remaining {}",
        count.running, count.true_count, count.cards_dealt, count.remaining_cards
    );
}

fn print_events(round: &mut Round) {
    for event in round.drain_events() {
        match event {
            RoundEvent::Reshuffled => println!("Shoe reshuffled."),
            RoundEvent::Dealt {
                seat: Seat::Dealer,
                card,
            } => println!("  dealer <- {}", format_card(&card)),
            RoundEvent::Dealt {
                seat: Seat::Player(index),
                card,
            } => println!("  hand {} <- {}", index + 1, format_card(&card)),
            RoundEvent::Split => println!("Hand split."),
            RoundEvent::SplitWagerCommitted { wager } => println!("Second hand wager: {wager}"),
            RoundEvent::DealerTurn => println!("Dealer's turn."),
            RoundEvent::HandResolved { .. } | RoundEvent::Settled { .. } => {}
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_wager(prompt: &str, default: usize) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() {
            return Some(default);
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(round: &Round) {
    let dealer = round.dealer_hand();
    println!(
        "\nDealer: {} (showing {})",
        format_dealer(dealer, true),
        dealer.up_card_value()
    );

    for (index, hand) in round.player_hands().iter().enumerate() {
        let marker = if index == round.active_hand_index() {
            "*"
        } else {
            " "
        };
        println!(
            "{} Hand {}: {} | value {} | bet {} | {:?}",
            marker,
            index + 1,
            format_hand(hand),
            hand.value(),
            hand.wager(),
            hand.status()
        );
    }
    println!();
}

fn format_actions(round: &Round, session: &Session) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", round.can_double(session)),
        format_action("split", "p", round.can_split(session)),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand, hide_hole: bool) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    dealer
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if hide_hole && index == 1 {
                "??".to_string()
            } else {
                format_card(card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
