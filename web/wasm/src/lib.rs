use bjcount::{
    CARD_BACK, Card, DECK_SIZE, DealerHand, GameOptions, Hand, HandOutcome, HandResult,
    HandStatus, Phase, Round, RoundEvent, RoundResult, Seat, Session, ShoeCount,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    session: Session,
    round: Round,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            session: Session::new(GameOptions::default(), seed as u64),
            round: Round::new(),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.session = Session::new(GameOptions::default(), seed as u64);
        self.round = Round::new();
    }

    pub fn start_round(&mut self, wager: u32) -> Result<(), JsValue> {
        self.round
            .start(&mut self.session, wager as usize)
            .map_err(js_err)
    }

    pub fn hit(&mut self, hand_index: Option<u32>) -> Result<String, JsValue> {
        self.round
            .hit(&mut self.session, hand_index.map(|index| index as usize))
            .map(|card| card.to_string())
            .map_err(js_err)
    }

    pub fn stand(&mut self, hand_index: Option<u32>) -> Result<(), JsValue> {
        self.round
            .stand(&mut self.session, hand_index.map(|index| index as usize))
            .map_err(js_err)
    }

    pub fn double(&mut self, hand_index: Option<u32>) -> Result<String, JsValue> {
        self.round
            .double(&mut self.session, hand_index.map(|index| index as usize))
            .map(|card| card.to_string())
            .map_err(js_err)
    }

    pub fn split(&mut self) -> Result<(), JsValue> {
        self.round.split(&mut self.session).map_err(js_err)
    }

    pub fn commit_split_wager(&mut self, wager: u32) -> Result<(), JsValue> {
        self.round
            .commit_split_wager(&mut self.session, wager as usize)
            .map_err(js_err)
    }

    pub fn can_double(&self) -> bool {
        self.round.can_double(&self.session)
    }

    pub fn can_split(&self) -> bool {
        self.round.can_split(&self.session)
    }

    /// Pending reveal events, oldest first, for staged animation.
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self
            .round
            .drain_events()
            .into_iter()
            .map(JsEvent::from)
            .collect();
        to_js_value(&events)
    }

    pub fn constants(&self) -> Result<JsValue, JsValue> {
        let options = self.session.options();
        to_js_value(&Constants {
            min_bet: options.min_bet as u32,
            starting_chips: options.starting_chips as u32,
            default_bet: options.default_bet as u32,
            deck_size: DECK_SIZE as u32,
            threshold: options.reshuffle_threshold,
        })
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let phase = self.round.phase();
        let hole_hidden = matches!(phase, Phase::PlayerTurn | Phase::SplittingWager);

        let snapshot = Snapshot {
            phase: phase_to_str(phase),
            chips: self.session.chips() as u32,
            wager: self.round.wager() as u32,
            player_hands: self
                .round
                .player_hands()
                .iter()
                .enumerate()
                .map(|(index, hand)| JsHand::from_hand(index as u32, hand))
                .collect(),
            dealer: JsDealer::from_hand(self.round.dealer_hand(), hole_hidden),
            active_hand_index: self.round.active_hand_index() as u32,
            result_message: self.round.result_message().to_string(),
            last_result: self.round.last_result().map(JsRoundResult::from),
            shoe_count: JsShoeCount::from(self.session.shoe_count()),
            can_double: self.round.can_double(&self.session),
            can_split: self.round.can_split(&self.session),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Constants {
    min_bet: u32,
    starting_chips: u32,
    default_bet: u32,
    deck_size: u32,
    threshold: f64,
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    chips: u32,
    wager: u32,
    player_hands: Vec<JsHand>,
    dealer: JsDealer,
    active_hand_index: u32,
    result_message: String,
    last_result: Option<JsRoundResult>,
    shoe_count: JsShoeCount,
    can_double: bool,
    can_split: bool,
}

#[derive(Serialize)]
struct JsShoeCount {
    running: i32,
    #[serde(rename = "true")]
    true_count: f64,
    cards_dealt: u32,
    remaining_cards: u32,
}

impl From<ShoeCount> for JsShoeCount {
    fn from(count: ShoeCount) -> Self {
        Self {
            running: count.running,
            true_count: count.true_count,
            cards_dealt: count.cards_dealt as u32,
            remaining_cards: count.remaining_cards as u32,
        }
    }
}

#[derive(Serialize)]
struct JsHand {
    index: u32,
    cards: Vec<String>,
    value: u8,
    is_soft: bool,
    status: &'static str,
    wager: u32,
    is_doubled: bool,
    is_resolved: bool,
}

impl JsHand {
    fn from_hand(index: u32, hand: &Hand) -> Self {
        Self {
            index,
            cards: hand.cards().iter().map(Card::to_string).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            status: hand_status_to_str(hand.status()),
            wager: hand.wager() as u32,
            is_doubled: hand.is_doubled(),
            is_resolved: hand.is_resolved(),
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    cards: Vec<String>,
    value: u8,
}

impl JsDealer {
    /// The hole card is shown as the card back while the player is acting.
    fn from_hand(dealer: &DealerHand, hole_hidden: bool) -> Self {
        let cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if hole_hidden && index == 1 {
                    CARD_BACK.to_string()
                } else {
                    card.to_string()
                }
            })
            .collect();

        Self {
            cards,
            value: if hole_hidden {
                dealer.up_card_value()
            } else {
                dealer.value()
            },
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    hands: Vec<JsHandResult>,
    dealer_cards: Vec<String>,
    dealer_value: u8,
    dealer_bust: bool,
    dealer_natural: bool,
    committed: u32,
    total_payout: u32,
    net: i32,
    message: String,
}

impl From<&RoundResult> for JsRoundResult {
    fn from(result: &RoundResult) -> Self {
        Self {
            hands: result.hands.iter().map(JsHandResult::from).collect(),
            dealer_cards: result
                .dealer_hand
                .cards()
                .iter()
                .map(Card::to_string)
                .collect(),
            dealer_value: result.dealer_value,
            dealer_bust: result.dealer_bust,
            dealer_natural: result.dealer_natural,
            committed: result.committed as u32,
            total_payout: result.total_payout as u32,
            net: result.net as i32,
            message: result.message.clone(),
        }
    }
}

#[derive(Serialize)]
struct JsHandResult {
    hand_index: u32,
    outcome: &'static str,
    wager: u32,
    payout: u32,
    player_value: u8,
    dealer_value: u8,
    message: String,
}

impl From<&HandResult> for JsHandResult {
    fn from(result: &HandResult) -> Self {
        Self {
            hand_index: result.hand_index as u32,
            outcome: outcome_to_str(result.outcome),
            wager: result.wager as u32,
            payout: result.payout as u32,
            player_value: result.player_value,
            dealer_value: result.dealer_value,
            message: result.message.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsEvent {
    Reshuffled,
    Dealt { seat: String, card: String },
    HandResolved { hand_index: u32 },
    Split,
    SplitWagerCommitted { wager: u32 },
    DealerTurn,
    Settled { net: i32 },
}

impl From<RoundEvent> for JsEvent {
    fn from(event: RoundEvent) -> Self {
        match event {
            RoundEvent::Reshuffled => Self::Reshuffled,
            RoundEvent::Dealt { seat, card } => Self::Dealt {
                seat: match seat {
                    Seat::Player(index) => format!("player-{index}"),
                    Seat::Dealer => "dealer".to_string(),
                },
                card: card.to_string(),
            },
            RoundEvent::HandResolved { hand_index } => Self::HandResolved {
                hand_index: hand_index as u32,
            },
            RoundEvent::Split => Self::Split,
            RoundEvent::SplitWagerCommitted { wager } => Self::SplitWagerCommitted {
                wager: wager as u32,
            },
            RoundEvent::DealerTurn => Self::DealerTurn,
            RoundEvent::Settled { net } => Self::Settled { net: net as i32 },
        }
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Betting => "betting",
        Phase::Dealing => "dealing",
        Phase::PlayerTurn => "player_turn",
        Phase::SplittingWager => "splitting_wager",
        Phase::DealerTurn => "dealer_turn",
        Phase::Settlement => "settlement",
    }
}

fn hand_status_to_str(status: HandStatus) -> &'static str {
    match status {
        HandStatus::Active => "Active",
        HandStatus::Stand => "Stand",
        HandStatus::Bust => "Bust",
        HandStatus::Blackjack => "Blackjack",
    }
}

fn outcome_to_str(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Win => "Win",
        HandOutcome::Lose => "Lose",
        HandOutcome::Push => "Push",
        HandOutcome::Blackjack => "Blackjack",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
