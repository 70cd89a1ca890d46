//! A single-player blackjack engine with a card-counting shoe and optional
//! `no_std` support.
//!
//! A [`Session`] owns the shoe and the chip balance for a whole game; a
//! [`Round`] drives one deal through betting, player actions, the dealer's
//! turn and settlement, borrowing the session for every command.
//!
//! # Example
//!
//! ```
//! use bjcount::{GameOptions, Phase, Round, Session};
//!
//! let mut session = Session::new(GameOptions::default(), 42);
//! let mut round = Round::new();
//!
//! round.start(&mut session, 1_000).unwrap();
//! while round.phase() == Phase::PlayerTurn {
//!     round.stand(&mut session, None).unwrap();
//! }
//! assert_eq!(round.phase(), Phase::Betting);
//! println!("{}", round.result_message());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod score;
pub mod session;
pub mod shoe;

// Re-export main types
pub use card::{CARD_BACK, Card, DECK_SIZE, Suit};
pub use error::{ActionError, ParseCardError, ShoeError, WagerError};
pub use hand::{DealerHand, Hand, HandStatus};
pub use options::{
    DECK_SHUFFLE_THRESHOLD, DEFAULT_BET, GameOptions, MIN_BET, STARTING_CHIPS, SplitWager,
};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use round::{Phase, Round, RoundEvent, Seat};
pub use score::score;
pub use session::Session;
pub use shoe::{Shoe, ShoeCount};
