//! Card types and the `"<rank>-<suit>"` identifier format.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in shoe-building order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the single-letter code used in card identifiers.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "C" => Some(Self::Clubs),
            "D" => Some(Self::Diamonds),
            "H" => Some(Self::Hearts),
            "S" => Some(Self::Spades),
            _ => None,
        }
    }
}

/// A playing card.
///
/// Two cards compare equal only when both rank and suit match. Pair detection
/// ignores the suit; use [`Card::same_rank`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero and print as `?`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the rank label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }

    /// Returns whether both cards have the same rank, regardless of suit.
    ///
    /// A ten and a king are not a pair.
    #[must_use]
    pub const fn same_rank(&self, other: &Self) -> bool {
        self.rank == other.rank
    }

    /// Hi-Lo counting value: low cards +1, neutral cards 0, tens and aces -1.
    #[must_use]
    pub const fn count_value(&self) -> i32 {
        match self.rank {
            2..=6 => 1,
            7..=9 => 0,
            1 | 10..=13 => -1,
            _ => 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank_label(), self.suit.code())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == CARD_BACK {
            return Err(ParseCardError::FaceDown);
        }

        let (rank, suit) = s.split_once('-').ok_or(ParseCardError::Malformed)?;

        let rank = match rank {
            "A" => 1,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            digits => match digits.parse::<u8>() {
                Ok(value @ 2..=10) => value,
                _ => return Err(ParseCardError::UnknownRank),
            },
        };
        let suit = Suit::from_code(suit).ok_or(ParseCardError::UnknownSuit)?;

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Identifier the presentation layer uses for a face-down card.
pub const CARD_BACK: &str = "BACK";
