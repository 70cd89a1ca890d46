//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when committing a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Invalid round phase for this wager.
    #[error("invalid round phase for this wager")]
    InvalidState,
    /// Wager is below the table minimum.
    #[error("wager is below the table minimum")]
    BelowMinimum,
    /// Wager exceeds the available chips.
    #[error("wager exceeds the available chips")]
    InsufficientChips,
    /// The shoe could not supply a card.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid round phase for this action")]
    InvalidState,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// The addressed hand is not the one currently acting.
    #[error("hand is not the active hand")]
    NotActiveHand,
    /// Hand has already finished acting.
    #[error("hand is already resolved")]
    HandResolved,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Insufficient chips for this action.
    #[error("insufficient chips for this action")]
    InsufficientChips,
    /// The shoe could not supply a card.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// Neither the live pile nor the discard pile holds a card.
    ///
    /// Only possible once all 52 cards are on the table.
    #[error("shoe is exhausted")]
    Exhausted,
    /// A card named for arrangement is not in the live pile.
    #[error("card is not in the live pile")]
    CardNotInShoe,
}

/// Errors that can occur while parsing a `"<rank>-<suit>"` identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Identifier is not of the form `<rank>-<suit>`.
    #[error("expected an identifier of the form <rank>-<suit>")]
    Malformed,
    /// Rank is not one of `A`, `2`..`10`, `J`, `Q`, `K`.
    #[error("unknown rank")]
    UnknownRank,
    /// Suit is not one of `C`, `D`, `H`, `S`.
    #[error("unknown suit")]
    UnknownSuit,
    /// The face-down sentinel does not identify a card.
    #[error("face-down card has no identity")]
    FaceDown,
}
