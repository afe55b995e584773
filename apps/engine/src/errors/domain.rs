//! Game-rule rejection types returned to the command-dispatch layer.
//!
//! Every variant is a local, expected, non-fatal outcome meant for display
//! to the caller. Invariant violations inside the engine (e.g. one number
//! held by two participants) are programming errors and are asserted, never
//! returned.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::error_code::ErrorCode;

/// Rejections for a reservation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickError {
    /// An administrator has paused the game.
    Disabled,
    /// A draw is pending or unresolved; the table is frozen.
    RoundBusy,
    /// The number lies outside the drawable domain.
    OutOfDomain,
    /// Another participant already holds the number.
    AlreadyTaken,
    /// The participant already holds the maximum number of picks.
    CapExceeded,
    /// The participant already holds this exact number.
    DuplicatePick,
}

impl Display for PickError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PickError::Disabled => write!(f, "the game is currently disabled"),
            PickError::RoundBusy => write!(f, "a draw is pending, no new picks"),
            PickError::OutOfDomain => write!(f, "number is outside the drawable range"),
            PickError::AlreadyTaken => write!(f, "number is already taken"),
            PickError::CapExceeded => write!(f, "pick limit reached"),
            PickError::DuplicatePick => write!(f, "number already picked"),
        }
    }
}

impl Error for PickError {}

impl PickError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PickError::Disabled => ErrorCode::Disabled,
            PickError::RoundBusy => ErrorCode::RoundBusy,
            PickError::OutOfDomain => ErrorCode::OutOfDomain,
            PickError::AlreadyTaken => ErrorCode::AlreadyTaken,
            PickError::CapExceeded => ErrorCode::CapExceeded,
            PickError::DuplicatePick => ErrorCode::DuplicatePick,
        }
    }
}

/// Rejections for the draw entry points (`request_draw`, `reroll`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// An administrator has paused the game.
    Disabled,
    /// A draw is already pending or unresolved.
    RoundBusy,
    /// Fewer distinct participants than the configured minimum.
    InsufficientPlayers,
    /// No unresolved draw to reroll.
    NoPendingRound,
}

impl Display for DrawError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DrawError::Disabled => write!(f, "the game is currently disabled"),
            DrawError::RoundBusy => write!(f, "a draw is already pending"),
            DrawError::InsufficientPlayers => write!(f, "not enough participants"),
            DrawError::NoPendingRound => write!(f, "no unresolved draw to reroll"),
        }
    }
}

impl Error for DrawError {}

impl DrawError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DrawError::Disabled => ErrorCode::Disabled,
            DrawError::RoundBusy => ErrorCode::RoundBusy,
            DrawError::InsufficientPlayers => ErrorCode::InsufficientPlayers,
            DrawError::NoPendingRound => ErrorCode::NoPendingRound,
        }
    }
}
