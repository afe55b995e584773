//! Error codes for the drawing-round engine.
//!
//! This module defines all error codes the engine hands to its dispatch
//! layer. Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings the
//! dispatch layer keys its reply templates on.

use core::fmt;

/// Centralized error codes for the drawing-round engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Game-rule rejections
    /// The game has been paused by an administrator
    Disabled,
    /// A draw is pending or unresolved
    RoundBusy,
    /// Number outside the drawable domain
    OutOfDomain,
    /// Number held by another participant
    AlreadyTaken,
    /// Participant pick limit reached
    CapExceeded,
    /// Participant already holds this number
    DuplicatePick,
    /// Fewer participants than the configured minimum
    InsufficientPlayers,
    /// No unresolved draw to reroll
    NoPendingRound,

    // Construction
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Every code, for exhaustive checks.
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::Disabled,
        ErrorCode::RoundBusy,
        ErrorCode::OutOfDomain,
        ErrorCode::AlreadyTaken,
        ErrorCode::CapExceeded,
        ErrorCode::DuplicatePick,
        ErrorCode::InsufficientPlayers,
        ErrorCode::NoPendingRound,
        ErrorCode::ConfigError,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Disabled => "DISABLED",
            ErrorCode::RoundBusy => "ROUND_BUSY",
            ErrorCode::OutOfDomain => "OUT_OF_DOMAIN",
            ErrorCode::AlreadyTaken => "ALREADY_TAKEN",
            ErrorCode::CapExceeded => "CAP_EXCEEDED",
            ErrorCode::DuplicatePick => "DUPLICATE_PICK",
            ErrorCode::InsufficientPlayers => "INSUFFICIENT_PLAYERS",
            ErrorCode::NoPendingRound => "NO_PENDING_ROUND",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
