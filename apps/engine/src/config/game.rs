//! Engine configuration: drawable domain, reservation cap, draw gating.

use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::state::Pick;
use crate::error::AppError;

/// Tunable rules for one engine instance. Fixed at construction; one
/// semantic per deployment, not runtime-switchable.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Closed range numbers are reserved from and drawn within.
    pub domain: RangeInclusive<Pick>,
    /// Maximum picks a single participant may hold.
    pub reservation_cap: usize,
    /// Minimum distinct participants before a draw may be requested.
    pub min_participants: usize,
    /// Wait window between a draw request and automatic resolution.
    /// May be zero.
    pub cooldown: Duration,
}

impl GameConfig {
    pub fn new(
        domain: RangeInclusive<Pick>,
        reservation_cap: usize,
        min_participants: usize,
        cooldown: Duration,
    ) -> Result<Self, AppError> {
        let config = Self {
            domain,
            reservation_cap,
            min_participants,
            cooldown,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the configuration from environment variables.
    ///
    /// Defaults: domain 1..=6, cap 1, minimum 2 participants, 30s cooldown.
    pub fn from_env() -> Result<Self, AppError> {
        let start: Pick = var_or("GAME_DOMAIN_START", 1)?;
        let end: Pick = var_or("GAME_DOMAIN_END", 6)?;
        let reservation_cap: usize = var_or("GAME_RESERVATION_CAP", 1)?;
        let min_participants: usize = var_or("GAME_MIN_PARTICIPANTS", 2)?;
        let cooldown_secs: u64 = var_or("GAME_COOLDOWN_SECS", 30)?;

        Self::new(
            start..=end,
            reservation_cap,
            min_participants,
            Duration::from_secs(cooldown_secs),
        )
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.domain.is_empty() {
            return Err(AppError::config(format!(
                "Domain must be a non-empty range, got {}..={}",
                self.domain.start(),
                self.domain.end()
            )));
        }
        if self.reservation_cap == 0 {
            return Err(AppError::config("Reservation cap must be at least 1"));
        }
        if self.min_participants < 2 {
            return Err(AppError::config("Minimum participants must be at least 2"));
        }
        Ok(())
    }

    /// Number of drawable values. Also the distinct-participant count that
    /// triggers an immediate draw, since each number can be held once.
    pub fn domain_size(&self) -> usize {
        usize::from(*self.domain.end()) - usize::from(*self.domain.start()) + 1
    }
}

/// Parse an optional environment variable, falling back to `default`.
fn var_or<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::config(format!("Invalid value for '{name}': '{raw}'"))),
        Err(_) => Ok(default),
    }
}
