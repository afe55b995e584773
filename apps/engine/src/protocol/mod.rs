//! Outward-facing DTOs: outcome events handed to the notifier collaborator.

pub mod events;
