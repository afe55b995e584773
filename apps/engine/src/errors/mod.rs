//! Error handling for the drawing-round engine.

pub mod domain;
pub mod error_code;

pub use domain::{DrawError, PickError};
pub use error_code::ErrorCode;
