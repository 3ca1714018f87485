//! Setup errors.
//!
//! Moves never fail with an error: an illegal drop is an ordinary `false`.
//! Only building a board or loading a configuration can fail.

use thiserror::Error;

use super::entity::PinId;

/// Errors raised while building a board or loading a configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("a board needs at least one pin")]
    NoPins,

    #[error("{0} pins exceeds the supported maximum")]
    TooManyPins(usize),

    #[error("a board needs at least one ring")]
    NoRings,

    #[error("ring sizes must be greater than zero")]
    ZeroSize,

    #[error("ring size {0} appears more than once")]
    DuplicateSize(u32),

    #[error("{pin}: ring of size {above} rests on smaller ring of size {below}")]
    OutOfOrder { pin: PinId, below: u32, above: u32 },

    #[error("start pin {start_pin} is out of range for {pin_count} pins")]
    StartPinOutOfRange { start_pin: usize, pin_count: usize },

    #[error("total ring count {configured} does not fit a board of {actual} rings")]
    TotalRingCount { configured: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SetupError>;

impl From<toml::de::Error> for SetupError {
    fn from(err: toml::de::Error) -> Self {
        SetupError::Parse(err.to_string())
    }
}
