//! Core types: ring and pin handles, rings, move records, configuration, errors.
//!
//! Nothing here knows the placement rule. The rules live in `rules`; these
//! are the values the rules operate on.

pub mod entity;
pub mod ring;
pub mod config;
pub mod action;
pub mod error;

pub use entity::{PinId, RingId};
pub use ring::Ring;
pub use config::HanoiConfig;
pub use action::MoveRecord;
pub use error::{Result, SetupError};
