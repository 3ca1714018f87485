//! Pin system: ring stacks and the board that owns them.
//!
//! ## Key Types
//!
//! - `Pin`: ordered ring stack with the start-pin flag
//! - `Board`: all pins and rings, ring locations, stack transfer

pub mod pin;
pub mod board;

pub use pin::Pin;
pub use board::Board;
