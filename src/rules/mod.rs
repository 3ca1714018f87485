//! Towers of Hanoi rules.
//!
//! - `placement`: the stacking rule (smaller on larger, anything on empty)
//! - `win`: the round-completion predicate
//! - `engine`: `GameState`, which applies both to the live board

pub mod placement;
pub mod win;
pub mod engine;

pub use placement::placement_allowed;
pub use win::is_winning_pin;
pub use engine::GameState;
