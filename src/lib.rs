//! # hanoi-rules
//!
//! Move validation and win detection for an interactive Towers of Hanoi game.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The engine never reads positions, pointers or physics.
//!    The host computes "ring pressed", "pin entered", "ring released" and
//!    pushes them in; the engine answers with outcomes to render.
//!
//! 2. **Handles, Not Owners**: The board owns every ring and pin. Selection
//!    and targeting are `RingId` / `PinId` handles.
//!
//! 3. **Configuration Over Convention**: Pin count, ring sizes, start pin
//!    and the win threshold come from `HanoiConfig`. Nothing assumes three
//!    pins and four rings.
//!
//! ## Architecture
//!
//! - **Placement on Confirmation**: A dragged ring stays in its source stack
//!   until a legal drop moves it. Illegal or off-pin drops touch nothing.
//!
//! - **Routine Failure**: Illegal moves are `false` / `ReleaseOutcome`
//!   values, never errors. Only setup returns `SetupError`.
//!
//! ## Modules
//!
//! - `core`: Ring and pin handles, rings, move records, configuration, errors
//! - `pins`: Pin stacks and the board
//! - `rules`: Placement rule, win rule, `GameState`
//! - `controller`: Host event interface
//! - `games`: Ready-made setups

pub mod core;
pub mod pins;
pub mod rules;
pub mod controller;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PinId, RingId, Ring,
    HanoiConfig, MoveRecord,
    SetupError,
};

pub use crate::pins::{Board, Pin};

pub use crate::rules::{GameState, placement_allowed, is_winning_pin};

pub use crate::controller::{GameController, HostEvent, Notice, ReleaseOutcome};

pub use crate::games::ClassicGameBuilder;
