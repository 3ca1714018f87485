//! Ring and pin identification.
//!
//! Rings and pins are created once at session setup and keep their identity
//! for the whole program run. Everything else in the engine refers to them by
//! handle: a selection is a `RingId`, a target is a `PinId`. Handles are plain
//! indices into the board and never own anything.
//!
//! ## Usage
//!
//! ```
//! use hanoi_rules::core::{PinId, RingId};
//!
//! let pin = PinId::new(2);
//! assert_eq!(pin.index(), 2);
//!
//! let ring = RingId(0);
//! assert_eq!(ring.to_string(), "Ring(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a ring.
///
/// Ring IDs are allocated densely from 0 in board construction order
/// (pin by pin, bottom to top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RingId(pub u32);

impl RingId {
    /// Create a ring ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the ID as a board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for RingId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ring({})", self.0)
    }
}

/// Unique identifier for a pin.
///
/// Pins are numbered left to right from 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PinId(pub u16);

impl PinId {
    /// Create a pin ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the ID as a board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all pin IDs for a board with `pin_count` pins.
    ///
    /// Pin IDs are `u16`, so counts above `u16::MAX` yield `u16::MAX` IDs.
    ///
    /// ```
    /// use hanoi_rules::core::PinId;
    ///
    /// let pins: Vec<_> = PinId::all(3).collect();
    /// assert_eq!(pins, vec![PinId::new(0), PinId::new(1), PinId::new(2)]);
    /// ```
    pub fn all(pin_count: usize) -> impl Iterator<Item = PinId> {
        (0..u16::try_from(pin_count).unwrap_or(u16::MAX)).map(PinId)
    }
}

impl std::fmt::Display for PinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pin({})", self.0)
    }
}
