//! Rings: sized pieces that move between pins.

use serde::{Deserialize, Serialize};

use super::entity::RingId;

/// A ring on the board.
///
/// The rules only read `size`. The two flags are positional state that the
/// host layer owns conceptually:
/// - `on_pin`: the ring is inside some pin's capture zone (set from pin
///   entered/exited events, never computed by the engine).
/// - `dragging`: the ring is the current selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ring {
    id: RingId,
    size: u32,
    on_pin: bool,
    dragging: bool,
}

impl Ring {
    /// Create a ring resting on a pin.
    #[must_use]
    pub fn new(id: RingId, size: u32) -> Self {
        Self {
            id,
            size,
            on_pin: true,
            dragging: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> RingId {
        self.id
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether the ring is currently inside a pin's capture zone.
    #[must_use]
    pub fn on_pin(&self) -> bool {
        self.on_pin
    }

    /// Whether the ring is the one being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub(crate) fn set_on_pin(&mut self, on_pin: bool) {
        self.on_pin = on_pin;
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }
}
