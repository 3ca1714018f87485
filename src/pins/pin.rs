//! Pins: ordered ring stacks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::entity::{PinId, RingId};

/// A pin and the rings stacked on it.
///
/// Index 0 of the stack is the bottom ring, the last index is the top.
/// The pin holds ring handles; ring data lives on the `Board`.
///
/// `is_start_pin` marks the pin that held rings when the current round
/// began. Only a session reset writes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    id: PinId,
    /// SmallVec keeps typical puzzles (up to 8 rings) off the heap.
    stack: SmallVec<[RingId; 8]>,
    is_start_pin: bool,
}

impl Pin {
    /// Create an empty pin.
    #[must_use]
    pub fn new(id: PinId) -> Self {
        Self {
            id,
            stack: SmallVec::new(),
            is_start_pin: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PinId {
        self.id
    }

    /// The top ring, if any.
    #[must_use]
    pub fn top(&self) -> Option<RingId> {
        self.stack.last().copied()
    }

    /// Place a ring on top.
    pub fn push(&mut self, ring: RingId) {
        self.stack.push(ring);
    }

    /// Remove a ring from anywhere in the stack.
    ///
    /// Returns `false` if the ring is not on this pin.
    pub fn remove(&mut self, ring: RingId) -> bool {
        match self.stack.iter().position(|&r| r == ring) {
            Some(idx) => {
                self.stack.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Rings on this pin, bottom to top.
    #[must_use]
    pub fn contents(&self) -> &[RingId] {
        &self.stack
    }

    #[must_use]
    pub fn contains(&self, ring: RingId) -> bool {
        self.stack.contains(&ring)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether this pin held rings when the current round began.
    #[must_use]
    pub fn is_start_pin(&self) -> bool {
        self.is_start_pin
    }

    pub(crate) fn set_start_pin(&mut self, is_start_pin: bool) {
        self.is_start_pin = is_start_pin;
    }
}
