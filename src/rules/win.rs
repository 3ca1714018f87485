//! Win detection.

use crate::pins::Pin;

/// Check if a pin completes the round.
///
/// A pin wins when it was not a start pin for this round and holds exactly
/// `total_ring_count` rings. The start pin never wins, even when it holds
/// every ring.
#[must_use]
pub fn is_winning_pin(pin: &Pin, total_ring_count: usize) -> bool {
    !pin.is_start_pin() && pin.len() == total_ring_count
}
