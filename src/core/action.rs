//! Move records.
//!
//! Every successful placement is recorded so the host can show a move
//! counter or replay the round. Failed placements are never recorded.

use serde::{Deserialize, Serialize};

use super::entity::{PinId, RingId};

/// A completed ring move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The ring that moved.
    pub ring: RingId,

    /// Pin the ring was taken from.
    pub from: PinId,

    /// Pin the ring now rests on.
    pub to: PinId,

    /// Round the move was made in (starts at 1).
    pub round: u32,

    /// Sequence number within the round (starts at 1).
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(ring: RingId, from: PinId, to: PinId, round: u32, sequence: u32) -> Self {
        Self {
            ring,
            from,
            to,
            round,
            sequence,
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{}.{}: {} {} -> {}",
            self.round, self.sequence, self.ring, self.from, self.to
        )
    }
}
