//! Board: every pin and ring of a session, plus ring locations.
//!
//! The `Board` owns all rings and pins. Rings are created once and only
//! relocated; a pin's stack holds handles to the rings resting on it. A
//! location index maps each ring to its pin so lookups never scan stacks.
//!
//! ## Usage
//!
//! ```
//! use hanoi_rules::core::PinId;
//! use hanoi_rules::pins::Board;
//!
//! // Three pins, rings sized 3, 2, 1 on the first (bottom to top)
//! let mut board = Board::from_stacks(vec![vec![3, 2, 1], vec![], vec![]]).unwrap();
//!
//! let smallest = board.top_ring(PinId(0)).unwrap();
//! let from = board.transfer(smallest, PinId(2));
//!
//! assert_eq!(from, Some(PinId(0)));
//! assert_eq!(board.sizes(PinId(2)), vec![1]);
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::pin::Pin;
use crate::core::config::HanoiConfig;
use crate::core::entity::{PinId, RingId};
use crate::core::error::{Result, SetupError};
use crate::core::ring::Ring;

/// All pins and rings of a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pins: Vec<Pin>,
    rings: Vec<Ring>,

    /// Ring locations: ring_id -> pin_id
    locations: FxHashMap<RingId, PinId>,
}

impl Board {
    /// Build a board from explicit stacks, one per pin, sizes bottom to top.
    ///
    /// Ring IDs are allocated in order: pin 0 bottom to top, then pin 1, etc.
    pub fn from_stacks(stacks: Vec<Vec<u32>>) -> Result<Self> {
        if stacks.is_empty() {
            return Err(SetupError::NoPins);
        }
        if stacks.len() > usize::from(u16::MAX) {
            return Err(SetupError::TooManyPins(stacks.len()));
        }

        let mut pins = Vec::with_capacity(stacks.len());
        let mut rings = Vec::new();
        let mut locations = FxHashMap::default();
        let mut seen = FxHashSet::default();

        for (pin_id, sizes) in PinId::all(stacks.len()).zip(stacks) {
            let mut pin = Pin::new(pin_id);
            let mut below: Option<u32> = None;

            for size in sizes {
                if size == 0 {
                    return Err(SetupError::ZeroSize);
                }
                if !seen.insert(size) {
                    return Err(SetupError::DuplicateSize(size));
                }
                if let Some(below) = below {
                    if size >= below {
                        return Err(SetupError::OutOfOrder {
                            pin: pin_id,
                            below,
                            above: size,
                        });
                    }
                }
                below = Some(size);

                let ring_id = RingId(rings.len() as u32);
                rings.push(Ring::new(ring_id, size));
                locations.insert(ring_id, pin_id);
                pin.push(ring_id);
            }

            pins.push(pin);
        }

        if rings.is_empty() {
            return Err(SetupError::NoRings);
        }

        Ok(Self {
            pins,
            rings,
            locations,
        })
    }

    /// Build the starting board for a configuration: every ring on the
    /// start pin, largest at the bottom.
    pub fn from_config(config: &HanoiConfig) -> Result<Self> {
        config.validate()?;

        let stacks = (0..config.pin_count)
            .map(|idx| {
                if idx == config.start_pin {
                    config.stacked_sizes()
                } else {
                    Vec::new()
                }
            })
            .collect();

        Self::from_stacks(stacks)
    }

    // === Lookup ===

    #[must_use]
    pub fn pin(&self, pin: PinId) -> Option<&Pin> {
        self.pins.get(pin.index())
    }

    #[must_use]
    pub fn ring(&self, ring: RingId) -> Option<&Ring> {
        self.rings.get(ring.index())
    }

    pub(crate) fn ring_mut(&mut self, ring: RingId) -> Option<&mut Ring> {
        self.rings.get_mut(ring.index())
    }

    pub(crate) fn pins_mut(&mut self) -> impl Iterator<Item = &mut Pin> {
        self.pins.iter_mut()
    }

    /// All pins, left to right.
    #[must_use]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// All rings, in ID order.
    #[must_use]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn pin_ids(&self) -> impl Iterator<Item = PinId> {
        PinId::all(self.pins.len())
    }

    #[must_use]
    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    #[must_use]
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Get the pin a ring rests on.
    #[must_use]
    pub fn pin_of(&self, ring: RingId) -> Option<PinId> {
        self.locations.get(&ring).copied()
    }

    /// Get the top ring of a pin.
    #[must_use]
    pub fn top_ring(&self, pin: PinId) -> Option<RingId> {
        self.pin(pin)?.top()
    }

    /// Size of a pin's top ring, or `None` for an empty (or unknown) pin.
    #[must_use]
    pub fn top_size(&self, pin: PinId) -> Option<u32> {
        let ring = self.top_ring(pin)?;
        self.ring(ring).map(Ring::size)
    }

    /// Check if a ring is the top ring of the pin it rests on.
    #[must_use]
    pub fn is_top(&self, ring: RingId) -> bool {
        self.pin_of(ring)
            .and_then(|pin| self.top_ring(pin))
            .is_some_and(|top| top == ring)
    }

    /// Find a ring by size.
    #[must_use]
    pub fn ring_with_size(&self, size: u32) -> Option<RingId> {
        self.rings.iter().find(|r| r.size() == size).map(Ring::id)
    }

    /// Ring sizes on a pin, bottom to top.
    #[must_use]
    pub fn sizes(&self, pin: PinId) -> Vec<u32> {
        self.pin(pin).map_or_else(Vec::new, |p| {
            p.contents()
                .iter()
                .filter_map(|&r| self.ring(r).map(Ring::size))
                .collect()
        })
    }

    /// Check that every stack strictly decreases from bottom to top.
    #[must_use]
    pub fn is_well_ordered(&self) -> bool {
        self.pin_ids().all(|pin| {
            self.sizes(pin).windows(2).all(|pair| pair[0] > pair[1])
        })
    }

    // === Movement ===

    /// Move a ring from its current pin to the top of `to`.
    ///
    /// Returns the pin the ring came from, or `None` if the ring, its
    /// recorded pin or the destination is unknown. Moving a ring onto the
    /// pin it already rests on changes nothing. No legality check happens
    /// here; that is the rules' job.
    pub fn transfer(&mut self, ring: RingId, to: PinId) -> Option<PinId> {
        let from = self.pin_of(ring)?;
        if self.pin(from).is_none() || self.pin(to).is_none() {
            return None;
        }

        if from == to {
            return Some(from);
        }

        self.pins.get_mut(from.index())?.remove(ring);
        self.pins.get_mut(to.index())?.push(ring);
        self.locations.insert(ring, to);

        Some(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Board {
        Board::from_stacks(vec![vec![4, 3, 2, 1], vec![], vec![]]).unwrap()
    }

    #[test]
    fn test_from_stacks_allocates_ids_in_order() {
        let board = Board::from_stacks(vec![vec![5, 2], vec![3], vec![]]).unwrap();

        assert_eq!(board.pin_count(), 3);
        assert_eq!(board.ring_count(), 3);
        assert_eq!(board.ring(RingId(0)).unwrap().size(), 5);
        assert_eq!(board.ring(RingId(1)).unwrap().size(), 2);
        assert_eq!(board.ring(RingId(2)).unwrap().size(), 3);
        assert_eq!(board.pin_of(RingId(2)), Some(PinId(1)));
        assert_eq!(board.pin(PinId(0)).unwrap().contents(), &[RingId(0), RingId(1)]);
    }

    #[test]
    fn test_from_stacks_rejects_bad_layouts() {
        assert_eq!(Board::from_stacks(vec![]), Err(SetupError::NoPins));
        assert_eq!(Board::from_stacks(vec![vec![], vec![]]), Err(SetupError::NoRings));
        assert_eq!(Board::from_stacks(vec![vec![2, 0]]), Err(SetupError::ZeroSize));
        assert_eq!(
            Board::from_stacks(vec![vec![3], vec![3]]),
            Err(SetupError::DuplicateSize(3))
        );
        assert_eq!(
            Board::from_stacks(vec![vec![], vec![2, 5]]),
            Err(SetupError::OutOfOrder { pin: PinId(1), below: 2, above: 5 })
        );
    }

    #[test]
    fn test_from_config() {
        let config = HanoiConfig::new(4, 3).with_start_pin(2);
        let board = Board::from_config(&config).unwrap();

        assert_eq!(board.pin_count(), 4);
        assert_eq!(board.sizes(PinId(2)), vec![3, 2, 1]);
        assert!(board.pin(PinId(0)).unwrap().is_empty());
        assert!(board.is_well_ordered());
    }

    #[test]
    fn test_from_config_validates() {
        let config = HanoiConfig::new(3, 2).with_start_pin(7);
        assert!(matches!(
            Board::from_config(&config),
            Err(SetupError::StartPinOutOfRange { .. })
        ));
    }

    #[test]
    fn test_top_ring_and_size() {
        let board = classic();
        let top = board.top_ring(PinId(0)).unwrap();

        assert_eq!(board.ring(top).unwrap().size(), 1);
        assert_eq!(board.top_size(PinId(0)), Some(1));
        assert_eq!(board.top_size(PinId(1)), None);
        assert_eq!(board.top_size(PinId(9)), None);
        assert!(board.is_top(top));
        assert!(!board.is_top(board.ring_with_size(4).unwrap()));
    }

    #[test]
    fn test_transfer() {
        let mut board = classic();
        let ring = board.ring_with_size(1).unwrap();

        let from = board.transfer(ring, PinId(1));

        assert_eq!(from, Some(PinId(0)));
        assert_eq!(board.pin_of(ring), Some(PinId(1)));
        assert_eq!(board.sizes(PinId(0)), vec![4, 3, 2]);
        assert_eq!(board.sizes(PinId(1)), vec![1]);
    }

    #[test]
    fn test_transfer_same_pin_is_noop() {
        let mut board = classic();
        let ring = board.ring_with_size(1).unwrap();

        assert_eq!(board.transfer(ring, PinId(0)), Some(PinId(0)));
        assert_eq!(board.sizes(PinId(0)), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_transfer_unknown_targets() {
        let mut board = classic();
        let before = board.clone();

        assert_eq!(board.transfer(RingId(99), PinId(1)), None);
        assert_eq!(board.transfer(RingId(0), PinId(9)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_transfer_from_corrupt_location() {
        let mut value = serde_json::to_value(classic()).unwrap();
        value["locations"]["0"] = serde_json::json!(7);
        let mut board: Board = serde_json::from_value(value).unwrap();
        let before = board.clone();

        assert_eq!(board.transfer(RingId(0), PinId(1)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_board_serialization() {
        let board = classic();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
