//! Game state: selection, placement, win detection, session reset.
//!
//! `GameState` is the rules core. The host reports which ring is picked up
//! and which pin it hovers over; the core validates and performs the move.
//!
//! ## Selection Model
//!
//! The selected ring and target pin are handles, not owners. A selected ring
//! stays in its source pin's stack while it is dragged; it leaves that stack
//! only when a legal placement transfers it. An aborted or illegal drop
//! therefore needs no undo: the stacks were never touched.
//!
//! ## Failure Model
//!
//! Every operation is total. Missing selections, unknown handles and
//! illegal drops are routine player behavior and degrade to `false` or a
//! no-op rather than an error.
//!
//! ```
//! use hanoi_rules::core::{HanoiConfig, PinId};
//! use hanoi_rules::rules::GameState;
//!
//! let mut state = GameState::from_config(&HanoiConfig::default()).unwrap();
//! let smallest = state.board().top_ring(PinId(0)).unwrap();
//!
//! state.select_ring(smallest);
//! state.set_target_pin(Some(PinId(1)));
//! assert!(state.try_place_ring());
//!
//! assert_eq!(state.board().pin_of(smallest), Some(PinId(1)));
//! assert_eq!(state.selected_ring(), None);
//! assert_eq!(state.move_count(), 1);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::placement::placement_allowed;
use super::win::is_winning_pin;
use crate::core::action::MoveRecord;
use crate::core::config::HanoiConfig;
use crate::core::entity::{PinId, RingId};
use crate::core::error::{Result, SetupError};
use crate::pins::Board;

/// Rules core for one game session.
///
/// Uses an `im` vector for move history so snapshots (`clone`) stay cheap
/// regardless of how long a round runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    /// Rings a non-start pin must hold to win.
    total_ring_count: usize,

    /// Ring currently picked up.
    selected_ring: Option<RingId>,

    /// Pin currently under the dragged ring.
    target_pin: Option<PinId>,

    /// Round number (starts at 1, advanced by each session reset).
    round: u32,

    /// Successful moves this round.
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Start a session on `board`.
    ///
    /// Start-pin flags are computed from the initial layout, and the win
    /// threshold defaults to every ring on the board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let total_ring_count = board.ring_count();
        let mut state = Self {
            board,
            total_ring_count,
            selected_ring: None,
            target_pin: None,
            round: 1,
            history: Vector::new(),
        };
        state.recompute_start_pins();
        state
    }

    /// Start a session from a configuration.
    pub fn from_config(config: &HanoiConfig) -> Result<Self> {
        let board = Board::from_config(config)?;
        Self::new(board).with_total_ring_count(config.total_ring_count())
    }

    /// Override how many rings a non-start pin must hold to win.
    ///
    /// Rejects zero and counts larger than the board's ring count; neither
    /// could ever describe a completed round.
    pub fn with_total_ring_count(mut self, count: usize) -> Result<Self> {
        if count == 0 || count > self.board.ring_count() {
            return Err(SetupError::TotalRingCount {
                configured: count,
                actual: self.board.ring_count(),
            });
        }
        self.total_ring_count = count;
        Ok(self)
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn selected_ring(&self) -> Option<RingId> {
        self.selected_ring
    }

    #[must_use]
    pub fn target_pin(&self) -> Option<PinId> {
        self.target_pin
    }

    #[must_use]
    pub fn total_ring_count(&self) -> usize {
        self.total_ring_count
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Successful moves this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    // === Selection ===

    /// Pick up a ring, replacing any previous selection.
    ///
    /// The ring is marked as dragging; the previous selection, if any, loses
    /// the mark. Unknown rings are ignored.
    #[instrument(skip(self))]
    pub fn select_ring(&mut self, ring: RingId) {
        if self.board.ring(ring).is_none() {
            debug!("ignoring selection of unknown ring");
            return;
        }

        if let Some(previous) = self.selected_ring.take() {
            if let Some(r) = self.board.ring_mut(previous) {
                r.set_dragging(false);
            }
        }

        if let Some(r) = self.board.ring_mut(ring) {
            r.set_dragging(true);
        }
        self.selected_ring = Some(ring);
    }

    /// Drop the selection without moving anything.
    pub fn clear_selection(&mut self) {
        if let Some(previous) = self.selected_ring.take() {
            if let Some(r) = self.board.ring_mut(previous) {
                r.set_dragging(false);
            }
        }
    }

    /// Record the pin under the dragged ring, or clear it with `None`.
    ///
    /// Unknown pins clear the target.
    pub fn set_target_pin(&mut self, pin: Option<PinId>) {
        self.target_pin = pin.filter(|&p| self.board.pin(p).is_some());
    }

    pub(crate) fn set_ring_on_pin(&mut self, ring: RingId, on_pin: bool) {
        if let Some(r) = self.board.ring_mut(ring) {
            r.set_on_pin(on_pin);
        }
    }

    // === Rules ===

    /// Check if a ring could be placed on a pin right now.
    #[must_use]
    pub fn can_place(&self, ring: RingId, pin: PinId) -> bool {
        let Some(ring) = self.board.ring(ring) else {
            return false;
        };
        if self.board.pin(pin).is_none() {
            return false;
        }
        placement_allowed(ring.size(), self.board.top_size(pin))
    }

    /// Every pin the ring could legally be placed on right now.
    #[must_use]
    pub fn legal_targets(&self, ring: RingId) -> Vec<PinId> {
        self.board
            .pin_ids()
            .filter(|&pin| self.can_place(ring, pin))
            .collect()
    }

    /// Check if a ring may be picked up: only the top ring of a pin can.
    #[must_use]
    pub fn is_pickable(&self, ring: RingId) -> bool {
        self.board.is_top(ring)
    }

    /// Place the selected ring on the target pin.
    ///
    /// Returns `false` without touching any stack if either the selection or
    /// the target is missing, or if the ring is not smaller than the
    /// target's top ring. On success the ring moves to the top of the target,
    /// the selection clears, and the move is recorded.
    #[instrument(skip(self), fields(ring = ?self.selected_ring, pin = ?self.target_pin))]
    pub fn try_place_ring(&mut self) -> bool {
        let (Some(ring), Some(pin)) = (self.selected_ring, self.target_pin) else {
            debug!("placement needs both a selected ring and a target pin");
            return false;
        };

        if !self.can_place(ring, pin) {
            debug!(top = ?self.board.top_size(pin), "illegal placement");
            return false;
        }

        let Some(from) = self.board.transfer(ring, pin) else {
            return false;
        };

        self.clear_selection();
        let record = MoveRecord::new(
            ring,
            from,
            pin,
            self.round,
            self.history.len() as u32 + 1,
        );
        debug!(%record, "ring placed");
        self.history.push_back(record);

        true
    }

    /// Check if `pin` completes the round. Unknown pins never win.
    #[must_use]
    pub fn check_for_win(&self, pin: PinId) -> bool {
        self.board
            .pin(pin)
            .is_some_and(|p| is_winning_pin(p, self.total_ring_count))
    }

    /// First pin that currently completes the round, if any.
    #[must_use]
    pub fn winning_pin(&self) -> Option<PinId> {
        self.board.pin_ids().find(|&pin| self.check_for_win(pin))
    }

    /// Prepare for the next round.
    ///
    /// Every pin holding at least one ring becomes a start pin; empty pins
    /// stop being one. Rings stay where they are, so the next round is
    /// played from the winning pin outward. The round counter advances and
    /// the move history starts over.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn reset_session(&mut self) {
        self.recompute_start_pins();
        self.round += 1;
        self.history.clear();
        info!(next_round = self.round, "session reset");
    }

    fn recompute_start_pins(&mut self) {
        for pin in self.board.pins_mut() {
            let occupied = !pin.is_empty();
            pin.set_start_pin(occupied);
        }
    }
}
