//! Host event interface.
//!
//! The host (renderer, input and collision layers) computes positional facts
//! itself and pushes them in as `HostEvent`s. The controller turns them into
//! calls on `GameState` and answers with what the host should show: where a
//! released ring goes, and which notice to display.
//!
//! There is no global instance. Create one controller per session and hand
//! it by reference to whichever layer needs it.
//!
//! ## Drag Flow
//!
//! ```
//! use hanoi_rules::controller::{GameController, HostEvent, ReleaseOutcome};
//! use hanoi_rules::core::{HanoiConfig, PinId};
//!
//! let mut controller = GameController::from_config(&HanoiConfig::default()).unwrap();
//! let ring = controller.state().board().top_ring(PinId(0)).unwrap();
//!
//! controller.handle(HostEvent::RingPressed(ring));
//! controller.handle(HostEvent::PinExited(PinId(0)));
//! controller.handle(HostEvent::PinEntered(PinId(2)));
//! let outcome = controller.handle(HostEvent::RingReleased(ring));
//!
//! assert_eq!(outcome, Some(ReleaseOutcome::Placed));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::config::HanoiConfig;
use crate::core::entity::{PinId, RingId};
use crate::core::error::Result;
use crate::rules::GameState;

/// Positional and pointer facts reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// Pointer went down on a ring.
    RingPressed(RingId),
    /// Pointer was released over a ring.
    RingReleased(RingId),
    /// The dragged ring entered a pin's capture zone.
    PinEntered(PinId),
    /// The dragged ring left a pin's capture zone.
    PinExited(PinId),
}

/// What happened to a released ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseOutcome {
    /// The released ring was not the one being dragged.
    Ignored,
    /// The ring now rests on the target pin.
    Placed,
    /// The ring was placed and completed the round. A new round has begun.
    Won,
    /// Dropped on a pin that does not accept it; the ring goes back.
    Rejected,
    /// Dropped off any pin; the ring goes back.
    Returned,
}

impl ReleaseOutcome {
    /// Whether the ring changed pins.
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(self, ReleaseOutcome::Placed | ReleaseOutcome::Won)
    }
}

/// Message for the host to display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    InvalidMove,
    GameWon,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::InvalidMove => write!(f, "Invalid move"),
            Notice::GameWon => write!(f, "Game won!"),
        }
    }
}

/// Session controller driven by host events.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameController {
    state: GameState,
    notice: Option<Notice>,
}

impl GameController {
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            notice: None,
        }
    }

    pub fn from_config(config: &HanoiConfig) -> Result<Self> {
        GameState::from_config(config).map(Self::new)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Notice currently on display, if any.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Dispatch a host event. Only releases produce an outcome.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: HostEvent) -> Option<ReleaseOutcome> {
        match event {
            HostEvent::RingPressed(ring) => {
                self.ring_pressed(ring);
                None
            }
            HostEvent::RingReleased(ring) => Some(self.ring_released(ring)),
            HostEvent::PinEntered(pin) => {
                self.pin_entered(pin);
                None
            }
            HostEvent::PinExited(pin) => {
                self.pin_exited(pin);
                None
            }
        }
    }

    /// Pick up a ring. Any notice is dismissed.
    ///
    /// Only the top ring of a pin can be picked up; returns whether the ring
    /// is now selected. The ring starts out inside its own pin's zone, so
    /// that pin becomes the target.
    pub fn ring_pressed(&mut self, ring: RingId) -> bool {
        self.notice = None;

        if !self.state.is_pickable(ring) {
            debug!(%ring, "ring is not on top of its pin");
            return false;
        }

        // A ring abandoned mid-drag falls back onto its pin.
        if let Some(previous) = self.state.selected_ring() {
            self.state.set_ring_on_pin(previous, true);
        }

        self.state.select_ring(ring);
        self.state.set_target_pin(self.state.board().pin_of(ring));
        self.state.set_ring_on_pin(ring, true);
        true
    }

    /// The dragged ring entered a pin's zone. Unknown pins are ignored.
    pub fn pin_entered(&mut self, pin: PinId) {
        let Some(ring) = self.state.selected_ring() else {
            debug!(%pin, "pin entered with nothing dragged");
            return;
        };
        if self.state.board().pin(pin).is_none() {
            debug!(%pin, "ignoring unknown pin");
            return;
        }

        self.state.set_target_pin(Some(pin));
        self.state.set_ring_on_pin(ring, true);
    }

    /// The dragged ring left a pin's zone.
    ///
    /// Leaving a pin other than the current target changes nothing, so
    /// overlapping zones reported out of order keep the newer target.
    pub fn pin_exited(&mut self, pin: PinId) {
        let Some(ring) = self.state.selected_ring() else {
            return;
        };
        if self.state.target_pin() != Some(pin) {
            return;
        }

        self.state.set_target_pin(None);
        self.state.set_ring_on_pin(ring, false);
    }

    /// Drop the dragged ring.
    ///
    /// Over a pin, the ring is placed if the move is legal; otherwise an
    /// "invalid move" notice is raised and the ring goes back. Its own pin
    /// counts: the ring is not smaller than itself. Off any pin it simply
    /// goes back. The selection always ends here. If the drop completes the
    /// round, the session resets for the next one and a "game won" notice is
    /// raised.
    pub fn ring_released(&mut self, ring: RingId) -> ReleaseOutcome {
        if self.state.selected_ring() != Some(ring) {
            debug!(%ring, "released ring is not the dragged ring");
            return ReleaseOutcome::Ignored;
        }

        let target = self.state.target_pin();

        let mut outcome = match target {
            Some(_) if self.state.try_place_ring() => ReleaseOutcome::Placed,
            Some(_) => {
                self.notice = Some(Notice::InvalidMove);
                ReleaseOutcome::Rejected
            }
            None => ReleaseOutcome::Returned,
        };

        self.state.clear_selection();
        // Placed or sent back, the ring rests on a pin again.
        self.state.set_ring_on_pin(ring, true);

        if let Some(pin) = target {
            if self.state.check_for_win(pin) {
                info!(%pin, round = self.state.round(), "round won");
                self.state.reset_session();
                self.notice = Some(Notice::GameWon);
                outcome = ReleaseOutcome::Won;
            }
        }

        self.state.set_target_pin(None);
        outcome
    }
}
