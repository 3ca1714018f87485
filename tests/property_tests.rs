//! Property tests for the rules core and the controller.
//!
//! Boards are generated by scattering rings sized 1..=n across up to five
//! pins (each stack stays ordered), then driven by random move or event
//! sequences.

use proptest::prelude::*;

use hanoi_rules::controller::{GameController, HostEvent};
use hanoi_rules::core::{PinId, RingId};
use hanoi_rules::pins::Board;
use hanoi_rules::rules::GameState;

/// Random well-formed layout: one inner vec per pin, sizes bottom to top.
fn layout() -> impl Strategy<Value = Vec<Vec<u32>>> {
    (1usize..=5, 1u32..=7).prop_flat_map(|(pins, rings)| {
        prop::collection::vec(0..pins, rings as usize).prop_map(move |assign| {
            let mut stacks = vec![Vec::new(); pins];
            for size in (1..=rings).rev() {
                stacks[assign[(size - 1) as usize]].push(size);
            }
            stacks
        })
    })
}

/// Raw (ring, pin) picks, reduced modulo the board's counts.
fn picks() -> impl Strategy<Value = Vec<(u32, u16)>> {
    prop::collection::vec((any::<u32>(), any::<u16>()), 0..60)
}

fn events() -> impl Strategy<Value = Vec<(u8, u32, u16)>> {
    prop::collection::vec((0u8..4, any::<u32>(), any::<u16>()), 0..120)
}

fn occurrences(board: &Board, ring: RingId) -> usize {
    board
        .pins()
        .iter()
        .map(|p| p.contents().iter().filter(|&&r| r == ring).count())
        .sum()
}

fn stacked_total(board: &Board) -> usize {
    board.pins().iter().map(|p| p.len()).sum()
}

proptest! {
    /// Placement succeeds exactly when the target is empty or its top is
    /// strictly larger; failures change nothing; successes neither
    /// duplicate nor orphan the ring.
    #[test]
    fn placement_follows_size_rule(stacks in layout(), picks in picks()) {
        let mut state = GameState::new(Board::from_stacks(stacks).unwrap());
        let ring_count = state.board().ring_count();
        let pin_count = state.board().pin_count();

        for (r, p) in picks {
            let ring = RingId(r % ring_count as u32);
            let pin = PinId(p % pin_count as u16);

            let size = state.board().ring(ring).unwrap().size();
            let expected = state.board().top_size(pin).map_or(true, |top| size < top);
            let before = state.board().pins().to_vec();

            state.select_ring(ring);
            state.set_target_pin(Some(pin));
            let placed = state.try_place_ring();

            prop_assert_eq!(placed, expected);
            if placed {
                prop_assert_eq!(occurrences(state.board(), ring), 1);
                prop_assert_eq!(state.board().top_ring(pin), Some(ring));
                prop_assert_eq!(state.board().pin_of(ring), Some(pin));
                prop_assert_eq!(state.selected_ring(), None);
            } else {
                prop_assert_eq!(state.board().pins(), &before[..]);
            }
            prop_assert_eq!(stacked_total(state.board()), ring_count);
            prop_assert!(state.board().is_well_ordered());
        }
    }

    /// Without a target, placement is always a no-op.
    #[test]
    fn placement_without_target_is_noop(stacks in layout(), r in any::<u32>()) {
        let mut state = GameState::new(Board::from_stacks(stacks).unwrap());
        let ring = RingId(r % state.board().ring_count() as u32);
        let before = state.board().pins().to_vec();

        state.select_ring(ring);
        state.set_target_pin(None);

        prop_assert!(!state.try_place_ring());
        prop_assert_eq!(state.board().pins(), &before[..]);
    }

    /// Reset flags exactly the occupied pins, for any distribution.
    #[test]
    fn reset_flags_occupied_pins(stacks in layout(), picks in picks()) {
        let mut state = GameState::new(Board::from_stacks(stacks).unwrap());
        let ring_count = state.board().ring_count();
        let pin_count = state.board().pin_count();

        for (r, p) in picks {
            state.select_ring(RingId(r % ring_count as u32));
            state.set_target_pin(Some(PinId(p % pin_count as u16)));
            state.try_place_ring();
        }
        state.reset_session();

        for pin in state.board().pins() {
            prop_assert_eq!(pin.is_start_pin(), !pin.is_empty());
        }
    }

    /// The win check is exactly "not a start pin and holds every ring".
    #[test]
    fn win_predicate(stacks in layout(), picks in picks()) {
        let mut state = GameState::new(Board::from_stacks(stacks).unwrap());
        let ring_count = state.board().ring_count();
        let pin_count = state.board().pin_count();

        for (r, p) in picks {
            state.select_ring(RingId(r % ring_count as u32));
            state.set_target_pin(Some(PinId(p % pin_count as u16)));
            state.try_place_ring();

            for pin in state.board().pins() {
                let expected = !pin.is_start_pin() && pin.len() == ring_count;
                prop_assert_eq!(state.check_for_win(pin.id()), expected);
            }
        }
    }

    /// Arbitrary host event sequences keep every ring in exactly one
    /// stack, keep stacks ordered, and mark at most the selected ring as
    /// dragging.
    #[test]
    fn controller_keeps_board_consistent(stacks in layout(), events in events()) {
        let board = Board::from_stacks(stacks).unwrap();
        let ring_count = board.ring_count();
        let pin_count = board.pin_count();
        let mut controller = GameController::new(GameState::new(board));

        for (kind, r, p) in events {
            let ring = RingId(r % ring_count as u32);
            let pin = PinId(p % pin_count as u16);
            let event = match kind {
                0 => HostEvent::RingPressed(ring),
                1 => HostEvent::RingReleased(ring),
                2 => HostEvent::PinEntered(pin),
                _ => HostEvent::PinExited(pin),
            };
            controller.handle(event);

            let state = controller.state();
            for ring in state.board().rings() {
                prop_assert_eq!(occurrences(state.board(), ring.id()), 1);
                prop_assert_eq!(ring.is_dragging(), state.selected_ring() == Some(ring.id()));
                if !ring.is_dragging() {
                    prop_assert!(ring.on_pin());
                }
            }
            prop_assert!(state.board().is_well_ordered());
        }
    }
}
