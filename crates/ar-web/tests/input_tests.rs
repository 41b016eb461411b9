// Host-side tests for pure touch helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use ar_core::{GestureSample, TouchInput, TouchPhase};
use input::*;

fn samples(n: usize) -> Vec<GestureSample> {
    (0..n)
        .map(|i| GestureSample::new(i as i32, 10.0 * i as f32, 5.0))
        .collect()
}

#[test]
fn touch_event_types_map_to_phases() {
    assert_eq!(touch_phase_for("touchstart"), Some(TouchPhase::Start));
    assert_eq!(touch_phase_for("touchmove"), Some(TouchPhase::Move));
    assert_eq!(touch_phase_for("touchend"), Some(TouchPhase::End));
    // cancellation ends the gesture like a lift
    assert_eq!(touch_phase_for("touchcancel"), Some(TouchPhase::End));
}

#[test]
fn non_touch_event_types_are_ignored() {
    assert_eq!(touch_phase_for("pointermove"), None);
    assert_eq!(touch_phase_for("click"), None);
    assert_eq!(touch_phase_for(""), None);
}

#[test]
fn only_two_finger_moves_block_browser_zoom() {
    assert!(should_block_browser_gesture(&TouchInput::new(
        TouchPhase::Move,
        samples(2)
    )));
    assert!(!should_block_browser_gesture(&TouchInput::new(
        TouchPhase::Move,
        samples(1)
    )));
    assert!(!should_block_browser_gesture(&TouchInput::new(
        TouchPhase::Start,
        samples(2)
    )));
    assert!(!should_block_browser_gesture(&TouchInput::new(
        TouchPhase::Move,
        samples(3)
    )));
}
