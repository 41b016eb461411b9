use ar_core::{GestureSample, TouchInput, TouchPhase};
use web_sys as web;

#[inline]
pub fn touch_phase_for(event_type: &str) -> Option<TouchPhase> {
    match event_type {
        "touchstart" => Some(TouchPhase::Start),
        "touchmove" => Some(TouchPhase::Move),
        "touchend" | "touchcancel" => Some(TouchPhase::End),
        _ => None,
    }
}

// ---------------- Touch helpers ----------------
pub fn touch_samples(list: &web::TouchList) -> Vec<GestureSample> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| GestureSample::new(t.identifier(), t.client_x() as f32, t.client_y() as f32))
        .collect()
}

/// Active pointers after the event, tagged with the phase of the event.
pub fn touch_input(ev: &web::TouchEvent) -> Option<TouchInput> {
    let phase = touch_phase_for(&ev.type_())?;
    Some(TouchInput::new(phase, touch_samples(&ev.touches())))
}

/// Two-finger moves are ours; keep the browser from pinch-zooming the page.
#[inline]
pub fn should_block_browser_gesture(input: &TouchInput) -> bool {
    input.phase == TouchPhase::Move && input.pointers.len() == 2
}
