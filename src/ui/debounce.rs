//! Timestamp-based debounce for the polled front-panel buttons.
//!
//! The buttons have no hardware debounce, so the filter accepts a press
//! only if the debounce window has elapsed since the last accepted press.
//! The filter is level-triggered: a held button repeats once per window,
//! which doubles as the menu's scroll repeat rate.

use crate::config::BUTTON_COUNT;
use crate::ui::ButtonEvent;

/// Button scan order; earlier entries win when several are held at once.
pub const SCAN_ORDER: [ButtonEvent; BUTTON_COUNT] = [
    ButtonEvent::Up,
    ButtonEvent::Down,
    ButtonEvent::Select,
    ButtonEvent::Back,
];

/// Debounce filter fed with raw pressed/released samples.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    window_ms: u64,
    last_accepted: Option<u64>,
}

impl Debouncer {
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted: None,
        }
    }

    /// Feed one poll sample (`pressed` in [`SCAN_ORDER`] order).
    ///
    /// Returns the accepted event, or `None` if nothing is pressed or the
    /// press falls inside the debounce window.
    pub fn update(&mut self, now_ms: u64, pressed: [bool; BUTTON_COUNT]) -> Option<ButtonEvent> {
        let event = SCAN_ORDER
            .iter()
            .zip(pressed.iter())
            .find_map(|(event, down)| down.then_some(*event))?;

        if let Some(last) = self.last_accepted {
            if now_ms.saturating_sub(last) < self.window_ms {
                return None;
            }
        }

        self.last_accepted = Some(now_ms);
        Some(event)
    }
}
