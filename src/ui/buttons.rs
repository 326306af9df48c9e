//! GPIO button input with polled, timestamp-based debouncing.
//!
//! Four physical buttons (active-low with pull-ups) on the Display Pack:
//!   - X (UP)     - move the menu selection up
//!   - Y (DOWN)   - move the menu selection down
//!   - B (SELECT) - open the highlighted sensor readout
//!   - A (BACK)   - leave the readout; reserved while in the menu
//!
//! One task scans all four pins on a fixed tick, runs the samples through
//! the [`Debouncer`], and sends accepted events to the UI channel. The
//! render loop is never blocked by debouncing.

use crate::config::{BUTTON_COUNT, BUTTON_DEBOUNCE_MS, BUTTON_POLL_INTERVAL_MS};
use crate::ui::debounce::Debouncer;
use crate::ui::ButtonEvent;
use defmt::info;
use embassy_rp::gpio::Input;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Ticker};

/// The four front-panel buttons.
pub struct Buttons<'d> {
    up: Input<'d>,
    down: Input<'d>,
    select: Input<'d>,
    back: Input<'d>,
}

impl<'d> Buttons<'d> {
    pub fn new(up: Input<'d>, down: Input<'d>, select: Input<'d>, back: Input<'d>) -> Self {
        Self {
            up,
            down,
            select,
            back,
        }
    }

    /// Instantaneous pressed state, in [`SCAN_ORDER`] order.
    ///
    /// [`SCAN_ORDER`]: crate::ui::debounce::SCAN_ORDER
    fn sample(&self) -> [bool; BUTTON_COUNT] {
        [
            self.up.is_low(),
            self.down.is_low(),
            self.select.is_low(),
            self.back.is_low(),
        ]
    }
}

/// Run the button scan loop.
///
/// Polls every [`BUTTON_POLL_INTERVAL_MS`], debounces, and forwards
/// accepted events.
#[embassy_executor::task]
pub async fn button_task(
    buttons: Buttons<'static>,
    tx: Sender<'static, CriticalSectionRawMutex, ButtonEvent, 4>,
) -> ! {
    let mut filter = Debouncer::new(BUTTON_DEBOUNCE_MS);
    let mut ticker = Ticker::every(Duration::from_millis(BUTTON_POLL_INTERVAL_MS));

    loop {
        if let Some(event) = filter.update(Instant::now().as_millis(), buttons.sample()) {
            info!("Button: {}", event);
            tx.send(event).await;
        }

        ticker.next().await;
    }
}
