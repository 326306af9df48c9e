//! User interface subsystem - ST7789 LCD + physical buttons.
//!
//! The render loop maintains a small state machine that reacts to button
//! presses, painting either the sensor menu or the selected sensor's live
//! readout on the LCD.
//!
//! ## Components
//!
//! - **Display**: ST7789 320×240 LCD via SPI (Display Pack 2.0)
//! - **Buttons**: 4 tactile switches, polled with timestamp debouncing
//!   (UP, DOWN, SELECT, BACK)

pub mod debounce;
pub mod display;
pub mod format;
pub mod menu;

#[cfg(feature = "embedded")]
pub mod buttons;

/// Views the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Scrollable list of sensor categories.
    Menu,
    /// Live readout of the sensor whose name was captured at selection.
    Sensor(&'static str),
}

/// Physical button events (after debouncing).
///
/// Mapped onto the Display Pack buttons as:
///   - UP/DOWN: X/Y - move the menu selection
///   - SELECT:  B   - open the highlighted sensor
///   - BACK:    A   - leave the readout (reserved while in the menu)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Up,
    Down,
    Select,
    Back,
}
