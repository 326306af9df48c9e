//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and display
//! constants live here so they can be tuned in one place.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

// Display

/// LCD resolution of the Display Pack 2.0 (landscape).
pub const DISPLAY_WIDTH: u32 = 320;
pub const DISPLAY_HEIGHT: u32 = 240;

/// SPI clock for the ST7789 (62.5 MHz is the fastest the RP2040 divides
/// cleanly from the 125 MHz system clock).
pub const DISPLAY_SPI_HZ: u32 = 62_500_000;

/// Scratch buffer for the mipidsi SPI interface.
pub const DISPLAY_SPI_BUF_LEN: usize = 512;

/// Fill for unselected menu bands (bright blue).
pub const BASE_PEN: Rgb565 = Rgb565::new(0, 0, 31);

/// Fill for the band at the current selection (dark blue).
pub const HIGHLIGHT_PEN: Rgb565 = Rgb565::new(0, 0, 12);

/// Label and readout text.
pub const TEXT_PEN: Rgb565 = Rgb565::WHITE;

/// Screen clear color.
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

// I2C bus

/// Shared Breakout Garden bus clock.
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

// Input

/// Number of front-panel buttons (A, B, X, Y).
pub const BUTTON_COUNT: usize = 4;

/// Presses within this window of the last accepted press are rejected.
pub const BUTTON_DEBOUNCE_MS: u64 = 300;

/// Button scan interval (ms).
pub const BUTTON_POLL_INTERVAL_MS: u64 = 10;

// Render loop

/// Frame pacing for the menu / readout redraw (ms).
pub const FRAME_INTERVAL_MS: u64 = 50;

// GPIO pin assignments (Pico Display Pack 2.0 + Breakout Garden)
//
// These are logical names; actual `embassy_rp::peripherals::*` types are
// selected in `main.rs`.
//
//   Button A (back)    → GP12
//   Button B (select)  → GP13
//   Button X (up)      → GP14
//   Button Y (down)    → GP15
//   RGB LED R/G/B      → GP6 / GP7 / GP8   (active-low, reserved)
//   I²C SDA / SCL      → GP4 / GP5
//   SPI SCK / MOSI     → GP18 / GP19
//   LCD CS / DC / BL   → GP17 / GP16 / GP20
