//! Unified error type for sensordeck.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An I²C transaction to one of the breakout sensors failed.
    Bus,

    /// The BME280 failed to initialise or deliver a measurement.
    Environment,

    /// The LTR-559 identification register returned an unexpected value.
    UnknownPartId(u8),
}
