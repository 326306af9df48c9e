//! Sensor subsystem - the three Breakout Garden devices on the shared
//! I²C bus.
//!
//! ## Components
//!
//! - **BME280**: temperature / pressure / humidity (via the `bme280` crate)
//! - **LTR-559**: ambient light + proximity ([`ltr559`], in-crate driver)
//! - **LSM6DS3**: 6-axis accelerometer + gyroscope ([`lsm6ds3`], in-crate
//!   driver)
//!
//! [`SensorBank`](bank::SensorBank) aggregates all three; a readout render
//! always fetches one full [`SensorReading`], never a partial one.

pub mod lsm6ds3;
pub mod ltr559;

#[cfg(feature = "embedded")]
pub mod bank;

/// One axis triple from the motion sensor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Axes {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A valid light/proximity sample from the LTR-559.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightSample {
    /// Ambient light in lux.
    pub lux: f32,
    /// Raw 11-bit proximity count (larger = closer).
    pub proximity: u16,
}

/// A full set of readings, fetched fresh for every readout render.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    /// Temperature in °C.
    pub temperature_c: f32,
    /// Pressure in Pa.
    pub pressure_pa: f32,
    /// Relative humidity in %.
    pub humidity_pct: f32,
    /// Light/proximity sample, absent while the LTR-559 has no fresh data.
    pub light: Option<LightSample>,
    /// Accelerometer axes in g.
    pub accel: Axes,
    /// Gyroscope axes in °/s.
    pub gyro: Axes,
}
