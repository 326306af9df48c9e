//! LSM6DS3 6-axis motion sensor driver.
//!
//! Register layout (output block, auto-incrementing reads):
//! ```text
//! 0x22..=0x27: gyroscope X/Y/Z, little-endian i16 per axis
//! 0x28..=0x2D: accelerometer X/Y/Z, little-endian i16 per axis
//! ```
//! Both blocks are fetched in one 12-byte burst so the axes of a sample
//! belong to the same measurement instant.

use embedded_hal::i2c::I2c;

use crate::sensors::Axes;

/// Fixed bus address of the breakout (SA0 low).
pub const ADDR: u8 = 0x6A;

const REG_CTRL1_XL: u8 = 0x10;
const REG_CTRL2_G: u8 = 0x11;
const REG_OUTX_L_G: u8 = 0x22;

/// 104 Hz output data rate, narrowest full-scale range.
const ODR_104HZ: u8 = 0x40;

/// Accelerometer sensitivity at ±2 g, in g per LSB.
const ACCEL_SCALE_G: f32 = 0.000_061;

/// Gyroscope sensitivity at ±250 °/s, in °/s per LSB.
const GYRO_SCALE_DPS: f32 = 0.008_75;

/// Accelerometer raw count to g.
pub fn accel_g(raw: i16) -> f32 {
    raw as f32 * ACCEL_SCALE_G
}

/// Gyroscope raw count to °/s.
pub fn gyro_dps(raw: i16) -> f32 {
    raw as f32 * GYRO_SCALE_DPS
}

pub struct Lsm6ds3<I2C> {
    i2c: I2C,
}

impl<I2C, E> Lsm6ds3<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Enable both sense blocks at 104 Hz.
    pub fn init(&mut self) -> Result<(), E> {
        self.i2c.write(ADDR, &[REG_CTRL1_XL, ODR_104HZ])?;
        self.i2c.write(ADDR, &[REG_CTRL2_G, ODR_104HZ])
    }

    /// Read one `(accel, gyro)` sample, scaled to g and °/s.
    pub fn read(&mut self) -> Result<(Axes, Axes), E> {
        let mut raw = [0u8; 12];
        self.i2c.write_read(ADDR, &[REG_OUTX_L_G], &mut raw)?;

        let axis = |i: usize| i16::from_le_bytes([raw[i], raw[i + 1]]);

        let gyro = Axes {
            x: gyro_dps(axis(0)),
            y: gyro_dps(axis(2)),
            z: gyro_dps(axis(4)),
        };
        let accel = Axes {
            x: accel_g(axis(6)),
            y: accel_g(axis(8)),
            z: accel_g(axis(10)),
        };

        Ok((accel, gyro))
    }
}
