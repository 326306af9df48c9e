//! Aggregated access to the three breakout sensors.
//!
//! The bank owns one bus handle per device (shared-bus wrappers over the
//! single I²C peripheral) and is the only code that touches them. Every
//! readout render fetches a complete [`SensorReading`]; there is no
//! caching and no partial fetch.

use bme280::i2c::BME280;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::error::Error;
use crate::sensors::lsm6ds3::Lsm6ds3;
use crate::sensors::ltr559::{self, Ltr559};
use crate::sensors::{LightSample, SensorReading};

pub struct SensorBank<I2C> {
    environment: BME280<I2C>,
    light: Ltr559<I2C>,
    motion: Lsm6ds3<I2C>,
}

impl<I2C, E> SensorBank<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(env_bus: I2C, light_bus: I2C, motion_bus: I2C) -> Self {
        Self {
            environment: BME280::new_primary(env_bus),
            light: Ltr559::new(light_bus),
            motion: Lsm6ds3::new(motion_bus),
        }
    }

    /// Bring up all three devices and verify the LTR-559 identification
    /// register. Returns the part ID for the one-shot startup log.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<u8, Error> {
        self.environment
            .init(delay)
            .map_err(|_| Error::Environment)?;
        self.light.init().map_err(|_| Error::Bus)?;
        self.motion.init().map_err(|_| Error::Bus)?;

        let part_id = self.light.part_id().map_err(|_| Error::Bus)?;
        if part_id != ltr559::PART_ID {
            return Err(Error::UnknownPartId(part_id));
        }
        Ok(part_id)
    }

    /// Fetch one full reading from all three devices.
    pub fn read_all(&mut self, delay: &mut impl DelayNs) -> Result<SensorReading, Error> {
        let env = self
            .environment
            .measure(delay)
            .map_err(|_| Error::Environment)?;

        let light = self
            .light
            .read()
            .map_err(|_| Error::Bus)?
            .map(|(lux, proximity)| LightSample { lux, proximity });

        let (accel, gyro) = self.motion.read().map_err(|_| Error::Bus)?;

        Ok(SensorReading {
            temperature_c: env.temperature,
            pressure_pa: env.pressure,
            humidity_pct: env.humidity,
            light,
            accel,
            gyro,
        })
    }
}
