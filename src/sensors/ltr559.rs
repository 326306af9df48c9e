//! LTR-559 ambient light / proximity sensor driver.
//!
//! Minimal register driver for the Breakout Garden LTR-559: activates the
//! ALS and PS blocks at startup, then reads both channels on demand. Lux
//! conversion follows the datasheet's channel-ratio segments with the
//! configured 1x gain and 100 ms integration time, which leave the result
//! unscaled.

use embedded_hal::i2c::I2c;

/// Fixed bus address of the breakout.
pub const ADDR: u8 = 0x23;

/// Expected content of the identification register.
pub const PART_ID: u8 = 0x92;

const REG_ALS_CONTR: u8 = 0x80;
const REG_PS_CONTR: u8 = 0x81;
const REG_PS_MEAS_RATE: u8 = 0x84;
const REG_ALS_MEAS_RATE: u8 = 0x85;
const REG_PART_ID: u8 = 0x86;
const REG_ALS_DATA: u8 = 0x88;
const REG_ALS_PS_STATUS: u8 = 0x8C;
const REG_PS_DATA: u8 = 0x8D;

/// ALS active, 1x gain.
const ALS_ACTIVE_GAIN_1X: u8 = 0x01;
/// PS active.
const PS_ACTIVE: u8 = 0x03;
/// 100 ms integration, 100 ms repeat rate.
const ALS_RATE_100MS: u8 = 0x01;
/// 100 ms repeat rate.
const PS_RATE_100MS: u8 = 0x02;

/// Status bit: a new ALS sample is waiting.
const STATUS_ALS_NEW: u8 = 0x04;
/// Status bit: a new PS sample is waiting.
const STATUS_PS_NEW: u8 = 0x01;

/// PS data is 11 bits wide.
const PS_DATA_MASK: u16 = 0x07FF;

pub struct Ltr559<I2C> {
    i2c: I2C,
}

impl<I2C, E> Ltr559<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Activate both measurement blocks.
    pub fn init(&mut self) -> Result<(), E> {
        self.write_reg(REG_ALS_CONTR, ALS_ACTIVE_GAIN_1X)?;
        self.write_reg(REG_PS_CONTR, PS_ACTIVE)?;
        self.write_reg(REG_ALS_MEAS_RATE, ALS_RATE_100MS)?;
        self.write_reg(REG_PS_MEAS_RATE, PS_RATE_100MS)
    }

    /// Read the identification register.
    pub fn part_id(&mut self) -> Result<u8, E> {
        let mut id = [0u8; 1];
        self.i2c.write_read(ADDR, &[REG_PART_ID], &mut id)?;
        Ok(id[0])
    }

    /// Read one `(lux, proximity)` sample.
    ///
    /// Returns `Ok(None)` while the sensor has no fresh sample on both
    /// channels; the caller shows this as "No data".
    pub fn read(&mut self) -> Result<Option<(f32, u16)>, E> {
        let mut status = [0u8; 1];
        self.i2c.write_read(ADDR, &[REG_ALS_PS_STATUS], &mut status)?;
        if status[0] & (STATUS_ALS_NEW | STATUS_PS_NEW) != STATUS_ALS_NEW | STATUS_PS_NEW {
            return Ok(None);
        }

        // ALS_DATA: CH1 low/high, then CH0 low/high.
        let mut als = [0u8; 4];
        self.i2c.write_read(ADDR, &[REG_ALS_DATA], &mut als)?;
        let ch1 = u16::from_le_bytes([als[0], als[1]]);
        let ch0 = u16::from_le_bytes([als[2], als[3]]);

        let mut ps = [0u8; 2];
        self.i2c.write_read(ADDR, &[REG_PS_DATA], &mut ps)?;
        let proximity = u16::from_le_bytes([ps[0], ps[1]]) & PS_DATA_MASK;

        Ok(Some((lux_from_channels(ch0, ch1), proximity)))
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), E> {
        self.i2c.write(ADDR, &[reg, value])
    }
}

/// Lux from the two ALS channels (datasheet appendix, 1x gain / 100 ms).
///
/// The visible/IR channel ratio selects one of three coefficient pairs;
/// above the last ratio segment the reading is out of range and reports
/// zero.
pub fn lux_from_channels(ch0: u16, ch1: u16) -> f32 {
    let ch0 = ch0 as f32;
    let ch1 = ch1 as f32;
    let sum = ch0 + ch1;
    if sum == 0.0 {
        return 0.0;
    }

    let ratio = ch1 / sum;
    if ratio < 0.45 {
        1.7743 * ch0 + 1.1059 * ch1
    } else if ratio < 0.64 {
        4.2785 * ch0 - 1.9548 * ch1
    } else if ratio < 0.85 {
        0.5926 * ch0 + 0.1185 * ch1
    } else {
        0.0
    }
}
