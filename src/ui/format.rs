//! Readout formatting - turns a [`SensorReading`] into the label and
//! value strings drawn in the sensor view.
//!
//! All values are printed with two decimal places via an integer
//! whole/fraction split, so no float `Display` machinery is linked in.

use core::fmt::Write;

use heapless::String;

use crate::sensors::{Axes, SensorReading};

/// Capacity of the label line.
pub const LABEL_MAX: usize = 24;

/// Capacity of the value block (up to three `X:`/`Y:`/`Z:` lines).
pub const VALUE_MAX: usize = 48;

/// Shown in place of a value when the LTR-559 has no fresh sample.
pub const NO_DATA: &str = "No data";

/// A formatted readout: one label line and a value block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readout {
    pub label: String<LABEL_MAX>,
    pub value: String<VALUE_MAX>,
}

impl Readout {
    /// Derive label and value for `name` from a fresh reading.
    ///
    /// Unknown names produce a "Sensor not available" label with an empty
    /// value, so a stale capture can never panic the render path.
    pub fn for_sensor(name: &str, reading: &SensorReading) -> Self {
        let mut label: String<LABEL_MAX> = String::new();
        let mut value: String<VALUE_MAX> = String::new();

        match name {
            "Temperature" => {
                let _ = label.push_str("Temperature:");
                push_fixed2(&mut value, reading.temperature_c);
                let _ = value.push_str(" C");
            }
            "Pressure" => {
                let _ = label.push_str("Pressure:");
                push_fixed2(&mut value, reading.pressure_pa / 100.0);
                let _ = value.push_str(" hPa");
            }
            "Humidity" => {
                let _ = label.push_str("Humidity:");
                push_fixed2(&mut value, reading.humidity_pct);
                let _ = value.push_str(" %");
            }
            "Light" => {
                let _ = label.push_str("Ambient Light:");
                match reading.light {
                    Some(sample) => {
                        push_fixed2(&mut value, sample.lux);
                        let _ = value.push_str(" lux");
                    }
                    None => {
                        let _ = value.push_str(NO_DATA);
                    }
                }
            }
            "Proximity" => {
                let _ = label.push_str("Proximity:");
                match reading.light {
                    Some(sample) => {
                        let _ = write!(value, "{}", sample.proximity);
                    }
                    None => {
                        let _ = value.push_str(NO_DATA);
                    }
                }
            }
            "Orientation" => {
                let _ = label.push_str("Orientation (Accel):");
                push_axes(&mut value, &reading.accel);
            }
            "Motion" => {
                let _ = label.push_str("Motion (Gyro):");
                push_axes(&mut value, &reading.gyro);
            }
            _ => {
                let _ = label.push_str("Sensor not available");
            }
        }

        Self { label, value }
    }
}

/// Append `value` with exactly two decimal places, e.g. `-3.50`.
pub fn push_fixed2<const N: usize>(out: &mut String<N>, value: f32) {
    let magnitude = if value < 0.0 { -value } else { value };
    let scaled = (magnitude * 100.0 + 0.5) as u32;
    if value < 0.0 && scaled > 0 {
        let _ = out.push('-');
    }
    let _ = write!(out, "{}.{:02}", scaled / 100, scaled % 100);
}

fn push_axes<const N: usize>(out: &mut String<N>, axes: &Axes) {
    let _ = out.push_str("X:");
    push_fixed2(out, axes.x);
    let _ = out.push_str("\nY:");
    push_fixed2(out, axes.y);
    let _ = out.push_str("\nZ:");
    push_fixed2(out, axes.z);
}
