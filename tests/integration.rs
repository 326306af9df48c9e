//! Integration tests for sensordeck host-testable logic.
//!
//! Each test runs a whole button session through the debounce filter and
//! the menu state machine, then formats a readout the way the render loop
//! would.

use sensordeck::config::BUTTON_DEBOUNCE_MS;
use sensordeck::ui::debounce::Debouncer;
use sensordeck::ui::format::Readout;
use sensordeck::ui::menu::MenuState;
use sensordeck::ui::View;

use sensordeck::sensors::{Axes, LightSample, SensorReading};

const UP: [bool; 4] = [true, false, false, false];
const DOWN: [bool; 4] = [false, true, false, false];
const SELECT: [bool; 4] = [false, false, true, false];
const BACK: [bool; 4] = [false, false, false, true];

fn reading() -> SensorReading {
    SensorReading {
        temperature_c: 21.5,
        pressure_pa: 101325.0,
        humidity_pct: 40.0,
        light: None,
        accel: Axes {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        },
        gyro: Axes {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
    }
}

#[test]
fn browse_to_pressure_and_back() {
    let mut filter = Debouncer::new(BUTTON_DEBOUNCE_MS);
    let mut state = MenuState::new();

    // Press DOWN; the mechanical bounce 50 ms later is swallowed.
    for (now, sample) in [(0, DOWN), (50, DOWN), (400, SELECT)] {
        if let Some(event) = filter.update(now, sample) {
            state.handle(event);
        }
    }
    assert_eq!(state.view(), View::Sensor("Pressure"));

    // The render loop formats a fresh reading for the captured name.
    let readout = Readout::for_sensor("Pressure", &reading());
    assert_eq!(readout.value.as_str(), "1013.25 hPa");

    // BACK lands after the debounce window and reopens the menu with the
    // cursor where it was left.
    let event = filter.update(800, BACK).expect("expected back press");
    state.handle(event);
    assert_eq!(state.view(), View::Menu);
    assert_eq!(state.selected(), 1);
}

#[test]
fn wrap_upwards_to_the_last_item() {
    let mut filter = Debouncer::new(BUTTON_DEBOUNCE_MS);
    let mut state = MenuState::new();

    let event = filter.update(0, UP).expect("expected up press");
    state.handle(event);
    let event = filter.update(500, SELECT).expect("expected select press");
    state.handle(event);

    assert_eq!(state.view(), View::Sensor("Motion"));
}

#[test]
fn light_readout_without_a_sample() {
    let mut state = MenuState::new();
    let mut filter = Debouncer::new(BUTTON_DEBOUNCE_MS);

    // Three DOWN presses spaced past the window land on "Light".
    let mut now = 0;
    for _ in 0..3 {
        let event = filter.update(now, DOWN).expect("expected down press");
        state.handle(event);
        now += BUTTON_DEBOUNCE_MS;
    }
    let event = filter.update(now, SELECT).expect("expected select press");
    state.handle(event);

    let View::Sensor(name) = state.view() else {
        panic!("expected sensor view");
    };
    let readout = Readout::for_sensor(name, &reading());
    assert_eq!(readout.label.as_str(), "Ambient Light:");
    assert_eq!(readout.value.as_str(), "No data");
}
