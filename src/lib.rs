//! Host-testable library interface for sensordeck.
//!
//! The menu state machine, button debouncing, readout formatting and raw
//! sample conversion are pure logic and build on the host (no embedded
//! hardware required): `cargo test`.
//!
//! The embedded binary in main.rs pulls in the Embassy runtime, the ST7789
//! driver and the I²C sensor stack via the `embedded` cargo feature.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod sensors;
pub mod ui;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use crate::sensors::{lsm6ds3, ltr559, Axes, LightSample, SensorReading};
    use crate::ui::debounce::Debouncer;
    use crate::ui::display::band_height;
    use crate::ui::format::{push_fixed2, Readout};
    use crate::ui::menu::{select_next, select_prev, MenuState, MENU_ITEMS};
    use crate::ui::{ButtonEvent, View};

    fn reading() -> SensorReading {
        SensorReading {
            temperature_c: 21.5,
            pressure_pa: 101325.0,
            humidity_pct: 40.125,
            light: Some(LightSample {
                lux: 12.34,
                proximity: 42,
            }),
            accel: Axes {
                x: 0.01,
                y: -0.02,
                z: 0.98,
            },
            gyro: Axes {
                x: 1.25,
                y: -3.5,
                z: 0.0,
            },
        }
    }

    fn no_light_reading() -> SensorReading {
        SensorReading {
            light: None,
            ..reading()
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Menu Navigation Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn menu_starts_at_first_item() {
        let state = MenuState::new();
        assert_eq!(state.selected(), 0);
        assert_eq!(state.view(), View::Menu);
    }

    #[test]
    fn next_wraps_back_to_start_after_full_cycle() {
        // From every starting index, itemCount steps return to the start.
        for start in 0..MENU_ITEMS.len() {
            let mut selected = start;
            for _ in 0..MENU_ITEMS.len() {
                selected = select_next(selected, MENU_ITEMS.len());
            }
            assert_eq!(selected, start);
        }
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut state = MenuState::new();
        state.handle(ButtonEvent::Up);
        assert_eq!(state.selected(), MENU_ITEMS.len() - 1);
    }

    #[test]
    fn prev_undoes_next() {
        for start in 0..MENU_ITEMS.len() {
            let count = MENU_ITEMS.len();
            assert_eq!(select_prev(select_next(start, count), count), start);
        }
    }

    #[test]
    fn select_captures_highlighted_name() {
        let mut state = MenuState::new();
        state.handle(ButtonEvent::Down);
        state.handle(ButtonEvent::Down);
        state.handle(ButtonEvent::Select);
        assert_eq!(state.view(), View::Sensor("Humidity"));
    }

    #[test]
    fn captured_name_survives_further_input() {
        let mut state = MenuState::new();
        state.handle(ButtonEvent::Select);
        for event in [ButtonEvent::Up, ButtonEvent::Down, ButtonEvent::Select] {
            state.handle(event);
            assert_eq!(state.view(), View::Sensor("Temperature"));
        }
        // The cursor did not move either.
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn back_is_noop_in_menu() {
        let mut state = MenuState::new();
        state.handle(ButtonEvent::Down);
        state.handle(ButtonEvent::Back);
        assert_eq!(state.selected(), 1);
        assert_eq!(state.view(), View::Menu);
    }

    #[test]
    fn back_returns_to_menu_keeping_selection() {
        let mut state = MenuState::new();
        state.handle(ButtonEvent::Down);
        state.handle(ButtonEvent::Select);
        state.handle(ButtonEvent::Back);
        assert_eq!(state.view(), View::Menu);
        assert_eq!(state.selected(), 1);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Debounce Tests
    // ════════════════════════════════════════════════════════════════════════

    const UP: [bool; 4] = [true, false, false, false];
    const BACK: [bool; 4] = [false, false, false, true];
    const IDLE: [bool; 4] = [false, false, false, false];

    #[test]
    fn first_press_is_accepted() {
        let mut filter = Debouncer::new(300);
        assert_eq!(filter.update(0, UP), Some(ButtonEvent::Up));
    }

    #[test]
    fn press_within_window_is_rejected() {
        let mut filter = Debouncer::new(300);
        assert_eq!(filter.update(0, UP), Some(ButtonEvent::Up));
        assert_eq!(filter.update(50, UP), None);
        assert_eq!(filter.update(299, BACK), None);
    }

    #[test]
    fn press_after_window_is_accepted() {
        let mut filter = Debouncer::new(300);
        assert_eq!(filter.update(0, UP), Some(ButtonEvent::Up));
        assert_eq!(filter.update(300, BACK), Some(ButtonEvent::Back));
    }

    #[test]
    fn held_button_repeats_once_per_window() {
        let mut filter = Debouncer::new(300);
        let mut accepted = 0;
        for now in (0..1200).step_by(10) {
            if filter.update(now, UP).is_some() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 4);
    }

    #[test]
    fn rejected_press_does_not_extend_window() {
        let mut filter = Debouncer::new(300);
        assert_eq!(filter.update(0, UP), Some(ButtonEvent::Up));
        // Bounces land inside the window...
        assert_eq!(filter.update(100, UP), None);
        assert_eq!(filter.update(200, UP), None);
        // ...but the window still closes 300 ms after the accepted press.
        assert_eq!(filter.update(300, UP), Some(ButtonEvent::Up));
    }

    #[test]
    fn idle_samples_produce_nothing() {
        let mut filter = Debouncer::new(300);
        assert_eq!(filter.update(0, IDLE), None);
        assert_eq!(filter.update(1000, IDLE), None);
    }

    #[test]
    fn earlier_scan_position_wins_when_held_together() {
        let mut filter = Debouncer::new(300);
        let up_and_back = [true, false, false, true];
        assert_eq!(filter.update(0, up_and_back), Some(ButtonEvent::Up));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Readout Formatting Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn temperature_readout() {
        let r = Readout::for_sensor("Temperature", &reading());
        assert_eq!(r.label.as_str(), "Temperature:");
        assert_eq!(r.value.as_str(), "21.50 C");
    }

    #[test]
    fn pressure_is_shown_in_hectopascal() {
        let r = Readout::for_sensor("Pressure", &reading());
        assert_eq!(r.label.as_str(), "Pressure:");
        assert_eq!(r.value.as_str(), "1013.25 hPa");
    }

    #[test]
    fn humidity_readout() {
        let r = Readout::for_sensor("Humidity", &reading());
        assert_eq!(r.label.as_str(), "Humidity:");
        assert_eq!(r.value.as_str(), "40.13 %");
    }

    #[test]
    fn light_with_sample() {
        let r = Readout::for_sensor("Light", &reading());
        assert_eq!(r.label.as_str(), "Ambient Light:");
        assert_eq!(r.value.as_str(), "12.34 lux");
    }

    #[test]
    fn light_without_sample_reports_no_data() {
        let r = Readout::for_sensor("Light", &no_light_reading());
        assert_eq!(r.value.as_str(), "No data");
    }

    #[test]
    fn proximity_is_a_bare_integer() {
        let r = Readout::for_sensor("Proximity", &reading());
        assert_eq!(r.label.as_str(), "Proximity:");
        assert_eq!(r.value.as_str(), "42");
    }

    #[test]
    fn proximity_without_sample_reports_no_data() {
        let r = Readout::for_sensor("Proximity", &no_light_reading());
        assert_eq!(r.value.as_str(), "No data");
    }

    #[test]
    fn orientation_lists_accel_axes_on_three_lines() {
        let r = Readout::for_sensor("Orientation", &reading());
        assert_eq!(r.label.as_str(), "Orientation (Accel):");
        assert_eq!(r.value.as_str(), "X:0.01\nY:-0.02\nZ:0.98");
    }

    #[test]
    fn motion_lists_gyro_axes_on_three_lines() {
        let r = Readout::for_sensor("Motion", &reading());
        assert_eq!(r.label.as_str(), "Motion (Gyro):");
        assert_eq!(r.value.as_str(), "X:1.25\nY:-3.50\nZ:0.00");
    }

    #[test]
    fn unknown_sensor_has_empty_value() {
        let r = Readout::for_sensor("Radiation", &reading());
        assert_eq!(r.label.as_str(), "Sensor not available");
        assert_eq!(r.value.as_str(), "");
    }

    #[test]
    fn fixed2_rounds_half_up() {
        let mut s: heapless::String<16> = heapless::String::new();
        push_fixed2(&mut s, 1.006);
        assert_eq!(s.as_str(), "1.01");
    }

    #[test]
    fn fixed2_keeps_sign_on_negatives() {
        let mut s: heapless::String<16> = heapless::String::new();
        push_fixed2(&mut s, -3.5);
        assert_eq!(s.as_str(), "-3.50");
    }

    #[test]
    fn fixed2_drops_sign_on_negative_zero() {
        let mut s: heapless::String<16> = heapless::String::new();
        push_fixed2(&mut s, -0.001);
        assert_eq!(s.as_str(), "0.00");
    }

    // ════════════════════════════════════════════════════════════════════════
    // Sensor Conversion Tests
    // ════════════════════════════════════════════════════════════════════════

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn lux_is_zero_with_dark_channels() {
        assert_eq!(ltr559::lux_from_channels(0, 0), 0.0);
    }

    #[test]
    fn lux_low_ratio_segment() {
        // ch1 = 0 -> ratio 0, first coefficient pair.
        assert_close(ltr559::lux_from_channels(100, 0), 177.43);
    }

    #[test]
    fn lux_mid_ratio_segment() {
        // Equal channels -> ratio 0.5, second coefficient pair.
        assert_close(ltr559::lux_from_channels(100, 100), 232.37);
    }

    #[test]
    fn lux_high_ratio_segment() {
        // ratio 0.7, third coefficient pair.
        assert_close(ltr559::lux_from_channels(30, 70), 26.073);
    }

    #[test]
    fn lux_out_of_range_ratio_reads_zero() {
        assert_eq!(ltr559::lux_from_channels(1, 99), 0.0);
    }

    #[test]
    fn accel_scaling_reaches_one_g() {
        assert_close(lsm6ds3::accel_g(16393), 1.0);
        assert_close(lsm6ds3::accel_g(-16393), -1.0);
    }

    #[test]
    fn gyro_scaling_matches_sensitivity() {
        assert_close(lsm6ds3::gyro_dps(1000), 8.75);
        assert_close(lsm6ds3::gyro_dps(0), 0.0);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Layout Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn menu_bands_split_the_screen_evenly() {
        assert_eq!(band_height(MENU_ITEMS.len()), 34);
    }
}
