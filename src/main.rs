//! Sensor menu firmware for the Raspberry Pi Pico + Display Pack 2.0.
//!
//! Three Breakout Garden sensors share one I²C bus; the ST7789 LCD shows
//! either a menu of sensor categories or the selected sensor's live
//! readout, driven by the four front-panel buttons.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::spi::{self, Spi};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Delay, Duration, Ticker};
use embedded_graphics::draw_target::DrawTarget;
use embedded_hal_bus::i2c::RefCellDevice;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;
use {defmt_rtt as _, panic_probe as _};

use sensordeck::config::{
    BACKGROUND, DISPLAY_HEIGHT, DISPLAY_SPI_BUF_LEN, DISPLAY_SPI_HZ, DISPLAY_WIDTH,
    FRAME_INTERVAL_MS, I2C_FREQUENCY_HZ,
};
use sensordeck::sensors::bank::SensorBank;
use sensordeck::ui::buttons::{button_task, Buttons};
use sensordeck::ui::display::{draw_error, draw_menu, draw_readout};
use sensordeck::ui::format::Readout;
use sensordeck::ui::menu::MenuState;
use sensordeck::ui::{ButtonEvent, View};

// Program metadata for `picotool info`
#[link_section = ".bi_entries"]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"sensordeck"),
    embassy_rp::binary_info::rp_program_description!(
        c"Sensor menu for the Pico Display Pack 2.0"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, 4> = Channel::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("sensordeck starting");

    // RGB status LED (active-low). Wired on the Display Pack but not used
    // by the menu; held off and kept as a reserved indicator.
    let _led_r = Output::new(p.PIN_6, Level::High);
    let _led_g = Output::new(p.PIN_7, Level::High);
    let _led_b = Output::new(p.PIN_8, Level::High);

    // Front-panel buttons, active-low with pull-ups.
    let buttons = Buttons::new(
        Input::new(p.PIN_14, Pull::Up), // X - up
        Input::new(p.PIN_15, Pull::Up), // Y - down
        Input::new(p.PIN_13, Pull::Up), // B - select
        Input::new(p.PIN_12, Pull::Up), // A - back
    );
    spawner
        .spawn(button_task(buttons, BUTTON_EVENTS.sender()))
        .unwrap();

    // ST7789 over SPI0 (TX only, no MISO on the Display Pack).
    let mut spi_config = spi::Config::default();
    spi_config.frequency = DISPLAY_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();
    let mut spi_buf = [0u8; DISPLAY_SPI_BUF_LEN];
    let di = SpiInterface::new(spi_device, dc, &mut spi_buf);

    // Panel is natively portrait; rotate into 320x240 landscape.
    let mut screen = match Builder::new(ST7789, di)
        .display_size(DISPLAY_HEIGHT as u16, DISPLAY_WIDTH as u16)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut Delay)
    {
        Ok(display) => display,
        Err(_) => defmt::panic!("display init failed"),
    };
    let _ = screen.clear(BACKGROUND);
    info!("display initialized");

    // Shared I²C bus for the three Breakout Garden sensors.
    info!("Initializing sensors...");
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let bus = RefCell::new(I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config));

    let mut bank = SensorBank::new(
        RefCellDevice::new(&bus),
        RefCellDevice::new(&bus),
        RefCellDevice::new(&bus),
    );
    let part_id = defmt::unwrap!(bank.init(&mut Delay));
    info!("Found LTR559. Part ID: 0x{=u8:02x}", part_id);

    let mut state = MenuState::new();
    let mut ticker = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));

    loop {
        match state.view() {
            View::Menu => draw_menu(&mut screen, state.selected()),
            View::Sensor(name) => match bank.read_all(&mut Delay) {
                Ok(reading) => draw_readout(&mut screen, &Readout::for_sensor(name, &reading)),
                Err(e) => {
                    warn!("sensor read failed: {}", e);
                    draw_error(&mut screen, "Sensor read failed");
                }
            },
        }

        // Redraw on the next frame tick or as soon as a button lands.
        match select(BUTTON_EVENTS.receive(), ticker.next()).await {
            Either::First(event) => {
                state.handle(event);
                while let Ok(event) = BUTTON_EVENTS.try_receive() {
                    state.handle(event);
                }
            }
            Either::Second(()) => {}
        }
    }
}
