//! Menu and readout rendering.
//!
//! All drawing is generic over `DrawTarget<Color = Rgb565>` so the same
//! code paints the ST7789 on target and any off-screen surface on the
//! host. Draw errors are ignored - a failed SPI write leaves a stale
//! frame, and the next frame repaints everything anyway.

use embedded_graphics::mono_font::ascii::{FONT_7X13, FONT_10X20};
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::config::{BACKGROUND, BASE_PEN, DISPLAY_HEIGHT, DISPLAY_WIDTH, HIGHLIGHT_PEN, TEXT_PEN};
use crate::ui::format::Readout;
use crate::ui::menu::MENU_ITEMS;

/// Height of one menu band; the bands split the screen evenly.
pub fn band_height(item_count: usize) -> i32 {
    DISPLAY_HEIGHT as i32 / item_count as i32
}

fn label_style() -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyleBuilder::new()
        .font(&FONT_7X13)
        .text_color(TEXT_PEN)
        .build()
}

fn value_style() -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(TEXT_PEN)
        .build()
}

/// Render the menu: one full-width band per item, the selection
/// highlighted, each label inset into its band.
pub fn draw_menu<D>(target: &mut D, selected: usize)
where
    D: DrawTarget<Color = Rgb565>,
{
    let _ = target.clear(BACKGROUND);

    let band = band_height(MENU_ITEMS.len());

    for (i, name) in MENU_ITEMS.iter().enumerate() {
        let fill = if i == selected { HIGHLIGHT_PEN } else { BASE_PEN };
        let top = i as i32 * band;

        let _ = Rectangle::new(Point::new(0, top), Size::new(DISPLAY_WIDTH, band as u32))
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(target);

        let _ = Text::with_baseline(name, Point::new(10, top + 10), value_style(), Baseline::Top)
            .draw(target);
    }
}

/// Render a sensor readout: label line, then the value block in the
/// larger font (the value may span three lines for the motion axes).
pub fn draw_readout<D>(target: &mut D, readout: &Readout)
where
    D: DrawTarget<Color = Rgb565>,
{
    let _ = target.clear(BACKGROUND);

    let _ = Text::with_baseline(
        readout.label.as_str(),
        Point::new(10, 40),
        label_style(),
        Baseline::Top,
    )
    .draw(target);

    let _ = Text::with_baseline(
        readout.value.as_str(),
        Point::new(10, 80),
        value_style(),
        Baseline::Top,
    )
    .draw(target);
}

/// Render a transient error message.
pub fn draw_error<D>(target: &mut D, message: &str)
where
    D: DrawTarget<Color = Rgb565>,
{
    let _ = target.clear(BACKGROUND);

    let _ = Text::with_baseline("ERROR", Point::new(10, 40), value_style(), Baseline::Top)
        .draw(target);

    let _ = Text::with_baseline(message, Point::new(10, 80), label_style(), Baseline::Top)
        .draw(target);
}
