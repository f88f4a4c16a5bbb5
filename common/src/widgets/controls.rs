//! Control bar: mode switch, manual picks or schedule button, fullscreen button.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use super::primitives::{draw_chip, fill_rect};
use crate::colors::{BACKGROUND, BLUE, CHIP_IDLE, GRAY, TEXT_MUTED, WHITE};
use crate::config::{
    CONTROL_BAR_HEIGHT,
    CONTROL_BAR_Y,
    FULLSCREEN_BUTTON_RECT,
    MANUAL_A_RECT,
    MANUAL_B_RECT,
    MODE_SWITCH_RECT,
    SCHEDULE_BUTTON_RECT,
    SCREEN_WIDTH,
};
use crate::layout::{LayoutId, LayoutMode};

/// Label of the button that opens the schedule panel.
pub const SCHEDULE_BUTTON_LABEL: &str = "Pengaturan Jadwal";
use crate::styles::{LEFT_ALIGNED, SMALL_FONT};

const BAR_RECT: Rectangle =
    Rectangle::new(Point::new(0, CONTROL_BAR_Y), Size::new(SCREEN_WIDTH, CONTROL_BAR_HEIGHT));

// Mode switch parts, relative to MODE_SWITCH_RECT
const AUTO_LABEL_X: i32 = 0;
const TRACK_X: i32 = 52;
const TRACK_SIZE: Size = Size::new(26, 14);
const MANUAL_LABEL_X: i32 = 84;

/// Draw the control bar for the current mode.
pub fn draw_control_bar<D>(
    display: &mut D,
    mode: LayoutMode,
    manual_layout: LayoutId,
    panel_open: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, BAR_RECT, BACKGROUND);
    draw_mode_switch(display, mode);

    match mode {
        LayoutMode::Manual => {
            let fill = |layout| if manual_layout == layout { BLUE } else { CHIP_IDLE };
            draw_chip(display, MANUAL_A_RECT, fill(LayoutId::A), "Layout A");
            draw_chip(display, MANUAL_B_RECT, fill(LayoutId::B), "Layout B");
        }
        LayoutMode::Automatic => {
            let fill = if panel_open { BLUE } else { CHIP_IDLE };
            draw_chip(display, SCHEDULE_BUTTON_RECT, fill, SCHEDULE_BUTTON_LABEL);
        }
    }

    draw_chip(display, FULLSCREEN_BUTTON_RECT, CHIP_IDLE, "Layar Penuh F11");
}

/// "OTOMATIS [==o] MANUAL" switch.
fn draw_mode_switch<D>(
    display: &mut D,
    mode: LayoutMode,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let origin = MODE_SWITCH_RECT.top_left;
    let manual = mode == LayoutMode::Manual;
    let label_y = origin.y + 12;

    let auto_color = if manual { TEXT_MUTED } else { BLUE };
    let manual_color = if manual { BLUE } else { TEXT_MUTED };
    Text::with_text_style(
        LayoutMode::Automatic.label(),
        Point::new(origin.x + AUTO_LABEL_X, label_y),
        MonoTextStyle::new(SMALL_FONT, auto_color),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
    Text::with_text_style(
        LayoutMode::Manual.label(),
        Point::new(origin.x + MANUAL_LABEL_X, label_y),
        MonoTextStyle::new(SMALL_FONT, manual_color),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    let track = Rectangle::new(Point::new(origin.x + TRACK_X, origin.y + 2), TRACK_SIZE);
    RoundedRectangle::with_equal_corners(track, Size::new(7, 7))
        .into_styled(PrimitiveStyle::with_fill(if manual { BLUE } else { GRAY }))
        .draw(display)
        .ok();

    let knob_x = if manual { track.top_left.x + 19 } else { track.top_left.x + 7 };
    Circle::with_center(Point::new(knob_x, track.center().y), 10)
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
}
