//! Footer: weekday chips, active layout, and mode.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use super::primitives::{draw_chip, fill_rect};
use crate::colors::{BACKGROUND, BLUE, CHIP_IDLE, GREEN, ORANGE, PURPLE};
use crate::config::{FOOTER_DAY_WIDTH, FOOTER_DAYS_X, FOOTER_HEIGHT, FOOTER_Y, SCREEN_WIDTH};
use crate::layout::{DAY_NAMES_SHORT, DisplayMode, LayoutId};
use crate::styles::{LABEL_STYLE_MUTED, LEFT_ALIGNED};

const FOOTER_RECT: Rectangle = Rectangle::new(Point::new(0, FOOTER_Y), Size::new(SCREEN_WIDTH, FOOTER_HEIGHT));
const CHIP_Y: i32 = FOOTER_Y + 4;
const CHIP_HEIGHT: u32 = 14;
const LABEL_Y: i32 = FOOTER_Y + 14;

const LAYOUT_LABEL_X: i32 = 246;
const LAYOUT_CHIP: Rectangle = Rectangle::new(Point::new(284, CHIP_Y), Size::new(56, CHIP_HEIGHT));
const MODE_LABEL_X: i32 = 350;
const MODE_CHIP: Rectangle = Rectangle::new(Point::new(384, CHIP_Y), Size::new(64, CHIP_HEIGHT));

/// Draw the footer for `today` (0 = Sunday) and the current display mode.
pub fn draw_footer<D>(
    display: &mut D,
    today: usize,
    mode: &DisplayMode,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, FOOTER_RECT, BACKGROUND);

    Text::with_text_style("Hari:", Point::new(6, LABEL_Y), LABEL_STYLE_MUTED, LEFT_ALIGNED)
        .draw(display)
        .ok();
    for (day, name) in DAY_NAMES_SHORT.iter().enumerate() {
        let x = FOOTER_DAYS_X + day as i32 * FOOTER_DAY_WIDTH as i32;
        let chip = Rectangle::new(Point::new(x, CHIP_Y), Size::new(FOOTER_DAY_WIDTH - 4, CHIP_HEIGHT));
        let fill = if day == today { BLUE } else { CHIP_IDLE };
        draw_chip(display, chip, fill, name);
    }

    Text::with_text_style("Aktif:", Point::new(LAYOUT_LABEL_X, LABEL_Y), LABEL_STYLE_MUTED, LEFT_ALIGNED)
        .draw(display)
        .ok();
    let (layout_fill, layout_text) = match mode.effective_layout {
        LayoutId::A => (GREEN, "Layout A"),
        LayoutId::B => (ORANGE, "Layout B"),
    };
    draw_chip(display, LAYOUT_CHIP, layout_fill, layout_text);

    Text::with_text_style("Mode:", Point::new(MODE_LABEL_X, LABEL_Y), LABEL_STYLE_MUTED, LEFT_ALIGNED)
        .draw(display)
        .ok();
    let (mode_fill, mode_text) = if mode.manual_override { (BLUE, "Manual") } else { (PURPLE, "Otomatis") };
    draw_chip(display, MODE_CHIP, mode_fill, mode_text);
}
