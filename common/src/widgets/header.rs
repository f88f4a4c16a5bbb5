//! Header bar: site title on the left, live clock on the right.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use super::primitives::fill_rect;
use crate::colors::HEADER_BG;
use crate::config::{HEADER_HEIGHT, SCREEN_WIDTH};
use crate::styles::{LABEL_STYLE_MUTED, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_WHITE};

/// Site title.
pub const HEADER_TITLE: &str = "PUPUK KUJANG - GATE NPK2";

const HEADER_RECT: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));
const TITLE_POS: Point = Point::new(8, 19);
const CAPTION_POS: Point = Point::new(SCREEN_WIDTH as i32 - 8, 10);
const CLOCK_POS: Point = Point::new(SCREEN_WIDTH as i32 - 8, 22);

/// Draw the header with the given clock text.
pub fn draw_header<D>(
    display: &mut D,
    clock: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, HEADER_RECT, HEADER_BG);

    Text::with_text_style(HEADER_TITLE, TITLE_POS, TITLE_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style("WAKTU REAL-TIME", CAPTION_POS, LABEL_STYLE_MUTED, RIGHT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(clock, CLOCK_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}
