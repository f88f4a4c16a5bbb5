//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::colors::text_color_for_bg;
use crate::styles::{CENTERED, SMALL_FONT};

/// Corner radius of cards, chips and buttons.
const CORNER_RADIUS: u32 = 6;

/// Draw a card face with a 1px border and rounded corners.
pub fn draw_card_background<D>(
    display: &mut D,
    rect: Rectangle,
    face: Rgb565,
    border: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if rect.size.width < 4 || rect.size.height < 4 {
        return;
    }
    let style = PrimitiveStyleBuilder::new()
        .fill_color(face)
        .stroke_color(border)
        .stroke_width(1)
        .build();
    RoundedRectangle::with_equal_corners(rect, Size::new(CORNER_RADIUS, CORNER_RADIUS))
        .into_styled(style)
        .draw(display)
        .ok();
}

/// Draw a rounded chip with centered small-font text.
///
/// Text color follows the chip fill so labels stay readable.
pub fn draw_chip<D>(
    display: &mut D,
    rect: Rectangle,
    fill: Rgb565,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let radius = (rect.size.height / 2).min(CORNER_RADIUS);
    RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(fill))
        .draw(display)
        .ok();

    let style = MonoTextStyle::new(SMALL_FONT, text_color_for_bg(fill));
    // FONT_6X10 baseline sits 3px below the glyph center
    let pos = rect.center() + Point::new(0, 3);
    Text::with_text_style(text, pos, style, CENTERED).draw(display).ok();
}

/// Draw a change arrow (up or down) centered on `(x, y)`.
pub fn draw_trend_arrow<D>(
    display: &mut D,
    x: i32,
    y: i32,
    rising: bool,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let arrow_style = PrimitiveStyle::with_stroke(color, 2);
    let (tail, head, wing) = if rising { (4, -4, -1) } else { (-4, 4, 1) };
    Line::new(Point::new(x, y + tail), Point::new(x, y + head))
        .into_styled(arrow_style)
        .draw(display)
        .ok();
    Line::new(Point::new(x - 3, y + wing), Point::new(x, y + head))
        .into_styled(arrow_style)
        .draw(display)
        .ok();
    Line::new(Point::new(x + 3, y + wing), Point::new(x, y + head))
        .into_styled(arrow_style)
        .draw(display)
        .ok();
}

/// Fill a rectangle with a solid color.
pub fn fill_rect<D>(
    display: &mut D,
    rect: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    rect.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
}
