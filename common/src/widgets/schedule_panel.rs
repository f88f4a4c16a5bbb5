//! Schedule editor overlay: one A/B chip pair per weekday.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;

use super::primitives::{draw_card_background, draw_chip};
use crate::colors::{BORDER, CARD_FACE, CHIP_IDLE, GREEN, ORANGE, TEXT_MUTED};
use crate::config::{PANEL_CLOSE_RECT, PANEL_DAY_WIDTH, PANEL_DAYS_X, PANEL_RECT};
use crate::input::panel_chip_rect;
use crate::layout::{DAY_NAMES_FULL, LayoutId, Schedule};
use crate::styles::{CENTERED, LABEL_STYLE_DARK, LABEL_STYLE_MUTED, LEFT_ALIGNED, TITLE_STYLE_DARK};

const TITLE_POS: Point = Point::new(PANEL_RECT.top_left.x + 10, PANEL_RECT.top_left.y + 22);
const DAY_NAME_Y: i32 = PANEL_RECT.top_left.y + 52;

/// Draw the schedule panel over whatever is beneath it.
pub fn draw_schedule_panel<D>(
    display: &mut D,
    schedule: &Schedule,
    today: usize,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_card_background(display, PANEL_RECT, CARD_FACE, BORDER);

    Text::with_text_style("Pengaturan Jadwal Layout", TITLE_POS, TITLE_STYLE_DARK, LEFT_ALIGNED)
        .draw(display)
        .ok();
    draw_close_button(display);

    for (day, name) in DAY_NAMES_FULL.iter().enumerate() {
        let center_x = PANEL_DAYS_X + day as i32 * PANEL_DAY_WIDTH as i32 + PANEL_DAY_WIDTH as i32 / 2;
        let style = if day == today { LABEL_STYLE_DARK } else { LABEL_STYLE_MUTED };
        Text::with_text_style(name, Point::new(center_x, DAY_NAME_Y), style, CENTERED)
            .draw(display)
            .ok();

        let selected = schedule.get(day);
        for (layout, active_fill) in [(LayoutId::A, GREEN), (LayoutId::B, ORANGE)] {
            let fill = if selected == layout { active_fill } else { CHIP_IDLE };
            draw_chip(display, panel_chip_rect(day, layout), fill, layout.as_str());
        }
    }
}

fn draw_close_button<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_chip(display, PANEL_CLOSE_RECT, CHIP_IDLE, "");
    let style = PrimitiveStyle::with_stroke(TEXT_MUTED, 2);
    let r = PANEL_CLOSE_RECT;
    let (tl, br) = (r.top_left + Point::new(5, 5), r.top_left + Point::new(12, 12));
    Line::new(tl, br).into_styled(style).draw(display).ok();
    Line::new(Point::new(br.x, tl.y), Point::new(tl.x, br.y))
        .into_styled(style)
        .draw(display)
        .ok();
}
