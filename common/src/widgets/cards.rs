//! Statistic cards and the two card arrangements.
//!
//! ```text
//! Layout A                        Layout B
//! ┌──────────┬───────┬───────┐    ┌─────┬─────┬─────┬─────┐
//! │          │ PKC   │ PHL   │    │ PKC │ PHL │ PRK │ VIS │
//! │  TOTAL   ├───────┼───────┤    │     │     │     │     │
//! │          │ PRK   │ VIS   │    ├─────┴─────┴─────┴─────┤
//! │          │       │       │    │ TOTAL                 │
//! └──────────┴───────┴───────┘    └───────────────────────┘
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use super::primitives::{draw_card_background, draw_trend_arrow, fill_rect};
use crate::colors::{
    ACCENT_AMBER,
    ACCENT_EMERALD,
    ACCENT_ROSE,
    ACCENT_TOTAL,
    ACCENT_VIOLET,
    BORDER,
    CARD_FACE,
    WHITE,
};
use crate::config::CARD_GAP;
use crate::format::format_count;
use crate::layout::LayoutId;
use crate::render::{CARD_COUNT, card_idx};
use crate::stats::{Category, TOTAL_LABEL, TOTAL_TITLE};
use crate::styles::{
    CENTERED,
    LABEL_STYLE_MUTED,
    LEFT_ALIGNED,
    RIGHT_ALIGNED,
    SMALL_FONT,
    VALUE_STYLE_LARGE,
    VALUE_STYLE_MEDIUM,
};

/// Static description of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSpec {
    pub title: &'static str,
    pub label: &'static str,
    pub accent: Rgb565,
    /// Large value font (total card).
    pub large: bool,
}

/// Card descriptions in [`card_idx`] order.
pub const CARD_SPECS: [CardSpec; CARD_COUNT] = [
    CardSpec {
        title: TOTAL_TITLE,
        label: TOTAL_LABEL,
        accent: ACCENT_TOTAL,
        large: true,
    },
    category_spec(Category::KaryawanPkc, ACCENT_EMERALD),
    category_spec(Category::PhlKontraktor, ACCENT_VIOLET),
    category_spec(Category::Praktikan, ACCENT_AMBER),
    category_spec(Category::Visitor, ACCENT_ROSE),
];

const fn category_spec(category: Category, accent: Rgb565) -> CardSpec {
    CardSpec {
        title: category.title(),
        label: category.label(),
        accent,
        large: false,
    }
}

/// Change badge shown next to an animating value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    /// Arrow direction; `None` while the badge fades out.
    pub rising: Option<bool>,
    pub color: Rgb565,
    /// Vertical bounce offset in pixels.
    pub bounce: i32,
}

/// Per-frame card content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView {
    pub value: i64,
    pub badge: Option<Badge>,
}

/// Card rectangles for `layout` inside `area`, in [`card_idx`] order.
pub fn card_slots(layout: LayoutId, area: Rectangle) -> [Rectangle; CARD_COUNT] {
    let gap = CARD_GAP;
    let x0 = area.top_left.x + gap as i32;
    let y0 = area.top_left.y + gap as i32;
    let w = area.size.width.saturating_sub(2 * gap);
    let h = area.size.height.saturating_sub(2 * gap);

    let mut slots = [Rectangle::zero(); CARD_COUNT];
    let categories = [card_idx::KARYAWAN, card_idx::PHL, card_idx::PRAKTIKAN, card_idx::VISITOR];

    match layout {
        LayoutId::A => {
            let total_w = w.saturating_sub(gap) * 2 / 5;
            slots[card_idx::TOTAL] = Rectangle::new(Point::new(x0, y0), Size::new(total_w, h));

            let grid_x = x0 + (total_w + gap) as i32;
            let grid_w = w.saturating_sub(total_w + gap);
            let cell_w = grid_w.saturating_sub(gap) / 2;
            let cell_h = h.saturating_sub(gap) / 2;
            for (i, &card) in categories.iter().enumerate() {
                let col = (i % 2) as i32;
                let row = (i / 2) as i32;
                slots[card] = Rectangle::new(
                    Point::new(grid_x + col * (cell_w + gap) as i32, y0 + row * (cell_h + gap) as i32),
                    Size::new(cell_w, cell_h),
                );
            }
        }
        LayoutId::B => {
            let cat_h = h.saturating_sub(gap) * 3 / 5;
            let cat_w = w.saturating_sub(3 * gap) / 4;
            for (i, &card) in categories.iter().enumerate() {
                slots[card] = Rectangle::new(
                    Point::new(x0 + i as i32 * (cat_w + gap) as i32, y0),
                    Size::new(cat_w, cat_h),
                );
            }
            let total_y = y0 + (cat_h + gap) as i32;
            slots[card_idx::TOTAL] =
                Rectangle::new(Point::new(x0, total_y), Size::new(w, h.saturating_sub(cat_h + gap)));
        }
    }
    slots
}

/// Draw one statistic card.
///
/// Wide cards put the value on the right, the rest center it below the label.
pub fn draw_stat_card<D>(
    display: &mut D,
    rect: Rectangle,
    spec: &CardSpec,
    view: &CardView,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_card_background(display, rect, CARD_FACE, BORDER);

    let x = rect.top_left.x;
    let y = rect.top_left.y;
    let w = rect.size.width;
    let h = rect.size.height;

    // Accent stripe under the top edge
    fill_rect(
        display,
        Rectangle::new(Point::new(x + 6, y + 2), Size::new(w.saturating_sub(12), 3)),
        spec.accent,
    );

    Text::with_text_style(spec.title, Point::new(x + 8, y + 18), LABEL_STYLE_MUTED, LEFT_ALIGNED)
        .draw(display)
        .ok();
    let label_style = MonoTextStyle::new(SMALL_FONT, spec.accent);
    Text::with_text_style(spec.label, Point::new(x + 8, y + 30), label_style, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let text = format_count(view.value);
    let wide = w > 2 * h;
    let (value_pos, align) = if wide {
        (Point::new(x + w as i32 - 16, y + h as i32 / 2 + 10), RIGHT_ALIGNED)
    } else {
        (Point::new(x + w as i32 / 2, y + (h as i32 + 30) / 2 + 12), CENTERED)
    };
    let value_style = if spec.large { VALUE_STYLE_LARGE } else { VALUE_STYLE_MEDIUM };
    Text::with_text_style(&text, value_pos, value_style, align)
        .draw(display)
        .ok();

    if let Some(badge) = view.badge {
        draw_badge(display, Point::new(x + w as i32 - 14, y + 17 + badge.bounce), &badge);
    }
}

/// Draw a round change badge centered on `center`.
fn draw_badge<D>(
    display: &mut D,
    center: Point,
    badge: &Badge,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, 18)
        .into_styled(PrimitiveStyle::with_fill(badge.color))
        .draw(display)
        .ok();
    if let Some(rising) = badge.rising {
        draw_trend_arrow(display, center.x, center.y, rising, WHITE);
    }
}

/// Draw all five cards for `layout` inside `area`.
pub fn draw_stats<D>(
    display: &mut D,
    layout: LayoutId,
    area: Rectangle,
    views: &[CardView; CARD_COUNT],
) where
    D: DrawTarget<Color = Rgb565>,
{
    let slots = card_slots(layout, area);
    for ((slot, spec), view) in slots.iter().zip(&CARD_SPECS).zip(views) {
        draw_stat_card(display, *slot, spec, view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{STATS_AREA_FULLSCREEN, STATS_AREA_WINDOWED};

    fn overlaps(a: &Rectangle, b: &Rectangle) -> bool { !a.intersection(b).is_zero_sized() }

    fn assert_slots_valid(layout: LayoutId, area: Rectangle) {
        let slots = card_slots(layout, area);
        for (i, slot) in slots.iter().enumerate() {
            assert!(!slot.is_zero_sized(), "{layout} card {i} is empty");
            let Some(corner) = slot.bottom_right() else {
                panic!("{layout} card {i} has no corner");
            };
            assert!(
                area.contains(slot.top_left) && area.contains(corner),
                "{layout} card {i} {slot:?} leaves {area:?}"
            );
            for (j, other) in slots.iter().enumerate().skip(i + 1) {
                assert!(!overlaps(slot, other), "{layout} cards {i} and {j} overlap");
            }
        }
    }

    #[test]
    fn test_slots_fit_and_do_not_overlap() {
        for layout in [LayoutId::A, LayoutId::B] {
            assert_slots_valid(layout, STATS_AREA_WINDOWED);
            assert_slots_valid(layout, STATS_AREA_FULLSCREEN);
        }
    }

    #[test]
    fn test_layout_a_total_left_grid_right() {
        let slots = card_slots(LayoutId::A, STATS_AREA_WINDOWED);
        let total = slots[card_idx::TOTAL];
        assert_eq!(total.size.height, slots[card_idx::KARYAWAN].size.height * 2 + CARD_GAP);
        assert!(slots[card_idx::KARYAWAN].top_left.x > total.top_left.x);
        assert_eq!(slots[card_idx::KARYAWAN].top_left.y, slots[card_idx::PHL].top_left.y);
        assert_eq!(slots[card_idx::KARYAWAN].top_left.x, slots[card_idx::PRAKTIKAN].top_left.x);
    }

    #[test]
    fn test_layout_b_row_then_total() {
        let slots = card_slots(LayoutId::B, STATS_AREA_WINDOWED);
        let row_y = slots[card_idx::KARYAWAN].top_left.y;
        for card in [card_idx::PHL, card_idx::PRAKTIKAN, card_idx::VISITOR] {
            assert_eq!(slots[card].top_left.y, row_y, "categories share one row");
        }
        assert!(slots[card_idx::TOTAL].top_left.y > row_y, "total sits below");
        assert!(slots[card_idx::TOTAL].size.width > 2 * slots[card_idx::TOTAL].size.height, "total is wide");
    }

    #[test]
    fn test_fullscreen_cards_are_larger() {
        for layout in [LayoutId::A, LayoutId::B] {
            let windowed = card_slots(layout, STATS_AREA_WINDOWED);
            let fullscreen = card_slots(layout, STATS_AREA_FULLSCREEN);
            for card in 0..CARD_COUNT {
                assert!(fullscreen[card].size.height > windowed[card].size.height);
            }
        }
    }

    #[test]
    fn test_card_specs_order() {
        assert_eq!(CARD_SPECS[card_idx::TOTAL].label, "Total Inside NPK2");
        assert_eq!(CARD_SPECS[card_idx::KARYAWAN].title, "STAFF TETAP");
        assert_eq!(CARD_SPECS[card_idx::PHL].label, "PHL & Kontraktor");
        assert_eq!(CARD_SPECS[card_idx::PRAKTIKAN].title, "PROGRAM MAGANG");
        assert_eq!(CARD_SPECS[card_idx::VISITOR].label, "Visitor");
    }
}
