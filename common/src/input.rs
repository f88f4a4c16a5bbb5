//! Platform-neutral input events and hit testing.
//!
//! The binary maps window events onto [`Input`]; the dashboard only ever
//! sees these. Clicks are resolved top layer first:
//!
//! 1. Schedule panel overlay (when open)
//! 2. Control bar
//! 3. Statistics area
//!
//! In fullscreen the chrome is hidden, so every click lands on the
//! statistics area.

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};

use crate::config::{
    FULLSCREEN_BUTTON_RECT,
    MANUAL_A_RECT,
    MANUAL_B_RECT,
    MODE_SWITCH_RECT,
    PANEL_CHIP_A_OFFSET,
    PANEL_CHIP_B_OFFSET,
    PANEL_CHIP_SIZE,
    PANEL_CHIPS_Y,
    PANEL_CLOSE_RECT,
    PANEL_DAY_WIDTH,
    PANEL_DAYS_X,
    PANEL_RECT,
    SCHEDULE_BUTTON_RECT,
    STATS_AREA_WINDOWED,
};
use crate::layout::{LayoutId, LayoutMode};

/// Keyboard commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// F11.
    ToggleFullscreen,
    /// Escape.
    Escape,
    /// M: Automatic/Manual.
    ToggleMode,
    /// A/B: manual layout pick.
    PickLayout(LayoutId),
    /// S: schedule panel.
    ToggleSettings,
}

/// One user input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    /// Click at a logical display coordinate.
    Click(Point),
    Quit,
}

/// What a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// A/B chip for one day in the schedule panel.
    PanelChip { day: usize, layout: LayoutId },
    PanelClose,
    /// Inside the panel but not on a control; swallowed.
    PanelBody,
    ModeSwitch,
    ManualPick(LayoutId),
    ScheduleButton,
    FullscreenButton,
    StatsArea,
    Nothing,
}

/// Rectangle of one schedule panel chip.
pub const fn panel_chip_rect(day: usize, layout: LayoutId) -> Rectangle {
    let col_x = PANEL_DAYS_X + (day as i32) * PANEL_DAY_WIDTH as i32;
    let offset = match layout {
        LayoutId::A => PANEL_CHIP_A_OFFSET,
        LayoutId::B => PANEL_CHIP_B_OFFSET,
    };
    Rectangle::new(Point::new(col_x + offset, PANEL_CHIPS_Y), PANEL_CHIP_SIZE)
}

/// Resolve a click against the visible layers.
pub fn hit_test(point: Point, fullscreen: bool, panel_open: bool, mode: LayoutMode) -> HitTarget {
    if fullscreen {
        return HitTarget::StatsArea;
    }

    if panel_open && PANEL_RECT.contains(point) {
        if PANEL_CLOSE_RECT.contains(point) {
            return HitTarget::PanelClose;
        }
        for day in 0..7 {
            for layout in [LayoutId::A, LayoutId::B] {
                if panel_chip_rect(day, layout).contains(point) {
                    return HitTarget::PanelChip { day, layout };
                }
            }
        }
        return HitTarget::PanelBody;
    }

    if MODE_SWITCH_RECT.contains(point) {
        return HitTarget::ModeSwitch;
    }
    if FULLSCREEN_BUTTON_RECT.contains(point) {
        return HitTarget::FullscreenButton;
    }
    match mode {
        LayoutMode::Manual if MANUAL_A_RECT.contains(point) => return HitTarget::ManualPick(LayoutId::A),
        LayoutMode::Manual if MANUAL_B_RECT.contains(point) => return HitTarget::ManualPick(LayoutId::B),
        LayoutMode::Automatic if SCHEDULE_BUTTON_RECT.contains(point) => return HitTarget::ScheduleButton,
        _ => {}
    }

    if STATS_AREA_WINDOWED.contains(point) {
        HitTarget::StatsArea
    } else {
        HitTarget::Nothing
    }
}
