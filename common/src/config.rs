//! Application configuration constants.
//!
//! Layout geometry is computed at compile time so draw calls and hit tests
//! share one source of truth and never recompute positions per frame.
//! Timer periods and animation durations mirror the reference dashboard;
//! runtime overrides go through [`DashboardConfig`](crate::dashboard::DashboardConfig).

use core::time::Duration;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Logical display width in pixels.
pub const SCREEN_WIDTH: u32 = 480;

/// Logical display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). Animations advance at this granularity.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Clock display refresh period.
pub const CLOCK_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Data simulation period.
pub const SIMULATION_PERIOD: Duration = Duration::from_secs(7);

/// Layout re-evaluation period (catches day rollovers).
pub const LAYOUT_POLL_PERIOD: Duration = Duration::from_secs(60);

/// Animation duration for the total card.
pub const TOTAL_ANIMATION: Duration = Duration::from_millis(1500);

/// Animation duration for the four category cards.
pub const CATEGORY_ANIMATION: Duration = Duration::from_millis(1200);

/// Length of the change-badge bounce when a badge appears.
pub const BADGE_BOUNCE: Duration = Duration::from_millis(600);

// =============================================================================
// Page Layout (windowed)
// =============================================================================
//
// ┌──────────────────────────────────────────────┐
// │ HEADER: title                         clock   │  26px
// ├──────────────────────────────────────────────┤
// │ CONTROL BAR: mode switch, A/B or schedule, FS │  24px
// ├──────────────────────────────────────────────┤
// │                                              │
// │              STATISTICS (layout A/B)         │  248px
// │                                              │
// ├──────────────────────────────────────────────┤
// │ FOOTER: day chips, active layout, mode        │  22px
// └──────────────────────────────────────────────┘

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Control bar top edge.
pub const CONTROL_BAR_Y: i32 = HEADER_HEIGHT as i32;

/// Control bar height in pixels.
pub const CONTROL_BAR_HEIGHT: u32 = 24;

/// Footer height in pixels.
pub const FOOTER_HEIGHT: u32 = 22;

/// Footer top edge.
pub const FOOTER_Y: i32 = (SCREEN_HEIGHT - FOOTER_HEIGHT) as i32;

/// Gap between cards and around the statistics area.
pub const CARD_GAP: u32 = 6;

/// Statistics area while windowed (between control bar and footer).
pub const STATS_AREA_WINDOWED: Rectangle = Rectangle::new(
    Point::new(0, CONTROL_BAR_Y + CONTROL_BAR_HEIGHT as i32),
    Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - HEADER_HEIGHT - CONTROL_BAR_HEIGHT - FOOTER_HEIGHT),
);

/// Statistics area while fullscreen (whole display).
pub const STATS_AREA_FULLSCREEN: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Control Bar Hit Regions
// =============================================================================

/// Automatic/Manual mode switch (label + track + label).
pub const MODE_SWITCH_RECT: Rectangle = Rectangle::new(Point::new(4, CONTROL_BAR_Y + 3), Size::new(132, 18));

/// Manual "Layout A" button.
pub const MANUAL_A_RECT: Rectangle = Rectangle::new(Point::new(148, CONTROL_BAR_Y + 3), Size::new(64, 18));

/// Manual "Layout B" button.
pub const MANUAL_B_RECT: Rectangle = Rectangle::new(Point::new(216, CONTROL_BAR_Y + 3), Size::new(64, 18));

/// Schedule button that opens the schedule panel (Automatic mode only).
pub const SCHEDULE_BUTTON_RECT: Rectangle = Rectangle::new(Point::new(148, CONTROL_BAR_Y + 3), Size::new(110, 18));

/// Fullscreen toggle button.
pub const FULLSCREEN_BUTTON_RECT: Rectangle =
    Rectangle::new(Point::new(SCREEN_WIDTH as i32 - 118, CONTROL_BAR_Y + 3), Size::new(114, 18));

// =============================================================================
// Schedule Panel Overlay
// =============================================================================

/// Schedule panel width.
pub const PANEL_WIDTH: u32 = 392;

/// Schedule panel height.
pub const PANEL_HEIGHT: u32 = 112;

/// Schedule panel rectangle (centered over the statistics area).
pub const PANEL_RECT: Rectangle = Rectangle::new(
    Point::new((SCREEN_WIDTH - PANEL_WIDTH) as i32 / 2, CENTER_Y - (PANEL_HEIGHT / 2) as i32),
    Size::new(PANEL_WIDTH, PANEL_HEIGHT),
);

/// Width of one day column in the schedule panel.
pub const PANEL_DAY_WIDTH: u32 = 54;

/// Left edge of the first day column.
pub const PANEL_DAYS_X: i32 = PANEL_RECT.top_left.x + 7;

/// Top edge of the A/B chip row.
pub const PANEL_CHIPS_Y: i32 = PANEL_RECT.top_left.y + 62;

/// Size of one A/B chip in the schedule panel.
pub const PANEL_CHIP_SIZE: Size = Size::new(22, 18);

/// Horizontal offset of the A chip inside a day column.
pub const PANEL_CHIP_A_OFFSET: i32 = 4;

/// Horizontal offset of the B chip inside a day column.
pub const PANEL_CHIP_B_OFFSET: i32 = 28;

/// Close button in the panel's top-right corner.
pub const PANEL_CLOSE_RECT: Rectangle = Rectangle::new(
    Point::new(PANEL_RECT.top_left.x + PANEL_WIDTH as i32 - 24, PANEL_RECT.top_left.y + 6),
    Size::new(18, 18),
);

// =============================================================================
// Footer
// =============================================================================

/// Left edge of the first day chip in the footer.
pub const FOOTER_DAYS_X: i32 = 40;

/// Width of one footer day chip (including spacing).
pub const FOOTER_DAY_WIDTH: u32 = 28;
