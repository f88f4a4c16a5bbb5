//! Color palette for the headcount dashboard.
//!
//! The dashboard uses a light theme: near-white page background, white
//! cards with a category accent strip, and saturated chips for state
//! indicators. All colors are `Rgb565` so the same widgets can target any
//! 16-bit display.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Card faces and text on saturated chips.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Page Chrome
// =============================================================================

/// Page background (slate-50).
pub const BACKGROUND: Rgb565 = Rgb565::new(30, 62, 31);

/// Header bar fill (deep blue).
pub const HEADER_BG: Rgb565 = Rgb565::new(3, 14, 12);

/// Primary dark text (gray-800).
pub const TEXT_DARK: Rgb565 = Rgb565::new(5, 11, 7);

/// Secondary text (gray-500).
pub const TEXT_MUTED: Rgb565 = Rgb565::new(13, 27, 16);

/// Card and panel face.
pub const CARD_FACE: Rgb565 = WHITE;

/// Card and panel border (gray-200).
pub const BORDER: Rgb565 = Rgb565::new(28, 57, 29);

/// Idle button / chip fill (gray-100).
pub const CHIP_IDLE: Rgb565 = Rgb565::new(29, 60, 30);

// =============================================================================
// State Indicators
// =============================================================================

/// Selected control / manual mode (blue-600).
pub const BLUE: Rgb565 = Rgb565::new(4, 25, 29);

/// Automatic mode chip (purple-500).
pub const PURPLE: Rgb565 = Rgb565::new(18, 18, 28);

/// Layout A chip and "value went up" badge (green-600).
pub const GREEN: Rgb565 = Rgb565::new(2, 41, 9);

/// Layout B chip (orange-600).
pub const ORANGE: Rgb565 = Rgb565::new(29, 22, 1);

/// "Value went down" badge (red-500).
pub const RED: Rgb565 = Rgb565::new(29, 17, 8);

/// Switch track when off (gray-300).
pub const GRAY: Rgb565 = Rgb565::new(26, 53, 27);

// =============================================================================
// Card Accents (one per statistic)
// =============================================================================

/// Total inside accent (blue-500).
pub const ACCENT_TOTAL: Rgb565 = Rgb565::new(7, 32, 30);

/// Karyawan PKC accent (emerald-500).
pub const ACCENT_EMERALD: Rgb565 = Rgb565::new(2, 47, 16);

/// PHL & Kontraktor accent (amber-500).
pub const ACCENT_AMBER: Rgb565 = Rgb565::new(30, 39, 1);

/// Praktikan accent (violet-500).
pub const ACCENT_VIOLET: Rgb565 = Rgb565::new(17, 23, 30);

/// Visitor accent (rose-500).
pub const ACCENT_ROSE: Rgb565 = Rgb565::new(30, 15, 11);

// =============================================================================
// Contrast Helpers
// =============================================================================

/// Pick a readable text color for a background.
///
/// Uses perceptual luminance (ITU-R BT.601) so it keeps working for colors
/// that are mid-way through a [`ColorTransition`](crate::animations::ColorTransition).
/// Returns [`WHITE`] for dark backgrounds and [`TEXT_DARK`] for light ones.
pub fn text_color_for_bg(bg_color: Rgb565) -> Rgb565 {
    if luminance(bg_color) < 128 { WHITE } else { TEXT_DARK }
}

/// Perceptual luminance of an Rgb565 color on a 0-255 scale.
///
/// Integer approximation of 0.299*R + 0.587*G + 0.114*B. The 5/6-bit
/// channels are expanded to 8 bits by replicating their high bits.
pub fn luminance(color: Rgb565) -> u32 {
    let raw = color.into_storage();
    let r5 = u32::from((raw >> 11) & 0x1F);
    let g6 = u32::from((raw >> 5) & 0x3F);
    let b5 = u32::from(raw & 0x1F);

    let r8 = (r5 << 3) | (r5 >> 2);
    let g8 = (g6 << 2) | (g6 >> 4);
    let b8 = (b5 << 3) | (b5 >> 2);

    (77 * r8 + 150 * g8 + 29 * b8) >> 8
}
