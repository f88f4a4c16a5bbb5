//! Pre-computed static text styles.
//!
//! `MonoTextStyle` and `TextStyle` are `const`-constructible, so every style
//! used by more than one widget is defined once here instead of being rebuilt
//! in each draw call. Widgets that need a color chosen at runtime (chips whose
//! fill depends on state) build `MonoTextStyle::new(SMALL_FONT, color)` from
//! the exposed font references.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{TEXT_DARK, TEXT_MUTED, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Card values, chips, buttons.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Card titles and control labels.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Header clock.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels).
pub const SMALL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small dark text for labels on light surfaces.
pub const LABEL_STYLE_DARK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TEXT_DARK);

/// Small gray text for secondary captions (card titles, "HARI:").
pub const LABEL_STYLE_MUTED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, TEXT_MUTED);

/// Small white text for the header clock.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Medium white text for the header title (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Medium dark text for the schedule panel heading.
pub const TITLE_STYLE_DARK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, TEXT_DARK);

/// Category card value text.
pub const VALUE_STYLE_MEDIUM: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, TEXT_DARK);

/// Total card value text.
pub const VALUE_STYLE_LARGE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, TEXT_DARK);
