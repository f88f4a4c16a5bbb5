//! Render state tracking for optimized display updates.
//!
//! This module tracks display state for:
//! - Full clear when the view changes (layout, fullscreen, panel, mode, day)
//! - Header conditional redraw (only when the clock text changes)
//! - Chrome draw-once (control bar and footer redraw only after a clear)
//!
//! **Note:** Badge color fades are handled separately by
//! [`ColorTransition`](crate::animations::ColorTransition), not by this module.
//!
//! # Update Strategy
//!
//! | Element      | Update Frequency        | Strategy            |
//! |--------------|-------------------------|---------------------|
//! | Header       | On clock text change    | Conditional redraw  |
//! | Control bar  | Once per view           | Draw-once tracking  |
//! | Footer       | Once per view           | Draw-once tracking  |
//! | Cards        | Every frame             | Always redraw       |
//! | Panel        | Every frame while open  | Drawn over the cards |
//!
//! Cards always redraw because their numbers animate; without clearing the
//! card face old digits would remain visible.

use crate::format::ClockText;
use crate::layout::{LayoutId, LayoutMode};

// =============================================================================
// Card Indices
// =============================================================================

/// Number of statistic cards (total + four categories).
pub const CARD_COUNT: usize = 5;

/// Card indices for clearer code.
pub mod card_idx {
    pub const TOTAL: usize = 0;
    pub const KARYAWAN: usize = 1;
    pub const PHL: usize = 2;
    pub const PRAKTIKAN: usize = 3;
    pub const VISITOR: usize = 4;
}

// =============================================================================
// View Signature
// =============================================================================

/// Everything that changes the static parts of the screen.
///
/// Any difference from the previous frame forces a full clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewSignature {
    pub layout: LayoutId,
    pub fullscreen: bool,
    pub panel_open: bool,
    pub mode: LayoutMode,
    pub manual_layout: LayoutId,
    pub day: usize,
}

/// Tracks render state for optimized display updates.
pub struct RenderState {
    /// Whether control bar and footer have been drawn since the last clear.
    chrome_drawn: bool,

    /// View of the previous frame.
    prev_view: Option<ViewSignature>,

    /// Clock text of the previous header draw.
    prev_clock: ClockText,

    /// Whether the view changed this frame (display must be cleared).
    view_changed: bool,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            chrome_drawn: false,
            prev_view: None,
            prev_clock: ClockText::new(),
            view_changed: false,
            first_frame: true,
        }
    }

    /// Record this frame's view. Returns `true` if the display must be cleared.
    pub fn update_view(&mut self, view: ViewSignature) -> bool {
        let changed = self.prev_view != Some(view);
        self.prev_view = Some(view);
        if changed {
            self.view_changed = true;
            self.chrome_drawn = false;
        }
        self.first_frame || self.view_changed
    }

    /// Check if control bar and footer need drawing.
    #[inline]
    pub const fn need_chrome(&self) -> bool { !self.chrome_drawn || self.first_frame || self.view_changed }

    /// Mark control bar and footer as drawn.
    #[inline]
    pub const fn mark_chrome_drawn(&mut self) { self.chrome_drawn = true; }

    /// Check if the header needs redrawing for `clock`.
    pub fn check_header_dirty(&mut self, clock: &str) -> bool {
        let dirty = self.first_frame || self.view_changed || self.prev_clock.as_str() != clock;
        if dirty {
            self.prev_clock.clear();
            // Same capacity as the formatter output
            self.prev_clock.push_str(clock).ok();
        }
        dirty
    }

    /// Check if the view changed this frame.
    #[inline]
    pub const fn view_changed(&self) -> bool { self.view_changed }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.view_changed = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: ViewSignature = ViewSignature {
        layout: LayoutId::A,
        fullscreen: false,
        panel_open: false,
        mode: LayoutMode::Automatic,
        manual_layout: LayoutId::A,
        day: 0,
    };

    fn settled() -> RenderState {
        let mut state = RenderState::new();
        state.update_view(VIEW);
        state.check_header_dirty("Min, 18 Okt 2026 09:16:05");
        state.mark_chrome_drawn();
        state.end_frame();
        state
    }

    #[test]
    fn test_card_indices() {
        assert_eq!(CARD_COUNT, 5, "total plus four categories");
        assert_eq!(card_idx::TOTAL, 0);
        assert_eq!(card_idx::KARYAWAN, 1);
        assert_eq!(card_idx::PHL, 2);
        assert_eq!(card_idx::PRAKTIKAN, 3);
        assert_eq!(card_idx::VISITOR, 4);
    }

    #[test]
    fn test_first_frame_clears_and_draws_everything() {
        let mut state = RenderState::new();
        assert!(state.is_first_frame());
        assert!(state.update_view(VIEW), "first frame clears the display");
        assert!(state.need_chrome());
        assert!(state.check_header_dirty("x"));
    }

    #[test]
    fn test_same_view_no_clear() {
        let mut state = settled();
        assert!(!state.update_view(VIEW));
        assert!(!state.need_chrome(), "chrome is draw-once");
    }

    #[test]
    fn test_view_change_forces_clear_and_chrome() {
        let changes = [
            ViewSignature { layout: LayoutId::B, ..VIEW },
            ViewSignature { fullscreen: true, ..VIEW },
            ViewSignature { panel_open: true, ..VIEW },
            ViewSignature { mode: LayoutMode::Manual, ..VIEW },
            ViewSignature { manual_layout: LayoutId::B, ..VIEW },
            ViewSignature { day: 3, ..VIEW },
        ];
        for view in changes {
            let mut state = settled();
            assert!(state.update_view(view), "{view:?} should clear");
            assert!(state.need_chrome(), "{view:?} should redraw chrome");
            assert!(state.check_header_dirty("Min, 18 Okt 2026 09:16:05"), "{view:?} header");
        }
    }

    #[test]
    fn test_header_dirty_only_on_clock_change() {
        let mut state = settled();
        assert!(!state.check_header_dirty("Min, 18 Okt 2026 09:16:05"));
        assert!(state.check_header_dirty("Min, 18 Okt 2026 09:16:06"));
        assert!(!state.check_header_dirty("Min, 18 Okt 2026 09:16:06"));
    }

    #[test]
    fn test_end_frame_resets_flags() {
        let mut state = settled();
        state.update_view(ViewSignature { fullscreen: true, ..VIEW });
        assert!(state.view_changed());
        state.mark_chrome_drawn();
        state.end_frame();
        assert!(!state.view_changed());
        assert!(!state.need_chrome());
        assert!(!state.is_first_frame());
    }

    #[test]
    fn test_default_matches_new() {
        let state = RenderState::default();
        assert!(state.is_first_frame());
        assert!(state.need_chrome());
    }
}
