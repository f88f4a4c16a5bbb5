//! Number and badge animations.
//!
//! - **Animated numbers**: a displayed count eases from its last shown value
//!   to a new target with an ease-out quartic curve
//! - **Badge colors**: change badges fade toward green (up), red (down) or
//!   back to the card face (idle)
//! - **Badge bounce**: a short decaying bounce when a badge appears
//!
//! # Easing
//!
//! ```text
//! p         = clamp(elapsed / duration, 0, 1)
//! displayed = start + (end - start) * (1 - (1 - p)^4)
//! ```
//!
//! The result is rounded half toward positive infinity, and at `p == 1` the
//! displayed value is exactly `end`.
//!
//! # Time
//!
//! All functions take monotonic time as a [`Duration`] since application
//! start. Nothing here reads a clock, so every frame is reproducible in tests.

use core::time::Duration;

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

use crate::config::BADGE_BOUNCE;
use crate::render::CARD_COUNT;

// =============================================================================
// Easing
// =============================================================================

/// Ease-out quartic: fast start, decelerating to a stop.
#[inline]
pub fn ease_out_quart(p: f64) -> f64 {
    let inv = 1.0 - p.clamp(0.0, 1.0);
    1.0 - inv * inv * inv * inv
}

/// Value shown `elapsed` into an animation from `start` to `end`.
///
/// A zero `duration` jumps straight to `end`. Intermediate values never
/// leave the `start..=end` range, whatever the magnitudes involved.
pub fn interpolate(start: i64, end: i64, elapsed: Duration, duration: Duration) -> i64 {
    if duration.is_zero() || elapsed >= duration {
        return end;
    }
    if elapsed.is_zero() {
        return start;
    }
    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    let eased = ease_out_quart(progress);
    // Delta in f64: `end - start` overflows i64 for far-apart endpoints
    let value = (end as f64 - start as f64) * eased + start as f64;
    ((value + 0.5).floor() as i64).clamp(start.min(end), start.max(end))
}

/// Direction of the most recent change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

// =============================================================================
// Animated Number
// =============================================================================

/// In-flight interpolation.
#[derive(Clone, Copy, Debug)]
struct Tween {
    from: i64,
    started_at: Duration,
}

/// A displayed count that eases toward its latest target.
///
/// Only one interpolation exists at a time: a new target replaces the
/// in-flight one and restarts from whatever value is currently shown.
#[derive(Clone, Debug)]
pub struct AnimatedNumber {
    displayed: i64,
    target: i64,
    duration: Duration,
    tween: Option<Tween>,
    direction: Option<Direction>,
    shown: bool,
}

impl AnimatedNumber {
    /// Create an empty number. Nothing is shown until the first target.
    pub const fn new(duration: Duration) -> Self {
        Self {
            displayed: 0,
            target: 0,
            duration,
            tween: None,
            direction: None,
            shown: false,
        }
    }

    /// Set a new target value.
    ///
    /// A missing value counts as zero. The first target is shown immediately
    /// without animation. Returns `true` if an animation was started.
    pub fn set_target(&mut self, value: Option<i64>, now: Duration) -> bool {
        let value = value.unwrap_or(0);

        if !self.shown {
            self.shown = true;
            self.displayed = value;
            self.target = value;
            return false;
        }

        if value == self.target {
            return false;
        }

        self.target = value;
        if value == self.displayed {
            // Retargeted back onto the shown value: nothing left to animate
            self.tween = None;
            self.direction = None;
            return false;
        }

        self.direction = Some(if value > self.displayed { Direction::Up } else { Direction::Down });
        self.tween = Some(Tween {
            from: self.displayed,
            started_at: now,
        });
        true
    }

    /// Advance to `now` and return the displayed value.
    ///
    /// Completing the animation clears the direction signal.
    pub fn update(&mut self, now: Duration) -> i64 {
        if let Some(tween) = self.tween {
            let elapsed = now.saturating_sub(tween.started_at);
            self.displayed = interpolate(tween.from, self.target, elapsed, self.duration);
            if elapsed >= self.duration {
                self.displayed = self.target;
                self.tween = None;
                self.direction = None;
            }
        }
        self.displayed
    }

    /// Currently displayed value.
    #[inline]
    pub const fn value(&self) -> i64 { self.displayed }

    /// Direction of the running animation, if any.
    #[inline]
    pub const fn direction(&self) -> Option<Direction> { self.direction }

    /// Whether an interpolation is in flight.
    #[inline]
    pub const fn is_animating(&self) -> bool { self.tween.is_some() }
}

// =============================================================================
// Badge Bounce
// =============================================================================

/// Maximum upward badge displacement in pixels.
const BOUNCE_AMPLITUDE: f32 = 4.0;

/// Bounce oscillation speed (radians per millisecond).
const BOUNCE_FREQUENCY: f32 = 0.02;

/// Vertical badge offset `elapsed` after it appeared.
///
/// A damped sine that settles to 0 after [`BADGE_BOUNCE`]. Negative values
/// move the badge up.
pub fn badge_bounce_offset(elapsed: Duration) -> i32 {
    if elapsed >= BADGE_BOUNCE {
        return 0;
    }
    let ms = elapsed.as_millis() as f32;
    let damping = 1.0 - ms / BADGE_BOUNCE.as_millis() as f32;
    let offset = -(ms * BOUNCE_FREQUENCY).sin().abs() * BOUNCE_AMPLITUDE * damping;
    offset as i32
}

// =============================================================================
// Color Transition State
// =============================================================================

/// Speed of badge color interpolation (0.0-1.0 per frame).
/// At 0.2 a full fade takes roughly 15 frames (~300ms at 50 FPS).
const COLOR_LERP_SPEED: f32 = 0.2;

/// Manhattan distance at which a fading color snaps to its target.
const COLOR_SNAP_THRESHOLD: i32 = 2;

/// Smoothly fades one color per card toward a per-card target.
pub struct ColorTransition {
    current_colors: [Rgb565; CARD_COUNT],
    target_colors: [Rgb565; CARD_COUNT],
    transitioning: [bool; CARD_COUNT],
}

impl ColorTransition {
    /// Create a transition state with every card resting on `initial`.
    pub const fn new(initial: Rgb565) -> Self {
        Self {
            current_colors: [initial; CARD_COUNT],
            target_colors: [initial; CARD_COUNT],
            transitioning: [false; CARD_COUNT],
        }
    }

    /// Set the target color for a card. Returns `true` if a new fade started.
    pub fn set_target(&mut self, card: usize, target: Rgb565) -> bool {
        if self.target_colors[card] == target {
            false
        } else {
            self.target_colors[card] = target;
            self.transitioning[card] = true;
            true
        }
    }

    /// Current (interpolated) color for a card.
    #[inline]
    pub const fn get_current(&self, card: usize) -> Rgb565 { self.current_colors[card] }

    /// Whether the card's color still differs from its target.
    #[inline]
    pub const fn is_transitioning(&self, card: usize) -> bool { self.transitioning[card] }

    /// Advance every active fade by one frame.
    ///
    /// Returns a bitmask of the cards whose color changed.
    pub fn update(&mut self) -> u8 {
        let mut changed: u8 = 0;

        for i in 0..CARD_COUNT {
            if !self.transitioning[i] {
                continue;
            }
            let current = self.current_colors[i];
            let target = self.target_colors[i];

            if current == target {
                self.transitioning[i] = false;
                continue;
            }

            let next = lerp_rgb565(current, target, COLOR_LERP_SPEED);
            if colors_close_enough(next, target) {
                self.current_colors[i] = target;
                self.transitioning[i] = false;
            } else {
                self.current_colors[i] = next;
            }
            changed |= 1 << i;
        }

        changed
    }
}

/// Split an Rgb565 color into its raw 5/6/5-bit channels.
#[inline]
fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}

/// Linear interpolation between two Rgb565 colors in 8-bit fixed point.
///
/// A non-zero channel delta always moves at least one step, so a fade can
/// never stall just outside the snap threshold.
fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let (from_r, from_g, from_b) = channels(from);
    let (to_r, to_g, to_b) = channels(to);
    let t_fixed = (t * 256.0) as i32;

    let step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            return 0;
        }
        match (delta * t_fixed) >> 8 {
            0 if delta > 0 => 1,
            0 => -1,
            s => s,
        }
    };

    let r = (from_r + step(to_r - from_r)).clamp(0, 31);
    let g = (from_g + step(to_g - from_g)).clamp(0, 63);
    let b = (from_b + step(to_b - from_b)).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

/// Whether two colors are within [`COLOR_SNAP_THRESHOLD`] (Manhattan distance).
fn colors_close_enough(a: Rgb565, b: Rgb565) -> bool {
    let (ar, ag, ab) = channels(a);
    let (br, bg, bb) = channels(b);
    (ar - br).abs() + (ag - bg).abs() + (ab - bb).abs() <= COLOR_SNAP_THRESHOLD
}
