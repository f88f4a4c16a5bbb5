//! Periodic timers with explicit cancellation handles.
//!
//! The dashboard runs three independent periodic tasks on a single thread:
//!
//! | Timer        | Period | Work                               |
//! |--------------|--------|------------------------------------|
//! | Clock tick   | 1 s    | resample wall clock, redraw header |
//! | Simulation   | 7 s    | perturb statistics                 |
//! | Layout poll  | 60 s   | re-evaluate layout (day rollover)  |
//!
//! The main loop calls [`Scheduler::due`] once per frame. Each due timer fires
//! at most once per call; if the loop stalled across several periods the
//! missed occurrences are skipped, not replayed.

use core::time::Duration;

use heapless::Vec;
use log::{debug, warn};

/// Maximum number of concurrently registered timers.
pub const MAX_TIMERS: usize = 8;

/// What a timer drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    ClockTick,
    Simulation,
    LayoutPoll,
}

/// Cancellation handle returned by [`Scheduler::every`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle(u32);

#[derive(Clone, Copy, Debug)]
struct Timer {
    id: u32,
    kind: TimerKind,
    period: Duration,
    next_due: Duration,
}

/// Timers due in one poll, in registration order.
pub type DueTimers = Vec<TimerKind, MAX_TIMERS>;

/// Cooperative periodic timer set.
#[derive(Debug, Default)]
pub struct Scheduler {
    timers: Vec<Timer, MAX_TIMERS>,
    next_id: u32,
    shut_down: bool,
}

impl Scheduler {
    pub const fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 0,
            shut_down: false,
        }
    }

    /// Register a timer first firing one `period` after `now`.
    ///
    /// Returns `None` after shutdown, for a zero period, or when full.
    pub fn every(&mut self, kind: TimerKind, period: Duration, now: Duration) -> Option<TimerHandle> {
        if self.shut_down {
            debug!("scheduler shut down, {kind:?} not registered");
            return None;
        }
        if period.is_zero() {
            warn!("refusing {kind:?} timer with zero period");
            return None;
        }
        let id = self.next_id;
        let timer = Timer {
            id,
            kind,
            period,
            next_due: now + period,
        };
        if self.timers.push(timer).is_err() {
            warn!("timer table full, {kind:?} not registered");
            return None;
        }
        self.next_id = self.next_id.wrapping_add(1);
        debug!("timer {id} registered: {kind:?} every {period:?}");
        Some(TimerHandle(id))
    }

    /// Cancel one timer. Returns `false` if it was not registered.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let Some(pos) = self.timers.iter().position(|t| t.id == handle.0) else {
            return false;
        };
        self.timers.remove(pos);
        true
    }

    /// Timers due at `now`.
    pub fn due(&mut self, now: Duration) -> DueTimers {
        let mut fired = DueTimers::new();
        for timer in &mut self.timers {
            if now < timer.next_due {
                continue;
            }
            let late = now - timer.next_due;
            let skipped = late.as_nanos() / timer.period.as_nanos();
            if skipped > 0 {
                debug!("{:?} skipped {skipped} missed period(s)", timer.kind);
            }
            // Next occurrence strictly after now, on the start grid
            let steps = u32::try_from(skipped + 1).unwrap_or(u32::MAX);
            timer.next_due += timer.period.saturating_mul(steps);
            // Capacity equals the timer table, so this cannot overflow
            fired.push(timer.kind).ok();
        }
        fired
    }

    /// Cancel every timer. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        if !self.shut_down {
            debug!("scheduler shutdown: cancelling {} timer(s)", self.timers.len());
        }
        self.timers.clear();
        self.shut_down = true;
    }

    /// Whether [`shutdown`](Self::shutdown) has run.
    #[inline]
    pub const fn is_shut_down(&self) -> bool { self.shut_down }

    /// Number of live timers.
    #[inline]
    pub fn len(&self) -> usize { self.timers.len() }

    /// Whether no timers are live.
    #[inline]
    pub fn is_empty(&self) -> bool { self.timers.is_empty() }
}
