//! Wall-clock source.
//!
//! Used for the header clock and the weekday that drives the layout schedule.
//! Animations and timers use monotonic time instead (see [`scheduler`](crate::scheduler)).

use chrono::{Datelike, Local, NaiveDateTime, Weekday};

/// Source of local wall-clock time.
pub trait WallClock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current weekday.
    fn weekday(&self) -> Weekday { self.now().weekday() }
}

/// Host system clock in the local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> NaiveDateTime { Local::now().naive_local() }
}

/// Clock frozen at a settable instant.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct FixedClock(pub(crate) core::cell::Cell<NaiveDateTime>);

#[cfg(test)]
impl FixedClock {
    pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let date = chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap();
        Self(core::cell::Cell::new(date.and_hms_opt(hour, min, sec).unwrap()))
    }

    pub(crate) fn advance(&self, by: chrono::Duration) { self.0.set(self.0.get() + by); }
}

#[cfg(test)]
impl WallClock for FixedClock {
    fn now(&self) -> NaiveDateTime { self.0.get() }
}
