//! Layout selection: weekly schedule vs. manual override.
//!
//! The dashboard shows the same statistics in one of two arrangements:
//!
//! - **Layout A**: total card on the left, categories in a 2×2 grid
//! - **Layout B**: four category cards in one row, total card along the bottom
//!
//! In [`LayoutMode::Automatic`] the active layout comes from the weekly
//! [`Schedule`] for the current weekday. In [`LayoutMode::Manual`] it is the
//! layout the user last picked.

use core::fmt;
use core::str::FromStr;

use chrono::Weekday;
use log::info;

use crate::error::ConfigError;

/// Short Indonesian day names, Sunday first.
pub const DAY_NAMES_SHORT: [&str; 7] = ["MIN", "SEN", "SEL", "RAB", "KAM", "JUM", "SAB"];

/// Full Indonesian day names, Sunday first.
pub const DAY_NAMES_FULL: [&str; 7] = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"];

/// Day index (0 = Sunday … 6 = Saturday).
#[inline]
pub fn day_index(weekday: Weekday) -> usize { weekday.num_days_from_sunday() as usize }

/// One of the two statistic arrangements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutId {
    #[default]
    A,
    B,
}

impl LayoutId {
    /// Single-letter name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl FromStr for LayoutId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            other => Err(ConfigError::UnknownLayout(other.to_string())),
        }
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Weekly layout table, indexed Sunday (0) through Saturday (6).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule([LayoutId; 7]);

impl Schedule {
    /// Reference table: B on Tuesday, Thursday and Saturday.
    pub const DEFAULT: Self = Self([
        LayoutId::A,
        LayoutId::A,
        LayoutId::B,
        LayoutId::A,
        LayoutId::B,
        LayoutId::A,
        LayoutId::B,
    ]);

    /// Build a schedule from seven entries, Sunday first.
    pub const fn new(days: [LayoutId; 7]) -> Self { Self(days) }

    /// Layout for a day index. Out-of-range indices wrap modulo 7.
    #[inline]
    pub const fn get(&self, day: usize) -> LayoutId { self.0[day % 7] }

    /// Layout for a weekday.
    #[inline]
    pub fn for_weekday(&self, weekday: Weekday) -> LayoutId { self.get(day_index(weekday)) }

    /// Overwrite one day. Out-of-range indices wrap modulo 7.
    #[inline]
    pub const fn set(&mut self, day: usize, layout: LayoutId) { self.0[day % 7] = layout; }

    /// All seven entries, Sunday first.
    #[inline]
    pub const fn days(&self) -> &[LayoutId; 7] { &self.0 }
}

impl Default for Schedule {
    fn default() -> Self { Self::DEFAULT }
}

impl FromStr for Schedule {
    type Err = ConfigError;

    /// Parse seven `A`/`B` letters, Sunday first (e.g. `AABABAB`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let count = s.chars().count();
        if count != 7 {
            return Err(ConfigError::ScheduleLength(count));
        }
        let mut days = [LayoutId::A; 7];
        for (slot, ch) in days.iter_mut().zip(s.chars()) {
            let mut buf = [0u8; 4];
            *slot = ch.encode_utf8(&mut buf).parse()?;
        }
        Ok(Self(days))
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for layout in self.0 {
            f.write_str(layout.as_str())?;
        }
        Ok(())
    }
}

/// Who decides the active layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    #[default]
    Automatic,
    Manual,
}

impl LayoutMode {
    /// Switch label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Automatic => "OTOMATIS",
            Self::Manual => "MANUAL",
        }
    }
}

/// Derived presentation state, recomputed on every relevant change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayMode {
    pub manual_override: bool,
    pub manual_layout: LayoutId,
    pub effective_layout: LayoutId,
    pub fullscreen: bool,
}

/// Automatic/Manual layout state machine.
#[derive(Clone, Debug)]
pub struct LayoutSelector {
    mode: LayoutMode,
    manual_layout: LayoutId,
    schedule: Schedule,
    weekday: Weekday,
    effective: LayoutId,
}

impl LayoutSelector {
    /// Create a selector in Automatic mode, evaluated for `weekday`.
    pub fn new(schedule: Schedule, weekday: Weekday) -> Self {
        Self {
            mode: LayoutMode::Automatic,
            manual_layout: LayoutId::A,
            schedule,
            weekday,
            effective: schedule.for_weekday(weekday),
        }
    }

    /// Switch between Automatic and Manual. Returns `true` if the effective layout changed.
    pub fn toggle_mode(&mut self) -> bool {
        self.mode = match self.mode {
            LayoutMode::Automatic => LayoutMode::Manual,
            LayoutMode::Manual => LayoutMode::Automatic,
        };
        info!("layout mode: {}", self.mode.label());
        self.resolve()
    }

    /// Enter Manual mode directly with a picked layout.
    pub fn force_manual(&mut self, layout: LayoutId) -> bool {
        self.mode = LayoutMode::Manual;
        self.manual_layout = layout;
        self.resolve()
    }

    /// Pick the manual layout. Ignored outside Manual mode.
    pub fn pick_manual(&mut self, layout: LayoutId) -> bool {
        if self.mode != LayoutMode::Manual {
            return false;
        }
        self.manual_layout = layout;
        info!("manual layout: {layout}");
        self.resolve()
    }

    /// Edit one schedule entry. Ignored outside Automatic mode.
    pub fn set_schedule_entry(&mut self, day: usize, layout: LayoutId) -> bool {
        if self.mode != LayoutMode::Automatic {
            return false;
        }
        self.schedule.set(day, layout);
        info!("schedule {} -> {layout}", DAY_NAMES_FULL[day % 7]);
        self.resolve()
    }

    /// Re-evaluate for `weekday` (clock poll). Returns `true` if the effective layout changed.
    pub fn reevaluate(&mut self, weekday: Weekday) -> bool {
        if weekday != self.weekday {
            info!("day changed: {}", DAY_NAMES_FULL[day_index(weekday)]);
        }
        self.weekday = weekday;
        self.resolve()
    }

    fn resolve(&mut self) -> bool {
        let next = match self.mode {
            LayoutMode::Automatic => self.schedule.for_weekday(self.weekday),
            LayoutMode::Manual => self.manual_layout,
        };
        let changed = next != self.effective;
        if changed {
            info!("effective layout: {} -> {next}", self.effective);
        }
        self.effective = next;
        changed
    }

    /// Layout currently shown.
    #[inline]
    pub const fn effective_layout(&self) -> LayoutId { self.effective }

    /// Current mode.
    #[inline]
    pub const fn mode(&self) -> LayoutMode { self.mode }

    /// Last manually picked layout.
    #[inline]
    pub const fn manual_layout(&self) -> LayoutId { self.manual_layout }

    /// Weekly table.
    #[inline]
    pub const fn schedule(&self) -> &Schedule { &self.schedule }

    /// Weekday of the last evaluation.
    #[inline]
    pub const fn weekday(&self) -> Weekday { self.weekday }

    /// Snapshot of the derived presentation state.
    pub const fn display_mode(&self, fullscreen: bool) -> DisplayMode {
        DisplayMode {
            manual_override: matches!(self.mode, LayoutMode::Manual),
            manual_layout: self.manual_layout,
            effective_layout: self.effective,
            fullscreen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_pattern() {
        assert_eq!(Schedule::default().to_string(), "AABABAB");
    }

    #[test]
    fn test_tuesday_automatic_shows_b() {
        let selector = LayoutSelector::new(Schedule::DEFAULT, Weekday::Tue);
        assert_eq!(selector.mode(), LayoutMode::Automatic);
        assert_eq!(selector.effective_layout(), LayoutId::B);
    }

    #[test]
    fn test_schedule_lookup_every_day() {
        let expected = [
            (Weekday::Sun, LayoutId::A),
            (Weekday::Mon, LayoutId::A),
            (Weekday::Tue, LayoutId::B),
            (Weekday::Wed, LayoutId::A),
            (Weekday::Thu, LayoutId::B),
            (Weekday::Fri, LayoutId::A),
            (Weekday::Sat, LayoutId::B),
        ];
        let mut selector = LayoutSelector::new(Schedule::DEFAULT, Weekday::Sun);
        for (weekday, layout) in expected {
            selector.reevaluate(weekday);
            assert_eq!(selector.effective_layout(), layout, "{weekday}");
        }
    }

    #[test]
    fn test_manual_a_overrides_schedule() {
        let mut selector = LayoutSelector::new(Schedule::DEFAULT, Weekday::Tue);
        assert!(selector.toggle_mode(), "Manual defaults to A, so B -> A changes");
        assert_eq!(selector.mode(), LayoutMode::Manual);
        selector.pick_manual(LayoutId::A);
        for weekday in [Weekday::Tue, Weekday::Thu, Weekday::Sat] {
            selector.reevaluate(weekday);
            assert_eq!(selector.effective_layout(), LayoutId::A, "{weekday} stays on manual A");
        }
    }

    #[test]
    fn test_pick_manual_ignored_in_automatic() {
        let mut selector = LayoutSelector::new(Schedule::DEFAULT, Weekday::Mon);
        assert!(!selector.pick_manual(LayoutId::B));
        assert_eq!(selector.manual_layout(), LayoutId::A);
        assert_eq!(selector.effective_layout(), LayoutId::A);
    }

    #[test]
    fn test_schedule_edit_only_in_automatic() {
        let mut selector = LayoutSelector::new(Schedule::DEFAULT, Weekday::Mon);
        assert!(selector.set_schedule_entry(1, LayoutId::B), "editing today applies immediately");
        assert_eq!(selector.effective_layout(), LayoutId::B);

        selector.toggle_mode();
        assert!(!selector.set_schedule_entry(1, LayoutId::A));
        assert_eq!(selector.schedule().get(1), LayoutId::B, "Manual mode rejects edits");
    }

    #[test]
    fn test_back_to_automatic_restores_schedule() {
        let mut selector = LayoutSelector::new(Schedule::DEFAULT, Weekday::Thu);
        selector.toggle_mode();
        assert_eq!(selector.effective_layout(), LayoutId::A);
        assert!(selector.toggle_mode());
        assert_eq!(selector.effective_layout(), LayoutId::B);
    }

    #[test]
    fn test_day_rollover_changes_layout() {
        let mut selector = LayoutSelector::new(Schedule::DEFAULT, Weekday::Mon);
        assert!(!selector.reevaluate(Weekday::Mon), "same day, same layout");
        assert!(selector.reevaluate(Weekday::Tue), "Mon A -> Tue B");
        assert_eq!(selector.weekday(), Weekday::Tue);
    }

    #[test]
    fn test_force_manual() {
        let mut selector = LayoutSelector::new(Schedule::DEFAULT, Weekday::Sun);
        assert!(selector.force_manual(LayoutId::B));
        assert_eq!(selector.mode(), LayoutMode::Manual);
        assert_eq!(selector.effective_layout(), LayoutId::B);
    }

    #[test]
    fn test_display_mode_snapshot() {
        let mut selector = LayoutSelector::new(Schedule::DEFAULT, Weekday::Tue);
        selector.force_manual(LayoutId::A);
        assert_eq!(selector.display_mode(true), DisplayMode {
            manual_override: true,
            manual_layout: LayoutId::A,
            effective_layout: LayoutId::A,
            fullscreen: true,
        });
    }

    #[test]
    fn test_schedule_parse() {
        let schedule: Schedule = "bbbaaab".parse().unwrap_or_default();
        assert_eq!(schedule.to_string(), "BBBAAAB");
        assert_eq!("AAB".parse::<Schedule>(), Err(ConfigError::ScheduleLength(3)));
        assert_eq!(
            "AABABAC".parse::<Schedule>(),
            Err(ConfigError::UnknownLayout("C".to_string()))
        );
    }

    #[test]
    fn test_layout_id_parse_and_display() {
        assert_eq!("a".parse::<LayoutId>(), Ok(LayoutId::A));
        assert_eq!(" B ".parse::<LayoutId>(), Ok(LayoutId::B));
        assert!("AB".parse::<LayoutId>().is_err());
        assert_eq!(LayoutId::B.to_string(), "B");
    }

    #[test]
    fn test_day_names() {
        assert_eq!(DAY_NAMES_SHORT[day_index(Weekday::Sun)], "MIN");
        assert_eq!(DAY_NAMES_FULL[day_index(Weekday::Sat)], "Sabtu");
    }
}
