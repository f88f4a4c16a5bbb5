//! Headcount statistics shown on the dashboard.
//!
//! A [`DashboardStats`] record holds the four category counts plus the
//! displayed total. The total is the sum of the categories, capped at
//! [`TOTAL_CAP`]; each category has its own cap and per-tick delta range
//! used by the [`simulation`](crate::simulation).

use core::ops::RangeInclusive;

/// Maximum displayed total.
pub const TOTAL_CAP: u32 = 275;

/// The four headcount categories, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Permanent staff.
    KaryawanPkc,
    /// Day laborers and contractors.
    PhlKontraktor,
    /// Interns.
    Praktikan,
    /// Company visitors.
    Visitor,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::KaryawanPkc, Self::PhlKontraktor, Self::Praktikan, Self::Visitor];

    /// Upper clamp for this category.
    pub const fn cap(self) -> u32 {
        match self {
            Self::KaryawanPkc => 200,
            Self::PhlKontraktor => 50,
            Self::Praktikan | Self::Visitor => 25,
        }
    }

    /// Range of the random delta applied on each simulation tick.
    pub const fn delta_range(self) -> RangeInclusive<i32> {
        match self {
            Self::KaryawanPkc => -6..=5,
            Self::PhlKontraktor => -4..=3,
            Self::Praktikan | Self::Visitor => -3..=2,
        }
    }

    /// Largest absolute delta a single tick can apply.
    pub const fn max_step(self) -> u32 {
        let range = self.delta_range();
        let low = range.start().unsigned_abs();
        let high = range.end().unsigned_abs();
        if low > high { low } else { high }
    }

    /// Caption shown above the label.
    pub const fn title(self) -> &'static str {
        match self {
            Self::KaryawanPkc => "STAFF TETAP",
            Self::PhlKontraktor => "TENAGA KONTRAK",
            Self::Praktikan => "PROGRAM MAGANG",
            Self::Visitor => "TAMU PERUSAHAAN",
        }
    }

    /// Card label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::KaryawanPkc => "Karyawan PKC",
            Self::PhlKontraktor => "PHL & Kontraktor",
            Self::Praktikan => "Praktikan",
            Self::Visitor => "Visitor",
        }
    }
}

/// Caption of the total card.
pub const TOTAL_TITLE: &str = "TOTAL KESELURUHAN";

/// Label of the total card.
pub const TOTAL_LABEL: &str = "Total Inside NPK2";

/// Snapshot of the gate headcount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_inside: u32,
    pub karyawan_pkc: u32,
    pub phl_kontraktor: u32,
    pub praktikan: u32,
    pub visitor: u32,
}

impl DashboardStats {
    /// Values shown before the first simulation tick.
    ///
    /// Two categories start above their caps; the first tick clamps them.
    pub const INITIAL: Self = Self {
        total_inside: 275,
        karyawan_pkc: 156,
        phl_kontraktor: 67,
        praktikan: 32,
        visitor: 20,
    };

    /// Count for one category.
    pub const fn get(&self, category: Category) -> u32 {
        match category {
            Category::KaryawanPkc => self.karyawan_pkc,
            Category::PhlKontraktor => self.phl_kontraktor,
            Category::Praktikan => self.praktikan,
            Category::Visitor => self.visitor,
        }
    }

    /// Overwrite the count for one category. The total is left untouched.
    pub const fn set(&mut self, category: Category, value: u32) {
        match category {
            Category::KaryawanPkc => self.karyawan_pkc = value,
            Category::PhlKontraktor => self.phl_kontraktor = value,
            Category::Praktikan => self.praktikan = value,
            Category::Visitor => self.visitor = value,
        }
    }

    /// Sum of the four categories.
    pub fn category_sum(&self) -> u32 { Category::ALL.iter().map(|&c| self.get(c)).sum() }

    /// Whether every category is within its cap and the total within [`TOTAL_CAP`].
    pub fn within_caps(&self) -> bool {
        self.total_inside <= TOTAL_CAP && Category::ALL.iter().all(|&c| self.get(c) <= c.cap())
    }
}

impl Default for DashboardStats {
    fn default() -> Self { Self::INITIAL }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_stats_match_reference() {
        let stats = DashboardStats::default();
        assert_eq!(stats.total_inside, 275);
        assert_eq!(stats.category_sum(), 275, "initial categories sum to the cap");
    }

    #[test]
    fn test_initial_stats_exceed_category_caps() {
        // PHL (67 > 50) and Praktikan (32 > 25) start above their caps
        assert!(!DashboardStats::INITIAL.within_caps());
    }

    #[test]
    fn test_get_set_roundtrip_per_category() {
        let mut stats = DashboardStats::INITIAL;
        for (i, category) in Category::ALL.into_iter().enumerate() {
            stats.set(category, i as u32);
            assert_eq!(stats.get(category), i as u32, "{category:?} should read back");
        }
        assert_eq!(stats.total_inside, 275, "set() must not touch the total");
    }

    #[test]
    fn test_caps_and_steps() {
        assert_eq!(Category::KaryawanPkc.cap(), 200);
        assert_eq!(Category::PhlKontraktor.cap(), 50);
        assert_eq!(Category::Praktikan.cap(), 25);
        assert_eq!(Category::Visitor.cap(), 25);

        assert_eq!(Category::KaryawanPkc.max_step(), 6);
        assert_eq!(Category::PhlKontraktor.max_step(), 4);
        assert_eq!(Category::Praktikan.max_step(), 3);
        assert_eq!(Category::Visitor.max_step(), 3);
    }

    #[test]
    fn test_caps_sum_exceeds_total_cap() {
        // Rescaling is reachable: all categories at cap overflow the total
        let sum: u32 = Category::ALL.iter().map(|c| c.cap()).sum();
        assert!(sum > TOTAL_CAP, "caps sum {sum} should exceed {TOTAL_CAP}");
    }
}
