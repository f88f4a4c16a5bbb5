//! Random-walk headcount simulator.
//!
//! Every [`SIMULATION_PERIOD`](crate::config::SIMULATION_PERIOD) each category
//! moves by a random delta from [`Category::delta_range`], is clamped to
//! `[0, cap]`, and the total is recomputed:
//!
//! ```text
//! raw   = sum(categories)
//! total = min(TOTAL_CAP, raw)
//! if raw > TOTAL_CAP:
//!     category = floor(category * TOTAL_CAP / raw)   // for each category
//! ```
//!
//! Flooring can leave the scaled parts summing below the displayed total.
//! [`RescalePolicy::Faithful`] keeps that artifact; [`RescalePolicy::Consistent`]
//! reports the sum of the scaled parts instead.

use core::fmt;
use core::str::FromStr;

use log::debug;
use rand::Rng;

use crate::error::ConfigError;
use crate::stats::{Category, DashboardStats, TOTAL_CAP};

/// How the total is reported after proportional rescaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RescalePolicy {
    /// Total is capped at [`TOTAL_CAP`] even if the floored parts sum lower.
    #[default]
    Faithful,
    /// Total is the sum of the floored parts.
    Consistent,
}

impl FromStr for RescalePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "faithful" => Ok(Self::Faithful),
            "consistent" => Ok(Self::Consistent),
            other => Err(ConfigError::UnknownRescalePolicy(other.to_string())),
        }
    }
}

impl fmt::Display for RescalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Faithful => f.write_str("faithful"),
            Self::Consistent => f.write_str("consistent"),
        }
    }
}

/// One delta per category, in [`Category::ALL`] order.
pub type CategoryDeltas = [i32; 4];

/// Apply one tick of deltas to `prev`.
///
/// Pure function: all randomness lives in [`DataSimulator`].
pub fn step(prev: &DashboardStats, deltas: &CategoryDeltas, policy: RescalePolicy) -> DashboardStats {
    let mut next = *prev;
    for (&category, &delta) in Category::ALL.iter().zip(deltas) {
        let moved = i64::from(prev.get(category)) + i64::from(delta);
        let clamped = moved.clamp(0, i64::from(category.cap())) as u32;
        next.set(category, clamped);
    }

    let raw = next.category_sum();
    next.total_inside = raw.min(TOTAL_CAP);

    if raw > TOTAL_CAP {
        for category in Category::ALL {
            // Exact floor(v * cap / raw); a float ratio can land just below an integer
            let scaled = u64::from(next.get(category)) * u64::from(TOTAL_CAP) / u64::from(raw);
            next.set(category, scaled as u32);
        }
        if policy == RescalePolicy::Consistent {
            next.total_inside = next.category_sum();
        }
    }

    next
}

/// Draw one random delta per category.
pub fn sample_deltas<R: Rng>(rng: &mut R) -> CategoryDeltas {
    Category::ALL.map(|category| rng.gen_range(category.delta_range()))
}

/// Stateful simulator owning its RNG.
pub struct DataSimulator<R> {
    rng: R,
    policy: RescalePolicy,
    ticks: u64,
}

impl<R: Rng> DataSimulator<R> {
    /// Create a simulator with the given RNG and rescale policy.
    pub const fn new(rng: R, policy: RescalePolicy) -> Self { Self { rng, policy, ticks: 0 } }

    /// Produce the next snapshot from `prev`.
    pub fn tick(&mut self, prev: &DashboardStats) -> DashboardStats {
        let deltas = sample_deltas(&mut self.rng);
        let next = step(prev, &deltas, self.policy);
        self.ticks += 1;
        debug!("simulation tick {}: deltas {:?} -> {:?}", self.ticks, deltas, next);
        next
    }

    /// Number of ticks produced so far.
    #[inline]
    pub const fn ticks(&self) -> u64 { self.ticks }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn stats(k: u32, p: u32, pr: u32, v: u32) -> DashboardStats {
        DashboardStats {
            total_inside: 0,
            karyawan_pkc: k,
            phl_kontraktor: p,
            praktikan: pr,
            visitor: v,
        }
    }

    // -------------------------------------------------------------------------
    // step()
    // -------------------------------------------------------------------------

    #[test]
    fn test_step_below_cap_total_is_sum() {
        let next = step(&stats(100, 20, 10, 10), &[1, -1, 2, -3], RescalePolicy::Faithful);
        assert_eq!(next, DashboardStats {
            total_inside: 139,
            karyawan_pkc: 101,
            phl_kontraktor: 19,
            praktikan: 12,
            visitor: 7,
        });
    }

    #[test]
    fn test_step_clamps_to_zero_and_cap() {
        let next = step(&stats(2, 49, 24, 1), &[-6, 3, 2, -3], RescalePolicy::Faithful);
        assert_eq!(next.karyawan_pkc, 0, "negative values clamp to zero");
        assert_eq!(next.phl_kontraktor, 50, "values clamp to the category cap");
        assert_eq!(next.praktikan, 25);
        assert_eq!(next.visitor, 0);
        assert_eq!(next.total_inside, 75);
    }

    #[test]
    fn test_step_rescales_when_over_total_cap() {
        // raw = 200 + 50 + 25 + 25 = 300 > 275
        let next = step(&stats(200, 50, 25, 25), &[0, 0, 0, 0], RescalePolicy::Faithful);
        assert_eq!(next.total_inside, 275, "faithful total is pinned at the cap");
        assert_eq!(next.karyawan_pkc, 183, "floor(200 * 275 / 300)");
        assert_eq!(next.phl_kontraktor, 45, "floor(50 * 275 / 300)");
        assert_eq!(next.praktikan, 22, "floor(25 * 275 / 300)");
        assert_eq!(next.visitor, 22);
        assert_eq!(next.category_sum(), 272, "floored parts sum below the displayed total");
    }

    #[test]
    fn test_step_consistent_policy_reports_part_sum() {
        let next = step(&stats(200, 50, 25, 25), &[0, 0, 0, 0], RescalePolicy::Consistent);
        assert_eq!(next.total_inside, 272);
        assert_eq!(next.total_inside, next.category_sum());
    }

    #[test]
    fn test_step_exactly_at_cap_is_not_rescaled() {
        let next = step(&stats(180, 45, 25, 25), &[0, 0, 0, 0], RescalePolicy::Faithful);
        assert_eq!(next.total_inside, 275);
        assert_eq!(next.karyawan_pkc, 180, "sum == cap keeps categories untouched");
    }

    // -------------------------------------------------------------------------
    // DataSimulator
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_tick_from_initial_stats() {
        let mut sim = DataSimulator::new(StdRng::seed_from_u64(7), RescalePolicy::Faithful);
        let prev = DashboardStats::INITIAL;
        let next = sim.tick(&prev);

        // Categories already within their caps move by at most their step
        for category in [Category::KaryawanPkc, Category::Visitor] {
            let before = i64::from(prev.get(category));
            let after = i64::from(next.get(category));
            let step = i64::from(category.max_step());
            assert!(
                (before - step..=before + step).contains(&after),
                "{category:?}: {before} -> {after} exceeds ±{step}"
            );
        }
        // PHL (67) and Praktikan (32) start above cap and clamp on the first tick
        assert_eq!(next.phl_kontraktor, 50);
        assert_eq!(next.praktikan, 25);

        // At most 161 + 50 + 25 + 22 = 258, so no rescale happens
        assert_eq!(next.total_inside, next.category_sum());
        assert_eq!(sim.ticks(), 1);
    }

    #[test]
    fn test_seeded_simulators_agree() {
        let mut a = DataSimulator::new(StdRng::seed_from_u64(42), RescalePolicy::Faithful);
        let mut b = DataSimulator::new(StdRng::seed_from_u64(42), RescalePolicy::Faithful);
        let (mut sa, mut sb) = (DashboardStats::INITIAL, DashboardStats::INITIAL);
        for _ in 0..50 {
            sa = a.tick(&sa);
            sb = b.tick(&sb);
        }
        assert_eq!(sa, sb, "same seed should give the same walk");
    }

    #[test]
    fn test_sample_deltas_within_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let deltas = sample_deltas(&mut rng);
            for (category, delta) in Category::ALL.iter().zip(deltas) {
                assert!(category.delta_range().contains(&delta), "{category:?} delta {delta}");
            }
        }
    }

    #[test]
    fn test_rescale_policy_parse() {
        assert_eq!("faithful".parse::<RescalePolicy>(), Ok(RescalePolicy::Faithful));
        assert_eq!(" Consistent ".parse::<RescalePolicy>(), Ok(RescalePolicy::Consistent));
        assert!("exact".parse::<RescalePolicy>().is_err());
        assert_eq!(RescalePolicy::Consistent.to_string(), "consistent");
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    proptest! {
        #[test]
        fn prop_step_respects_caps(
            k in 0u32..=200, p in 0u32..=50, pr in 0u32..=25, v in 0u32..=25,
            dk in -6i32..=5, dp in -4i32..=3, dpr in -3i32..=2, dv in -3i32..=2,
        ) {
            let next = step(&stats(k, p, pr, v), &[dk, dp, dpr, dv], RescalePolicy::Faithful);
            prop_assert!(next.within_caps());
        }

        #[test]
        fn prop_total_rule(
            k in 0u32..=200, p in 0u32..=50, pr in 0u32..=25, v in 0u32..=25,
        ) {
            let prev = stats(k, p, pr, v);
            let raw = prev.category_sum();
            let next = step(&prev, &[0, 0, 0, 0], RescalePolicy::Faithful);
            if raw <= TOTAL_CAP {
                prop_assert_eq!(next.total_inside, raw);
                prop_assert_eq!(next.category_sum(), raw);
            } else {
                prop_assert_eq!(next.total_inside, TOTAL_CAP);
                for category in Category::ALL {
                    prop_assert_eq!(next.get(category), prev.get(category) * TOTAL_CAP / raw);
                }
            }
        }

        #[test]
        fn prop_long_walk_stays_bounded(seed in any::<u64>()) {
            let mut sim = DataSimulator::new(StdRng::seed_from_u64(seed), RescalePolicy::Faithful);
            let mut current = DashboardStats::INITIAL;
            for _ in 0..200 {
                current = sim.tick(&current);
                prop_assert!(current.within_caps());
            }
        }
    }
}
