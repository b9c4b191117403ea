//! Synthetic display data.
//!
//! Years, citation counts, journals, environment durations, finding measurements and activity
//! series are not present in the corpus. They are drawn here, from one seedable generator, and
//! nothing in ranking or tagging reads them.

use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng};
use spacebio_document::Change;

use crate::{DailyActivity, MonthlyCount};

/// Journals publications are attributed to.
pub const JOURNALS: [&str; 6] = [
    "Nature Microgravity",
    "Space Biology Research",
    "NASA Life Sciences",
    "Aerospace Medicine",
    "Gravitational Biology",
    "Space Research Journal",
];

/// Month labels of the monthly series.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Days covered by the daily series.
const DAILY_WINDOW: u64 = 30;

/// Characters used in random id suffixes.
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of random id suffixes.
const ID_SUFFIX_LEN: usize = 9;

/// Source of every synthetic value.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    /// Underlying generator.
    rng: StdRng,
}

impl SyntheticGenerator {
    /// Creates a generator, reproducible when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// A generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Publication year within the last ten years.
    pub fn year(&mut self, current_year: i32) -> i32 {
        current_year - self.rng.random_range(0..10)
    }

    /// Citation count, 10 to 209.
    pub fn citations(&mut self) -> u32 {
        self.rng.random_range(10..210)
    }

    /// Journal name.
    pub fn journal(&mut self) -> &'static str {
        JOURNALS[self.rng.random_range(0..JOURNALS.len())]
    }

    /// Experiment duration in days, 1 to 365.
    pub fn duration_days(&mut self) -> u32 {
        self.rng.random_range(1..=365)
    }

    /// Adaptation rate in percent, 25 to 75.
    pub fn adaptation_rate(&mut self) -> f64 {
        self.rng.random_range(25.0..75.0)
    }

    /// Cell viability in percent, 70 to 100.
    pub fn cell_viability(&mut self) -> f64 {
        self.rng.random_range(70.0..100.0)
    }

    /// Increase or decrease with equal odds.
    pub fn change(&mut self) -> Change {
        if self.rng.random_bool(0.5) {
            Change::Increase
        } else {
            Change::Decrease
        }
    }

    /// Finding id: `finding-<slug>-<9 base-36 characters>`.
    pub fn finding_id(&mut self, slug: &str) -> String {
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| char::from(ID_ALPHABET[self.rng.random_range(0..ID_ALPHABET.len())]))
            .collect();
        format!("finding-{slug}-{suffix}")
    }

    /// Publications per month, 30 to 89 each.
    pub fn monthly(&mut self) -> Vec<MonthlyCount> {
        MONTHS
            .iter()
            .map(|month| MonthlyCount {
                month: (*month).to_string(),
                count: self.rng.random_range(30..90),
            })
            .collect()
    }

    /// Activity for the 30 days ending on `today`, oldest first.
    pub fn daily(&mut self, today: NaiveDate) -> Vec<DailyActivity> {
        (0..DAILY_WINDOW)
            .rev()
            .map(|back| DailyActivity {
                date: (today - Days::new(back)).format("%Y-%m-%d").to_string(),
                articles: self.rng.random_range(5..20),
                words: self.rng.random_range(25_000..75_000),
            })
            .collect()
    }

    /// Trend growth in percent, -20 to 19.
    pub fn growth(&mut self) -> i32 {
        self.rng.random_range(-20..20)
    }
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_reproducible() {
        let mut a = SyntheticGenerator::seeded(7);
        let mut b = SyntheticGenerator::seeded(7);
        for _ in 0..20 {
            assert_eq!(a.citations(), b.citations());
            assert_eq!(a.journal(), b.journal());
        }
        assert_eq!(a.finding_id("cell"), b.finding_id("cell"));
    }

    #[test]
    fn test_ranges() {
        let mut g = SyntheticGenerator::seeded(1);
        for _ in 0..200 {
            let year = g.year(2026);
            assert!((2017..=2026).contains(&year));
            assert!((10..210).contains(&g.citations()));
            assert!((1..=365).contains(&g.duration_days()));
            let rate = g.adaptation_rate();
            assert!((25.0..75.0).contains(&rate));
            let viability = g.cell_viability();
            assert!((70.0..100.0).contains(&viability));
            assert!((-20..20).contains(&g.growth()));
        }
    }

    #[test]
    fn test_finding_id_shape() {
        let id = SyntheticGenerator::seeded(3).finding_id("space");
        let suffix = id.strip_prefix("finding-space-").unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_series() {
        let mut g = SyntheticGenerator::seeded(5);
        let monthly = g.monthly();
        assert_eq!(monthly.len(), 12);
        assert_eq!(monthly[0].month, "Jan");
        assert!(monthly.iter().all(|m| (30..90).contains(&m.count)));

        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let daily = g.daily(today);
        assert_eq!(daily.len(), 30);
        assert_eq!(daily[0].date, "2026-01-31");
        assert_eq!(daily[29].date, "2026-03-01");
        assert!(daily.iter().all(|d| (5..20).contains(&d.articles)));
        assert!(daily.iter().all(|d| (25_000..75_000).contains(&d.words)));
    }
}
