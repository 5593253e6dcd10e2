//! Entity generators for test data.
//!
//! This module provides generators for the two budgeting tables:
//! - [`BudgetGenerator`]: Generate rows for the `budget` table
//! - [`DebtGenerator`]: Generate rows for the `debts` table
//!
//! Both are built on the field-level helpers [`random_identifier`] and
//! [`random_amount`].

pub mod budget;
pub mod debt;

pub use budget::{BudgetGenerator, GeneratedBudget};
pub use debt::{DebtGenerator, GeneratedDebt};

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, PrimitiveDateTime};

/// Default length of generated identifier strings.
pub const DEFAULT_IDENTIFIER_LENGTH: usize = 8;

/// Default bounds for generated amounts (inclusive).
pub const DEFAULT_AMOUNT_RANGE: RangeInclusive<i32> = 10..=1000;

/// Configuration shared by the entry generators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryGenConfig {
    /// Length of every generated string field.
    pub identifier_length: usize,
    /// Smallest amount that can be generated.
    pub amount_min: i32,
    /// Largest amount that can be generated.
    pub amount_max: i32,
}

impl Default for EntryGenConfig {
    fn default() -> Self {
        Self {
            identifier_length: DEFAULT_IDENTIFIER_LENGTH,
            amount_min: *DEFAULT_AMOUNT_RANGE.start(),
            amount_max: *DEFAULT_AMOUNT_RANGE.end(),
        }
    }
}

/// Returns a random lowercase ASCII string of exactly `length` characters.
///
/// Each character is drawn uniformly from `a..=z`. Not suitable for anything
/// security related.
pub fn random_identifier(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

/// Returns a uniformly distributed integer in `[min, max]`.
///
/// Reversed bounds are swapped instead of panicking.
pub fn random_amount(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(low..=high)
}

/// Current UTC wall-clock time, without offset, for `timestamp` columns.
pub(crate) fn utc_now() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_identifier_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);

        for length in [1, 8, 32, 100] {
            let id = random_identifier(&mut rng, length);
            assert_eq!(id.chars().count(), length);
            assert!(id.chars().all(|c| c.is_ascii_lowercase()), "bad id: {id}");
        }
    }

    #[test]
    fn test_identifier_empty() {
        let mut rng = rand::thread_rng();
        assert_eq!(random_identifier(&mut rng, 0), "");
    }

    #[test]
    fn test_identifier_uses_whole_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        let id = random_identifier(&mut rng, 5000);

        let distinct: std::collections::HashSet<char> = id.chars().collect();
        assert_eq!(distinct.len(), 26);
    }

    #[test]
    fn test_amount_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1000 {
            let amount = random_amount(&mut rng, 10, 1000);
            assert!((10..=1000).contains(&amount));
        }
    }

    #[test]
    fn test_amount_hits_both_ends() {
        let mut rng = StdRng::seed_from_u64(3);
        let amounts: Vec<i32> = (0..500).map(|_| random_amount(&mut rng, 1, 3)).collect();

        assert!(amounts.contains(&1));
        assert!(amounts.contains(&3));
    }

    #[test]
    fn test_amount_degenerate_and_reversed_range() {
        let mut rng = rand::thread_rng();

        assert_eq!(random_amount(&mut rng, 5, 5), 5);
        for _ in 0..100 {
            let amount = random_amount(&mut rng, 50, 20);
            assert!((20..=50).contains(&amount));
        }
    }

    #[test]
    fn test_default_config() {
        let config = EntryGenConfig::default();
        assert_eq!(config.identifier_length, 8);
        assert_eq!(config.amount_min, 10);
        assert_eq!(config.amount_max, 1000);
    }
}
