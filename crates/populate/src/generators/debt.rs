//! Debt entry generation.

use rand::Rng;
use time::PrimitiveDateTime;

use super::{EntryGenConfig, random_amount, random_identifier, utc_now};

/// Generated debt row ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedDebt {
    pub responsable: String,
    pub created_by: String,
    pub amount: i32,
    pub inserted_at: PrimitiveDateTime,
    pub updated_at: PrimitiveDateTime,
}

/// Generates random debt rows.
pub struct DebtGenerator {
    config: EntryGenConfig,
}

impl DebtGenerator {
    /// Creates a new debt generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: EntryGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: EntryGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single debt row stamped with the current time.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedDebt {
        let len = self.config.identifier_length;
        let now = utc_now();

        GeneratedDebt {
            responsable: random_identifier(rng, len),
            created_by: random_identifier(rng, len),
            amount: random_amount(rng, self.config.amount_min, self.config.amount_max),
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Generates multiple debt rows.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedDebt> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for DebtGenerator {
    fn default() -> Self {
        Self::new()
    }
}
