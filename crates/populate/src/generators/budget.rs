//! Budget entry generation.

use rand::Rng;
use time::PrimitiveDateTime;

use super::{EntryGenConfig, random_amount, random_identifier, utc_now};

/// Generated budget row ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedBudget {
    pub entity: String,
    pub affiliation: String,
    pub amount: i32,
    pub created_by: String,
    pub inserted_at: PrimitiveDateTime,
    pub updated_at: PrimitiveDateTime,
}

/// Generates random budget rows.
pub struct BudgetGenerator {
    config: EntryGenConfig,
}

impl BudgetGenerator {
    /// Creates a new budget generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: EntryGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: EntryGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single budget row stamped with the current time.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedBudget {
        let len = self.config.identifier_length;
        let now = utc_now();

        GeneratedBudget {
            entity: random_identifier(rng, len),
            affiliation: random_identifier(rng, len),
            amount: random_amount(rng, self.config.amount_min, self.config.amount_max),
            created_by: random_identifier(rng, len),
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Generates multiple budget rows.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedBudget> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for BudgetGenerator {
    fn default() -> Self {
        Self::new()
    }
}
