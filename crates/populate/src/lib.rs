//! Test data seeding for the budgeting service.
//!
//! This crate fills the `budget` and `debts` tables with random rows so the
//! service has something to show during manual verification and demos. The
//! schema is assumed to exist already.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use populate::prelude::*;
//!
//! let config = DbConfig::from_env()?;
//! let mut seeder = Seeder::connect(&config).await?;
//! seeder.run(10, &mut rand::thread_rng()).await?;
//! seeder.close().await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DbConfig, SeedConfig, load_dotenv};
    pub use crate::db::{SeedError, SeedSummary, Seeder};
    pub use crate::generators::{
        BudgetGenerator, DebtGenerator, EntryGenConfig, GeneratedBudget, GeneratedDebt,
        random_amount, random_identifier,
    };
}
