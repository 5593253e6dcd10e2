//! Database integration for seeding test data.
//!
//! The [`Seeder`] owns a single connection and inserts generated budget and
//! debt rows into the database inside one transaction.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
