//! Database seeding utilities.

use rand::Rng;
use sqlx::{Connection, PgConnection, Postgres, Transaction};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DbConfig;
use crate::generators::{
    BudgetGenerator, DebtGenerator, EntryGenConfig, GeneratedBudget, GeneratedDebt,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Missing environment variable {0}")]
    MissingEnv(&'static str),
    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Rows inserted by a single [`Seeder::run`].
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    pub budgets: Vec<GeneratedBudget>,
    pub debts: Vec<GeneratedDebt>,
}

/// Database seeder for the `budget` and `debts` tables.
///
/// Owns exactly one connection. Call [`Seeder::close`] when done; dropping
/// the seeder also releases the connection.
pub struct Seeder {
    conn: PgConnection,
    budget_gen: BudgetGenerator,
    debt_gen: DebtGenerator,
}

impl Seeder {
    /// Opens a connection described by `config`.
    pub async fn connect(config: &DbConfig) -> Result<Self, SeedError> {
        info!(
            "Connecting to database {} at {}:{} as {}",
            config.name, config.host, config.port, config.user
        );
        let conn = PgConnection::connect_with(&config.connect_options()).await?;
        info!("Connected to database");

        Ok(Self::new(conn))
    }

    /// Creates a new seeder over an already open connection.
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn,
            budget_gen: BudgetGenerator::new(),
            debt_gen: DebtGenerator::new(),
        }
    }

    /// Sets the field bounds used for generated rows.
    pub fn with_config(mut self, config: EntryGenConfig) -> Self {
        self.budget_gen = BudgetGenerator::with_config(config.clone());
        self.debt_gen = DebtGenerator::with_config(config);
        self
    }

    /// Inserts `count` budget rows and `count` debt rows.
    ///
    /// Everything runs in one transaction that is committed once at the end.
    /// On error the transaction is dropped uncommitted, which rolls back every
    /// row inserted so far.
    pub async fn run(
        &mut self,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<SeedSummary, SeedError> {
        info!("Seeding {count} budget and {count} debt rows...");

        let mut tx = self.conn.begin().await?;
        let mut summary = SeedSummary::default();

        for _ in 0..count {
            let budget = self.budget_gen.generate(rng);
            insert_budget(&mut tx, &budget).await?;
            summary.budgets.push(budget);

            let debt = self.debt_gen.generate(rng);
            insert_debt(&mut tx, &debt).await?;
            summary.debts.push(debt);
        }

        tx.commit().await?;

        info!(
            "Seeded {} budget rows and {} debt rows",
            summary.budgets.len(),
            summary.debts.len()
        );
        Ok(summary)
    }

    /// Closes the connection.
    pub async fn close(self) -> Result<(), SeedError> {
        self.conn.close().await?;
        debug!("Connection closed");
        Ok(())
    }

    /// Returns the connection for advanced usage.
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

/// Inserts a single budget row.
async fn insert_budget(
    tx: &mut Transaction<'_, Postgres>,
    budget: &GeneratedBudget,
) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        INSERT INTO budget (entity, affiliation, amount, created_by, inserted_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(&budget.entity)
    .bind(&budget.affiliation)
    .bind(budget.amount)
    .bind(&budget.created_by)
    .bind(budget.inserted_at)
    .bind(budget.updated_at)
    .execute(&mut **tx)
    .await?;

    debug!("Inserted budget {} ({})", budget.entity, budget.amount);
    Ok(())
}

/// Inserts a single debt row.
async fn insert_debt(
    tx: &mut Transaction<'_, Postgres>,
    debt: &GeneratedDebt,
) -> Result<(), SeedError> {
    sqlx::query(
        r#"
        INSERT INTO debts (responsable, created_by, amount, inserted_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(&debt.responsable)
    .bind(&debt.created_by)
    .bind(debt.amount)
    .bind(debt.inserted_at)
    .bind(debt.updated_at)
    .execute(&mut **tx)
    .await?;

    debug!("Inserted debt {} ({})", debt.responsable, debt.amount);
    Ok(())
}
