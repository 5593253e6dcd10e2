//! Populates the budget and debts tables with random rows.
//!
//! Run with:
//! ```
//! cargo run -p populate --bin populate
//! ```

use populate::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    load_dotenv();

    let db_config = DbConfig::from_env()?;
    let seed_config = SeedConfig::from_env()?;

    let mut seeder = Seeder::connect(&db_config)
        .await?
        .with_config(seed_config.entry);

    let mut rng = rand::thread_rng();
    let summary = seeder.run(seed_config.count, &mut rng).await?;
    seeder.close().await?;

    tracing::info!("  Budget rows: {}", summary.budgets.len());
    tracing::info!("  Debt rows: {}", summary.debts.len());
    println!("Database populated successfully!");

    Ok(())
}
