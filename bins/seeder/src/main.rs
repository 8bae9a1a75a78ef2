//! Database seeder for pageturn development and testing.
//!
//! Inserts records valued `Value [1]` through `Value [n]`, running pending
//! migrations first.
//!
//! Usage: cargo run --bin seeder -- [--count N]

use anyhow::Context;
use clap::Parser;
use pageturn_db::RecordRepository;
use pageturn_db::migration::{Migrator, MigratorTrait};
use pageturn_shared::AppConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Seed the records table
#[derive(Parser, Debug)]
#[command(name = "seeder")]
struct Args {
    /// Number of records to insert
    #[arg(long, env = "SEED_COUNT", default_value_t = 5)]
    count: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pageturn=debug,sea_orm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let db = pageturn_db::connect(&config.database).await?;

    Migrator::up(&db, None).await?;

    let repo = RecordRepository::new(db);
    let existing = repo.count().await?;
    if existing > 0 {
        info!(existing, "Records already present, appending");
    }

    repo.seed(args.count).await?;
    info!(total = repo.count().await?, "Seeding complete");

    Ok(())
}
