//! pageturn pager
//!
//! Paginates the records table with the configured defaults and prints the
//! resulting page as JSON.
//!
//! Usage: pager [PAGE] [PER_PAGE] [--seed N]
//!
//! Omitted arguments fall back to `pagination.page` / `pagination.per_page`
//! from configuration. `--seed` (or `SEED_COUNT`) inserts records first, which
//! is useful against the default in-memory database.

use anyhow::Context;
use clap::Parser;
use pageturn_core::{PaginateRequest, PaginationDefaults, Paginator};
use pageturn_db::entities::records;
use pageturn_db::migration::{Migrator, MigratorTrait};
use pageturn_db::{RecordRepository, RecordSource};
use pageturn_shared::{AppConfig, AppError, PaginationConfig};
use sea_orm::QueryOrder;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print one page of the records table as JSON
#[derive(Parser, Debug)]
#[command(name = "pager")]
struct Args {
    /// Page to print (defaults to `pagination.page`)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    page: Option<u32>,

    /// Records per page (defaults to `pagination.per_page`)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    per_page: Option<u32>,

    /// Insert this many records before paginating
    #[arg(long, env = "SEED_COUNT")]
    seed: Option<u32>,
}

impl Args {
    /// Request config; unset arguments stay zero so they merge with the defaults.
    fn config(&self) -> PaginationConfig {
        PaginationConfig::new(
            self.page.unwrap_or_default(),
            self.per_page.unwrap_or_default(),
            "",
        )
    }
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
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let db = pageturn_db::connect(&config.database).await?;
    Migrator::up(&db, None).await?;

    if let Some(count) = args.seed {
        RecordRepository::new(db.clone()).seed(count).await?;
    }

    let paginator = Paginator::new(
        PaginationDefaults::from_settings(&config.pagination).with_source(RecordSource::new(db)),
    );

    let request = PaginateRequest::<RecordSource>::new()
        .config(args.config())
        .filter(|query| query.order_by_asc(records::Column::CreatedAt))
        .filter(|query| query.order_by_asc(records::Column::Value));

    let result = paginator.paginate(request).await.map_err(|err| {
        let err = AppError::from(err);
        anyhow::anyhow!("[{}] {err}", err.error_code())
    })?;

    info!(
        page = result.page,
        last_page = result.last_page,
        total = result.total,
        "Fetched page"
    );

    let rows = result.map(|record| serde_json::json!({ "id": record.id, "value": record.value }));
    println!("{}", serde_json::to_string_pretty(&rows)?);

    Ok(())
}
