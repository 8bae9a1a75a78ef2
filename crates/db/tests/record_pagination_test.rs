//! Integration tests for paginating the records table.
//!
//! Each test runs against its own in-memory SQLite database.

use pageturn_core::{PaginateRequest, PaginationDefaults, PaginationError, Paginator};
use pageturn_db::entities::records;
use pageturn_db::migration::{Migrator, MigratorTrait};
use pageturn_db::{RecordRepository, RecordSource};
use pageturn_shared::{DatabaseConfig, PaginationConfig};
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, QueryOrder};

/// Single-connection pool so every query sees the same in-memory database.
async fn setup(count: u32) -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };

    let db = pageturn_db::connect(&config)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    RecordRepository::new(db.clone())
        .seed(count)
        .await
        .expect("Failed to seed records");

    db
}

fn default_paginator(db: &DatabaseConnection) -> Paginator<RecordSource> {
    Paginator::new(
        PaginationDefaults::new()
            .with_source(RecordSource::new(db.clone()))
            .with_config(PaginationConfig::new(1, 25, "tests/default")),
    )
}

type RecordRequest = PaginateRequest<RecordSource>;

fn by_value() -> RecordRequest {
    RecordRequest::new().filter(|query| query.order_by_asc(records::Column::Value))
}

fn values(items: &[records::Model]) -> Vec<&str> {
    items.iter().map(|r| r.value.as_str()).collect()
}

#[tokio::test]
async fn test_repository_seed_and_find() {
    let db = setup(3).await;
    let repo = RecordRepository::new(db);

    assert_eq!(repo.count().await.expect("Failed to count"), 3);

    let created = repo.create("extra").await.expect("Failed to create record");
    let found = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to find record")
        .expect("Record should exist");

    assert_eq!(found.value, "extra");
    assert_eq!(repo.count().await.expect("Failed to count"), 4);
}

#[tokio::test]
async fn test_returns_paginated_result() {
    let db = setup(5).await;
    let paginator = default_paginator(&db);

    let page = paginator.paginate(by_value()).await.expect("Failed to paginate");

    assert_eq!(page.total, 5);
    assert_eq!(page.path, "tests/default");
    assert_eq!(
        values(&page.items),
        vec!["Value [1]", "Value [2]", "Value [3]", "Value [4]", "Value [5]"]
    );
}

#[tokio::test]
async fn test_request_source_without_defaults() {
    let db = setup(5).await;
    let paginator = Paginator::new(PaginationDefaults::new());

    let page = paginator
        .paginate(PaginateRequest::new().source(RecordSource::new(db)))
        .await
        .expect("Failed to paginate");

    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 25);
    assert_eq!(page.path, "");
    assert_eq!(page.len(), 5);
}

#[tokio::test]
async fn test_no_source_is_an_error() {
    let paginator = Paginator::<RecordSource>::new(PaginationDefaults::new());

    let result = paginator
        .page(PaginationConfig::new(2, 45, "tests/custom"))
        .await;

    assert!(matches!(result, Err(PaginationError::NoDataSource)));
}

#[tokio::test]
async fn test_single_filter_narrows_total() {
    let db = setup(5).await;
    let paginator = default_paginator(&db);

    let page = paginator
        .paginate(
            RecordRequest::new()
                .filter(|query| query.filter(records::Column::Value.eq("Value [2]"))),
        )
        .await
        .expect("Failed to paginate");

    assert_eq!(page.total, 1);
    assert_eq!(values(&page.items), vec!["Value [2]"]);
}

#[tokio::test]
async fn test_multiple_filters_compose() {
    let db = setup(5).await;
    let paginator = default_paginator(&db);

    let page = paginator
        .paginate(
            RecordRequest::new()
                .filter(|query| {
                    query.filter(records::Column::Value.is_in(["Value [2]", "Value [4]"]))
                })
                .filter(|query| query.order_by_desc(records::Column::Value)),
        )
        .await
        .expect("Failed to paginate");

    assert_eq!(page.total, 2);
    assert_eq!(values(&page.items), vec!["Value [4]", "Value [2]"]);
}

#[tokio::test]
async fn test_second_page_slices_and_links() {
    let db = setup(5).await;
    let paginator = default_paginator(&db);

    let page = paginator
        .paginate(by_value().config(PaginationConfig::new(2, 2, "")))
        .await
        .expect("Failed to paginate");

    assert_eq!(page.path, "tests/default");
    assert_eq!(page.last_page, 3);
    assert_eq!((page.from, page.to), (3, 4));
    assert_eq!(values(&page.items), vec!["Value [3]", "Value [4]"]);
    assert_eq!(
        page.next_page_url.as_deref(),
        Some("tests/default?page=3&per_page=2")
    );
    assert_eq!(
        page.previous_page_url.as_deref(),
        Some("tests/default?page=1&per_page=2")
    );
}

#[tokio::test]
async fn test_out_of_bounds_page() {
    let db = setup(5).await;
    let paginator = Paginator::new(PaginationDefaults::new().with_source(RecordSource::new(db)));

    let result = paginator
        .page(PaginationConfig::new(100, 10, "tests/custom"))
        .await;

    assert!(matches!(
        result,
        Err(PaginationError::PageOutOfBounds {
            page: 100,
            last_page: 1
        })
    ));
}

#[tokio::test]
async fn test_empty_table() {
    let db = setup(0).await;
    let paginator = default_paginator(&db);

    let page = paginator
        .paginate(PaginateRequest::new())
        .await
        .expect("Failed to paginate");

    assert_eq!(page.total, 0);
    assert_eq!(page.last_page, 0);
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_page_serializes_without_absent_links() {
    let db = setup(5).await;
    let paginator = default_paginator(&db);

    let page = paginator.paginate(by_value()).await.expect("Failed to paginate");
    let json = serde_json::to_value(&page).expect("Failed to serialize");
    let object = json.as_object().expect("Page should serialize to an object");

    for key in [
        "first_page_url",
        "last_page_url",
        "next_page_url",
        "previous_page_url",
    ] {
        assert!(!object.contains_key(key), "{key} should be omitted");
    }
    assert_eq!(json["items"][0]["value"], "Value [1]");
    assert_eq!(json["total"], 5);
}
