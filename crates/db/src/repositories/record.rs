//! Record repository for database operations.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};
use tracing::info;
use uuid::Uuid;

use crate::entities::records;

/// Record repository for inserts and lookups.
#[derive(Debug, Clone)]
pub struct RecordRepository {
    db: DatabaseConnection,
}

impl RecordRepository {
    /// Creates a new record repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a record by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<records::Model>, DbErr> {
        records::Entity::find_by_id(id).one(&self.db).await
    }

    /// Counts all records.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        records::Entity::find().count(&self.db).await
    }

    /// Creates a new record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, value: &str) -> Result<records::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let record = records::ActiveModel {
            id: Set(Uuid::now_v7()),
            value: Set(value.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        record.insert(&self.db).await
    }

    /// Inserts `count` records valued `Value [1]` through `Value [count]`.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails.
    pub async fn seed(&self, count: u32) -> Result<Vec<records::Model>, DbErr> {
        let mut created = Vec::with_capacity(count as usize);
        for n in 1..=count {
            created.push(self.create(&format!("Value [{n}]")).await?);
        }

        info!(count, "Seeded records");
        Ok(created)
    }
}
